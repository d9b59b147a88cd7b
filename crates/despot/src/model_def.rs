use crate::{Attributes, Schema};

use std::sync::Arc;

/// Per-model-type configuration: the property schema plus the defaults
/// merged in at construction time.
///
/// Defined once per model type and shared cheaply between instances.
#[derive(Debug, Clone)]
pub struct ModelDef {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    schema: Schema,
    defaults: Attributes,
}

impl ModelDef {
    pub fn new(schema: Schema) -> Self {
        Self::with_defaults(schema, Attributes::new())
    }

    /// Defaults participate in mapping like any other incoming value: a
    /// default that fails its property's type check never reaches a model.
    pub fn with_defaults(schema: Schema, defaults: Attributes) -> Self {
        Self {
            inner: Arc::new(Inner { schema, defaults }),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.inner.schema
    }

    pub fn defaults(&self) -> &Attributes {
        &self.inner.defaults
    }
}

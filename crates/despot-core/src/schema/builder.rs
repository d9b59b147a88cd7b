use super::{PropertyDef, Schema};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Builds a [`Schema`] from property declarations.
///
/// Definitions are normalized and the finished schema is verified before it
/// is handed to callers; a schema that builds successfully never trips the
/// mapper.
#[derive(Debug, Default)]
pub struct Builder {
    props: Vec<(String, PropertyDef)>,
}

impl Builder {
    pub fn new() -> Self {
        Self { props: vec![] }
    }

    /// Declares a property. Accepts a bare [`Type`](crate::attr::Type) as
    /// shorthand for a definition without a foreign key.
    pub fn prop(mut self, name: impl Into<String>, def: impl Into<PropertyDef>) -> Self {
        self.props.push((name.into(), def.into()));
        self
    }

    pub fn build(self) -> Result<Schema> {
        let mut props = IndexMap::with_capacity(self.props.len());

        for (name, def) in self.props {
            if props.insert(name.clone(), def.into_property()).is_some() {
                return Err(Error::invalid_schema(format!(
                    "duplicate property `{name}`"
                )));
            }
        }

        let schema = Schema { props };
        schema.verify()?;

        Ok(schema)
    }
}

use crate::{map_attributes, Attributes, MapOptions, ModelDef, Value};

/// A mutable model instance whose attribute state only ever holds values
/// admitted by its type's property schema.
///
/// Every mutation is routed through [`map_attributes`]; undeclared or
/// mistyped input never reaches the stored attributes.
#[derive(Debug, Clone)]
pub struct Model {
    def: ModelDef,
    attributes: Attributes,
}

impl Model {
    /// Creates an empty instance, populated from the type's defaults.
    pub fn new(def: ModelDef) -> Self {
        Self::with_attrs(def, Attributes::new())
    }

    /// Creates an instance from `attrs`, with the type's defaults filling
    /// in missing keys.
    ///
    /// Construction-time mapping runs with foreign-key resolution active.
    pub fn with_attrs(def: ModelDef, attrs: Attributes) -> Self {
        let mut incoming = attrs;

        for (key, value) in def.defaults().iter() {
            if !incoming.contains(key) {
                incoming.insert(key, value.clone());
            }
        }

        let attributes = map_attributes(
            &incoming,
            def.schema(),
            Some(def.defaults()),
            &MapOptions::INITIALIZE,
        );

        Self { def, attributes }
    }

    /// Applies `attrs` through the mapper with default options.
    pub fn set(&mut self, attrs: Attributes) {
        self.set_with(attrs, &MapOptions::new());
    }

    /// Applies `attrs` under explicit mapping options.
    ///
    /// When `options.unset` is set the mapper is bypassed and the named
    /// keys are removed verbatim; filtering has no meaning for removal.
    pub fn set_with(&mut self, attrs: Attributes, options: &MapOptions) {
        if options.unset {
            for key in attrs.keys() {
                self.attributes.remove(key);
            }
            return;
        }

        let mapped = map_attributes(
            &attrs,
            self.def.schema(),
            Some(self.def.defaults()),
            options,
        );
        self.attributes.extend(mapped);
    }

    /// Replaces the entire attribute state, mapping `attrs` as a
    /// bulk-replace call (foreign-key resolution active).
    pub fn reset(&mut self, attrs: Attributes) {
        self.attributes = map_attributes(
            &attrs,
            self.def.schema(),
            Some(self.def.defaults()),
            &MapOptions::RESET,
        );
    }

    /// Removes a single attribute, bypassing the mapper.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }

    /// Removes all attributes.
    pub fn clear(&mut self) {
        self.attributes.clear();
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attributes.contains(key)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn def(&self) -> &ModelDef {
        &self.def
    }
}

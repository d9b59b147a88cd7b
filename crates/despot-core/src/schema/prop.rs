use crate::attr::Type;

/// A normalized property definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Expected runtime type for the property's value.
    pub ty: Type,

    /// Alternate source attribute consulted when foreign-key resolution is
    /// active and the property's own key is absent or carries the default.
    pub foreign_key: Option<String>,
}

/// A property definition as authored: either a bare type tag or a full
/// definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyDef {
    /// Bare type shorthand
    Type(Type),

    /// Full definition
    Detailed(Property),
}

impl Property {
    pub fn new(ty: Type) -> Self {
        Self {
            ty,
            foreign_key: None,
        }
    }

    pub fn with_foreign_key(mut self, key: impl Into<String>) -> Self {
        self.foreign_key = Some(key.into());
        self
    }

    pub fn has_foreign_key(&self) -> bool {
        self.foreign_key.is_some()
    }
}

impl PropertyDef {
    /// Normalizes the definition. Mapping logic only ever sees the
    /// normalized form.
    pub fn into_property(self) -> Property {
        match self {
            Self::Type(ty) => Property::new(ty),
            Self::Detailed(prop) => prop,
        }
    }

    pub fn ty(&self) -> Type {
        match self {
            Self::Type(ty) => *ty,
            Self::Detailed(prop) => prop.ty,
        }
    }
}

impl From<Type> for PropertyDef {
    fn from(ty: Type) -> Self {
        Self::Type(ty)
    }
}

impl From<Property> for PropertyDef {
    fn from(prop: Property) -> Self {
        Self::Detailed(prop)
    }
}

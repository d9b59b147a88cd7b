mod builder;
pub use builder::Builder;

mod prop;
pub use prop::{Property, PropertyDef};

mod verify;

use indexmap::IndexMap;

/// The declarative set of allowed property names and their expected types
/// for a model type.
///
/// Defined once at model-type definition time and immutable afterwards.
/// Properties iterate in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    props: IndexMap<String, Property>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    pub fn prop(&self, name: &str) -> Option<&Property> {
        self.props.get(name)
    }

    pub fn props(&self) -> impl Iterator<Item = (&str, &Property)> + '_ {
        self.props.iter().map(|(name, prop)| (name.as_str(), prop))
    }
}

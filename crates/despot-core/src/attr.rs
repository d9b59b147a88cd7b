mod attributes;
pub use attributes::Attributes;

#[cfg(feature = "serde")]
mod json;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

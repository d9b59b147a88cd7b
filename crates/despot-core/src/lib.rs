#[macro_use]
mod macros;

pub mod attr;
pub use attr::{Attributes, Type, Value};

mod error;
pub use error::Error;

pub mod map;
pub use map::{map_attributes, MapOptions};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses despot's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

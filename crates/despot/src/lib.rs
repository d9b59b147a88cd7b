mod model;
pub use model::Model;

mod model_def;
pub use model_def::ModelDef;

pub use despot_core::{
    attr::{Attributes, Type, Value},
    attrs,
    map::{map_attributes, MapOptions},
    schema::{Property, PropertyDef, Schema},
    Error, Result,
};

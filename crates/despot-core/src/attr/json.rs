use super::{Attributes, Value};

use serde_json::{Number, Value as Json};

impl From<Json> for Value {
    fn from(src: Json) -> Self {
        match src {
            Json::Null => Self::Null,
            Json::Bool(v) => Self::Bool(v),
            Json::Number(v) => {
                if let Some(n) = v.as_i64() {
                    Self::I64(n)
                } else if let Some(n) = v.as_f64() {
                    Self::F64(n)
                } else {
                    Self::Null
                }
            }
            Json::String(v) => Self::String(v),
            Json::Array(items) => Self::List(items.into_iter().map(Value::from).collect()),
            Json::Object(object) => Self::Object(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Json {
    fn from(src: Value) -> Self {
        match src {
            Value::Null => Self::Null,
            Value::Bool(v) => Self::Bool(v),
            Value::I64(v) => Self::from(v),
            // Non-finite floats have no JSON rendition
            Value::F64(v) => Number::from_f64(v).map_or(Self::Null, Self::Number),
            Value::String(v) => Self::String(v),
            Value::List(items) => Self::Array(items.into_iter().map(Json::from).collect()),
            Value::Object(object) => Self::Object(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Json::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Attributes {
    /// Converts a JSON object into an attribute mapping.
    ///
    /// Returns `None` when the value is not a JSON object.
    pub fn from_json(src: Json) -> Option<Self> {
        match Value::from(src) {
            Value::Object(object) => Some(Self::from(object)),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Json {
        Json::Object(
            self.iter()
                .map(|(key, value)| (key.to_string(), Json::from(value.clone())))
                .collect(),
        )
    }
}

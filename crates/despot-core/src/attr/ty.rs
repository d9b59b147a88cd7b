use std::fmt;

/// A property's expected runtime kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Type {
    /// Boolean value
    #[cfg_attr(feature = "serde", serde(rename = "boolean"))]
    Bool,

    /// Numeric value, integer or float
    Number,

    /// String-keyed object value
    Object,

    /// String value
    String,
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
        })
    }
}

use std::fmt;

use crate::error::NumberParseError;

/// Logical type tag of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit floating point.
    Float,
    /// UTF-8 text.
    String,
    /// Boolean flag.
    Boolean,
}

impl ParamType {
    /// All supported type tags.
    pub const ALL: [Self; 4] = [Self::Integer, Self::Float, Self::String, Self::Boolean];

    /// Canonical display name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "bool",
        }
    }

    /// Parse a type tag from its name, accepting a few common aliases.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "int" | "integer" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "string" | "str" => Some(Self::String),
            "bool" | "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar parameter payload.
///
/// The variant is the type tag, so a payload can never disagree with its
/// declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Integer payload.
    Int(i64),
    /// Floating-point payload.
    Float(f64),
    /// Text payload.
    Str(String),
    /// Boolean payload.
    Bool(bool),
}

impl ParamValue {
    /// The type tag of this payload.
    #[must_use]
    pub const fn param_type(&self) -> ParamType {
        match self {
            Self::Int(_) => ParamType::Integer,
            Self::Float(_) => ParamType::Float,
            Self::Str(_) => ParamType::String,
            Self::Bool(_) => ParamType::Boolean,
        }
    }

    /// Read as an integer.
    ///
    /// Floats truncate toward zero, saturating at the `i64` bounds (NaN
    /// reads as 0). Booleans read as 1 / 0. Strings must be a base-10
    /// integer literal.
    pub fn to_int(&self) -> Result<i64, NumberParseError> {
        match self {
            Self::Int(v) => Ok(*v),
            Self::Float(v) => Ok(*v as i64),
            Self::Bool(v) => Ok(i64::from(*v)),
            Self::Str(s) => Ok(s.parse::<i64>()?),
        }
    }

    /// Read as a float.
    ///
    /// Integers widen, booleans read as 1.0 / 0.0, strings must be a
    /// floating-point literal.
    pub fn to_float(&self) -> Result<f64, NumberParseError> {
        match self {
            Self::Int(v) => Ok(*v as f64),
            Self::Float(v) => Ok(*v),
            Self::Bool(v) => Ok(if *v { 1.0 } else { 0.0 }),
            Self::Str(s) => Ok(s.parse::<f64>()?),
        }
    }

    /// Read as a boolean.
    ///
    /// Numbers are `true` when non-zero. Strings are `true` only for
    /// `"true"`, `"on"` and `"enabled"`; every other string, including
    /// unrecognized ones, reads as `false` without error.
    #[must_use]
    pub fn to_boolean(&self) -> bool {
        match self {
            Self::Int(v) => *v != 0,
            Self::Float(v) => *v != 0.0,
            Self::Bool(v) => *v,
            Self::Str(s) => matches!(s.as_str(), "true" | "on" | "enabled"),
        }
    }

    /// Render as text. Floats use fixed-point notation with six
    /// fractional digits.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Float(v) => format!("{v:.6}"),
            Self::Bool(v) => v.to_string(),
            Self::Str(s) => s.clone(),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// A named, typed scalar owned by an [`Action`](crate::Action).
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: String,
    value: ParamValue,
}

impl Param {
    /// Create a parameter from any convertible payload.
    pub fn new(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create an integer parameter.
    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, ParamValue::Int(value))
    }

    /// Create a float parameter.
    pub fn float(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, ParamValue::Float(value))
    }

    /// Create a string parameter.
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ParamValue::Str(value.into()))
    }

    /// Create a boolean parameter.
    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, ParamValue::Bool(value))
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type tag of the stored payload.
    #[must_use]
    pub fn param_type(&self) -> ParamType {
        self.value.param_type()
    }

    /// The stored payload.
    #[must_use]
    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    /// Consume the parameter, returning its name and payload.
    #[must_use]
    pub fn into_parts(self) -> (String, ParamValue) {
        (self.name, self.value)
    }
}

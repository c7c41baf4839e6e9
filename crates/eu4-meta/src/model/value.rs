//! Decoded payload values.

use std::borrow::Cow;

use crate::model::Control;

/// The value carried by a token once its payload has been decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Structural marker; carries no data.
    Control(Control),
    /// Identifier name, known at tokenization time.
    Id(Cow<'static, str>),
    String(String),
    Integer(i32),
    Boolean(bool),
    Float(f64),
    WideFloat(f64),
}

impl Value {
    /// Returns the integer payload, if this is an integer value.
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

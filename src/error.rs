//! Error returned when a filter's input violates its precondition.

use std::fmt;

/// A filter was called with an argument outside its documented domain.
///
/// This is the only error a filter can produce. The host boundary turns it
/// into a `tera::Error`, which Tera reports as a rendering failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{filter}: {reason}")]
pub struct InvalidArgument {
    /// Name of the filter that rejected its input.
    pub filter: &'static str,
    /// Which precondition failed.
    pub reason: InvalidReason,
}

/// The precondition an [`InvalidArgument`] reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The filtered value is not a string.
    NotAString { found: ValueKind },
    /// A required keyword argument was not supplied.
    MissingArgument { name: &'static str },
    /// The position argument is not an integer.
    NotAnInteger { name: &'static str, found: ValueKind },
    /// The position lies outside `0..length`.
    OutOfRange { position: i128, length: usize },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAString { found } => write!(f, "expected a string, got {found}"),
            Self::MissingArgument { name } => {
                write!(f, "missing required argument `{name}`")
            }
            Self::NotAnInteger { name, found } => {
                write!(f, "argument `{name}` must be an integer, got {found}")
            }
            Self::OutOfRange { position, length } if *length == 0 => write!(
                f,
                "position {position} is out of range: text is empty"
            ),
            Self::OutOfRange { position, length } => write!(
                f,
                "position {position} is out of range: must be between 0 and {}",
                length - 1
            ),
        }
    }
}

/// Coarse type of a dynamic template value, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &tera::Value) -> Self {
        use tera::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

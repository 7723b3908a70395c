//! Tera filters wrapping the typed operations in [`crate::text`].
//!
//! Each filter unboxes the dynamic template value once, rejects anything that
//! is not the expected type, and then calls the typed function.

use std::collections::HashMap;

use tera::{Result, Value};

use crate::error::{InvalidArgument, InvalidReason, ValueKind};
use crate::text;

/// Signature Tera expects for a filter.
pub type FilterFn = fn(&Value, &HashMap<String, Value>) -> Result<Value>;

/// Keyword argument carrying the removal position.
pub const POSITION_ARG: &str = "position";

pub fn to_upper(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = expect_str("to_upper", value)?;
    tracing::trace!(filter = "to_upper", len = s.len(), "Applying filter");
    Ok(Value::String(text::to_upper(s)))
}

pub fn to_lower(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = expect_str("to_lower", value)?;
    tracing::trace!(filter = "to_lower", len = s.len(), "Applying filter");
    Ok(Value::String(text::to_lower(s)))
}

pub fn reverse_text(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = expect_str("reverse_text", value)?;
    tracing::trace!(filter = "reverse_text", len = s.len(), "Applying filter");
    Ok(Value::String(text::reverse_text(s)))
}

/// `{{ text | remove_character(position=N) }}`
pub fn remove_character(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let s = expect_str("remove_character", value)?;
    let position = position_arg(s, args)?;
    tracing::trace!(
        filter = "remove_character",
        len = s.len(),
        position,
        "Applying filter"
    );
    let removed = text::remove_character(s, position).map_err(into_tera)?;
    Ok(Value::String(removed))
}

fn expect_str<'a>(filter: &'static str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| {
        into_tera(InvalidArgument {
            filter,
            reason: InvalidReason::NotAString {
                found: ValueKind::of(value),
            },
        })
    })
}

fn position_arg(text: &str, args: &HashMap<String, Value>) -> Result<i64> {
    let invalid = |reason| {
        into_tera(InvalidArgument {
            filter: "remove_character",
            reason,
        })
    };

    let value = args.get(POSITION_ARG).ok_or_else(|| {
        invalid(InvalidReason::MissingArgument { name: POSITION_ARG })
    })?;

    match value {
        Value::Number(n) if !n.is_f64() => match n.as_i64() {
            Some(position) => Ok(position),
            // Only integers above i64::MAX land here; they can never index a string.
            None => Err(invalid(InvalidReason::OutOfRange {
                position: n.as_u64().map_or(i128::MAX, i128::from),
                length: text.chars().count(),
            })),
        },
        other => Err(invalid(InvalidReason::NotAnInteger {
            name: POSITION_ARG,
            found: ValueKind::of(other),
        })),
    }
}

fn into_tera(err: InvalidArgument) -> tera::Error {
    tera::Error::msg(err.to_string())
}

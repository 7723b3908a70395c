//! Typed text operations backing the template filters.
//!
//! These functions take concrete Rust types, so the only precondition left to
//! check here is the removal position. Type checks on dynamic template values
//! happen once, in [`crate::filters`].
//!
//! Lengths and positions count `char`s (Unicode scalar values), not bytes.

use crate::error::{InvalidArgument, InvalidReason};

/// Map every character to its uppercase form.
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Map every character to its lowercase form.
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Reverse the order of characters. Grapheme clusters are not kept together.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Remove the character at `position`, shifting the rest left by one.
///
/// Fails unless `0 <= position < text.chars().count()`, which also rules out
/// every position on an empty string.
pub fn remove_character(text: &str, position: i64) -> Result<String, InvalidArgument> {
    let out_of_range = || InvalidArgument {
        filter: "remove_character",
        reason: InvalidReason::OutOfRange {
            position: i128::from(position),
            length: text.chars().count(),
        },
    };

    let index = usize::try_from(position).map_err(|_| out_of_range())?;
    let (offset, removed) = text.char_indices().nth(index).ok_or_else(out_of_range)?;

    let mut result = String::with_capacity(text.len() - removed.len_utf8());
    result.push_str(&text[..offset]);
    result.push_str(&text[offset + removed.len_utf8()..]);
    Ok(result)
}

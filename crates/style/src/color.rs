//! Document color normalization.
//!
//! Documents write colors as `0x` followed by eight hex digits. Renderers
//! expect `#` followed by the same eight digits, which CSS reads as
//! `#RRGGBBAA`. The digits are never reordered.

use crate::parsers::{is_hex_prefixed, parse_hex_argb};
use nom::Parser;
use nom::combinator::all_consuming;

/// The result of normalizing one color-like string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorOutcome {
    /// A well-formed document color, rewritten as `#xxxxxxxx`.
    Normalized(String),
    /// `0x`-prefixed but not `0x` + 8 hex digits. Kept as-is.
    Malformed,
    /// Not a document color at all. Kept as-is.
    Unchanged,
}

/// Normalizes a single string value.
pub fn normalize_color(value: &str) -> ColorOutcome {
    match all_consuming(parse_hex_argb).parse(value) {
        Ok((_, digits)) => ColorOutcome::Normalized(format!("#{}", digits)),
        Err(_) if is_hex_prefixed(value) => ColorOutcome::Malformed,
        Err(_) => ColorOutcome::Unchanged,
    }
}

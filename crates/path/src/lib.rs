//! Reference classification and path parsing.
//!
//! A document value is either a literal or one of four reference shapes. The
//! shapes overlap textually (`=..x` starts with `=.`), so classification is an
//! ordered rule list rather than independent patterns:
//!
//! 1. `..` or `=..` prefix: [`RefKind::Local`]
//! 2. `.` or `=.` followed by an uppercase character: [`RefKind::Root`]
//! 3. `~/` prefix: [`RefKind::Tilde`]
//! 4. an object with a `=.builtIn` key: [`RefKind::Eval`]
//! 5. anything else: [`RefKind::Literal`]

pub mod ast;
pub mod builtin;
pub mod error;
mod parser;

// --- Public API ---
pub use ast::{Path, RefKind, Segment};
pub use builtin::{BUILTIN_PREFIX, builtin_call, classify_object};
pub use error::PathError;
pub use parser::to_path;

use serde_json::Value;

/// Classifies a string by the rules listed in the crate docs.
///
/// A sigil with nothing after it (`.`, `=.`, `..`, `=..`) is a literal.
pub fn classify(reference: &str) -> RefKind {
    if let Some(rest) = reference
        .strip_prefix("=..")
        .or_else(|| reference.strip_prefix(".."))
    {
        return if rest.is_empty() {
            RefKind::Literal
        } else {
            RefKind::Local
        };
    }

    let after_sigil = reference
        .strip_prefix("=.")
        .or_else(|| reference.strip_prefix('.'));
    if let Some(rest) = after_sigil
        && rest.chars().next().is_some_and(char::is_uppercase)
    {
        return RefKind::Root;
    }

    if reference.starts_with("~/") {
        return RefKind::Tilde;
    }

    RefKind::Literal
}

/// Classifies any document value: strings by [`classify`], objects by
/// [`classify_object`], everything else as a literal.
pub fn classify_value(value: &Value) -> RefKind {
    match value {
        Value::String(s) => classify(s),
        Value::Object(map) => classify_object(map),
        _ => RefKind::Literal,
    }
}

/// True if `value` is a string that must be dereferenced (root, local or tilde).
pub fn is_reference(value: &Value) -> bool {
    value.as_str().is_some_and(|s| classify(s).is_reference())
}

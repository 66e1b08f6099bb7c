//! The canonical resolvers, one per [`Stage`](crate::pipeline::Stage).

mod alias;
mod color;
mod events;
mod reference;
mod structure;

pub use alias::AliasResolver;
pub use color::ColorResolver;
pub use events::{EventResolver, TRIGGER_KEYS};
pub use reference::ReferenceResolver;
pub use structure::StructureResolver;

use serde_json::Value;

/// Reads `true`/`false` and their string forms.
fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(s) if s == "true" => Some(true),
        Value::String(s) if s == "false" => Some(false),
        _ => None,
    }
}

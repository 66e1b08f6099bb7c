//! Object-level detection of builtin function references.
use pagedoc_types::BuiltinCall;
use serde_json::{Map, Value};

use crate::ast::RefKind;

/// Key prefix marking an invocable builtin function.
pub const BUILTIN_PREFIX: &str = "=.builtIn";

/// [`RefKind::Eval`] if any key of `object` starts with [`BUILTIN_PREFIX`].
pub fn classify_object(object: &Map<String, Value>) -> RefKind {
    if object.keys().any(|key| key.starts_with(BUILTIN_PREFIX)) {
        RefKind::Eval
    } else {
        RefKind::Literal
    }
}

/// Extracts the first builtin call declared by `object`.
///
/// `{ "=.builtIn.string.equal": { dataIn: {...}, dataOut: "..x" } }` yields a
/// call named `string.equal`. A non-map operand leaves both operands empty.
pub fn builtin_call(object: &Map<String, Value>) -> Option<BuiltinCall> {
    let (key, operands) = object
        .iter()
        .find(|(key, _)| key.starts_with(BUILTIN_PREFIX))?;

    let func_name = key[BUILTIN_PREFIX.len()..]
        .trim_start_matches('.')
        .to_string();
    let operand = |name: &str| operands.as_object().and_then(|o| o.get(name)).cloned();

    Some(BuiltinCall {
        func_name,
        data_in: operand("dataIn"),
        data_out: operand("dataOut"),
    })
}

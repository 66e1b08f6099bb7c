use crate::context::ResolveContext;
use crate::pipeline::{Resolver, Stage};
use crate::reference::{Unresolved, is_bound_iterator_path};
use pagedoc_path::classify;
use pagedoc_types::ComponentNode;
use serde_json::{Map, Value};

const DATA_KEY: &str = "dataKey";
const DATA_VALUE: &str = "data-value";

/// Replaces reference-valued keys and style values with what they point to.
///
/// Declared keys are resolved at the top level only; their nested values
/// (action operands, emit blocks) belong to the runtime. Style maps are
/// resolved all the way down.
pub struct ReferenceResolver;

impl Resolver for ReferenceResolver {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn stage(&self) -> Stage {
        Stage::Reference
    }

    fn resolve(&self, node: &mut ComponentNode, ctx: &mut ResolveContext<'_>) {
        let keys: Vec<String> = node.keys.keys().cloned().collect();
        for key in keys {
            if key == DATA_KEY {
                continue;
            }
            let outcome = match node.get(&key) {
                Some(Value::String(text)) => resolve_text(ctx, &key, text),
                _ => None,
            };
            match outcome {
                Some(Ok(value)) => {
                    node.set(&key, value);
                    ctx.mark_dereferenced(key);
                }
                Some(Err(unresolved)) => {
                    ctx.report_unresolved(&key, &unresolved);
                    node.remove(&key);
                }
                None => {}
            }
        }

        resolve_map(&mut node.style, "style", ctx);
        resolve_data_key(node, ctx);
    }
}

/// `None` when `text` is a literal that stays as written.
fn resolve_text(ctx: &ResolveContext<'_>, key: &str, text: &str) -> Option<Result<Value, Unresolved>> {
    if classify(text).is_reference() {
        return Some(ctx.deref_deep(text));
    }
    if ctx.config.is_iterator_key(key) && is_bound_iterator_path(text, &ctx.lists) {
        let resolved = ctx.resolve_iterator_path(text).and_then(|value| match value.as_str() {
            Some(inner) if classify(inner).is_reference() => ctx.deref_deep(inner),
            _ => Ok(value),
        });
        return Some(resolved);
    }
    None
}

fn resolve_map(map: &mut Map<String, Value>, label: &str, ctx: &mut ResolveContext<'_>) {
    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        let qualified = format!("{}.{}", label, key);
        let outcome = match map.get_mut(&key) {
            Some(Value::Object(inner)) => {
                resolve_map(inner, &qualified, ctx);
                None
            }
            Some(Value::String(text)) => resolve_text(ctx, &key, text),
            _ => None,
        };
        match outcome {
            Some(Ok(value)) => {
                map.insert(key, value);
                ctx.mark_dereferenced(qualified);
            }
            Some(Err(unresolved)) => {
                ctx.report_unresolved(&qualified, &unresolved);
                map.shift_remove(&key);
            }
            None => {}
        }
    }
}

/// Resolves the value bound by `dataKey` into `data-value`, keeping `dataKey`.
///
/// A reference that fails is an error. A plain path that misses is not
/// reported: the page's form data is filled in at runtime.
fn resolve_data_key(node: &mut ComponentNode, ctx: &mut ResolveContext<'_>) {
    let Some(data_key) = node.get_str(DATA_KEY).map(str::to_string) else {
        return;
    };
    if data_key.is_empty() {
        return;
    }

    let is_reference = classify(&data_key).is_reference();
    let resolved = if is_reference {
        ctx.deref_deep(&data_key)
    } else if ctx.config.is_iterator_key(DATA_KEY) && is_bound_iterator_path(&data_key, &ctx.lists) {
        ctx.resolve_iterator_path(&data_key)
    } else {
        ctx.deref_deep(&format!("..{}", data_key))
    };

    match resolved {
        Ok(value) => {
            // `dataKey` is re-read on every pass; only a new value counts.
            if node.set(DATA_VALUE, value) {
                ctx.mark_dereferenced(DATA_VALUE);
            }
        }
        Err(unresolved) => {
            node.remove(DATA_VALUE);
            if is_reference {
                ctx.report_unresolved(DATA_KEY, &unresolved);
            } else {
                log::debug!("dataKey '{}' at {} left for the runtime: {}", data_key, ctx.location, unresolved);
            }
        }
    }
}

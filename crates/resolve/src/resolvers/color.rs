use crate::context::ResolveContext;
use crate::pipeline::{Resolver, Stage};
use pagedoc_diagnostics::{DiagnosticCode, Severity};
use pagedoc_style::{ColorOutcome, normalize_color};
use pagedoc_types::ComponentNode;
use serde_json::{Map, Value};

/// Rewrites `0xRRGGBBAA` strings in declared keys and style as `#RRGGBBAA`.
pub struct ColorResolver;

impl Resolver for ColorResolver {
    fn name(&self) -> &'static str {
        "color"
    }

    fn stage(&self) -> Stage {
        Stage::Color
    }

    fn resolve(&self, node: &mut ComponentNode, ctx: &mut ResolveContext<'_>) {
        normalize_map(&mut node.keys, None, false, ctx);
        normalize_map(&mut node.style, Some("style"), true, ctx);
    }
}

fn normalize_map(
    map: &mut Map<String, Value>,
    label: Option<&str>,
    recurse: bool,
    ctx: &mut ResolveContext<'_>,
) {
    for (key, value) in map.iter_mut() {
        let qualified = match label {
            Some(label) => format!("{}.{}", label, key),
            None => key.clone(),
        };
        match value {
            Value::String(text) => match normalize_color(text) {
                ColorOutcome::Normalized(color) => *text = color,
                // Only values a reference produced in this pass are reported.
                ColorOutcome::Malformed if ctx.was_dereferenced(&qualified) => ctx.report_key(
                    DiagnosticCode::MalformedColorValue,
                    Severity::Warning,
                    &qualified,
                    format!("'{}' is not 0x followed by 8 hex digits", text),
                ),
                ColorOutcome::Malformed => {
                    log::warn!("Malformed color '{}' for '{}' at {}", text, qualified, ctx.location);
                }
                ColorOutcome::Unchanged => {}
            },
            Value::Object(inner) if recurse => normalize_map(inner, Some(&qualified), true, ctx),
            _ => {}
        }
    }
}

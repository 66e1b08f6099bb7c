use crate::context::ResolveContext;
use crate::pipeline::{Resolver, Stage};
use pagedoc_diagnostics::{DiagnosticCode, Severity};
use pagedoc_path::is_reference;
use pagedoc_style::dimension::viewport_relative;
use pagedoc_style::{Declaration, Orientation, border, flex, font};
use pagedoc_types::ComponentNode;
use serde_json::Value;

/// Translates layout shorthands in `style` into CSS-like declarations.
///
/// Each shorthand key is replaced by the declarations it expands to, so a
/// second pass finds nothing left to translate.
pub struct StructureResolver;

impl Resolver for StructureResolver {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn stage(&self) -> Stage {
        Stage::Structure
    }

    fn resolve(&self, node: &mut ComponentNode, ctx: &mut ResolveContext<'_>) {
        let keys: Vec<String> = node.style.keys().cloned().collect();
        for key in keys {
            if !is_structural(&key) {
                continue;
            }
            let Some(value) = node.style.get(&key).cloned() else {
                continue;
            };
            if is_reference(&value) {
                ctx.report_key(
                    DiagnosticCode::UnresolvedReference,
                    Severity::Error,
                    &key,
                    format!("'{}' still holds the reference {}", key, value),
                );
                node.remove_style(&key);
                continue;
            }
            translate(node, &key, &value, ctx);
        }
    }
}

fn is_structural(key: &str) -> bool {
    matches!(key, "align" | "axis" | "border" | "textAlign" | "fontSize" | "fontStyle")
        || Orientation::of_key(key).is_some()
}

fn translate(node: &mut ComponentNode, key: &str, value: &Value, ctx: &ResolveContext<'_>) {
    let declarations = match key {
        "align" => value.as_str().and_then(flex::align),
        "axis" => value.as_str().and_then(flex::axis),
        "textAlign" => flex::text_align(value),
        "fontStyle" => value.as_str().and_then(font::font_style),
        "border" => match value.as_object().map(border::border) {
            Some(Ok(declarations)) => Some(declarations),
            Some(Err(e)) => {
                log::warn!("Leaving border at {} as written: {}", ctx.location, e);
                None
            }
            None => None,
        },
        "fontSize" => {
            if let Some(size) = font::font_size(value) {
                node.set_style(key, size);
            }
            return;
        }
        _ => {
            if let Some(orientation) = Orientation::of_key(key)
                && let Some(css) = viewport_relative(value, orientation, ctx.config.viewport.as_ref())
            {
                node.set_style(key, css);
            }
            return;
        }
    };

    match declarations {
        Some(declarations) => replace(node, key, declarations),
        None => log::debug!("Passing '{}: {}' through at {}", key, value, ctx.location),
    }
}

/// Swaps a shorthand for its declarations. A declaration reusing the
/// shorthand's own name (`textAlign`) takes its place.
fn replace(node: &mut ComponentNode, key: &str, declarations: Vec<Declaration>) {
    node.remove_style(key);
    for (property, value) in declarations {
        node.set_style(property, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::resolvers::test_support::{run, run_with};
    use pagedoc_style::Viewport;
    use pagedoc_types::DocumentRoot;
    use serde_json::json;

    #[test]
    fn test_align_and_axis() {
        let (node, _) = run(
            &StructureResolver,
            json!({ "type": "view", "style": { "axis": "horizontal", "align": "centerY" } }),
        );
        assert_eq!(
            node.style,
            json!({
                "display": "flex",
                "flexWrap": "nowrap",
                "flexDirection": "row",
                "alignItems": "center"
            })
            .as_object()
            .cloned()
            .unwrap()
        );
    }

    #[test]
    fn test_fractions_become_viewport_units() {
        let (node, _) = run(
            &StructureResolver,
            json!({ "type": "view", "style": { "top": "0.1", "left": 0.25, "height": "auto", "fontSize": "14" } }),
        );
        assert_eq!(node.style["top"], json!("10vh"));
        assert_eq!(node.style["left"], json!("25vw"));
        assert_eq!(node.style["height"], json!("auto"));
        assert_eq!(node.style["fontSize"], json!("14px"));
    }

    #[test]
    fn test_fractions_with_known_viewport() {
        let config = ResolverConfig::default().with_viewport(Viewport::new(400.0, 800.0));
        let (node, _) = run_with(
            &StructureResolver,
            json!({ "type": "view", "style": { "top": "0.1", "width": "0.5" } }),
            &DocumentRoot::new(),
            &config,
        );
        assert_eq!(node.style["top"], json!("80px"));
        assert_eq!(node.style["width"], json!("200px"));
    }

    #[test]
    fn test_border_and_text_align() {
        let (node, _) = run(
            &StructureResolver,
            json!({
                "type": "label",
                "style": {
                    "border": { "style": "3", "width": "2", "color": "0x00000058" },
                    "textAlign": { "x": "center" },
                    "fontStyle": "bold"
                }
            }),
        );
        assert!(node.style.get("border").is_none());
        assert_eq!(node.style["borderStyle"], json!("solid"));
        assert_eq!(node.style["borderWidth"], json!("2px"));
        assert_eq!(node.style["borderColor"], json!("0x00000058"));
        assert_eq!(node.style["textAlign"], json!("center"));
        assert_eq!(node.style["fontWeight"], json!("bold"));
        assert!(node.style.get("fontStyle").is_none());
    }

    #[test]
    fn test_unknown_values_pass_through() {
        let raw = json!({ "type": "view", "style": {
            "align": "middle",
            "border": { "style": 42 },
            "textAlign": { "x": "middle" }
        } });
        let (node, diagnostics) = run(&StructureResolver, raw.clone());
        assert_eq!(Value::Object(node.style), raw["style"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_leftover_reference_is_an_error() {
        let (node, diagnostics) = run(
            &StructureResolver,
            json!({ "type": "view", "style": { "top": ".Style.top" } }),
        );
        assert!(node.style.get("top").is_none());
        assert!(diagnostics.find_code(DiagnosticCode::UnresolvedReference));
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let (once, _) = run(
            &StructureResolver,
            json!({ "type": "view", "style": { "align": "center", "top": "0.5", "textAlign": "centerX" } }),
        );
        let mut twice = once.clone();
        let root = DocumentRoot::new();
        let config = ResolverConfig::default();
        let mut ctx = ResolveContext::new(&root, "Page1", &config);
        StructureResolver.resolve(&mut twice, &mut ctx);
        assert_eq!(once, twice);
    }
}

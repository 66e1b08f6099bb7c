use super::as_flag;
use crate::context::ResolveContext;
use crate::pipeline::{Resolver, Stage};
use pagedoc_types::ComponentNode;
use serde_json::json;

const HIDDEN_ALIASES: &[&str] = &["hidden", "isHidden"];
const SHADOW: &str = "0px 2px 4px 0px rgba(0, 0, 0, 0.25)";

/// Maps boolean shorthands onto the properties they stand for.
///
/// `hidden`/`isHidden` and `shadow` may be declared as keys or in style; both
/// land in style. `required` stays and is mirrored as `data-required`.
pub struct AliasResolver;

impl Resolver for AliasResolver {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn stage(&self) -> Stage {
        Stage::Alias
    }

    fn resolve(&self, node: &mut ComponentNode, ctx: &mut ResolveContext<'_>) {
        for alias in HIDDEN_ALIASES {
            if let Some(hidden) = take_flag(node, alias) {
                let visibility = if hidden { "hidden" } else { "visible" };
                node.set_style("visibility", json!(visibility));
            }
        }

        if let Some(shadow) = take_flag(node, "shadow") {
            if shadow {
                node.set_style("boxShadow", json!(SHADOW));
            } else {
                node.remove_style("boxShadow");
            }
        }

        if let Some(required) = node.get("required").and_then(as_flag) {
            node.set("data-required", json!(required.to_string()));
        }

        log::trace!("aliases applied at {}", ctx.location);
    }
}

/// Removes a boolean alias from style or keys. Non-boolean values stay put.
fn take_flag(node: &mut ComponentNode, alias: &str) -> Option<bool> {
    let mut flag = None;
    if let Some(value) = node.style.get(alias).and_then(as_flag) {
        node.remove_style(alias);
        flag = Some(value);
    }
    if let Some(value) = node.get(alias).and_then(as_flag) {
        node.remove(alias);
        flag = Some(value);
    }
    flag
}

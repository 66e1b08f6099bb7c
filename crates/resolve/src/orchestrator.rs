//! Drives the pipeline over a page's component tree.
//!
//! Nodes are visited pre-order: a node is fully resolved before its children,
//! so a list consumer's `listObject` is already a sequence when its binding is
//! pushed. The binding covers the consumer's subtree and nothing else.

use crate::config::ResolverConfig;
use crate::context::ResolveContext;
use crate::error::ResolveError;
use crate::pipeline::Pipeline;
use pagedoc_diagnostics::{DiagnosticCode, Diagnostics, Severity};
use pagedoc_types::{ComponentNode, DocumentRoot, NodeLocation};
use serde_json::{Value, json};

const ITERATOR_VAR: &str = "iteratorVar";
const LIST_OBJECT: &str = "listObject";
const LIST_INDEX: &str = "listIndex";

/// The output of one pass: the resolved tree and everything found on the way.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub nodes: Vec<ComponentNode>,
    pub diagnostics: Diagnostics,
}

impl Resolution {
    /// The resolved components as a raw sequence.
    pub fn to_value(&self) -> Value {
        Value::Array(self.nodes.iter().map(ComponentNode::to_value).collect())
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Resolves the `components` of `page` with the standard pipeline.
pub fn resolve_page(
    root: &DocumentRoot,
    page: &str,
    config: &ResolverConfig,
) -> Result<Resolution, ResolveError> {
    resolve_page_with(&Pipeline::standard(), root, page, config)
}

pub fn resolve_page_with(
    pipeline: &Pipeline,
    root: &DocumentRoot,
    page: &str,
    config: &ResolverConfig,
) -> Result<Resolution, ResolveError> {
    let document = root
        .get(page)
        .ok_or_else(|| ResolveError::PageNotFound(page.to_string()))?;
    let Value::Object(document) = document else {
        return Err(ResolveError::InvalidPage {
            page: page.to_string(),
        });
    };
    let components = match document.get("components") {
        Some(Value::Array(components)) => components.as_slice(),
        None => &[],
        Some(_) => {
            return Err(ResolveError::InvalidPage {
                page: page.to_string(),
            });
        }
    };

    let nodes = components
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let component_type = raw.get("type").and_then(Value::as_str).unwrap_or("");
            ComponentNode::from_value_at(raw, &NodeLocation::new(vec![index], component_type))
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::info!("Resolving page '{}' ({} components)", page, nodes.len());
    let resolution = resolve_nodes(pipeline, nodes, root, page, config);
    log::info!(
        "Resolved page '{}': {} node(s), {} diagnostic(s)",
        page,
        resolution.nodes.iter().map(ComponentNode::subtree_len).sum::<usize>(),
        resolution.diagnostics.len()
    );
    Ok(resolution)
}

/// Resolves already-built nodes as the top-level components of `page`.
pub fn resolve_nodes(
    pipeline: &Pipeline,
    mut nodes: Vec<ComponentNode>,
    root: &DocumentRoot,
    page: &str,
    config: &ResolverConfig,
) -> Resolution {
    let mut ctx = ResolveContext::new(root, page, config);
    for (index, node) in nodes.iter_mut().enumerate() {
        let location = NodeLocation::new(vec![index], node.component_type.clone());
        visit(pipeline, node, location, &mut ctx);
    }
    Resolution {
        nodes,
        diagnostics: ctx.diagnostics,
    }
}

fn visit(
    pipeline: &Pipeline,
    node: &mut ComponentNode,
    location: NodeLocation,
    ctx: &mut ResolveContext<'_>,
) {
    log::debug!("Resolving {} on page '{}'", location, ctx.page);
    ctx.enter(location.clone());
    if node.component_type.is_empty() {
        ctx.report(
            DiagnosticCode::MissingComponentType,
            Severity::Error,
            "component has no string 'type'",
        );
    }
    pipeline.run(node, ctx);

    match list_binding(node, ctx) {
        Some((iterator_var, items)) => {
            ctx.lists.push_binding(iterator_var, items);
            expand_list(pipeline, node, &location, ctx);
            ctx.lists.pop_binding();
        }
        None => {
            for (index, child) in node.children.iter_mut().enumerate() {
                let child_location = location.child(index, child.component_type.clone());
                visit(pipeline, child, child_location, ctx);
            }
        }
    }
}

/// The binding a list consumer declares, if it declares a valid one.
fn list_binding(node: &ComponentNode, ctx: &mut ResolveContext<'_>) -> Option<(String, Vec<Value>)> {
    let iterator_var = node.get_str(ITERATOR_VAR)?;
    match node.get(LIST_OBJECT) {
        Some(Value::Array(items)) => Some((iterator_var.to_string(), items.clone())),
        Some(other) => {
            ctx.report_key(
                DiagnosticCode::InvalidListObject,
                Severity::Error,
                LIST_OBJECT,
                format!("listObject for '{}' is not a sequence: {}", iterator_var, other),
            );
            None
        }
        None => {
            ctx.report_key(
                DiagnosticCode::InvalidListObject,
                Severity::Error,
                LIST_OBJECT,
                format!("'{}' has no listObject to iterate", iterator_var),
            );
            None
        }
    }
}

/// Instantiates the consumer's item templates once per list element.
///
/// Children already tagged with `listIndex` are instances from an earlier
/// pass and are re-resolved in place.
fn expand_list(
    pipeline: &Pipeline,
    node: &mut ComponentNode,
    location: &NodeLocation,
    ctx: &mut ResolveContext<'_>,
) {
    let expanded_before =
        !node.children.is_empty() && node.children.iter().all(|c| c.get(LIST_INDEX).is_some());

    if expanded_before {
        for (position, child) in node.children.iter_mut().enumerate() {
            let index = child
                .get(LIST_INDEX)
                .and_then(Value::as_u64)
                .map_or(position, |i| i as usize);
            ctx.lists.set_index(index);
            let child_location = location.child(position, child.component_type.clone());
            visit(pipeline, child, child_location, ctx);
        }
        return;
    }

    let len = ctx.lists.bindings().last().map_or(0, |b| b.list_object.len());
    let templates = std::mem::take(&mut node.children);
    let mut instances = Vec::with_capacity(len * templates.len());
    for index in 0..len {
        for template in &templates {
            ctx.lists.set_index(index);
            let mut instance = template.clone();
            instance.set(LIST_INDEX, json!(index));
            let child_location = location.child(instances.len(), instance.component_type.clone());
            visit(pipeline, &mut instance, child_location, ctx);
            instances.push(instance);
        }
    }
    log::debug!(
        "Expanded {} template(s) over {} item(s) at {}",
        templates.len(),
        len,
        location
    );
    node.children = instances;
}

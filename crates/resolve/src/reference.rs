//! Dereferencing reference strings against the document root.
//!
//! Every function here is pure: the outcome depends only on the reference and
//! the [`Scope`] it is resolved in.

use crate::config::ResolverConfig;
use crate::list::ListContext;
use pagedoc_diagnostics::DiagnosticCode;
use pagedoc_path::{RefKind, Segment, classify, to_path};
use pagedoc_types::DocumentRoot;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Everything a reference may be resolved against.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub root: &'a DocumentRoot,
    /// The current page, the starting point of local references.
    pub page: &'a str,
    pub lists: &'a ListContext,
    pub config: &'a ResolverConfig,
}

/// Why a reference produced no value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Unresolved {
    #[error("document '{0}' is not in the document root")]
    UnknownDocument(String),

    #[error("'{reference}' has no key '{key}'")]
    MissingKey { reference: String, key: String },

    #[error("'{reference}' indexes {index} past a sequence of length {len}")]
    IndexOutOfBounds {
        reference: String,
        index: usize,
        len: usize,
    },

    #[error("'{reference}' walks into a scalar at segment '{segment}'")]
    NotAContainer { reference: String, segment: String },

    #[error("'{reference}' is not a valid path: {message}")]
    InvalidPath { reference: String, message: String },

    #[error("reference cycle: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },

    #[error("'{reference}' did not settle within {max_depth} hops")]
    DepthExceeded { reference: String, max_depth: usize },

    #[error("'{0}' needs a base URL but none is configured")]
    MissingBaseUrl(String),

    #[error("iterator '{0}' has no active list binding")]
    UnboundIterator(String),

    #[error("'{0}' is not a reference")]
    NotAReference(String),
}

impl Unresolved {
    /// The diagnostic code a failure is reported under.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            Unresolved::UnknownDocument(_)
            | Unresolved::MissingKey { .. }
            | Unresolved::NotAReference(_) => DiagnosticCode::UnresolvedReference,
            Unresolved::IndexOutOfBounds { .. }
            | Unresolved::NotAContainer { .. }
            | Unresolved::InvalidPath { .. } => DiagnosticCode::InvalidPathSegment,
            Unresolved::Cycle { .. } => DiagnosticCode::CycleDetected,
            Unresolved::DepthExceeded { .. } => DiagnosticCode::DepthLimitExceeded,
            Unresolved::MissingBaseUrl(_) => DiagnosticCode::MissingBaseUrl,
            Unresolved::UnboundIterator(_) => DiagnosticCode::UnresolvedIterator,
        }
    }
}

/// Resolves one hop of a root, local or tilde reference.
///
/// The result may itself be a reference; see [`deref_deep`].
pub fn deref(reference: &str, scope: &Scope<'_>) -> Result<Value, Unresolved> {
    let kind = classify(reference);
    match kind {
        RefKind::Tilde => expand_tilde(reference, scope.config.base_url.as_deref()),
        RefKind::Root | RefKind::Local => {
            let path = to_path(reference).map_err(|e| Unresolved::InvalidPath {
                reference: reference.to_string(),
                message: e.to_string(),
            })?;
            let document = match kind {
                RefKind::Root => path.document().unwrap_or_default(),
                _ => scope.page,
            };
            let start = scope
                .root
                .get(document)
                .ok_or_else(|| Unresolved::UnknownDocument(document.to_string()))?;
            walk(start, path.walk_segments(), reference, scope.lists).cloned()
        }
        RefKind::Eval | RefKind::Literal => Err(Unresolved::NotAReference(reference.to_string())),
    }
}

/// Follows references until a non-reference value is reached.
///
/// Fails with [`Unresolved::Cycle`] if a reference repeats on the chain and
/// with [`Unresolved::DepthExceeded`] past `config.max_depth` hops.
pub fn deref_deep(reference: &str, scope: &Scope<'_>) -> Result<Value, Unresolved> {
    let max_depth = scope.config.max_depth;
    let mut chain = vec![reference.to_string()];
    let mut visited: HashSet<String> = HashSet::from([reference.to_string()]);

    let mut current = reference.to_string();
    loop {
        if chain.len() > max_depth {
            return Err(Unresolved::DepthExceeded {
                reference: reference.to_string(),
                max_depth,
            });
        }
        let value = deref(&current, scope)?;
        let next = match value.as_str() {
            Some(next) if classify(next).is_reference() => next.to_string(),
            _ => return Ok(value),
        };
        chain.push(next.clone());
        if !visited.insert(next.clone()) {
            return Err(Unresolved::Cycle { chain });
        }
        log::trace!("'{}' -> '{}'", current, next);
        current = next;
    }
}

/// Walks an iterator path (`item.address.0`) from the innermost binding of
/// its first segment.
pub fn resolve_iterator_path(path: &str, lists: &ListContext) -> Result<Value, Unresolved> {
    let parsed = to_path(path).map_err(|e| Unresolved::InvalidPath {
        reference: path.to_string(),
        message: e.to_string(),
    })?;
    let Some((head, rest)) = parsed.segments.split_first() else {
        return Err(Unresolved::UnboundIterator(path.to_string()));
    };
    let name = head.as_key();
    let start = lists
        .resolve_iterator_var(&name)
        .ok_or_else(|| Unresolved::UnboundIterator(name.to_string()))?;
    walk(start, rest, path, lists).cloned()
}

/// True if `path` is an iterator path whose variable is currently bound.
pub fn is_bound_iterator_path(path: &str, lists: &ListContext) -> bool {
    classify(path) == RefKind::Literal
        && path
            .split('.')
            .next()
            .is_some_and(|head| !head.is_empty() && lists.is_bound(head))
}

fn expand_tilde(reference: &str, base_url: Option<&str>) -> Result<Value, Unresolved> {
    let base_url = base_url.ok_or_else(|| Unresolved::MissingBaseUrl(reference.to_string()))?;
    let rest = reference.strip_prefix("~/").unwrap_or(reference);
    Ok(Value::String(format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        rest.trim_start_matches('/')
    )))
}

/// Walks `segments` from `start`.
///
/// Inside a sequence, a key naming a bound iterator variable selects that
/// binding's current element.
fn walk<'v>(
    start: &'v Value,
    segments: &[Segment],
    reference: &str,
    lists: &ListContext,
) -> Result<&'v Value, Unresolved> {
    let mut current = start;
    for segment in segments {
        current = match (current, segment) {
            (Value::Object(map), segment) => {
                let key = segment.as_key();
                map.get(key.as_ref()).ok_or_else(|| Unresolved::MissingKey {
                    reference: reference.to_string(),
                    key: key.into_owned(),
                })?
            }
            (Value::Array(items), Segment::Index(index)) => index_into(items, *index, reference)?,
            (Value::Array(items), Segment::Key(name)) if lists.is_bound(name) => {
                let index = lists.binding(name).map(|b| b.index).unwrap_or_default();
                index_into(items, index, reference)?
            }
            (_, segment) => {
                return Err(Unresolved::NotAContainer {
                    reference: reference.to_string(),
                    segment: segment.to_string(),
                });
            }
        };
    }
    Ok(current)
}

fn index_into<'v>(items: &'v [Value], index: usize, reference: &str) -> Result<&'v Value, Unresolved> {
    items.get(index).ok_or_else(|| Unresolved::IndexOutOfBounds {
        reference: reference.to_string(),
        index,
        len: items.len(),
    })
}

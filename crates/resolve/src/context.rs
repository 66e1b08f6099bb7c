use crate::config::ResolverConfig;
use crate::list::ListContext;
use crate::reference::{self, Scope, Unresolved};
use pagedoc_diagnostics::{Diagnostic, DiagnosticCode, Diagnostics, Severity};
use pagedoc_types::{DocumentRoot, NodeLocation};
use serde_json::Value;

/// Mutable state threaded through one resolution pass.
///
/// The root and config are shared and read-only; list bindings and
/// diagnostics belong to this pass alone.
#[derive(Debug)]
pub struct ResolveContext<'a> {
    pub root: &'a DocumentRoot,
    pub page: &'a str,
    pub config: &'a ResolverConfig,
    pub lists: ListContext,
    pub diagnostics: Diagnostics,
    /// The node currently being resolved.
    pub location: NodeLocation,
    /// Qualified keys of the current node (`text`, `style.color`) whose value
    /// came from a reference in this pass.
    dereferenced: Vec<String>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(root: &'a DocumentRoot, page: &'a str, config: &'a ResolverConfig) -> Self {
        Self {
            root,
            page,
            config,
            lists: ListContext::new(),
            diagnostics: Diagnostics::new(),
            location: NodeLocation::default(),
            dereferenced: Vec::new(),
        }
    }

    /// Moves on to the node at `location`.
    pub fn enter(&mut self, location: NodeLocation) {
        self.location = location;
        self.dereferenced.clear();
    }

    /// Records that `key` of the current node was filled in from a reference.
    pub fn mark_dereferenced(&mut self, key: impl Into<String>) {
        self.dereferenced.push(key.into());
    }

    /// True if `key`, or a map containing it, was filled in from a reference
    /// on the current node.
    pub fn was_dereferenced(&self, key: &str) -> bool {
        self.dereferenced.iter().any(|marked| {
            key.strip_prefix(marked.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
        })
    }

    pub fn scope(&self) -> Scope<'_> {
        Scope {
            root: self.root,
            page: self.page,
            lists: &self.lists,
            config: self.config,
        }
    }

    pub fn deref_deep(&self, reference: &str) -> Result<Value, Unresolved> {
        reference::deref_deep(reference, &self.scope())
    }

    pub fn resolve_iterator_path(&self, path: &str) -> Result<Value, Unresolved> {
        reference::resolve_iterator_path(path, &self.lists)
    }

    /// Records a finding against the current node.
    pub fn report(&mut self, code: DiagnosticCode, severity: Severity, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(code, severity, message, self.location.clone(), self.page);
        self.diagnostics.add(diagnostic);
    }

    /// Records a finding against a declared key of the current node.
    pub fn report_key(
        &mut self,
        code: DiagnosticCode,
        severity: Severity,
        key: &str,
        message: impl Into<String>,
    ) {
        let diagnostic = Diagnostic::new(code, severity, message, self.location.clone(), self.page)
            .with_key(key);
        self.diagnostics.add(diagnostic);
    }

    /// Records a failed dereference as an error on `key`.
    pub fn report_unresolved(&mut self, key: &str, unresolved: &Unresolved) {
        self.report_key(unresolved.code(), Severity::Error, key, unresolved.to_string());
    }
}

//! Structured findings of a resolution pass.
//!
//! A [`Diagnostics`] collector is created per pass and only ever appended to.
//! Iteration runs most-recently-added first, so checks like "did the last run
//! report an unresolved reference" stay cheap.

use pagedoc_types::NodeLocation;
use serde::Serialize;
use std::fmt;

/// Severity of a finding. Closed set; unknown inputs map to `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Maps a numeric severity code: `0` error, `1` warning, anything else info.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Severity::Error,
            1 => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Maps a symbolic severity name (case-insensitive); anything unknown is info.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" | "err" | "fatal" => Severity::Error,
            "warning" | "warn" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCode {
    /// A reference could not be traced to a value.
    UnresolvedReference,
    /// Deep resolution revisited a reference already on its chain.
    CycleDetected,
    /// A path segment could not be applied to the value it walked into.
    InvalidPathSegment,
    /// A `0x`-prefixed color did not match `0x` + 8 hex digits.
    MalformedColorValue,
    /// Deep resolution exceeded the configured depth.
    DepthLimitExceeded,
    /// An iterator path named a variable with no active binding.
    UnresolvedIterator,
    /// A list consumer's `listObject` is not a sequence.
    InvalidListObject,
    /// A trigger entry could not be turned into an action descriptor.
    InvalidAction,
    /// A `~/` reference was used without a configured base URL.
    MissingBaseUrl,
    /// A component has no string `type`.
    MissingComponentType,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::UnresolvedReference => "UnresolvedReference",
            DiagnosticCode::CycleDetected => "CycleDetected",
            DiagnosticCode::InvalidPathSegment => "InvalidPathSegment",
            DiagnosticCode::MalformedColorValue => "MalformedColorValue",
            DiagnosticCode::DepthLimitExceeded => "DepthLimitExceeded",
            DiagnosticCode::UnresolvedIterator => "UnresolvedIterator",
            DiagnosticCode::InvalidListObject => "InvalidListObject",
            DiagnosticCode::InvalidAction => "InvalidAction",
            DiagnosticCode::MissingBaseUrl => "MissingBaseUrl",
            DiagnosticCode::MissingComponentType => "MissingComponentType",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding, attached to a node and page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    pub node: NodeLocation,
    pub page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Diagnostic {
    pub fn new(
        code: DiagnosticCode,
        severity: Severity,
        message: impl Into<String>,
        node: NodeLocation,
        page: impl Into<String>,
    ) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            node,
            page: page.into(),
            key: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// True if `needle` equals the code name or occurs in the message.
    pub fn matches(&self, needle: &str) -> bool {
        self.code.as_str() == needle || self.message.contains(needle)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}: {}", self.severity, self.code, self.page, self.message)?;
        if let Some(key) = &self.key {
            write!(f, " (key '{}'", key)?;
            write!(f, " at {})", self.node)
        } else {
            write!(f, " (at {})", self.node)
        }
    }
}

/// Append-only collector for one resolution pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finding and mirrors it to the log at its severity.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => log::error!("{}", diagnostic),
            Severity::Warning => log::warn!("{}", diagnostic),
            Severity::Info => log::debug!("{}", diagnostic),
        }
        self.entries.push(diagnostic);
    }

    /// True if any finding matches a code name or message substring.
    pub fn find(&self, code_or_message: &str) -> bool {
        self.iter().any(|d| d.matches(code_or_message))
    }

    pub fn find_code(&self, code: DiagnosticCode) -> bool {
        self.iter().any(|d| d.code == code)
    }

    /// Most-recently-added first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Diagnostic> + ExactSizeIterator {
        self.entries.iter().rev()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|d| d.severity == severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves every entry of `other` into `self`, keeping their order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    /// Entries in stack order (most recent first).
    pub fn into_vec(self) -> Vec<Diagnostic> {
        let mut entries = self.entries;
        entries.reverse();
        entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, Diagnostic>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(code: DiagnosticCode, severity: Severity, message: &str) -> Diagnostic {
        Diagnostic::new(code, severity, message, NodeLocation::default(), "Page1")
    }

    #[test]
    fn test_iteration_is_most_recent_first() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add(diag(DiagnosticCode::UnresolvedReference, Severity::Error, "first"));
        diagnostics.add(diag(DiagnosticCode::MalformedColorValue, Severity::Warning, "second"));
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
        let messages: Vec<_> = diagnostics.into_vec().into_iter().map(|d| d.message).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn test_find_by_code_or_message() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add(diag(
            DiagnosticCode::CycleDetected,
            Severity::Error,
            "reference '.A.b' refers back to itself",
        ));
        assert!(diagnostics.find("CycleDetected"));
        assert!(diagnostics.find("refers back"));
        assert!(!diagnostics.find("UnresolvedReference"));
        assert!(diagnostics.find_code(DiagnosticCode::CycleDetected));
    }

    #[test]
    fn test_severity_mapping_is_permissive() {
        assert_eq!(Severity::from_code(0), Severity::Error);
        assert_eq!(Severity::from_code(1), Severity::Warning);
        assert_eq!(Severity::from_code(2), Severity::Info);
        assert_eq!(Severity::from_code(-7), Severity::Info);
        assert_eq!(Severity::from_code(99), Severity::Info);
        assert_eq!(Severity::from_name("WARN"), Severity::Warning);
        assert_eq!(Severity::from_name("error"), Severity::Error);
        assert_eq!(Severity::from_name("critical-ish"), Severity::Info);
    }

    #[test]
    fn test_counts() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.has_errors());
        diagnostics.add(diag(DiagnosticCode::MalformedColorValue, Severity::Warning, "w"));
        assert!(!diagnostics.has_errors());
        diagnostics.add(diag(DiagnosticCode::InvalidAction, Severity::Error, "e"));
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.count(Severity::Warning), 1);
        assert_eq!(diagnostics.count(Severity::Error), 1);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_display_and_serialize() {
        let d = diag(DiagnosticCode::UnresolvedReference, Severity::Error, "missing")
            .with_key("text");
        assert_eq!(
            d.to_string(),
            "error[UnresolvedReference] Page1: missing (key 'text' at /)"
        );
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["severity"], "error");
        assert_eq!(value["code"], "UnresolvedReference");
        assert_eq!(value["key"], "text");
    }
}

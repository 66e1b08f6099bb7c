//! Resolution engine for low-code page documents.
//!
//! A page document declares a tree of components whose keys may point at
//! other documents (`.Doc.path`), at the page itself (`..path`), at a base URL
//! (`~/path`) or at the current element of an enclosing list (`item.name`).
//! The engine resolves all of them, normalizes styles and wires triggers, and
//! reports whatever it could not resolve as diagnostics.
//!
//! The work is split across crates:
//!
//! - `pagedoc-types`: the document root, component nodes and action descriptors
//! - `pagedoc-path`: reference classification and path parsing
//! - `pagedoc-style`: pure style value conversions
//! - `pagedoc-diagnostics`: severities, codes and the per-pass collector
//! - `pagedoc-resolve`: reference resolution, list context, pipeline and orchestrator
//!
//! This crate ties them together behind [`EngineBuilder`].

pub mod engine;
pub mod error;
pub mod loader;
pub mod report;

pub use engine::{Engine, EngineBuilder};
pub use error::EngineError;
pub use loader::{load_document_file, load_document_files};

// Re-export the building blocks so callers need a single dependency.
pub use pagedoc_diagnostics::{Diagnostic, DiagnosticCode, Diagnostics, Severity};
pub use pagedoc_path::{Path, RefKind, Segment, classify, to_path};
pub use pagedoc_resolve::{
    Pipeline, Resolution, ResolveContext, ResolveError, Resolver, ResolverConfig, Stage,
    Unresolved,
};
pub use pagedoc_style::Viewport;
pub use pagedoc_types::{Action, ActionChain, BuiltinCall, ComponentNode, DocumentRoot, NodeLocation};

// src/error.rs
use pagedoc_resolve::ResolveError;
use pagedoc_types::DocumentError;
use thiserror::Error;

/// A comprehensive error type for loading documents and resolving pages.
///
/// Recoverable findings inside a page are diagnostics, not errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Document loading failed: {0}")]
    Document(#[from] DocumentError),

    #[error("Resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Engine is invalid or missing required parts: {0}")]
    Config(String),
}

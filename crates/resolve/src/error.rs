use pagedoc_types::DocumentError;
use thiserror::Error;

/// Fatal errors that stop a page from being resolved at all.
///
/// Anything recoverable inside a page is a diagnostic instead.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Page '{0}' not found in the document root")]
    PageNotFound(String),

    #[error("Page '{page}' must be a map with a 'components' sequence")]
    InvalidPage { page: String },

    #[error("Invalid component: {0}")]
    InvalidComponent(#[from] DocumentError),
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Path parse error in '{0}': {1}")]
    Parse(String, String),

    #[error("Reference '{0}' has no path after its sigil")]
    EmptyPath(String),
}

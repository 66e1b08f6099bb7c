use thiserror::Error;

/// Errors raised while building the document model.
///
/// These are contract violations of the input (unparseable YAML, a component
/// that is not a map). Unresolvable data inside a well-formed document is never
/// reported here; it surfaces as a diagnostic during resolution.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("YAML parsing error in document '{name}': {source}")]
    Yaml {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Document '{0}' must have a single top-level key to be inserted by its own name")]
    UnnamedDocument(String),

    #[error("Component at {location} is not a map")]
    InvalidComponent { location: String },

    #[error("'children' of component at {location} must be a sequence")]
    InvalidChildren { location: String },
}

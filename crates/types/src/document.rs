//! The document root: every loaded page and data document, keyed by name.

use crate::error::DocumentError;
use serde_json::{Map, Value};

/// An ordered mapping from document name to document tree.
///
/// Names are unique. Insertion order is preserved; re-inserting an existing
/// name replaces the tree but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentRoot {
    documents: Map<String, Value>,
}

impl DocumentRoot {
    /// Creates an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) a document, returning the previous tree if any.
    pub fn insert(&mut self, name: impl Into<String>, document: Value) -> Option<Value> {
        self.documents.insert(name.into(), document)
    }

    /// Parses YAML source and inserts it under `name`.
    pub fn insert_yaml(&mut self, name: &str, source: &str) -> Result<(), DocumentError> {
        let document: Value = serde_yaml::from_str(source).map_err(|source| DocumentError::Yaml {
            name: name.to_string(),
            source,
        })?;
        log::debug!("Loaded document '{}'", name);
        self.insert(name, document);
        Ok(())
    }

    /// Parses YAML source of the form `{Name: {...}}` and inserts the inner
    /// tree under its own top-level key. Returns the name used.
    ///
    /// `origin` only labels errors (typically the file path).
    pub fn insert_named_yaml(&mut self, origin: &str, source: &str) -> Result<String, DocumentError> {
        let document: Value = serde_yaml::from_str(source).map_err(|source| DocumentError::Yaml {
            name: origin.to_string(),
            source,
        })?;
        match document {
            Value::Object(map) if map.len() == 1 => {
                let Some((name, tree)) = map.into_iter().next() else {
                    return Err(DocumentError::UnnamedDocument(origin.to_string()));
                };
                log::debug!("Loaded document '{}' from {}", name, origin);
                self.insert(name.clone(), tree);
                Ok(name)
            }
            _ => Err(DocumentError::UnnamedDocument(origin.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.documents.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    /// Document names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.documents.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Documents, most-recently-added first.
    pub fn iter_recent_first(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.documents.iter().rev().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<(String, Value)> for DocumentRoot {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl From<Value> for DocumentRoot {
    /// Builds a root from a map value; any non-map value yields an empty root.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(documents) => Self { documents },
            _ => Self::default(),
        }
    }
}

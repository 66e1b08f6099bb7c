// src/loader.rs
//! Reading document files into a [`DocumentRoot`].
use crate::error::EngineError;
use pagedoc_types::{DocumentError, DocumentRoot};
use std::fs;
use std::io;
use std::path::Path;

/// Loads one YAML (or JSON) file into `root` and returns the document name.
///
/// A file holding a single top-level key `{Name: {...}}` is stored under that
/// key; any other file is stored under its file stem.
pub fn load_document_file(root: &mut DocumentRoot, path: &Path) -> Result<String, EngineError> {
    let source = fs::read_to_string(path).map_err(|e| {
        EngineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read document from '{}': {}", path.display(), e),
        ))
    })?;
    let origin = path.display().to_string();

    match root.insert_named_yaml(&origin, &source) {
        Ok(name) => Ok(name),
        Err(DocumentError::UnnamedDocument(_)) => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    EngineError::Config(format!("Cannot name the document in '{}'", origin))
                })?;
            root.insert_yaml(stem, &source)?;
            Ok(stem.to_string())
        }
        Err(e) => Err(e.into()),
    }
}

/// Loads every file in order; later files replace earlier documents of the same name.
pub fn load_document_files<P: AsRef<Path>>(paths: &[P]) -> Result<DocumentRoot, EngineError> {
    let mut root = DocumentRoot::new();
    for path in paths {
        let name = load_document_file(&mut root, path.as_ref())?;
        log::info!("Loaded '{}' from {}", name, path.as_ref().display());
    }
    Ok(root)
}

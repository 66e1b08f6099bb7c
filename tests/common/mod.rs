pub mod assertions;
pub mod fixtures;

use pagedoc::{EngineBuilder, EngineError, Resolution, ResolverConfig};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Resolve `page` from a root given as `{ DocName: {...}, ... }` with default settings.
pub fn resolve(root: Value, page: &str) -> Result<Resolution, EngineError> {
    resolve_with(root, page, ResolverConfig::default())
}

/// Resolve `page` from a root given as a single map, with explicit settings.
pub fn resolve_with(root: Value, page: &str, config: ResolverConfig) -> Result<Resolution, EngineError> {
    let mut builder = EngineBuilder::new().with_config(config);
    if let Value::Object(documents) = root {
        for (name, document) in documents {
            builder = builder.with_document(name, document);
        }
    }
    builder.build()?.resolve_page(page)
}

// src/engine/builder.rs
use super::Engine;
use crate::error::EngineError;
use crate::loader::load_document_file;
use pagedoc_resolve::{Pipeline, Resolver, ResolverConfig};
use pagedoc_style::Viewport;
use pagedoc_types::DocumentRoot;
use serde_json::Value;
use std::path::Path;

/// A builder for creating an [`Engine`].
#[derive(Debug, Default)]
pub struct EngineBuilder {
    root: DocumentRoot,
    config: ResolverConfig,
    pipeline: Option<Pipeline>,
}

impl EngineBuilder {
    /// Creates a new `EngineBuilder` with an empty root and default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds (or replaces) a parsed document.
    pub fn with_document(mut self, name: impl Into<String>, document: Value) -> Self {
        self.root.insert(name, document);
        self
    }

    /// Adds every document of an existing root, after those already added.
    pub fn with_documents(mut self, root: DocumentRoot) -> Self {
        for (name, document) in root.iter() {
            self.root.insert(name, document.clone());
        }
        self
    }

    /// Adds a document from YAML source.
    pub fn with_yaml(mut self, name: &str, source: &str) -> Result<Self, EngineError> {
        self.root.insert_yaml(name, source)?;
        Ok(self)
    }

    /// Loads a document file; see [`crate::loader::load_document_file`] for naming.
    pub fn with_document_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, EngineError> {
        load_document_file(&mut self.root, path.as_ref())?;
        Ok(self)
    }

    /// Replaces the whole resolver configuration.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the URL substituted for `~/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Limits how many hops deep reference resolution follows.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Converts viewport-relative sizes to pixels for this viewport.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.config.viewport = Some(viewport);
        self
    }

    /// Adds a resolver on top of the standard pipeline. It runs in its stage,
    /// after the standard resolver of that stage.
    pub fn with_resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        let pipeline = self.pipeline.take().unwrap_or_else(Pipeline::standard);
        self.pipeline = Some(pipeline.with(resolver));
        self
    }

    /// Consumes the builder and creates the `Engine`.
    pub fn build(self) -> Result<Engine, EngineError> {
        if self.root.is_empty() {
            return Err(EngineError::Config(
                "No documents have been loaded. Use `with_document` or `with_document_file`."
                    .to_string(),
            ));
        }
        if self.config.max_depth == 0 {
            return Err(EngineError::Config("max_depth must be at least 1".to_string()));
        }
        let pipeline = self.pipeline.unwrap_or_else(Pipeline::standard);
        log::info!(
            "Engine ready: {} document(s), resolvers [{}]",
            self.root.len(),
            pipeline.names().join(", ")
        );
        Ok(Engine::new(self.root, self.config, pipeline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedoc_resolve::{ResolveContext, Stage};
    use pagedoc_types::ComponentNode;
    use serde_json::json;

    struct Stamp;

    impl Resolver for Stamp {
        fn name(&self) -> &'static str {
            "stamp"
        }

        fn stage(&self) -> Stage {
            Stage::Reference
        }

        fn resolve(&self, node: &mut ComponentNode, _ctx: &mut ResolveContext<'_>) {
            node.set("stamped", json!(true));
        }
    }

    #[test]
    fn test_build_requires_documents() {
        assert!(matches!(EngineBuilder::new().build(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_builder_settings_reach_config() {
        let engine = EngineBuilder::new()
            .with_yaml("Home", "components: []\n")
            .unwrap()
            .with_base_url("https://x.test")
            .with_max_depth(8)
            .with_viewport(Viewport::new(375.0, 667.0))
            .build()
            .unwrap();
        assert_eq!(engine.config().base_url.as_deref(), Some("https://x.test"));
        assert_eq!(engine.config().max_depth, 8);
        assert!(engine.root().contains("Home"));
    }

    #[test]
    fn test_custom_resolver_runs_after_standard_stage() {
        let engine = EngineBuilder::new()
            .with_document("Home", json!({ "components": [{ "type": "view" }] }))
            .with_resolver(Stamp)
            .build()
            .unwrap();
        assert_eq!(
            engine.pipeline().names(),
            vec!["reference", "stamp", "structure", "color", "alias", "events"]
        );
        let resolution = engine.resolve_page("Home").unwrap();
        assert_eq!(resolution.nodes[0].get("stamped"), Some(&json!(true)));
    }

    #[test]
    fn test_with_documents_keeps_order() {
        let mut root = DocumentRoot::new();
        root.insert("B", json!({}));
        root.insert("C", json!({}));
        let engine = EngineBuilder::new()
            .with_document("A", json!({}))
            .with_documents(root)
            .build()
            .unwrap();
        assert_eq!(engine.root().names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }
}

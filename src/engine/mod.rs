// src/engine/mod.rs
//! The resolution engine: a loaded document root plus a configured pipeline.
//!
//! # Example
//!
//! ```ignore
//! use pagedoc::EngineBuilder;
//!
//! let engine = EngineBuilder::new()
//!     .with_document_file("SignIn.yaml")?
//!     .with_base_url("https://cdn.example.com/")
//!     .build()?;
//!
//! let resolution = engine.resolve_page("SignIn")?;
//! ```

mod builder;

pub use builder::EngineBuilder;

use crate::error::EngineError;
use pagedoc_resolve::{Pipeline, Resolution, ResolverConfig, resolve_page_with};
use pagedoc_types::DocumentRoot;

/// Resolves pages against a fixed document root.
///
/// The root is read-only once built, so any number of pages may be resolved
/// concurrently; each pass owns its own list context and diagnostics.
#[derive(Debug)]
pub struct Engine {
    root: DocumentRoot,
    config: ResolverConfig,
    pipeline: Pipeline,
}

impl Engine {
    pub(crate) fn new(root: DocumentRoot, config: ResolverConfig, pipeline: Pipeline) -> Self {
        Self {
            root,
            config,
            pipeline,
        }
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn root(&self) -> &DocumentRoot {
        &self.root
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Resolves one page.
    pub fn resolve_page(&self, page: &str) -> Result<Resolution, EngineError> {
        Ok(resolve_page_with(&self.pipeline, &self.root, page, &self.config)?)
    }

    /// Resolves several pages, in parallel when the `rayon` feature is on.
    ///
    /// Results come back in the order the pages were given.
    pub fn resolve_pages<S>(&self, pages: &[S]) -> Vec<(String, Result<Resolution, EngineError>)>
    where
        S: AsRef<str> + Sync,
    {
        let resolve = |page: &S| (page.as_ref().to_string(), self.resolve_page(page.as_ref()));

        #[cfg(feature = "rayon")]
        let results: Vec<_> = {
            use rayon::prelude::*;
            log::debug!(
                "Resolving {} page(s) on {} thread(s)",
                pages.len(),
                rayon::current_num_threads()
            );
            pages.par_iter().map(resolve).collect()
        };
        #[cfg(not(feature = "rayon"))]
        let results: Vec<_> = pages.iter().map(resolve).collect();

        results
    }
}

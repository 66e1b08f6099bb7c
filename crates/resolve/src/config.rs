use pagedoc_style::Viewport;
use serde::{Deserialize, Serialize};

/// Maximum number of hops followed by deep reference resolution.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Keys that may hold an iterator path (`item.name`) inside a list consumer.
pub const DEFAULT_ITERATOR_KEYS: &[&str] = &["dataKey", "path", "listObject"];

/// Settings for one resolution pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Substituted for the `~/` prefix of tilde references.
    pub base_url: Option<String>,
    pub max_depth: usize,
    /// When set, viewport-relative sizes become pixels instead of `vh`/`vw`.
    pub viewport: Option<Viewport>,
    pub iterator_keys: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            max_depth: DEFAULT_MAX_DEPTH,
            viewport: None,
            iterator_keys: DEFAULT_ITERATOR_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl ResolverConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn is_iterator_key(&self, key: &str) -> bool {
        self.iterator_keys.iter().any(|k| k == key)
    }
}

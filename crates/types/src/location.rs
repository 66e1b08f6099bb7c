use serde::Serialize;
use std::fmt;

/// Identifies a component node within a page by its child-index path.
///
/// The empty path is the page's component list itself; `[1, 0]` is the first
/// child of the second top-level component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeLocation {
    pub path: Vec<usize>,
    pub component_type: String,
}

impl NodeLocation {
    pub fn new(path: Vec<usize>, component_type: impl Into<String>) -> Self {
        Self {
            path,
            component_type: component_type.into(),
        }
    }

    /// Location of the `index`-th child of this node.
    pub fn child(&self, index: usize, component_type: impl Into<String>) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(index);
        Self::new(path, component_type)
    }
}

impl fmt::Display for NodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "/")?;
        }
        for index in &self.path {
            write!(f, "/{}", index)?;
        }
        if !self.component_type.is_empty() {
            write!(f, " ({})", self.component_type)?;
        }
        Ok(())
    }
}

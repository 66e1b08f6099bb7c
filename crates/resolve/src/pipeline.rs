//! The ordered set of resolvers applied to every node.
use crate::context::ResolveContext;
use crate::resolvers::{
    AliasResolver, ColorResolver, EventResolver, ReferenceResolver, StructureResolver,
};
use pagedoc_types::ComponentNode;
use std::fmt;

/// The canonical stages, in execution order.
///
/// Later stages rely on earlier ones: structure and color rules must see
/// dereferenced values, and events are wired last from final keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Reference,
    Structure,
    Color,
    Alias,
    Events,
}

/// One independent transform over a single node.
///
/// Resolvers never fail: problems are reported on the context and the
/// offending key is left unset.
pub trait Resolver: Send + Sync {
    fn name(&self) -> &'static str;

    fn stage(&self) -> Stage;

    fn resolve(&self, node: &mut ComponentNode, ctx: &mut ResolveContext<'_>);
}

/// Resolvers sorted by stage; registration order is kept within a stage.
#[derive(Default)]
pub struct Pipeline {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("resolvers", &self.names())
            .finish()
    }
}

impl Pipeline {
    /// An empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// The five canonical resolvers.
    pub fn standard() -> Self {
        Self::new()
            .with(ReferenceResolver)
            .with(StructureResolver)
            .with(ColorResolver)
            .with(AliasResolver)
            .with(EventResolver)
    }

    pub fn with(mut self, resolver: impl Resolver + 'static) -> Self {
        self.register(Box::new(resolver));
        self
    }

    /// Inserts after every resolver of the same or an earlier stage.
    pub fn register(&mut self, resolver: Box<dyn Resolver>) {
        let stage = resolver.stage();
        let position = self
            .resolvers
            .iter()
            .position(|r| r.stage() > stage)
            .unwrap_or(self.resolvers.len());
        self.resolvers.insert(position, resolver);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Runs every resolver over one node (not its children).
    pub fn run(&self, node: &mut ComponentNode, ctx: &mut ResolveContext<'_>) {
        for resolver in &self.resolvers {
            log::trace!("{} at {}", resolver.name(), ctx.location);
            resolver.resolve(node, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use pagedoc_types::DocumentRoot;
    use serde_json::json;

    struct Marker(&'static str, Stage);

    impl Resolver for Marker {
        fn name(&self) -> &'static str {
            self.0
        }

        fn stage(&self) -> Stage {
            self.1
        }

        fn resolve(&self, node: &mut ComponentNode, _ctx: &mut ResolveContext<'_>) {
            let mut seen = node.get("seen").and_then(|v| v.as_array().cloned()).unwrap_or_default();
            seen.push(json!(self.0));
            node.set("seen", json!(seen));
        }
    }

    #[test]
    fn test_registration_is_sorted_by_stage() {
        let pipeline = Pipeline::new()
            .with(Marker("events", Stage::Events))
            .with(Marker("color", Stage::Color))
            .with(Marker("reference", Stage::Reference))
            .with(Marker("color-2", Stage::Color));
        assert_eq!(pipeline.names(), vec!["reference", "color", "color-2", "events"]);
    }

    #[test]
    fn test_run_applies_in_stage_order() {
        let pipeline = Pipeline::new()
            .with(Marker("alias", Stage::Alias))
            .with(Marker("structure", Stage::Structure));
        let root = DocumentRoot::new();
        let config = ResolverConfig::default();
        let mut ctx = ResolveContext::new(&root, "Page1", &config);
        let mut node = ComponentNode::new("view");
        pipeline.run(&mut node, &mut ctx);
        assert_eq!(node.get("seen"), Some(&json!(["structure", "alias"])));
    }

    #[test]
    fn test_standard_pipeline() {
        assert_eq!(
            Pipeline::standard().names(),
            vec!["reference", "structure", "color", "alias", "events"]
        );
    }
}

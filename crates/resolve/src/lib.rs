//! Page resolution: references, list bindings and the resolver pipeline.
//!
//! A pass turns a page's raw component tree and the shared document root into
//! a resolved tree plus diagnostics:
//!
//! ```text
//! (components, DocumentRoot, page) -> orchestrator -> Resolution { nodes, diagnostics }
//! ```
//!
//! Each node goes through the [`Pipeline`] stages in order: reference,
//! structure, color, alias, events. Recoverable problems never abort a pass;
//! they are recorded as diagnostics and the affected key is left unset.

pub mod config;
pub mod context;
pub mod error;
pub mod list;
pub mod orchestrator;
pub mod pipeline;
pub mod reference;
pub mod resolvers;

pub use config::{DEFAULT_ITERATOR_KEYS, DEFAULT_MAX_DEPTH, ResolverConfig};
pub use context::ResolveContext;
pub use error::ResolveError;
pub use list::{ListBinding, ListContext};
pub use orchestrator::{Resolution, resolve_nodes, resolve_page, resolve_page_with};
pub use pipeline::{Pipeline, Resolver, Stage};
pub use reference::{Scope, Unresolved, deref, deref_deep, resolve_iterator_path};

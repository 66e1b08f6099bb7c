pub mod action;
pub mod document;
pub mod error;
pub mod location;
pub mod node;

pub use action::{Action, ActionChain, BuiltinCall};
pub use document::DocumentRoot;
pub use error::DocumentError;
pub use location::NodeLocation;
pub use node::ComponentNode;

/// The raw tree type for documents: scalars, sequences and key-ordered maps.
pub use serde_json::{Map, Value};

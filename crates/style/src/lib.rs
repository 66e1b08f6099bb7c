//! Style value normalization.
//!
//! Each helper maps one raw document style value to the CSS-like declarations a
//! renderer expects. Helpers are pure: they never see the node, only values.

pub mod border;
pub mod color;
pub mod dimension;
pub mod flex;
pub mod font;
pub mod parsers;

pub use border::BorderPreset;
pub use color::{ColorOutcome, normalize_color};
pub use dimension::{Orientation, Viewport};
pub use flex::{AlignItems, FlexDirection, JustifyContent};
pub use parsers::StyleParseError;

/// A property/value pair produced by a style helper.
pub type Declaration = (&'static str, serde_json::Value);

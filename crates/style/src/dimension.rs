//! Viewport-relative position and size values.
//!
//! Documents express position and size keys as fractions of the viewport
//! (`top: "0.1"` is a tenth of the viewport height). Without a known viewport
//! they become `vh`/`vw` units; with one, absolute pixels.

use crate::parsers::{format_number, numeric_value};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which viewport axis a key measures against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Keys measured against the viewport height.
pub const VERTICAL_KEYS: &[&str] = &[
    "top",
    "bottom",
    "height",
    "minHeight",
    "maxHeight",
    "marginTop",
    "marginBottom",
    "paddingTop",
    "paddingBottom",
];

/// Keys measured against the viewport width.
pub const HORIZONTAL_KEYS: &[&str] = &[
    "left",
    "right",
    "width",
    "minWidth",
    "maxWidth",
    "marginLeft",
    "marginRight",
    "paddingLeft",
    "paddingRight",
];

impl Orientation {
    /// The orientation of a position/size key, if it is one.
    pub fn of_key(key: &str) -> Option<Self> {
        if VERTICAL_KEYS.contains(&key) {
            Some(Orientation::Vertical)
        } else if HORIZONTAL_KEYS.contains(&key) {
            Some(Orientation::Horizontal)
        } else {
            None
        }
    }

    fn viewport_unit(&self) -> &'static str {
        match self {
            Orientation::Vertical => "vh",
            Orientation::Horizontal => "vw",
        }
    }
}

/// Known viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Parses `WIDTHxHEIGHT`, e.g. `375x667`.
    pub fn parse(spec: &str) -> Option<Self> {
        let (width, height) = spec.trim().split_once(['x', 'X'])?;
        let width = width.trim().parse::<f64>().ok()?;
        let height = height.trim().parse::<f64>().ok()?;
        (width > 0.0 && height > 0.0).then_some(Self { width, height })
    }

    fn extent(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Vertical => self.height,
            Orientation::Horizontal => self.width,
        }
    }
}

/// Converts a fractional position/size value to CSS.
///
/// Returns `None` when the value is not a unitless number (`"auto"`, `"12px"`,
/// an already converted `"10vh"`), in which case it passes through unchanged.
pub fn viewport_relative(
    value: &Value,
    orientation: Orientation,
    viewport: Option<&Viewport>,
) -> Option<Value> {
    let fraction = numeric_value(value)?;
    let css = match viewport {
        Some(viewport) => format!("{}px", format_number(fraction * viewport.extent(orientation))),
        None => format!("{}{}", format_number(fraction * 100.0), orientation.viewport_unit()),
    };
    Some(Value::String(css))
}

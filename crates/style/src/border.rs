//! Document border presets.
//!
//! A document `border` is a map `{ style, width, color, radius }` where `style`
//! selects one of seven numbered presets.

use crate::Declaration;
use crate::parsers::{StyleParseError, format_number, numeric_value};
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderPreset {
    /// 1: no border.
    None,
    /// 2: bottom edge only.
    Bottom,
    /// 3: solid on all sides.
    Solid,
    /// 4: dashed on all sides.
    Dashed,
    /// 5: dotted on all sides.
    Dotted,
    /// 6: top edge only.
    Top,
    /// 7: solid with rounded corners.
    Rounded,
}

impl BorderPreset {
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            1 => BorderPreset::None,
            2 => BorderPreset::Bottom,
            3 => BorderPreset::Solid,
            4 => BorderPreset::Dashed,
            5 => BorderPreset::Dotted,
            6 => BorderPreset::Top,
            7 => BorderPreset::Rounded,
            _ => return None,
        })
    }

    fn declarations(&self) -> Vec<Declaration> {
        match self {
            BorderPreset::None => vec![("borderStyle", json!("none"))],
            BorderPreset::Bottom => vec![
                ("borderStyle", json!("none")),
                ("borderBottomStyle", json!("solid")),
            ],
            BorderPreset::Solid => vec![("borderStyle", json!("solid"))],
            BorderPreset::Dashed => vec![("borderStyle", json!("dashed"))],
            BorderPreset::Dotted => vec![("borderStyle", json!("dotted"))],
            BorderPreset::Top => vec![
                ("borderStyle", json!("none")),
                ("borderTopStyle", json!("solid")),
            ],
            BorderPreset::Rounded => vec![
                ("borderStyle", json!("solid")),
                ("borderRadius", json!("5px")),
            ],
        }
    }
}

fn pixels(value: &Value) -> Value {
    match numeric_value(value) {
        Some(n) => json!(format!("{}px", format_number(n))),
        None => value.clone(),
    }
}

/// Expands a `border` map into individual border declarations.
///
/// The color is copied verbatim; color normalization runs later.
pub fn border(map: &Map<String, Value>) -> Result<Vec<Declaration>, StyleParseError> {
    let mut declarations = Vec::new();

    if let Some(style) = map.get("style") {
        let code = numeric_value(style).map(|n| n as i64);
        let preset = code
            .and_then(BorderPreset::from_code)
            .ok_or_else(|| StyleParseError::InvalidValue {
                property: "border.style".to_string(),
                value: style.to_string(),
            })?;
        declarations.extend(preset.declarations());
    }
    if let Some(width) = map.get("width") {
        declarations.push(("borderWidth", pixels(width)));
    }
    if let Some(color) = map.get("color") {
        declarations.push(("borderColor", color.clone()));
    }
    if let Some(radius) = map.get("radius") {
        declarations.retain(|(property, _)| *property != "borderRadius");
        declarations.push(("borderRadius", pixels(radius)));
    }
    Ok(declarations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_bottom_border() {
        let declarations =
            border(&map(json!({ "style": "2", "width": 1, "color": "0x00000058" }))).unwrap();
        assert_eq!(
            declarations,
            vec![
                ("borderStyle", json!("none")),
                ("borderBottomStyle", json!("solid")),
                ("borderWidth", json!("1px")),
                ("borderColor", json!("0x00000058")),
            ]
        );
    }

    #[test]
    fn test_explicit_radius_overrides_preset() {
        let declarations = border(&map(json!({ "style": 7, "radius": "12" }))).unwrap();
        assert_eq!(
            declarations,
            vec![("borderStyle", json!("solid")), ("borderRadius", json!("12px"))]
        );
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let err = border(&map(json!({ "style": 9 }))).unwrap_err();
        assert!(matches!(err, StyleParseError::InvalidValue { .. }));
    }
}

//! Flex alignment derived from document `align`, `axis` and `textAlign` keys.
use crate::Declaration;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl FlexDirection {
    pub fn as_css(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
}

impl JustifyContent {
    pub fn as_css(&self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    Center,
}

impl AlignItems {
    pub fn as_css(&self) -> &'static str {
        match self {
            AlignItems::Stretch => "stretch",
            AlignItems::Center => "center",
        }
    }
}

/// `align: centerX | centerY | center`.
pub fn align(value: &str) -> Option<Vec<Declaration>> {
    let justify = ("justifyContent", json!(JustifyContent::Center.as_css()));
    let items = ("alignItems", json!(AlignItems::Center.as_css()));
    let declarations = match value {
        "centerX" => vec![("display", json!("flex")), justify],
        "centerY" => vec![("display", json!("flex")), items],
        "center" => vec![("display", json!("flex")), justify, items],
        _ => return None,
    };
    Some(declarations)
}

/// `axis: horizontal | vertical`.
pub fn axis(value: &str) -> Option<Vec<Declaration>> {
    let declarations = match value {
        "horizontal" => vec![
            ("display", json!("flex")),
            ("flexWrap", json!("nowrap")),
            ("flexDirection", json!(FlexDirection::Row.as_css())),
        ],
        "vertical" => vec![
            ("display", json!("flex")),
            ("flexDirection", json!(FlexDirection::Column.as_css())),
        ],
        _ => return None,
    };
    Some(declarations)
}

fn horizontal_text_align(value: &str) -> Option<&'static str> {
    match value {
        "left" => Some("left"),
        "right" => Some("right"),
        "center" | "centerX" => Some("center"),
        _ => None,
    }
}

/// `textAlign` as a keyword, or as a map `{ x, y }`.
///
/// A plain CSS keyword already in place (`left`, `right`, `center`) yields
/// `None` so the value passes through untouched.
pub fn text_align(value: &Value) -> Option<Vec<Declaration>> {
    match value {
        Value::String(s) if s == "centerX" => Some(vec![("textAlign", json!("center"))]),
        Value::String(s) if s == "centerY" => Some(vec![
            ("display", json!("flex")),
            ("alignItems", json!(AlignItems::Center.as_css())),
        ]),
        Value::Object(map) => {
            let mut declarations = Vec::new();
            if let Some(x) = map.get("x").and_then(Value::as_str).and_then(horizontal_text_align) {
                declarations.push(("textAlign", json!(x)));
            }
            if let Some(y) = map.get("y").and_then(Value::as_str)
                && matches!(y, "center" | "centerY")
            {
                declarations.push(("display", json!("flex")));
                declarations.push(("alignItems", json!(AlignItems::Center.as_css())));
            }
            (!declarations.is_empty()).then_some(declarations)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        let declarations = align("centerX").unwrap();
        assert!(declarations.contains(&("justifyContent", json!("center"))));
        assert!(!declarations.iter().any(|(k, _)| *k == "alignItems"));
        assert_eq!(align("center").unwrap().len(), 3);
        assert!(align("middle").is_none());
    }

    #[test]
    fn test_axis() {
        let declarations = axis("vertical").unwrap();
        assert!(declarations.contains(&("flexDirection", json!("column"))));
        assert!(axis("diagonal").is_none());
    }

    #[test]
    fn test_text_align_map() {
        let declarations = text_align(&json!({ "x": "centerX", "y": "center" })).unwrap();
        assert_eq!(
            declarations,
            vec![
                ("textAlign", json!("center")),
                ("display", json!("flex")),
                ("alignItems", json!("center")),
            ]
        );
    }

    #[test]
    fn test_text_align_map_without_known_axes_passes_through() {
        assert!(text_align(&json!({ "x": "middle" })).is_none());
        assert!(text_align(&json!({})).is_none());
        assert_eq!(
            text_align(&json!({ "x": "middle", "y": "center" })).map(|d| d.len()),
            Some(2)
        );
    }

    #[test]
    fn test_text_align_keyword_passes_through() {
        assert!(text_align(&json!("left")).is_none());
        assert_eq!(
            text_align(&json!("centerX")),
            Some(vec![("textAlign", json!("center"))])
        );
    }
}

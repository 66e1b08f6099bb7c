//! Font size and weight values.
use crate::Declaration;
use crate::parsers::{format_number, numeric_value};
use serde_json::{Value, json};

/// `fontSize: 14` or `"14"` becomes `"14px"`; anything with a unit passes through.
pub fn font_size(value: &Value) -> Option<Value> {
    numeric_value(value).map(|n| json!(format!("{}px", format_number(n))))
}

/// `fontStyle: bold` is a weight in documents, not a CSS font style.
pub fn font_style(value: &str) -> Option<Vec<Declaration>> {
    match value {
        "bold" => Some(vec![("fontWeight", json!("bold"))]),
        _ => None,
    }
}

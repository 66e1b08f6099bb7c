use serde_json::{Value, json};

/// A page document with the given components.
pub fn page(components: Value) -> Value {
    json!({ "components": components })
}

/// A page document with page-local data and components.
pub fn page_with_data(data: Value, components: Value) -> Value {
    let mut page = data;
    if let Some(map) = page.as_object_mut() {
        map.insert("components".to_string(), components);
    }
    page
}

/// A label showing `text`.
pub fn label(text: &str) -> Value {
    json!({ "type": "label", "text": text })
}

/// A label bound through `dataKey`.
pub fn bound_label(data_key: &str) -> Value {
    json!({ "type": "label", "dataKey": data_key })
}

/// A list consumer over `list_object` binding `iterator_var`.
pub fn list(iterator_var: &str, list_object: Value, children: Value) -> Value {
    json!({
        "type": "list",
        "iteratorVar": iterator_var,
        "listObject": list_object,
        "children": children
    })
}

/// The shared data documents most tests resolve against.
pub fn shared_documents() -> Value {
    json!({
        "Topo": { "fruit": ".Abc.fruit.0.abc" },
        "Abc": { "fruit": [{ "abc": "123" }] },
        "Style": {
            "primary": "0x33445566",
            "headerHeight": "0.1",
            "broken": "0x3344"
        }
    })
}

/// `shared_documents()` plus a page under `name`.
pub fn root_with_page(name: &str, page: Value) -> Value {
    let mut root = shared_documents();
    if let Some(map) = root.as_object_mut() {
        map.insert(name.to_string(), page);
    }
    root
}

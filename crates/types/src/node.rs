//! The mutable component node that the resolver pipeline works on.

use crate::action::ActionChain;
use crate::error::DocumentError;
use crate::location::NodeLocation;
use serde_json::{Map, Value};

/// A component of a page, split into its declared keys, style and children.
///
/// Declared keys keep their document order: some resolvers must see a key
/// before others have touched it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentNode {
    pub component_type: String,
    pub keys: Map<String, Value>,
    pub style: Map<String, Value>,
    pub children: Vec<ComponentNode>,
    pub triggers: Vec<ActionChain>,
}

impl ComponentNode {
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            ..Self::default()
        }
    }

    /// Builds a node (and its subtree) from a raw component map.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        Self::from_value_at(value, &NodeLocation::default())
    }

    /// Like [`ComponentNode::from_value`], labelling errors with `location`.
    pub fn from_value_at(value: &Value, location: &NodeLocation) -> Result<Self, DocumentError> {
        let Value::Object(raw) = value else {
            return Err(DocumentError::InvalidComponent {
                location: location.to_string(),
            });
        };

        // A missing or non-string type leaves `component_type` empty; the
        // resolver reports it without dropping the node.
        let component_type = raw.get("type").and_then(Value::as_str).unwrap_or_default();

        let mut node = Self::new(component_type);
        for (key, value) in raw {
            match key.as_str() {
                "type" if value.is_string() => {}
                "style" => match value {
                    Value::Object(style) => node.style = style.clone(),
                    // A non-map style is kept as a declared key so nothing is lost.
                    other => {
                        node.keys.insert(key.clone(), other.clone());
                    }
                },
                "children" => {
                    let Value::Array(children) = value else {
                        return Err(DocumentError::InvalidChildren {
                            location: location.to_string(),
                        });
                    };
                    for (index, child) in children.iter().enumerate() {
                        let child_type = child.get("type").and_then(Value::as_str).unwrap_or("");
                        let child_location = location.child(index, child_type);
                        node.children
                            .push(Self::from_value_at(child, &child_location)?);
                    }
                }
                _ => {
                    node.keys.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(node)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.keys.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.keys.get(key).and_then(Value::as_str)
    }

    /// Sets a declared key, returning `true` if the node changed.
    pub fn set(&mut self, key: &str, value: Value) -> bool {
        set_if_changed(&mut self.keys, key, value)
    }

    /// Sets a style key, returning `true` if the node changed.
    pub fn set_style(&mut self, key: &str, value: Value) -> bool {
        set_if_changed(&mut self.style, key, value)
    }

    /// Removes a declared key, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.keys.shift_remove(key)
    }

    /// Removes a style key, preserving the order of the remaining keys.
    pub fn remove_style(&mut self, key: &str) -> Option<Value> {
        self.style.shift_remove(key)
    }

    pub fn trigger(&self, name: &str) -> Option<&ActionChain> {
        self.triggers.iter().find(|chain| chain.trigger == name)
    }

    /// Stores a resolved action chain, replacing an earlier one for the same trigger.
    pub fn set_trigger(&mut self, chain: ActionChain) {
        match self.triggers.iter_mut().find(|c| c.trigger == chain.trigger) {
            Some(existing) => *existing = chain,
            None => self.triggers.push(chain),
        }
    }

    /// Total node count of this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }

    /// Renders the node back into a raw map.
    ///
    /// Order: `type`, declared keys, `style`, `children`, then resolved
    /// triggers under `triggers`.
    pub fn to_value(&self) -> Value {
        let mut out = Map::new();
        out.insert("type".to_string(), Value::String(self.component_type.clone()));
        for (key, value) in &self.keys {
            out.insert(key.clone(), value.clone());
        }
        if !self.style.is_empty() {
            out.insert("style".to_string(), Value::Object(self.style.clone()));
        }
        if !self.children.is_empty() {
            out.insert(
                "children".to_string(),
                Value::Array(self.children.iter().map(Self::to_value).collect()),
            );
        }
        if !self.triggers.is_empty() {
            let triggers = self
                .triggers
                .iter()
                .map(|chain| {
                    let actions = serde_json::to_value(&chain.actions).unwrap_or(Value::Null);
                    (chain.trigger.clone(), actions)
                })
                .collect();
            out.insert("triggers".to_string(), Value::Object(triggers));
        }
        Value::Object(out)
    }
}

fn set_if_changed(map: &mut Map<String, Value>, key: &str, value: Value) -> bool {
    if map.get(key) == Some(&value) {
        return false;
    }
    map.insert(key.to_string(), value);
    true
}

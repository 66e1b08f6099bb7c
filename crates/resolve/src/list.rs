//! The stack of active list bindings.
//!
//! A list consumer (a node declaring `iteratorVar` and `listObject`) binds its
//! iterator variable for itself and its descendants only. Nested consumers
//! shadow outer ones with the same variable name; nothing is merged.

use itertools::Itertools;
use serde_json::Value;

/// One active list: the variable, the sequence, and the element in view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListBinding {
    pub iterator_var: String,
    pub list_object: Vec<Value>,
    pub index: usize,
}

impl ListBinding {
    pub fn new(iterator_var: impl Into<String>, list_object: Vec<Value>) -> Self {
        Self {
            iterator_var: iterator_var.into(),
            list_object,
            index: 0,
        }
    }

    /// The element at the current index, if the list is long enough.
    pub fn data_object(&self) -> Option<&Value> {
        self.list_object.get(self.index)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListContext {
    bindings: Vec<ListBinding>,
}

impl ListContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_binding(&mut self, iterator_var: impl Into<String>, list_object: Vec<Value>) {
        self.bindings.push(ListBinding::new(iterator_var, list_object));
        log::debug!(
            "List scope: {}",
            self.bindings
                .iter()
                .map(|b| format!("{}[{}]", b.iterator_var, b.list_object.len()))
                .join(" > ")
        );
    }

    pub fn pop_binding(&mut self) -> Option<ListBinding> {
        self.bindings.pop()
    }

    /// Moves the innermost binding to element `index`. Returns `false` when
    /// no binding is active.
    pub fn set_index(&mut self, index: usize) -> bool {
        match self.bindings.last_mut() {
            Some(binding) => {
                binding.index = index;
                true
            }
            None => false,
        }
    }

    /// The current element of the innermost binding.
    pub fn current_data_object(&self) -> Option<&Value> {
        self.bindings.last().and_then(ListBinding::data_object)
    }

    /// The current element bound to `name`, searching innermost first.
    pub fn resolve_iterator_var(&self, name: &str) -> Option<&Value> {
        self.binding(name).and_then(ListBinding::data_object)
    }

    /// The innermost binding for `name`.
    pub fn binding(&self, name: &str) -> Option<&ListBinding> {
        self.bindings.iter().rev().find(|b| b.iterator_var == name)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.binding(name).is_some()
    }

    pub fn depth(&self) -> usize {
        self.bindings.len()
    }

    /// Outermost first.
    pub fn bindings(&self) -> &[ListBinding] {
        &self.bindings
    }
}

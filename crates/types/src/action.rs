//! Trigger descriptors handed to the external action-chain runtime.
//!
//! Only the shape is defined here; executing an action is not.

use serde::Serialize;
use serde_json::{Map, Value};

/// An invocable builtin function reference (`=.builtIn.<name>`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinCall {
    /// The function path after `=.builtIn.`, e.g. `string.equal`.
    pub func_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_in: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_out: Option<Value>,
}

/// A single step of an action chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Action {
    /// An object declaring `actionType`; the remaining keys are its parameters.
    #[serde(rename_all = "camelCase")]
    Typed {
        action_type: String,
        params: Map<String, Value>,
    },
    /// A builtin function invocation.
    Builtin(BuiltinCall),
    /// An `emit` block: data to expose plus nested actions for the runtime.
    #[serde(rename_all = "camelCase")]
    Emit {
        #[serde(skip_serializing_if = "Option::is_none")]
        data_key: Option<Value>,
        actions: Vec<Value>,
    },
    /// A bare string: navigate to the named page.
    Goto { destination: String },
}

/// The ordered actions bound to one trigger (`onClick`, `onChange`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionChain {
    pub trigger: String,
    pub actions: Vec<Action>,
}

impl ActionChain {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            actions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

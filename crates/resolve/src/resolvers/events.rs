use crate::context::ResolveContext;
use crate::pipeline::{Resolver, Stage};
use pagedoc_diagnostics::{DiagnosticCode, Severity};
use pagedoc_path::{RefKind, builtin_call, classify_object};
use pagedoc_types::{Action, ActionChain, ComponentNode};
use serde_json::Value;

/// Keys whose value is an action chain.
pub const TRIGGER_KEYS: &[&str] = &[
    "onClick",
    "onChange",
    "onBlur",
    "onFocus",
    "onInput",
    "onHover",
    "onMouseEnter",
    "onMouseLeave",
    "onMouseOver",
    "onMouseOut",
    "onSubmit",
];

/// Turns trigger keys into [`ActionChain`] descriptors on the node.
///
/// The actions are described, not run; their operands are left unresolved
/// for the runtime.
pub struct EventResolver;

impl Resolver for EventResolver {
    fn name(&self) -> &'static str {
        "events"
    }

    fn stage(&self) -> Stage {
        Stage::Events
    }

    fn resolve(&self, node: &mut ComponentNode, ctx: &mut ResolveContext<'_>) {
        let triggers: Vec<String> = node
            .keys
            .keys()
            .filter(|key| TRIGGER_KEYS.contains(&key.as_str()))
            .cloned()
            .collect();

        for trigger in triggers {
            let Some(raw) = node.remove(&trigger) else {
                continue;
            };
            let entries = match raw {
                Value::Array(entries) => entries,
                Value::Null => Vec::new(),
                single => vec![single],
            };

            let mut chain = ActionChain::new(trigger.as_str());
            for (index, entry) in entries.iter().enumerate() {
                match parse_action(entry) {
                    Some(action) => chain.actions.push(action),
                    None => ctx.report_key(
                        DiagnosticCode::InvalidAction,
                        Severity::Error,
                        &trigger,
                        format!("action {} of '{}' is not a recognized action: {}", index, trigger, entry),
                    ),
                }
            }
            log::debug!("Wired {} action(s) to {} at {}", chain.actions.len(), trigger, ctx.location);
            node.set_trigger(chain);
        }
    }
}

fn parse_action(entry: &Value) -> Option<Action> {
    match entry {
        Value::String(destination) if !destination.is_empty() => Some(Action::Goto {
            destination: destination.clone(),
        }),
        Value::Object(object) => {
            if let Some(action_type) = object.get("actionType").and_then(Value::as_str) {
                let params = object
                    .iter()
                    .filter(|(key, _)| key.as_str() != "actionType")
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                return Some(Action::Typed {
                    action_type: action_type.to_string(),
                    params,
                });
            }
            if classify_object(object) == RefKind::Eval {
                return builtin_call(object).map(Action::Builtin);
            }
            let emit = object.get("emit")?.as_object()?;
            Some(Action::Emit {
                data_key: emit.get("dataKey").cloned(),
                actions: emit
                    .get("actions")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default(),
            })
        }
        _ => None,
    }
}

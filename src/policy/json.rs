use std::collections::BTreeSet;
use std::iter;

use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use super::Policy;

/// Decodes a policy document.
///
/// `true` allows, `false` denies, a string or an array of strings is a key
/// set, and an object is a dictionary of recursively decoded policies.
/// Any other shape decodes to [`Policy::Deny`].
///
/// Recursion follows the nesting of `document`. Documents parsed by
/// `serde_json` are at most 128 levels deep; a `Value` built in code has no
/// such limit and a deep enough one will overflow the stack.
pub fn policy_from_json(document: &Value) -> Policy {
    match document {
        Value::Bool(true) => Policy::Allow,
        Value::Bool(false) => Policy::Deny,
        Value::String(key) => Policy::key_set(iter::once(key.as_str())),
        Value::Array(items) => key_set_from(items),
        Value::Object(entries) => Policy::dict(
            entries
                .iter()
                .map(|(key, value)| (key.as_str(), policy_from_json(value))),
        ),
        Value::Number(_) | Value::Null => {
            debug!(%document, "unsupported policy value, denying");
            Policy::Deny
        }
    }
}

fn key_set_from(items: &[Value]) -> Policy {
    let keys: Option<BTreeSet<String>> = items
        .iter()
        .map(|item| item.as_str().map(String::from))
        .collect();

    match keys {
        Some(keys) => Policy::KeySet(keys),
        None => {
            debug!("policy key set contains a non-string value, denying");
            Policy::Deny
        }
    }
}

impl From<&Value> for Policy {
    fn from(document: &Value) -> Self {
        policy_from_json(document)
    }
}

/// Serializes back into the document shape accepted by [`policy_from_json`].
impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Policy::Allow => serializer.serialize_bool(true),
            Policy::Deny => serializer.serialize_bool(false),
            Policy::KeySet(keys) => serializer.collect_seq(keys),
            Policy::Dict(entries) => {
                serializer.collect_map(entries.iter().map(|(key, policy)| (key, policy.as_ref())))
            }
        }
    }
}

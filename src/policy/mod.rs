mod builder;
mod json;

pub use builder::PolicyBuilder;
pub use json::policy_from_json;

use std::collections::{btree_map::Entry, BTreeMap, BTreeSet};
use std::sync::Arc;

use lazy_static::lazy_static;

lazy_static! {
    static ref ALLOW: Arc<Policy> = Arc::new(Policy::Allow);
}

type Entries = BTreeMap<String, Arc<Policy>>;

/// A composable access policy.
///
/// A policy answers whether a path of keys (usually
/// `[context, action, resource_type]`) is allowed, and knows how to
/// combine itself with another policy via [`Policy::sum`].
///
/// Policies are immutable once built. Nested policies are reference counted,
/// so summing two dictionaries shares every child that does not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    /// Allows every path.
    Allow,
    /// Denies every path. Identity element of [`Policy::sum`].
    Deny,
    /// Allows a path whose first key is a member of the set.
    KeySet(BTreeSet<String>),
    /// Looks up the first key of a path and delegates the rest of the path
    /// to the nested policy.
    Dict(BTreeMap<String, Arc<Policy>>),
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Deny
    }
}

impl Policy {
    pub fn key_set<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Policy::KeySet(keys.into_iter().map(Into::into).collect())
    }

    pub fn dict<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Policy)>,
        K: Into<String>,
    {
        Policy::Dict(
            entries
                .into_iter()
                .map(|(key, policy)| (key.into(), Arc::new(policy)))
                .collect(),
        )
    }

    /// Evaluates the policy against `path`.
    ///
    /// `subject` is forwarded to nested policies untouched. None of the
    /// built-in variants inspect it.
    ///
    /// Empty paths and missing keys are denied.
    pub fn evaluate<P, S>(&self, path: &[P], subject: &S) -> bool
    where
        P: AsRef<str>,
        S: ?Sized,
    {
        match self {
            Policy::Allow => true,
            Policy::Deny => false,
            Policy::KeySet(keys) => match path.first() {
                Some(key) => keys.contains(key.as_ref()),
                None => false,
            },
            Policy::Dict(entries) => match path.split_first() {
                Some((key, rest)) => entries
                    .get(key.as_ref())
                    .map_or(false, |policy| policy.evaluate(rest, subject)),
                None => false,
            },
        }
    }

    /// Combines two policies into one that allows everything either of them
    /// allows. Neither input is modified.
    ///
    /// Summing a `Dict` with a `KeySet` (in either order) keeps the entries of
    /// the dictionary and replaces the entry of every key in the set with
    /// [`Policy::Allow`], dropping any nested restriction under that key.
    pub fn sum(&self, other: &Policy) -> Policy {
        match (self, other) {
            (Policy::Allow, _) | (_, Policy::Allow) => Policy::Allow,
            (Policy::Deny, rhs) => rhs.clone(),
            (lhs, Policy::Deny) => lhs.clone(),
            (Policy::KeySet(lhs), Policy::KeySet(rhs)) => {
                Policy::KeySet(lhs.union(rhs).cloned().collect())
            }
            (Policy::Dict(lhs), Policy::Dict(rhs)) => Policy::Dict(sum_entries(lhs, rhs)),
            (Policy::Dict(entries), Policy::KeySet(keys)) => {
                Policy::Dict(grant_keys(entries, keys))
            }
            (Policy::KeySet(_), Policy::Dict(_)) => other.sum(self),
        }
    }
}

fn sum_entries(lhs: &Entries, rhs: &Entries) -> Entries {
    let mut merged = lhs.clone();
    for (key, policy) in rhs {
        match merged.entry(key.clone()) {
            Entry::Vacant(item) => {
                item.insert(Arc::clone(policy));
            }
            Entry::Occupied(mut item) => {
                let sum = item.get().sum(policy);
                item.insert(Arc::new(sum));
            }
        }
    }
    merged
}

fn grant_keys(entries: &Entries, keys: &BTreeSet<String>) -> Entries {
    let mut granted = entries.clone();
    for key in keys {
        granted.insert(key.clone(), Arc::clone(&ALLOW));
    }
    granted
}

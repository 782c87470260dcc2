use std::iter;

use serde_json::Value;
use tracing::{debug, trace};

use crate::{policy::policy_from_json, Permission, Policy};

/// Context of resources that do not name one.
pub const DEFAULT_CONTEXT: &str = "";

/// Context checked for requests that are not tied to a single resource,
/// such as listing or creating. A grant in any context is also added here.
pub const SOME_CONTEXT: &str = "*";

/// Accumulated policy of a principal.
///
/// Starts out denying everything. Policies are only ever summed into it, so
/// a root policy grows more permissive and is never replaced.
///
/// Mutation takes `&mut self`; share an instance between threads behind a
/// lock.
#[derive(Debug, Clone, Default)]
pub struct RootPolicy {
    policy: Policy,
}

impl RootPolicy {
    pub fn new() -> Self {
        Self {
            policy: Policy::Deny,
        }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Evaluates `[context_id, action, resource_type]` against the
    /// accumulated policy.
    pub fn should_allow<S>(&self, permission: &Permission, context_id: &str, subject: &S) -> bool
    where
        S: ?Sized,
    {
        let path = [context_id, permission.action(), permission.resource_type()];
        let allowed = self.policy.evaluate(&path, subject);
        trace!(
            context = context_id,
            %permission,
            allowed,
            "evaluated permission"
        );
        allowed
    }

    /// Sums an unscoped policy into the accumulated policy.
    pub fn add_policy(&mut self, policy: Policy) -> &mut Self {
        self.policy = self.policy.sum(&policy);
        self
    }

    /// Scopes `policy` under `context` and sums it into the accumulated
    /// policy.
    pub fn add_policy_for_context(&mut self, policy: Policy, context: &str) -> &mut Self {
        debug!(context, "adding policy for context");
        self.add_policy(Policy::dict(iter::once((context, policy))))
    }

    pub fn add_json_policy_for_context(&mut self, document: &Value, context: &str) -> &mut Self {
        self.add_policy_for_context(policy_from_json(document), context)
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{policy::policy_from_json, root::SOME_CONTEXT, Policy, RootPolicy};

/// A named policy document that can be granted to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    name: String,
    definition: Value,
}

impl Role {
    pub fn new(name: impl Into<String>, definition: Value) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &Value {
        &self.definition
    }

    pub fn as_policy(&self) -> Policy {
        policy_from_json(&self.definition)
    }
}

/// Grants a role to a user within one context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    user: String,
    role: Role,
    context: String,
}

impl RoleAssignment {
    pub fn new(user: impl Into<String>, role: Role, context: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            role,
            context: context.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Authenticated identity a policy is built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    Superuser,
    User(String),
}

/// Builds the root policy of `principal` from its role assignments.
///
/// Anonymous principals are denied everything and superusers are allowed
/// everything. A user gets each assigned role in the assignment's context
/// and in [`SOME_CONTEXT`]. Assignments of other users are ignored.
pub fn policy_for(principal: &Principal, assignments: &[RoleAssignment]) -> RootPolicy {
    let mut root = RootPolicy::new();

    match principal {
        Principal::Anonymous => {}
        Principal::Superuser => {
            root.add_policy(Policy::Allow);
        }
        Principal::User(user) => {
            // Roles are identified by name and definition.
            let mut policy_by_role: HashMap<(&str, String), Policy> = HashMap::new();
            for assignment in assignments.iter().filter(|a| a.user == *user) {
                let role = assignment.role();
                let policy = policy_by_role
                    .entry((role.name(), role.definition().to_string()))
                    .or_insert_with(|| role.as_policy());

                debug!(%user, role = role.name(), context = assignment.context(), "granting role");
                root.add_policy_for_context(policy.clone(), assignment.context())
                    .add_policy_for_context(policy.clone(), SOME_CONTEXT);
            }
        }
    }

    root
}

//! Context scoped role based access control.
//!
//! Authorization rules are [`Policy`] trees. Trees are decoded from JSON
//! documents, combined with [`Policy::sum`], and evaluated against the path
//! `[context, action, resource_type]` by a [`RootPolicy`].
//!
//! ```
//! use scoped_rbac::{Permission, RootPolicy};
//! use serde_json::json;
//!
//! let mut root = RootPolicy::new();
//! root.add_json_policy_for_context(&json!({"read": ["doc", "image"]}), "tenant_a");
//!
//! let read_doc = Permission::new("read", "doc");
//! assert!(root.should_allow(&read_doc, "tenant_a", &()));
//! assert!(!root.should_allow(&read_doc, "tenant_b", &()));
//! ```
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]
mod errors;
mod permission;
mod policy;
mod role;
mod root;
mod validator;

pub use errors::{Error, Result};
pub use permission::{Permission, ResourceType};
pub use policy::{policy_from_json, Policy, PolicyBuilder};
pub use role::{policy_for, Principal, Role, RoleAssignment};
pub use root::{RootPolicy, DEFAULT_CONTEXT, SOME_CONTEXT};
pub use validator::{DefaultValidator, Field, IriValidator, PolicyValidator};

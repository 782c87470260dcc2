use std::fmt;

use serde::{Deserialize, Serialize};

/// An action on a type of resource, e.g. `http.GET` on `rbac.Role`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    action: String,
    resource_type: String,
}

impl Permission {
    /// Any strings are accepted. A permission no policy mentions, such as
    /// one with an empty action, is simply denied.
    pub fn new(action: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
        }
    }

    /// Permission for an HTTP request: the action is `http.<METHOD>`.
    pub fn http(method: &str, resource_type: impl Into<String>) -> Self {
        Self::new(format!("http.{}", method.to_ascii_uppercase()), resource_type)
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.action, self.resource_type)
    }
}

/// A kind of access controlled resource, identified by its IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceType {
    iri: String,
    name: String,
    description: String,
}

impl ResourceType {
    pub fn new(
        iri: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            iri: iri.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn iri(&self) -> &str {
        &self.iri
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// IRI of a listing of this resource type.
    pub fn list_iri(&self) -> String {
        format!("{}/list", self.iri)
    }
}

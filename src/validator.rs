use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{Error, Result};

/// Checks the keys of a policy document before it is decoded.
pub trait PolicyValidator {
    fn validate(&self, field: Field, value: &str) -> Result<()>;
}

/// Position of a validated value inside a policy document.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    /// Object key, e.g. a context, action or resource type.
    Key,
    /// String in a key set.
    Member,
}

/// Accepts every value.
#[derive(Debug, Default, Copy, Clone)]
pub struct DefaultValidator;

impl PolicyValidator for DefaultValidator {
    fn validate(&self, _field: Field, _value: &str) -> Result<()> {
        Ok(())
    }
}

lazy_static! {
    static ref IRI: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9_\-]*([./:][A-Za-z0-9_\-]+)*$").expect("valid regex");
}

/// Accepts identifiers of the form `http.GET`, `rbac.Role/list` or
/// `mqtt:publish`.
#[derive(Debug, Default, Copy, Clone)]
pub struct IriValidator;

impl PolicyValidator for IriValidator {
    fn validate(&self, field: Field, value: &str) -> Result<()> {
        if IRI.is_match(value) {
            Ok(())
        } else {
            Err(Error::Validation(format!(
                "{:?} `{}` is not a valid identifier",
                field, value
            )))
        }
    }
}

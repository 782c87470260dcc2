use serde_json::Value;

use crate::{
    policy::policy_from_json,
    validator::{DefaultValidator, Field},
    Error, Policy, PolicyValidator, Result,
};

/// Strict policy loader.
///
/// Unlike [`policy_from_json`], which degrades anything it does not
/// understand to a denial, the builder reports malformed JSON and
/// unsupported values as errors, and runs every key through a
/// [`PolicyValidator`].
pub struct PolicyBuilder<V> {
    validator: V,
    source: Source,
}

enum Source {
    Text(String),
    Value(Value),
}

impl PolicyBuilder<DefaultValidator> {
    pub fn from_json(json: &str) -> Self {
        Self {
            validator: DefaultValidator,
            source: Source::Text(json.into()),
        }
    }

    pub fn from_value(value: Value) -> Self {
        Self {
            validator: DefaultValidator,
            source: Source::Value(value),
        }
    }
}

impl<V> PolicyBuilder<V>
where
    V: PolicyValidator,
{
    pub fn with_validator<W>(self, validator: W) -> PolicyBuilder<W>
    where
        W: PolicyValidator,
    {
        PolicyBuilder {
            validator,
            source: self.source,
        }
    }

    pub fn build(self) -> Result<Policy> {
        let document = match self.source {
            Source::Text(json) => serde_json::from_str(&json).map_err(Error::Deserializing)?,
            Source::Value(value) => value,
        };

        validate_document(&self.validator, &document)?;

        Ok(policy_from_json(&document))
    }
}

fn validate_document<V>(validator: &V, document: &Value) -> Result<()>
where
    V: PolicyValidator,
{
    match document {
        Value::Bool(_) => Ok(()),
        Value::String(member) => validator.validate(Field::Member, member),
        Value::Array(items) => {
            for item in items {
                match item.as_str() {
                    Some(member) => validator.validate(Field::Member, member)?,
                    None => return Err(unsupported(item)),
                }
            }
            Ok(())
        }
        Value::Object(entries) => {
            for (key, value) in entries {
                validator.validate(Field::Key, key)?;
                validate_document(validator, value)?;
            }
            Ok(())
        }
        Value::Number(_) | Value::Null => Err(unsupported(document)),
    }
}

fn unsupported(value: &Value) -> Error {
    Error::Validation(format!("unsupported policy value `{}`", value))
}

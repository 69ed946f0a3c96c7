use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One active validator as listed in a UNLReport entry.
///
/// Kept as the raw field map so that fields beyond the public key pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatorEntry(Map<String, Value>);

impl ValidatorEntry {
    /// The validator's `PublicKey` field, if present and a string.
    pub fn public_key(&self) -> Option<&str> {
        self.0.get("PublicKey").and_then(Value::as_str)
    }

    /// The validator's `Account` field, if present and a string.
    pub fn account(&self) -> Option<&str> {
        self.0.get("Account").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Wrapper object around each element of an `ActiveValidators` array.
///
/// An `ActiveValidator` that is not an object decodes as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveValidatorItem {
    #[serde(
        rename = "ActiveValidator",
        default,
        deserialize_with = "crate::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_validator: Option<ValidatorEntry>,
}

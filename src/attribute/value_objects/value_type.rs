//! ValueType value object: the xsi:type under which attribute values are serialized.

use crate::constants::STRING_CLAIM_VALUE_TYPE;
use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated, non-empty xsi:type for attribute values.
///
/// Defaults to the standard string claim value type.
///
/// ```rust
/// use saml2_attribute::attribute::value_objects::ValueType;
/// use saml2_attribute::constants::STRING_CLAIM_VALUE_TYPE;
///
/// assert_eq!(ValueType::default().as_str(), STRING_CLAIM_VALUE_TYPE);
/// assert!(ValueType::new(String::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueType(String);

impl ValueType {
    /// Create a new ValueType, rejecting the empty string.
    pub fn new(value: String) -> ValidationResult<Self> {
        if value.is_empty() {
            return Err(ValidationError::null_or_empty("valueType"));
        }
        Ok(Self(value))
    }

    /// Get the string representation of the value type.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the value type.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether this is the default string claim value type.
    pub fn is_string(&self) -> bool {
        self.0 == STRING_CLAIM_VALUE_TYPE
    }
}

impl Default for ValueType {
    fn default() -> Self {
        Self(STRING_CLAIM_VALUE_TYPE.to_string())
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ValueType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValueType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for ValueType {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ValueType {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}

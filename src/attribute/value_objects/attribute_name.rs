//! AttributeName value object for the SAML2 `Name` attribute.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated, non-empty attribute name [Saml2Core, 2.7.3.1].
///
/// ```rust
/// use saml2_attribute::attribute::value_objects::AttributeName;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let name = AttributeName::new("emailAddress".to_string())?;
///     assert_eq!(name.as_str(), "emailAddress");
///
///     assert!(AttributeName::new(String::new()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeName(String);

impl AttributeName {
    /// Create a new AttributeName, rejecting the empty string.
    pub fn new(value: String) -> ValidationResult<Self> {
        if value.is_empty() {
            return Err(ValidationError::null_or_empty("name"));
        }
        Ok(Self(value))
    }

    /// Get the string representation of the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the name.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for AttributeName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AttributeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for AttributeName {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for AttributeName {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}

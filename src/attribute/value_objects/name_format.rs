//! NameFormat value object for attribute name classification URIs.
//!
//! A NameFormat is a URI reference classifying how an attribute's `Name` is
//! interpreted [Saml2Core, 2.7.3.1]. Only absolute URIs are accepted.

use crate::constants::name_formats;
use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated absolute URI used as an attribute NameFormat.
///
/// ## Validation Rules
///
/// - Must start with a scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`)
///   followed by `:` (RFC 3986, section 4.3)
/// - Must not contain whitespace or control characters
///
/// ## Examples
///
/// ```rust
/// use saml2_attribute::attribute::value_objects::NameFormat;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let format =
///         NameFormat::new("urn:oasis:names:tc:SAML:2.0:attrname-format:uri".to_string())?;
///     assert_eq!(format, NameFormat::uri());
///
///     // Relative references are rejected
///     assert!(NameFormat::new("attrname-format/uri".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameFormat(String);

impl NameFormat {
    /// Create a new NameFormat, rejecting anything that is not an absolute URI.
    pub fn new(value: String) -> ValidationResult<Self> {
        if !is_absolute_uri(&value) {
            return Err(ValidationError::invalid_uri(value));
        }
        Ok(Self(value))
    }

    /// `urn:oasis:names:tc:SAML:2.0:attrname-format:unspecified`
    pub fn unspecified() -> Self {
        Self(name_formats::UNSPECIFIED.to_string())
    }

    /// `urn:oasis:names:tc:SAML:2.0:attrname-format:uri`
    pub fn uri() -> Self {
        Self(name_formats::URI.to_string())
    }

    /// `urn:oasis:names:tc:SAML:2.0:attrname-format:basic`
    pub fn basic() -> Self {
        Self(name_formats::BASIC.to_string())
    }

    /// Get the string representation of the URI.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the URI.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The URI scheme, without the trailing colon.
    pub fn scheme(&self) -> &str {
        self.0.split_once(':').map(|(scheme, _)| scheme).unwrap_or_default()
    }
}

fn is_absolute_uri(value: &str) -> bool {
    if value
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    let Some((scheme, _)) = value.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl fmt::Display for NameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for NameFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NameFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for NameFormat {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NameFormat {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}

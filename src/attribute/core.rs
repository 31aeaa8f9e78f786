//! The SAML2 `Attribute` element [Saml2Core, 2.7.3.1].
//!
//! A [`Saml2Attribute`] is validated in full at construction and re-validated
//! field by field on every write. A rejected write leaves the previous value in
//! place, so no invalid intermediate state is ever observable.

use crate::attribute::builder::Saml2AttributeBuilder;
use crate::attribute::element::AttributeElement;
use crate::attribute::value_objects::{AttributeName, AttributeValues, NameFormat, ValueType};
use crate::error::{Saml2Result, ValidationError, ValidationResult};
use crate::normalize::normalize_empty_string;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single SAML2 attribute assertion: a name plus an ordered list of values.
///
/// # Example
/// ```rust
/// use saml2_attribute::Saml2Attribute;
/// use saml2_attribute::constants::STRING_CLAIM_VALUE_TYPE;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut attr = Saml2Attribute::with_values("emailAddress", ["a@x.com", "b@x.com"])?;
///     assert_eq!(attr.name(), "emailAddress");
///     assert_eq!(attr.value_type(), STRING_CLAIM_VALUE_TYPE);
///     assert!(attr.name_format().is_none());
///
///     attr.set_name_format(Some("urn:oasis:names:tc:SAML:2.0:attrname-format:uri".to_string()))?;
///     assert!(attr.set_name_format(Some("attrname-format/uri".to_string())).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AttributeRecord")]
pub struct Saml2Attribute {
    name: AttributeName,
    #[serde(skip_serializing_if = "Option::is_none")]
    friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_format: Option<NameFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_issuer: Option<String>,
    value_type: ValueType,
    values: AttributeValues,
}

impl Saml2Attribute {
    /// Create an attribute holding a single null value.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Self::with_value(name, None)
    }

    /// Create an attribute holding exactly one value, which may be null.
    pub fn with_value(name: impl Into<String>, value: Option<String>) -> ValidationResult<Self> {
        Self::with_values(name, [value])
    }

    /// Create an attribute from a sequence of values.
    ///
    /// The values are copied in order; duplicates, empty strings and nulls are
    /// kept as given.
    pub fn with_values<I>(name: impl Into<String>, values: I) -> ValidationResult<Self>
    where
        I: IntoIterator,
        AttributeValues: FromIterator<I::Item>,
    {
        Self::try_with_values(name, Some(values))
    }

    /// Create an attribute from a sequence that may itself be absent.
    ///
    /// The name is validated first; an absent sequence is then rejected with
    /// [`ValidationError::NullOrEmptyArgument`].
    pub fn try_with_values<I>(
        name: impl Into<String>,
        values: Option<I>,
    ) -> ValidationResult<Self>
    where
        I: IntoIterator,
        AttributeValues: FromIterator<I::Item>,
    {
        let name = AttributeName::new(name.into())?;
        let values: AttributeValues = values
            .ok_or_else(|| ValidationError::null_or_empty("values"))?
            .into_iter()
            .collect();

        log::trace!(
            "Created SAML2 attribute '{}' with {} value(s)",
            name,
            values.len()
        );

        Ok(Self {
            name,
            friendly_name: None,
            name_format: None,
            original_issuer: None,
            value_type: ValueType::default(),
            values,
        })
    }

    /// Start a fluent builder for an attribute with the given name.
    pub fn builder(name: impl Into<String>) -> Saml2AttributeBuilder {
        Saml2AttributeBuilder::new(name)
    }

    /// Deserialize and validate an attribute from its JSON form.
    pub fn from_json(value: Value) -> Saml2Result<Self> {
        let record: AttributeRecord = serde_json::from_value(value)?;
        Ok(Self::try_from(record)?)
    }

    /// Serialize the attribute to its JSON form.
    pub fn to_json(&self) -> Saml2Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Replace the name; the empty string is rejected.
    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        self.name = AttributeName::new(name.into())?;
        Ok(())
    }

    /// Human-readable form of the name, if set.
    pub fn friendly_name(&self) -> Option<&str> {
        self.friendly_name.as_deref()
    }

    /// Set or clear the friendly name. An empty string clears it.
    pub fn set_friendly_name(&mut self, friendly_name: Option<String>) {
        self.friendly_name = normalize_empty_string(friendly_name);
    }

    /// The URI classifying how the name is interpreted, if set.
    pub fn name_format(&self) -> Option<&NameFormat> {
        self.name_format.as_ref()
    }

    /// Set or clear the name format. A value that is not an absolute URI is rejected.
    pub fn set_name_format(&mut self, name_format: Option<String>) -> ValidationResult<()> {
        self.name_format = name_format.map(NameFormat::new).transpose()?;
        Ok(())
    }

    pub fn original_issuer(&self) -> Option<&str> {
        self.original_issuer.as_deref()
    }

    pub fn set_original_issuer(&mut self, original_issuer: Option<String>) {
        self.original_issuer = original_issuer;
    }

    /// The xsi:type of the values.
    pub fn value_type(&self) -> &str {
        self.value_type.as_str()
    }

    /// Replace the xsi:type of the values; the empty string is rejected.
    pub fn set_value_type(&mut self, value_type: impl Into<String>) -> ValidationResult<()> {
        self.value_type = ValueType::new(value_type.into())?;
        Ok(())
    }

    pub fn values(&self) -> &AttributeValues {
        &self.values
    }

    /// Mutable handle to the values for in-place insertion and removal.
    pub fn values_mut(&mut self) -> &mut AttributeValues {
        &mut self.values
    }

    /// Read-only view consumed by an XML serializer.
    pub fn element(&self) -> AttributeElement<'_> {
        AttributeElement::new(self)
    }
}

impl fmt::Display for Saml2Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Unvalidated wire form of an attribute.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttributeRecord {
    name: String,
    #[serde(default)]
    friendly_name: Option<String>,
    #[serde(default)]
    name_format: Option<String>,
    #[serde(default)]
    original_issuer: Option<String>,
    #[serde(default)]
    value_type: Option<String>,
    #[serde(default)]
    values: Vec<Option<String>>,
}

impl TryFrom<AttributeRecord> for Saml2Attribute {
    type Error = ValidationError;

    fn try_from(record: AttributeRecord) -> ValidationResult<Self> {
        let mut builder = Saml2AttributeBuilder::new(record.name).values(record.values);
        if let Some(friendly_name) = record.friendly_name {
            builder = builder.friendly_name(friendly_name);
        }
        if let Some(name_format) = record.name_format {
            builder = builder.name_format(name_format);
        }
        if let Some(original_issuer) = record.original_issuer {
            builder = builder.original_issuer(original_issuer);
        }
        if let Some(value_type) = record.value_type {
            builder = builder.value_type(value_type);
        }
        builder.build()
    }
}

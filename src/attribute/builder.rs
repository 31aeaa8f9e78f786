//! Fluent construction of [`Saml2Attribute`] values.
//!
//! The builder collects raw inputs and applies the attribute's own setter
//! validation in `build`, so the first invalid field is reported and no
//! attribute is produced.

use crate::attribute::core::Saml2Attribute;
use crate::attribute::value_objects::AttributeValues;
use crate::error::ValidationResult;

/// Builder for [`Saml2Attribute`].
///
/// # Example
/// ```rust
/// use saml2_attribute::Saml2Attribute;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let attr = Saml2Attribute::builder("urn:oid:2.5.4.42")
///         .friendly_name("givenName")
///         .name_format("urn:oasis:names:tc:SAML:2.0:attrname-format:uri")
///         .value("Alice")
///         .build()?;
///
///     assert_eq!(attr.friendly_name(), Some("givenName"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Saml2AttributeBuilder {
    name: String,
    friendly_name: Option<String>,
    name_format: Option<String>,
    original_issuer: Option<String>,
    value_type: Option<String>,
    values: AttributeValues,
}

impl Saml2AttributeBuilder {
    /// Create a builder with the given name and no values.
    ///
    /// Unlike [`Saml2Attribute::new`], which holds one null value, an
    /// attribute built without calling `value`, `null_value` or `values`
    /// has an empty value list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            friendly_name: None,
            name_format: None,
            original_issuer: None,
            value_type: None,
            values: AttributeValues::new(),
        }
    }

    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    pub fn name_format(mut self, name_format: impl Into<String>) -> Self {
        self.name_format = Some(name_format.into());
        self
    }

    pub fn original_issuer(mut self, original_issuer: impl Into<String>) -> Self {
        self.original_issuer = Some(original_issuer.into());
        self
    }

    /// Override the default string xsi:type.
    pub fn value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    /// Append a single value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(Some(value.into()));
        self
    }

    /// Append a null value.
    pub fn null_value(mut self) -> Self {
        self.values.push(None);
        self
    }

    /// Append a sequence of values, preserving order.
    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        AttributeValues: FromIterator<I::Item>,
    {
        let values: AttributeValues = values.into_iter().collect();
        self.values.extend(values);
        self
    }

    /// Validate every field and produce the attribute.
    pub fn build(self) -> ValidationResult<Saml2Attribute> {
        let mut attribute = Saml2Attribute::with_values(self.name, self.values)?;
        attribute.set_friendly_name(self.friendly_name);
        attribute.set_name_format(self.name_format)?;
        attribute.set_original_issuer(self.original_issuer);
        if let Some(value_type) = self.value_type {
            attribute.set_value_type(value_type)?;
        }
        Ok(attribute)
    }
}

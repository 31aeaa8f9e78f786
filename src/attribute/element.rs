//! Read-only view of an attribute for XML serializers.
//!
//! The view exposes exactly what is emitted for a SAML2 `Attribute` element:
//! the element's XML attributes (unset optionals omitted) and one
//! `AttributeValue` child per value, each typed with the attribute's xsi:type.
//! Names are given as `(namespace, local name)`; prefixes are the
//! serializer's concern.

use crate::attribute::core::Saml2Attribute;
use crate::constants::{CLAIMS_NAMESPACE, SAML2_ASSERTION_NAMESPACE, XSI_NAMESPACE, names};

/// A namespace-qualified XML name: `(namespace, local name)`.
pub type QualifiedName = (&'static str, &'static str);

/// Borrowed view of a [`Saml2Attribute`].
#[derive(Debug, Clone, Copy)]
pub struct AttributeElement<'a> {
    attribute: &'a Saml2Attribute,
}

/// One `AttributeValue` child element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeValueElement<'a> {
    /// Value of the `xsi:type` attribute.
    pub xsi_type: &'a str,
    /// Text content; `None` for a null value.
    pub value: Option<&'a str>,
}

impl<'a> AttributeValueElement<'a> {
    /// `saml:AttributeValue`
    pub fn element_name(&self) -> QualifiedName {
        (SAML2_ASSERTION_NAMESPACE, names::ATTRIBUTE_VALUE)
    }

    /// The `xsi:type` attribute as `((namespace, local name), value)`.
    pub fn xsi_type_attribute(&self) -> (QualifiedName, &'a str) {
        ((XSI_NAMESPACE, names::TYPE), self.xsi_type)
    }
}

impl<'a> AttributeElement<'a> {
    pub(crate) fn new(attribute: &'a Saml2Attribute) -> Self {
        Self { attribute }
    }

    /// `saml:Attribute`
    pub fn element_name(&self) -> QualifiedName {
        (SAML2_ASSERTION_NAMESPACE, names::ATTRIBUTE)
    }

    pub fn name(&self) -> &'a str {
        self.attribute.name()
    }

    pub fn friendly_name(&self) -> Option<&'a str> {
        self.attribute.friendly_name()
    }

    pub fn name_format(&self) -> Option<&'a str> {
        self.attribute.name_format().map(|f| f.as_str())
    }

    pub fn original_issuer(&self) -> Option<&'a str> {
        self.attribute.original_issuer()
    }

    /// The claims-namespace `OriginalIssuer` attribute, omitted when unset.
    pub fn original_issuer_attribute(&self) -> Option<(QualifiedName, &'a str)> {
        self.original_issuer()
            .map(|issuer| ((CLAIMS_NAMESPACE, names::ORIGINAL_ISSUER), issuer))
    }

    /// `(local name, value)` pairs of the unqualified SAML2 XML attributes, in
    /// document order. `OriginalIssuer` lives in another namespace; see
    /// [`original_issuer_attribute`](Self::original_issuer_attribute).
    pub fn xml_attributes(&self) -> Vec<(&'static str, &'a str)> {
        let mut attributes = vec![(names::NAME, self.name())];
        if let Some(friendly_name) = self.friendly_name() {
            attributes.push((names::FRIENDLY_NAME, friendly_name));
        }
        if let Some(name_format) = self.name_format() {
            attributes.push((names::NAME_FORMAT, name_format));
        }
        attributes
    }

    /// The value children in order.
    pub fn values(&self) -> impl Iterator<Item = AttributeValueElement<'a>> {
        let xsi_type = self.attribute.value_type();
        self.attribute
            .values()
            .iter()
            .map(move |value| AttributeValueElement { xsi_type, value })
    }
}

//! Well-known SAML2 names and URIs used by attribute assertions.

/// Default xsi:type of attribute values: the standard string claim value type.
pub const STRING_CLAIM_VALUE_TYPE: &str = "http://www.w3.org/2001/XMLSchema#string";

/// SAML2 assertion namespace [Saml2Core, 2.1].
pub const SAML2_ASSERTION_NAMESPACE: &str = "urn:oasis:names:tc:SAML:2.0:assertion";

/// Namespace of the `OriginalIssuer` extension attribute.
pub const CLAIMS_NAMESPACE: &str = "http://schemas.xmlsoap.org/ws/2009/09/identity/claims";

/// XML schema instance namespace, owner of `xsi:type`.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Element and attribute local names.
pub mod names {
    pub const ATTRIBUTE: &str = "Attribute";
    pub const ATTRIBUTE_VALUE: &str = "AttributeValue";
    pub const NAME: &str = "Name";
    pub const FRIENDLY_NAME: &str = "FriendlyName";
    pub const NAME_FORMAT: &str = "NameFormat";
    pub const ORIGINAL_ISSUER: &str = "OriginalIssuer";
    pub const TYPE: &str = "type";
}

/// Attribute name formats defined in [Saml2Core, 8.2].
pub mod name_formats {
    pub const UNSPECIFIED: &str = "urn:oasis:names:tc:SAML:2.0:attrname-format:unspecified";
    pub const URI: &str = "urn:oasis:names:tc:SAML:2.0:attrname-format:uri";
    pub const BASIC: &str = "urn:oasis:names:tc:SAML:2.0:attrname-format:basic";
}

//! JSON surface and the XML element view.

use crate::common::mail_attribute;
use saml2_attribute::constants::{
    CLAIMS_NAMESPACE, SAML2_ASSERTION_NAMESPACE, STRING_CLAIM_VALUE_TYPE, XSI_NAMESPACE, names,
};
use saml2_attribute::{Saml2Attribute, Saml2Error, ValidationError};
use serde_json::json;

#[test]
fn test_json_round_trip_preserves_everything() {
    let mut attr = mail_attribute();
    attr.set_original_issuer(Some("https://idp.example.org".to_string()));
    attr.values_mut().push(None);

    let value = attr.to_json().unwrap();
    assert_eq!(
        value,
        json!({
            "name": "urn:oid:0.9.2342.19200300.100.1.3",
            "friendlyName": "mail",
            "nameFormat": "urn:oasis:names:tc:SAML:2.0:attrname-format:uri",
            "originalIssuer": "https://idp.example.org",
            "valueType": STRING_CLAIM_VALUE_TYPE,
            "values": ["a@x.com", "b@x.com", null]
        })
    );

    let parsed = Saml2Attribute::from_json(value).unwrap();
    assert_eq!(parsed, attr);
}

#[test]
fn test_from_json_rejects_empty_name() {
    let result = Saml2Attribute::from_json(json!({ "name": "", "values": [] }));
    assert!(matches!(
        result,
        Err(Saml2Error::Validation(ValidationError::NullOrEmptyArgument { .. }))
    ));
}

#[test]
fn test_from_json_rejects_null_values_sequence() {
    let result = Saml2Attribute::from_json(json!({ "name": "x", "values": null }));
    assert!(matches!(result, Err(Saml2Error::Json(_))));
}

#[test]
fn test_serde_from_str_validates() {
    let result: Result<Saml2Attribute, _> =
        serde_json::from_str(r#"{"name":"x","nameFormat":"relative"}"#);
    let error = result.unwrap_err();
    assert!(error.to_string().contains("relative"));
}

#[test]
fn test_element_view() {
    let attr = mail_attribute();
    let element = attr.element();

    assert_eq!(element.name(), "urn:oid:0.9.2342.19200300.100.1.3");
    assert_eq!(
        element.xml_attributes(),
        vec![
            (names::NAME, "urn:oid:0.9.2342.19200300.100.1.3"),
            (names::FRIENDLY_NAME, "mail"),
            (
                names::NAME_FORMAT,
                "urn:oasis:names:tc:SAML:2.0:attrname-format:uri"
            ),
        ]
    );

    let values: Vec<_> = element
        .values()
        .map(|v| (v.xsi_type, v.value))
        .collect();
    assert_eq!(
        values,
        vec![
            (STRING_CLAIM_VALUE_TYPE, Some("a@x.com")),
            (STRING_CLAIM_VALUE_TYPE, Some("b@x.com")),
        ]
    );
}

#[test]
fn test_element_omits_unset_optionals() {
    let attr = Saml2Attribute::with_values("x", Vec::<String>::new()).unwrap();
    let element = attr.element();
    assert_eq!(element.xml_attributes(), vec![(names::NAME, "x")]);
    assert_eq!(element.friendly_name(), None);
    assert_eq!(element.name_format(), None);
    assert_eq!(element.values().count(), 0);
}

#[test]
fn test_element_qualified_names() {
    let mut attr = mail_attribute();
    attr.set_original_issuer(Some("https://idp.example.org".to_string()));
    let element = attr.element();

    assert_eq!(
        element.element_name(),
        (SAML2_ASSERTION_NAMESPACE, names::ATTRIBUTE)
    );
    assert_eq!(
        element.original_issuer_attribute(),
        Some((
            (CLAIMS_NAMESPACE, names::ORIGINAL_ISSUER),
            "https://idp.example.org"
        ))
    );

    for value in element.values() {
        assert_eq!(
            value.element_name(),
            (SAML2_ASSERTION_NAMESPACE, names::ATTRIBUTE_VALUE)
        );
        assert_eq!(
            value.xsi_type_attribute(),
            ((XSI_NAMESPACE, names::TYPE), STRING_CLAIM_VALUE_TYPE)
        );
    }
}

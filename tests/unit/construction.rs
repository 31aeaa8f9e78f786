//! Constructor and builder behavior.

use crate::common::{init_logging, mail_attribute};
use saml2_attribute::constants::STRING_CLAIM_VALUE_TYPE;
use saml2_attribute::{Saml2Attribute, ValidationError};

#[test]
fn test_email_address_scenario() {
    init_logging();
    let attr = Saml2Attribute::with_values("emailAddress", ["a@x.com", "b@x.com"]).unwrap();

    assert_eq!(attr.name(), "emailAddress");
    assert_eq!(
        attr.values().iter().collect::<Vec<_>>(),
        vec![Some("a@x.com"), Some("b@x.com")]
    );
    assert_eq!(attr.value_type(), STRING_CLAIM_VALUE_TYPE);
    assert!(attr.name_format().is_none());
    assert!(attr.friendly_name().is_none());
    assert!(attr.original_issuer().is_none());
}

#[test]
fn test_name_only_constructor_keeps_null_value() {
    let attr = Saml2Attribute::new("role").unwrap();
    assert_eq!(attr.values().as_slice(), &[None::<String>]);
}

#[test]
fn test_single_value_constructor() {
    let attr = Saml2Attribute::with_value("role", Some("admin".to_string())).unwrap();
    assert_eq!(attr.values().as_slice(), &[Some("admin".to_string())]);

    let attr = Saml2Attribute::with_value("role", None).unwrap();
    assert_eq!(attr.values().len(), 1);
}

#[test]
fn test_values_copied_without_filtering() {
    let source = vec![
        Some("dup".to_string()),
        None,
        Some(String::new()),
        Some("dup".to_string()),
    ];
    let attr = Saml2Attribute::with_values("x", source.clone()).unwrap();
    assert_eq!(attr.values().as_slice(), source.as_slice());
}

#[test]
fn test_empty_name_rejected_by_every_constructor() {
    init_logging();
    let expected = ValidationError::NullOrEmptyArgument {
        argument: "name".to_string(),
    };
    assert_eq!(Saml2Attribute::new("").unwrap_err(), expected);
    assert_eq!(
        Saml2Attribute::with_value("", Some("v".to_string())).unwrap_err(),
        expected
    );
    assert_eq!(
        Saml2Attribute::with_values("", ["v"]).unwrap_err(),
        expected
    );
    assert_eq!(Saml2Attribute::builder("").build().unwrap_err(), expected);
}

#[test]
fn test_absent_sequence_rejected() {
    let result = Saml2Attribute::try_with_values("x", None::<Vec<Option<String>>>);
    assert!(matches!(
        result,
        Err(ValidationError::NullOrEmptyArgument { ref argument }) if argument == "values"
    ));
}

#[test]
fn test_present_sequence_accepted() {
    let attr = Saml2Attribute::try_with_values("x", Some(vec!["1", "2"])).unwrap();
    assert_eq!(attr.values().len(), 2);
}

#[test]
fn test_builder_fixture() {
    let attr = mail_attribute();
    assert_eq!(attr.friendly_name(), Some("mail"));
    assert_eq!(
        attr.name_format().map(|f| f.as_str()),
        Some("urn:oasis:names:tc:SAML:2.0:attrname-format:uri")
    );
    assert_eq!(attr.values().len(), 2);
}

//! Property-based checks of the attribute invariants.

use proptest::prelude::*;
use saml2_attribute::{Saml2Attribute, ValidationError};

fn absolute_uri_strategy() -> impl Strategy<Value = String> {
    ("[a-zA-Z][a-zA-Z0-9+.-]{0,10}", "[a-zA-Z0-9:/._~?#=-]{0,30}")
        .prop_map(|(scheme, rest)| format!("{}:{}", scheme, rest))
}

fn relative_uri_strategy() -> impl Strategy<Value = String> {
    // No colon at all, so there is no scheme.
    "[a-zA-Z0-9/._~?#=-]{0,30}"
}

fn values_strategy() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of("[a-z@.]{0,6}"), 0..8)
}

proptest! {
    #[test]
    fn test_non_empty_names_round_trip(name in ".{1,40}") {
        let attr = Saml2Attribute::new(name.clone()).unwrap();
        prop_assert_eq!(attr.name(), name.as_str());
    }

    #[test]
    fn test_values_preserved_in_order(values in values_strategy()) {
        let attr = Saml2Attribute::with_values("x", values.clone()).unwrap();
        prop_assert_eq!(attr.values().as_slice(), values.as_slice());
    }

    #[test]
    fn test_absolute_name_formats_round_trip(uri in absolute_uri_strategy()) {
        let mut attr = Saml2Attribute::new("x").unwrap();
        attr.set_name_format(Some(uri.clone())).unwrap();
        prop_assert_eq!(attr.name_format().unwrap().as_str(), uri.as_str());
    }

    #[test]
    fn test_relative_name_formats_rejected(uri in relative_uri_strategy()) {
        let mut attr = Saml2Attribute::new("x").unwrap();
        let result = attr.set_name_format(Some(uri.clone()));
        prop_assert_eq!(result, Err(ValidationError::InvalidUriFormat { uri }));
        prop_assert!(attr.name_format().is_none());
    }

    #[test]
    fn test_value_types_round_trip(value_type in ".{1,40}") {
        let mut attr = Saml2Attribute::new("x").unwrap();
        attr.set_value_type(value_type.clone()).unwrap();
        prop_assert_eq!(attr.value_type(), value_type.as_str());
    }

    #[test]
    fn test_friendly_name_never_empty(friendly_name in prop::option::of(".{0,10}")) {
        let mut attr = Saml2Attribute::new("x").unwrap();
        attr.set_friendly_name(friendly_name.clone());
        prop_assert_ne!(attr.friendly_name(), Some(""));
        if let Some(name) = friendly_name.filter(|n| !n.is_empty()) {
            prop_assert_eq!(attr.friendly_name(), Some(name.as_str()));
        }
    }
}

//! String normalization shared by optional attribute fields.

/// Map an empty string to `None`; everything else passes through unchanged.
///
/// ```rust
/// use saml2_attribute::normalize::normalize_empty_string;
///
/// assert_eq!(normalize_empty_string(Some(String::new())), None);
/// assert_eq!(normalize_empty_string(Some("Bob".to_string())), Some("Bob".to_string()));
/// assert_eq!(normalize_empty_string(None), None);
/// ```
pub fn normalize_empty_string(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

//! Ordered value list of a SAML2 attribute.
//!
//! Order is meaningful and preserved through serialization. Duplicates and
//! null (`None`) elements are kept as given; the container enforces nothing
//! beyond ordering.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// The owned, ordered values of an attribute.
///
/// ```rust
/// use saml2_attribute::attribute::value_objects::AttributeValues;
///
/// let mut values: AttributeValues = ["a@x.com", "b@x.com"].into_iter().collect();
/// values.push(Some("a@x.com".to_string()));
/// assert!(values.insert(0, None));
/// assert!(!values.insert(10, None));
///
/// assert_eq!(values.len(), 4);
/// assert_eq!(values[0], None);
/// assert_eq!(values.get(3), Some(Some("a@x.com")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeValues(Vec<Option<String>>);

impl AttributeValues {
    /// Creates an empty value list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a value list holding exactly one (possibly null) value.
    pub fn single(value: Option<String>) -> Self {
        Self(vec![value])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value at `index`; the inner option is `None` for a null value.
    pub fn get(&self, index: usize) -> Option<Option<&str>> {
        self.0.get(index).map(|v| v.as_deref())
    }

    /// Appends a value.
    pub fn push(&mut self, value: Option<String>) {
        self.0.push(value);
    }

    /// Inserts a value at `index`, returning `false` and leaving the list
    /// unchanged when `index > len`.
    pub fn insert(&mut self, index: usize, value: Option<String>) -> bool {
        if index > self.0.len() {
            return false;
        }
        self.0.insert(index, value);
        true
    }

    /// Removes and returns the value at `index`, or `None` when out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Option<String>> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Removes the first occurrence of `value`, returning whether one was found.
    pub fn remove_value(&mut self, value: Option<&str>) -> bool {
        match self.0.iter().position(|v| v.as_deref() == value) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates the values in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.0.iter().map(|v| v.as_deref())
    }

    pub fn as_slice(&self) -> &[Option<String>] {
        &self.0
    }
}

impl Index<usize> for AttributeValues {
    type Output = Option<String>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<Option<String>>> for AttributeValues {
    fn from(values: Vec<Option<String>>) -> Self {
        Self(values)
    }
}

impl From<Vec<String>> for AttributeValues {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl FromIterator<Option<String>> for AttributeValues {
    fn from_iter<I: IntoIterator<Item = Option<String>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<String> for AttributeValues {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().map(Some).collect())
    }
}

impl<'a> FromIterator<&'a str> for AttributeValues {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(|v| Some(v.to_string())).collect())
    }
}

impl Extend<Option<String>> for AttributeValues {
    fn extend<I: IntoIterator<Item = Option<String>>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for AttributeValues {
    type Item = Option<String>;
    type IntoIter = std::vec::IntoIter<Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttributeValues {
    type Item = &'a Option<String>;
    type IntoIter = std::slice::Iter<'a, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! Self-validating SAML2 attribute assertions.
//!
//! Models the `Attribute` element of SAML2 Core (section 2.7.3.1): a name plus
//! an ordered list of values, validated at construction and on every write so
//! that a malformed attribute never reaches a serializer or signer.
//!
//! # Core Components
//!
//! - [`Saml2Attribute`] - The attribute assertion and its validating mutators
//! - [`Saml2AttributeBuilder`] - Fluent construction
//! - [`AttributeElement`] - Read-only view for XML serializers
//! - [`ValidationError`] - Errors raised on invalid writes
//!
//! # Quick Start
//!
//! ```rust
//! use saml2_attribute::Saml2Attribute;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut attr = Saml2Attribute::with_values("emailAddress", ["a@x.com", "b@x.com"])?;
//!     attr.set_friendly_name(Some("Email".to_string()));
//!     attr.values_mut().push(Some("c@x.com".to_string()));
//!
//!     for value in attr.element().values() {
//!         println!("{} ({})", value.value.unwrap_or_default(), value.xsi_type);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Rejected writes are logged at `debug` level through the [`log`] facade.

pub mod attribute;
pub mod constants;
pub mod error;
pub mod normalize;

// Re-export commonly used types for convenience
pub use attribute::value_objects::{AttributeName, AttributeValues, NameFormat, ValueType};
pub use attribute::{
    AttributeElement, AttributeValueElement, QualifiedName, Saml2Attribute, Saml2AttributeBuilder,
};
pub use error::{Saml2Error, Saml2Result, ValidationError, ValidationResult};

//! SAML2 attribute assertions.
//!
//! - [`Saml2Attribute`] - the `Attribute` element and its invariant-enforcing accessors
//! - [`Saml2AttributeBuilder`] - fluent construction
//! - [`AttributeElement`] - read-only view for XML serializers
//! - [`value_objects`] - self-validating field types

pub mod builder;
pub mod core;
pub mod element;
pub mod value_objects;

pub use builder::Saml2AttributeBuilder;
pub use self::core::Saml2Attribute;
pub use element::{AttributeElement, AttributeValueElement, QualifiedName};

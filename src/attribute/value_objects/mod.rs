//! Value objects for the fields of a SAML2 attribute.
//!
//! Each value object enforces its invariant at construction time, so an
//! attribute holding one can never be in an invalid state.
//!
//! ```rust
//! use saml2_attribute::attribute::value_objects::{AttributeName, NameFormat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let name = AttributeName::new("emailAddress".to_string())?;
//!     let format =
//!         NameFormat::new("urn:oasis:names:tc:SAML:2.0:attrname-format:basic".to_string())?;
//!     println!("{} ({})", name, format);
//!     Ok(())
//! }
//! ```
mod attribute_name;
mod attribute_values;
mod name_format;
mod value_type;

pub use attribute_name::AttributeName;
pub use attribute_values::AttributeValues;
pub use name_format::NameFormat;
pub use value_type::ValueType;

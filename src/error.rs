//! Error types for SAML2 attribute assertions.
//!
//! Validation failures are programmer-input errors raised at the point of
//! assignment. They are never retried; callers surface them to whatever
//! produced the invalid input.

/// Main error type for the outer (JSON) surface of the crate.
#[derive(Debug, thiserror::Error)]
pub enum Saml2Error {
    /// An attribute field violated its invariant
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors raised by attribute constructors and mutators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required argument was null or empty
    #[error("Argument '{argument}' cannot be null or empty")]
    NullOrEmptyArgument { argument: String },

    /// NameFormat was assigned a value that is not an absolute URI
    #[error("NameFormat '{uri}' must be an absolute URI")]
    InvalidUriFormat { uri: String },
}

impl ValidationError {
    /// Create a null-or-empty argument error and log it.
    pub fn null_or_empty(argument: impl Into<String>) -> Self {
        let error = Self::NullOrEmptyArgument {
            argument: argument.into(),
        };
        log::debug!("{}", error);
        error
    }

    /// Create an invalid URI format error carrying the rejected value and log it.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        let error = Self::InvalidUriFormat { uri: uri.into() };
        log::debug!("{}", error);
        error
    }

    /// The argument name or rejected value this error refers to.
    pub fn argument(&self) -> &str {
        match self {
            Self::NullOrEmptyArgument { argument } => argument,
            Self::InvalidUriFormat { uri } => uri,
        }
    }
}

// Result type aliases for convenience
pub type Saml2Result<T> = Result<T, Saml2Error>;
pub type ValidationResult<T> = Result<T, ValidationError>;

//! Validation error types

use std::fmt;

/// Validation error for request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required parameter is absent
    Missing { field: &'static str },

    /// Value is shorter than the allowed minimum (in characters)
    TooShort { field: &'static str, min: usize },

    /// String doesn't parse as the expected type
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Query parameter could not be deserialized into its type
    Malformed { field: String, detail: String },
}

impl ValidationError {
    /// Name of the parameter that failed validation.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field }
            | Self::TooShort { field, .. }
            | Self::InvalidFormat { field, .. } => *field,
            Self::Malformed { field, .. } => field.as_str(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::Malformed { field, detail } => write!(f, "invalid {}: {}", field, detail),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Raw request parameters that validate into a checked value.
///
/// Used by the `ValidQuery` extractor so validation runs before the
/// handler (and before any database session is acquired).
pub trait Validate {
    type Valid;

    fn validate(self) -> Result<Self::Valid, ValidationError>;
}

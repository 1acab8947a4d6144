//! Error types for sieve operations

/// Errors that can occur while validating or parsing a sieve bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveError {
    /// Bound is below zero
    NegativeBound,
    /// Bound text is empty or not a whole decimal number
    NotAnInteger,
    /// Bound exceeds the largest addressable marking array
    BoundTooLarge,
}

/// Error categories for simplified handling
///
/// Every sieve failure is a bad input, so there is one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// The caller supplied a bound the sieve cannot run on
    InvalidArgument,
}

impl SieveError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SieveError::NegativeBound | SieveError::NotAnInteger | SieveError::BoundTooLarge => {
                ErrorCategory::InvalidArgument
            }
        }
    }
}

impl core::fmt::Display for SieveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SieveError::NegativeBound => "bound must be non-negative",
            SieveError::NotAnInteger => "bound must be a whole decimal number",
            SieveError::BoundTooLarge => "bound is too large to sieve",
        };
        write!(f, "{msg}")
    }
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorCategory::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

impl core::error::Error for SieveError {}

/// Result type for sieve operations
pub type Result<T> = core::result::Result<T, SieveError>;

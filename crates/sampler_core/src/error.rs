//! Error types for sampler construction and configuration.
//!
//! This module provides:
//! - `SamplerError`: parameter validation and configuration failures
//! - `Result`: crate-wide result alias

use thiserror::Error;

/// Sampler errors.
///
/// Raised synchronously by constructors (and by [`uniform_choice`] per call)
/// when an argument would make the distribution undefined. A validated
/// generator never fails while sampling.
///
/// # Variants
/// - `InvalidParameter`: non-positive or non-finite scale, empty collection
/// - `Config`: configuration file could not be read or parsed
///
/// # Examples
/// ```
/// use sampler_core::SamplerError;
///
/// let err = SamplerError::invalid("sigma", "must be positive, got -1");
/// assert!(err.to_string().contains("sigma"));
/// ```
///
/// [`uniform_choice`]: crate::uniform_choice
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SamplerError {
    /// A parameter is outside the domain of the distribution.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SamplerError {
    /// Shorthand for [`SamplerError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SamplerError>;

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SamplerError::invalid(
            name,
            format!("must be finite and positive, got {}", value),
        ))
    }
}

/// Checks that `value` is finite.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SamplerError::invalid(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

//! Error types for option pricing.
//!
//! Windowed statistics never fail: degenerate inputs resolve to `0`. The only
//! failure surfaced to callers is an expiration that can not be turned into a
//! calendar date.

use alloc::string::String;

use thiserror::Error;

/// Option pricing errors.
///
/// # Examples
/// ```
/// use series_analytics::PricingError;
///
/// let err = PricingError::InvalidExpirationFormat { expiration: "soon".into() };
/// assert!(format!("{}", err).contains("soon"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The expiration does not contain a `digits-digits-digits` date.
    #[error("Invalid expiration format: {expiration:?}")]
    InvalidExpirationFormat {
        /// The rejected expiration string
        expiration: String,
    },

    /// The expiration matched but does not name a representable instant.
    #[error("Expiration out of range: {expiration:?}")]
    ExpirationOutOfRange {
        /// The rejected expiration string
        expiration: String,
    },
}

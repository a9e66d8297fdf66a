//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `ValidationError`: Rejection of contract parameters for which the
//!   Black-Scholes formulas are undefined

use thiserror::Error;

/// Contract parameter validation errors.
///
/// Raised by [`OptionContract::new`](crate::OptionContract::new) before any
/// formula is evaluated. Each variant names the offending field and carries
/// the rejected value.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike price
/// - `InvalidRate`: Non-finite risk-free rate (any finite rate is accepted)
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidTerm`: Non-positive or non-finite time to expiration
///
/// # Examples
/// ```
/// use pricer_analytic::ValidationError;
///
/// let err = ValidationError::InvalidVolatility { volatility: -0.2 };
/// assert_eq!(err.field(), "volatility");
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ValidationError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot} (must be positive and finite)")]
    InvalidSpot {
        /// The rejected spot price
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike price: K = {strike} (must be positive and finite)")]
    InvalidStrike {
        /// The rejected strike price
        strike: f64,
    },

    /// Invalid risk-free rate.
    #[error("Invalid rate: r = {rate} (must be finite)")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility} (must be positive and finite)")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Invalid time to expiration.
    #[error("Invalid term: T = {term} (must be positive and finite)")]
    InvalidTerm {
        /// The rejected time to expiration, in years
        term: f64,
    },
}

impl ValidationError {
    /// Name of the contract field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidSpot { .. } => "spot",
            ValidationError::InvalidStrike { .. } => "strike",
            ValidationError::InvalidRate { .. } => "rate",
            ValidationError::InvalidVolatility { .. } => "volatility",
            ValidationError::InvalidTerm { .. } => "term",
        }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        match *self {
            ValidationError::InvalidSpot { spot } => spot,
            ValidationError::InvalidStrike { strike } => strike,
            ValidationError::InvalidRate { rate } => rate,
            ValidationError::InvalidVolatility { volatility } => volatility,
            ValidationError::InvalidTerm { term } => term,
        }
    }
}

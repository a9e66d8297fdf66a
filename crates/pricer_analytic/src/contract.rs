//! Option contract definitions.
//!
//! This module provides:
//! - `OptionType`: Call/put tag selecting the formula branch
//! - `ContractParams`: Raw, unvalidated contract parameters
//! - `OptionContract`: Validated contract consumed by the pricing engine

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::ValidationError;

/// Type of European option.
///
/// # Examples
/// ```
/// use pricer_analytic::OptionType;
///
/// let ty: OptionType = "Put".parse().unwrap();
/// assert_eq!(ty, OptionType::Put);
/// assert_eq!(ty.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike: payoff max(S - K, 0)
    Call,
    /// Right to sell at the strike: payoff max(K - S, 0)
    Put,
}

impl OptionType {
    /// Both option types, call first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Error returned when parsing an unknown option type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown option type: {0}. Must be one of: call, put")]
pub struct ParseOptionTypeError(pub String);

impl FromStr for OptionType {
    type Err = ParseOptionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(ParseOptionTypeError(s.to_string())),
        }
    }
}

/// Unvalidated contract parameters.
///
/// Field names match the columns accepted by batch inputs. Convert into an
/// [`OptionContract`] with `TryFrom` to validate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractParams {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Annualised continuously-compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
    /// Time to expiration in years (T)
    pub term: f64,
}

/// A validated European option contract.
///
/// Immutable once constructed. `spot`, `strike`, `volatility` and `term`
/// are strictly positive and finite; `rate` is finite and may be negative.
///
/// # Examples
/// ```
/// use pricer_analytic::OptionContract;
///
/// let contract = OptionContract::new(100.0, 105.0, 0.05, 0.2, 0.5).unwrap();
/// assert_eq!(contract.strike(), 105.0);
///
/// // Zero time to expiration is rejected
/// assert!(OptionContract::new(100.0, 105.0, 0.05, 0.2, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ContractParams"))]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    term: f64,
}

impl OptionContract {
    /// Creates a validated contract.
    ///
    /// # Arguments
    /// * `spot` - Spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Risk-free rate, annualised (any finite value)
    /// * `volatility` - Volatility, annualised (must be positive)
    /// * `term` - Time to expiration in years (must be positive)
    ///
    /// # Errors
    /// Returns the `ValidationError` for the first offending field, checked
    /// in the order spot, strike, rate, volatility, term. NaN and infinite
    /// values are rejected.
    ///
    /// Two joint conditions follow the per-field checks:
    /// - σ√T must be a normal float, otherwise `InvalidVolatility`
    /// - K·e^(-rT) must be finite, otherwise `InvalidRate`
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        term: f64,
    ) -> Result<Self, ValidationError> {
        let result = if !is_positive_finite(spot) {
            Err(ValidationError::InvalidSpot { spot })
        } else if !is_positive_finite(strike) {
            Err(ValidationError::InvalidStrike { strike })
        } else if !rate.is_finite() {
            Err(ValidationError::InvalidRate { rate })
        } else if !is_positive_finite(volatility) {
            Err(ValidationError::InvalidVolatility { volatility })
        } else if !is_positive_finite(term) {
            Err(ValidationError::InvalidTerm { term })
        } else if !(volatility * term.sqrt()).is_normal() {
            // σ√T underflows: d1 would be ±∞ or NaN
            Err(ValidationError::InvalidVolatility { volatility })
        } else if !(strike * (-rate * term).exp()).is_finite() {
            Err(ValidationError::InvalidRate { rate })
        } else {
            Ok(Self {
                spot,
                strike,
                rate,
                volatility,
                term,
            })
        };

        if let Err(err) = &result {
            debug!(field = err.field(), value = err.value(), "rejected option contract");
        }
        result
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to expiration in years.
    #[inline]
    pub fn term(&self) -> f64 {
        self.term
    }

    /// Returns the raw parameters of this contract.
    pub fn params(&self) -> ContractParams {
        ContractParams {
            spot: self.spot,
            strike: self.strike,
            rate: self.rate,
            volatility: self.volatility,
            term: self.term,
        }
    }
}

impl TryFrom<ContractParams> for OptionContract {
    type Error = ValidationError;

    fn try_from(params: ContractParams) -> Result<Self, Self::Error> {
        OptionContract::new(
            params.spot,
            params.strike,
            params.rate,
            params.volatility,
            params.term,
        )
    }
}

impl From<OptionContract> for ContractParams {
    fn from(contract: OptionContract) -> Self {
        contract.params()
    }
}

// NaN fails the comparison, so it is rejected along with non-positive values
#[inline]
fn is_positive_finite(x: f64) -> bool {
    x > 0.0 && x.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================
    // OptionType Tests
    // ==========================================================

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(" p ".parse::<OptionType>().unwrap(), OptionType::Put);

        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert_eq!(err, ParseOptionTypeError("straddle".to_string()));
        assert!(err.to_string().contains("straddle"));
    }

    #[test]
    fn test_option_type_display() {
        assert_eq!(format!("{}", OptionType::Call), "call");
        assert_eq!(format!("{}", OptionType::Put), "put");
    }

    #[test]
    fn test_option_type_all() {
        assert_eq!(OptionType::ALL, [OptionType::Call, OptionType::Put]);
    }

    // ==========================================================
    // OptionContract Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let contract = OptionContract::new(100.0, 110.0, 0.05, 0.2, 0.5).unwrap();
        assert_eq!(contract.spot(), 100.0);
        assert_eq!(contract.strike(), 110.0);
        assert_eq!(contract.rate(), 0.05);
        assert_eq!(contract.volatility(), 0.2);
        assert_eq!(contract.term(), 0.5);
    }

    #[test]
    fn test_negative_and_zero_rate_allowed() {
        assert!(OptionContract::new(100.0, 100.0, -0.02, 0.2, 1.0).is_ok());
        assert!(OptionContract::new(100.0, 100.0, 0.0, 0.2, 1.0).is_ok());
    }

    #[test]
    fn test_zero_parameters_rejected() {
        assert_eq!(
            OptionContract::new(0.0, 100.0, 0.05, 0.2, 1.0),
            Err(ValidationError::InvalidSpot { spot: 0.0 })
        );
        assert_eq!(
            OptionContract::new(100.0, 0.0, 0.05, 0.2, 1.0),
            Err(ValidationError::InvalidStrike { strike: 0.0 })
        );
        assert_eq!(
            OptionContract::new(100.0, 100.0, 0.05, 0.0, 1.0),
            Err(ValidationError::InvalidVolatility { volatility: 0.0 })
        );
        assert_eq!(
            OptionContract::new(100.0, 100.0, 0.05, 0.2, 0.0),
            Err(ValidationError::InvalidTerm { term: 0.0 })
        );
    }

    #[test]
    fn test_negative_parameters_rejected() {
        match OptionContract::new(-100.0, 100.0, 0.05, 0.2, 1.0).unwrap_err() {
            ValidationError::InvalidSpot { spot } => assert_eq!(spot, -100.0),
            other => panic!("Expected InvalidSpot, got {:?}", other),
        }
        match OptionContract::new(100.0, 100.0, 0.05, -0.2, 1.0).unwrap_err() {
            ValidationError::InvalidVolatility { volatility } => assert_eq!(volatility, -0.2),
            other => panic!("Expected InvalidVolatility, got {:?}", other),
        }
        match OptionContract::new(100.0, 100.0, 0.05, 0.2, -1.0).unwrap_err() {
            ValidationError::InvalidTerm { term } => assert_eq!(term, -1.0),
            other => panic!("Expected InvalidTerm, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        let err = OptionContract::new(f64::NAN, 100.0, 0.05, 0.2, 1.0).unwrap_err();
        assert_eq!(err.field(), "spot");

        let err = OptionContract::new(100.0, f64::INFINITY, 0.05, 0.2, 1.0).unwrap_err();
        assert_eq!(err.field(), "strike");

        let err = OptionContract::new(100.0, 100.0, f64::NAN, 0.2, 1.0).unwrap_err();
        assert_eq!(err.field(), "rate");

        let err = OptionContract::new(100.0, 100.0, f64::NEG_INFINITY, 0.2, 1.0).unwrap_err();
        assert_eq!(err.field(), "rate");

        let err = OptionContract::new(100.0, 100.0, 0.05, f64::NAN, 1.0).unwrap_err();
        assert_eq!(err.field(), "volatility");

        let err = OptionContract::new(100.0, 100.0, 0.05, 0.2, f64::INFINITY).unwrap_err();
        assert_eq!(err.field(), "term");
    }

    #[test]
    fn test_first_offending_field_reported() {
        let err = OptionContract::new(0.0, 0.0, 0.05, 0.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "spot");

        let err = OptionContract::new(100.0, 100.0, 0.05, 0.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "volatility");
    }

    #[test]
    fn test_degenerate_scale_rejected() {
        // σ√T = 1e-330 underflows past the subnormal range
        let err = OptionContract::new(100.0, 100.0, 0.0, 1e-200, 1e-260).unwrap_err();
        assert_eq!(err, ValidationError::InvalidVolatility { volatility: 1e-200 });

        // σ√T = 1e-310 is subnormal
        let err = OptionContract::new(100.0, 100.0, 0.05, 1e-300, 1e-20).unwrap_err();
        assert_eq!(err.field(), "volatility");

        // Tiny but normal scale is still accepted
        assert!(OptionContract::new(100.0, 100.0, 0.05, 1e-150, 1e-100).is_ok());
    }

    #[test]
    fn test_discounted_strike_overflow_rejected() {
        let err = OptionContract::new(100.0, 1e300, -1e3, 0.2, 1.0).unwrap_err();
        assert_eq!(err, ValidationError::InvalidRate { rate: -1e3 });

        // A vanishing discount factor is fine
        assert!(OptionContract::new(100.0, 100.0, 1e3, 0.2, 1.0).is_ok());
    }

    #[test]
    fn test_params_round_trip() {
        let contract = OptionContract::new(22400.0, 23000.0, 0.1, 0.16, 0.01).unwrap();
        let params: ContractParams = contract.into();
        assert_eq!(params.spot, 22400.0);
        assert_eq!(OptionContract::try_from(params).unwrap(), contract);
    }

    #[test]
    fn test_try_from_invalid_params() {
        let params = ContractParams {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            volatility: 0.2,
            term: 0.0,
        };
        assert_eq!(
            OptionContract::try_from(params),
            Err(ValidationError::InvalidTerm { term: 0.0 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let ok: OptionContract = serde_json::from_str(
            r#"{"spot": 100.0, "strike": 95.0, "rate": 0.03, "volatility": 0.25, "term": 0.75}"#,
        )
        .unwrap();
        assert_eq!(ok.strike(), 95.0);

        let err = serde_json::from_str::<OptionContract>(
            r#"{"spot": 100.0, "strike": 95.0, "rate": 0.03, "volatility": 0.0, "term": 0.75}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("volatility"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_option_type_serde_lowercase() {
        assert_eq!(serde_json::to_string(&OptionType::Call).unwrap(), "\"call\"");
        let ty: OptionType = serde_json::from_str("\"put\"").unwrap();
        assert_eq!(ty, OptionType::Put);
    }
}

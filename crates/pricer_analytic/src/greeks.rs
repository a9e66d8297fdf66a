//! Greek result types and the sign-bound clamping policy.
//!
//! The Zelen & Severo CDF used by the engine can land fractionally outside
//! the analytic range of a sensitivity for extreme inputs. Every Greek is
//! therefore passed through a [`SignBound`] before it is returned: values on
//! the permitted side of zero are untouched, values on the wrong side are
//! replaced by zero.
//!
//! | Greek | Call | Put |
//! |-------|------|-----|
//! | delta | `NonNegative` | `NonPositive` |
//! | gamma | `NonNegative` | `NonNegative` |
//! | vega  | `NonNegative` | `NonNegative` |
//! | theta | `NonPositive` | `NonPositive` |
//! | rho   | `NonNegative` | `NonPositive` |

use std::fmt;

use crate::contract::OptionType;

/// Sensitivity reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Greek {
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// ∂V/∂σ, per volatility point
    Vega,
    /// ∂V/∂t, per calendar day
    Theta,
    /// ∂V/∂r, per rate point
    Rho,
}

impl Greek {
    /// All Greeks in reporting order.
    pub const ALL: [Greek; 5] = [
        Greek::Delta,
        Greek::Gamma,
        Greek::Vega,
        Greek::Theta,
        Greek::Rho,
    ];

    /// Sign bound enforced on this Greek for the given option type.
    pub fn bound(&self, option_type: OptionType) -> SignBound {
        match (self, option_type) {
            (Greek::Gamma | Greek::Vega, _) => SignBound::NonNegative,
            (Greek::Theta, _) => SignBound::NonPositive,
            (Greek::Delta | Greek::Rho, OptionType::Call) => SignBound::NonNegative,
            (Greek::Delta | Greek::Rho, OptionType::Put) => SignBound::NonPositive,
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Greek::Delta => write!(f, "delta"),
            Greek::Gamma => write!(f, "gamma"),
            Greek::Vega => write!(f, "vega"),
            Greek::Theta => write!(f, "theta"),
            Greek::Rho => write!(f, "rho"),
        }
    }
}

/// Analytic sign of a sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignBound {
    /// Value is clamped to `max(value, 0)`.
    NonNegative,
    /// Value is clamped to `min(value, 0)`.
    NonPositive,
}

impl SignBound {
    /// Clamps `value` to the permitted side of zero.
    ///
    /// NaN is returned unchanged rather than clamped to zero.
    ///
    /// # Examples
    /// ```
    /// use pricer_analytic::SignBound;
    ///
    /// assert_eq!(SignBound::NonNegative.apply(-1e-9), 0.0);
    /// assert_eq!(SignBound::NonNegative.apply(0.25), 0.25);
    /// assert_eq!(SignBound::NonPositive.apply(0.3), 0.0);
    /// assert!(SignBound::NonPositive.apply(f64::NAN).is_nan());
    /// ```
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        if value.is_nan() || self.admits(value) {
            value
        } else {
            0.0
        }
    }

    /// Returns true if `value` already satisfies the bound.
    #[inline]
    pub fn admits(&self, value: f64) -> bool {
        match self {
            SignBound::NonNegative => value >= 0.0,
            SignBound::NonPositive => value <= 0.0,
        }
    }
}

/// Price and Greeks of one option type.
///
/// `gamma` and `vega` are identical for calls and puts on the same contract.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekSet {
    /// Option price, rounded to cents.
    pub price: f64,
    /// Delta: ∂V/∂S.
    pub delta: f64,
    /// Gamma: ∂²V/∂S².
    pub gamma: f64,
    /// Vega: change in price for a one point (0.01) change in volatility.
    pub vega: f64,
    /// Theta: change in price per calendar day.
    pub theta: f64,
    /// Rho: change in price for a one point (0.01) change in the rate.
    pub rho: f64,
}

impl GreekSet {
    /// Returns the value of a single Greek.
    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Vega => self.vega,
            Greek::Theta => self.theta,
            Greek::Rho => self.rho,
        }
    }
}

/// Call and put Greek sets for one contract.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Call option results.
    pub call: GreekSet,
    /// Put option results.
    pub put: GreekSet,
}

impl Evaluation {
    /// Returns the Greek set for the given option type.
    pub fn get(&self, option_type: OptionType) -> &GreekSet {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }
}

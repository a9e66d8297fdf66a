//! Black-Scholes pricing engine for European options.
//!
//! This module provides the Black-Scholes engine for pricing European
//! call and put options with analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Reporting Conventions
//!
//! - Prices are rounded to cents.
//! - Vega and rho are per one point (0.01) change of volatility and rate.
//! - Theta is per calendar day (365 days per year).
//! - Every Greek passes through its [`SignBound`](crate::SignBound).

use crate::contract::{OptionContract, OptionType};
use crate::distributions::{norm_cdf, norm_pdf};
use crate::error::ValidationError;
use crate::greeks::{Evaluation, Greek, GreekSet};

/// Calendar days per year used to express theta per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Scale applied to vega and rho to express them per percentage point.
pub const PERCENT_POINT: f64 = 100.0;

/// Black-Scholes engine bound to a single contract.
///
/// The terms shared by every formula (d₁, d₂, √T, discount factor) are
/// computed once in [`BlackScholes::new`] and reused by each operation.
///
/// # Examples
/// ```
/// use pricer_analytic::{BlackScholes, OptionType};
///
/// let bs = BlackScholes::from_params(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert_eq!(bs.price(OptionType::Call), 10.45);
/// assert_eq!(bs.price(OptionType::Put), 5.57);
///
/// // Gamma and vega do not depend on the option type
/// assert!(bs.gamma() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    contract: OptionContract,
    sqrt_t: f64,
    discount: f64,
    d1: f64,
    d2: f64,
}

impl BlackScholes {
    /// Creates an engine for a validated contract.
    pub fn new(contract: OptionContract) -> Self {
        let spot = contract.spot();
        let strike = contract.strike();
        let rate = contract.rate();
        let vol = contract.volatility();
        let term = contract.term();

        let sqrt_t = term.sqrt();
        let vol_sqrt_t = vol * sqrt_t;

        // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = (spot / strike).ln();
        let drift = (rate + 0.5 * vol * vol) * term;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        Self {
            contract,
            sqrt_t,
            discount: (-rate * term).exp(),
            d1,
            d2,
        }
    }

    /// Validates raw parameters and creates an engine.
    ///
    /// # Errors
    /// Returns a `ValidationError` if `spot`, `strike`, `volatility` or
    /// `term` is not strictly positive, if any parameter is not finite, or
    /// if σ√T or K·e^(-rT) is out of `f64` range (see [`OptionContract::new`]).
    ///
    /// # Examples
    /// ```
    /// use pricer_analytic::{BlackScholes, ValidationError};
    ///
    /// let err = BlackScholes::from_params(100.0, 100.0, 0.05, 0.2, 0.0).unwrap_err();
    /// assert_eq!(err, ValidationError::InvalidTerm { term: 0.0 });
    /// ```
    pub fn from_params(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        term: f64,
    ) -> Result<Self, ValidationError> {
        OptionContract::new(spot, strike, rate, volatility, term).map(Self::new)
    }

    /// Returns the contract this engine prices.
    #[inline]
    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Returns d₁.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Returns d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// Option price rounded to cents.
    ///
    /// - Call: S·N(d₁) - K·e^(-rT)·N(d₂)
    /// - Put: K·e^(-rT)·N(-d₂) - S·N(-d₁)
    pub fn price(&self, option_type: OptionType) -> f64 {
        round_to_cents(self.unrounded_price(option_type))
    }

    /// Delta (∂V/∂S).
    ///
    /// - Call: N(d₁), at least 0
    /// - Put: N(d₁) - 1, at most 0
    pub fn delta(&self, option_type: OptionType) -> f64 {
        let n_d1 = norm_cdf(self.d1);
        let raw = match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - 1.0,
        };
        Greek::Delta.bound(option_type).apply(raw)
    }

    /// Gamma (∂²V/∂S²), identical for calls and puts.
    ///
    /// Gamma = φ(d₁) / (S·σ·√T)
    pub fn gamma(&self) -> f64 {
        let c = &self.contract;
        let raw = norm_pdf(self.d1) / (c.spot() * c.volatility() * self.sqrt_t);
        Greek::Gamma.bound(OptionType::Call).apply(raw)
    }

    /// Vega per volatility point, identical for calls and puts.
    ///
    /// Vega = S·φ(d₁)·√T / 100
    pub fn vega(&self) -> f64 {
        let raw = self.contract.spot() * norm_pdf(self.d1) * self.sqrt_t / PERCENT_POINT;
        Greek::Vega.bound(OptionType::Call).apply(raw)
    }

    /// Theta per calendar day, never positive.
    ///
    /// With s = -(S·φ(d₁)·σ)/(2√T):
    /// - Call: (s - r·K·e^(-rT)·N(d₂)) / 365
    /// - Put: (s + r·K·e^(-rT)·N(-d₂)) / 365
    pub fn theta(&self, option_type: OptionType) -> f64 {
        let c = &self.contract;
        let decay = -(c.spot() * norm_pdf(self.d1) * c.volatility()) / (2.0 * self.sqrt_t);
        let carry = c.rate() * c.strike() * self.discount;

        let raw = match option_type {
            OptionType::Call => (decay - carry * norm_cdf(self.d2)) / DAYS_PER_YEAR,
            OptionType::Put => (decay + carry * norm_cdf(-self.d2)) / DAYS_PER_YEAR,
        };
        Greek::Theta.bound(option_type).apply(raw)
    }

    /// Rho per rate point.
    ///
    /// - Call: T·K·e^(-rT)·N(d₂) / 100, at least 0
    /// - Put: -T·K·e^(-rT)·N(-d₂) / 100, at most 0
    pub fn rho(&self, option_type: OptionType) -> f64 {
        let c = &self.contract;
        let scale = c.term() * c.strike() * self.discount / PERCENT_POINT;

        let raw = match option_type {
            OptionType::Call => scale * norm_cdf(self.d2),
            OptionType::Put => -scale * norm_cdf(-self.d2),
        };
        Greek::Rho.bound(option_type).apply(raw)
    }

    /// Risk-neutral probability of finishing in the money.
    ///
    /// - Call: N(d₂)
    /// - Put: N(-d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_analytic::{BlackScholes, OptionType};
    ///
    /// let bs = BlackScholes::from_params(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
    /// let call = bs.itm_probability(OptionType::Call);
    /// let put = bs.itm_probability(OptionType::Put);
    /// assert!(call > 0.5);
    /// assert!((call + put - 1.0).abs() < 1e-12);
    /// ```
    pub fn itm_probability(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => norm_cdf(self.d2),
            OptionType::Put => norm_cdf(-self.d2),
        }
    }

    /// Price and all Greeks for one option type.
    pub fn greeks(&self, option_type: OptionType) -> GreekSet {
        GreekSet {
            price: self.price(option_type),
            delta: self.delta(option_type),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(option_type),
            rho: self.rho(option_type),
        }
    }

    /// Price and Greeks for both the call and the put.
    ///
    /// # Examples
    /// ```
    /// use pricer_analytic::BlackScholes;
    ///
    /// let bs = BlackScholes::from_params(22400.0, 23000.0, 0.1, 0.16, 0.01).unwrap();
    /// let evaluation = bs.evaluate();
    /// assert_eq!(evaluation.call.price, 8.65);
    /// assert_eq!(evaluation.put.price, 585.66);
    /// assert_eq!(evaluation.call.gamma, evaluation.put.gamma);
    /// ```
    pub fn evaluate(&self) -> Evaluation {
        Evaluation {
            call: self.greeks(OptionType::Call),
            put: self.greeks(OptionType::Put),
        }
    }

    fn unrounded_price(&self, option_type: OptionType) -> f64 {
        let c = &self.contract;
        let pv_strike = c.strike() * self.discount;

        match option_type {
            OptionType::Call => c.spot() * norm_cdf(self.d1) - pv_strike * norm_cdf(self.d2),
            OptionType::Put => pv_strike * norm_cdf(-self.d2) - c.spot() * norm_cdf(-self.d1),
        }
    }
}

impl From<OptionContract> for BlackScholes {
    fn from(contract: OptionContract) -> Self {
        Self::new(contract)
    }
}

/// Magnitude from which `f64` can no longer represent a fraction of a cent.
const CENT_PRECISION_LIMIT: f64 = 4_503_599_627_370_496.0 / 100.0;

/// Rounds to two decimals; half a cent rounds up.
///
/// Values at or beyond [`CENT_PRECISION_LIMIT`] have no cents to round and
/// are returned unchanged, which keeps `value * 100` from overflowing.
#[inline]
fn round_to_cents(value: f64) -> f64 {
    if value.abs() >= CENT_PRECISION_LIMIT {
        return value;
    }
    (value * 100.0 + 0.5).floor() / 100.0
}

//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is the Zelen & Severo rational polynomial approximation
//! (Abramowitz and Stegun 26.2.17). Its coefficients are fixed: prices and
//! Greeks produced by this crate are reproducible only with exactly these
//! constants.

use std::f64::consts::PI;

/// Zelen & Severo scaling constant for `k = 1 / (1 + P·|x|)`.
const P: f64 = 0.2316419;

/// Rounded 1 / sqrt(2π) used by the approximation (not `FRAC_1_SQRT_2PI`).
const DENSITY_SCALE: f64 = 0.3989423;

/// Polynomial coefficients b1..b5.
const B1: f64 = 0.3193815;
const B2: f64 = -0.3565638;
const B3: f64 = 1.781478;
const B4: f64 = -1.821256;
const B5: f64 = 1.330274;

/// Standard normal cumulative distribution function.
///
/// Computes an approximation of P(X <= x) where X ~ N(0, 1).
///
/// # Algorithm
/// 1. k = 1 / (1 + 0.2316419·|x|)
/// 2. d = 0.3989423·exp(-x²/2)
/// 3. prob = d·k·(b1 + k·(b2 + k·(b3 + k·(b4 + k·b5))))
/// 4. Φ(x) = 1 - prob for x > 0, otherwise prob
///
/// # Accuracy
/// Absolute error is bounded by about 1e-7. Symmetry Φ(-x) = 1 - Φ(x)
/// holds up to floating-point rounding, except at x = 0 where the
/// approximation returns 0.49999985.
///
/// # Non-finite input
/// Φ(+∞) = 1 and Φ(-∞) = 0. NaN propagates.
///
/// # Examples
/// ```
/// use pricer_analytic::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-6);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    let k = 1.0 / (1.0 + P * x.abs());
    let d = DENSITY_SCALE * (-x * x / 2.0).exp();

    // Horner's method
    let poly = k * (B1 + k * (B2 + k * (B3 + k * (B4 + k * B5))));
    let prob = d * poly;

    if x > 0.0 {
        1.0 - prob
    } else {
        prob
    }
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x² / 2) / sqrt(2π)
///
/// # Examples
/// ```
/// use pricer_analytic::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    (-x * x / 2.0).exp() / (2.0 * PI).sqrt()
}

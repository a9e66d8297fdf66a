//! # Pricer Analytic
//!
//! Closed-form Black-Scholes prices and Greeks for European options.
//!
//! This crate provides:
//! - Standard normal PDF and the Zelen & Severo CDF approximation
//! - Validated option contracts
//! - The Black-Scholes engine (price, delta, gamma, vega, theta, rho)
//! - The sign-bound clamping policy applied to every Greek
//! - Parallel batch evaluation
//!
//! ## Example
//!
//! ```
//! use pricer_analytic::{BlackScholes, OptionContract, OptionType};
//!
//! let contract = OptionContract::new(100.0, 100.0, 0.05, 0.2, 1.0)?;
//! let bs = BlackScholes::new(contract);
//!
//! let call = bs.greeks(OptionType::Call);
//! assert_eq!(call.price, 10.45);
//! assert!(call.delta > 0.5);
//! # Ok::<(), pricer_analytic::ValidationError>(())
//! ```
//!
//! ## Design Principles
//!
//! - **Validate once**: an `OptionContract` can only exist with positive,
//!   finite parameters, so engine operations are infallible
//! - **Shared terms**: d₁, d₂, √T and the discount factor are computed once
//!   per engine
//! - **Explicit clamping**: sign bounds live in one table ([`Greek::bound`])

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod batch;
pub mod black_scholes;
pub mod contract;
pub mod distributions;
pub mod error;
pub mod greeks;

pub use batch::evaluate_batch;
pub use black_scholes::BlackScholes;
pub use contract::{ContractParams, OptionContract, OptionType, ParseOptionTypeError};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::ValidationError;
pub use greeks::{Evaluation, Greek, GreekSet, SignBound};

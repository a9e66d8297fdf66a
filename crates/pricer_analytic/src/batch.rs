//! Rayon-based batch evaluation.
//!
//! Contracts are independent, so a batch is a plain parallel map. Output
//! order matches input order.

use rayon::prelude::*;
use tracing::debug;

use crate::black_scholes::BlackScholes;
use crate::contract::OptionContract;
use crate::greeks::Evaluation;

/// Minimum batch size before work is spread across the Rayon pool.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Evaluates call and put Greeks for every contract.
///
/// Batches smaller than [`PARALLEL_THRESHOLD`] run on the calling thread.
///
/// # Examples
/// ```
/// use pricer_analytic::{evaluate_batch, BlackScholes, OptionContract};
///
/// let contracts = vec![
///     OptionContract::new(100.0, 100.0, 0.05, 0.2, 1.0).unwrap(),
///     OptionContract::new(22400.0, 23000.0, 0.1, 0.16, 0.01).unwrap(),
/// ];
/// let results = evaluate_batch(&contracts);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[1], BlackScholes::new(contracts[1]).evaluate());
/// ```
pub fn evaluate_batch(contracts: &[OptionContract]) -> Vec<Evaluation> {
    debug!(contracts = contracts.len(), "evaluating batch");

    if contracts.len() < PARALLEL_THRESHOLD {
        return contracts.iter().map(evaluate_one).collect();
    }
    contracts.par_iter().map(evaluate_one).collect()
}

#[inline]
fn evaluate_one(contract: &OptionContract) -> Evaluation {
    BlackScholes::new(*contract).evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> Vec<OptionContract> {
        (0..n)
            .map(|i| {
                let spot = 50.0 + i as f64;
                let term = 0.1 + (i % 10) as f64 * 0.2;
                OptionContract::new(spot, 100.0, 0.03, 0.25, term).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_empty_batch() {
        assert!(evaluate_batch(&[]).is_empty());
    }

    #[test]
    fn test_small_batch_matches_engine() {
        let contracts = grid(5);
        let results = evaluate_batch(&contracts);
        for (contract, result) in contracts.iter().zip(&results) {
            assert_eq!(*result, BlackScholes::new(*contract).evaluate());
        }
    }

    #[test]
    fn test_parallel_batch_preserves_order() {
        let contracts = grid(PARALLEL_THRESHOLD * 4);
        let results = evaluate_batch(&contracts);
        assert_eq!(results.len(), contracts.len());
        for (contract, result) in contracts.iter().zip(&results) {
            assert_eq!(*result, BlackScholes::new(*contract).evaluate());
        }
    }

    #[test]
    fn test_results_independent_of_neighbours() {
        let contracts = grid(PARALLEL_THRESHOLD * 2);
        let full = evaluate_batch(&contracts);
        let single = evaluate_batch(&contracts[7..8]);
        assert_eq!(full[7], single[0]);
    }
}

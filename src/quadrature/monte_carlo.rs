//! Plain Monte Carlo estimator
//!
//! Draws `n` independent samples `x_i ~ U[a, b)` from a caller-supplied 
//! generator and returns `(b - a) · mean(f(x_i))`.
//!
//! This is the only non-deterministic routine in the crate. Its variance is 
//! `(b - a)² · Var[f(U)] / n`, so the standard error shrinks like `1/√n`; 
//! two calls with different generator states are expected to differ. Seed 
//! the generator (e.g. `StdRng::seed_from_u64`) to reproduce a draw exactly.

use rand::Rng;

use super::{cell_width, eval_checked};
use super::errors::QuadratureError;


/// Monte Carlo estimate plus its sample standard error.
///
/// - `value`     : `(b - a) · mean(f)` 
/// - `std_error` : `(b - a) · σ / √n` with σ the sample (population-normalised) 
///                 standard deviation of the draws 
/// - `n_samples` : number of draws 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonteCarloEstimate {
    pub value     : f64,
    pub std_error : f64,
    pub n_samples : usize,
}


/// Estimates `∫_a^b f(x) dx` from `n` uniform draws taken from `rng`.
///
/// # Errors
/// Same as [`crate::quadrature::midpoint`].
pub fn monte_carlo<F, R>(
    mut f: F,
    a: f64,
    b: f64,
    n: usize,
    rng: &mut R,
) -> Result<MonteCarloEstimate, QuadratureError>
where
    F: FnMut(f64) -> f64,
    R: Rng,
{
    cell_width(a, b, n)?;

    let mut sum    = 0.0;
    let mut sum_sq = 0.0;
    for _ in 0..n {
        let x  = rng.random_range(a..b);
        let fx = eval_checked(&mut f, x)?;
        sum    += fx;
        sum_sq += fx * fx;
    }

    let width    = b - a;
    let mean     = sum / n as f64;
    let variance = (sum_sq / n as f64 - mean * mean).max(0.0);

    Ok(MonteCarloEstimate {
        value     : width * mean,
        std_error : width * (variance / n as f64).sqrt(),
        n_samples : n,
    })
}

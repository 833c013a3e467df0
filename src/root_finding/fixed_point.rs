//! Simple (fixed-point) iteration

use log::{debug, warn};

use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use super::report::{IterationReport, IterationStep, Termination};

const ALGORITHM: Algorithm = Algorithm::FixedPoint;


/// Fixed-point iteration configuration.
/// 
/// # Defaults
/// ┌ `eps`      - [`crate::root_finding::config::DEFAULT_EPS`] (step size) 
/// └ `max_iter` - `None`, resolved via [`Algorithm::default_max_iter`] (1000)
#[derive(Debug, Copy, Clone, Default)]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg { 
    #[must_use]
    pub fn new() -> Self { Self::default() } 
}
impl_common_cfg!(FixedPointCfg);


/// Iterates `x_{n+1} = x_n + f(x_n)` from `x0`.
///
/// # Behavior
/// - Records every `(x_n, x_{n+1})` pair.
/// - Stops with [`Termination::Converged`] once `|x_{n+1} - x_n| < eps`; 
///   the root is `x_{n+1}`.
/// - Stops with [`Termination::IterationLimit`] after `max_iter` steps.
/// - Stops with [`Termination::UndefinedEvaluation`] if `f(x_n)` or 
///   `x_{n+1}` is non-finite, keeping the trace collected so far.
///
/// # Notes
/// The scheme only contracts where `|1 + f'(x)| < 1` near the root. This is 
/// not checked; a diverging or cycling run is reported as non-convergence.
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`] if `x0` is non-finite.
pub fn fixed_point<F>(
    mut func: F,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<IterationReport, RootFindingError> 
where F: FnMut(f64) -> f64 {
    if !x0.is_finite() { 
        return Err(RootFindingError::InvalidGuess { x0 }); 
    }

    let eps      = cfg.eps();
    let num_iter = cfg.max_iter()
        .or(ALGORITHM.default_max_iter())
        .unwrap_or(GLOBAL_MAX_ITER_FALLBACK);

    let mut evals = 0;
    let mut trace = Vec::new();
    let mut x = x0;
    let mut termination = Termination::IterationLimit;
    for _ in 0..num_iter {
        let fx = { evals += 1; func(x) };
        let x_next = x + fx;
        if !x_next.is_finite() {
            termination = Termination::UndefinedEvaluation { x };
            break;
        }

        trace.push(IterationStep { x, x_next });
        if (x_next - x).abs() < eps {
            x = x_next;
            termination = Termination::Converged;
            break;
        }
        x = x_next;
    }

    match termination {
        Termination::Converged => debug!("fixed_point: root={x} after {} step(s)", trace.len()),
        other                  => warn!("fixed_point did not converge: {other:?}"),
    }

    Ok(IterationReport {
        estimate       : x,
        iterations     : trace.len(),
        evaluations    : evals,
        termination,
        trace,
        algorithm_name : ALGORITHM.algorithm_name(),
    })
}

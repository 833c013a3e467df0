//! Definite-integral estimation over `[a, b]`.
//!
//! Deterministic rules ([`midpoint`], [`trapezoid`]) and the stochastic 
//! [`monte_carlo`] estimator, which takes its random source explicitly.

pub mod algorithms;
pub mod errors;

pub mod midpoint;
pub mod trapezoid;
pub mod monte_carlo;
pub mod table;

pub use midpoint::midpoint;
pub use trapezoid::trapezoid;
pub use monte_carlo::{monte_carlo, MonteCarloEstimate};
pub use table::{convergence_table, QuadratureRow, DEFAULT_COUNTS};

use errors::QuadratureError;


/// Validates `[a, b]` and `n`, returning the cell width `h = (b - a) / n`.
///
/// Bounds whose width `b - a` overflows, or whose cells underflow to a zero 
/// width, are rejected as [`QuadratureError::InvalidBounds`].
pub(crate) fn cell_width(a: f64, b: f64, n: usize) -> Result<f64, QuadratureError> {
    if !(a.is_finite() && b.is_finite()) || a >= b || !(b - a).is_finite() {
        return Err(QuadratureError::InvalidBounds { a, b });
    }
    if n == 0 {
        return Err(QuadratureError::ZeroSubdivisions);
    }
    let h = (b - a) / n as f64;
    if h <= 0.0 {
        return Err(QuadratureError::InvalidBounds { a, b });
    }
    Ok(h)
}


/// Evaluates `f(x)`, failing on a non-finite value.
#[inline]
pub(crate) fn eval_checked<F>(f: &mut F, x: f64) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    let fx = f(x);
    if !fx.is_finite() {
        return Err(QuadratureError::UndefinedEvaluation { x, fx });
    }
    Ok(fx)
}

//! Midpoint rectangle rule

use super::{cell_width, eval_checked};
use super::errors::QuadratureError;


/// Estimates `∫_a^b f(x) dx` with `n` midpoint rectangles.
///
/// ```text
/// h = (b - a) / n,   I ≈ h · Σ f(a + h/2 + i·h),   i = 0..n-1
/// ```
///
/// # Errors
/// - [`QuadratureError::InvalidBounds`]       : non-finite bounds or `a >= b`
/// - [`QuadratureError::ZeroSubdivisions`]    : `n == 0`
/// - [`QuadratureError::UndefinedEvaluation`] : `f` non-finite at a sample
pub fn midpoint<F>(mut f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    let h = cell_width(a, b, n)?;

    let mut sum = 0.0;
    for i in 0..n {
        sum += eval_checked(&mut f, a + h / 2.0 + i as f64 * h)?;
    }

    Ok(h * sum)
}

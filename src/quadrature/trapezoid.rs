//! Composite trapezoid rule

use super::{cell_width, eval_checked};
use super::errors::QuadratureError;


/// Estimates `∫_a^b f(x) dx` on `n + 1` equally spaced nodes, endpoints 
/// weighted by ½.
///
/// ```text
/// I ≈ h/2 · (f(x_0) + 2·Σ f(x_i) + f(x_n)),   x_i = a + i·h
/// ```
///
/// # Errors
/// Same as [`crate::quadrature::midpoint`].
pub fn trapezoid<F>(mut f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    let h = cell_width(a, b, n)?;

    let ends = eval_checked(&mut f, a)? + eval_checked(&mut f, b)?;
    let mut inner = 0.0;
    for i in 1..n {
        inner += eval_checked(&mut f, a + i as f64 * h)?;
    }

    Ok(h / 2.0 * (ends + 2.0 * inner))
}

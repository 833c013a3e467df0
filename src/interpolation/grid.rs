//! Evaluation-grid helpers.
//!
//! The interpolation tool tabulates the polynomial on 11 equally spaced 
//! points across the node span and plots it on a dense grid; both come 
//! from [`uniform`].

use crate::interpolation::errors::InterpolationError;

/// Segments of the tabulation grid (11 points).
pub const TABLE_SEGMENTS: usize = 10;


/// `(min, max)` of the node abscissae, `None` if empty.
pub fn node_span(x: &[f64]) -> Option<(f64, f64)> {
    let mut it = x.iter().copied();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}


/// `segments + 1` points `lo + h·i`, `h = (hi − lo) / segments`.
///
/// # Errors
/// - [`InterpolationError::InvalidGrid`] if a bound is non-finite, `lo > hi` 
///   or `segments == 0`.
pub fn uniform(lo: f64, hi: f64, segments: usize) -> Result<Vec<f64>, InterpolationError> {
    if !(lo.is_finite() && hi.is_finite()) || lo > hi || segments == 0 {
        return Err(InterpolationError::InvalidGrid { lo, hi, segments });
    }
    let h = (hi - lo) / segments as f64;
    Ok((0..=segments).map(|i| lo + h * i as f64).collect())
}

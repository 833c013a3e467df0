//! Defines the [`InterpolationReport`] struct returned by 
//! [`crate::interpolation::lagrange::interpolate`].
//!
//! The report keeps the evaluation points next to the interpolated values 
//! so it can be tabulated or plotted directly.

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (`"lagrange"`)
/// - `n_provided`     : number of input nodes `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `x_eval`         : the evaluation points, in request order
/// - `evaluated`      : interpolated values, index-aligned with `x_eval`
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub x_eval: Vec<f64>,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, x_eval: &[f64]) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated: x_eval.len(),
            x_eval: x_eval.to_vec(),
            evaluated: Vec::with_capacity(x_eval.len()),
        }
    }
}

//! Lagrange Interpolation
//!
//! Evaluates the unique polynomial of degree `< n` through `n` nodes with 
//! pairwise-distinct `x` using the
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial):
//!
//! ```text
//! P(xq) = Σ_i y_i · L_i(xq),    L_i(xq) = Π_{j≠i} (xq − x_j) / (x_i − x_j)
//! ```
//!
//! Cost is `O(n²)` per evaluation point, fine for node counts in the tens.


use log::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, non_finite_idx, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Lagrange interpolation configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`] 
///
/// # Construction 
/// - Use [`LagrangeCfg::new`] then the `set_x`, `set_y`, `set_x_eval` setters. 
///   Duplicate nodes are rejected by `set_x` before any evaluation happens.
#[derive(Debug, Clone, Copy, Default)] 
pub struct LagrangeCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Interpolating polynomial over a borrowed, validated node set.
#[derive(Debug, Clone, Copy)]
pub struct LagrangePolynomial<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> LagrangePolynomial<'a> {
    /// Builds the polynomial through `(x[i], y[i])`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`]    : no nodes
    /// - [`InterpolationError::UnequalLength`] : `x.len() != y.len()`
    /// - [`InterpolationError::NonFiniteVec`]  : NaN/inf among `x` or `y`
    /// - [`InterpolationError::DuplicateNode`] : two equal `x` values
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self, InterpolationError> {
        let cfg = LagrangeCfg::new().set_x(x)?.set_y(y)?;
        Self::from_cfg(&cfg)
    }

    fn from_cfg(cfg: &LagrangeCfg<'a>) -> Result<Self, InterpolationError> {
        cfg.common.validate()?;
        Ok(Self { x: cfg.common.x(), y: cfg.common.y() })
    }

    pub fn degree(&self) -> usize {
        self.x.len() - 1
    }

    pub fn nodes(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// `L_i(xq)`.
    #[inline]
    fn basis(&self, i: usize, xq: f64) -> f64 {
        let xi = self.x[i];
        let mut l = 1.0;
        for (j, &xj) in self.x.iter().enumerate() {
            if j != i {
                l *= (xq - xj) / (xi - xj);
            }
        }
        l
    }

    #[inline]
    fn value_at(&self, xq: f64) -> f64 {
        let mut s = 0.0;
        for (i, &yi) in self.y.iter().enumerate() {
            s += yi * self.basis(i, xq);
        }
        s
    }
}

impl Interpolator for LagrangePolynomial<'_> {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { x });
        }
        Ok(self.value_at(x))
    }

    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        if let Some(idx) = non_finite_idx(xs) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        Ok(xs.iter().map(|&xq| self.value_at(xq)).collect())
    }
}


/// Performs Lagrange interpolation of the nodes in `cfg` at `cfg`'s 
/// evaluation points.
///
/// Evaluation points outside the node span are extrapolated, not rejected.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of nodes
/// - `n_evaluated`    : number of evaluation points
/// - `x_eval`         : the evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] or [`InterpolationError::UnequalLength`] 
///   if the node set is incomplete.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> { 
    let poly  = LagrangePolynomial::from_cfg(&cfg)?;
    let evals = cfg.common.x_eval(); 

    let mut report = InterpolationReport::new(Algorithm::Lagrange, poly.x.len(), evals); 
    for &xq in evals { 
        report.evaluated.push(poly.value_at(xq)); 
    }

    debug!(
        "{}: degree {} polynomial evaluated at {} point(s)",
        Algorithm::Lagrange, poly.degree(), report.n_evaluated
    );
    Ok(report)
}

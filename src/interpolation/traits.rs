use crate::interpolation::errors::InterpolationError;

/// A fitted interpolant that can be queried at arbitrary `x`.
pub trait Interpolator {
    /// Value at a single finite `x`.
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// Values at every `xs[i]`, index-aligned; stops at the first failure.
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// `(x, P(x))` pairs for tabulation or plotting.
    fn tabulate(&self, xs: &[f64]) -> Result<Vec<(f64, f64)>, InterpolationError> {
        Ok(xs.iter().copied().zip(self.eval_many(xs)?).collect())
    }
}

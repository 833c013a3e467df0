//! Power regression
//!
//! Linearises `y = a · x^b` as `ln y = ln a + b · ln x` and solves the 
//! ordinary least-squares problem over `(X, Y) = (ln x, ln y)` in closed form:
//!
//! ```text
//! b = (n·ΣXY − ΣX·ΣY) / (n·ΣX² − (ΣX)²)
//! A = (ΣY − b·ΣX) / n,      a = e^A
//! ```
//!
//! Goodness of fit is measured on the original scale: 
//! `R² = 1 − Σ(y − a·x^b)² / Σ(y − ȳ)²`.

use log::debug;

use super::errors::RegressionError;


/// Fitted power law `y = a · x^b`.
///
/// `r_squared` is NaN when every `y` is equal (`SS_tot = 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerFit {
    pub a         : f64,
    pub b         : f64,
    pub r_squared : f64,
    pub n         : usize,
}

impl PowerFit {
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.a * x.powf(self.b)
    }

    pub fn predictions(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }
}


/// Fits `y = a · x^b` to the paired samples.
///
/// # Errors
/// - [`RegressionError::LengthMismatch`]  : `x.len() != y.len()`
/// - [`RegressionError::InvalidDomain`]   : some `x_i` or `y_i` is `<= 0` or non-finite
/// - [`RegressionError::DegenerateInput`] : fewer than 2 points, or all `x_i` equal
pub fn fit_power_law(x: &[f64], y: &[f64]) -> Result<PowerFit, RegressionError> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch { x_len: x.len(), y_len: y.len() });
    }
    if let Some(idx) = x.iter().zip(y).position(|(&xi, &yi)| !in_log_domain(xi) || !in_log_domain(yi)) {
        return Err(RegressionError::InvalidDomain { idx, x: x[idx], y: y[idx] });
    }

    let n = x.len();
    if n < 2 || x.iter().all(|&xi| xi == x[0]) {
        return Err(RegressionError::DegenerateInput { n });
    }

    let lx: Vec<f64> = x.iter().map(|v| v.ln()).collect();
    let ly: Vec<f64> = y.iter().map(|v| v.ln()).collect();

    let nf     = n as f64;
    let sum_x  : f64 = lx.iter().sum();
    let sum_y  : f64 = ly.iter().sum();
    let sum_xy : f64 = lx.iter().zip(&ly).map(|(u, v)| u * v).sum();
    let sum_xx : f64 = lx.iter().map(|u| u * u).sum();

    let denom = nf * sum_xx - sum_x * sum_x;
    if denom == 0.0 || !denom.is_finite() {
        return Err(RegressionError::DegenerateInput { n });
    }

    let b = (nf * sum_xy - sum_x * sum_y) / denom;
    let a = ((sum_y - b * sum_x) / nf).exp();

    let y_mean = y.iter().sum::<f64>() / nf;
    let ss_res : f64 = x.iter().zip(y).map(|(&xi, &yi)| (yi - a * xi.powf(b)).powi(2)).sum();
    let ss_tot : f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
    let r_squared = if ss_tot == 0.0 { f64::NAN } else { 1.0 - ss_res / ss_tot };

    debug!("power fit over {n} point(s): a={a} b={b} R²={r_squared}");
    Ok(PowerFit { a, b, r_squared, n })
}


#[inline]
fn in_log_domain(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

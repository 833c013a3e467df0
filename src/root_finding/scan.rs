//! Bracket isolation by fixed-step scanning.
//!
//! Walks `[a, b]` in steps of `cfg.step()` and reports every sub-interval 
//! `[x, x + step]` across which `f` changes sign.

use log::debug;

use super::config::ScanCfg;
use super::errors::RootFindingError;
use super::signs::straddles;


/// A sub-interval `(low, high)`, `low < high`, believed to contain exactly 
/// one root under a continuity assumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low  : f64,
    high : f64,
}

impl Bracket {
    pub fn new(low: f64, high: f64) -> Result<Self, RootFindingError> {
        if !(low.is_finite() && high.is_finite()) || low >= high {
            return Err(RootFindingError::InvalidBounds { a: low, b: high });
        }
        Ok(Self { low, high })
    }

    #[inline] #[must_use] pub fn low(&self)  -> f64 { self.low }
    #[inline] #[must_use] pub fn high(&self) -> f64 { self.high }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}


/// Scans `[a, b]` for sign changes of `func`.
///
/// # Behavior
/// - Starting at `x = a`, repeatedly forms `[x, x + step]` and advances 
///   `x += step` until `x >= b`. `x` is accumulated by addition, so the last 
///   sub-interval may overshoot `b` by the accumulated drift.
/// - A sub-interval is reported when `f(x) * f(x + step) < 0`. Points where 
///   `f` is undefined (NaN) never satisfy this and are skipped silently.
///
/// # Returns
/// Brackets in ascending order. An empty vector is a valid outcome.
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`] if `a`, `b` non-finite or `a >= b`.
/// - [`RootFindingError::StalledScan`] if `x + step` rounds back to `x`, i.e. 
///   `step` is below half an ulp of some `x` in the range.
pub fn scan_brackets<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: ScanCfg,
) -> Result<Vec<Bracket>, RootFindingError>
where F: FnMut(f64) -> f64 {
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RootFindingError::InvalidBounds { a, b });
    }

    let step = cfg.step();
    let mut brackets = Vec::new();

    let mut x  = a;
    let mut fx = func(x);
    while x < b {
        let x_next = x + step;
        if x_next <= x {
            return Err(RootFindingError::StalledScan { x, step });
        }
        let fx_next = func(x_next);
        if straddles(fx, fx_next) {
            brackets.push(Bracket { low: x, high: x_next });
        }
        x  = x_next;
        fx = fx_next;
    }

    debug!("scan [{a}, {b}] step {step}: {} bracket(s)", brackets.len());
    Ok(brackets)
}

//! Trajectories produced by a [`Stepper`].

use log::{debug, warn};

use super::config::OdeCfg;
use super::stepper::Stepper;


/// `(x_i, y_i)` pairs of one fixed-step run, `n + 1` points.
#[derive(Debug, Clone, PartialEq)]
pub struct OdeTrajectory {
    pub method : &'static str,
    pub x      : Vec<f64>,
    pub y      : Vec<f64>,
}

impl OdeTrajectory {
    pub fn len(&self) -> usize { self.x.len() }

    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Index of the first non-finite `y`, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.y.iter().position(|v| !v.is_finite())
    }
}


/// Integrates `y' = f(x, y)` with stepper `S` over `cfg.grid()`.
///
/// Singular points are not special-cased: whatever non-finite value `f` 
/// produces propagates into the remaining `y_i`.
pub fn integrate<S, F>(mut f: F, cfg: &OdeCfg) -> OdeTrajectory
where
    S: Stepper,
    F: FnMut(f64, f64) -> f64,
{
    let x = cfg.grid();
    let h = cfg.step();

    let mut y = Vec::with_capacity(x.len());
    y.push(cfg.y0());
    for i in 0..cfg.steps() {
        let y_next = S::advance(&mut f, x[i], y[i], h);
        y.push(y_next);
    }

    let trajectory = OdeTrajectory { method: S::NAME, x, y };
    match trajectory.first_non_finite() {
        Some(i) => warn!("{}: non-finite y at x={} (index {i})", S::NAME, trajectory.x[i]),
        None    => debug!("{}: {} point(s) from x0={}", S::NAME, trajectory.len(), cfg.x0()),
    }
    trajectory
}

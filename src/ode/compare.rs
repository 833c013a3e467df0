//! Euler vs RK4 vs an optional closed-form solution on one grid.

use log::info;

use super::config::OdeCfg;
use super::stepper::{Euler, RungeKutta4};
use super::trajectory::{integrate, OdeTrajectory};


/// Both trajectories plus the analytic column, all index-aligned.
///
/// Accuracy is not asserted here; [`OdeComparison::euler_deviation`] and 
/// [`OdeComparison::rk4_deviation`] only report `|y_method − y_exact|`.
#[derive(Debug, Clone, PartialEq)]
pub struct OdeComparison {
    pub euler : OdeTrajectory,
    pub rk4   : OdeTrajectory,
    pub exact : Option<Vec<f64>>,
}

impl OdeComparison {
    pub fn x(&self) -> &[f64] {
        &self.euler.x
    }

    pub fn euler_deviation(&self) -> Option<Vec<f64>> {
        self.deviation(&self.euler)
    }

    pub fn rk4_deviation(&self) -> Option<Vec<f64>> {
        self.deviation(&self.rk4)
    }

    fn deviation(&self, t: &OdeTrajectory) -> Option<Vec<f64>> {
        let exact = self.exact.as_ref()?;
        Some(t.y.iter().zip(exact).map(|(y, e)| (y - e).abs()).collect())
    }
}


/// Runs Euler and RK4 from the same configuration and, when supplied, 
/// evaluates `exact` on the shared grid.
pub fn compare<F, G>(mut f: F, cfg: &OdeCfg, exact: Option<G>) -> OdeComparison
where
    F: FnMut(f64, f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let euler = integrate::<Euler, _>(&mut f, cfg);
    let rk4   = integrate::<RungeKutta4, _>(&mut f, cfg);
    let exact = exact.map(|mut g| euler.x.iter().map(|&x| g(x)).collect::<Vec<_>>());

    info!(
        "ode h={} n={}: euler y_end={:?} rk4 y_end={:?}",
        cfg.step(), cfg.steps(), euler.y.last(), rk4.y.last()
    );
    OdeComparison { euler, rk4, exact }
}

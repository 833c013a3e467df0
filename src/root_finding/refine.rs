//! Side-by-side refinement of one bracket by all three methods.
//!
//! The methods start from different guesses and use different step rules, 
//! so their answers may disagree. [`RefinementSummary`] keeps all three; 
//! none is picked as authoritative.

use log::info;

use super::bisection::{bisection, BisectionCfg};
use super::config::{CommonCfg, DEFAULT_FD_STEP, impl_common_cfg};
use super::errors::{ConfigError, RootFindingError};
use super::fixed_point::{fixed_point, FixedPointCfg};
use super::newton::{newton, NewtonCfg};
use super::report::{BisectionReport, IterationReport};
use super::scan::Bracket;


/// Shared configuration for [`refine_bracket`].
///
/// `eps` and `max_iter` are applied to every method; `fd_step` only to Newton. 
/// An unset `max_iter` leaves each method on its own default.
#[derive(Debug, Copy, Clone)]
pub struct RefineCfg {
    common: CommonCfg,
    fd_step: f64,
}
impl RefineCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), fd_step: DEFAULT_FD_STEP }
    }

    pub fn set_fd_step(mut self, v: f64) -> Result<Self, ConfigError> { 
        if !v.is_finite() || v <= 0.0 { 
            return Err(ConfigError::InvalidFdStep { got: v });
        }
        self.fd_step = v; 
        Ok(self) 
    }

    fn bisection_cfg(&self) -> Result<BisectionCfg, ConfigError> {
        let cfg = BisectionCfg::new().set_eps(self.eps())?;
        match self.max_iter() {
            Some(m) => cfg.set_max_iter(m),
            None    => Ok(cfg),
        }
    }

    fn fixed_point_cfg(&self) -> Result<FixedPointCfg, ConfigError> {
        let cfg = FixedPointCfg::new().set_eps(self.eps())?;
        match self.max_iter() {
            Some(m) => cfg.set_max_iter(m),
            None    => Ok(cfg),
        }
    }

    fn newton_cfg(&self) -> Result<NewtonCfg, ConfigError> {
        let cfg = NewtonCfg::new()
            .set_eps(self.eps())?
            .set_fd_step(self.fd_step)?;
        match self.max_iter() {
            Some(m) => cfg.set_max_iter(m),
            None    => Ok(cfg),
        }
    }
}
impl Default for RefineCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(RefineCfg);


/// Reports of the three methods for the same bracket.
#[derive(Debug, Clone, PartialEq)]
pub struct RefinementSummary {
    pub bracket     : Bracket,
    pub bisection   : BisectionReport,
    pub fixed_point : IterationReport,
    pub newton      : IterationReport,
}


/// Refines `bracket` with bisection, fixed-point iteration and Newton.
///
/// Fixed-point and Newton are seeded at the bracket midpoint.
///
/// # Errors
/// Only bisection can fail ([`RootFindingError::NoSignChange`], 
/// [`RootFindingError::UndefinedEvaluation`]); non-convergence of the open 
/// methods is carried in their reports.
pub fn refine_bracket<F>(
    mut func: F,
    bracket: Bracket,
    cfg: RefineCfg,
) -> Result<RefinementSummary, RootFindingError>
where F: FnMut(f64) -> f64 {
    let x0 = bracket.midpoint();

    let bisection   = bisection(&mut func, bracket, cfg.bisection_cfg()?)?;
    let fixed_point = fixed_point(&mut func, x0, cfg.fixed_point_cfg()?)?;
    let newton      = newton(&mut func, x0, cfg.newton_cfg()?)?;

    info!(
        "refined [{}, {}]: bisection={} fixed_point={:?} newton={:?}",
        bracket.low(), bracket.high(), bisection.root, fixed_point.root(), newton.root()
    );

    Ok(RefinementSummary { bracket, bisection, fixed_point, newton })
}

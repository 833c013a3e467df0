//! Newton-Raphson method with a centered finite-difference derivative

use log::{debug, warn};

use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK}; 
use super::config::{CommonCfg, DEFAULT_FD_STEP, impl_common_cfg}; 
use super::errors::{ConfigError, RootFindingError}; 
use super::report::{IterationReport, IterationStep, Termination}; 

const ALGORITHM: Algorithm = Algorithm::Newton;


/// Newton configuration.
/// 
/// # Fields
/// - `common`  : [`CommonCfg`] with `eps` and optional `max_iter`.
/// - `fd_step` : fixed step `h` of the centered difference (default: 1e-6).
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - If `max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`Algorithm::Newton`].
#[derive(Debug, Copy, Clone)] 
pub struct NewtonCfg {
    common: CommonCfg,
    fd_step: f64,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { 
        Self { 
            common: CommonCfg::new(),
            fd_step: DEFAULT_FD_STEP,
        }
    }

    pub fn set_fd_step(mut self, v: f64) -> Result<Self, ConfigError> { 
        if !v.is_finite() || v <= 0.0 { 
            return Err(ConfigError::InvalidFdStep { got: v });
        }
        self.fd_step = v; 
        Ok(self) 
    }

    #[inline] #[must_use] pub fn fd_step(&self) -> f64 { self.fd_step }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


/// Helpers 
/// - `eval_checked` : evaluates `f(x)`, `None` if non-finite
/// - `eval_dfx_fd`  : `(f(x + h) - f(x - h)) / 2h`, `None` if either probe is non-finite
#[inline] 
fn eval_checked<F>(f: &mut F, x: f64, evals: &mut usize) -> Option<f64> 
where F: FnMut(f64) -> f64 { 
    let fx = { *evals += 1; f(x) }; 
    fx.is_finite().then_some(fx)
}
#[inline] 
fn eval_dfx_fd<F>(f: &mut F, x: f64, h: f64, evals: &mut usize) -> Option<f64> 
where F: FnMut(f64) -> f64 { 
    let fxp = eval_checked(f, x + h, evals)?; 
    let fxm = eval_checked(f, x - h, evals)?; 
    let dfx = (fxp - fxm) / (2.0 * h); 
    dfx.is_finite().then_some(dfx)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// starting at `x0`.
///
/// # Behavior
/// - `x_{n+1} = x_n - f(x_n) / f'(x_n)` with `f'` from a centered difference 
///   of step `cfg.fd_step()`; each `(x_n, x_{n+1})` is recorded.
/// - Converges once `|x_{n+1} - x_n| < eps`.
/// - Non-convergent outcomes (no error):
///   - [`Termination::UndefinedEvaluation`] : `f` or a difference probe non-finite
///   - [`Termination::ZeroDerivative`]      : `f'(x_n) == 0`
///   - [`Termination::IterationLimit`]      : `max_iter` exhausted
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`] if `x0` is non-finite.
///
/// # Notes
/// Convergence is local only; prefer the bisection result when the 
/// methods disagree.
pub fn newton<F>( 
    mut func: F, 
    x0: f64, 
    cfg: NewtonCfg, 
) -> Result<IterationReport, RootFindingError> 
where F: FnMut(f64) -> f64 { 
    if !x0.is_finite() { 
        return Err(RootFindingError::InvalidGuess { x0 }); 
    }

    let eps      = cfg.eps();
    let h        = cfg.fd_step();
    let num_iter = cfg.max_iter()
        .or(ALGORITHM.default_max_iter())
        .unwrap_or(GLOBAL_MAX_ITER_FALLBACK);

    let mut evals = 0; 
    let mut trace = Vec::new();
    let mut x = x0; 
    let mut termination = Termination::IterationLimit;
    for _ in 0..num_iter {
        let Some(fx) = eval_checked(&mut func, x, &mut evals) else {
            termination = Termination::UndefinedEvaluation { x };
            break;
        };
        let Some(dfx) = eval_dfx_fd(&mut func, x, h, &mut evals) else {
            termination = Termination::UndefinedEvaluation { x };
            break;
        };
        if dfx == 0.0 {
            termination = Termination::ZeroDerivative { x };
            break;
        }

        let x_next = x - fx / dfx; 
        if !x_next.is_finite() { 
            termination = Termination::UndefinedEvaluation { x };
            break;
        }

        trace.push(IterationStep { x, x_next });
        if (x_next - x).abs() < eps { 
            x = x_next;
            termination = Termination::Converged;
            break;
        }
        x = x_next; 
    }

    match termination {
        Termination::Converged => debug!("newton: root={x} after {} step(s)", trace.len()),
        other                  => warn!("newton did not converge: {other:?}"),
    }

    Ok(IterationReport {
        estimate       : x,
        iterations     : trace.len(),
        evaluations    : evals,
        termination,
        trace,
        algorithm_name : ALGORITHM.algorithm_name(),
    })
}

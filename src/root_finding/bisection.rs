//! Bisection method

use log::{debug, warn};

use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use super::report::{BisectionReport, BisectionStep, Termination};
use super::scan::Bracket;
use super::signs::{same_sign, straddles};

const ALGORITHM: Algorithm = Algorithm::Bisection;


/// Bisection configuration 
/// 
/// # Defaults
/// ┌ `eps`      - [`crate::root_finding::config::DEFAULT_EPS`] (bracket width) 
/// └ `max_iter` - `None`, resolved to [`theoretical_iter`] 
///
/// # Notes: 
/// └ If `max_iter` is None, the cap is the theoretical number of halvings 
///   needed to reach `eps` (plus one for rounding of the midpoint), bounded by 
///   [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone, Default)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg { 
    #[must_use]
    pub fn new() -> Self { Self::default() } 
}
impl_common_cfg!(BisectionCfg);


/// Number of halvings needed to shrink a width `w0` below `eps`.
///
/// `⌈log2(w0 / eps)⌉`, or `0` if the bracket is already narrow enough. 
/// Saturates at `usize::MAX` when `w0 / eps` overflows.
pub fn theoretical_iter(w0: f64, eps: f64) -> usize { 
    if w0 <= eps {
        return 0;
    }
    let n = (w0 / eps).log2().ceil();
    if n.is_finite() { n as usize } else { usize::MAX }
}


/// Finds a root of `func` inside `bracket` using the 
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Behavior
/// While `|b - a| > eps`:
/// ├ `c = (a + b) / 2`, record `(a, b, c, f(c))` 
/// ├ if `f(a) * f(c) < 0` then `b = c` 
/// └ otherwise `a = c` 
///
/// The returned root is `(a + b) / 2` of the final bracket. Deterministic: 
/// identical inputs produce a bit-identical report.
///
/// # Errors
/// ┌ [`RootFindingError::NoSignChange`]        - `f(a) * f(b) > 0`.
/// └ [`RootFindingError::UndefinedEvaluation`] - `func` non-finite at an endpoint or midpoint.
///
/// # Notes 
/// - `f(a) * f(b) == 0` is accepted. An exact zero at `a` is then *not* tracked: 
///   `f(a) * f(c) < 0` fails and the bracket moves right, as in the classic 
///   textbook loop.
pub fn bisection<F>(
    mut func: F,                
    bracket: Bracket, 
    cfg: BisectionCfg
) -> Result<BisectionReport, RootFindingError> 
where F: FnMut(f64) -> f64 {
    let mut a = bracket.low();
    let mut b = bracket.high();
    let eps   = cfg.eps();

    let num_iter = match cfg.max_iter() { 
        Some(m) => m, 
        None    => theoretical_iter(bracket.width(), eps)
            .saturating_add(1)
            .min(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut evals = 0; 
    let mut eval = |x: f64| -> Result<f64, RootFindingError> {
        let fx = { evals += 1; func(x) }; 
        if !fx.is_finite() { 
            Err(RootFindingError::UndefinedEvaluation { x, fx }) 
        } else { 
            Ok(fx) 
        }
    };

    let fa0 = eval(a)?;
    let fb0 = eval(b)?;
    if same_sign(fa0, fb0) { 
        return Err(RootFindingError::NoSignChange { a, b }); 
    } 

    let mut fa    = fa0;
    let mut trace = Vec::new();
    let mut termination = Termination::Converged;
    while (b - a).abs() > eps {
        if trace.len() == num_iter {
            termination = Termination::IterationLimit;
            break;
        }

        let c  = (a + b) / 2.0;
        let fc = eval(c)?;
        trace.push(BisectionStep { a, b, c, fc });

        if straddles(fa, fc) { 
            b = c; 
        } else { 
            a  = c; 
            fa = fc; 
        }
    }

    let root   = (a + b) / 2.0;
    let f_root = eval(root)?;

    if termination == Termination::IterationLimit {
        warn!("bisection stopped at max_iter={num_iter} with width {}", b - a);
    }
    debug!("bisection: root={root} after {} step(s)", trace.len());

    Ok(BisectionReport {
        root,
        f_root,
        left           : a,
        right          : b,
        iterations     : trace.len(),
        evaluations    : evals,
        termination,
        trace,
        algorithm_name : ALGORITHM.algorithm_name(),
    })
}

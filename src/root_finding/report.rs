//! Reports and trace records returned by the refinement methods.
//!
//! ┌ [`BisectionReport`] : root, final bracket, `(a, b, c, f(c))` trace  
//! └ [`IterationReport`] : last iterate, [`Termination`], `(x_n, x_{n+1})` trace  
//!
//! Traces are append-only while the method runs and owned by the caller 
//! afterwards.


/// Reasons a refinement run stopped.
///
/// Only [`Termination::Converged`] yields a root; every other variant is a 
/// legitimate non-convergent outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq)] 
pub enum Termination { 
    /// Step or bracket width fell below `eps`.
    Converged, 
    /// `max_iter` exhausted without meeting `eps`.
    IterationLimit,
    /// `f` (or a finite-difference probe) was non-finite at `x`.
    UndefinedEvaluation { x: f64 },
    /// Finite-difference derivative was exactly zero at `x`.
    ZeroDerivative { x: f64 },
}

impl Termination {
    pub fn is_converged(&self) -> bool {
        matches!(self, Termination::Converged)
    }
}


/// One bisection step: bracket `[a, b]`, midpoint `c` and `f(c)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionStep {
    pub a  : f64,
    pub b  : f64,
    pub c  : f64,
    pub fc : f64,
}


/// One open-method step `x_n -> x_{n+1}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStep {
    pub x      : f64,
    pub x_next : f64,
}


/// Final report returned by [`crate::root_finding::bisection::bisection`].  
/// 
/// [`BisectionReport`]
/// - `root`           : `(a + b) / 2` of the final bracket  
/// - `f_root`         : function value at `root`  
/// - `left`, `right`  : final bracket  
/// - `iterations`     : number of bisection steps (`trace.len()`)  
/// - `evaluations`    : total function evaluations  
/// - `termination`    : [`Termination::Converged`] or [`Termination::IterationLimit`]  
/// - `trace`          : per-step [`BisectionStep`] records  
/// - `algorithm_name` : `"bisection"`  
#[derive(Debug, Clone, PartialEq)] 
pub struct BisectionReport {
    pub root           : f64, 
    pub f_root         : f64, 
    pub left           : f64,
    pub right          : f64,
    pub iterations     : usize, 
    pub evaluations    : usize, 
    pub termination    : Termination, 
    pub trace          : Vec<BisectionStep>,
    pub algorithm_name : &'static str, 
}


/// Final report returned by the open methods (fixed-point, Newton).  
/// 
/// [`IterationReport`]
/// - `estimate`       : last iterate reached (the root when converged)  
/// - `iterations`     : number of completed steps (`trace.len()`)  
/// - `evaluations`    : total function evaluations  
/// - `termination`    : why the method stopped ([`Termination`])  
/// - `trace`          : per-step [`IterationStep`] records  
/// - `algorithm_name` : `"fixed_point"` or `"newton"`  
#[derive(Debug, Clone, PartialEq)] 
pub struct IterationReport {
    pub estimate       : f64, 
    pub iterations     : usize, 
    pub evaluations    : usize, 
    pub termination    : Termination, 
    pub trace          : Vec<IterationStep>,
    pub algorithm_name : &'static str, 
}

impl IterationReport {
    pub fn converged(&self) -> bool {
        self.termination.is_converged()
    }

    /// Root estimate, `None` unless the run converged.
    pub fn root(&self) -> Option<f64> {
        self.converged().then_some(self.estimate)
    }
}

//! Root-finding error types.  
//! 
//! ┌ [`RootFindingError`] : bracket and runtime errors  
//! │   ├ bracket without a sign change  
//! │   ├ function undefined at a required point  
//! │   ├ invalid bounds / guesses  
//! │   └ scan step lost to rounding  
//! │
//! └ [`ConfigError`]      : invalid configuration values  
//!     ├ non-positive or non-finite tolerances and steps  
//!     └ zero iteration cap  
//!
//! Non-convergence of the open methods is *not* an error; it is reported 
//! through [`crate::root_finding::report::Termination`].


use thiserror::Error; 


/// Root-finding runtime errors.  
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange { a: f64, b: f64 },

    #[error("function undefined at x={x}, f(x)={fx}")]
    UndefinedEvaluation { x: f64, fx: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")] 
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 }, 

    #[error("scan stalled at x={x}: step {step} is lost to rounding")]
    StalledScan { x: f64, step: f64 },
}


/// Configuration errors.  
/// 
/// ┌ Tolerance `eps` must be finite and > 0  
/// ├ Scan step and finite-difference step must be finite and > 0  
/// └ `max_iter` must be >= 1
#[derive(Debug, Error)]
pub enum ConfigError { 
    #[error("invalid `eps` tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid scan step: must be finite and > 0. got {got}")]
    InvalidStep { got: f64 },

    #[error("invalid finite-difference step: must be finite and > 0. got {got}")]
    InvalidFdStep { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}

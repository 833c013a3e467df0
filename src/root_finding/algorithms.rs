//! Root-finding algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum, which enumerates the refinement methods 
//! run against a bracket, along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] cap.  


/// Hard cap applied when the theoretical bisection bound would exceed it.  
///
/// Bisection halves the bracket every step, so this only matters when `eps` 
/// is vanishingly small compared to the bracket width.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500; 


/// Refinement methods. 
/// - [`Algorithm::Bisection`]  : bracket method, always converges on a valid bracket 
/// - [`Algorithm::FixedPoint`] : `x_{n+1} = x_n + f(x_n)`, converges only if `|1 + f'(x)| < 1` 
/// - [`Algorithm::Newton`]     : Newton–Raphson with a centered finite-difference derivative 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm { 
    Bisection, 
    FixedPoint, 
    Newton,
}

impl Algorithm { 
    /// Default iteration count if `max_iter` is unset in config. 
    ///  
    /// # Notes 
    /// - Bisection returns `None`, meaning “compute theoretical bound instead”.  
    ///   If that bound exceeds practical limits, [`GLOBAL_MAX_ITER_FALLBACK`] is used.  
    /// - Open methods share the 1000 step budget of the interactive tools.
    pub const fn default_max_iter(self) -> Option<usize> { 
        match self { 
            Algorithm::Bisection  => None, 
            Algorithm::FixedPoint => Some(1000), 
            Algorithm::Newton     => Some(1000), 
        }
    }

    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Bisection  => "bisection", 
            Algorithm::FixedPoint => "fixed_point", 
            Algorithm::Newton     => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}

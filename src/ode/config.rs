//! ODE run configuration.
//!
//! [`OdeCfg`]
//! ├ `x0`, `y0` : initial condition `y(x0) = y0` 
//! ├ `h`        : fixed step, > 0 (default [`DEFAULT_STEP`]) 
//! └ `n`        : number of steps, at most [`MAX_STEPS`]; trajectories have `n + 1` points 

use super::errors::OdeError;

pub const DEFAULT_STEP: f64 = 0.1;

/// Upper bound on `n`; a trajectory holds `n + 1` points per method.
pub const MAX_STEPS: usize = 10_000_000;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OdeCfg {
    x0: f64,
    y0: f64,
    h: f64,
    n: usize,
}

impl OdeCfg {
    /// Initial condition with [`DEFAULT_STEP`] and zero steps.
    pub fn new(x0: f64, y0: f64) -> Result<Self, OdeError> {
        if !(x0.is_finite() && y0.is_finite()) {
            return Err(OdeError::InvalidInitial { x0, y0 });
        }
        Ok(Self { x0, y0, h: DEFAULT_STEP, n: 0 })
    }

    /// Covers `[x0, x_end]` with step `h`, using `n = trunc((x_end − x0) / h)`.
    ///
    /// The grid therefore stops at or just short of `x_end` when `h` does not 
    /// divide the span.
    pub fn spanning(x0: f64, y0: f64, x_end: f64, h: f64) -> Result<Self, OdeError> {
        if !x_end.is_finite() || x_end < x0 {
            return Err(OdeError::InvalidSpan { x0, x_end });
        }
        let cfg = Self::new(x0, y0)?.set_step(h)?;
        let n = ((x_end - x0) / h).trunc();
        if n > MAX_STEPS as f64 {
            return Err(OdeError::TooManySteps { requested: n, max: MAX_STEPS });
        }
        cfg.set_steps(n as usize)
    }

    pub fn set_step(mut self, v: f64) -> Result<Self, OdeError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(OdeError::InvalidStep { got: v });
        }
        self.h = v;
        Ok(self)
    }

    pub fn set_steps(mut self, n: usize) -> Result<Self, OdeError> {
        if n > MAX_STEPS {
            return Err(OdeError::TooManySteps { requested: n as f64, max: MAX_STEPS });
        }
        self.n = n;
        Ok(self)
    }

    // getters
    #[inline] #[must_use] pub fn x0(&self) -> f64   { self.x0 }
    #[inline] #[must_use] pub fn y0(&self) -> f64   { self.y0 }
    #[inline] #[must_use] pub fn step(&self) -> f64 { self.h }
    #[inline] #[must_use] pub fn steps(&self) -> usize { self.n }

    /// `x_0, x_0 + h, (x_0 + h) + h, ...`, `n + 1` points by repeated addition.
    pub fn grid(&self) -> Vec<f64> {
        let mut xs = Vec::with_capacity(self.n + 1);
        let mut x = self.x0;
        xs.push(x);
        for _ in 0..self.n {
            x += self.h;
            xs.push(x);
        }
        xs
    }
}

//! Shared configuration for root-finding algorithms.  
//! 
//! Provides [`CommonCfg`] with the default tolerance and iteration limit, 
//! used by every refinement config, and [`ScanCfg`] for bracket isolation.
//!
//! [`CommonCfg`] : universal fields  
//! ├ `eps`      : stopping tolerance (bracket width or step size)  
//! └ `max_iter` : iteration cap (optional) 
//!
//! Method configs ([`crate::root_finding::bisection::BisectionCfg`], 
//! [`crate::root_finding::fixed_point::FixedPointCfg`], 
//! [`crate::root_finding::newton::NewtonCfg`], 
//! [`crate::root_finding::refine::RefineCfg`]) embed a `common` field and 
//! receive the validating setters through `impl_common_cfg!`.


use super::errors::ConfigError;

pub const DEFAULT_EPS       : f64 = 1e-4;
pub const DEFAULT_SCAN_STEP : f64 = 0.5;
pub const DEFAULT_FD_STEP   : f64 = 1e-6;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    eps: f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { 
            eps      : DEFAULT_EPS, 
            max_iter : None 
        }
    }

    // getters  
    pub fn eps(&self)      -> f64 { self.eps }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    // setters (internal) 
    pub(crate) fn with_eps      (&mut self, v: f64)   { self.eps      = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_eps(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_eps(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn eps(&self) -> f64 { self.common.eps() }
            #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg;


/// Bracket scan configuration.
///
/// # Defaults
/// └ `step` = [`DEFAULT_SCAN_STEP`] (0.5)
#[derive(Debug, Copy, Clone)]
pub struct ScanCfg {
    step: f64,
}

impl ScanCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_step(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidStep { got: v });
        }
        self.step = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn step(&self) -> f64 { self.step }
}

impl Default for ScanCfg {
    fn default() -> Self {
        Self { step: DEFAULT_SCAN_STEP }
    }
}

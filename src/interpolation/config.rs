//! Node-set configuration shared by interpolation methods.
//!
//! [`CommonCfg`] : borrowed slices
//! ├ `x`      : node abscissae, pairwise distinct, any order
//! ├ `y`      : node ordinates, `y.len() == x.len()`
//! └ `x_eval` : evaluation points; may lie outside the node span
//!
//! Each setter validates its slice on its own; [`CommonCfg::validate`]
//! checks the pair is complete before a method runs.


use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Copy, Clone, Default)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both slices set and equally long.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        if self.x.is_empty() || self.y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        check_lengths(self.x.len(), self.y.len())
    }

    // getters
    pub fn x(&self)      -> &'a [f64] { self.x }
    pub fn y(&self)      -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }

    // setters (internal)
    pub(crate) fn with_x(&mut self, v: &'a [f64])      { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64])      { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

pub(crate) fn check_finite(xs: &[f64]) -> Result<(), InterpolationError> {
    match non_finite_idx(xs) {
        Some(idx) => Err(InterpolationError::NonFiniteVec { idx }),
        None      => Ok(()),
    }
}

/// Node values: non-empty and finite.
pub(crate) fn check_values(xs: &[f64]) -> Result<(), InterpolationError> {
    if xs.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    check_finite(xs)
}

/// Exact equality; the first offending pair `(i, j)`, `i < j`, is reported.
pub(crate) fn check_distinct(xs: &[f64]) -> Result<(), InterpolationError> {
    for (i, &xi) in xs.iter().enumerate() {
        if let Some(k) = xs[i + 1..].iter().position(|&xj| xj == xi) {
            return Err(InterpolationError::DuplicateNode { i, j: i + 1 + k, x: xi });
        }
    }
    Ok(())
}

/// A zero length means "not set yet" and always passes.
pub(crate) fn check_lengths(x_len: usize, y_len: usize) -> Result<(), InterpolationError> {
    if x_len != 0 && y_len != 0 && x_len != y_len {
        return Err(InterpolationError::UnequalLength { x_len, y_len });
    }
    Ok(())
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::config::{check_distinct, check_lengths, check_values};

                check_values(v)?;
                check_distinct(v)?;
                check_lengths(v.len(), self.common.y.len())?;
                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::config::{check_lengths, check_values};

                check_values(v)?;
                check_lengths(self.common.x.len(), v.len())?;
                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::check_finite(v)?;
                self.common.with_x_eval(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;

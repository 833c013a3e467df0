//! Sign utilities for bracket scanning and bisection.
//! - `straddles`   : `true` if the product is strictly negative  
//! - `same_sign`   : `true` if the product is strictly positive

/// Returns `true` if `u * v < 0`, i.e. a root lies strictly between.
#[inline]
pub(crate) fn straddles(u: f64, v: f64) -> bool {
    u * v < 0.0
}


/// Returns `true` if `u * v > 0`; a zero at either end does not count.
#[inline]
pub(crate) fn same_sign(u: f64, v: f64) -> bool {
    u * v > 0.0
}

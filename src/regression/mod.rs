//! Power-law curve fitting `y = a · x^b` by log-linearised least squares.

pub mod errors;
pub mod power;

pub use power::{fit_power_law, PowerFit};

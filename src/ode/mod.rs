//! Fixed-step integration of scalar first-order ODEs `y' = f(x, y)`.
//!
//! [`stepper::Euler`] and [`stepper::RungeKutta4`] advance on the same grid 
//! `x_i = x_0 + h + h + ...` so their trajectories, and an optional analytic 
//! reference, are index-aligned.

pub mod config;
pub mod errors;
pub mod stepper;
pub mod trajectory;
pub mod compare;

pub use config::OdeCfg;
pub use stepper::{Euler, RungeKutta4, Stepper};
pub use trajectory::{integrate, OdeTrajectory};
pub use compare::{compare, OdeComparison};

//! Numerical core for small lab tools.
//!
//! Five independent families, each a set of pure functions returning a 
//! result plus a trace for display:
//!
//! - [`root_finding`]  : bracket scan, bisection, fixed-point iteration, Newton
//! - [`quadrature`]    : midpoint, trapezoid, Monte Carlo
//! - [`regression`]    : power law `y = a·x^b`
//! - [`interpolation`] : Lagrange polynomial
//! - [`ode`]           : Euler and RK4 for `y' = f(x, y)`
//!
//! [`export`], [`input`] and [`logging`] serve the tools around the core.

pub mod root_finding;
pub mod quadrature;
pub mod regression;
pub mod interpolation;
pub mod ode;

pub mod export;
pub mod input;
pub mod logging;

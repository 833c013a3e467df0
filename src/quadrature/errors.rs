use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error("invalid bounds: need finite a < b with a finite width b - a. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("number of subdivisions must be >= 1")]
    ZeroSubdivisions,

    #[error("integrand undefined at x={x}, f(x)={fx}")]
    UndefinedEvaluation { x: f64, fx: f64 },
}

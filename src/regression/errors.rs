use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("value outside logarithm domain at index {idx}: x={x}, y={y}; all values must be finite and > 0")]
    InvalidDomain { idx: usize, x: f64, y: f64 },

    #[error("degenerate input: need at least 2 points with distinct x. got {n} point(s)")]
    DegenerateInput { n: usize },
}

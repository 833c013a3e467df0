use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("non-finite evaluation point x={x}")]
    NonFiniteQuery { x: f64 },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate node x={x} at indices {i} and {j}")]
    DuplicateNode { i: usize, j: usize, x: f64 },

    #[error("invalid grid [{lo}, {hi}] with {segments} segment(s): bounds must be finite with lo <= hi and segments >= 1")]
    InvalidGrid { lo: f64, hi: f64, segments: usize },
}

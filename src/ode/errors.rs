use thiserror::Error;

#[derive(Debug, Error)]
pub enum OdeError {
    #[error("invalid initial condition: x0={x0}, y0={y0} must be finite")]
    InvalidInitial { x0: f64, y0: f64 },

    #[error("invalid step h={got}: must be finite and > 0")]
    InvalidStep { got: f64 },

    #[error("invalid span [{x0}, {x_end}]: must be finite with x_end >= x0")]
    InvalidSpan { x0: f64, x_end: f64 },

    #[error("{requested} step(s) requested, at most {max} allowed")]
    TooManySteps { requested: f64, max: usize },
}

//! Parsing of comma-separated numeric input, e.g. `"1, 2.5, 3"`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("invalid number {token:?} at position {idx}")]
    InvalidNumber { idx: usize, token: String },
}


/// Splits on commas, trims each token and parses it as `f64`.
pub fn parse_number_list(text: &str) -> Result<Vec<f64>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    text.split(',')
        .enumerate()
        .map(|(idx, raw)| {
            let token = raw.trim();
            token.parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber { idx, token: token.to_string() })
        })
        .collect()
}


/// Parses a single scalar field, trimming surrounding whitespace.
pub fn parse_scalar(text: &str) -> Result<f64, ParseError> {
    let token = text.trim();
    if token.is_empty() {
        return Err(ParseError::Empty);
    }
    token.parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber { idx: 0, token: token.to_string() })
}

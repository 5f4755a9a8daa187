//! Text input parsing.
//!
//! Accepts numbers separated by commas and/or any whitespace, the way
//! they are usually pasted from a spreadsheet or a generator's output.

use thiserror::Error;

/// Errors raised while turning text into numbers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("token {position} ({token:?}) is not a number")]
    InvalidNumber { token: String, position: usize },
}

/// Parses a comma/whitespace separated list of floats.
///
/// Empty tokens (e.g. from `"0.1,,0.2"`) are skipped. Range checking is
/// left to [`super::Sequence::new`].
pub fn parse_sequence(text: &str) -> Result<Vec<f64>, ParseError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect()
}

//! Input sequences and their validation.
//!
//! Raw numbers enter the engine here. Text is split into floats by
//! [`parse_sequence`], and [`Sequence::new`] enforces the range and
//! length preconditions every test relies on.

mod parse;
mod validator;

pub use parse::{parse_sequence, ParseError};
pub use validator::Sequence;

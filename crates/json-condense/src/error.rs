//! Error type for the decode path.

use thiserror::Error;

/// Errors surfaced while turning a condensed string back into JSON.
///
/// Compression is infallible, and decompression of any in-alphabet
/// string resolves to some value, so the only reportable failure is
/// input that cannot even be read as coder digits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CondenseError {
    /// The input contains a character outside the 92-character
    /// printable alphabet the encoder emits.
    #[error("character {0:?} is outside the condensed alphabet")]
    InvalidCharacter(char),
}

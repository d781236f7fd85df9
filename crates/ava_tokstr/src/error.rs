//! Error types for building character sets and reading tokens.
//!
//! Tokenizing itself never fails; running out of input is reported as
//! "no token" (`None`). These errors only cover the conversions around it.

use thiserror::Error;

/// A character set could not be built from the given characters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSetError {
    /// A non-ASCII character was supplied.
    #[error("character {ch:?} at byte {index} is not ASCII")]
    NonAscii {
        /// The offending character.
        ch: char,
        /// Byte index of `ch` in the input string.
        index: usize,
    },
}

/// A token could not be viewed as text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The token bytes are not valid UTF-8.
    #[error("token at {start}..{end} is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Start offset of the token in its buffer.
        start: u32,
        /// End offset (exclusive) of the token in its buffer.
        end: u32,
        /// Length of the valid UTF-8 prefix of the token.
        valid_up_to: usize,
    },
}

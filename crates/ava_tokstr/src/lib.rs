//! Restartable, in-place string tokenizer.
//!
//! Splits a caller-owned byte buffer into tokens without allocating.
//! Each call skips leading *delimiters*, then scans to the first
//! *terminator*, overwrites it with `0x00`, and records where the next call
//! resumes.
//!
//! # Layers
//!
//! ```text
//! CharSet        256-entry byte-class table (delimiters, terminators)
//!     │
//!     ▼
//! next_token()   primitive: &mut [u8] + external cursor
//!     │
//!     ▼
//! Tokenizer      buffer + index cursor, yields Token { bytes, span }
//!     │
//!     ▼
//! Split          Iterator with fixed sets
//! ```
//!
//! [`TokenBuffer`] is an owned, NUL-terminated buffer to run them over.
//!
//! # Example
//!
//! ```
//! use ava_tokstr::{CharSet, TokenBuffer};
//!
//! let mut buf = TokenBuffer::new("  ab,cd; ef");
//! let delims = CharSet::from_bytes(b" ");
//! let terms = CharSet::from_bytes(b",; ");
//! let mut tokenizer = buf.tokenizer();
//! let mut words = Vec::new();
//! while let Some(tok) = tokenizer.next_token(&delims, &terms) {
//!     words.push(tok.as_bytes());
//! }
//! assert_eq!(words, [&b"ab"[..], &b"cd"[..], &b"ef"[..]]);
//! ```

mod char_set;
mod error;
mod scan;
mod token_buffer;
mod tokenizer;

pub use char_set::CharSet;
pub use error::{CharSetError, TokenError};
pub use scan::next_token;
pub use token_buffer::TokenBuffer;
pub use tokenizer::{split_line, Span, Split, Token, Tokenizer};

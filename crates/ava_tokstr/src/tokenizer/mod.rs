//! Cursor-owning tokenizer over a borrowed buffer.
//!
//! [`Tokenizer`] pairs a buffer with its resume position, so a cursor can
//! never be replayed against the wrong buffer. Every [`Token`] it yields
//! carries a [`Span`] of byte offsets into that buffer and borrows the
//! buffer for as long as the token lives.
//!
//! ```
//! use ava_tokstr::{CharSet, TokenBuffer};
//!
//! let mut buf = TokenBuffer::new("a:b:c");
//! let words: Vec<_> = buf
//!     .tokenizer()
//!     .split(CharSet::EMPTY, CharSet::from_bytes(b":"))
//!     .map(|tok| tok.as_bytes())
//!     .collect();
//! assert_eq!(words, [&b"a"[..], &b"b"[..], &b"c"[..]]);
//! ```

use std::iter::FusedIterator;

use tracing::trace;

use crate::error::TokenError;
use crate::scan::scan;
use crate::token_buffer::saturating_u32;
use crate::{CharSet, TokenBuffer};

/// Half-open byte range `start..end` into a tokenized buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A token cut out of a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    bytes: &'a [u8],
    span: Span,
}

impl<'a> Token<'a> {
    /// Token bytes, without the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Token as UTF-8 text.
    ///
    /// Always succeeds for buffers built from `&str` and cut with ASCII
    /// sets. Fails only when the buffer came from raw bytes.
    pub fn to_str(&self) -> Result<&'a str, TokenError> {
        std::str::from_utf8(self.bytes).map_err(|e| TokenError::InvalidUtf8 {
            start: self.span.start,
            end: self.span.end,
            valid_up_to: e.valid_up_to(),
        })
    }

    /// Position of the token in its buffer.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Restartable tokenizer that owns its cursor.
///
/// # States
///
/// - **Active**: a cursor is set; [`next_token`](Self::next_token) scans
///   from it.
/// - **Exhausted**: no cursor; every call returns `None` until
///   [`restart`](Self::restart) supplies a fresh buffer.
#[derive(Debug, Default)]
pub struct Tokenizer<'a> {
    /// Unscanned remainder of the buffer, `None` once exhausted.
    rest: Option<&'a mut [u8]>,
    /// Offset of `rest` within the buffer.
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    /// Start tokenizing `buf` at byte 0.
    pub fn new(buf: &'a mut TokenBuffer) -> Self {
        Self::from_bytes(buf.as_mut_bytes())
    }

    /// Start tokenizing a raw byte slice at byte 0.
    pub fn from_bytes(text: &'a mut [u8]) -> Self {
        Tokenizer {
            rest: Some(text),
            offset: 0,
        }
    }

    /// Discard the current cursor and start over on a fresh buffer.
    pub fn restart(&mut self, buf: &'a mut TokenBuffer) {
        self.restart_bytes(buf.as_mut_bytes());
    }

    /// Discard the current cursor and start over on a raw byte slice.
    pub fn restart_bytes(&mut self, text: &'a mut [u8]) {
        self.rest = Some(text);
        self.offset = 0;
    }

    /// Produce the next token, or `None` at the end of the sequence.
    ///
    /// The sets may differ from call to call. A terminator found after the
    /// token is overwritten with `0x00` in the buffer.
    pub fn next_token(
        &mut self,
        delimiters: &CharSet,
        terminators: &CharSet,
    ) -> Option<Token<'a>> {
        let text = self.rest.take()?;
        let cut = scan(text, delimiters, terminators)?;

        let start = self.offset + cut.skipped;
        let end = start + cut.token.len();
        if let Some(rest) = cut.rest {
            self.rest = Some(rest);
            self.offset = end + 1;
        }

        let token = Token {
            bytes: cut.token,
            span: Span::new(saturating_u32(start), saturating_u32(end)),
        };
        trace!(
            start = token.span.start,
            end = token.span.end,
            resume = ?self.cursor(),
            "token"
        );
        Some(token)
    }

    /// Offset the next call resumes from, or `None` once exhausted.
    pub fn cursor(&self) -> Option<u32> {
        self.rest.as_ref().map(|_| saturating_u32(self.offset))
    }

    /// Returns `true` if no cursor is set.
    pub fn is_exhausted(&self) -> bool {
        self.rest.is_none()
    }

    /// Turn into an iterator that uses the same sets for every token.
    pub fn split(self, delimiters: CharSet, terminators: CharSet) -> Split<'a> {
        Split {
            tokenizer: self,
            delimiters,
            terminators,
        }
    }
}

/// Iterator over the tokens of a buffer with fixed sets.
///
/// Created by [`Tokenizer::split`].
#[derive(Debug)]
pub struct Split<'a> {
    tokenizer: Tokenizer<'a>,
    delimiters: CharSet,
    terminators: CharSet,
}

impl<'a> Split<'a> {
    /// Offset the next token is scanned from, or `None` once exhausted.
    pub fn cursor(&self) -> Option<u32> {
        self.tokenizer.cursor()
    }

    /// Give back the tokenizer, keeping its cursor.
    pub fn into_tokenizer(self) -> Tokenizer<'a> {
        self.tokenizer
    }
}

impl<'a> Iterator for Split<'a> {
    type Item = Token<'a>;

    #[inline]
    fn next(&mut self) -> Option<Token<'a>> {
        self.tokenizer.next_token(&self.delimiters, &self.terminators)
    }
}

// Every `None` clears the cursor, and a `Split` never restarts.
impl FusedIterator for Split<'_> {}

/// Split one line of command input into at most `max` words.
///
/// Uses blanks (space, tab) as delimiters and blanks plus line feed as
/// terminators. A line feed is not skipped as a delimiter, so a line that
/// ends in a blank then a line feed yields a trailing empty word.
pub fn split_line(line: &str, max: usize) -> Vec<String> {
    let mut buf = TokenBuffer::new(line);
    buf.tokenizer()
        .split(CharSet::BLANKS, CharSet::LINE_TERMINATORS)
        .take(max)
        .map(|tok| String::from_utf8_lossy(tok.as_bytes()).into_owned())
        .collect()
}

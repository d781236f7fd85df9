//! Owned, NUL-terminated buffer that tokenizing splits in place.
//!
//! The buffer holds the text followed by one `0x00` sentinel byte, the same
//! layout a C string has. Tokenizing overwrites each terminator it cuts at
//! with `0x00`, so after a full pass [`TokenBuffer::as_sentinel_bytes`] is a
//! run of NUL-separated tokens.
//!
//! # Interior NUL bytes
//!
//! A `0x00` inside the text ends the string for the tokenizer: nothing after
//! it is ever scanned. Construction records the position of the first one
//! (see [`TokenBuffer::interior_nul`]) so callers can detect truncated input.

use crate::Tokenizer;

/// Owned text buffer with a trailing `0x00` sentinel.
///
/// # Layout
///
/// ```text
/// [text_bytes..., 0x00]
///  ^              ^
///  0              text_len (sentinel)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenBuffer {
    /// Owned buffer: `[text_bytes..., 0x00 sentinel]`.
    buf: Vec<u8>,
    /// Position of the first `0x00` inside the text, if any.
    interior_nul: Option<u32>,
}

impl TokenBuffer {
    /// Copy `text` into a new sentinel-terminated buffer.
    pub fn new(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Copy raw bytes into a new sentinel-terminated buffer.
    ///
    /// # Size
    ///
    /// Token spans use `u32` offsets. Text longer than `u32::MAX` bytes is
    /// accepted, but offsets past that point saturate.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(bytes);
        buf.push(0);

        let interior_nul = memchr::memchr(0, bytes).map(saturating_u32);

        Self { buf, interior_nul }
    }

    /// Text bytes, without the sentinel.
    ///
    /// Reflects any cuts made by earlier tokenizing: terminators that were
    /// split at read as `0x00`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.text_len()]
    }

    /// Text bytes followed by the `0x00` sentinel.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Mutable text bytes, without the sentinel.
    ///
    /// The sentinel stays out of reach so it can never be overwritten.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        let len = self.text_len();
        &mut self.buf[..len]
    }

    /// Length of the text in bytes (excludes the sentinel).
    pub fn len(&self) -> u32 {
        saturating_u32(self.text_len())
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text_len() == 0
    }

    /// Position of the first `0x00` byte inside the original text.
    ///
    /// Tokenizing never looks past this position. Cuts made by the
    /// tokenizer do not change this value.
    pub fn interior_nul(&self) -> Option<u32> {
        self.interior_nul
    }

    /// Start a fresh [`Tokenizer`] at byte 0 of this buffer.
    pub fn tokenizer(&mut self) -> Tokenizer<'_> {
        Tokenizer::new(self)
    }

    #[inline]
    fn text_len(&self) -> usize {
        self.buf.len() - 1
    }
}

impl From<&str> for TokenBuffer {
    fn from(text: &str) -> Self {
        TokenBuffer::new(text)
    }
}

impl From<String> for TokenBuffer {
    fn from(text: String) -> Self {
        let mut buf = text.into_bytes();
        let interior_nul = memchr::memchr(0, &buf).map(saturating_u32);
        buf.push(0);
        Self { buf, interior_nul }
    }
}

/// Narrow a byte offset to the `u32` used by spans, saturating at `u32::MAX`.
#[inline]
pub(crate) fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

//! The restartable, destructive split primitive.
//!
//! [`next_token`] finds the next token in a mutable byte slice in two phases:
//!
//! 1. **Skip**: advance past bytes in the delimiter set.
//! 2. **Scan**: advance until a byte in the terminator set, a `0x00`, or the
//!    end of the slice.
//!
//! A terminator found in phase 2 is overwritten with `0x00` and the slice
//! after it becomes the cursor for the next call. Nothing is allocated: the
//! token and the cursor are disjoint sub-slices of the caller's buffer,
//! carved out with `split_at_mut`.
//!
//! # Edge cases
//!
//! - An empty delimiter set skips nothing, so the first byte always starts
//!   the token. If that byte is also a terminator the token is empty.
//! - An empty terminator set makes the rest of the text one token and
//!   leaves the cursor unset.
//! - A `0x00` byte is "end of string" in both phases.

use crate::CharSet;

/// Extract the next token, resuming from `cursor` when `text` is `None`.
///
/// Passing `Some(text)` starts a fresh scan at the beginning of `text` and
/// discards whatever `cursor` held. Passing `None` resumes from `cursor`.
///
/// On return `cursor` holds the bytes after the cut terminator, or `None`
/// when no terminator was found (the token ran to the end of the text) or
/// no token was produced.
///
/// Returns `None` ("no token") when there is nothing to scan, or when only
/// delimiters remain. Once that happens with no new `text`, every further
/// call returns `None` as well.
///
/// # Example
///
/// ```
/// use ava_tokstr::{next_token, CharSet};
///
/// let mut line = *b"  ab,cd; ef";
/// let delims = CharSet::from_bytes(b" ");
/// let terms = CharSet::from_bytes(b",; ");
/// let mut cursor = None;
///
/// let first = next_token(Some(&mut line[..]), &delims, &terms, &mut cursor);
/// assert_eq!(first.as_deref(), Some(&b"ab"[..]));
/// let second = next_token(None, &delims, &terms, &mut cursor);
/// assert_eq!(second.as_deref(), Some(&b"cd"[..]));
/// let third = next_token(None, &delims, &terms, &mut cursor);
/// assert_eq!(third.as_deref(), Some(&b"ef"[..]));
/// assert!(next_token(None, &delims, &terms, &mut cursor).is_none());
/// ```
pub fn next_token<'a>(
    text: Option<&'a mut [u8]>,
    delimiters: &CharSet,
    terminators: &CharSet,
    cursor: &mut Option<&'a mut [u8]>,
) -> Option<&'a mut [u8]> {
    // Taken unconditionally: a fresh `text` always clears the saved cursor.
    let resumed = cursor.take();
    let text = text.or(resumed)?;
    let cut = scan(text, delimiters, terminators)?;
    *cursor = cut.rest;
    Some(cut.token)
}

/// Result of one successful scan.
pub(crate) struct Cut<'a> {
    /// Number of delimiter bytes skipped before the token.
    pub(crate) skipped: usize,
    /// The token, without its terminator.
    pub(crate) token: &'a mut [u8],
    /// Bytes after the cut terminator, or `None` if the token ran to the end.
    pub(crate) rest: Option<&'a mut [u8]>,
}

/// Skip delimiters, then cut the token at the first terminator.
pub(crate) fn scan<'a>(
    text: &'a mut [u8],
    delimiters: &CharSet,
    terminators: &CharSet,
) -> Option<Cut<'a>> {
    let skipped = skip_delimiters(text, delimiters);
    if text.get(skipped).map_or(true, |&b| b == 0) {
        return None;
    }

    let (_, from_start) = text.split_at_mut(skipped);
    let end = find_end(from_start, terminators);
    let (token, tail) = from_start.split_at_mut(end);

    let rest = match tail.split_first_mut() {
        Some((terminator, rest)) if *terminator != 0 => {
            *terminator = 0;
            Some(rest)
        }
        // End of slice, or a NUL inside the text: the string ends here.
        _ => None,
    };

    Some(Cut {
        skipped,
        token,
        rest,
    })
}

/// Number of leading bytes that are delimiters.
///
/// Stops at `0x00`, which is never a member of a [`CharSet`].
#[inline]
fn skip_delimiters(text: &[u8], delimiters: &CharSet) -> usize {
    if delimiters.is_empty() {
        return 0;
    }
    text.iter()
        .position(|&b| !delimiters.contains(b))
        .unwrap_or(text.len())
}

/// Index of the first terminator or `0x00`, or `text.len()` if neither occurs.
///
/// Terminator sets of up to two bytes are searched with `memchr` alongside
/// the NUL byte; larger sets fall back to the lookup table.
#[inline]
fn find_end(text: &[u8], terminators: &CharSet) -> usize {
    let found = match terminators.needles() {
        Some([]) => memchr::memchr(0, text),
        Some(&[a]) => memchr::memchr2(0, a, text),
        Some(&[a, b]) => memchr::memchr3(0, a, b, text),
        _ => text.iter().position(|&b| b == 0 || terminators.contains(b)),
    };
    found.unwrap_or(text.len())
}

#[cfg(test)]
mod tests;

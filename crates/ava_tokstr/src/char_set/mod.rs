//! Byte-class sets for delimiters and terminators.
//!
//! A [`CharSet`] is a 256-entry lookup table: membership is a single indexed
//! read instead of a linear walk over the member list. The NUL byte (`0x00`)
//! is never a member. It marks the end of a string, so scanning loops that
//! test `contains(b)` stop at a NUL without a separate check.
//!
//! Sets with one or two members also remember those members so the scan
//! phase can hand them to `memchr`.

use crate::error::CharSetError;

/// Set of single-byte characters used to trim or terminate a token.
///
/// # Invariant
///
/// `table[0]` is always `false`. `members` counts the `true` entries.
/// When `members <= 2`, `needles[..members]` lists them in insertion order.
#[derive(Clone, Copy)]
pub struct CharSet {
    table: [bool; 256],
    members: u16,
    needles: [u8; 2],
}

impl CharSet {
    /// The empty set: no trimming when used as delimiters, no cut when used
    /// as terminators.
    pub const EMPTY: CharSet = CharSet {
        table: [false; 256],
        members: 0,
        needles: [0; 2],
    };

    /// Space and horizontal tab.
    pub const BLANKS: CharSet = CharSet::from_bytes(b" \t");

    /// Space, horizontal tab and line feed.
    pub const LINE_TERMINATORS: CharSet = CharSet::from_bytes(b" \t\n");

    /// Build a set from raw bytes.
    ///
    /// Duplicates are collapsed and `0x00` is ignored.
    pub const fn from_bytes(bytes: &[u8]) -> CharSet {
        let mut set = CharSet::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b != 0 && !set.table[b as usize] {
                set.table[b as usize] = true;
                if set.members < 2 {
                    set.needles[set.members as usize] = b;
                }
                set.members += 1;
            }
            i += 1;
        }
        set
    }

    /// Build a set from the characters of `chars`.
    ///
    /// Every character must be ASCII: the tokenizer works on bytes, and a
    /// multi-byte character cannot be matched one byte at a time.
    pub fn try_from_str(chars: &str) -> Result<CharSet, CharSetError> {
        if let Some((index, ch)) = chars.char_indices().find(|(_, c)| !c.is_ascii()) {
            return Err(CharSetError::NonAscii { ch, index });
        }
        Ok(CharSet::from_bytes(chars.as_bytes()))
    }

    /// Returns `true` if `b` is a member. Always `false` for `0x00`.
    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        self.table[b as usize]
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members == 0
    }

    /// Number of distinct members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members as usize
    }

    /// Members of a set small enough for a `memchr` search.
    ///
    /// Returns `None` for sets with more than two members.
    #[inline]
    pub(crate) fn needles(&self) -> Option<&[u8]> {
        if self.members <= 2 {
            Some(&self.needles[..self.members as usize])
        } else {
            None
        }
    }

    /// Iterate over the members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=u8::MAX).filter(move |&b| self.contains(b))
    }
}

// Membership only; `needles` order depends on construction order.
impl PartialEq for CharSet {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl Eq for CharSet {}

impl Default for CharSet {
    fn default() -> Self {
        CharSet::EMPTY
    }
}

impl std::fmt::Debug for CharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|b| b.escape_ascii().to_string()))
            .finish()
    }
}

impl From<&[u8]> for CharSet {
    fn from(bytes: &[u8]) -> Self {
        CharSet::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for CharSet {
    fn from(bytes: &[u8; N]) -> Self {
        CharSet::from_bytes(bytes)
    }
}

impl TryFrom<&str> for CharSet {
    type Error = CharSetError;

    fn try_from(chars: &str) -> Result<Self, Self::Error> {
        CharSet::try_from_str(chars)
    }
}

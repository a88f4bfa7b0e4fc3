//! Alphabytes encoding
//!
//! Alphabytes are an alphagram rewritten so that every occurrence of a letter
//! gets its own byte. Each byte packs the letter number (1-26) into its low
//! five bits and the letter's repeat rank into the bits above:
//!
//! ```text
//! byte = letter + (rank + 2) * 32     for rank 0..=5
//! byte = letter                       for rank >= 6
//! ```
//!
//! A word list prepared in this form can answer "at most two e's and at most
//! three t's" with a plain byte-class regex instead of a multiset comparison.
//!
//! Ranks from 6 upward collapse onto the bare letter number, which is also
//! the byte rank 0 would get without the offset. Seven or more copies of one
//! letter are rare in real words, and existing encoded corpora depend on this
//! cutoff, so it is kept. Decoding only looks at the low five bits and still
//! recovers the multiset in that case.

use super::Alphagram;
use crate::core::{LetterError, Result, Slug};
use std::fmt;

/// Highest repeat rank that gets a distinct byte
pub const MAX_DISTINCT_RANK: usize = 5;

/// Encoded form of an alphagram, one byte per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Alphabytes(Vec<u8>);

impl Alphabytes {
    /// Get the raw bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of letters encoded
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no letters are encoded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the underlying byte vector
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Alphabytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Lowercase hex, two digits per byte
impl fmt::Display for Alphabytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Byte for the `rank`-th repeat (0-based) of a lowercase `letter`
///
/// # Examples
/// ```
/// use letterset::letters::encode_byte;
///
/// assert_eq!(encode_byte(b'a', 0), 65);
/// assert_eq!(encode_byte(b'a', 1), 97);
/// assert_eq!(encode_byte(b'a', 6), 1); // collapsed
/// ```
#[inline]
#[must_use]
pub const fn encode_byte(letter: u8, rank: usize) -> u8 {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    let number = letter - b'a' + 1;
    if rank <= MAX_DISTINCT_RANK {
        number + (rank as u8 + 2) * 32
    } else {
        number
    }
}

/// Encode a slug's alphagram as alphabytes
///
/// # Examples
/// ```
/// use letterset::core::Slug;
/// use letterset::letters::alphabytes;
///
/// let bytes = alphabytes(&Slug::new("bab").unwrap());
/// assert_eq!(bytes.as_bytes(), &[65, 66, 98]);
/// ```
#[must_use]
pub fn alphabytes(slug: &Slug) -> Alphabytes {
    encode_alphagram(&Alphagram::from_slug(slug))
}

/// Encode an alphagram that is already sorted
#[must_use]
pub fn encode_alphagram(alpha: &Alphagram) -> Alphabytes {
    let mut bytes = Vec::with_capacity(alpha.len());
    let mut current = None;
    let mut rank = 0;

    for &letter in alpha.as_bytes() {
        if current == Some(letter) {
            rank += 1;
        } else {
            rank = 0;
        }
        bytes.push(encode_byte(letter, rank));
        current = Some(letter);
    }

    Alphabytes(bytes)
}

/// Decode alphabytes back into a printable alphagram
///
/// Only the low five bits of each byte are used, so rank information is
/// discarded. The decoded letters are returned in ascending order.
///
/// # Errors
/// Returns `LetterError::InvalidInput` if a byte's low five bits are not a
/// letter number between 1 and 26.
///
/// # Examples
/// ```
/// use letterset::letters::alphabytes_to_alphagram;
///
/// let alpha = alphabytes_to_alphagram(&[65, 66, 98]).unwrap();
/// assert_eq!(alpha.as_str(), "abb");
/// ```
pub fn alphabytes_to_alphagram(bytes: &[u8]) -> Result<Alphagram> {
    let mut letters = bytes
        .iter()
        .map(|&byte| match byte % 32 {
            number @ 1..=26 => Ok(b'a' + number - 1),
            _ => Err(LetterError::invalid(
                format!("{byte:#04x}"),
                "alphabytes must encode a letter number between 1 and 26",
            )),
        })
        .collect::<Result<Vec<u8>>>()?;

    letters.sort_unstable();
    Ok(Alphagram::from_sorted_bytes(letters))
}

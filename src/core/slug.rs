//! Slug representation
//!
//! A slug is text reduced to lowercase ASCII letters only. Every multiset
//! operation indexes a fixed 26-entry table by letter, so the invariant is
//! checked once here instead of at every call site.

use super::{LetterError, Result};
use std::fmt;
use std::ops::Deref;

/// The lowercase alphabet in index order (`a` = 0 … `z` = 25)
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Index of a lowercase ASCII letter (`b'a'` = 0 … `b'z'` = 25)
///
/// # Panics
/// Panics in debug mode if `letter` is not a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    (letter - b'a') as usize
}

/// Text containing only the letters `a`-`z`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Slug(String);

impl Slug {
    /// Validate text that is already in slug form
    ///
    /// # Errors
    /// Returns `LetterError::InvalidInput` if the text contains anything other
    /// than lowercase ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use letterset::core::Slug;
    ///
    /// let slug = Slug::new("caesar").unwrap();
    /// assert_eq!(slug.as_str(), "caesar");
    ///
    /// assert!(Slug::new("Caesar").is_err());
    /// assert!(Slug::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(LetterError::invalid(
                text,
                "a slug may only contain the letters a-z",
            ));
        }
        Ok(Self(text))
    }

    /// Reduce arbitrary text to a slug: lowercase it and keep ASCII letters
    ///
    /// Accented letters and other scripts are dropped rather than folded.
    ///
    /// # Examples
    /// ```
    /// use letterset::core::Slug;
    ///
    /// assert_eq!(Slug::from_text("Caesar Shift!").as_str(), "caesarshift");
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self(
            text.chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase())
                .collect(),
        )
    }

    /// Wrap a string the caller has already proven to be letters only
    pub(crate) fn from_letters_unchecked(text: String) -> Self {
        debug_assert!(text.bytes().all(|b| b.is_ascii_lowercase()));
        Self(text)
    }

    /// Get the slug as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the slug's letters as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Consume the slug, returning the underlying string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Slug {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Slug {
    type Error = LetterError;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

impl std::str::FromStr for Slug {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_lowercase_letters() {
        let slug = Slug::new("anagram").unwrap();
        assert_eq!(slug.as_str(), "anagram");
        assert_eq!(slug.len(), 7);
    }

    #[test]
    fn slug_accepts_empty() {
        assert!(Slug::new("").unwrap().is_empty());
    }

    #[test]
    fn slug_rejects_non_letters() {
        assert!(matches!(
            Slug::new("abc1"),
            Err(LetterError::InvalidInput { .. })
        ));
        assert!(Slug::new("ABC").is_err()); // Uppercase
        assert!(Slug::new("a b").is_err()); // Space
        assert!(Slug::new("café").is_err()); // Non-ASCII
    }

    #[test]
    fn from_text_strips_everything_else() {
        assert_eq!(Slug::from_text("DBFTBS TIJGU").as_str(), "dbftbstijgu");
        assert_eq!(Slug::from_text("It's 4 o'clock").as_str(), "itsoclock");
        assert_eq!(Slug::from_text("naïve").as_str(), "nave");
        assert!(Slug::from_text("123 !?").is_empty());
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index(b'a'), 0);
        assert_eq!(letter_index(b'm'), 12);
        assert_eq!(letter_index(b'z'), 25);
    }

    #[test]
    fn alphabet_is_ordered() {
        assert_eq!(ALPHABET.len(), 26);
        for (i, b) in ALPHABET.bytes().enumerate() {
            assert_eq!(letter_index(b), i);
        }
    }
}

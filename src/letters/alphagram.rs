//! Alphagram representation
//!
//! An alphagram is a slug with its letters sorted ascending. Two slugs are
//! anagrams of each other exactly when their alphagrams are equal.

use crate::core::Slug;
use std::fmt;
use std::ops::Deref;

/// A slug whose letters are in ascending order
///
/// Dereferences to [`Slug`], so every slug operation applies to it directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Alphagram(Slug);

impl Alphagram {
    /// Sort the letters of a slug
    #[must_use]
    pub fn from_slug(slug: &Slug) -> Self {
        let mut letters = slug.as_bytes().to_vec();
        letters.sort_unstable();
        Self::from_sorted_bytes(letters)
    }

    /// Build from bytes that are already lowercase letters in ascending order
    pub(crate) fn from_sorted_bytes(letters: Vec<u8>) -> Self {
        debug_assert!(letters.is_sorted(), "alphagram letters must be sorted");
        // Bytes come from a slug or were range-checked, so they are ASCII
        let text = letters.into_iter().map(char::from).collect();
        Self(Slug::from_letters_unchecked(text))
    }

    /// Get the alphagram as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Borrow the alphagram as a plain slug
    #[inline]
    #[must_use]
    pub const fn as_slug(&self) -> &Slug {
        &self.0
    }
}

impl Deref for Alphagram {
    type Target = Slug;

    fn deref(&self) -> &Slug {
        &self.0
    }
}

impl From<&Slug> for Alphagram {
    fn from(slug: &Slug) -> Self {
        Self::from_slug(slug)
    }
}

impl fmt::Display for Alphagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return the letters of `slug` sorted in alphabetical order
///
/// # Examples
/// ```
/// use letterset::core::Slug;
/// use letterset::letters::alphagram;
///
/// let slug = Slug::new("abca").unwrap();
/// assert_eq!(alphagram(&slug).as_str(), "aabc");
/// ```
#[must_use]
pub fn alphagram(slug: &Slug) -> Alphagram {
    Alphagram::from_slug(slug)
}

//! Exact-anagram lookup keyed by alphagram

use crate::core::Slug;
use crate::letters::{Alphagram, alphagram};
use rustc_hash::FxHashMap;

/// Word list entries grouped by the alphagram of their slug
#[derive(Debug, Clone, Default)]
pub struct AlphagramIndex {
    groups: FxHashMap<Alphagram, Vec<String>>,
    entries: usize,
}

impl AlphagramIndex {
    /// Index every entry, skipping ones with no letters
    ///
    /// # Examples
    /// ```
    /// use letterset::core::Slug;
    /// use letterset::wordlists::AlphagramIndex;
    ///
    /// let index = AlphagramIndex::from_entries(["stop", "pots", "tops", "spot on"]);
    /// let found = index.anagrams_of(&Slug::new("post").unwrap());
    /// assert_eq!(found, ["stop", "pots", "tops"]);
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry.as_ref());
        }
        index
    }

    /// Add one entry; returns false if it had no letters
    pub fn insert(&mut self, entry: &str) -> bool {
        let slug = Slug::from_text(entry);
        if slug.is_empty() {
            return false;
        }
        self.groups
            .entry(alphagram(&slug))
            .or_default()
            .push(entry.to_string());
        self.entries += 1;
        true
    }

    /// Entries whose letters are exactly the letters of `slug`, in insertion order
    #[must_use]
    pub fn anagrams_of(&self, slug: &Slug) -> &[String] {
        self.groups
            .get(&alphagram(slug))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of entries indexed
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of distinct alphagrams
    #[must_use]
    pub fn alphagram_count(&self) -> usize {
        self.groups.len()
    }
}

//! Letter analysis command
//!
//! Summarises a piece of text as a letter multiset: its alphagram and
//! alphabytes, which letters are over-represented, and how hard it looks to
//! anagram.

use crate::core::{LetterError, Result, Slug};
use crate::letters::{
    Alphabytes, Alphagram, LetterCounts, Proportions, alphabytes, alphagram, anagram_cost,
    anahash, consonantcy, letters_to_vec, to_proportion,
};

/// Result of analyzing a piece of text
pub struct LetterReport {
    pub slug: Slug,
    pub alphagram: Alphagram,
    pub alphabytes: Alphabytes,
    pub anahash: String,
    pub cost: f64,
    pub consonants: Slug,
    pub counts: LetterCounts,
    pub proportions: Proportions,
}

/// Analyze the letters of `text`
///
/// # Errors
///
/// Returns `LetterError::InvalidInput` if the text contains no letters.
pub fn analyze_letters(text: &str) -> Result<LetterReport> {
    let slug = Slug::from_text(text);
    if slug.is_empty() {
        return Err(LetterError::invalid(text, "there are no letters to analyze"));
    }

    let counts = letters_to_vec(&slug);
    let proportions = to_proportion(&counts)?;

    Ok(LetterReport {
        alphagram: alphagram(&slug),
        alphabytes: alphabytes(&slug),
        anahash: anahash(&slug),
        cost: anagram_cost(&slug),
        consonants: consonantcy(&slug),
        counts,
        proportions,
        slug,
    })
}

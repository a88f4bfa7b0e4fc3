//! Vowel and consonant projections

use crate::core::Slug;

/// Vowels for the keep/drop projections
pub const VOWELS: &str = "aeiou";

/// Just the consonants of a slug
///
/// 'y' is always treated as a vowel and 'w' always as a consonant.
///
/// # Examples
/// ```
/// use letterset::core::Slug;
/// use letterset::letters::consonantcy;
///
/// assert_eq!(consonantcy(&Slug::new("rhythm").unwrap()).as_str(), "rhthm");
/// ```
#[must_use]
pub fn consonantcy(slug: &Slug) -> Slug {
    let kept = slug
        .chars()
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
        .collect();
    Slug::from_letters_unchecked(kept)
}

/// Keep only the vowels of `word`, and spaces if `preserve_spaces` is set
#[must_use]
pub fn only_vowels(word: &str, preserve_spaces: bool) -> String {
    word.chars()
        .filter(|&c| VOWELS.contains(c) || (preserve_spaces && c == ' '))
        .collect()
}

/// Drop the vowels of `word`, and spaces unless `preserve_spaces` is set
///
/// Anything that is not a vowel is kept, including digits and punctuation.
#[must_use]
pub fn only_consonants(word: &str, preserve_spaces: bool) -> String {
    word.chars()
        .filter(|&c| !VOWELS.contains(c) && (preserve_spaces || c != ' '))
        .collect()
}

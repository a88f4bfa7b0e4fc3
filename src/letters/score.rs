//! Anomaly and cost heuristics
//!
//! Both compare a slug's letter proportions against [`LETTER_FREQS`].

use super::{LETTER_FREQS, letters_to_vec, to_proportion};
use crate::core::Slug;

/// Letters whose share of `slug` is above their share of English
///
/// Returns the over-represented letters in alphabetical order, each once.
/// An empty slug hashes to the empty string.
///
/// # Examples
/// ```
/// use letterset::core::Slug;
/// use letterset::letters::anahash;
///
/// assert_eq!(anahash(&Slug::new("quiz").unwrap()), "iquz");
/// assert_eq!(anahash(&Slug::new("").unwrap()), "");
/// ```
#[must_use]
pub fn anahash(slug: &Slug) -> String {
    let Ok(props) = to_proportion(&letters_to_vec(slug)) else {
        return String::new();
    };

    (b'a'..=b'z')
        .zip(props.iter().zip(LETTER_FREQS.iter()))
        .filter(|&(_, (&observed, &baseline))| observed > baseline)
        .map(|(letter, _)| char::from(letter))
        .collect()
}

/// A value that tends to be larger for letters that are harder to anagram
///
/// The discrepancy of each letter is how far its observed share is from its
/// English share, as a ratio. The cost is the Euclidean norm of those
/// discrepancies scaled by the number of letters. An empty slug costs 0.
///
/// # Examples
/// ```
/// use letterset::core::Slug;
/// use letterset::letters::anagram_cost;
///
/// let easy = anagram_cost(&Slug::new("stare").unwrap());
/// let hard = anagram_cost(&Slug::new("zzxqj").unwrap());
/// assert!(hard > easy);
/// assert_eq!(anagram_cost(&Slug::new("").unwrap()), 0.0);
/// ```
#[must_use]
pub fn anagram_cost(letters: &Slug) -> f64 {
    let Ok(props) = to_proportion(&letters_to_vec(letters)) else {
        return 0.0;
    };

    let sq_cost: f64 = props
        .iter()
        .zip(LETTER_FREQS.iter())
        .map(|(&observed, &baseline)| (observed / baseline - 1.0).powi(2))
        .sum();

    sq_cost.sqrt() * letters.len() as f64
}

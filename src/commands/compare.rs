//! Letter comparison command
//!
//! Runs every multiset difference over the same pair of inputs.

use crate::core::{Result, Slug};
use crate::letters::{Alphagram, AnagramDiff, anagram_diff, diff_both, diff_exact};

/// Result of comparing two sets of letters
pub struct CompareResult {
    pub first: Slug,
    pub second: Slug,
    pub anagram: AnagramDiff,
    pub only_first: Alphagram,
    pub only_second: Alphagram,
    /// `first` minus `second`, only when an exact subtraction was requested
    pub exact: Option<Result<Alphagram>>,
}

/// Compare the letters of two pieces of text
///
/// With `exact` set, also subtracts `second` from `first`, failing with
/// `LetterError::UnmatchedLetters` when `second` does not fit.
#[must_use]
pub fn compare_letters(first: &str, second: &str, exact: bool) -> CompareResult {
    let first = Slug::from_text(first);
    let second = Slug::from_text(second);

    let anagram = anagram_diff(&first, &second);
    let (only_first, only_second) = diff_both(&first, &second);
    let exact = exact.then(|| diff_exact(&first, &second));

    CompareResult {
        first,
        second,
        anagram,
        only_first,
        only_second,
        exact,
    }
}

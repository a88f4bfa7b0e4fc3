//! Multiset differences between sets of letters
//!
//! Inputs are treated as multisets, so they need not be sorted; outputs are
//! always alphagrams. Letters are visited in alphabetical order.

use super::{Alphagram, letters_to_vec};
use crate::core::{LetterError, Result, Slug};

/// Letters left over after an anagram step, and wildcards spent on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramDiff {
    /// Letters of the first multiset that the second did not use
    pub remainder: Alphagram,
    /// Letters the second multiset needed that the first could not supply
    pub wildcards_used: u32,
}

/// Find the difference between two multisets, specialised for anagramming
///
/// Every letter `a2` needs beyond what `a1` holds costs one wildcard: letters
/// `a1` lacks entirely count in full, and letters `a1` holds too few of count
/// by the shortfall. Surplus letters of `a1` form the remainder.
///
/// # Examples
/// ```
/// use letterset::core::Slug;
/// use letterset::letters::anagram_diff;
///
/// let a1 = Slug::new("aabst").unwrap();
/// let a2 = Slug::new("bats").unwrap();
/// let diff = anagram_diff(&a1, &a2);
/// assert_eq!(diff.remainder.as_str(), "a");
/// assert_eq!(diff.wildcards_used, 0);
/// ```
#[must_use]
pub fn anagram_diff(a1: &Slug, a2: &Slug) -> AnagramDiff {
    let have = letters_to_vec(a1);
    let need = letters_to_vec(a2);

    let mut remainder = Vec::new();
    let mut wildcards_used = 0;

    // Letters a1 lacks entirely
    for (&h, &n) in have.iter().zip(need.iter()) {
        if h == 0 {
            wildcards_used += n;
        }
    }

    // Letters a1 holds: either a shortfall or a surplus
    for ((letter, &h), &n) in (b'a'..=b'z').zip(have.iter()).zip(need.iter()) {
        if h == 0 {
            continue;
        }
        if h < n {
            wildcards_used += n - h;
        } else {
            push_repeated(&mut remainder, letter, h - n);
        }
    }

    AnagramDiff {
        remainder: Alphagram::from_sorted_bytes(remainder),
        wildcards_used,
    }
}

/// Compare two multisets from both sides
///
/// Returns the alphagram of letters in `a1` but not in `a2`, and the
/// alphagram of letters in `a2` but not in `a1`. Each letter is repeated by
/// how many more copies that side holds.
///
/// # Examples
/// ```
/// use letterset::core::Slug;
/// use letterset::letters::diff_both;
///
/// let (left, right) = diff_both(&Slug::new("aabc").unwrap(), &Slug::new("abbd").unwrap());
/// assert_eq!(left.as_str(), "ac");
/// assert_eq!(right.as_str(), "bd");
/// ```
#[must_use]
pub fn diff_both(a1: &Slug, a2: &Slug) -> (Alphagram, Alphagram) {
    let first = letters_to_vec(a1);
    let second = letters_to_vec(a2);

    let mut only_first = Vec::new();
    let mut only_second = Vec::new();

    for ((letter, &c1), &c2) in (b'a'..=b'z').zip(first.iter()).zip(second.iter()) {
        push_repeated(&mut only_first, letter, c1.saturating_sub(c2));
        push_repeated(&mut only_second, letter, c2.saturating_sub(c1));
    }

    (
        Alphagram::from_sorted_bytes(only_first),
        Alphagram::from_sorted_bytes(only_second),
    )
}

/// Subtract `part` from `full`, requiring `part` to fit inside `full`
///
/// # Errors
/// Returns `LetterError::UnmatchedLetters` carrying the leftover alphagram if
/// `part` holds a letter `full` lacks, or more copies of one.
///
/// # Examples
/// ```
/// use letterset::core::{LetterError, Slug};
/// use letterset::letters::diff_exact;
///
/// let full = Slug::new("anagram").unwrap();
/// let rest = diff_exact(&full, &Slug::new("nag").unwrap()).unwrap();
/// assert_eq!(rest.as_str(), "aamr");
///
/// let err = diff_exact(&full, &Slug::new("gnaw").unwrap()).unwrap_err();
/// assert!(matches!(err, LetterError::UnmatchedLetters(ref left) if left == "w"));
/// ```
pub fn diff_exact(full: &Slug, part: &Slug) -> Result<Alphagram> {
    let (rest, leftover) = diff_both(full, part);
    if !leftover.is_empty() {
        return Err(LetterError::UnmatchedLetters(leftover.as_str().to_string()));
    }
    Ok(rest)
}

fn push_repeated(out: &mut Vec<u8>, letter: u8, times: u32) {
    out.extend(std::iter::repeat_n(letter, times as usize));
}

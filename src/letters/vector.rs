//! Letter frequency vectors
//!
//! A letter multiset is stored as a length-26 count vector indexed by letter
//! (`a` = 0 … `z` = 25). Dividing by its total gives a proportion vector that
//! can be compared against [`LETTER_FREQS`], the English baseline.

use crate::core::{LetterError, Result, Slug, letter_index};
use rand::Rng;

/// Occurrence count of each letter
pub type LetterCounts = [u32; 26];

/// Share of each letter in a multiset (sums to 1)
pub type Proportions = [f64; 26];

/// Estimated proportions of the letters in English text, `a` through `z`
///
/// Every entry is non-zero, so dividing by a baseline entry is always defined.
pub const LETTER_FREQS: Proportions = [
    0.083_314_52,
    0.019_208_14,
    0.041_554_64,
    0.039_972_36,
    0.113_325_81,
    0.014_566_22,
    0.026_940_35,
    0.025_176_41,
    0.081_166_46,
    0.003_053_69,
    0.009_307_84,
    0.053_994_77,
    0.029_840_08,
    0.069_827_14,
    0.062_732_43,
    0.028_735_9,
    0.002_048_01,
    0.071_812_86,
    0.077_146_59,
    0.065_615_91,
    0.033_939_91,
    0.012_328_91,
    0.010_227_19,
    0.003_797_9,
    0.017_332_58,
    0.003_033_36,
];

/// Count how often each letter occurs in a slug
///
/// The sum of the result always equals the slug's length.
///
/// # Examples
/// ```
/// use letterset::core::Slug;
/// use letterset::letters::letters_to_vec;
///
/// let counts = letters_to_vec(&Slug::new("banana").unwrap());
/// assert_eq!(counts[0], 3); // a
/// assert_eq!(counts[1], 1); // b
/// assert_eq!(counts[13], 2); // n
/// ```
#[must_use]
pub fn letters_to_vec(slug: &Slug) -> LetterCounts {
    let mut counts = [0u32; 26];
    for &letter in slug.as_bytes() {
        counts[letter_index(letter)] += 1;
    }
    counts
}

/// Convert a count vector into proportions summing to 1
///
/// # Errors
/// Returns `LetterError::EmptyInput` if every count is zero.
pub fn to_proportion(counts: &LetterCounts) -> Result<Proportions> {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return Err(LetterError::EmptyInput);
    }

    let total = f64::from(total);
    Ok(counts.map(|count| f64::from(count) / total))
}

/// Draw `num` random letters distributed like English
///
/// Useful as a null hypothesis when judging whether a set of letters is
/// unusual. The baseline sums to slightly less than 1, so a draw landing in
/// the leftover sliver yields `'#'`.
pub fn random_letters<R: Rng + ?Sized>(num: usize, rng: &mut R) -> String {
    (0..num).map(|_| pick_letter(rng.random::<f64>())).collect()
}

/// Map a uniform draw in `[0, 1)` onto the baseline distribution
fn pick_letter(mut draw: f64) -> char {
    for (letter, &freq) in (b'a'..=b'z').zip(LETTER_FREQS.iter()) {
        if draw < freq {
            return char::from(letter);
        }
        draw -= freq;
    }
    '#'
}

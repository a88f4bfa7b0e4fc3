//! Letter-multiset primitives
//!
//! Frequency vectors, the alphagram and alphabytes codecs, multiset
//! differences, and the anomaly/cost heuristics used to rank anagram
//! candidates. Everything here is pure and safe to call from any thread.

mod alphabytes;
mod alphagram;
mod diff;
mod projection;
mod score;
mod vector;

pub use alphabytes::{
    Alphabytes, MAX_DISTINCT_RANK, alphabytes, alphabytes_to_alphagram, encode_alphagram,
    encode_byte,
};
pub use alphagram::{Alphagram, alphagram};
pub use diff::{AnagramDiff, anagram_diff, diff_both, diff_exact};
pub use projection::{VOWELS, consonantcy, only_consonants, only_vowels};
pub use score::{anagram_cost, anahash};
pub use vector::{
    LETTER_FREQS, LetterCounts, Proportions, letters_to_vec, random_letters, to_proportion,
};

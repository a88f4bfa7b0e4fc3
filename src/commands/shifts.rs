//! Caesar shift ranking command
//!
//! Tries all 26 shifts of a message and scores each by how English its
//! letter pairs look.

use crate::cipher::caesar_shift;
use crate::core::Slug;
use crate::ngrams::BigramTable;
use rayon::prelude::*;

/// One candidate decryption
pub struct ShiftRow {
    pub offset: i32,
    pub text: String,
    /// Mean bigram log-probability of the shifted letters
    pub score: f64,
}

/// Every shift of a message, with the most plausible one marked
pub struct ShiftReport {
    pub rows: Vec<ShiftRow>,
    /// Offset of the best-scoring row, if the scores can tell rows apart
    pub best: Option<i32>,
}

/// Shift `text` by each of 0..26 and score every result against `bigrams`
///
/// No row is marked best when the table is empty or the text has fewer than
/// two letters.
#[must_use]
pub fn rank_shifts(text: &str, bigrams: &BigramTable) -> ShiftReport {
    let rows: Vec<ShiftRow> = (0..26)
        .into_par_iter()
        .map(|offset| {
            let shifted = caesar_shift(text, offset);
            let score = mean_bigram_score(&shifted, bigrams);
            ShiftRow {
                offset,
                text: shifted,
                score,
            }
        })
        .collect();

    let scorable = bigrams.entries() > 0 && Slug::from_text(text).len() >= 2;
    let best = scorable
        .then(|| rows.iter().max_by(|a, b| a.score.total_cmp(&b.score)))
        .flatten()
        .map(|row| row.offset);

    ShiftReport { rows, best }
}

fn mean_bigram_score(text: &str, bigrams: &BigramTable) -> f64 {
    let slug = Slug::from_text(text);
    let pairs = slug.len().saturating_sub(1);
    if pairs == 0 {
        return 0.0;
    }
    bigrams.log_prob(&slug) / pairs as f64
}

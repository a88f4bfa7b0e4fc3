//! Letter n-gram log-probability tables
//!
//! A table holds `ln(count / total)` for every n-gram of a frequency corpus,
//! in a flat `26^N` array indexed like a base-26 number. Cells the corpus
//! never mentions hold [`UNSEEN`].

use crate::core::{LetterError, Result, Slug, letter_index};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Log-probability of an n-gram the corpus never mentions
pub const UNSEEN: f64 = -1000.0;

/// Log-probabilities of every `N`-letter sequence
#[derive(Debug, Clone, PartialEq)]
pub struct NgramTable<const N: usize> {
    log_probs: Vec<f64>,
    entries: usize,
    total: u64,
}

/// 26×26 table of letter pairs
pub type BigramTable = NgramTable<2>;

/// 26×26×26 table of letter triples
pub type TrigramTable = NgramTable<3>;

impl<const N: usize> NgramTable<N> {
    /// Number of cells, `26^N`
    pub const CELLS: usize = 26usize.pow(N as u32);

    /// A table where every n-gram is unseen
    ///
    /// Scoring against it is a neutral fallback when the corpus is missing.
    #[must_use]
    pub fn unseen() -> Self {
        Self {
            log_probs: vec![UNSEEN; Self::CELLS],
            entries: 0,
            total: 0,
        }
    }

    /// Read a frequency file of `<ngram> <count>` lines
    ///
    /// # Errors
    /// Returns `LetterError::CorpusUnavailable` if the file cannot be read,
    /// or `LetterError::MalformedCorpus` if a line is not in the expected form.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LetterError::CorpusUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            n = N,
            entries = table.entries,
            total = table.total,
            "built n-gram table"
        );
        Ok(table)
    }

    /// Build a table from the text of a frequency file
    ///
    /// Blank lines are skipped and n-grams are lowercased before indexing.
    /// A later line for the same n-gram overwrites an earlier one, while both
    /// counts still contribute to the total.
    ///
    /// # Errors
    /// Returns `LetterError::MalformedCorpus` for a line that is not an
    /// `N`-letter n-gram followed by a non-negative integer count, or for the
    /// line whose count pushes the total past `u64::MAX`.
    ///
    /// # Examples
    /// ```
    /// use letterset::ngrams::{BigramTable, UNSEEN};
    ///
    /// let table = BigramTable::parse("th 3\nhe 1\n").unwrap();
    /// assert!((table.get(*b"th") - 0.75f64.ln()).abs() < 1e-12);
    /// assert_eq!(table.get(*b"qz"), UNSEEN);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let mut counts = Vec::new();
        let mut total: u64 = 0;
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let malformed = || LetterError::MalformedCorpus {
                line: i + 1,
                content: line.to_string(),
            };
            let (gram, count) = parse_line::<N>(line).ok_or_else(malformed)?;
            total = total.checked_add(count).ok_or_else(malformed)?;
            counts.push((gram, count));
        }

        let mut table = Self::unseen();
        table.total = total;
        table.entries = counts.len();

        for (gram, count) in counts {
            // ln(0) would be -inf; a zero count stays unseen instead
            if count > 0 {
                table.log_probs[Self::index(gram)] = (count as f64 / total as f64).ln();
            }
        }

        Ok(table)
    }

    /// Log-probability of one n-gram of lowercase letters
    ///
    /// # Panics
    /// Panics if a byte is not a lowercase ASCII letter
    #[inline]
    #[must_use]
    pub fn get(&self, gram: [u8; N]) -> f64 {
        self.log_probs[Self::index(gram)]
    }

    /// Sum of log-probabilities of every overlapping n-gram in `slug`
    ///
    /// Slugs shorter than `N` score 0.0.
    #[must_use]
    pub fn log_prob(&self, slug: &Slug) -> f64 {
        slug.as_bytes()
            .windows(N)
            .map(|window| self.log_probs[Self::index_slice(window)])
            .sum()
    }

    /// Number of n-gram lines the table was built from
    #[must_use]
    pub const fn entries(&self) -> usize {
        self.entries
    }

    /// Sum of all counts in the corpus
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    fn index(gram: [u8; N]) -> usize {
        Self::index_slice(&gram)
    }

    fn index_slice(gram: &[u8]) -> usize {
        gram.iter().fold(0, |acc, &letter| {
            assert!(letter.is_ascii_lowercase(), "n-gram letters must be a-z");
            acc * 26 + letter_index(letter)
        })
    }
}

fn parse_line<const N: usize>(line: &str) -> Option<([u8; N], u64)> {
    let mut fields = line.split_whitespace();
    let gram = fields.next()?.to_ascii_lowercase();
    let count = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    let gram: [u8; N] = gram.as_bytes().try_into().ok()?;
    gram.iter()
        .all(u8::is_ascii_lowercase)
        .then_some((gram, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bigram_is_certain() {
        let table = BigramTable::parse("th 100").unwrap();
        assert!(table.get(*b"th").abs() < f64::EPSILON);

        for a in b'a'..=b'z' {
            for b in b'a'..=b'z' {
                if [a, b] != *b"th" {
                    assert!((table.get([a, b]) - UNSEEN).abs() < f64::EPSILON);
                }
            }
        }
    }

    #[test]
    fn counts_are_normalised_by_total() {
        let table = BigramTable::parse("th 1\nhe 1\nin 2\n").unwrap();
        assert!((table.get(*b"th") - 0.25f64.ln()).abs() < 1e-12);
        assert!((table.get(*b"in") - 0.5f64.ln()).abs() < 1e-12);
        assert_eq!(table.entries(), 3);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn ngrams_are_lowercased() {
        let table = TrigramTable::parse("THE 5\nand 5\n").unwrap();
        assert!((table.get(*b"the") - 0.5f64.ln()).abs() < 1e-12);
        assert!((table.get(*b"and") - 0.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = BigramTable::parse("\nth 2\n\n   \nhe 2\n").unwrap();
        assert_eq!(table.entries(), 2);
    }

    #[test]
    fn malformed_lines_report_line_number() {
        let err = BigramTable::parse("th 1\nthe 2\n").unwrap_err();
        assert!(matches!(err, LetterError::MalformedCorpus { line: 2, .. }));

        assert!(BigramTable::parse("th many").is_err());
        assert!(BigramTable::parse("th").is_err());
        assert!(BigramTable::parse("t1 4").is_err());
        assert!(BigramTable::parse("th 4 extra").is_err());
        assert!(BigramTable::parse("th -4").is_err());
    }

    #[test]
    fn overflowing_total_reports_line_number() {
        let err = BigramTable::parse("th 18446744073709551615\nhe 2\n").unwrap_err();
        assert!(matches!(err, LetterError::MalformedCorpus { line: 2, .. }));

        let table = BigramTable::parse("th 18446744073709551615\n").unwrap();
        assert!(table.get(*b"th").abs() < f64::EPSILON);
    }

    #[test]
    fn zero_count_stays_unseen() {
        let table = BigramTable::parse("th 0\nhe 4\n").unwrap();
        assert!((table.get(*b"th") - UNSEEN).abs() < f64::EPSILON);
        assert!(table.get(*b"he").abs() < f64::EPSILON);
    }

    #[test]
    fn empty_corpus_is_all_unseen() {
        assert_eq!(BigramTable::parse("").unwrap(), BigramTable::unseen());
    }

    #[test]
    fn log_prob_sums_windows() {
        let table = BigramTable::parse("th 1\nhe 1\n").unwrap();
        let half = 0.5f64.ln();

        let the = Slug::new("the").unwrap();
        assert!((table.log_prob(&the) - 2.0 * half).abs() < 1e-12);

        let tx = Slug::new("tx").unwrap();
        assert!((table.log_prob(&tx) - UNSEEN).abs() < f64::EPSILON);

        let short = Slug::new("t").unwrap();
        assert!(table.log_prob(&short).abs() < f64::EPSILON);
    }

    #[test]
    fn cell_counts() {
        assert_eq!(BigramTable::CELLS, 676);
        assert_eq!(TrigramTable::CELLS, 17_576);
    }

    #[test]
    fn load_missing_file_is_unavailable() {
        let err = BigramTable::load("/nonexistent/letter_bigrams.txt").unwrap_err();
        assert!(matches!(err, LetterError::CorpusUnavailable { .. }));
    }

    #[test]
    fn load_reads_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "th 100").unwrap();
        let table = BigramTable::load(file.path()).unwrap();
        assert!(table.get(*b"th").abs() < f64::EPSILON);
    }
}

//! Process-wide n-gram tables
//!
//! Each table is built at most once per process, on first successful access,
//! and then shared read-only. A failed build is not cached, so a caller that
//! gets `CorpusUnavailable` can retry later or with another path.

use super::{BigramTable, CorpusConfig, NgramTable, TrigramTable};
use crate::core::Result;
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::warn;

static BIGRAMS: OnceLock<BigramTable> = OnceLock::new();
static TRIGRAMS: OnceLock<TrigramTable> = OnceLock::new();

// Serialises builds so racing first callers read the corpus only once
static BUILD_LOCK: Mutex<()> = Mutex::new(());

/// The shared bigram table, loaded from [`CorpusConfig::from_env`]
///
/// # Errors
/// Returns `LetterError::CorpusUnavailable` or `LetterError::MalformedCorpus`
/// if the table has not been built yet and the corpus cannot be loaded.
pub fn get_bigram_freqs() -> Result<&'static BigramTable> {
    bigram_freqs_from(CorpusConfig::from_env().bigram_path())
}

/// The shared trigram table, loaded from [`CorpusConfig::from_env`]
///
/// # Errors
/// Returns `LetterError::CorpusUnavailable` or `LetterError::MalformedCorpus`
/// if the table has not been built yet and the corpus cannot be loaded.
pub fn get_trigram_freqs() -> Result<&'static TrigramTable> {
    trigram_freqs_from(CorpusConfig::from_env().trigram_path())
}

/// The shared bigram table, building it from `path` if not built yet
///
/// Once built, `path` is ignored and the cached table is returned.
///
/// # Errors
/// Same as [`get_bigram_freqs`].
pub fn bigram_freqs_from(path: impl AsRef<Path>) -> Result<&'static BigramTable> {
    cached(&BIGRAMS, path.as_ref())
}

/// The shared trigram table, building it from `path` if not built yet
///
/// # Errors
/// Same as [`get_trigram_freqs`].
pub fn trigram_freqs_from(path: impl AsRef<Path>) -> Result<&'static TrigramTable> {
    cached(&TRIGRAMS, path.as_ref())
}

/// The shared bigram table, or an all-unseen table if it cannot be built
#[must_use]
pub fn bigram_freqs_or_unseen(config: &CorpusConfig) -> &'static BigramTable {
    static FALLBACK: OnceLock<BigramTable> = OnceLock::new();

    bigram_freqs_from(config.bigram_path()).unwrap_or_else(|err| {
        warn!(error = %err, "scoring without bigram frequencies");
        FALLBACK.get_or_init(BigramTable::unseen)
    })
}

fn cached<const N: usize>(
    cell: &'static OnceLock<NgramTable<N>>,
    path: &Path,
) -> Result<&'static NgramTable<N>> {
    if let Some(table) = cell.get() {
        return Ok(table);
    }

    let _guard = BUILD_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(table) = cell.get() {
        return Ok(table);
    }

    let table = NgramTable::load(path)?;
    Ok(cell.get_or_init(|| table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterError;
    use std::io::Write;
    use std::thread;

    fn corpus(lines: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(lines.as_bytes()).unwrap();
        file
    }

    // One test owns the bigram cell so ordering between tests cannot matter
    #[test]
    fn bigram_cache_retries_then_sticks() {
        let missing = bigram_freqs_from("/nonexistent/letter_bigrams.txt");
        assert!(matches!(
            missing,
            Err(LetterError::CorpusUnavailable { .. })
        ));

        let file = corpus("th 100\n");
        let first = bigram_freqs_from(file.path()).unwrap();
        assert!(first.get(*b"th").abs() < f64::EPSILON);

        let other = corpus("he 100\n");
        let second = bigram_freqs_from(other.path()).unwrap();
        assert!(std::ptr::eq(first, second));

        let fallback = bigram_freqs_or_unseen(&CorpusConfig::new("/nonexistent"));
        assert!(std::ptr::eq(first, fallback));
    }

    #[test]
    fn trigram_cache_builds_once_under_contention() {
        let file = corpus("the 3\nand 1\n");
        let path = file.path().to_path_buf();

        let tables: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let path = &path;
                    scope.spawn(move || {
                        let table = trigram_freqs_from(path).unwrap();
                        std::ptr::from_ref(table) as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(tables.windows(2).all(|w| w[0] == w[1]));
        let table = trigram_freqs_from(&path).unwrap();
        assert!((table.get(*b"the") - 0.75f64.ln()).abs() < 1e-12);
    }
}

//! Location of the letter frequency corpus

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the corpus directory
pub const DATA_DIR_ENV: &str = "LETTERSET_DATA_DIR";

/// Corpus directory used when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the letter-pair counts
pub const BIGRAM_FILE: &str = "letter_bigrams.txt";

/// File name of the letter-triple counts
pub const TRIGRAM_FILE: &str = "letter_trigrams.txt";

/// Where to find the n-gram frequency files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    pub data_dir: PathBuf,
}

impl CorpusConfig {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Read the directory from `LETTERSET_DATA_DIR`, defaulting to `./data`
    #[must_use]
    pub fn from_env() -> Self {
        env::var_os(DATA_DIR_ENV).map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn bigram_path(&self) -> PathBuf {
        self.data_dir.join(BIGRAM_FILE)
    }

    #[must_use]
    pub fn trigram_path(&self) -> PathBuf {
        self.data_dir.join(TRIGRAM_FILE)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

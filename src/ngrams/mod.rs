//! Letter n-gram frequency model
//!
//! Bigram and trigram log-probability tables built from a plain-text
//! frequency corpus. The process-wide accessors build each table once and
//! hand out shared references; [`NgramTable`] can also be built directly for
//! tests or alternative corpora.

mod cache;
mod config;
mod table;

pub use cache::{
    bigram_freqs_from, bigram_freqs_or_unseen, get_bigram_freqs, get_trigram_freqs,
    trigram_freqs_from,
};
pub use config::{BIGRAM_FILE, CorpusConfig, DATA_DIR_ENV, DEFAULT_DATA_DIR, TRIGRAM_FILE};
pub use table::{BigramTable, NgramTable, TrigramTable, UNSEEN};

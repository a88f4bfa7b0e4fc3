//! Error taxonomy for the letter engine

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, LetterError>;

/// Every failure the library reports to its callers
#[derive(Debug, Error)]
pub enum LetterError {
    /// Proportions were requested for a multiset with no letters
    #[error("cannot compute letter proportions of an empty multiset")]
    EmptyInput,

    /// `part` was not a sub-multiset of `full`; carries the leftover alphagram
    #[error("letters were left over: {0}")]
    UnmatchedLetters(String),

    /// The n-gram frequency file could not be read
    #[error("frequency corpus {} is unavailable: {source}", path.display())]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The frequency file was readable but a line was not `<ngram> <count>`
    #[error("malformed frequency corpus at line {line}: {content:?}")]
    MalformedCorpus { line: usize, content: String },

    /// Text reached an operation that only accepts lowercase letters
    #[error("invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: &'static str },
}

impl LetterError {
    pub(crate) fn invalid(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason,
        }
    }
}

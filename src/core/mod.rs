//! Core domain types for letter-multiset work
//!
//! A [`Slug`] is the validated entry point to every multiset operation: text
//! already reduced to lowercase ASCII letters. [`LetterError`] covers every
//! failure the library reports.

mod error;
mod slug;

pub use error::{LetterError, Result};
pub use slug::{ALPHABET, Slug, letter_index};

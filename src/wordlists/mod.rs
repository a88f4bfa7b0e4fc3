//! Word lists for anagram lookup
//!
//! Loads plain-text word lists and indexes them by alphagram.

mod index;
pub mod loader;

pub use index::AlphagramIndex;

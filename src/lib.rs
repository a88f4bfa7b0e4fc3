//! Letterset
//!
//! Letter-multiset encodings and scoring for anagram and word-pattern puzzles:
//! alphagrams, the searchable alphabytes form, multiset differences with
//! wildcards, English-likeness heuristics, n-gram tables, and shift ciphers.
//!
//! # Quick Start
//!
//! ```rust
//! use letterset::core::Slug;
//! use letterset::letters::{alphagram, alphabytes, alphabytes_to_alphagram, diff_exact};
//!
//! let slug = Slug::from_text("Dirty room");
//! let alpha = alphagram(&slug);
//! assert_eq!(alpha.as_str(), "dimoorrty");
//!
//! // Alphabytes decode back to the same alphagram
//! let bytes = alphabytes(&slug);
//! assert_eq!(alphabytes_to_alphagram(bytes.as_bytes()).unwrap(), alpha);
//!
//! // What is left after taking "dormitory" out? Nothing.
//! let rest = diff_exact(&slug, &Slug::new("dormitory").unwrap()).unwrap();
//! assert!(rest.is_empty());
//! ```

// Core domain types
pub mod core;

// Letter-multiset primitives
pub mod letters;

// N-gram frequency tables
pub mod ngrams;

// Shift ciphers
pub mod cipher;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

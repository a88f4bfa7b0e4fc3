//! Command implementations

pub mod analyze;
pub mod compare;
pub mod shifts;

pub use analyze::{LetterReport, analyze_letters};
pub use compare::{CompareResult, compare_letters};
pub use shifts::{ShiftReport, ShiftRow, rank_shifts};

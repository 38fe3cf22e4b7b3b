//! High-score table kept next to the save records.

pub mod entry;
pub mod table;

pub use entry::ScoreEntry;
pub use table::{ScoreTable, MAX_ENTRIES};

/// File name of the high-score table inside the save directory.
pub const SCORES_FILE: &str = "scores.txt";

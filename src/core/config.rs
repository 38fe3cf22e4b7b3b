//! Board configuration.
//!
//! The rules themselves are fixed. What a caller can choose is how the
//! board is laid out on screen, whether Blue is played by the computer,
//! where save records live, and how the opponent's RNG is seeded.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default cell radius in layout units.
pub const DEFAULT_CELL_RADIUS: f32 = 35.0;

/// Default directory for save records.
pub const DEFAULT_SAVE_DIR: &str = "Saves";

/// Default save record extension.
pub const DEFAULT_RECORD_EXTENSION: &str = ".bin";

/// Configuration used when constructing or loading a `Board`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Circumscribed radius of one hexagonal cell.
    /// Only used for hit-testing.
    pub cell_radius: f32,

    /// Blue is played by the built-in opponent.
    pub vs_opponent: bool,

    /// Directory that holds save records.
    pub save_dir: PathBuf,

    /// Extension appended to record names that don't already carry it.
    pub record_extension: String,

    /// Seed for the opponent's RNG (`None` = seed from entropy).
    pub opponent_seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_radius: DEFAULT_CELL_RADIUS,
            vs_opponent: false,
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            record_extension: DEFAULT_RECORD_EXTENSION.to_string(),
            opponent_seed: None,
        }
    }
}

impl BoardConfig {
    /// Set the cell radius.
    #[must_use]
    pub fn with_cell_radius(mut self, radius: f32) -> Self {
        self.cell_radius = radius;
        self
    }

    /// Enable or disable the computer opponent.
    #[must_use]
    pub fn with_opponent(mut self, vs_opponent: bool) -> Self {
        self.vs_opponent = vs_opponent;
        self
    }

    /// Set the save directory.
    #[must_use]
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Set the record extension (including the leading dot).
    #[must_use]
    pub fn with_record_extension(mut self, extension: impl Into<String>) -> Self {
        self.record_extension = extension.into();
        self
    }

    /// Seed the opponent's RNG.
    #[must_use]
    pub fn with_opponent_seed(mut self, seed: u64) -> Self {
        self.opponent_seed = Some(seed);
        self
    }
}

//! The high-score table: at most five entries, best score first.
//!
//! Once full, a new entry only gets in by beating the lowest score, which
//! it then replaces.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::{HexError, Result};

use super::entry::ScoreEntry;

/// Maximum number of entries kept.
pub const MAX_ENTRIES: usize = 5;

/// High-score table, best score first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreTable {
    entries: Vec<ScoreEntry>,
}

impl ScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from file text. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| ScoreEntry::parse_line(line, index + 1))
            .collect::<Result<Vec<_>>>()?;
        sort_descending(&mut entries);
        entries.truncate(MAX_ENTRIES);
        Ok(Self { entries })
    }

    /// Load the table at `path`. A missing file is an empty table.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(err) => Err(HexError::Io(err)),
        }
    }

    /// Write the table to `path`, creating the parent directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_string())?;
        tracing::info!(path = %path.display(), entries = self.entries.len(), "saved high scores");
        Ok(())
    }

    /// Offer a new entry.
    ///
    /// While the table has room the entry is added. Once full, it replaces
    /// the lowest entry only if its score is strictly higher. Returns
    /// whether the entry was kept.
    pub fn submit(&mut self, entry: ScoreEntry) -> bool {
        if self.entries.len() < MAX_ENTRIES {
            self.entries.push(entry);
        } else {
            match self.entries.last_mut() {
                Some(lowest) if entry.score > lowest.score => *lowest = entry,
                _ => return false,
            }
        }
        sort_descending(&mut self.entries);
        true
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Stable, so equal scores keep their insertion order.
fn sort_descending(entries: &mut [ScoreEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

impl std::fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

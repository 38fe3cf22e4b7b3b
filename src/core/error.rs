//! Error type for record and score-file handling.
//!
//! Rule violations are not errors: an illegal move is ignored and simply
//! clears the selection. Errors only come from reading or writing files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the caller.
#[derive(Debug, Error)]
pub enum HexError {
    /// The requested record or score file does not exist.
    #[error("record not found: {}", path.display())]
    RecordNotFound { path: PathBuf },

    /// The record exists but cannot be decoded.
    ///
    /// `line` is 1-based; 0 means the problem is not tied to one line.
    #[error("corrupt record at line {line}: {reason}")]
    CorruptRecord { line: usize, reason: String },

    /// A record name was empty.
    #[error("record name must not be empty")]
    InvalidRecordName,

    /// Any other I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HexError {
    /// Shorthand for a `CorruptRecord` error.
    pub fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        HexError::CorruptRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = HexError::corrupt(3, "expected an integer");
        assert_eq!(err.to_string(), "corrupt record at line 3: expected an integer");

        let err = HexError::RecordNotFound {
            path: PathBuf::from("Saves/game.bin"),
        };
        assert_eq!(err.to_string(), "record not found: Saves/game.bin");
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: HexError = io.into();
        assert!(matches!(err, HexError::Io(_)));
    }
}

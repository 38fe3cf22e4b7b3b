//! Arena identities for cells and pieces.
//!
//! A `Board` owns two flat tables, one of cells and one of pieces. Every
//! reference between them is an index into one of those tables, so ids are
//! only meaningful for the board that allocated them.
//!
//! ## ID Layout
//!
//! - `CellId`: assigned during grid construction, `0..cell_count` in
//!   row-major order with holes skipped.
//! - `PieceId`: assigned in creation order. Starting pieces come first,
//!   every clone move appends one. Pieces are never removed.
//!
//! ```
//! use hexxagon::core::{CellId, PieceId};
//!
//! let cell = CellId(12);
//! assert_eq!(cell.index(), 12);
//! assert_eq!(format!("{}", PieceId(3)), "Piece(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Identity of a cell within one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub u16);

impl CellId {
    /// Position of this cell in the board's cell table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for CellId {
    fn from(index: usize) -> Self {
        Self(index as u16)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// Identity of a piece within one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    /// Position of this piece in the board's piece table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for PieceId {
    fn from(index: usize) -> Self {
        Self(index as u16)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        assert_eq!(CellId::from(57).index(), 57);
        assert_eq!(PieceId::from(0).index(), 0);
    }

    #[test]
    fn test_ordering_follows_raw_value() {
        let mut ids = vec![CellId(9), CellId(2), CellId(5)];
        ids.sort();
        assert_eq!(ids, vec![CellId(2), CellId(5), CellId(9)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CellId(42)), "Cell(42)");
        assert_eq!(format!("{}", PieceId(7)), "Piece(7)");
    }

    #[test]
    fn test_serialization() {
        let id = CellId(31);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CellId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

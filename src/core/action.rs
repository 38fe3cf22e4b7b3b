//! Move representation: a source cell, a target cell, and what happened.
//!
//! The kind of a move is never chosen by the player. It follows from
//! adjacency alone: a close-neighbor target clones, a distant-neighbor
//! target jumps, anything else is illegal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::entity::CellId;

/// Score credited for each captured enemy piece.
pub const CAPTURE_SCORE: u32 = 30;

/// A requested move from an occupied cell to an empty one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: CellId,
    pub target: CellId,
}

impl Move {
    #[must_use]
    pub const fn new(source: CellId, target: CellId) -> Self {
        Self { source, target }
    }
}

/// The two move classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Target is a close neighbor; a new piece appears, the source stays.
    Clone,
    /// Target is a distant neighbor; the source piece relocates.
    Jump,
}

impl MoveKind {
    /// Score credited for the move itself, before captures.
    ///
    /// ```
    /// use hexxagon::core::MoveKind;
    ///
    /// assert_eq!(MoveKind::Clone.base_score(), 10);
    /// assert_eq!(MoveKind::Jump.base_score(), 0);
    /// ```
    #[must_use]
    pub const fn base_score(self) -> u32 {
        match self {
            MoveKind::Clone => 10,
            MoveKind::Jump => 0,
        }
    }
}

/// Result of an executed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Color that moved.
    pub color: Color,
    pub kind: MoveKind,
    pub source: CellId,
    pub target: CellId,
    /// Cells whose pieces flipped to `color`. At most six.
    pub captured: SmallVec<[CellId; 6]>,
}

impl MoveOutcome {
    /// Total score credited to the mover for this move.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.kind.base_score() + CAPTURE_SCORE * self.captured.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_clone_with_two_captures_scores_seventy() {
        let outcome = MoveOutcome {
            color: Color::Red,
            kind: MoveKind::Clone,
            source: CellId(0),
            target: CellId(1),
            captured: smallvec![CellId(2), CellId(3)],
        };
        assert_eq!(outcome.score(), 70);
    }

    #[test]
    fn test_jump_without_captures_scores_nothing() {
        let outcome = MoveOutcome {
            color: Color::Blue,
            kind: MoveKind::Jump,
            source: CellId(0),
            target: CellId(9),
            captured: SmallVec::new(),
        };
        assert_eq!(outcome.score(), 0);
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(CellId(4), CellId(11));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}

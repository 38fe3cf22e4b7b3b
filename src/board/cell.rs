//! Board cells and their two neighbor relations.
//!
//! - **Close neighbors**: cells sharing an edge (first ring, at most 6).
//!   The relation is symmetric; the grid builder always wires both sides.
//! - **Distant neighbors**: cells adjacent to a close neighbor that are
//!   neither a close neighbor nor the cell itself (second ring, at most
//!   12). Derived once after the graph is complete.

use smallvec::SmallVec;

use crate::core::{CellId, PieceId};

/// One occupiable slot of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    row: usize,
    slot: usize,
    occupant: Option<PieceId>,
    selected: bool,
    close: SmallVec<[CellId; 6]>,
    distant: SmallVec<[CellId; 12]>,
}

impl Cell {
    pub(crate) fn new(id: CellId, row: usize, slot: usize) -> Self {
        Self {
            id,
            row,
            slot,
            occupant: None,
            selected: false,
            close: SmallVec::new(),
            distant: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Grid row (0..9).
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Slot within the row, counting holes.
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Piece currently on this cell.
    #[must_use]
    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[must_use]
    pub fn close_neighbors(&self) -> &[CellId] {
        &self.close
    }

    #[must_use]
    pub fn distant_neighbors(&self) -> &[CellId] {
        &self.distant
    }

    #[must_use]
    pub fn is_close_neighbor_of(&self, other: CellId) -> bool {
        self.close.contains(&other)
    }

    #[must_use]
    pub fn is_distant_neighbor_of(&self, other: CellId) -> bool {
        self.distant.contains(&other)
    }

    pub(crate) fn add_close(&mut self, other: CellId) {
        if other != self.id && !self.close.contains(&other) {
            self.close.push(other);
        }
    }

    pub(crate) fn set_distant(&mut self, distant: SmallVec<[CellId; 12]>) {
        self.distant = distant;
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<PieceId>) {
        self.occupant = occupant;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

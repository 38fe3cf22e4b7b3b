//! Pieces: an owner color and the cell they stand on.
//!
//! A piece is never destroyed. Jumps relocate it, captures recolor it.

use crate::core::{CellId, Color};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    cell: CellId,
}

impl Piece {
    pub(crate) fn new(color: Color, cell: CellId) -> Self {
        Self { color, cell }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn cell(&self) -> CellId {
        self.cell
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn set_cell(&mut self, cell: CellId) {
        self.cell = cell;
    }
}

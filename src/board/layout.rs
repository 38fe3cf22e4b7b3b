//! Screen layout and hit-testing.
//!
//! The rules never need coordinates. A UI only needs one capability from
//! the core: turn a pointer position into at most one cell. `HexLayout`
//! provides that through [`CellLocator`].
//!
//! Row `i` is indented by `|i - 4|` radii, slots advance by two radii
//! (holes keep their slot), and rows advance by `2 * R * sqrt(3)/2 + 2`.
//! A cell's hit area is its inscribed circle.

use super::grid::{Grid, MID_ROW, ROW_COUNT};
use crate::core::CellId;

const HALF_SQRT_3: f32 = 0.866_025_4;

/// Gap between rows.
const ROW_GAP: f32 = 2.0;

/// Resolve a pointer position to a cell.
pub trait CellLocator {
    /// The cell whose hit area contains `(x, y)`, if any.
    fn cell_at(&self, x: f32, y: f32) -> Option<CellId>;
}

/// Geometric placement of every cell.
#[derive(Clone, Debug)]
pub struct HexLayout {
    radius: f32,
    origin: (f32, f32),
    /// Row and slot of each cell, indexed by `CellId`.
    slots: Vec<(usize, usize)>,
}

impl HexLayout {
    /// Layout for `grid` with its top-left corner at the origin.
    #[must_use]
    pub fn new(radius: f32, grid: &Grid) -> Self {
        Self {
            radius,
            origin: (0.0, 0.0),
            slots: grid.cells().iter().map(|c| (c.row(), c.slot())).collect(),
        }
    }

    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Radius of the inscribed circle, the clickable area.
    #[must_use]
    pub fn inner_radius(&self) -> f32 {
        self.radius * HALF_SQRT_3
    }

    /// Width and height of the whole board.
    #[must_use]
    pub fn size(&self) -> f32 {
        ROW_COUNT as f32 * (self.inner_radius() * 2.0 + 4.0)
    }

    #[must_use]
    pub fn origin(&self) -> (f32, f32) {
        self.origin
    }

    /// Center the board on `(x, y)`.
    pub fn set_location(&mut self, x: f32, y: f32) {
        let half = self.size() / 2.0;
        self.origin = (x - half, y - half);
    }

    /// Top-left corner of a cell's bounding box.
    #[must_use]
    pub fn position(&self, cell: CellId) -> Option<(f32, f32)> {
        let &(row, slot) = self.slots.get(cell.index())?;
        let indent = row.abs_diff(MID_ROW) as f32 * self.radius;
        let x = self.origin.0 + indent + slot as f32 * self.radius * 2.0;
        let y = self.origin.1 + row as f32 * (self.inner_radius() * 2.0 + ROW_GAP);
        Some((x, y))
    }

    #[must_use]
    pub fn center(&self, cell: CellId) -> Option<(f32, f32)> {
        self.position(cell)
            .map(|(x, y)| (x + self.radius, y + self.radius))
    }
}

impl CellLocator for HexLayout {
    fn cell_at(&self, x: f32, y: f32) -> Option<CellId> {
        let reach = self.inner_radius();
        (0..self.slots.len()).map(CellId::from).find(|&cell| {
            self.center(cell)
                .map(|(cx, cy)| (x - cx).hypot(y - cy) <= reach)
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_hits_own_cell() {
        let grid = Grid::build();
        let layout = HexLayout::new(35.0, &grid);
        for cell in grid.cells() {
            let (x, y) = layout.center(cell.id()).unwrap();
            assert_eq!(layout.cell_at(x, y), Some(cell.id()));
        }
    }

    #[test]
    fn test_hole_center_hits_nothing() {
        let grid = Grid::build();
        let layout = HexLayout::new(35.0, &grid);
        // Slot 3 of the middle row is a hole; its neighbors sit two radii away.
        let left = grid.at(4, 2).unwrap();
        let (x, y) = layout.center(left).unwrap();
        assert_eq!(layout.cell_at(x + 70.0, y), None);
    }

    #[test]
    fn test_outside_board_hits_nothing() {
        let grid = Grid::build();
        let layout = HexLayout::new(35.0, &grid);
        assert_eq!(layout.cell_at(-100.0, -100.0), None);
    }

    #[test]
    fn test_set_location_shifts_cells() {
        let grid = Grid::build();
        let mut layout = HexLayout::new(35.0, &grid);
        let before = layout.center(CellId(0)).unwrap();

        layout.set_location(500.0, 400.0);
        let after = layout.center(CellId(0)).unwrap();
        let (ox, oy) = layout.origin();

        assert!((after.0 - before.0 - ox).abs() < 1e-3);
        assert!((after.1 - before.1 - oy).abs() < 1e-3);
        assert!((ox - (500.0 - layout.size() / 2.0)).abs() < 1e-3);
    }
}

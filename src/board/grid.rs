//! Grid construction: the 9-row hexagon and its cell graph.
//!
//! Row `i` has `9 - |i - 4|` slots (5, 6, 7, 8, 9, 8, 7, 6, 5). Three
//! slots around the center are holes and never become cells: row 3 slot
//! 4, row 4 slot 3 and row 5 slot 4. That leaves 58 cells.
//!
//! Adjacency comes from row/slot arithmetic alone. Each new cell is wired
//! to the slot diagonally above (above-left in the upper half, above-right
//! in the lower half), the slot straight above, and the slot to its left.
//! Together with the symmetric wiring this yields the full hex ring.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::cell::Cell;
use crate::core::{CellId, Color};

/// Number of rows.
pub const ROW_COUNT: usize = 9;

/// Index of the longest row.
pub const MID_ROW: usize = 4;

/// Number of slots, holes included.
pub const SLOT_COUNT: usize = 61;

/// Number of real cells.
pub const CELL_COUNT: usize = 58;

/// Hole positions as (row, slot).
pub const HOLES: [(usize, usize); 3] = [(3, 4), (4, 3), (5, 4)];

/// Number of slots in `row`.
///
/// ```
/// use hexxagon::board::grid::row_len;
///
/// let lens: Vec<_> = (0..9).map(row_len).collect();
/// assert_eq!(lens, vec![5, 6, 7, 8, 9, 8, 7, 6, 5]);
/// ```
#[must_use]
pub const fn row_len(row: usize) -> usize {
    ROW_COUNT - row.abs_diff(MID_ROW)
}

#[must_use]
pub fn is_hole(row: usize, slot: usize) -> bool {
    HOLES.contains(&(row, slot))
}

/// Starting pieces as (row, slot, color).
///
/// The two short rows get Blue on the left end and Red on the right end;
/// the long middle row is mirrored, Red left and Blue right.
#[must_use]
pub fn starting_pieces() -> SmallVec<[(usize, usize, Color); 6]> {
    let mut pieces = SmallVec::new();
    for row in 0..ROW_COUNT {
        let last = row_len(row) - 1;
        match row_len(row) {
            5 => {
                pieces.push((row, 0, Color::Blue));
                pieces.push((row, last, Color::Red));
            }
            9 => {
                pieces.push((row, 0, Color::Red));
                pieces.push((row, last, Color::Blue));
            }
            _ => {}
        }
    }
    pieces
}

/// The cell table plus the row/slot layout it was built from.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: Vec<Vec<Option<CellId>>>,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build the empty cell graph.
    #[must_use]
    pub fn build() -> Self {
        let mut rows: Vec<Vec<Option<CellId>>> = Vec::with_capacity(ROW_COUNT);
        let mut cells: Vec<Cell> = Vec::with_capacity(CELL_COUNT);

        for row in 0..ROW_COUNT {
            let mut current: Vec<Option<CellId>> = Vec::with_capacity(row_len(row));

            for slot in 0..row_len(row) {
                if is_hole(row, slot) {
                    current.push(None);
                    continue;
                }

                let id = CellId::from(cells.len());
                cells.push(Cell::new(id, row, slot));

                let mut neighbors: SmallVec<[CellId; 3]> = SmallVec::new();
                if row > 0 {
                    let above = &rows[row - 1];
                    let diagonal = if row <= MID_ROW {
                        slot.checked_sub(1)
                    } else {
                        Some(slot + 1)
                    };
                    if let Some(cell) = diagonal.and_then(|d| above.get(d).copied().flatten()) {
                        neighbors.push(cell);
                    }
                    if let Some(cell) = above.get(slot).copied().flatten() {
                        neighbors.push(cell);
                    }
                }
                if let Some(cell) = slot.checked_sub(1).and_then(|left| current[left]) {
                    neighbors.push(cell);
                }

                for neighbor in neighbors {
                    connect(&mut cells, id, neighbor);
                }
                current.push(Some(id));
            }

            rows.push(current);
        }

        for index in 0..cells.len() {
            let distant = second_ring(&cells, &cells[index]);
            cells[index].set_distant(distant);
        }

        Self { rows, cells }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Number of real cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at a row/slot position, `None` for holes and out of range.
    #[must_use]
    pub fn at(&self, row: usize, slot: usize) -> Option<CellId> {
        self.rows.get(row).and_then(|r| r.get(slot)).copied().flatten()
    }

    /// Row-major layout including holes.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<CellId>>] {
        &self.rows
    }

    /// Every slot in row-major order, holes as `None`.
    pub fn slots(&self) -> impl Iterator<Item = Option<CellId>> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }
}

fn connect(cells: &mut [Cell], a: CellId, b: CellId) {
    cells[a.index()].add_close(b);
    cells[b.index()].add_close(a);
}

fn second_ring(cells: &[Cell], cell: &Cell) -> SmallVec<[CellId; 12]> {
    let mut seen: FxHashSet<CellId> = FxHashSet::default();
    for &near in cell.close_neighbors() {
        for &far in cells[near.index()].close_neighbors() {
            if far != cell.id() && !cell.is_close_neighbor_of(far) {
                seen.insert(far);
            }
        }
    }
    let mut ring: SmallVec<[CellId; 12]> = seen.into_iter().collect();
    ring.sort_unstable();
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(grid: &Grid, row: usize, slot: usize) -> CellId {
        grid.at(row, slot).unwrap()
    }

    #[test]
    fn test_cell_and_slot_counts() {
        let grid = Grid::build();
        assert_eq!(grid.len(), CELL_COUNT);
        assert_eq!(grid.slots().count(), SLOT_COUNT);
        assert_eq!(grid.slots().filter(Option::is_none).count(), HOLES.len());
    }

    #[test]
    fn test_ids_follow_row_major_order() {
        let grid = Grid::build();
        let ids: Vec<_> = grid.slots().flatten().collect();
        let expected: Vec<_> = (0..CELL_COUNT).map(CellId::from).collect();
        assert_eq!(ids, expected);
        for cell in grid.cells() {
            assert_eq!(grid.at(cell.row(), cell.slot()), Some(cell.id()));
        }
    }

    #[test]
    fn test_holes_are_absent() {
        let grid = Grid::build();
        for (row, slot) in HOLES {
            assert!(grid.at(row, slot).is_none());
        }
    }

    #[test]
    fn test_close_relation_symmetric_and_irreflexive() {
        let grid = Grid::build();
        for cell in grid.cells() {
            assert!(!cell.is_close_neighbor_of(cell.id()));
            assert!(cell.close_neighbors().len() <= 6);
            for &n in cell.close_neighbors() {
                assert!(grid.cell(n).unwrap().is_close_neighbor_of(cell.id()));
            }
        }
    }

    #[test]
    fn test_distant_relation_disjoint_from_close() {
        let grid = Grid::build();
        for cell in grid.cells() {
            assert!(cell.distant_neighbors().len() <= 12);
            assert!(!cell.is_distant_neighbor_of(cell.id()));
            for &d in cell.distant_neighbors() {
                assert!(!cell.is_close_neighbor_of(d));
                assert!(grid.cell(d).unwrap().is_distant_neighbor_of(cell.id()));
            }
        }
    }

    #[test]
    fn test_corner_neighbors() {
        let grid = Grid::build();
        let corner = grid.cell(id(&grid, 0, 0)).unwrap();

        let mut close = corner.close_neighbors().to_vec();
        close.sort();
        assert_eq!(close, vec![id(&grid, 0, 1), id(&grid, 1, 0), id(&grid, 1, 1)]);

        assert_eq!(
            corner.distant_neighbors(),
            &[
                id(&grid, 0, 2),
                id(&grid, 1, 2),
                id(&grid, 2, 0),
                id(&grid, 2, 1),
                id(&grid, 2, 2),
            ]
        );
    }

    #[test]
    fn test_interior_cell_has_full_ring() {
        let grid = Grid::build();
        let cell = grid.cell(id(&grid, 2, 2)).unwrap();
        assert_eq!(cell.close_neighbors().len(), 6);
    }

    #[test]
    fn test_lower_half_wiring() {
        let grid = Grid::build();
        let cell = grid.cell(id(&grid, 6, 0)).unwrap();
        assert!(cell.is_close_neighbor_of(id(&grid, 5, 0)));
        assert!(cell.is_close_neighbor_of(id(&grid, 5, 1)));
        assert!(cell.is_close_neighbor_of(id(&grid, 7, 0)));
        assert!(cell.is_close_neighbor_of(id(&grid, 6, 1)));
        assert_eq!(cell.close_neighbors().len(), 4);
    }

    #[test]
    fn test_cells_beside_center_hole_are_not_adjacent() {
        let grid = Grid::build();
        let left = grid.cell(id(&grid, 4, 2)).unwrap();
        let right = id(&grid, 4, 4);
        assert!(!left.is_close_neighbor_of(right));
        assert!(!left.is_distant_neighbor_of(right));
    }

    #[test]
    fn test_starting_pieces() {
        let pieces = starting_pieces();
        assert_eq!(pieces.len(), 6);
        assert_eq!(pieces.iter().filter(|p| p.2 == Color::Red).count(), 3);
        assert!(pieces.contains(&(0, 0, Color::Blue)));
        assert!(pieces.contains(&(0, 4, Color::Red)));
        assert!(pieces.contains(&(4, 0, Color::Red)));
        assert!(pieces.contains(&(4, 8, Color::Blue)));
        assert!(pieces.contains(&(8, 0, Color::Blue)));
        assert!(pieces.contains(&(8, 4, Color::Red)));
    }
}

//! Live game status: points, scores, termination and duration.
//!
//! ## Points vs. score
//!
//! - **Points**: pieces of a color currently on the board. Recomputed from
//!   scratch after every move.
//! - **Score**: cumulative reward. +10 per clone, +30 per captured piece.
//!   Only ever incremented.
//!
//! ## Termination
//!
//! The game ends after a recompute if one color has no pieces, the board is
//! full, or either color has no legal target for any of its pieces. Once
//! finished the status never runs again.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::piece::Piece;
use crate::core::{ClockTime, Color, ColorMap, ElapsedTime};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

impl Outcome {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(self, color: Color) -> bool {
        self == Outcome::Winner(color)
    }
}

/// Running totals derived from the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStatus {
    points: ColorMap<u32>,
    score: ColorMap<u32>,
    running: bool,
    changed: bool,
    start: ClockTime,
    end: Option<ClockTime>,
}

impl GameStatus {
    /// Fresh status for a game starting at `start`.
    #[must_use]
    pub fn new(start: ClockTime) -> Self {
        Self {
            points: ColorMap::default(),
            score: ColorMap::default(),
            running: true,
            changed: false,
            start,
            end: None,
        }
    }

    /// Status restored from a save record.
    pub(crate) fn restored(points: ColorMap<u32>, score: ColorMap<u32>, start: ClockTime) -> Self {
        Self {
            points,
            score,
            ..Self::new(start)
        }
    }

    /// Pieces of `color` on the board.
    #[must_use]
    pub fn points(&self, color: Color) -> u32 {
        self.points[color]
    }

    #[must_use]
    pub fn red_points(&self) -> u32 {
        self.points[Color::Red]
    }

    #[must_use]
    pub fn blue_points(&self) -> u32 {
        self.points[Color::Blue]
    }

    /// Cumulative score of `color`.
    #[must_use]
    pub fn score(&self, color: Color) -> u32 {
        self.score[color]
    }

    #[must_use]
    pub fn red_score(&self) -> u32 {
        self.score[Color::Red]
    }

    #[must_use]
    pub fn blue_score(&self) -> u32 {
        self.score[Color::Blue]
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a recompute happened since the flag was last taken.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Read and reset the changed flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    #[must_use]
    pub fn start_time(&self) -> ClockTime {
        self.start
    }

    #[must_use]
    pub fn end_time(&self) -> Option<ClockTime> {
        self.end
    }

    /// Game duration, available once the game has finished.
    #[must_use]
    pub fn elapsed(&self) -> Option<ElapsedTime> {
        self.end.map(|end| end.since(self.start))
    }

    /// Winner by points, available once the game has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.running {
            return None;
        }
        let (red, blue) = (self.red_points(), self.blue_points());
        Some(match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Red),
            std::cmp::Ordering::Less => Outcome::Winner(Color::Blue),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    /// Scores saturate at `u32::MAX`.
    pub(crate) fn add_score(&mut self, color: Color, amount: u32) {
        self.score[color] = self.score[color].saturating_add(amount);
    }

    /// Recount points and check for the end of the game.
    pub(crate) fn recompute(&mut self, cells: &[Cell], pieces: &[Piece]) {
        self.recompute_with(cells, pieces, ClockTime::now);
    }

    pub(crate) fn recompute_with(
        &mut self,
        cells: &[Cell],
        pieces: &[Piece],
        now: impl FnOnce() -> ClockTime,
    ) {
        if !self.running {
            return;
        }

        let mut points: ColorMap<u32> = ColorMap::default();
        let mut can_move: ColorMap<bool> = ColorMap::default();

        for cell in cells {
            let Some(piece) = cell.occupant() else {
                continue;
            };
            let color = pieces[piece.index()].color();
            points[color] += 1;
            if !can_move[color] && has_free_target(cells, cell) {
                can_move[color] = true;
            }
        }

        self.points = points;
        self.changed = true;

        let (red, blue) = (points[Color::Red], points[Color::Blue]);
        let eliminated = red == 0 || blue == 0;
        let full = (red + blue) as usize >= cells.len();
        let stuck = !can_move[Color::Red] || !can_move[Color::Blue];

        if eliminated || full || stuck {
            let end = now();
            self.end = Some(end);
            self.running = false;
            tracing::info!(
                red_points = red,
                blue_points = blue,
                red_score = self.red_score(),
                blue_score = self.blue_score(),
                eliminated,
                full,
                stuck,
                "game finished"
            );
        }
    }
}

/// Whether `cell` has an empty close or distant neighbor.
pub(crate) fn has_free_target(cells: &[Cell], cell: &Cell) -> bool {
    cell.close_neighbors()
        .iter()
        .chain(cell.distant_neighbors())
        .any(|n| !cells[n.index()].is_occupied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::grid::Grid;
    use crate::core::{CellId, PieceId};

    fn t(h: u32, m: u32, s: u32) -> ClockTime {
        ClockTime::new(h, m, s).unwrap()
    }

    /// Place pieces on an empty grid.
    fn setup(placements: &[(CellId, Color)]) -> (Vec<Cell>, Vec<Piece>) {
        let mut cells = Grid::build().cells().to_vec();
        let mut pieces = Vec::new();
        for &(cell, color) in placements {
            cells[cell.index()].set_occupant(Some(PieceId::from(pieces.len())));
            pieces.push(Piece::new(color, cell));
        }
        (cells, pieces)
    }

    #[test]
    fn test_counts_points() {
        let (cells, pieces) = setup(&[
            (CellId(0), Color::Red),
            (CellId(20), Color::Red),
            (CellId(40), Color::Blue),
        ]);
        let mut status = GameStatus::new(t(10, 0, 0));
        status.recompute_with(&cells, &pieces, || t(10, 5, 0));

        assert_eq!(status.red_points(), 2);
        assert_eq!(status.blue_points(), 1);
        assert!(status.is_running());
        assert!(status.is_changed());
        assert_eq!(status.outcome(), None);
        assert_eq!(status.elapsed(), None);
    }

    #[test]
    fn test_elimination_finishes_game() {
        let (cells, pieces) = setup(&[(CellId(0), Color::Red)]);
        let mut status = GameStatus::new(t(10, 0, 0));
        status.recompute_with(&cells, &pieces, || t(10, 2, 30));

        assert!(!status.is_running());
        assert_eq!(status.outcome(), Some(Outcome::Winner(Color::Red)));
        assert_eq!(status.elapsed().unwrap().to_string(), "00:02:30");
    }

    #[test]
    fn test_full_board_finishes_game() {
        let placements: Vec<_> = (0..58)
            .map(|i| (CellId(i), if i % 2 == 0 { Color::Red } else { Color::Blue }))
            .collect();
        let (cells, pieces) = setup(&placements);
        let mut status = GameStatus::new(t(9, 0, 0));
        status.recompute_with(&cells, &pieces, || t(9, 30, 0));

        assert!(!status.is_running());
        assert_eq!(status.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_blocked_color_finishes_game() {
        // Fill everything within reach of the Blue corner with Red.
        let grid = Grid::build();
        let corner = grid.cell(CellId(0)).unwrap();
        let mut placements = vec![(CellId(0), Color::Blue)];
        for &n in corner.close_neighbors().iter().chain(corner.distant_neighbors()) {
            placements.push((n, Color::Red));
        }
        let (cells, pieces) = setup(&placements);
        let mut status = GameStatus::new(t(9, 0, 0));
        status.recompute_with(&cells, &pieces, || t(9, 0, 1));

        assert!(!status.is_running());
        assert_eq!(status.outcome(), Some(Outcome::Winner(Color::Red)));
    }

    #[test]
    fn test_finished_status_is_frozen() {
        let (cells, pieces) = setup(&[(CellId(0), Color::Blue)]);
        let mut status = GameStatus::new(t(9, 0, 0));
        status.recompute_with(&cells, &pieces, || t(9, 1, 0));
        assert!(status.take_changed());

        let (cells, pieces) = setup(&[(CellId(0), Color::Blue), (CellId(30), Color::Red)]);
        status.recompute_with(&cells, &pieces, || t(9, 2, 0));

        assert!(!status.is_running());
        assert!(!status.is_changed());
        assert_eq!(status.red_points(), 0);
        assert_eq!(status.end_time(), Some(t(9, 1, 0)));
    }

    #[test]
    fn test_take_changed_resets() {
        let (cells, pieces) = setup(&[(CellId(0), Color::Red), (CellId(40), Color::Blue)]);
        let mut status = GameStatus::new(t(9, 0, 0));
        status.recompute_with(&cells, &pieces, || t(9, 0, 0));

        assert!(status.take_changed());
        assert!(!status.take_changed());
    }

    #[test]
    fn test_scores_accumulate() {
        let mut status = GameStatus::new(t(9, 0, 0));
        status.add_score(Color::Red, 10);
        status.add_score(Color::Red, 60);
        status.add_score(Color::Blue, 30);
        assert_eq!(status.red_score(), 70);
        assert_eq!(status.blue_score(), 30);
    }

    #[test]
    fn test_scores_saturate() {
        let mut status = GameStatus::new(t(9, 0, 0));
        status.add_score(Color::Blue, u32::MAX - 5);
        status.add_score(Color::Blue, 30);
        assert_eq!(status.blue_score(), u32::MAX);
    }
}

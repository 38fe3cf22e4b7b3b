//! Greedy single-ply opponent.
//!
//! Candidate moves are scored by how many enemy pieces touch the target,
//! i.e. how many the move would capture. The search runs in three phases
//! and stops as soon as a move captures `MAX_CAPTURES`:
//!
//! 1. Clones from border pieces (pieces with an empty close neighbor).
//! 2. Jumps from border pieces, only if they capture more than one.
//! 3. Jumps from non-border pieces, same condition.
//!
//! A candidate replaces the current best only with a strictly higher
//! count, so ties keep the first one found in cell order. If nothing was
//! accepted, a random border piece clones to its first free close
//! neighbor.

use crate::board::{Board, Cell};
use crate::core::{CellId, Color, GameRng, Move};

use super::OpponentPolicy;

/// Capture count that ends the search immediately.
pub const MAX_CAPTURES: usize = 5;

/// Minimum captures for a jump to be considered.
const MIN_JUMP_CAPTURES: usize = 2;

#[derive(Clone, Copy, Debug)]
struct Candidate {
    source: CellId,
    target: CellId,
    captures: usize,
}

/// The built-in opponent.
#[derive(Clone, Debug)]
pub struct GreedyOpponent {
    rng: GameRng,
}

impl GreedyOpponent {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Default for GreedyOpponent {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl OpponentPolicy for GreedyOpponent {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let enemy = color.opponent();
        let (border, inner): (Vec<CellId>, Vec<CellId>) = board
            .cells_of(color)
            .map(Cell::id)
            .filter(|&cell| board.can_move(cell))
            .partition(|&cell| board.is_border(cell));

        let mut best: Option<Candidate> = None;
        let clone_targets = |cell: CellId| board.free_close_neighbors(cell);
        let jump_targets = |cell: CellId| board.free_distant_neighbors(cell);

        let finished = scan(board, enemy, &border, clone_targets, 1, &mut best)
            || scan(board, enemy, &border, jump_targets, MIN_JUMP_CAPTURES, &mut best)
            || scan(board, enemy, &inner, jump_targets, MIN_JUMP_CAPTURES, &mut best);

        if let Some(found) = best {
            tracing::debug!(
                source = %found.source,
                target = %found.target,
                captures = found.captures,
                finished,
                "opponent picked capturing move"
            );
            return Some(Move::new(found.source, found.target));
        }

        let &source = self.rng.choose(&border)?;
        let target = board
            .free_close_neighbors(source)
            .first()
            .copied()
            .or_else(|| board.free_distant_neighbors(source).first().copied())?;
        tracing::debug!(%source, %target, "opponent fell back to random border piece");
        Some(Move::new(source, target))
    }
}

/// Evaluate every (source, target) pair, keeping the best in `best`.
///
/// Returns true once a candidate with `MAX_CAPTURES` has been accepted.
fn scan(
    board: &Board,
    enemy: Color,
    sources: &[CellId],
    targets: impl Fn(CellId) -> Vec<CellId>,
    min_captures: usize,
    best: &mut Option<Candidate>,
) -> bool {
    for &source in sources {
        for target in targets(source) {
            let captures = board.adjacent_count(target, enemy);
            let current = best.map_or(0, |b| b.captures);
            if captures >= min_captures && captures > current {
                *best = Some(Candidate {
                    source,
                    target,
                    captures,
                });
                if captures >= MAX_CAPTURES {
                    return true;
                }
            }
        }
    }
    false
}

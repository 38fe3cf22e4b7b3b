//! Computer opponents.
//!
//! An opponent is a read-only consumer of the board: it inspects the
//! position and proposes one move. The board executes the proposal through
//! its normal move path, so an opponent can never bypass the rules.

pub mod greedy;

pub use greedy::{GreedyOpponent, MAX_CAPTURES};

use crate::board::Board;
use crate::core::{Color, Move};

/// Policy that picks a move for one color.
pub trait OpponentPolicy: Send {
    /// Propose a move for `color`, or `None` if it has nothing to play.
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move>;
}

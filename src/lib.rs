//! # hexxagon
//!
//! Rules engine for Hexxagon, a two-player territory game on a hexagonal
//! board of 58 cells.
//!
//! ## Rules in brief
//!
//! Red moves first. A move takes one of your pieces to an empty cell:
//!
//! - **Clone** to a close neighbor (distance 1): a new piece appears on the
//!   target, the source stays. Worth 10.
//! - **Jump** to a distant neighbor (distance 2): the piece moves. Worth 0.
//!
//! Either way every enemy piece touching the target flips to your color,
//! 30 each. The game ends when one side is eliminated, the board is full,
//! or no piece of either color can move.
//!
//! ## Architecture
//!
//! - **Arena graph**: the `Grid` owns all cells in a `Vec`; neighbors are
//!   `CellId` indices. Pieces live in a second arena and reference their
//!   cell by id, so nothing holds pointers into the board.
//!
//! - **Owned opponent**: the computer player is an `OpponentPolicy` owned by
//!   the board. It only reads the board and proposes a `Move`, which goes
//!   through the same rule checks as human input.
//!
//! ## Modules
//!
//! - `core`: ids, colors, moves, RNG, configuration, clock, errors
//! - `board`: grid wiring, cells, pieces, game status and the `Board`
//! - `record`: save record text format and file I/O
//! - `opponent`: the greedy computer opponent
//! - `scores`: the high-score table

pub mod core;
pub mod board;
pub mod record;
pub mod opponent;
pub mod scores;

// Re-export commonly used types
pub use crate::core::{
    CellId, PieceId,
    Color, ColorMap,
    GameRng, BoardConfig,
    Move, MoveKind, MoveOutcome, CAPTURE_SCORE,
    ClockTime, ElapsedTime,
    HexError, Result,
};

pub use crate::board::{Board, Cell, CellLocator, GameStatus, Grid, HexLayout, Outcome, Piece};

pub use crate::record::{Record, SlotStatus};

pub use crate::opponent::{GreedyOpponent, OpponentPolicy};

pub use crate::scores::{ScoreEntry, ScoreTable};

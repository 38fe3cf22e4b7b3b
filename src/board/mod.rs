//! Board: cell graph, pieces, rules and live status.
//!
//! - `grid`: row/slot layout, holes and neighbor wiring
//! - `cell`, `piece`: the two arena tables
//! - `layout`: pointer hit-testing
//! - `status`: points, scores and end-of-game detection
//! - `game`: the `Board` that owns all of the above and executes moves

pub mod cell;
pub mod piece;
pub mod grid;
pub mod layout;
pub mod status;
pub mod game;

pub use cell::Cell;
pub use piece::Piece;
pub use grid::Grid;
pub use layout::{CellLocator, HexLayout};
pub use status::{GameStatus, Outcome};
pub use game::Board;

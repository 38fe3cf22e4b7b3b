//! Core types: identities, colors, moves, RNG, configuration, time, errors.
//!
//! Everything here is independent of the board's geometry. The `board`
//! module builds on these types.

pub mod entity;
pub mod color;
pub mod rng;
pub mod config;
pub mod action;
pub mod clock;
pub mod error;

pub use entity::{CellId, PieceId};
pub use color::{Color, ColorMap};
pub use rng::GameRng;
pub use config::BoardConfig;
pub use action::{Move, MoveKind, MoveOutcome, CAPTURE_SCORE};
pub use clock::{ClockTime, ElapsedTime};
pub use error::{HexError, Result};

//! Shared helpers for building arbitrary positions.

#![allow(dead_code)]

use hexxagon::board::grid::{row_len, SLOT_COUNT};
use hexxagon::core::{BoardConfig, CellId, ClockTime, Color, ColorMap};
use hexxagon::record::{Record, SlotStatus};
use hexxagon::Board;

/// Record offset of a row/slot position.
pub fn offset(row: usize, slot: usize) -> usize {
    (0..row).map(row_len).sum::<usize>() + slot
}

/// Record holding exactly the given pieces.
pub fn record(red: &[(usize, usize)], blue: &[(usize, usize)], active: Color, vs_opponent: bool) -> Record {
    let mut slots = vec![SlotStatus::EMPTY; SLOT_COUNT];
    for &(row, slot) in red {
        slots[offset(row, slot)] = SlotStatus::occupied(Color::Red, false);
    }
    for &(row, slot) in blue {
        slots[offset(row, slot)] = SlotStatus::occupied(Color::Blue, false);
    }
    Record {
        points: ColorMap::new(red.len() as u32, blue.len() as u32),
        score: ColorMap::default(),
        start: ClockTime::new(12, 0, 0).unwrap(),
        active,
        vs_opponent,
        slots,
    }
}

/// Board restored from `record(...)` with a fixed opponent seed.
pub fn position(red: &[(usize, usize)], blue: &[(usize, usize)], active: Color, vs_opponent: bool) -> Board {
    let record = record(red, blue, active, vs_opponent);
    Board::from_record(BoardConfig::default().with_opponent_seed(7), &record).unwrap()
}

pub fn at(board: &Board, row: usize, slot: usize) -> CellId {
    board.cell_at_slot(row, slot).unwrap()
}

/// Fresh save directory under the system temp dir, unique per test.
pub fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("hexxagon-it-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

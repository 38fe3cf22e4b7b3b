//! Text encoding of a saved game.
//!
//! ## Format
//!
//! One decimal integer per line. Nine header lines:
//!
//! | line | field |
//! |------|-------|
//! | 1 | red points |
//! | 2 | blue points |
//! | 3 | red score |
//! | 4 | blue score |
//! | 5 | start second |
//! | 6 | start minute |
//! | 7 | start hour |
//! | 8 | active player (0 = Red, 1 = Blue) |
//! | 9 | vs-opponent flag (0/1) |
//!
//! Then one status line per grid slot (61, holes included) in row-major
//! order. A status is a 3-bit field: bit 2 = occupied, bit 1 = Blue,
//! bit 0 = selected. Empty slots and holes are 0.
//!
//! Decoding is strict: a short, long, non-numeric or out-of-range record is
//! a `CorruptRecord` error naming the offending line.

use serde::{Deserialize, Serialize};

use crate::board::grid::SLOT_COUNT;
use crate::core::{ClockTime, Color, ColorMap, HexError, Result};

/// Number of header lines before the slot statuses.
pub const HEADER_LINES: usize = 9;

/// Total number of lines in a record.
pub const RECORD_LINES: usize = HEADER_LINES + SLOT_COUNT;

/// Status bits of one grid slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotStatus(u8);

impl SlotStatus {
    const OCCUPIED: u8 = 0b100;
    const BLUE: u8 = 0b010;
    const SELECTED: u8 = 0b001;

    /// An empty slot or a hole.
    pub const EMPTY: SlotStatus = SlotStatus(0);

    /// An occupied slot.
    ///
    /// ```
    /// use hexxagon::core::Color;
    /// use hexxagon::record::SlotStatus;
    ///
    /// assert_eq!(SlotStatus::occupied(Color::Red, false).bits(), 0b100);
    /// assert_eq!(SlotStatus::occupied(Color::Blue, true).bits(), 0b111);
    /// ```
    #[must_use]
    pub const fn occupied(color: Color, selected: bool) -> Self {
        let mut bits = Self::OCCUPIED;
        if matches!(color, Color::Blue) {
            bits |= Self::BLUE;
        }
        if selected {
            bits |= Self::SELECTED;
        }
        Self(bits)
    }

    /// Parse raw bits. Color or selection bits without the occupied bit,
    /// or anything above 3 bits, are rejected.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits > 0b111 || (bits != 0 && bits & Self::OCCUPIED as u32 == 0) {
            None
        } else {
            Some(Self(bits as u8))
        }
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Color of the piece on this slot, `None` if empty.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        if self.0 & Self::OCCUPIED == 0 {
            None
        } else if self.0 & Self::BLUE != 0 {
            Some(Color::Blue)
        } else {
            Some(Color::Red)
        }
    }

    #[must_use]
    pub const fn is_selected(self) -> bool {
        self.0 & Self::SELECTED != 0
    }
}

/// A decoded save record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub points: ColorMap<u32>,
    pub score: ColorMap<u32>,
    pub start: ClockTime,
    pub active: Color,
    pub vs_opponent: bool,
    /// One status per grid slot, holes included.
    pub slots: Vec<SlotStatus>,
}

/// Render a record as text.
#[must_use]
pub fn encode(record: &Record) -> String {
    let header = [
        record.points[Color::Red],
        record.points[Color::Blue],
        record.score[Color::Red],
        record.score[Color::Blue],
        record.start.second,
        record.start.minute,
        record.start.hour,
        record.active.index() as u32,
        u32::from(record.vs_opponent),
    ];

    let mut out = String::with_capacity(RECORD_LINES * 3);
    for value in header {
        out.push_str(&value.to_string());
        out.push('\n');
    }
    for slot in &record.slots {
        out.push_str(&slot.bits().to_string());
        out.push('\n');
    }
    out
}

/// Parse a record from text.
pub fn decode(text: &str) -> Result<Record> {
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    while lines.last() == Some(&"") {
        lines.pop();
    }

    if lines.len() < RECORD_LINES {
        return Err(HexError::corrupt(
            lines.len() + 1,
            format!("record ends after {} of {RECORD_LINES} lines", lines.len()),
        ));
    }
    if lines.len() > RECORD_LINES {
        return Err(HexError::corrupt(
            RECORD_LINES + 1,
            format!("unexpected data after {RECORD_LINES} lines"),
        ));
    }

    let values = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            line.parse::<u32>().map_err(|_| {
                HexError::corrupt(index + 1, format!("expected a non-negative integer, found {line:?}"))
            })
        })
        .collect::<Result<Vec<u32>>>()?;

    let start = ClockTime::new(values[6], values[5], values[4])
        .ok_or_else(|| HexError::corrupt(5, "start time out of range"))?;
    let active = Color::from_index(values[7] as usize)
        .ok_or_else(|| HexError::corrupt(8, format!("player index {} is not 0 or 1", values[7])))?;
    let vs_opponent = match values[8] {
        0 => false,
        1 => true,
        other => {
            return Err(HexError::corrupt(9, format!("opponent flag {other} is not 0 or 1")));
        }
    };

    let slots = values[HEADER_LINES..]
        .iter()
        .enumerate()
        .map(|(index, &bits)| {
            SlotStatus::from_bits(bits).ok_or_else(|| {
                HexError::corrupt(HEADER_LINES + index + 1, format!("invalid slot status {bits}"))
            })
        })
        .collect::<Result<Vec<SlotStatus>>>()?;

    Ok(Record {
        points: ColorMap::new(values[0], values[1]),
        score: ColorMap::new(values[2], values[3]),
        start,
        active,
        vs_opponent,
        slots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        let mut slots = vec![SlotStatus::EMPTY; SLOT_COUNT];
        slots[0] = SlotStatus::occupied(Color::Blue, false);
        slots[4] = SlotStatus::occupied(Color::Red, true);
        Record {
            points: ColorMap::new(1, 1),
            score: ColorMap::new(70, 30),
            start: ClockTime::new(14, 5, 9).unwrap(),
            active: Color::Blue,
            vs_opponent: true,
            slots,
        }
    }

    #[test]
    fn test_header_layout() {
        let text = encode(&sample());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), RECORD_LINES);
        assert_eq!(&lines[..HEADER_LINES], &["1", "1", "70", "30", "9", "5", "14", "1", "1"]);
        assert_eq!(lines[HEADER_LINES], "6");
        assert_eq!(lines[HEADER_LINES + 4], "5");
        assert_eq!(lines[HEADER_LINES + 1], "0");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let record = sample();
        assert_eq!(decode(&encode(&record)).unwrap(), record);
    }

    #[test]
    fn test_decode_tolerates_crlf_and_trailing_blank_lines() {
        let text = encode(&sample()).replace('\n', "\r\n") + "\r\n\r\n";
        assert_eq!(decode(&text).unwrap(), sample());
    }

    #[test]
    fn test_truncated_record() {
        let text = encode(&sample());
        let short: String = text.lines().take(20).map(|l| format!("{l}\n")).collect();
        let err = decode(&short).unwrap_err();
        assert!(matches!(err, HexError::CorruptRecord { line: 21, .. }));
    }

    #[test]
    fn test_empty_record() {
        let err = decode("").unwrap_err();
        assert!(matches!(err, HexError::CorruptRecord { line: 1, .. }));
    }

    #[test]
    fn test_overlong_record() {
        let text = encode(&sample()) + "0\n";
        let err = decode(&text).unwrap_err();
        assert!(matches!(err, HexError::CorruptRecord { line, .. } if line == RECORD_LINES + 1));
    }

    #[test]
    fn test_non_numeric_line() {
        let text = encode(&sample()).replacen("70", "seventy", 1);
        let err = decode(&text).unwrap_err();
        assert!(matches!(err, HexError::CorruptRecord { line: 3, .. }));
    }

    #[test]
    fn test_negative_value() {
        let text = encode(&sample()).replacen("70", "-70", 1);
        assert!(decode(&text).is_err());
    }

    #[test]
    fn test_invalid_player_index() {
        let mut lines: Vec<String> = encode(&sample()).lines().map(String::from).collect();
        lines[7] = "2".into();
        let err = decode(&lines.join("\n")).unwrap_err();
        assert!(matches!(err, HexError::CorruptRecord { line: 8, .. }));
    }

    #[test]
    fn test_invalid_clock() {
        let mut lines: Vec<String> = encode(&sample()).lines().map(String::from).collect();
        lines[6] = "25".into();
        let err = decode(&lines.join("\n")).unwrap_err();
        assert!(matches!(err, HexError::CorruptRecord { line: 5, .. }));
    }

    #[test]
    fn test_invalid_slot_status() {
        let mut lines: Vec<String> = encode(&sample()).lines().map(String::from).collect();
        lines[HEADER_LINES + 2] = "3".into();
        let err = decode(&lines.join("\n")).unwrap_err();
        assert!(matches!(err, HexError::CorruptRecord { line, .. } if line == HEADER_LINES + 3));
    }

    #[test]
    fn test_slot_status_bits() {
        assert_eq!(SlotStatus::from_bits(0), Some(SlotStatus::EMPTY));
        assert_eq!(SlotStatus::from_bits(0b010), None);
        assert_eq!(SlotStatus::from_bits(0b001), None);
        assert_eq!(SlotStatus::from_bits(8), None);

        let status = SlotStatus::from_bits(0b110).unwrap();
        assert_eq!(status.color(), Some(Color::Blue));
        assert!(!status.is_selected());
        assert_eq!(SlotStatus::EMPTY.color(), None);
    }
}

//! One high-score line.
//!
//! Stored as `nickname_score;points|time`, e.g. `Red_120;31|00:12:05`.
//! Negative score or points read back as 0.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::GameStatus;
use crate::core::{Color, HexError};

/// Elapsed-time text used when a status has no end time yet.
const NO_TIME: &str = "00:00:00";

/// One line of the high-score file: `nickname_score;points|time`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub nickname: String,
    pub score: u32,
    pub points: u32,
    pub time: String,
}

impl ScoreEntry {
    #[must_use]
    pub fn new(nickname: impl Into<String>, score: u32, points: u32, time: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            score,
            points,
            time: time.into(),
        }
    }

    /// Entry for the side that won `status`.
    ///
    /// Red is credited only with strictly more points; a draw goes to Blue.
    #[must_use]
    pub fn from_status(status: &GameStatus) -> Self {
        let color = if status.red_points() > status.blue_points() {
            Color::Red
        } else {
            Color::Blue
        };
        let time = status
            .elapsed()
            .map_or_else(|| NO_TIME.to_string(), |elapsed| elapsed.to_string());
        Self::new(color.name(), status.score(color), status.points(color), time)
    }

    /// Parse one line, reporting errors against `line`.
    pub fn parse_line(text: &str, line: usize) -> Result<Self, HexError> {
        let text = text.trim();
        let (nickname, rest) = text
            .split_once('_')
            .ok_or_else(|| HexError::corrupt(line, "missing '_' after nickname"))?;
        let (score, rest) = rest
            .split_once(';')
            .ok_or_else(|| HexError::corrupt(line, "missing ';' after score"))?;
        let (points, time) = rest
            .split_once('|')
            .ok_or_else(|| HexError::corrupt(line, "missing '|' after points"))?;

        Ok(Self::new(
            nickname,
            clamped(score, line)?,
            clamped(points, line)?,
            time.split_whitespace().next().unwrap_or_default(),
        ))
    }
}

/// Parse a signed integer, clamping negatives to zero.
fn clamped(text: &str, line: usize) -> Result<u32, HexError> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| HexError::corrupt(line, format!("expected an integer, found {text:?}")))?;
    Ok(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
}

impl FromStr for ScoreEntry {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s, 0)
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{};{}|{}", self.nickname, self.score, self.points, self.time)
    }
}

//! Wall-clock time of day and elapsed game time.
//!
//! Game duration is measured between two local times of day, the same
//! fields the save record stores. Subtraction borrows component-wise:
//! seconds borrow from minutes, minutes borrow from hours, and a negative
//! hour difference (the game crossed midnight) wraps by 24.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// A local time of day with second resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    /// Create a time of day. Returns `None` if any field is out of range.
    #[must_use]
    pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        // 60 allows a leap second.
        if hour < 24 && minute < 60 && second <= 60 {
            Some(Self { hour, minute, second })
        } else {
            None
        }
    }

    /// Current local time of day.
    #[must_use]
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }

    /// Time elapsed from `start` until `self`.
    ///
    /// ```
    /// use hexxagon::core::ClockTime;
    ///
    /// let start = ClockTime::new(10, 59, 50).unwrap();
    /// let end = ClockTime::new(11, 0, 5).unwrap();
    /// assert_eq!(end.since(start).to_string(), "00:00:15");
    /// ```
    #[must_use]
    pub fn since(self, start: ClockTime) -> ElapsedTime {
        let mut hours = self.hour as i32 - start.hour as i32;
        let mut minutes = self.minute as i32 - start.minute as i32;
        let mut seconds = self.second as i32 - start.second as i32;

        if seconds < 0 {
            minutes -= 1;
            seconds += 60;
        }
        if minutes < 0 {
            hours -= 1;
            minutes += 60;
        }
        if hours < 0 {
            hours += 24;
        }

        ElapsedTime {
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
        }
    }
}

/// Duration of a finished game, rendered as `HH:MM:SS`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElapsedTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl std::fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

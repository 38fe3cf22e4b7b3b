//! Piece colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of the game. Red always moves first and maps to player
//! index 0; Blue maps to player index 1.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for points and scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Owner color of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// Both colors in turn order.
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Player index used by the save record (Red = 0, Blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }

    /// Inverse of [`Color::index`].
    ///
    /// ```
    /// use hexxagon::core::Color;
    ///
    /// assert_eq!(Color::from_index(1), Some(Color::Blue));
    /// assert_eq!(Color::from_index(2), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Color::Red),
            1 => Some(Color::Blue),
            _ => None,
        }
    }

    /// Display name used in score records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per color with O(1) access.
///
/// ```
/// use hexxagon::core::{Color, ColorMap};
///
/// let mut score: ColorMap<i32> = ColorMap::default();
/// score[Color::Blue] += 30;
/// assert_eq!(score[Color::Red], 0);
/// assert_eq!(score[Color::Blue], 30);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map from explicit red and blue values.
    pub const fn new(red: T, blue: T) -> Self {
        Self { data: [red, blue] }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Red), factory(Color::Blue)],
        }
    }

    /// Iterate over (Color, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}

//! Sticker colors.

use crate::Face;

/// Sticker color, standard Western color scheme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// Up face color.
    White,
    /// Down face color.
    Yellow,
    /// Front face color.
    Green,
    /// Back face color.
    Blue,
    /// Right face color.
    Red,
    /// Left face color.
    Orange,
}
impl Color {
    /// Returns the name of the color.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Orange => "Orange",
        }
    }
    /// Returns a one-letter abbreviation of the color.
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

impl Face {
    /// Returns the color of this face's stickers in the solved state.
    pub fn solved_color(self) -> Color {
        match self {
            Face::R => Color::Red,
            Face::L => Color::Orange,
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::F => Color::Green,
            Face::B => Color::Blue,
        }
    }
}

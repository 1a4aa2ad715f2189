//! Pieces and their sticker assignments.

use std::ops::{Index, IndexMut};

use cgmath::Vector3;
use strum::IntoEnumIterator;

use crate::{Color, Face};

/// Stable identifier of a piece. Indexes into [`crate::Cube`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece(pub u8);

/// Per-direction sticker color assignment of one piece.
///
/// A direction holds `None` when that side of the piece faces the interior
/// of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stickers([Option<Color>; 6]);
impl Index<Face> for Stickers {
    type Output = Option<Color>;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face as usize]
    }
}
impl IndexMut<Face> for Stickers {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face as usize]
    }
}
impl Stickers {
    /// Returns the sticker assignment of a piece at `home` in the solved
    /// state: a face direction is colored iff the piece sits on that side
    /// of the cube.
    pub(crate) fn new_solved(home: Vector3<i32>) -> Self {
        let mut ret = Self([None; 6]);
        for face in Face::iter() {
            if home[face.axis() as usize] == face.sign().int() {
                ret[face] = Some(face.solved_color());
            }
        }
        ret
    }

    /// Returns the number of colored directions (3 for a corner, 2 for an
    /// edge, 1 for a face center).
    pub fn count(&self) -> usize {
        self.0.iter().filter(|s| s.is_some()).count()
    }
    /// Iterates over the colored directions.
    pub fn iter(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        Face::iter().filter_map(|face| Some((face, self[face]?)))
    }
}

/// State of one movable piece.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PieceState {
    /// Lattice position in the solved state. Immutable.
    home: Vector3<i32>,
    /// Current lattice position; each component is in {-1, 0, 1}. Mutated
    /// only when a turn is finalized.
    pub(crate) position: Vector3<i32>,
    /// Sticker colors by direction. Mutated only when a turn is finalized.
    pub(crate) stickers: Stickers,
}
impl PieceState {
    pub(crate) fn new(home: Vector3<i32>) -> Self {
        Self {
            home,
            position: home,
            stickers: Stickers::new_solved(home),
        }
    }

    /// Returns the lattice position of the piece in the solved state.
    pub fn home(&self) -> Vector3<i32> {
        self.home
    }
    /// Returns the current lattice position of the piece.
    pub fn position(&self) -> Vector3<i32> {
        self.position
    }
    /// Returns the sticker assignment of the piece.
    pub fn stickers(&self) -> &Stickers {
        &self.stickers
    }
    /// Returns the sticker color facing `face`, or `None` if that side of
    /// the piece is interior.
    pub fn sticker(&self, face: Face) -> Option<Color> {
        self.stickers[face]
    }
    /// Returns the number of stickers on the piece.
    pub fn sticker_count(&self) -> usize {
        self.stickers.count()
    }
}

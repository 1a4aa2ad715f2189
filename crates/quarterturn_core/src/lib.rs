//! 3×3×3 twisty puzzle simulation backend.
//!
//! This crate owns the discrete puzzle state: 26 movable pieces on the
//! integer lattice, their sticker colors, and the quarter-turn operation
//! that rotates a layer and permutes its stickers. Animation and input
//! scheduling live in `quarterturn_view`; rendering is up to the frontend.

mod color;
mod cube;
mod face;
mod permute;
mod piece;
mod scramble;
mod twist;

pub use color::Color;
pub use cube::{Cube, InvariantError, PIECE_COUNT};
pub use face::{Axis, Face, Sign};
pub use piece::{Piece, PieceState, Stickers};
pub use scramble::{random_scramble_len, random_twists, SCRAMBLE_TWIST_RANGE};
pub use twist::{ParseTwistError, Twist, TwistDirection, TwistPlan};

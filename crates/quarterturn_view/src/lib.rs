//! Animation controller for the Quarterturn cube, to ensure consistent
//! feel across frontends.
//!
//! [`CubeSimulation`] owns the discrete puzzle state plus the FIFO queue
//! of pending twists and the single in-flight turn animation. Frontends
//! call [`CubeSimulation::tick`] once per frame and read
//! [`CubeSimulation::piece_transforms`] to draw.

mod animation;
mod simulation;

pub use animation::TwistAnimation;
pub use simulation::{CubeSimulation, PieceTransform, MAX_QUEUED_TWISTS};

/// Edge length of a drawn piece.
pub const CUBIE_SIZE: f32 = 0.95;
/// Gap between adjacent drawn pieces.
pub const CUBIE_SPACING: f32 = 0.05;
/// Distance between the centers of adjacent pieces.
pub const CUBE_UNIT_SIZE: f32 = CUBIE_SIZE + CUBIE_SPACING;

//! The cube piece store and the finalized twist operation.

use std::ops::Index;

use cgmath::{Matrix3, Vector3, vec3};
use smallvec::SmallVec;

use crate::{permute, Piece, PieceState, Twist, TwistPlan};

/// Number of movable pieces. The lattice center is fixed and invisible, so
/// it is not stored.
pub const PIECE_COUNT: usize = 26;

/// Violation of a structural invariant of the cube.
///
/// These indicate a planner or permutation bug, not a runtime condition;
/// the operation that detected one is aborted without touching the cube.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The store does not hold exactly [`PIECE_COUNT`] pieces.
    #[error("piece count is {count}, expected {PIECE_COUNT}")]
    PieceCount {
        /// Observed piece count.
        count: usize,
    },
    /// A rotated position did not land back on the lattice.
    #[error("piece {piece:?} landed outside the lattice at {position:?}")]
    PositionOutOfRange {
        /// Offending piece.
        piece: Piece,
        /// Rounded position that fell outside {-1, 0, 1}³ (or hit the
        /// fixed center).
        position: Vector3<i32>,
    },
    /// A sticker permutation changed the number of colored directions.
    #[error("piece {piece:?} sticker count changed from {expected} to {actual}")]
    StickerCount {
        /// Offending piece.
        piece: Piece,
        /// Sticker count in the solved state.
        expected: usize,
        /// Sticker count after the operation.
        actual: usize,
    },
}

/// The 26 movable pieces of a 3×3×3 cube, plus the immutable solved
/// snapshot captured at construction.
#[derive(Debug, Clone)]
pub struct Cube {
    piece_states: Box<[PieceState]>,
    solved: Box<[PieceState]>,
}
impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
impl Eq for Cube {}
impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.piece_states == other.piece_states
    }
}
impl Index<Piece> for Cube {
    type Output = PieceState;

    fn index(&self, piece: Piece) -> &Self::Output {
        &self.piece_states[piece.0 as usize]
    }
}
impl Cube {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        let mut piece_states = Vec::with_capacity(PIECE_COUNT);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    if x == 0 && y == 0 && z == 0 {
                        continue; // fixed center
                    }
                    piece_states.push(PieceState::new(vec3(x, y, z)));
                }
            }
        }
        let piece_states = piece_states.into_boxed_slice();
        Self {
            solved: piece_states.clone(),
            piece_states,
        }
    }

    /// Restores the solved snapshot.
    pub fn reset(&mut self) {
        self.piece_states.clone_from(&self.solved);
    }

    /// Returns an iterator over all piece ids.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> {
        (0..PIECE_COUNT as u8).map(Piece)
    }
    /// Returns the state of every piece, in id order.
    pub fn piece_states(&self) -> &[PieceState] {
        &self.piece_states
    }
    /// Returns the piece currently at `position`, if any.
    pub fn piece_at(&self, position: Vector3<i32>) -> Option<Piece> {
        self.pieces().find(|&p| self[p].position == position)
    }

    /// Returns the pieces in the layer turned by `plan`.
    pub fn pieces_affected_by_twist(&self, plan: &TwistPlan) -> SmallVec<[Piece; 9]> {
        self.pieces()
            .filter(|&p| self[p].position[plan.axis_index as usize] == plan.layer)
            .collect()
    }

    /// Executes a twist to completion, skipping animation.
    pub fn twist(&mut self, twist: Twist) -> Result<(), InvariantError> {
        let plan = twist.plan();
        let affected = self.pieces_affected_by_twist(&plan);
        self.finalize_twist(twist, &plan, &affected)
    }

    /// Converts a completed quarter turn into the new discrete state:
    /// rotates each affected piece's position by the exact quarter-turn
    /// matrix (rounding back onto the lattice) and cyclically shifts its
    /// stickers around the rotation axis.
    ///
    /// The whole update is validated before any of it is committed; on
    /// error the cube is unchanged.
    pub fn finalize_twist(
        &mut self,
        twist: Twist,
        plan: &TwistPlan,
        affected: &[Piece],
    ) -> Result<(), InvariantError> {
        let rotation = Matrix3::from_axis_angle(plan.axis, plan.target_angle);
        // The requested direction and the realized geometric sense are
        // distinct values; the sticker cycle follows the latter.
        let actual_cw = permute::is_actual_cw(twist.face, plan.target_angle);

        let mut updates: SmallVec<[(Piece, Vector3<i32>, crate::Stickers); 9]> =
            SmallVec::with_capacity(affected.len());
        for &piece in affected {
            let state = &self[piece];
            let rotated = rotation * state.position.map(|c| c as f32);
            let position = rotated.map(|c| c.round() as i32);
            if !Self::on_lattice(position) {
                return Err(InvariantError::PositionOutOfRange { piece, position });
            }
            let stickers = permute::permuted(state.stickers(), plan.axis_index, actual_cw);
            if stickers.count() != state.sticker_count() {
                return Err(InvariantError::StickerCount {
                    piece,
                    expected: state.sticker_count(),
                    actual: stickers.count(),
                });
            }
            updates.push((piece, position, stickers));
        }

        for (piece, position, stickers) in updates {
            let state = &mut self.piece_states[piece.0 as usize];
            state.position = position;
            state.stickers = stickers;
        }
        debug_assert_eq!(self.check_invariants(), Ok(()));
        Ok(())
    }

    /// Checks the structural invariants of the whole store.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let count = self.piece_states.len();
        if count != PIECE_COUNT {
            return Err(InvariantError::PieceCount { count });
        }
        for piece in self.pieces() {
            let state = &self[piece];
            if !Self::on_lattice(state.position) {
                return Err(InvariantError::PositionOutOfRange {
                    piece,
                    position: state.position,
                });
            }
            let expected = self.solved[piece.0 as usize].sticker_count();
            let actual = state.sticker_count();
            if actual != expected {
                return Err(InvariantError::StickerCount {
                    piece,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    fn on_lattice(position: Vector3<i32>) -> bool {
        let in_range = (0..3).all(|i| (-1..=1).contains(&position[i]));
        in_range && position != vec3(0, 0, 0)
    }
}

//! Sticker permutation for finalized quarter turns.
//!
//! A quarter turn moves each affected piece's stickers around the rotation
//! axis: the four directions perpendicular to the axis shift cyclically,
//! the two parallel ones stay put.

use cgmath::Rad;

use crate::{Axis, Face, Sign, Stickers};

/// The four sticker directions cycled by a rotation around `axis`, in the
/// order they shift for an actual-clockwise turn (each direction receives
/// the color of its predecessor).
const fn cycle(axis: Axis) -> [Face; 4] {
    match axis {
        Axis::X => [Face::F, Face::U, Face::B, Face::D],
        Axis::Y => [Face::F, Face::L, Face::B, Face::R],
        Axis::Z => [Face::U, Face::R, Face::D, Face::L],
    }
}

/// Returns whether the realized turn is clockwise in the true geometric
/// sense (viewed from the positive end of the world axis).
///
/// This is deliberately derived from the realized angle, not from the
/// requested direction: the stated axis for B/D/L points toward the
/// negative side and the planner inverts their angle once more, and this
/// is where the two flips are reconciled.
pub(crate) fn is_actual_cw(face: Face, target_angle: Rad<f32>) -> bool {
    match face.sign() {
        Sign::Pos => target_angle.0 < 0.0,
        Sign::Neg => target_angle.0 > 0.0,
    }
}

/// Returns `stickers` with the four directions around `axis` cyclically
/// shifted.
pub(crate) fn permuted(stickers: &Stickers, axis: Axis, actual_cw: bool) -> Stickers {
    let cycle = cycle(axis);
    let mut ret = *stickers;
    for i in 0..4 {
        let from = cycle[i];
        let to = cycle[(i + 1) % 4];
        if actual_cw {
            ret[to] = stickers[from];
        } else {
            ret[from] = stickers[to];
        }
    }
    ret
}

//! The in-flight turn animation.

use cgmath::{Quaternion, Rad, Rotation3, Vector3};
use quarterturn_core::{Cube, Piece, Twist, TwistPlan};
use smallvec::SmallVec;

/// One active quarter-turn animation: the rotation plan, the affected
/// pieces with their pre-turn lattice positions, and the current angle.
///
/// The position snapshots are taken once, when the twist activates; every
/// frame recomputes the visual transform from them rather than
/// accumulating rotations, so no floating-point error builds up over the
/// course of the animation.
#[derive(Debug, Clone)]
pub struct TwistAnimation {
    twist: Twist,
    plan: TwistPlan,
    affected: SmallVec<[(Piece, Vector3<i32>); 9]>,
    angle: Rad<f32>,
}
impl TwistAnimation {
    /// Activates `twist` against the current cube state.
    pub fn new(cube: &Cube, twist: Twist) -> Self {
        let plan = twist.plan();
        let affected = cube
            .pieces_affected_by_twist(&plan)
            .into_iter()
            .map(|p| (p, cube[p].position()))
            .collect();
        Self {
            twist,
            plan,
            affected,
            angle: Rad(0.0),
        }
    }

    /// Returns the twist being animated.
    pub fn twist(&self) -> Twist {
        self.twist
    }
    /// Returns the rotation plan of the twist.
    pub fn plan(&self) -> &TwistPlan {
        &self.plan
    }
    /// Returns the current animation angle.
    pub fn angle(&self) -> Rad<f32> {
        self.angle
    }
    /// Returns the affected pieces.
    pub fn pieces(&self) -> SmallVec<[Piece; 9]> {
        self.affected.iter().map(|&(p, _)| p).collect()
    }
    /// Returns the pre-turn position snapshot of `piece`, or `None` if it
    /// is not part of the turned layer.
    pub fn snapshot(&self, piece: Piece) -> Option<Vector3<i32>> {
        self.affected
            .iter()
            .find(|&&(p, _)| p == piece)
            .map(|&(_, pos)| pos)
    }

    /// Advances the angle by one tick of size `step` (radians). Returns
    /// whether the target angle has been reached.
    ///
    /// The final step assigns the target exactly instead of accumulating,
    /// so the angle never overshoots and never carries float drift into
    /// the finalized turn.
    pub fn proceed(&mut self, step: f32) -> bool {
        let target = self.plan.target_angle;
        let delta = step * (target.0 - self.angle.0).signum();
        if (self.angle.0 + delta).abs() >= target.0.abs() {
            self.angle = target;
            true
        } else {
            self.angle.0 += delta;
            false
        }
    }

    /// Returns the rotation of the turned layer at the current angle.
    pub fn rotation(&self) -> Quaternion<f32> {
        Quaternion::from_axis_angle(self.plan.axis, self.angle)
    }
}

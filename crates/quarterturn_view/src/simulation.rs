//! Cube simulation: queue, tick, finalize.

use std::collections::VecDeque;

use cgmath::{One, Quaternion, Rotation, Vector3};
use quarterturn_core::{random_scramble_len, random_twists, Cube, Piece, Twist};

use crate::animation::TwistAnimation;
use crate::CUBE_UNIT_SIZE;

/// Soft cap on the number of pending twists. Submissions beyond it are
/// dropped, bounding input-to-completion latency under key repeat.
pub const MAX_QUEUED_TWISTS: usize = 10;

/// Continuous drawing transform of one piece for the current frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PieceTransform {
    /// World-space center of the piece.
    pub translation: Vector3<f32>,
    /// Orientation of the piece around its own center.
    pub orientation: Quaternion<f32>,
}

/// Cube simulation, which manages the puzzle state, the pending twist
/// queue, and the in-flight turn animation.
///
/// At most one turn is ever animating; queued twists activate strictly in
/// submission order. The discrete state only changes when a turn
/// finalizes, so a piece is never touched by two rotations at once.
#[derive(Debug, Clone, Default)]
pub struct CubeSimulation {
    /// Latest discrete puzzle state, not including the transient rotation.
    cube: Cube,
    /// Pending twists, oldest first.
    queue: VecDeque<Twist>,
    /// In-flight turn, or `None` when idle.
    current: Option<TwistAnimation>,
}
impl CubeSimulation {
    /// Constructs a simulation with a solved cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the latest discrete puzzle state.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns whether a turn animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.current.is_some()
    }
    /// Returns the number of pending twists (not counting the in-flight
    /// turn).
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
    /// Returns the in-flight twist and its animation angle, if any.
    pub fn current_twist(&self) -> Option<(Twist, cgmath::Rad<f32>)> {
        let anim = self.current.as_ref()?;
        Some((anim.twist(), anim.angle()))
    }

    /// Queues a twist, activating it immediately when idle. Dropped when
    /// the queue is full.
    pub fn submit_twist(&mut self, twist: Twist) {
        if self.queue.len() >= MAX_QUEUED_TWISTS {
            log::debug!("twist queue full; dropping {twist}");
            return;
        }
        self.queue.push_back(twist);
        if self.current.is_none() {
            self.activate_next();
        }
    }

    /// Queues a random scramble as one bulk operation, activating it when
    /// idle. `count` defaults to a random length in
    /// [`quarterturn_core::SCRAMBLE_TWIST_RANGE`].
    ///
    /// Refused while earlier twists are still queued behind an in-flight
    /// turn, so a scramble never interleaves with half-submitted input.
    pub fn scramble(&mut self, count: Option<u32>) {
        if self.current.is_some() && !self.queue.is_empty() {
            log::info!("scramble requested while twists are queued; ignoring");
            return;
        }
        let mut rng = rand::rng();
        let count = count.unwrap_or_else(|| random_scramble_len(&mut rng));
        log::info!("scrambling with {count} random twists");
        self.queue.extend(random_twists(&mut rng, count));
        if self.current.is_none() {
            self.activate_next();
        }
    }

    /// Advances the in-flight turn by one tick of size `step` (radians).
    /// No-op when idle.
    ///
    /// A turn that reaches its target angle is finalized in the same tick
    /// and the next queued twist (if any) activates immediately.
    pub fn tick(&mut self, step: f32) {
        let Some(anim) = &mut self.current else {
            return;
        };
        if anim.proceed(step) {
            self.finalize_current();
        }
    }

    /// Restores the solved state, clears the queue, and discards any
    /// in-flight turn without finalizing it.
    pub fn reset(&mut self) {
        self.cube.reset();
        self.queue.clear();
        self.current = None;
    }

    /// Returns the drawing transform of one piece: the interpolated
    /// rotation while the piece is part of the in-flight turn, otherwise
    /// its discrete lattice position.
    pub fn piece_transform(&self, piece: Piece) -> PieceTransform {
        if let Some(anim) = &self.current {
            if let Some(snapshot) = anim.snapshot(piece) {
                let rotation = anim.rotation();
                return PieceTransform {
                    translation: rotation.rotate_vector(snapshot.map(|c| c as f32))
                        * CUBE_UNIT_SIZE,
                    orientation: rotation,
                };
            }
        }
        PieceTransform {
            translation: self.cube[piece].position().map(|c| c as f32) * CUBE_UNIT_SIZE,
            orientation: Quaternion::one(),
        }
    }
    /// Returns the drawing transforms of all pieces, in id order.
    pub fn piece_transforms(&self) -> Vec<PieceTransform> {
        self.cube.pieces().map(|p| self.piece_transform(p)).collect()
    }

    fn finalize_current(&mut self) {
        if let Some(anim) = self.current.take() {
            let result =
                self.cube
                    .finalize_twist(anim.twist(), anim.plan(), &anim.pieces());
            if let Err(e) = result {
                log::error!("twist {} aborted: {e}", anim.twist());
            }
        }
        self.activate_next();
    }

    fn activate_next(&mut self) {
        self.current = self
            .queue
            .pop_front()
            .map(|twist| TwistAnimation::new(&self.cube, twist));
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{InnerSpace, Rad};
    use pretty_assertions::assert_eq;
    use quarterturn_core::{Face, TwistDirection};

    use super::*;

    const STEP: f32 = 0.035;

    fn twist(face: Face, direction: TwistDirection) -> Twist {
        Twist::new(face, direction)
    }

    /// Ticks until idle, counting ticks; panics if the animation never
    /// settles.
    fn run_to_idle(sim: &mut CubeSimulation, step: f32) -> usize {
        let mut ticks = 0;
        while sim.is_animating() {
            sim.tick(step);
            ticks += 1;
            assert!(ticks < 100_000, "animation never settled");
        }
        ticks
    }

    #[test]
    fn test_tick_is_noop_when_idle() {
        let mut sim = CubeSimulation::new();
        sim.tick(STEP);
        assert!(!sim.is_animating());
        assert_eq!(sim.cube(), &Cube::new());
    }

    #[test]
    fn test_submit_activates_immediately() {
        let mut sim = CubeSimulation::new();
        sim.submit_twist(twist(Face::R, TwistDirection::Cw));
        assert!(sim.is_animating());
        assert_eq!(sim.queue_len(), 0);
    }

    #[test]
    fn test_animated_twist_matches_discrete_twist() {
        let mut sim = CubeSimulation::new();
        sim.submit_twist(twist(Face::R, TwistDirection::Cw));
        run_to_idle(&mut sim, STEP);

        let mut expected = Cube::new();
        expected.twist(twist(Face::R, TwistDirection::Cw)).unwrap();
        assert_eq!(sim.cube(), &expected);
    }

    #[test]
    fn test_monotonic_angle() {
        let t = twist(Face::B, TwistDirection::Ccw);
        let target = t.plan().target_angle;
        let mut anim = TwistAnimation::new(&Cube::new(), t);

        let mut last = Rad(0.0_f32);
        let mut ticks = 0;
        loop {
            let done = anim.proceed(STEP);
            let angle = anim.angle();
            // Never moves past the target, never moves backwards.
            assert!(angle.0.abs() <= target.0.abs());
            assert!(angle.0.abs() >= last.0.abs());
            last = angle;
            ticks += 1;
            assert!(ticks < 1000, "animation never settled");
            if done {
                break;
            }
        }
        // The final step assigns the target exactly, not an accumulation
        // near it.
        assert_eq!(anim.angle(), target);
        assert_eq!(ticks, (target.0.abs() / STEP).ceil() as usize);
    }

    #[test]
    fn test_angle_observable_while_animating() {
        let mut sim = CubeSimulation::new();
        sim.submit_twist(twist(Face::B, TwistDirection::Ccw));
        let target = twist(Face::B, TwistDirection::Ccw).plan().target_angle;

        let mut observed = 0;
        while let Some((t, angle)) = sim.current_twist() {
            assert_eq!(t, twist(Face::B, TwistDirection::Ccw));
            // The in-flight angle strictly precedes the target; the exact
            // target is finalized within the same tick it is reached.
            assert!(angle.0.abs() < target.0.abs());
            observed += 1;
            sim.tick(STEP);
            assert!(observed < 1000, "animation never settled");
        }
        assert!(observed > 1);
    }

    #[test]
    fn test_oversized_step_completes_in_one_tick() {
        let mut sim = CubeSimulation::new();
        sim.submit_twist(twist(Face::U, TwistDirection::Cw));
        assert_eq!(run_to_idle(&mut sim, 10.0), 1);

        let mut expected = Cube::new();
        expected.twist(twist(Face::U, TwistDirection::Cw)).unwrap();
        assert_eq!(sim.cube(), &expected);
    }

    #[test]
    fn test_fifo_order() {
        let mut sim = CubeSimulation::new();
        let sequence = [
            twist(Face::R, TwistDirection::Cw),
            twist(Face::U, TwistDirection::Ccw),
            twist(Face::F, TwistDirection::Cw),
        ];
        for t in sequence {
            sim.submit_twist(t);
        }
        run_to_idle(&mut sim, STEP);

        let mut expected = Cube::new();
        for t in sequence {
            expected.twist(t).unwrap();
        }
        assert_eq!(sim.cube(), &expected);
    }

    #[test]
    fn test_queue_cap_drops_excess() {
        let mut sim = CubeSimulation::new();
        // One activates immediately; MAX_QUEUED_TWISTS stay queued; the
        // rest are dropped.
        for _ in 0..MAX_QUEUED_TWISTS + 5 {
            sim.submit_twist(twist(Face::R, TwistDirection::Cw));
        }
        assert_eq!(sim.queue_len(), MAX_QUEUED_TWISTS);

        run_to_idle(&mut sim, STEP);
        // 1 + MAX_QUEUED_TWISTS twists survived; that is 4n + 3 quarter
        // turns of the same face, equivalent to 3.
        let mut expected = Cube::new();
        for _ in 0..(1 + MAX_QUEUED_TWISTS) % 4 {
            expected.twist(twist(Face::R, TwistDirection::Cw)).unwrap();
        }
        assert_eq!(sim.cube(), &expected);
    }

    #[test]
    fn test_reset_mid_animation() {
        let mut sim = CubeSimulation::new();
        sim.submit_twist(twist(Face::F, TwistDirection::Cw));
        sim.submit_twist(twist(Face::U, TwistDirection::Cw));
        sim.tick(STEP);
        sim.tick(STEP);
        assert!(sim.is_animating());

        sim.reset();
        assert!(!sim.is_animating());
        assert_eq!(sim.queue_len(), 0);
        assert_eq!(sim.cube(), &Cube::new());

        // Reset is idempotent.
        sim.reset();
        assert_eq!(sim.cube(), &Cube::new());
    }

    #[test]
    fn test_scramble_then_reset() {
        let mut sim = CubeSimulation::new();
        sim.scramble(Some(25));
        assert!(sim.is_animating());
        assert_eq!(sim.queue_len(), 24);
        run_to_idle(&mut sim, STEP);

        sim.reset();
        assert_eq!(sim.cube(), &Cube::new());
        assert!(!sim.is_animating());
        assert_eq!(sim.queue_len(), 0);
    }

    #[test]
    fn test_scramble_refused_while_queue_nonempty() {
        let mut sim = CubeSimulation::new();
        sim.submit_twist(twist(Face::R, TwistDirection::Cw));
        sim.submit_twist(twist(Face::U, TwistDirection::Cw));
        sim.scramble(Some(25));
        assert_eq!(sim.queue_len(), 1);
    }

    #[test]
    fn test_piece_transforms() {
        let mut sim = CubeSimulation::new();
        let idle_transforms = sim.piece_transforms();
        for (piece, transform) in sim.cube().pieces().zip(&idle_transforms) {
            let expected = sim.cube()[piece].position().map(|c| c as f32) * CUBE_UNIT_SIZE;
            assert_eq!(transform.translation, expected);
            assert_eq!(transform.orientation, Quaternion::one());
        }

        // Halfway through a turn, affected pieces have moved off the
        // lattice; unaffected pieces have not.
        sim.submit_twist(twist(Face::R, TwistDirection::Cw));
        for _ in 0..10 {
            sim.tick(STEP);
        }
        assert!(sim.is_animating());
        for piece in sim.cube().pieces() {
            let state = &sim.cube()[piece];
            let resting = state.position().map(|c| c as f32) * CUBE_UNIT_SIZE;
            let transform = sim.piece_transform(piece);
            if state.position().x == 1 {
                // The face center sits on the rotation axis and stays put;
                // every other piece in the layer is displaced.
                if state.position() != cgmath::vec3(1, 0, 0) {
                    assert!((transform.translation - resting).magnitude() > 1e-3);
                }
                // Rotation preserves the distance from the cube center.
                assert!(
                    (transform.translation.magnitude() - resting.magnitude()).abs() < 1e-5
                );
            } else {
                assert_eq!(transform.translation, resting);
                assert_eq!(transform.orientation, Quaternion::one());
            }
        }

        // After the turn completes, transforms are discrete again.
        run_to_idle(&mut sim, STEP);
        for (piece, transform) in sim.cube().pieces().zip(sim.piece_transforms()) {
            let expected = sim.cube()[piece].position().map(|c| c as f32) * CUBE_UNIT_SIZE;
            assert_eq!(transform.translation, expected);
        }
    }
}

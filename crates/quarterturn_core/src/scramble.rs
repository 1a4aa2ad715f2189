//! Random scramble generation.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::{Face, Twist, TwistDirection};

/// Default number of twists in a scramble when no count is given.
pub const SCRAMBLE_TWIST_RANGE: RangeInclusive<u32> = 20..=29;

/// Picks a random scramble length from [`SCRAMBLE_TWIST_RANGE`].
pub fn random_scramble_len(rng: &mut impl Rng) -> u32 {
    rng.random_range(SCRAMBLE_TWIST_RANGE)
}

/// Generates `count` random twists, never picking the same face twice in a
/// row.
pub fn random_twists(rng: &mut impl Rng, count: u32) -> Vec<Twist> {
    let mut ret = Vec::with_capacity(count as usize);
    let mut last_face = None;
    for _ in 0..count {
        let face = loop {
            let face = Face::from(rng.random_range(0..6_u8));
            if Some(face) != last_face {
                break face;
            }
        };
        let direction = match rng.random::<bool>() {
            true => TwistDirection::Cw,
            false => TwistDirection::Ccw,
        };
        ret.push(Twist::new(face, direction));
        last_face = Some(face);
    }
    ret
}

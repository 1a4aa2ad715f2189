//! Twists and their rotation plans.

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use cgmath::{Rad, Vector3};
use strum::EnumIter;

use crate::{Axis, Face, Sign};

/// Rotational sense of a twist, as seen by an observer looking at the
/// twisted face from outside the cube.
#[derive(EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise quarter turn.
    #[default]
    Cw,
    /// Counter-clockwise quarter turn.
    Ccw,
}
impl TwistDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            TwistDirection::Cw => TwistDirection::Ccw,
            TwistDirection::Ccw => TwistDirection::Cw,
        }
    }

    /// Returns the signed quarter-turn angle before the per-face parity
    /// correction. Positive = counter-clockwise around the stated axis
    /// (right-hand rule).
    fn base_angle(self) -> Rad<f32> {
        match self {
            TwistDirection::Cw => Rad(-FRAC_PI_2),
            TwistDirection::Ccw => Rad(FRAC_PI_2),
        }
    }
}

/// Quarter turn of one face of the cube. A pure value; immutable once
/// queued.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Face to turn.
    pub face: Face,
    /// Requested rotational sense.
    pub direction: TwistDirection,
}
impl Twist {
    /// Constructs a twist of `face` in `direction`.
    pub fn new(face: Face, direction: TwistDirection) -> Self {
        Self { face, direction }
    }
    /// Returns the twist that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }

    /// Computes the rotation parameters for this twist.
    ///
    /// The stated axis is the face's outward unit vector, so for B, D, and
    /// L it points toward the cube's negative side. "Clockwise" is defined
    /// from an observer outside that face, which is why those three faces
    /// get their angle sign inverted once more on top of the flipped axis.
    pub fn plan(self) -> TwistPlan {
        let mut target_angle = self.direction.base_angle();
        if self.face.sign() == Sign::Neg {
            target_angle = -target_angle;
        }
        TwistPlan {
            axis: self.face.unit_vec3(),
            axis_index: self.face.axis(),
            layer: self.face.layer(),
            target_angle,
        }
    }
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.direction {
            TwistDirection::Cw => "",
            TwistDirection::Ccw => "'",
        };
        write!(f, "{}{suffix}", self.face.symbol())
    }
}
impl FromStr for Twist {
    type Err = ParseTwistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (face_str, direction) = match s.strip_suffix('\'') {
            Some(rest) => (rest, TwistDirection::Ccw),
            None => (s, TwistDirection::Cw),
        };
        let face = Face::from_symbol(face_str)
            .ok_or_else(|| ParseTwistError(s.to_string()))?;
        Ok(Self { face, direction })
    }
}

/// Error emitted when parsing an unrecognized twist token.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized twist {0:?}")]
pub struct ParseTwistError(pub String);

/// Rotation parameters of a twist, computed once when the twist becomes
/// active.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TwistPlan {
    /// Stated rotation axis (the turned face's outward unit vector).
    pub axis: Vector3<f32>,
    /// World axis perpendicular to the turned layer.
    pub axis_index: Axis,
    /// Signed lattice coordinate selecting the turned layer.
    pub layer: i32,
    /// Signed quarter-turn angle around `axis`, parity correction
    /// included.
    pub target_angle: Rad<f32>,
}

//! Faces, axes, and signs of the cube.

use cgmath::Vector3;
use num_enum::FromPrimitive;
use strum::EnumIter;

/// 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns an iterator over all axes.
    pub fn iter() -> impl Iterator<Item = Axis> {
        [Axis::X, Axis::Y, Axis::Z].into_iter()
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// Positive or negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative.
    Neg,
    /// Positive.
    Pos,
}
impl Sign {
    /// Returns an integer representation of the sign (either -1 or 1).
    pub const fn int(self) -> i32 {
        match self {
            Sign::Neg => -1,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign.
    pub const fn float(self) -> f32 {
        self.int() as f32
    }
}

/// Face of the cube, used both as a rotation selector and as a sticker
/// direction.
#[derive(EnumIter, FromPrimitive, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// Right face (X+).
    #[default]
    R = 0,
    /// Left face (X-).
    L = 1,
    /// Up face (Y+).
    U = 2,
    /// Down face (Y-).
    D = 3,
    /// Front face (Z+).
    F = 4,
    /// Back face (Z-).
    B = 5,
}
impl Face {
    /// Returns the axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns the sign of the face along its axis.
    pub const fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Returns the face on the opposite side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            R => L,
            L => R,
            U => D,
            D => U,
            F => B,
            B => F,
        }
    }

    /// Returns the outward unit vector of this face, which is also the
    /// stated rotation axis for twists of this face.
    pub fn unit_vec3(self) -> Vector3<f32> {
        self.axis().unit_vec3() * self.sign().float()
    }
    /// Returns the signed lattice coordinate of the layer turned by this
    /// face.
    pub const fn layer(self) -> i32 {
        self.sign().int()
    }

    /// Returns the uppercase face symbol used in twist notation.
    pub fn symbol(self) -> &'static str {
        use Face::*;

        match self {
            R => "R",
            L => "L",
            U => "U",
            D => "D",
            F => "F",
            B => "B",
        }
    }
    /// Returns the face matching a notation symbol, if any.
    pub fn from_symbol(s: &str) -> Option<Self> {
        use Face::*;

        match s {
            "R" => Some(R),
            "L" => Some(L),
            "U" => Some(U),
            "D" => Some(D),
            "F" => Some(F),
            "B" => Some(B),
            _ => None,
        }
    }
    /// Returns the long name of the face.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            R => "Right",
            L => "Left",
            U => "Up",
            D => "Down",
            F => "Front",
            B => "Back",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_face_axis_signs() {
        for face in Face::iter() {
            assert_eq!(face.axis(), face.opposite().axis());
            assert_ne!(face.sign(), face.opposite().sign());
            assert_eq!(face.layer(), face.sign().int());
            // The stated axis always points out of the face.
            let v = face.unit_vec3();
            assert_eq!(v[face.axis() as usize], face.sign().float());
        }
    }

    #[test]
    fn test_face_symbol_round_trip() {
        for face in Face::iter() {
            assert_eq!(Face::from_symbol(face.symbol()), Some(face));
        }
        assert_eq!(Face::from_symbol("X"), None);
    }
}

//! Coordinates in the x/z frame plane.

use crate::numeric::Real;

/// A point or offset in the global x/z plane.
///
/// `Copy`, so every accessor hands out an independent value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2Plane {
    pub x: Real,
    pub z: Real,
}

impl Vec2Plane {
    pub const fn new(x: Real, z: Real) -> Self {
        Self { x, z }
    }

    /// Offset from `self` to `other`.
    pub fn delta_to(self, other: Vec2Plane) -> Vec2Plane {
        Vec2Plane {
            x: other.x - self.x,
            z: other.z - self.z,
        }
    }

    /// Euclidean length of the vector.
    pub fn norm(self) -> Real {
        self.x.hypot(self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn delta_and_norm() {
        let a = Vec2Plane::new(0.0, 0.0);
        let b = Vec2Plane::new(3.0, 4.0);
        assert_eq!(a.delta_to(b), Vec2Plane::new(3.0, 4.0));
        assert_eq!(a.delta_to(b).norm(), 5.0);
        assert_eq!(b.delta_to(a), Vec2Plane::new(-3.0, -4.0));
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            ax in -1e3_f64..1e3, az in -1e3_f64..1e3,
            bx in -1e3_f64..1e3, bz in -1e3_f64..1e3,
        ) {
            let a = Vec2Plane::new(ax, az);
            let b = Vec2Plane::new(bx, bz);
            prop_assert_eq!(a.delta_to(b).norm(), b.delta_to(a).norm());
        }
    }
}

//! Quaternion rotation helper

use super::vec::Vector3;
use std::fmt;
use std::ops::Mul;

/// Squared magnitude below which a quaternion is treated as degenerate
/// and normalizes to the identity.
const MIN_MAGNITUDE_SQUARED: f64 = 0.001;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `angle_degrees` around `axis`, the axis does not need to
    /// be normalized.
    pub fn from_axis_angle(axis: Vector3, angle_degrees: f64) -> Self {
        let axis = axis.normalized();
        let (sin, cos) = (angle_degrees.to_radians() / 2.0).sin_cos();
        Self::new(cos, sin * axis.x, sin * axis.y, sin * axis.z)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Unit length copy of this quaternion, or the identity when the squared
    /// magnitude is too small to divide by.
    pub fn normalized(&self) -> Self {
        let magnitude_squared = self.magnitude_squared();
        if magnitude_squared > MIN_MAGNITUDE_SQUARED {
            let magnitude = magnitude_squared.sqrt();
            Self::new(
                self.w / magnitude,
                self.x / magnitude,
                self.y / magnitude,
                self.z / magnitude,
            )
        } else {
            Self::IDENTITY
        }
    }

    /// The vector part `(x, y, z)`
    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Rotate `v` by `angle_degrees` around the axis held in the vector part
    /// of this quaternion (after normalizing the whole quaternion).
    pub fn rotate_vector(&self, v: Vector3, angle_degrees: f64) -> Vector3 {
        let axis = self.normalized();
        let (sin, cos) = (angle_degrees.to_radians() / 2.0).sin_cos();
        let rotation = Self::new(cos, sin * axis.x, sin * axis.y, sin * axis.z);
        let pure = Self::new(0.0, v.x, v.y, v.z);
        (rotation * pure * rotation.conjugate()).vector()
    }
}

/// Hamilton product
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
            x: self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            y: self.w * q.y + self.y * q.w + self.z * q.x - self.x * q.z,
            z: self.w * q.z + self.z * q.w + self.x * q.y - self.y * q.x,
        }
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(3);
        write!(
            f,
            "({:.p$}, {:.p$}, {:.p$}, {:.p$})",
            self.w, self.x, self.y, self.z
        )
    }
}

//!
//! Linmath3 provides 3D linear algebra primitives for geometric computation.
//!
//! The main types are [`Vector3`], a three component vector, and [`Matrix3`],
//! a 3x3 matrix that also generates homogeneous 2D transforms (translation,
//! rotation and scale).
//!
//! Two numeric edge cases fall back silently instead of failing: normalizing a
//! zero length vector leaves it unchanged, and inverting a matrix with a
//! determinant of exactly zero returns the zero matrix.
//!
//! ```
//! use linmath3::{Matrix3, Vector3};
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let m = Matrix3::new(1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0);
//! assert_eq!(m * m.inverse(), Matrix3::identity());
//! assert_eq!(Matrix3::zero().inverse(), Matrix3::zero());
//! ```

pub mod math;

pub use math::{Matrix3, ParseError, Quaternion, Scalar, Vector3};

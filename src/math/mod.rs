//! Vector and matrix math
//!
//! This module provides:
//! - `Vector3`, a 3D vector (vec submodule)
//! - `Matrix3`, a 3x3 matrix with 2D homogeneous transform generators
//!   (matrix submodule)
//! - `Quaternion`, a rotation helper (quaternion submodule)
//! - `FromStr` support for all of the above (parse submodule)

mod matrix;
mod parse;
mod quaternion;
mod scalar;
mod vec;

pub use matrix::*;
pub use parse::*;
pub use quaternion::*;
pub use scalar::Scalar;
pub use vec::*;

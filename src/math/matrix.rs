//! 3x3 matrix math
//!
//! Matrices are stored row-major: `m[r][c]` holds the component usually
//! written `A{r+1}{c+1}`.
//!
//! ```text
//! [ A11 A12 A13 ]   [ m[0][0] m[0][1] m[0][2] ]
//! [ A21 A22 A23 ] = [ m[1][0] m[1][1] m[1][2] ]
//! [ A31 A32 A33 ]   [ m[2][0] m[2][1] m[2][2] ]
//! ```
//!
//! The 2D transform generators ([`Matrix3::translate`], [`Matrix3::rotate`],
//! [`Matrix3::scale`]) build homogeneous matrices. Translation is stored in
//! the last row, matching the row vector convention of
//! [`Vector3::multiply_matrix`].

use super::scalar::{Scalar, impl_scalar_mul};
use super::vec::Vector3;
use log::debug;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 3x3 matrix with double precision components
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Matrix3 {
    /// Row-major matrix data
    pub m: [[f64; 3]; 3],
}

impl Matrix3 {
    pub const ZERO: Matrix3 = Matrix3 { m: [[0.0; 3]; 3] };

    pub const IDENTITY: Matrix3 = Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

    /// Create a new matrix with explicit values (row-major order)
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        a11: f64,
        a12: f64,
        a13: f64,
        a21: f64,
        a22: f64,
        a23: f64,
        a31: f64,
        a32: f64,
        a33: f64,
    ) -> Self {
        Self {
            m: [[a11, a12, a13], [a21, a22, a23], [a31, a32, a33]],
        }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a matrix from three row vectors
    pub const fn from_rows(row1: Vector3, row2: Vector3, row3: Vector3) -> Self {
        Self::new(
            row1.x, row1.y, row1.z, row2.x, row2.y, row2.z, row3.x, row3.y, row3.z,
        )
    }

    /// Row `i` as a vector, any index past 2 returns the last row
    pub fn row(&self, i: usize) -> Vector3 {
        let [x, y, z] = self.m[i.min(2)];
        Vector3::new(x, y, z)
    }

    /// Column `i` as a vector, any index past 2 returns the last column
    pub fn column(&self, i: usize) -> Vector3 {
        let c = i.min(2);
        Vector3::new(self.m[0][c], self.m[1][c], self.m[2][c])
    }

    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new(
            m[0][0], m[1][0], m[2][0], m[0][1], m[1][1], m[2][1], m[0][2], m[1][2], m[2][2],
        )
    }

    /// Determinant by cofactor expansion
    pub fn determinant(&self) -> f64 {
        let [[a11, a12, a13], [a21, a22, a23], [a31, a32, a33]] = self.m;
        a11 * a22 * a33 - a11 * a32 * a23 + a21 * a32 * a13 - a31 * a22 * a13 + a31 * a12 * a23
            - a21 * a12 * a33
    }

    /// Inverse through the adjugate divided by the determinant.
    ///
    /// A matrix whose determinant is exactly zero has no inverse, the zero
    /// matrix is returned instead. The check is an exact comparison, nearly
    /// singular matrices still get inverted.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            debug!("inverse of singular matrix requested, returning zero matrix");
            return Self::ZERO;
        }
        let inv_det = 1.0 / det;
        let [[a11, a12, a13], [a21, a22, a23], [a31, a32, a33]] = self.m;
        Self::new(
            inv_det * (a22 * a33 - a23 * a32),
            inv_det * (a13 * a32 - a12 * a33),
            inv_det * (a12 * a23 - a13 * a22),
            inv_det * (a23 * a31 - a21 * a33),
            inv_det * (a11 * a33 - a13 * a31),
            inv_det * (a13 * a21 - a11 * a23),
            inv_det * (a21 * a32 - a22 * a31),
            inv_det * (a12 * a31 - a11 * a32),
            inv_det * (a11 * a22 - a12 * a21),
        )
    }

    /// Multiply a column vector by this matrix: each row dotted with `v`
    pub fn multiply_vector(&self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.row(0).dot(&v),
            self.row(1).dot(&v),
            self.row(2).dot(&v),
        )
    }

    /// Multiply every component by `k` after widening it to `f64`
    pub fn mul_scalar<S: Scalar>(self, k: S) -> Matrix3 {
        let k = k.to_f64();
        Matrix3 {
            m: self.m.map(|row| row.map(|a| a * k)),
        }
    }

    /// Homogeneous 2D translation, the offset lives in the last row
    pub fn translate(dx: i32, dy: i32) -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, dx as f64, dy as f64, 1.0)
    }

    /// Homogeneous 2D rotation around the Z axis, whole degrees
    pub fn rotate(angle_degrees: i32) -> Self {
        Self::rotate_z(angle_degrees as f64)
    }

    /// Homogeneous 2D scale, `sx` and `sy` are percentages
    pub fn scale(sx: i32, sy: i32) -> Self {
        Self::new(
            sx as f64 / 100.0,
            0.0,
            0.0,
            0.0,
            sy as f64 / 100.0,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Uniform 3D scale, `percent` of 100 is the identity
    pub fn scale_uniform(percent: i32) -> Self {
        let s = percent as f64 / 100.0;
        Self::new(s, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, s)
    }

    /// Create a rotation matrix around the X axis, angle in degrees
    pub fn rotate_x(angle_degrees: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, cos, -sin, 0.0, sin, cos)
    }

    /// Create a rotation matrix around the Y axis, angle in degrees
    pub fn rotate_y(angle_degrees: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self::new(cos, 0.0, sin, 0.0, 1.0, 0.0, -sin, 0.0, cos)
    }

    /// Create a rotation matrix around the Z axis, angle in degrees.
    ///
    /// [`Matrix3::rotate`] is the whole degree form of this.
    pub fn rotate_z(angle_degrees: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0)
    }
}

impl Vector3 {
    /// Multiply this row vector by `m`: each column of `m` dotted with the
    /// vector.
    ///
    /// This is not `m * self` commuted, it equals `m.transpose() * self`.
    pub fn multiply_matrix(&self, m: &Matrix3) -> Vector3 {
        Vector3::new(
            m.column(0).dot(self),
            m.column(1).dot(self),
            m.column(2).dot(self),
        )
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;

    fn add(self, other: Matrix3) -> Matrix3 {
        let mut result = self.m;
        for (row, other_row) in result.iter_mut().zip(other.m) {
            for (cell, b) in row.iter_mut().zip(other_row) {
                *cell += b;
            }
        }
        Matrix3 { m: result }
    }
}

impl Sub for Matrix3 {
    type Output = Matrix3;

    fn sub(self, other: Matrix3) -> Matrix3 {
        let mut result = self.m;
        for (row, other_row) in result.iter_mut().zip(other.m) {
            for (cell, b) in row.iter_mut().zip(other_row) {
                *cell -= b;
            }
        }
        Matrix3 { m: result }
    }
}

impl Add for &Matrix3 {
    type Output = Matrix3;

    fn add(self, other: &Matrix3) -> Matrix3 {
        *self + *other
    }
}

impl Sub for &Matrix3 {
    type Output = Matrix3;

    fn sub(self, other: &Matrix3) -> Matrix3 {
        *self - *other
    }
}

impl Neg for Matrix3 {
    type Output = Matrix3;

    fn neg(self) -> Matrix3 {
        self.mul_scalar(-1.0)
    }
}

/// Row by column matrix product
impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, other: Matrix3) -> Matrix3 {
        &self * &other
    }
}

impl Mul for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, other: &Matrix3) -> Matrix3 {
        let mut result = [[0.0f64; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.row(i).dot(&other.column(j));
            }
        }
        Matrix3 { m: result }
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.multiply_vector(v)
    }
}

impl Mul<Matrix3> for Vector3 {
    type Output = Vector3;

    fn mul(self, m: Matrix3) -> Vector3 {
        self.multiply_matrix(&m)
    }
}

impl_scalar_mul!(Matrix3: i32, f32, f64);

/// Three lines of space separated values, 2 decimals unless a precision is
/// given.
impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        for (i, [a, b, c]) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{a:.p$} {b:.p$} {c:.p$}")?;
        }
        Ok(())
    }
}

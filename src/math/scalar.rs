/// Numeric types that can scale a vector or matrix.
///
/// Every multiplier is promoted to `f64` before the multiplication, so
/// `v * 3`, `v * 3.0f32` and `v * 3.0f64` produce bit-identical results.
pub trait Scalar: Copy {
    /// Returns the value widened to double precision
    fn to_f64(self) -> f64;
}

impl Scalar for i32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Implements `value * scalar` and `scalar * value` for the scalar types,
/// forwarding to the type's `mul_scalar` method.
macro_rules! impl_scalar_mul {
    ($target:ty: $($scalar:ty),+) => {
        $(
            impl std::ops::Mul<$scalar> for $target {
                type Output = $target;

                fn mul(self, k: $scalar) -> $target {
                    self.mul_scalar(k)
                }
            }

            impl std::ops::Mul<$target> for $scalar {
                type Output = $target;

                fn mul(self, value: $target) -> $target {
                    value.mul_scalar(self)
                }
            }
        )+
    };
}

pub(crate) use impl_scalar_mul;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f64() {
        assert_eq!(3i32.to_f64(), 3.0);
        assert_eq!((-7i32).to_f64(), -7.0);
        assert_eq!(0.1f32.to_f64(), 0.1f32 as f64);
        assert_eq!(0.1f64.to_f64(), 0.1);
    }
}

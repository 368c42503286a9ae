//! Reading vectors, matrices and quaternions from text
//!
//! Components are real numbers separated by commas and/or whitespace,
//! parentheses are ignored. This means the `Display` output of every type
//! parses back into the same value (up to the printed precision).
//!
//! ```
//! use linmath3::{Matrix3, Vector3};
//!
//! let v: Vector3 = "(1, 2.5, -3)".parse().unwrap();
//! assert_eq!(v, Vector3::new(1.0, 2.5, -3.0));
//!
//! let m: Matrix3 = "1 0 0\n0 1 0\n0 0 1".parse().unwrap();
//! assert_eq!(m, Matrix3::identity());
//! ```

use super::matrix::Matrix3;
use super::quaternion::Quaternion;
use super::vec::Vector3;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseFloatError;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A component could not be read as a number
    InvalidNumber {
        index: usize,
        token: String,
        source: ParseFloatError,
    },
    /// The input did not hold the expected number of components
    WrongCount { expected: usize, found: usize },
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::InvalidNumber { source, .. } => Some(source),
            ParseError::WrongCount { .. } => None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber { index, token, .. } => {
                write!(f, "component {index}: invalid number: {token}")
            }
            ParseError::WrongCount { expected, found } => {
                write!(f, "expected {expected} components, found {found}")
            }
        }
    }
}

/// Split `s` into exactly `N` numbers.
fn parse_components<const N: usize>(s: &str) -> Result<[f64; N], ParseError> {
    let tokens: Vec<&str> = s
        .split(|c: char| c == ',' || c == '(' || c == ')' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != N {
        return Err(ParseError::WrongCount {
            expected: N,
            found: tokens.len(),
        });
    }
    let mut values = [0.0; N];
    for (index, (value, token)) in values.iter_mut().zip(tokens).enumerate() {
        *value = token
            .parse::<f64>()
            .map_err(|source| ParseError::InvalidNumber {
                index,
                token: token.to_string(),
                source,
            })?;
    }
    Ok(values)
}

impl FromStr for Vector3 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<3>(s).map(Vector3::from)
    }
}

impl FromStr for Matrix3 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [a11, a12, a13, a21, a22, a23, a31, a32, a33] = parse_components::<9>(s)?;
        Ok(Matrix3::new(a11, a12, a13, a21, a22, a23, a31, a32, a33))
    }
}

impl FromStr for Quaternion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [w, x, y, z] = parse_components::<4>(s)?;
        Ok(Quaternion::new(w, x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn test_parse_vector_forms() -> TestResult {
        let expected = Vector3::new(1.0, -2.5, 3.0);
        assert_eq!("1 -2.5 3".parse::<Vector3>()?, expected);
        assert_eq!("(1, -2.5, 3)".parse::<Vector3>()?, expected);
        assert_eq!("  1,-2.5,\t3\n".parse::<Vector3>()?, expected);
        Ok(())
    }

    #[test]
    fn test_vector_display_parses_back() -> TestResult {
        let v = Vector3::new(0.6, 0.8, -12.125);
        assert_eq!(v.to_string().parse::<Vector3>()?, v);
        Ok(())
    }

    #[test]
    fn test_parse_matrix() -> TestResult {
        let m: Matrix3 = "(1, 2, 3)\n(4, 5, 6)\n(7, 8, 9)".parse()?;
        assert_eq!(m, Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0));
        assert_eq!(m.to_string().parse::<Matrix3>()?, m);
        Ok(())
    }

    #[test]
    fn test_parse_quaternion() -> TestResult {
        let q: Quaternion = "1 0 0 0".parse()?;
        assert_eq!(q, Quaternion::IDENTITY);
        Ok(())
    }

    #[test]
    fn test_parse_wrong_count() {
        assert_eq!(
            "1 2".parse::<Vector3>(),
            Err(ParseError::WrongCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "".parse::<Matrix3>(),
            Err(ParseError::WrongCount {
                expected: 9,
                found: 0
            })
        );
    }

    #[test]
    fn test_parse_invalid_number() {
        let err = "1 two 3".parse::<Vector3>().unwrap_err();
        match &err {
            ParseError::InvalidNumber { index, token, .. } => {
                assert_eq!(*index, 1);
                assert_eq!(token, "two");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "component 1: invalid number: two");
        assert!(err.source().is_some());
    }
}

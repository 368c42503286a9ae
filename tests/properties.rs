//! Randomized checks of the algebraic identities, seeded so failures reproduce.

use linmath3::{Matrix3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x5EED_3D;
const ROUNDS: usize = 500;

fn random_vector(rng: &mut StdRng) -> Vector3 {
    Vector3::new(
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
    )
}

fn random_matrix(rng: &mut StdRng) -> Matrix3 {
    Matrix3::from_rows(random_vector(rng), random_vector(rng), random_vector(rng))
}

/// Diagonally dominant, so comfortably far from singular
fn random_invertible_matrix(rng: &mut StdRng) -> Matrix3 {
    let mut m = random_matrix(rng).mul_scalar(0.01);
    for (i, row) in m.m.iter_mut().enumerate() {
        row[i] += if rng.random_bool(0.5) { 10.0 } else { -10.0 };
    }
    m
}

fn relative_close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn length_squared_matches_length() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let v = random_vector(&mut rng);
        let len = v.length();
        assert!(
            relative_close(len * len, v.length_squared(), 1e-12),
            "{v}: {} vs {}",
            len * len,
            v.length_squared()
        );
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let mut v = random_vector(&mut rng);
        v.normalize();
        assert!((v.length() - 1.0).abs() < 1e-12, "{v} has length {}", v.length());
    }
}

#[test]
fn products_symmetries() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        assert_eq!(a.dot(&b), b.dot(&a));
        assert_eq!(a.cross(&b), -b.cross(&a));
        assert_eq!(a.cross(&a), Vector3::ZERO);
    }
}

#[test]
fn scalar_representations_agree() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let v = random_vector(&mut rng);
        let k: i32 = rng.random_range(-1000..1000);
        assert_eq!(v * k, v * (k as f64));
        let kf: f32 = rng.random_range(-10.0..10.0);
        assert_eq!(v * kf, v * (kf as f64));
        assert_eq!(kf * v, v.mul_scalar(kf));
    }
}

#[test]
fn double_transpose_is_identity() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let m = random_matrix(&mut rng);
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn vector_times_matrix_is_transposed_product() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let m = random_matrix(&mut rng);
        let v = random_vector(&mut rng);
        assert_eq!(v * m, m.transpose() * v);
    }
}

#[test]
fn matrix_times_inverse_is_identity() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let m = random_invertible_matrix(&mut rng);
        assert_ne!(m.determinant(), 0.0);
        let product = m * m.inverse();
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!(
                    (product.m[r][c] - expected).abs() < 1e-9,
                    "m[{r}][{c}] = {} for\n{m:.6}",
                    product.m[r][c]
                );
            }
        }
    }
}

#[test]
fn matrices_with_repeated_rows_invert_to_zero() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        // small integers keep the cofactor expansion exact
        let row = Vector3::new(
            rng.random_range(-9..=9) as f64,
            rng.random_range(-9..=9) as f64,
            rng.random_range(-9..=9) as f64,
        );
        let other = Vector3::new(
            rng.random_range(-9..=9) as f64,
            rng.random_range(-9..=9) as f64,
            rng.random_range(-9..=9) as f64,
        );
        let m = Matrix3::from_rows(row, other, row);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Matrix3::zero());
    }
}

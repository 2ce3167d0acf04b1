//! Shared helpers for integration tests
// Each test target uses a different subset of these helpers.
#![allow(dead_code)]

use subset_complex::Complex;

/// Assert two reals agree within `tol`
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} (±{}), got {}",
        expected,
        tol,
        actual
    );
}

/// Assert both components agree within `tol`
pub fn assert_complex_close(actual: Complex, expected: Complex, tol: f64) {
    assert!(
        (actual.real() - expected.real()).abs() <= tol
            && (actual.imag() - expected.imag()).abs() <= tol,
        "expected {:?} (±{}), got {:?}",
        expected,
        tol,
        actual
    );
}

/// Hash a value with the standard library's default hasher
pub fn hash_of<T: std::hash::Hash>(value: &T) -> u64 {
    use std::hash::Hasher;
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Hash a bare real the way `Complex` hashes its zero-imaginary values
pub fn hash_of_real(x: f64) -> u64 {
    use std::hash::Hasher;
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    subset_complex::hash_real(x, &mut hasher);
    hasher.finish()
}

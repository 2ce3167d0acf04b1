//! Hashing consistent with mixed real/complex equality
//!
//! `Complex::new(x, 0) == x`, so the two must hash alike: the imaginary
//! component is fed to the hasher only when it is non-zero. Components are
//! fed in order (real first), so `(a, b)` and `(b, a)` hash differently.

use std::hash::{Hash, Hasher};

use crate::complex::Complex;

/// Bit pattern used for hashing; `-0.0` and `0.0` compare equal and must
/// hash equal.
#[inline]
fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}

/// Feed a bare real number to `state` exactly as `Complex::new(x, 0)` would
pub fn hash_real<H: Hasher>(x: f64, state: &mut H) {
    state.write_u64(canonical_bits(x));
}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_real(self.real(), state);
        if self.imag() != 0.0 {
            state.write_u64(canonical_bits(self.imag()));
        }
    }
}

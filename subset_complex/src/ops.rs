//! Arithmetic operators for `Complex`
//!
//! Every operator exists for three pairings: `(Complex, Complex)`,
//! `(Complex, real)` and `(real, Complex)`, where "real" is any primitive
//! numeric type or `half::f16`. All dispatch is static.
//!
//! `Complex ⊕ real` works on components: `+` and `-` touch only the real
//! part, `*` and `/` scale both parts. This differs from embedding the real
//! as `x + 0i` for non-finite values and signed zeros, e.g.
//! `Complex::new(f64::INFINITY, 0) * 2.0` keeps an imaginary part of `0`.
//! `real - Complex` negates the imaginary part, and `real / Complex` embeds
//! the real and runs Smith division.

use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use half::f16;
use num_traits::{AsPrimitive, Inv, One, Zero};

use crate::complex::Complex;

// ========== Complex ⊕ Complex ==========

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::from_f64s(-self.real(), -self.imag())
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::from_f64s(self.real() + rhs.real(), self.imag() + rhs.imag())
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::from_f64s(self.real() - rhs.real(), self.imag() - rhs.imag())
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        let (a, b) = (self.real(), self.imag());
        let (c, d) = (rhs.real(), rhs.imag());
        Complex::from_f64s(a * c - b * d, a * d + b * c)
    }
}

impl Div for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        smith_div(self, rhs)
    }
}

/// Smith's division: scale by the ratio of the divisor's components instead
/// of dividing by `c² + d²`.
///
/// The branch compares the divisor's signed components (`c <= d`), not their
/// magnitudes, so a negative component can select the wrong ratio:
///
/// - `d == 0` and `c < 0`: `r = c / 0` is infinite and the result is NaN
/// - `c == 0` and `d < 0`: `r = d / 0` is infinite and the result is NaN
/// - `c` a large negative number and `d` small and positive: `r * c`
///   overflows, so the result collapses to zero, or NaN once `r` itself
///   is infinite
///
/// Divisors whose components share a sign always take the ratio that is at
/// most one in magnitude and divide accurately.
fn smith_div(lhs: Complex, rhs: Complex) -> Complex {
    let (a, b) = (lhs.real(), lhs.imag());
    let (c, d) = (rhs.real(), rhs.imag());
    if c <= d {
        let r = c / d;
        let denom = d + r * c;
        #[cfg(debug_assertions)]
        trace_div("real<=imag", c, d, r, denom);
        Complex::from_f64s((a * r + b) / denom, (b * r - a) / denom)
    } else {
        let r = d / c;
        let denom = c + r * d;
        #[cfg(debug_assertions)]
        trace_div("real>imag", c, d, r, denom);
        Complex::from_f64s((a + b * r) / denom, (b - a * r) / denom)
    }
}

#[cfg(debug_assertions)]
fn trace_div(branch: &str, c: f64, d: f64, r: f64, denom: f64) {
    crate::trace::debug_log(format_args!(
        "div branch={} divisor=({:?}, {:?}) r={:?} denom={:?}",
        branch, c, d, r, denom
    ));
}

// ========== Complex ⊕ real / real ⊕ Complex ==========

macro_rules! impl_real_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl Add<$t> for Complex {
                type Output = Complex;

                #[inline]
                fn add(self, rhs: $t) -> Complex {
                    let x: f64 = rhs.as_();
                    Complex::from_f64s(self.real() + x, self.imag())
                }
            }

            impl Sub<$t> for Complex {
                type Output = Complex;

                #[inline]
                fn sub(self, rhs: $t) -> Complex {
                    let x: f64 = rhs.as_();
                    Complex::from_f64s(self.real() - x, self.imag())
                }
            }

            impl Mul<$t> for Complex {
                type Output = Complex;

                #[inline]
                fn mul(self, rhs: $t) -> Complex {
                    let x: f64 = rhs.as_();
                    Complex::from_f64s(self.real() * x, self.imag() * x)
                }
            }

            impl Div<$t> for Complex {
                type Output = Complex;

                #[inline]
                fn div(self, rhs: $t) -> Complex {
                    let x: f64 = rhs.as_();
                    Complex::from_f64s(self.real() / x, self.imag() / x)
                }
            }

            impl Add<Complex> for $t {
                type Output = Complex;

                #[inline]
                fn add(self, rhs: Complex) -> Complex {
                    rhs + self
                }
            }

            impl Sub<Complex> for $t {
                type Output = Complex;

                #[inline]
                fn sub(self, rhs: Complex) -> Complex {
                    let x: f64 = self.as_();
                    Complex::from_f64s(x - rhs.real(), -rhs.imag())
                }
            }

            impl Mul<Complex> for $t {
                type Output = Complex;

                #[inline]
                fn mul(self, rhs: Complex) -> Complex {
                    rhs * self
                }
            }

            impl Div<Complex> for $t {
                type Output = Complex;

                #[inline]
                fn div(self, rhs: Complex) -> Complex {
                    smith_div(Complex::new(self, 0.0), rhs)
                }
            }

            impl PartialEq<$t> for Complex {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    *self == Complex::new(*other, 0.0)
                }
            }

            impl PartialEq<Complex> for $t {
                #[inline]
                fn eq(&self, other: &Complex) -> bool {
                    other == self
                }
            }
        )*
    };
}

impl_real_ops!(f64, f32, f16, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ========== num-traits identities ==========

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Complex::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Complex::ONE
    }
}

impl Inv for Complex {
    type Output = Complex;

    #[inline]
    fn inv(self) -> Complex {
        Complex::inv(&self)
    }
}

// ========== Iterator folds ==========

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + *z)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * *z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Complex, expected: Complex) {
        assert!(
            (actual.real() - expected.real()).abs() < 1e-12
                && (actual.imag() - expected.imag()).abs() < 1e-12,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    // ── Complex ⊕ Complex ─────────────────────────────────────────────────────

    #[test]
    fn test_neg() {
        assert_eq!(-Complex::new(1, -2), Complex::new(-1, 2));
    }

    #[test]
    fn test_add_sub_componentwise() {
        let a = Complex::new(1, 2);
        let b = Complex::new(3, 4);
        assert_eq!(a + b, Complex::new(4, 6));
        assert_eq!(a - b, Complex::new(-2, -2));
    }

    #[test]
    fn test_mul_standard() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        assert_eq!(Complex::new(1, 2) * Complex::new(3, 4), Complex::new(-5, 10));
        // i² = -1
        assert_eq!(Complex::I * Complex::I, Complex::new(-1, 0));
    }

    #[test]
    fn test_div_both_branches() {
        // c <= d
        assert_close(Complex::new(-5, 10) / Complex::new(3, 4), Complex::new(1, 2));
        // c > d
        assert_close(Complex::new(10, 5) / Complex::new(4, 3), Complex::new(2.2, -0.4));
    }

    #[test]
    fn test_div_tiny_divisor_does_not_overflow() {
        let q = Complex::new(1, 1) / Complex::new(1e-200, 1e-200);
        assert!(q.is_finite(), "got {:?}", q);
        assert!((q.real() - 1e200).abs() / 1e200 < 1e-15);
        assert_eq!(q.imag(), 0.0);
    }

    #[test]
    fn test_div_huge_divisor_does_not_underflow_to_zero() {
        let q = Complex::new(1e300, 1e300) / Complex::new(1e300, 1e300);
        assert_close(q, Complex::ONE);
    }

    #[test]
    fn test_div_compares_signed_components() {
        // c < 0 == d: c <= d, so r = c / 0 is infinite.
        let q = Complex::new(1, 0) / Complex::new(-2, 0);
        assert!(q.is_nan(), "got {:?}", q);

        // d < 0 == c: c > d, so r = d / 0 is infinite.
        let q = Complex::new(1, 0) / Complex::new(0, -1);
        assert!(q.is_nan(), "got {:?}", q);

        // Large negative c against a small positive d: r * c overflows and
        // the quotient collapses to zero instead of about -1e-200.
        let q = Complex::new(1, 0) / Complex::new(-1e200, 1e-10);
        assert_eq!(q.real(), 0.0);
        assert_eq!(q.imag(), 0.0);
        // Once r = c / d overflows too, the quotient is NaN.
        let q = Complex::new(1, 0) / Complex::new(-1e300, 1e-10);
        assert!(q.is_nan(), "got {:?}", q);

        // Mixed signs with comparable magnitudes stay exact.
        assert_close(Complex::new(1, 1) / Complex::new(-1, 1), Complex::new(0, -1));
    }

    #[test]
    fn test_div_both_components_negative() {
        // 1 / (-3 - 4i) = (-3 + 4i) / 25
        assert_close(Complex::new(1, 0) / Complex::new(-3, -4), Complex::new(-0.12, 0.16));
        // c <= d branch with both parts negative
        assert_close(Complex::new(-5, 10) / Complex::new(-4, -3), Complex::new(-0.4, -2.2));
        assert_close(1.0f64 / Complex::new(-3, -4), Complex::new(-0.12, 0.16));
    }

    // ── Complex ⊕ real ────────────────────────────────────────────────────────

    #[test]
    fn test_complex_with_real_rhs() {
        let z = Complex::new(2, 3);
        assert_eq!(z + 1i32, Complex::new(3, 3));
        assert_eq!(z - 1.5f64, Complex::new(0.5, 3));
        assert_eq!(z * 2u8, Complex::new(4, 6));
        assert_eq!(z / 2.0f32, Complex::new(1, 1.5));
    }

    #[test]
    fn test_real_with_complex_rhs() {
        let z = Complex::new(2, 3);
        assert_eq!(1i32 + z, Complex::new(3, 3));
        assert_eq!(1.0f64 - z, Complex::new(-1, -3));
        assert_eq!(2i64 * z, Complex::new(4, 6));
        assert_close(1.0f64 / Complex::new(0, 2), Complex::new(0, -0.5));
        assert_close(13.0f64 / Complex::new(2, 3), Complex::new(2, -3));
    }

    #[test]
    fn test_mixed_equality() {
        assert_eq!(Complex::new(5, 0), 5.0f64);
        assert_eq!(5.0f64, Complex::new(5, 0));
        assert_eq!(Complex::new(5, 0), 5u32);
        assert_eq!(7i16, Complex::new(7, 0));
        assert_ne!(Complex::new(5, 1), 5.0f64);
        assert_ne!(f64::NAN, Complex::new(f64::NAN, 0));
    }

    #[test]
    fn test_complex_with_real_is_componentwise() {
        let z = Complex::new(f64::INFINITY, 0) * 2.0f64;
        assert_eq!(z.imag(), 0.0);
        assert!(z.real().is_infinite());

        // Embedding 0.0 as 0 + 0i would turn a -0.0 imaginary part into 0.0.
        let z = Complex::new(1, -0.0) + 0.0f64;
        assert!(z.imag().is_sign_negative());
        let z = Complex::new(1, -0.0) * 1.0f64;
        assert!(z.imag().is_sign_negative());
    }

    #[test]
    fn test_f16_pairings() {
        let h = f16::from_f32(1.5);
        let z = Complex::new(h, f16::from_f32(-2.0));
        assert_eq!(z, Complex::new(1.5, -2));

        assert_eq!(z + h, Complex::new(3, -2));
        assert_eq!(z - h, Complex::new(0, -2));
        assert_eq!(z * h, Complex::new(2.25, -3));
        assert_eq!(z / h, Complex::new(1, -2.0 / 1.5));
        assert_eq!(h + z, Complex::new(3, -2));
        assert_eq!(h - z, Complex::new(0, 2));
        assert_eq!(h * z, Complex::new(2.25, -3));
        assert_close(f16::from_f32(2.0) / Complex::new(0, 2), Complex::new(0, -1));

        assert!(Complex::new(1.5, 0) == h);
        assert!(h == Complex::new(1.5, 0));
        assert!(Complex::new(1.5, 0.5) != h);
    }

    // ── num-traits / iterators ────────────────────────────────────────────────

    #[test]
    fn test_num_traits_identities() {
        assert!(<Complex as Zero>::is_zero(&Complex::zero()));
        assert_eq!(Complex::one(), Complex::ONE);
        assert_close(Inv::inv(Complex::new(0, 2)), Complex::new(0, -0.5));
    }

    #[test]
    fn test_sum_and_product() {
        let values = [Complex::new(1, 1), Complex::new(2, -1), Complex::new(0, 3)];
        assert_eq!(values.iter().sum::<Complex>(), Complex::new(3, 3));
        assert_eq!(values.into_iter().sum::<Complex>(), Complex::new(3, 3));

        let values = [Complex::I, Complex::I, Complex::new(2, 0)];
        assert_eq!(values.iter().product::<Complex>(), Complex::new(-2, 0));
        assert_eq!(Vec::<Complex>::new().into_iter().product::<Complex>(), Complex::ONE);
    }
}

//! The `Complex` value type
//!
//! A pair of IEEE-754 doubles. Values are `Copy`, never mutated after
//! construction, and compared componentwise with exact float equality.

use num_traits::AsPrimitive;

use crate::math;

/// Complex number `real + imag·i` with double-precision components
///
/// Inputs of any primitive numeric type are widened to `f64` at construction.
/// Plain reals take part in arithmetic and comparison as if they were
/// `Complex` values with a zero imaginary part; see [`crate::ToComplex`].
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    real: f64,
    imag: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Complex = Complex::from_f64s(0.0, 0.0);

    /// `1 + 0i`
    pub const ONE: Complex = Complex::from_f64s(1.0, 0.0);

    /// `0 + 1i`
    pub const I: Complex = Complex::from_f64s(0.0, 1.0);

    // ========== Construction ==========

    /// Create a complex number, widening each component to `f64`
    ///
    /// # Example
    /// ```
    /// use subset_complex::Complex;
    ///
    /// let z = Complex::new(3, 4.5f32);
    /// assert_eq!(z.real(), 3.0);
    /// assert_eq!(z.imag(), 4.5);
    /// ```
    #[inline]
    pub fn new<R, I>(real: R, imag: I) -> Self
    where
        R: AsPrimitive<f64>,
        I: AsPrimitive<f64>,
    {
        Complex {
            real: real.as_(),
            imag: imag.as_(),
        }
    }

    /// Create a complex number from components that are already `f64`
    #[inline]
    pub const fn from_f64s(real: f64, imag: f64) -> Self {
        Complex { real, imag }
    }

    /// Create a complex number from its magnitude and angle in radians
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        let (cos, sin) = math::cis(angle);
        Complex::from_f64s(magnitude * cos, magnitude * sin)
    }

    // ========== Components ==========

    /// Real component
    #[inline]
    pub fn real(&self) -> f64 {
        self.real
    }

    /// Imaginary component
    #[inline]
    pub fn imag(&self) -> f64 {
        self.imag
    }

    // ========== Predicates ==========

    /// True only when both components are exactly zero (`-0.0` counts as zero)
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imag == 0.0
    }

    /// True when the imaginary component is exactly zero
    #[inline]
    pub fn is_real(&self) -> bool {
        self.imag == 0.0
    }

    /// True when both components are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// True when either component is NaN
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imag.is_nan()
    }

    // ========== Magnitude and phase ==========

    /// Euclidean norm, computed with a scaled hypotenuse
    ///
    /// Stays finite for components near `f64::MAX` where
    /// `sqrt(real² + imag²)` would overflow.
    #[inline]
    pub fn abs(&self) -> f64 {
        math::hypot(self.real, self.imag)
    }

    /// Squared norm `real² + imag²`, computed directly
    #[inline]
    pub fn abs2(&self) -> f64 {
        math::abs2(self.real, self.imag)
    }

    /// Angle from the positive real axis, in (-π, π]
    #[inline]
    pub fn phase(&self) -> f64 {
        math::atan2(self.imag, self.real)
    }

    /// `(abs, phase)`
    #[inline]
    pub fn polar(&self) -> (f64, f64) {
        (self.abs(), self.phase())
    }

    /// Unit-magnitude value with the same direction
    ///
    /// Both components are NaN when `self` is zero.
    pub fn sign(&self) -> Complex {
        *self / self.abs()
    }

    // ========== Algebraic helpers ==========

    /// The unary plus of this type: componentwise absolute value
    ///
    /// This is not the identity. `Complex::new(-1, -2).unary_plus()` is
    /// `1 + 2i`.
    #[inline]
    pub fn unary_plus(&self) -> Complex {
        Complex::from_f64s(self.real.abs(), self.imag.abs())
    }

    /// Complex conjugate `real - imag·i`
    #[inline]
    pub fn conj(&self) -> Complex {
        Complex::from_f64s(self.real, -self.imag)
    }

    /// Multiplicative inverse `conj / abs2`
    #[inline]
    pub fn inv(&self) -> Complex {
        self.conj() / self.abs2()
    }
}

impl Default for Complex {
    fn default() -> Self {
        Complex::ZERO
    }
}

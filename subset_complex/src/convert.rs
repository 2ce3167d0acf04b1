//! Conversions between `Complex` and plain real numbers
//!
//! Embedding (real → complex) always succeeds. Narrowing (complex → real)
//! succeeds only when the imaginary part is exactly zero, then applies the
//! target type's ordinary `as` conversion.

use std::any::{type_name, Any};

use half::f16;
use num_traits::AsPrimitive;

use crate::complex::Complex;
use crate::error::{ConversionError, ConversionResult};
use crate::math;

// ========== Embedding ==========

/// Real numbers viewed as complex numbers
///
/// # Example
/// ```
/// use subset_complex::{Complex, ToComplex};
///
/// assert_eq!(2i32.to_c(), Complex::new(2, 0));
/// assert_eq!(3.0f64.i(), Complex::new(0, 3));
/// ```
pub trait ToComplex: Copy {
    /// `self + 0i`
    fn to_c(self) -> Complex;

    /// `0 + self·i`
    fn i(self) -> Complex;

    /// `cos(self) + i·sin(self)`, the point on the unit circle at angle `self`
    fn cis(self) -> Complex;
}

macro_rules! impl_to_complex {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToComplex for $t {
                #[inline]
                fn to_c(self) -> Complex {
                    Complex::new(self, 0.0)
                }

                #[inline]
                fn i(self) -> Complex {
                    Complex::new(0.0, self)
                }

                #[inline]
                fn cis(self) -> Complex {
                    let (cos, sin) = math::cis(self.as_());
                    Complex::from_f64s(cos, sin)
                }
            }

            impl From<$t> for Complex {
                #[inline]
                fn from(x: $t) -> Self {
                    x.to_c()
                }
            }

            impl TryFrom<Complex> for $t {
                type Error = ConversionError;

                #[inline]
                fn try_from(z: Complex) -> ConversionResult<$t> {
                    z.to_real::<$t>()
                }
            }
        )*
    };
}

impl_to_complex!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToComplex for f16 {
    #[inline]
    fn to_c(self) -> Complex {
        Complex::from_f64s(self.to_f64(), 0.0)
    }

    #[inline]
    fn i(self) -> Complex {
        Complex::from_f64s(0.0, self.to_f64())
    }

    #[inline]
    fn cis(self) -> Complex {
        self.to_f64().cis()
    }
}

impl From<f16> for Complex {
    #[inline]
    fn from(x: f16) -> Self {
        x.to_c()
    }
}

impl TryFrom<Complex> for f16 {
    type Error = ConversionError;

    #[inline]
    fn try_from(z: Complex) -> ConversionResult<f16> {
        z.to_f16()
    }
}

// ========== Narrowing ==========

impl Complex {
    /// The real part, if the imaginary part is exactly zero
    fn real_part_for(&self, target: &'static str) -> ConversionResult<f64> {
        if self.imag() == 0.0 {
            Ok(self.real())
        } else {
            #[cfg(debug_assertions)]
            crate::trace::debug_log(format_args!(
                "narrowing {} to {} rejected: imag={:?}",
                self,
                target,
                self.imag()
            ));
            Err(ConversionError::new(target, self.to_string()))
        }
    }

    /// Narrow to any primitive numeric type
    ///
    /// Floats are rounded to the nearest representable value; integers
    /// truncate toward zero and saturate at the type's bounds.
    ///
    /// # Errors
    /// [`ConversionError`] when the imaginary part is not exactly zero.
    pub fn to_real<T>(&self) -> ConversionResult<T>
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>,
    {
        self.real_part_for(type_name::<T>()).map(|x| x.as_())
    }

    /// Narrow to `f64`
    pub fn to_f64(&self) -> ConversionResult<f64> {
        self.real_part_for("f64")
    }

    /// Narrow to `f32`
    pub fn to_f32(&self) -> ConversionResult<f32> {
        self.to_real::<f32>()
    }

    /// Narrow to half precision
    pub fn to_f16(&self) -> ConversionResult<f16> {
        self.real_part_for("f16").map(f16::from_f64)
    }

    /// Narrow to `i64`, truncating toward zero
    pub fn to_i64(&self) -> ConversionResult<i64> {
        self.to_real::<i64>()
    }

    /// Narrow to `i32`, truncating toward zero
    pub fn to_i32(&self) -> ConversionResult<i32> {
        self.to_real::<i32>()
    }

    /// Narrow to `u64`, truncating toward zero
    pub fn to_u64(&self) -> ConversionResult<u64> {
        self.to_real::<u64>()
    }
}

// ========== Dynamic equality ==========

impl Complex {
    /// Equality against a value of any type
    ///
    /// `Complex` operands compare componentwise and real operands are
    /// embedded first. Every other type is simply unequal.
    pub fn eq_dyn(&self, other: &dyn Any) -> bool {
        if let Some(z) = other.downcast_ref::<Complex>() {
            return self == z;
        }
        if let Some(x) = other.downcast_ref::<f16>() {
            return *self == x.to_c();
        }

        macro_rules! eq_real {
            ($($t:ty),*) => {
                $(
                    if let Some(x) = other.downcast_ref::<$t>() {
                        return *self == *x;
                    }
                )*
            };
        }
        eq_real!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

        false
    }
}

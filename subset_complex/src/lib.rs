//! SubsetComplex: a double-precision complex number value type
//!
//! This crate provides:
//!
//! - `Complex`, an immutable `Copy` pair of `f64` components
//! - Arithmetic against other `Complex` values and against plain reals,
//!   on either side of the operator
//! - Numerically stable `abs` (scaled hypotenuse), `sqrt` (half-angle form)
//!   and division (Smith's algorithm)
//! - `exp`, `ln`, `log2`, `log10`, polar form, conjugate and inverse
//! - Embedding of reals (`ToComplex`) and checked narrowing back to reals
//!   (`ConversionError`)
//! - Hashing that agrees with mixed real/complex equality

// Library code never prints; tracing goes through `trace::debug_log`.
#![deny(clippy::print_stderr)]

pub mod complex;
pub mod convert;
pub mod error;
pub mod format;
pub mod hash;
pub mod math;
pub mod ops;
pub mod trace;
pub mod transcendental;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use subset_complex::prelude::*;
///
/// let z = Complex::new(-4, 0).sqrt();
/// assert_eq!(z, 2.0f64.i());
/// ```
pub mod prelude {
    pub use super::complex::Complex;
    pub use super::convert::ToComplex;
    pub use super::error::{ConversionError, ConversionResult};
    pub use super::hash::hash_real;
}

pub use prelude::*;

//! Real-valued helpers used by `Complex`
//!
//! Thin wrappers over the `f64` intrinsics plus the scaled hypotenuse that
//! keeps `abs` finite when one component is far larger than the other.

// ========== Constants ==========

/// Natural logarithm of 2
pub const LN_2: f64 = std::f64::consts::LN_2;

/// Natural logarithm of 10
pub const LN_10: f64 = std::f64::consts::LN_10;

// ========== Hypotenuse ==========

/// Euclidean length of `(x, y)` without intermediate overflow or underflow
///
/// Factors out the larger magnitude: `max * sqrt(1 + (min / max)^2)`.
/// Infinity wins over NaN, matching C99 `hypot`.
pub fn hypot(x: f64, y: f64) -> f64 {
    let x = x.abs();
    let y = y.abs();
    if x.is_infinite() || y.is_infinite() {
        return f64::INFINITY;
    }
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    let (max, min) = if x >= y { (x, y) } else { (y, x) };
    if max == 0.0 {
        return 0.0;
    }
    let ratio = min / max;
    max * (1.0 + ratio * ratio).sqrt()
}

/// Squared absolute value
#[inline]
pub fn abs2(x: f64, y: f64) -> f64 {
    x * x + y * y
}

// ========== Trigonometry ==========

/// Point on the unit circle at `angle` radians, as `(cos, sin)`
#[inline]
pub fn cis(angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (cos, sin)
}

/// Arctangent of y/x in (-π, π]
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

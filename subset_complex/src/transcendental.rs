//! Exponential, logarithms and the principal square root

use crate::complex::Complex;
use crate::math::{self, LN_10, LN_2};

impl Complex {
    /// `e^z = e^real · (cos(imag) + i·sin(imag))`
    pub fn exp(&self) -> Complex {
        let scale = self.real().exp();
        let (cos, sin) = math::cis(self.imag());
        Complex::from_f64s(scale * cos, scale * sin)
    }

    /// Principal natural logarithm `ln|z| + i·phase(z)`
    pub fn ln(&self) -> Complex {
        Complex::from_f64s(self.abs().ln(), self.phase())
    }

    /// Alias of [`Complex::ln`]
    #[inline]
    pub fn log(&self) -> Complex {
        self.ln()
    }

    /// Base-2 logarithm
    pub fn log2(&self) -> Complex {
        self.ln() / LN_2
    }

    /// Base-10 logarithm
    pub fn log10(&self) -> Complex {
        self.ln() / LN_10
    }

    /// Principal square root (non-negative real part)
    ///
    /// Uses the half-angle identities on `r = |z|` so that neither component
    /// is formed by subtracting nearly equal numbers:
    ///
    /// - `re = sqrt((r + x) / 2)` when `x >= 0`, else `|y| / sqrt(2(r - x))`
    /// - `im = sqrt((r - x) / 2)` when `x <= 0`, else `|y| / sqrt(2(r + x))`
    ///
    /// The imaginary part takes the sign of `y`.
    pub fn sqrt(&self) -> Complex {
        let (x, y) = (self.real(), self.imag());
        let r = self.abs();

        let re = if x >= 0.0 {
            0.5 * (2.0 * (r + x)).sqrt()
        } else {
            y.abs() / (2.0 * (r - x)).sqrt()
        };

        let im = if x <= 0.0 {
            0.5 * (2.0 * (r - x)).sqrt()
        } else {
            y.abs() / (2.0 * (r + x)).sqrt()
        };

        if y < 0.0 {
            Complex::from_f64s(re, -im)
        } else {
            Complex::from_f64s(re, im)
        }
    }
}

//! Text forms of `Complex`
//!
//! - `Display`: `3.0 + 2.0i`, or `5.0 - 12.0i` when the imaginary part is
//!   negative
//! - `Debug`: the same, wrapped in parentheses: `(3.0 + 2.0i)`
//!
//! Components use the shortest round-trippable float text (`{:?}` on `f64`),
//! so whole numbers keep their `.0`.

use std::fmt;

use crate::complex::Complex;

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.real(), self.imag());
        if im >= 0.0 {
            write!(f, "{:?} + {:?}i", re, im)
        } else {
            write!(f, "{:?} - {:?}i", re, im.abs())
        }
    }
}

impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self)
    }
}

use std::ops::Mul;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Mul for Poly<T> {
    type Output = Self;

    /// Coefficient convolution, order-agnostic so it works on the
    /// descending-degree layout directly.
    fn mul(self, rhs: Self) -> Self {
        let mut out = vec![T::zero(); self.0.len() + rhs.0.len() - 1];
        for (i, &a) in self.0.iter().enumerate() {
            for (j, &b) in rhs.0.iter().enumerate() {
                out[i + j] = out[i + j] + a * b;
            }
        }
        Self(out)
    }
}

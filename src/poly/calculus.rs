use itertools::Itertools;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// First derivative.
    ///
    /// Each coefficient is scaled by its exponent and the constant term is
    /// dropped, keeping the descending-degree layout.
    ///
    /// ```
    /// use real_roots::poly;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.diff(), poly![2.0, 2.0]);
    /// ```
    #[must_use]
    pub fn diff(&self) -> Self {
        let degree = self.degree();

        // derivative of a constant is zero
        if degree == 0 {
            return Self(vec![T::zero()]);
        }

        let coeffs = self
            .0
            .iter()
            .enumerate()
            .take(degree)
            .map(|(i, &c)| {
                c * T::from_usize(degree - i).expect("degree too high to convert to T")
            })
            .collect_vec();
        Self(coeffs)
    }
}

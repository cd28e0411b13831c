use std::fmt;

use crate::RealScalar;

mod calculus;
mod impl_num;
pub mod roots;

/// A univariate polynomial as a list of real coefficients of descending
/// degree, so index 0 holds the leading coefficient.
///
/// Leading zero coefficients are kept as-is: the effective degree of such a
/// polynomial is lower than [`Poly::degree`] reports, and the root finder
/// dispatches on the reported degree. Callers are expected to supply a
/// non-zero leading coefficient.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<T>);

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from a slice of coefficients of descending degree.
    #[must_use]
    pub fn new(coeffs: &[T]) -> Self {
        debug_assert!(
            !coeffs.is_empty(),
            "a polynomial needs at least one coefficient"
        );
        Self(coeffs.to_vec())
    }

    /// Same as [`Poly::new`], but takes ownership of the vector.
    #[must_use]
    pub fn from_vec(coeffs: Vec<T>) -> Self {
        debug_assert!(
            !coeffs.is_empty(),
            "a polynomial needs at least one coefficient"
        );
        Self(coeffs)
    }

    /// Monic polynomial from its real roots.
    ///
    /// # Examples
    /// ```
    /// use real_roots::{poly, Poly};
    ///
    /// let p = Poly::from_roots(&[1.0, 2.0]);
    /// assert_eq!(p, poly![1.0, -3.0, 2.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[T]) -> Self {
        roots
            .iter()
            .map(|&r| Self(vec![T::one(), -r]))
            .fold(Self(vec![T::one()]), |acc, factor| acc * factor)
    }

    /// Degree of the polynomial, taken from the number of coefficients.
    ///
    /// Leading zeros are not trimmed, so this is the nominal degree of the
    /// coefficient list, not necessarily the effective degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        debug_assert!(!self.0.is_empty());
        self.0.len() - 1
    }

    /// Evaluate the polynomial at `x`.
    ///
    /// ```
    /// use real_roots::poly;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(1.0), 6.0);
    /// ```
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        // Horner's method: https://en.wikipedia.org/wiki/Horner%27s_method
        // coefficients are stored leading-first, so a single forward pass
        // accumulates highest powers first
        let mut eval = T::zero();
        for &c in &self.0 {
            eval = eval * x + c;
        }
        eval
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: RealScalar> fmt::Display for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;
        for (i, &c) in self.0.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match degree - i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*x")?,
                k => write!(f, "{c}*x^{k}")?,
            }
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{poly, Poly64};

    #[test]
    fn eval() {
        // 2x^3 - x + 5 at a few points
        let p = poly![2.0, 0.0, -1.0, 5.0];
        assert_eq!(p.eval(0.0), 5.0);
        assert_eq!(p.eval(1.0), 6.0);
        assert_eq!(p.eval(-2.0), -9.0);
    }

    #[test]
    fn from_roots() {
        let p = Poly64::from_roots(&[1.0, 2.0, 3.0]);
        assert_eq!(p, poly![1.0, -6.0, 11.0, -6.0]);
    }

    #[test]
    fn from_roots_empty() {
        assert_eq!(Poly64::from_roots(&[]), poly![1.0]);
    }

    #[test]
    fn degree() {
        assert_eq!(poly![3.0].degree(), 0);
        assert_eq!(poly![1.0, -3.0, 2.0].degree(), 2);
    }

    #[test]
    fn display() {
        let p = poly![1.0, -3.0, 2.0];
        assert_eq!(p.to_string(), "1*x^2 + -3*x + 2".to_string());
        assert_eq!(poly![0.0].to_string(), "0".to_string());
        assert_eq!(poly![2.0, 0.0, 1.0].to_string(), "2*x^2 + 1".to_string());
    }
}

use crate::{Poly, RealScalar};

mod initial_guess;
mod newton;
pub use initial_guess::{initial_guesses_grid, initial_guesses_random};
pub use newton::newton;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error<T> {
    /// The iteration budget ran out. Carries the last estimate.
    #[error("root finder did not converge within the given constraints")]
    NoConverge(T),

    /// The derivative is numerically zero at the carried estimate, so no
    /// Newton step can be taken. Signals a stationary point or a numerically
    /// unstable region.
    #[error("derivative is numerically zero, root finder cannot proceed")]
    FlatDerivative(T),

    #[error("unexpected error while running root finder")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error<T>>;

/// A real-valued function paired with its first derivative.
///
/// The Newton iteration only needs these two capabilities, so it is generic
/// over this trait rather than over polynomials. A pair of closures
/// `(f, df)` implements it, which keeps the iteration usable for
/// non-polynomial functions.
pub trait RealFunction<T: RealScalar> {
    fn eval(&self, x: T) -> T;
    fn derivative(&self, x: T) -> T;
}

impl<T: RealScalar, F, G> RealFunction<T> for (F, G)
where
    F: Fn(T) -> T,
    G: Fn(T) -> T,
{
    fn eval(&self, x: T) -> T {
        (self.0)(x)
    }

    fn derivative(&self, x: T) -> T {
        (self.1)(x)
    }
}

/// A polynomial bundled with its precomputed first derivative, so repeated
/// derivative evaluations don't re-derive the coefficients.
pub struct Differentiated<T: RealScalar> {
    poly: Poly<T>,
    diff: Poly<T>,
}

impl<T: RealScalar> Differentiated<T> {
    #[must_use]
    pub fn new(poly: Poly<T>) -> Self {
        let diff = poly.diff();
        Self { poly, diff }
    }
}

impl<T: RealScalar> RealFunction<T> for Differentiated<T> {
    fn eval(&self, x: T) -> T {
        self.poly.eval(x)
    }

    fn derivative(&self, x: T) -> T {
        self.diff.eval(x)
    }
}

/// Tunable tolerances for the root finder.
#[derive(Debug, Clone, Copy)]
pub struct Tolerances<T> {
    /// Newton convergence threshold on `|f(x)|`. Default `1e-10`.
    pub convergence: T,

    /// Independent acceptance check on converged candidates, deliberately
    /// looser than `convergence`. Default `1e-8`.
    pub verification: T,

    /// Relative tolerance under which two roots count as duplicates.
    /// Default `1e-5`.
    pub duplicate_relative: T,

    /// Absolute tolerance under which two roots count as duplicates.
    /// Default `1e-8`.
    pub duplicate_absolute: T,
}

impl<T: RealScalar> Default for Tolerances<T> {
    fn default() -> Self {
        Self {
            convergence: T::from_f64(1e-10).expect("overflow"),
            verification: T::from_f64(1e-8).expect("overflow"),
            duplicate_relative: T::from_f64(1e-5).expect("overflow"),
            duplicate_absolute: T::from_f64(1e-8).expect("overflow"),
        }
    }
}

/// Check a candidate root against `f` with an independent evaluation.
///
/// Guards against accepting a value the iteration considered close enough
/// under floating-point noise but that is not actually a good root.
#[must_use]
pub fn verify_root<T: RealScalar>(f: &impl RealFunction<T>, root: T, tolerance: T) -> bool {
    f.eval(root).abs() < tolerance
}

fn is_duplicate<T: RealScalar>(roots: &[T], candidate: T, tolerances: &Tolerances<T>) -> bool {
    roots.iter().any(|r| {
        candidate.relative_eq(
            r,
            tolerances.duplicate_absolute,
            tolerances.duplicate_relative,
        )
    })
}

impl<T: RealScalar> Poly<T> {
    /// A convenient way of finding real roots, with a pre-configured root
    /// finder: default tolerances, 1000 iterations per guess, and an evenly
    /// spaced guess grid spanning `[-10, 10]` with a density scaled to the
    /// degree.
    ///
    /// Use [`Poly::real_roots`] for control over guesses and tolerances.
    ///
    /// ```
    /// use real_roots::Poly64;
    ///
    /// let p = Poly64::from_roots(&[1.0, 2.0, 3.0]);
    /// assert_eq!(p.roots().len(), 3);
    /// ```
    #[must_use]
    pub fn roots(&self) -> Vec<T> {
        let guesses = initial_guesses_grid(self.degree(), T::from_f64(10.0).expect("overflow"));
        self.real_roots(&guesses, 1000, &Tolerances::default())
    }

    /// Find real roots, seeding one Newton run per guess.
    ///
    /// Degree 1 and 2 take closed-form fast paths and ignore the guesses
    /// entirely. An empty result means no real roots were found; that is not
    /// an error. Guess order decides which duplicate survives: the earliest
    /// guess to discover a root owns it.
    #[must_use]
    pub fn real_roots(&self, guesses: &[T], max_iter: usize, tolerances: &Tolerances<T>) -> Vec<T> {
        match self.degree() {
            0 => vec![],
            1 => self.linear_roots(),
            2 => self.quadratic_roots(),
            _ => self.newton_roots(guesses, max_iter, tolerances),
        }
    }

    fn newton_roots(&self, guesses: &[T], max_iter: usize, tolerances: &Tolerances<T>) -> Vec<T> {
        debug_assert!(self.degree() >= 3);

        let f = Differentiated::new(self.clone());
        let mut roots: Vec<T> = Vec::new();
        for &guess in guesses {
            let root = match newton(&f, guess, tolerances.convergence, max_iter) {
                Ok(root) => root,
                Err(err) => {
                    log::trace!("guess {guess} produced no root: {err}");
                    continue;
                }
            };
            if !verify_root(&f, root, tolerances.verification) {
                log::trace!("rejecting {root}, residual above verification tolerance");
                continue;
            }
            if is_duplicate(&roots, root, tolerances) {
                continue;
            }
            roots.push(root);
        }
        log::debug!("{{guesses: {}, accepted: {}}}", guesses.len(), roots.len());
        roots
    }

    fn linear_roots(&self) -> Vec<T> {
        debug_assert_eq!(self.degree(), 1);

        let a = self.0[0];
        let b = self.0[1];
        vec![-b / a]
    }

    /// Quadratic formula
    fn quadratic_roots(&self) -> Vec<T> {
        debug_assert_eq!(self.degree(), 2);

        let a = self.0[0];
        let b = self.0[1];
        let c = self.0[2];
        let two = T::from_u8(2).expect("overflow");
        let four = T::from_u8(4).expect("overflow");

        let discriminant = b * b - four * a * c;
        if discriminant < T::zero() {
            return vec![];
        }
        if discriminant.is_zero() {
            return vec![-b / (two * a)];
        }
        let plus_minus_term = discriminant.sqrt();
        vec![
            (-b + plus_minus_term) / (two * a),
            (-b - plus_minus_term) / (two * a),
        ]
    }
}

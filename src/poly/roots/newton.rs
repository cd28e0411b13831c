use super::{Error, RealFunction};
use crate::RealScalar;

/// Below this magnitude the derivative is treated as vanished and the
/// iteration gives up rather than dividing by it. Fixed, unlike the
/// convergence tolerance, which is caller-supplied.
const DERIVATIVE_EPSILON: f64 = 1e-10;

/// Find a single root of `f` using Newton's method, starting from
/// `initial_guess`.
///
/// Converges when `|f(x)| < epsilon`. A guess that already satisfies the
/// convergence check returns immediately without consuming any iterations.
/// After each step the new estimate is checked before another iteration is
/// spent on it.
///
/// # Errors
/// - [`Error::FlatDerivative`] if `|f'(x)|` drops below `1e-10`, which makes
///   the next step numerically meaningless.
/// - [`Error::NoConverge`] if `max_iter` iterations pass without convergence.
///
/// Both carry the last estimate, for callers that want to inspect or polish
/// it anyway.
pub fn newton<T: RealScalar>(
    f: &impl RealFunction<T>,
    initial_guess: T,
    epsilon: T,
    max_iter: usize,
) -> super::Result<T> {
    log::trace!(
        "starting with arguments: {{initial_guess: {initial_guess}, epsilon: {epsilon}, max_iter: {max_iter}}}"
    );

    let derivative_epsilon = T::from_f64(DERIVATIVE_EPSILON).expect("overflow");
    let mut x = initial_guess;
    for i in 0..max_iter {
        let fx = f.eval(x);
        if fx.abs() < epsilon {
            log::trace!("converged to {x} after {i} iterations");
            return Ok(x);
        }

        let dfx = f.derivative(x);
        if dfx.abs() < derivative_epsilon {
            log::trace!("stopping at {x}, derivative is flat");
            return Err(Error::FlatDerivative(x));
        }

        x = x - fx / dfx;

        // the stepped estimate gets its convergence check right away, before
        // it costs another iteration
        if f.eval(x).abs() < epsilon {
            log::trace!("converged to {x} after {} iterations", i + 1);
            return Ok(x);
        }
    }
    log::trace!("did not converge within {max_iter} iterations");
    Err(Error::NoConverge(x))
}

use itertools::Itertools;

use crate::RealScalar;

/// Evenly spaced initial guesses spanning `[-span, span]`.
///
/// The density scales with the degree: `10 * degree + 1` points, so higher
/// degree polynomials get a denser grid for their (potentially) more numerous
/// roots.
#[must_use]
pub fn initial_guesses_grid<T: RealScalar>(degree: usize, span: T) -> Vec<T> {
    let count = 10 * degree + 1;
    if count == 1 {
        return vec![-span];
    }

    let step = (span + span) / T::from_usize(count - 1).expect("overflow");
    (0..count)
        .map(|i| -span + step * T::from_usize(i).expect("overflow"))
        .collect_vec()
}

/// Fill `out` with uniformly distributed guesses in `[-span, span]`,
/// reproducible from `seed`.
pub fn initial_guesses_random<T: RealScalar>(seed: u64, span: T, out: &mut [T]) {
    let mut rng = fastrand::Rng::with_seed(seed);
    for y in out {
        let offset = T::from_f64(rng.f64()).expect("overflow");
        *y = offset * (span + span) - span;
    }
}

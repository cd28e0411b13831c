use approx::assert_relative_eq;
use real_roots::{
    poly,
    roots::{initial_guesses_grid, Tolerances},
    Poly64,
};

fn root_near(roots: &[f64], target: f64, tolerance: f64) -> Option<f64> {
    roots.iter().copied().find(|r| (r - target).abs() < tolerance)
}

/// Every returned root must hold up under an independent evaluation.
#[test]
fn verification_invariant() {
    let polys = vec![
        poly![1.0, -3.0, 2.0],
        Poly64::from_roots(&[1.0, 2.0, 3.0]),
        Poly64::from_roots(&[-4.0, -1.0, 0.0, 2.0, 5.0]),
        poly![2.0, 0.0, -3.0, 1.0],
    ];
    for p in polys {
        for r in p.roots() {
            assert!(p.eval(r).abs() < 1e-8, "|p({r})| = {}", p.eval(r).abs());
        }
    }
}

#[test]
fn quadratic_two_roots() {
    let roots = poly![1.0, -3.0, 2.0].roots();
    assert_eq!(roots.len(), 2);
    assert!(root_near(&roots, 1.0, 1e-12).is_some());
    assert!(root_near(&roots, 2.0, 1e-12).is_some());
}

#[test]
fn quadratic_negative_discriminant_is_empty() {
    assert!(poly![1.0, 2.0, 5.0].roots().is_empty());
}

#[test]
fn quadratic_double_root_reported_once() {
    assert_eq!(poly![1.0, -2.0, 1.0].roots(), vec![1.0]);
}

#[test]
fn cubic_three_roots_no_duplicates() {
    // (x - 1)(x - 2)(x - 3)
    let p = Poly64::from_roots(&[1.0, 2.0, 3.0]);
    let roots = p.roots();
    assert_eq!(roots.len(), 3);
    for target in [1.0, 2.0, 3.0] {
        let r = root_near(&roots, target, 1e-6).expect("missing root");
        assert_relative_eq!(r, target, epsilon = 1e-8);
    }
}

#[test]
fn idempotent() {
    let p = Poly64::from_roots(&[-2.0, 0.5, 4.0]);
    assert_eq!(p.roots(), p.roots());
}

/// Permuting the guesses may change which converged value is kept for a
/// near-duplicate, but never the set of distinct roots discovered.
#[test]
fn guess_order_only_changes_ownership() {
    let p = Poly64::from_roots(&[-4.0, 0.5, 3.0, 7.0]);
    let grid = initial_guesses_grid(p.degree(), 10.0);
    let mut reversed = grid.clone();
    reversed.reverse();

    let forward = p.real_roots(&grid, 1000, &Tolerances::default());
    let backward = p.real_roots(&reversed, 1000, &Tolerances::default());

    assert_eq!(forward.len(), backward.len());
    for r in &forward {
        assert!(
            backward.iter().any(|s| (r - s).abs() < 1e-5),
            "{r} missing from {backward:?}"
        );
    }
}

/// A guess sitting exactly on a root converges before any iteration is spent.
#[test]
fn guess_exactly_at_root() {
    let p = Poly64::from_roots(&[1.0, 2.0, 3.0]);
    let roots = p.real_roots(&[2.0], 1, &Tolerances::default());
    assert_eq!(roots, vec![2.0]);
}

/// Cubics with well-separated roots are fully resolved by the default grid.
#[test]
fn random_separated_cubics() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..25 {
        let mut expected: Vec<f64> = Vec::new();
        while expected.len() < 3 {
            let r = f64::from(rng.i32(-5..=5));
            if !expected.iter().any(|&x| (x - r).abs() < 0.5) {
                expected.push(r);
            }
        }

        let p = Poly64::from_roots(&expected);
        let found = p.roots();
        assert_eq!(found.len(), 3, "roots {expected:?} -> found {found:?}");
        for r in expected {
            assert!(
                root_near(&found, r, 1e-6).is_some(),
                "{r} missing from {found:?}"
            );
        }
    }
}

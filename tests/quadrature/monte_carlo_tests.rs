use approx::assert_abs_diff_eq;
use numlab::quadrature::errors::QuadratureError;
use numlab::quadrature::{midpoint, monte_carlo};
use rand::SeedableRng;
use rand::rngs::StdRng;

type TestResult = Result<(), QuadratureError>;

fn integrand(x: f64) -> f64 {
    1.0 / (12.0 * x * x + 0.5).sqrt()
}

#[test]
fn same_seed_same_estimate() -> TestResult {
    let mut r1 = StdRng::seed_from_u64(7);
    let mut r2 = StdRng::seed_from_u64(7);
    let a = monte_carlo(integrand, 0.6, 1.4, 500, &mut r1)?;
    let b = monte_carlo(integrand, 0.6, 1.4, 500, &mut r2)?;

    assert_eq!(a, b);
    assert_eq!(a.value.to_bits(), b.value.to_bits());
    Ok(())
}

#[test]
fn consecutive_draws_differ() -> TestResult {
    let mut rng = StdRng::seed_from_u64(7);
    let a = monte_carlo(integrand, 0.6, 1.4, 500, &mut rng)?;
    let b = monte_carlo(integrand, 0.6, 1.4, 500, &mut rng)?;

    assert_ne!(a.value, b.value);
    Ok(())
}

#[test]
fn estimates_cluster_within_standard_error() -> TestResult {
    let reference = midpoint(integrand, 0.6, 1.4, 1000)?;

    let mut sum = 0.0;
    let seeds = 40;
    for seed in 0..seeds {
        let mut rng = StdRng::seed_from_u64(seed);
        let est = monte_carlo(integrand, 0.6, 1.4, 1000, &mut rng)?;
        assert!(est.std_error > 0.0);
        assert!((est.value - reference).abs() < 6.0 * est.std_error);
        sum += est.value;
    }

    // the mean of 40 runs has a standard error around 3e-4
    assert_abs_diff_eq!(sum / seeds as f64, reference, epsilon = 2e-3);
    Ok(())
}

#[test]
fn constant_integrand_has_zero_error() -> TestResult {
    let mut rng = StdRng::seed_from_u64(1);
    let est = monte_carlo(|_x: f64| 2.0, -1.0, 3.0, 100, &mut rng)?;

    assert_abs_diff_eq!(est.value, 8.0, epsilon = 1e-12);
    assert_abs_diff_eq!(est.std_error, 0.0, epsilon = 1e-12);
    assert_eq!(est.n_samples, 100);
    Ok(())
}

#[test]
fn samples_stay_inside_bounds() -> TestResult {
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = Vec::new();
    monte_carlo(|x: f64| { seen.push(x); x }, 0.6, 1.4, 200, &mut rng)?;

    assert_eq!(seen.len(), 200);
    assert!(seen.iter().all(|&x| (0.6..1.4).contains(&x)));
    Ok(())
}

#[test]
fn zero_samples_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = monte_carlo(integrand, 0.0, 1.0, 0, &mut rng).unwrap_err();
    assert!(matches!(err, QuadratureError::ZeroSubdivisions));
}

#[test]
fn overflowing_width_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = monte_carlo(|_x: f64| 1.0, -1e308, 1e308, 10, &mut rng).unwrap_err();
    assert!(matches!(err, QuadratureError::InvalidBounds { a, b } if a == -1e308 && b == 1e308));
}

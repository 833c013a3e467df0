use numlab::quadrature::errors::QuadratureError;
use numlab::quadrature::{convergence_table, midpoint, trapezoid, DEFAULT_COUNTS};
use rand::SeedableRng;
use rand::rngs::StdRng;

type TestResult = Result<(), QuadratureError>;

fn integrand(x: f64) -> f64 {
    1.0 / (12.0 * x * x + 0.5).sqrt()
}

#[test]
fn one_row_per_count() -> TestResult {
    let mut rng = StdRng::seed_from_u64(11);
    let rows = convergence_table(integrand, 0.6, 1.4, &DEFAULT_COUNTS, &mut rng)?;

    assert_eq!(rows.len(), 5);
    let ns: Vec<usize> = rows.iter().map(|r| r.n).collect();
    assert_eq!(ns, vec![10, 20, 50, 100, 1000]);

    for r in &rows {
        assert_eq!(r.midpoint, midpoint(integrand, 0.6, 1.4, r.n)?);
        assert_eq!(r.trapezoid, trapezoid(integrand, 0.6, 1.4, r.n)?);
        assert!(r.monte_carlo.is_finite());
    }
    Ok(())
}

#[test]
fn seeded_table_is_reproducible() -> TestResult {
    let a = convergence_table(integrand, 0.6, 1.4, &DEFAULT_COUNTS, &mut StdRng::seed_from_u64(5))?;
    let b = convergence_table(integrand, 0.6, 1.4, &DEFAULT_COUNTS, &mut StdRng::seed_from_u64(5))?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn empty_counts_give_empty_table() -> TestResult {
    let rows = convergence_table(integrand, 0.6, 1.4, &[], &mut StdRng::seed_from_u64(0))?;
    assert!(rows.is_empty());
    Ok(())
}

use approx::assert_abs_diff_eq;
use numlab::root_finding::config::ScanCfg;
use numlab::root_finding::errors::RootFindingError;
use numlab::root_finding::refine::{refine_bracket, RefineCfg};
use numlab::root_finding::scan::{scan_brackets, Bracket};

type TestResult = Result<(), RootFindingError>;

#[test]
fn scan_then_refine_cos_minus_x() -> TestResult {
    let f = |x: f64| x.cos() - x;

    let brackets = scan_brackets(f, 0.0, 6.0, ScanCfg::new())?;
    assert_eq!(brackets.len(), 1);

    let summary = refine_bracket(f, brackets[0], RefineCfg::new().set_eps(1e-4)?)?;
    assert_eq!(summary.bracket, Bracket::new(0.5, 1.0)?);
    assert_abs_diff_eq!(summary.bisection.root, 0.739085, epsilon = 1e-4);
    assert_abs_diff_eq!(summary.fixed_point.root().unwrap(), 0.739085, epsilon = 1e-3);
    assert_abs_diff_eq!(summary.newton.root().unwrap(), 0.739085, epsilon = 1e-6);

    assert_eq!(summary.fixed_point.trace[0].x, 0.75);
    assert_eq!(summary.newton.trace[0].x, 0.75);
    Ok(())
}

#[test]
fn non_convergent_open_method_does_not_fail_the_run() -> TestResult {
    // x + f(x) = 3x - 2 diverges away from the root at 1
    let f = |x: f64| 2.0 * x - 2.0;
    let cfg = RefineCfg::new().set_max_iter(40)?;
    let summary = refine_bracket(f, Bracket::new(0.0, 1.5)?, cfg)?;

    assert!(!summary.fixed_point.converged());
    assert!(summary.newton.converged());
    assert_abs_diff_eq!(summary.bisection.root, 1.0, epsilon = 1e-4);
    Ok(())
}

#[test]
fn bisection_failure_propagates() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let err = refine_bracket(f, Bracket::new(-1.0, 1.0)?, RefineCfg::new()).unwrap_err();

    assert!(matches!(err, RootFindingError::NoSignChange { .. }));
    Ok(())
}

#[test]
fn huge_bracket_refines_without_overflow() -> TestResult {
    let f       = |x: f64| x;
    let summary = refine_bracket(f, Bracket::new(-1e308, 1e308)?, RefineCfg::new())?;

    assert!(summary.bisection.root.is_finite());
    assert_eq!(summary.fixed_point.root(), Some(0.0));
    assert_eq!(summary.newton.root(), Some(0.0));
    Ok(())
}

use approx::assert_abs_diff_eq;
use numlab::ode::config::MAX_STEPS;
use numlab::ode::errors::OdeError;
use numlab::ode::{integrate, Euler, OdeCfg, RungeKutta4, Stepper};

type TestResult = Result<(), OdeError>;

#[test]
fn grid_by_repeated_addition() -> TestResult {
    let cfg = OdeCfg::new(1.0, 0.0)?.set_step(0.1)?.set_steps(10)?;
    let xs  = cfg.grid();

    assert_eq!(xs.len(), 11);
    let mut x: f64 = 1.0;
    for xi in &xs[1..] {
        x += 0.1;
        assert_eq!(xi.to_bits(), x.to_bits());
    }
    Ok(())
}

#[test]
fn spanning_truncates_step_count() -> TestResult {
    assert_eq!(OdeCfg::spanning(1.0, 0.0, 2.0, 0.2)?.steps(), 5);
    assert_eq!(OdeCfg::spanning(0.0, 0.0, 1.0, 0.3)?.steps(), 3);
    assert_eq!(OdeCfg::spanning(0.0, 0.0, 0.0, 0.5)?.steps(), 0);
    Ok(())
}

#[test]
fn single_step_formulas() {
    let mut f = |x: f64, y: f64| x + y;

    assert_eq!(Euler::advance(&mut f, 0.0, 1.0, 0.1), 1.1);

    // k1 = 1, k2 = 1.1, k3 = 1.105, k4 = 1.2105
    let expected = 1.0 + 0.1 * (1.0 + 2.0 * 1.1 + 2.0 * 1.105 + 1.2105) / 6.0;
    assert_abs_diff_eq!(RungeKutta4::advance(&mut f, 0.0, 1.0, 0.1), expected, epsilon = 1e-15);
}

#[test]
fn trajectory_shape_and_names() -> TestResult {
    let cfg = OdeCfg::new(0.0, 1.0)?.set_step(0.25)?.set_steps(4)?;
    let e = integrate::<Euler, _>(|_x, y| y, &cfg);
    let r = integrate::<RungeKutta4, _>(|_x, y| y, &cfg);

    assert_eq!(e.method, "euler");
    assert_eq!(r.method, "rk4");
    assert_eq!(e.len(), 5);
    assert_eq!(e.x, r.x);
    assert_eq!(e.y[0], 1.0);
    assert_abs_diff_eq!(e.y[4], 1.25_f64.powi(4), epsilon = 1e-12);
    assert_abs_diff_eq!(r.y[4], 1.0_f64.exp(), epsilon = 1e-4);
    Ok(())
}

#[test]
fn zero_steps_keeps_initial_point() -> TestResult {
    let cfg = OdeCfg::new(2.0, -3.0)?;
    let t = integrate::<RungeKutta4, _>(|x, y| x * y, &cfg);

    assert_eq!(t.points().collect::<Vec<_>>(), vec![(2.0, -3.0)]);
    Ok(())
}

#[test]
fn non_finite_values_propagate() -> TestResult {
    let cfg = OdeCfg::new(0.0, 1.0)?.set_step(0.5)?.set_steps(4)?;
    let t = integrate::<Euler, _>(|x: f64, _y| if x >= 1.0 { f64::NAN } else { 1.0 }, &cfg);

    assert_eq!(t.len(), 5);
    assert_eq!(t.first_non_finite(), Some(3));
    assert!(t.y[3..].iter().all(|v| v.is_nan()));
    Ok(())
}

#[test]
fn invalid_configuration() {
    assert!(matches!(OdeCfg::new(0.0, 0.0).and_then(|c| c.set_step(0.0)), Err(OdeError::InvalidStep { .. })));
    assert!(matches!(OdeCfg::new(0.0, 0.0).and_then(|c| c.set_step(-0.1)), Err(OdeError::InvalidStep { .. })));
    assert!(matches!(OdeCfg::new(f64::NAN, 0.0), Err(OdeError::InvalidInitial { .. })));
    assert!(matches!(OdeCfg::spanning(1.0, 0.0, 0.5, 0.1), Err(OdeError::InvalidSpan { .. })));
}

#[test]
fn oversized_step_count_rejected() -> TestResult {
    let err = OdeCfg::spanning(0.0, 0.0, 1e10, 1e-10).unwrap_err();
    assert!(matches!(err, OdeError::TooManySteps { max: MAX_STEPS, .. }));

    let err = OdeCfg::spanning(-1e308, 0.0, 1e308, 1.0).unwrap_err();
    assert!(matches!(err, OdeError::TooManySteps { requested, .. } if requested.is_infinite()));

    let err = OdeCfg::new(0.0, 0.0)?.set_steps(MAX_STEPS + 1).unwrap_err();
    assert!(matches!(err, OdeError::TooManySteps { .. }));

    assert_eq!(OdeCfg::new(0.0, 0.0)?.set_steps(MAX_STEPS)?.steps(), MAX_STEPS);
    Ok(())
}

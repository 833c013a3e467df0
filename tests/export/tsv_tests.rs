use std::error::Error;
use std::fs;

use numlab::export::{save_tsv, write_tsv, ExportError, Field, TabularRecords};
use numlab::interpolation::lagrange::{interpolate, LagrangeCfg};
use numlab::ode::{compare, OdeCfg};
use numlab::quadrature::QuadratureRow;
use numlab::regression::PowerFit;
use numlab::root_finding::bisection::{bisection, BisectionCfg};
use numlab::root_finding::fixed_point::{fixed_point, FixedPointCfg};
use numlab::root_finding::newton::{newton, NewtonCfg};
use numlab::root_finding::scan::Bracket;

type TestResult = Result<(), Box<dyn Error>>;

fn render<T: TabularRecords + ?Sized>(table: &T) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    write_tsv(&mut buf, table)?;
    Ok(String::from_utf8(buf)?)
}

#[test]
fn quadrature_rows_keep_integer_counts() -> TestResult {
    let rows = [
        QuadratureRow { n: 10,   midpoint: 0.5,       trapezoid: 0.25, monte_carlo: 1.0 / 3.0 },
        QuadratureRow { n: 1000, midpoint: 0.1234567, trapezoid: 2.0,  monte_carlo: -1.5 },
    ];
    let text = render(rows.as_slice())?;

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec![
        "N\tmidpoint\ttrapezoid\tmonte_carlo",
        "10\t0.500000\t0.250000\t0.333333",
        "1000\t0.123457\t2.000000\t-1.500000",
    ]);
    Ok(())
}

#[test]
fn power_fit_single_row() -> TestResult {
    let fit  = PowerFit { a: 3.0, b: 2.0, r_squared: 1.0, n: 4 };
    let text = render(&fit)?;
    assert_eq!(text, "a\tb\tR2\n3.000000\t2.000000\t1.000000\n");
    Ok(())
}

#[test]
fn bisection_trace_one_line_per_step() -> TestResult {
    let res  = bisection(|x: f64| x.cos() - x, Bracket::new(0.5, 1.0)?, BisectionCfg::new().set_eps(1e-4)?)?;
    let text = render(&res)?;

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("a\tb\tc\tf(c)"));
    assert_eq!(lines.count(), res.trace.len());
    Ok(())
}

#[test]
fn open_method_traces_one_line_per_step() -> TestResult {
    let f = |x: f64| x.cos() - x;

    let fp   = fixed_point(f, 0.75, FixedPointCfg::new())?;
    let text = render(&fp)?;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("x_n\tx_n+1"));
    assert_eq!(lines.next(), Some(format!("{:.6}\t{:.6}", 0.75, fp.trace[0].x_next).as_str()));
    assert_eq!(text.lines().count(), fp.trace.len() + 1);

    let nt   = newton(f, 0.75, NewtonCfg::new())?;
    let text = render(&nt)?;
    assert!(text.starts_with("x_n\tx_n+1\n0.750000\t"));
    assert_eq!(text.lines().count(), nt.trace.len() + 1);
    Ok(())
}

#[test]
fn lagrange_report_columns() -> TestResult {
    let cfg = LagrangeCfg::new()
        .set_x(&[1.0, 2.0, 3.0])?
        .set_y(&[1.0, 4.0, 9.0])?
        .set_x_eval(&[1.5])?;
    let text = render(&interpolate(cfg)?)?;
    assert_eq!(text, "x\tP(x)\n1.500000\t2.250000\n");
    Ok(())
}

#[test]
fn ode_exact_column_is_optional() -> TestResult {
    let cfg = OdeCfg::spanning(0.0, 1.0, 1.0, 0.5)?;

    let with = compare(|_x: f64, y: f64| y, &cfg, Some(|x: f64| x.exp()));
    let text = render(&with)?;
    assert!(text.starts_with("x\teuler\trk4\texact\n"));
    assert_eq!(text.lines().count(), 4);

    let without = compare(|_x: f64, y: f64| y, &cfg, None::<fn(f64) -> f64>);
    let text = render(&without)?;
    assert!(text.starts_with("x\teuler\trk4\n"));
    assert!(text.lines().nth(1).is_some_and(|l| l == "0.000000\t1.000000\t1.000000"));
    Ok(())
}

struct Ragged;

impl TabularRecords for Ragged {
    fn headers(&self) -> Vec<&'static str> { vec!["x", "y"] }

    fn rows(&self) -> Vec<Vec<Field>> {
        vec![
            vec![Field::Real(1.0), Field::Real(2.0)],
            vec![Field::Real(3.0)],
        ]
    }
}

#[test]
fn ragged_rows_rejected() {
    let mut buf = Vec::new();
    let err = write_tsv(&mut buf, &Ragged).unwrap_err();
    assert!(matches!(err, ExportError::RaggedRow { row: 1, got: 1, expected: 2 }));
}

#[test]
fn save_to_file() -> TestResult {
    let dir  = tempfile::tempdir()?;
    let path = dir.path().join("fit.tsv");

    save_tsv(&path, &PowerFit { a: 1.0, b: 0.5, r_squared: 0.75, n: 2 })?;
    let text = fs::read_to_string(&path)?;
    assert_eq!(text, "a\tb\tR2\n1.000000\t0.500000\t0.750000\n");
    Ok(())
}

#[test]
fn save_into_missing_directory_fails() -> TestResult {
    let dir  = tempfile::tempdir()?;
    let path = dir.path().join("missing").join("fit.tsv");

    let err = save_tsv(&path, &PowerFit { a: 1.0, b: 1.0, r_squared: 1.0, n: 2 }).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
    Ok(())
}

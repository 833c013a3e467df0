//! Runs the lab tool scenarios end to end and logs their tables.
//!
//! Usage: `numlab [loglevel] [output_dir]`. When `output_dir` is given each 
//! table is also saved there as a `.tsv` file.

use std::error::Error;
use std::path::PathBuf;

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use numlab::export::{save_tsv, TabularRecords};
use numlab::input::parse_number_list;
use numlab::interpolation::grid::{node_span, uniform, TABLE_SEGMENTS};
use numlab::interpolation::lagrange::{interpolate, LagrangeCfg};
use numlab::logging::init_logger;
use numlab::ode::{compare, OdeCfg};
use numlab::quadrature::{convergence_table, DEFAULT_COUNTS};
use numlab::regression::fit_power_law;
use numlab::root_finding::config::ScanCfg;
use numlab::root_finding::refine::{refine_bracket, RefineCfg};
use numlab::root_finding::scan::scan_brackets;


fn save<T: TabularRecords + ?Sized>(dir: &Option<PathBuf>, name: &str, table: &T) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = dir {
        save_tsv(dir.join(name), table)?;
    }
    Ok(())
}


fn roots(out: &Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let f = |x: f64| x.cos() - x;

    let brackets = scan_brackets(f, 0.0, 6.0, ScanCfg::new())?;
    if brackets.is_empty() {
        info!("no roots found on [0, 6]");
        return Ok(());
    }
    for (i, bracket) in brackets.into_iter().enumerate() {
        let summary = refine_bracket(f, bracket, RefineCfg::new().set_eps(1e-4)?)?;
        info!(
            "[{:.2}, {:.2}] bisection x={:.6} | fixed point {} | newton {}",
            bracket.low(), bracket.high(), summary.bisection.root,
            summary.fixed_point.root().map_or("did not converge".into(), |r| format!("x={r:.6}")),
            summary.newton.root().map_or("did not converge".into(), |r| format!("x={r:.6}")),
        );
        save(out, &format!("bisection_{i}.tsv"), &summary.bisection)?;
        save(out, &format!("fixed_point_{i}.tsv"), &summary.fixed_point)?;
        save(out, &format!("newton_{i}.tsv"), &summary.newton)?;
    }
    Ok(())
}


fn integral(out: &Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let f = |x: f64| 1.0 / (12.0 * x * x + 0.5).sqrt();
    let mut rng = StdRng::seed_from_u64(2024);

    let rows = convergence_table(f, 0.6, 1.4, &DEFAULT_COUNTS, &mut rng)?;
    for r in &rows {
        info!("N={:<5} midpoint={:.6} trapezoid={:.6} monte_carlo={:.6}", r.n, r.midpoint, r.trapezoid, r.monte_carlo);
    }
    save(out, "quadrature.tsv", rows.as_slice())
}


fn regression(out: &Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let x = parse_number_list("1, 2, 3, 4, 5, 6, 7, 8")?;
    let y = parse_number_list("56.9, 67.3, 81.6, 201, 240, 474, 490, 518")?;

    let fit = fit_power_law(&x, &y)?;
    info!("y = {:.6} * x^{:.6}, R² = {:.6}", fit.a, fit.b, fit.r_squared);
    save(out, "regression.tsv", &fit)
}


fn lagrange(out: &Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let x = parse_number_list("1, 2, 3, 4, 5")?;
    let y = parse_number_list("1, 4, 9, 16, 25")?;

    let Some((lo, hi)) = node_span(&x) else { return Ok(()) };
    let x_eval = uniform(lo, hi, TABLE_SEGMENTS)?;
    let cfg = LagrangeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let report = interpolate(cfg)?;
    for (xq, yq) in report.x_eval.iter().zip(&report.evaluated) {
        info!("P({xq:.6}) = {yq:.6}");
    }
    save(out, "lagrange.tsv", &report)
}


fn ode(out: &Option<PathBuf>, h: f64) -> Result<(), Box<dyn Error>> {
    let f = |x: f64, y: f64| (1.0 + y) / x.tan();
    let c = 1.0 / 1.0_f64.sin();
    let exact = move |x: f64| c * x.sin() - 1.0;

    let cfg = OdeCfg::spanning(1.0, 0.0, 2.0, h)?;
    let cmp = compare(f, &cfg, Some(exact));
    let exact = cmp.exact.as_deref().unwrap_or_default();
    for (i, x) in cmp.x().iter().enumerate() {
        info!(
            "x={x:.6} euler={:.6} rk4={:.6} exact={}",
            cmp.euler.y[i], cmp.rk4.y[i],
            exact.get(i).map_or("-".into(), |e| format!("{e:.6}")),
        );
    }
    save(out, &format!("ode_h{h}.tsv"), &cmp)
}


fn run(out: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    roots(&out)?;
    integral(&out)?;
    regression(&out)?;
    lagrange(&out)?;
    ode(&out, 0.1)?;
    ode(&out, 0.2)?;
    Ok(())
}


fn main() {
    let mut args = std::env::args().skip(1);
    let level = args.next().unwrap_or_else(|| "info".to_string());
    let out   = args.next().map(PathBuf::from);

    if let Err(e) = init_logger(&level) {
        eprintln!("{e}");
        std::process::exit(2);
    }

    info!("numlab started with loglevel: {level}");
    if let Err(e) = run(out) {
        error!("{e}");
        std::process::exit(1);
    }
    info!("numlab finished");
}

//! Convergence table across subdivision counts.

use log::{debug, info};
use rand::Rng;

use super::algorithms::Rule;
use super::errors::QuadratureError;
use super::{midpoint, monte_carlo, trapezoid};

/// Subdivision / sample counts used by the integration tool.
pub const DEFAULT_COUNTS: [usize; 5] = [10, 20, 50, 100, 1000];


/// One row of the table: all three estimates for the same `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureRow {
    pub n           : usize,
    pub midpoint    : f64,
    pub trapezoid   : f64,
    pub monte_carlo : f64,
}


/// Evaluates midpoint, trapezoid and Monte Carlo estimates for every count.
///
/// Monte Carlo rows consume `rng` in `counts` order, so a seeded generator 
/// reproduces the whole table.
pub fn convergence_table<F, R>(
    mut f: F,
    a: f64,
    b: f64,
    counts: &[usize],
    rng: &mut R,
) -> Result<Vec<QuadratureRow>, QuadratureError>
where
    F: FnMut(f64) -> f64,
    R: Rng,
{
    let mut rows = Vec::with_capacity(counts.len());
    for &n in counts {
        let row = QuadratureRow {
            n,
            midpoint    : midpoint(&mut f, a, b, n)?,
            trapezoid   : trapezoid(&mut f, a, b, n)?,
            monte_carlo : monte_carlo(&mut f, a, b, n, rng)?.value,
        };
        debug!("{row:?}");
        rows.push(row);
    }

    info!(
        "quadrature on [{a}, {b}]: {} row(s) of {}/{}/{}",
        rows.len(), Rule::Midpoint, Rule::Trapezoid, Rule::MonteCarlo
    );
    Ok(rows)
}

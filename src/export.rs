//! Tab-separated export of traces and tables.
//!
//! Layout: one header line of column names, then one line per record. Real 
//! fields use 6 fixed decimals; count columns (e.g. `N`) are written as 
//! integers.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use log::info;
use thiserror::Error;

use crate::interpolation::report::InterpolationReport;
use crate::ode::compare::OdeComparison;
use crate::quadrature::algorithms::Rule;
use crate::quadrature::table::QuadratureRow;
use crate::regression::power::PowerFit;
use crate::root_finding::report::{BisectionReport, IterationReport};


#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("row {row} has {got} field(s), header has {expected}")]
    RaggedRow { row: usize, got: usize, expected: usize },
}


/// One cell of an exported table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Count(usize),
    Real(f64),
}

impl Field {
    fn render(&self) -> String {
        match self {
            Field::Count(n) => n.to_string(),
            Field::Real(v)  => format!("{v:.6}"),
        }
    }
}


/// Anything that can be laid out as a header plus rows.
pub trait TabularRecords {
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self) -> Vec<Vec<Field>>;
}


/// Writes `table` to `writer` as tab-separated text.
pub fn write_tsv<W, T>(writer: W, table: &T) -> Result<(), ExportError>
where
    W: Write,
    T: TabularRecords + ?Sized,
{
    let headers = table.headers();
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(&headers)?;
    for (row, fields) in table.rows().iter().enumerate() {
        if fields.len() != headers.len() {
            return Err(ExportError::RaggedRow { row, got: fields.len(), expected: headers.len() });
        }
        wtr.write_record(fields.iter().map(Field::render))?;
    }
    wtr.flush()?;
    Ok(())
}


/// Creates (or truncates) `path` and writes `table` to it.
pub fn save_tsv<P, T>(path: P, table: &T) -> Result<(), ExportError>
where
    P: AsRef<Path>,
    T: TabularRecords + ?Sized,
{
    let file = File::create(path.as_ref())?;
    write_tsv(file, table)?;
    info!("saved {}", path.as_ref().display());
    Ok(())
}


impl TabularRecords for BisectionReport {
    fn headers(&self) -> Vec<&'static str> { vec!["a", "b", "c", "f(c)"] }

    fn rows(&self) -> Vec<Vec<Field>> {
        self.trace.iter()
            .map(|s| vec![Field::Real(s.a), Field::Real(s.b), Field::Real(s.c), Field::Real(s.fc)])
            .collect()
    }
}

impl TabularRecords for IterationReport {
    fn headers(&self) -> Vec<&'static str> { vec!["x_n", "x_n+1"] }

    fn rows(&self) -> Vec<Vec<Field>> {
        self.trace.iter()
            .map(|s| vec![Field::Real(s.x), Field::Real(s.x_next)])
            .collect()
    }
}

impl TabularRecords for [QuadratureRow] {
    fn headers(&self) -> Vec<&'static str> {
        vec!["N", Rule::Midpoint.rule_name(), Rule::Trapezoid.rule_name(), Rule::MonteCarlo.rule_name()]
    }

    fn rows(&self) -> Vec<Vec<Field>> {
        self.iter()
            .map(|r| vec![
                Field::Count(r.n),
                Field::Real(r.midpoint),
                Field::Real(r.trapezoid),
                Field::Real(r.monte_carlo),
            ])
            .collect()
    }
}

impl TabularRecords for PowerFit {
    fn headers(&self) -> Vec<&'static str> { vec!["a", "b", "R2"] }

    fn rows(&self) -> Vec<Vec<Field>> {
        vec![vec![Field::Real(self.a), Field::Real(self.b), Field::Real(self.r_squared)]]
    }
}

impl TabularRecords for InterpolationReport {
    fn headers(&self) -> Vec<&'static str> { vec!["x", "P(x)"] }

    fn rows(&self) -> Vec<Vec<Field>> {
        self.x_eval.iter().zip(&self.evaluated)
            .map(|(&x, &y)| vec![Field::Real(x), Field::Real(y)])
            .collect()
    }
}

impl TabularRecords for OdeComparison {
    fn headers(&self) -> Vec<&'static str> {
        match self.exact {
            Some(_) => vec!["x", "euler", "rk4", "exact"],
            None    => vec!["x", "euler", "rk4"],
        }
    }

    fn rows(&self) -> Vec<Vec<Field>> {
        (0..self.euler.len())
            .map(|i| {
                let mut row = vec![
                    Field::Real(self.euler.x[i]),
                    Field::Real(self.euler.y[i]),
                    Field::Real(self.rk4.y[i]),
                ];
                if let Some(exact) = &self.exact {
                    row.push(Field::Real(exact[i]));
                }
                row
            })
            .collect()
    }
}

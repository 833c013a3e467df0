//! Quadrature rule variants.

/// - [`Rule::Midpoint`]   midpoint rectangles, deterministic
/// - [`Rule::Trapezoid`]  composite trapezoid, deterministic
/// - [`Rule::MonteCarlo`] uniform sampling, stochastic
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    Midpoint,
    Trapezoid,
    MonteCarlo,
}

impl Rule {
    pub const fn rule_name(self) -> &'static str {
        match self {
            Rule::Midpoint   => "midpoint",
            Rule::Trapezoid  => "trapezoid",
            Rule::MonteCarlo => "monte_carlo",
        }
    }
}
impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule_name())
    }
}

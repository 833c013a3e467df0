//! Single-step advance rules.

/// A fixed-step rule advancing `y(x)` to `y(x + h)`.
pub trait Stepper {
    const NAME: &'static str;

    fn advance<F>(f: &mut F, x: f64, y: f64, h: f64) -> f64
    where F: FnMut(f64, f64) -> f64;
}


/// Forward Euler: `y + h·f(x, y)`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Euler;

impl Stepper for Euler {
    const NAME: &'static str = "euler";

    #[inline]
    fn advance<F>(f: &mut F, x: f64, y: f64, h: f64) -> f64
    where F: FnMut(f64, f64) -> f64 {
        y + h * f(x, y)
    }
}


/// Classical fourth-order Runge–Kutta, weights `(1, 2, 2, 1) / 6`.
#[derive(Debug, Copy, Clone, Default)]
pub struct RungeKutta4;

impl Stepper for RungeKutta4 {
    const NAME: &'static str = "rk4";

    #[inline]
    fn advance<F>(f: &mut F, x: f64, y: f64, h: f64) -> f64
    where F: FnMut(f64, f64) -> f64 {
        let k1 = f(x, y);
        let k2 = f(x + h / 2.0, y + h * k1 / 2.0);
        let k3 = f(x + h / 2.0, y + h * k2 / 2.0);
        let k4 = f(x + h, y + h * k3);
        y + h * (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
    }
}

//! Composite trapezoidal rule.

/// Integrate `f` over `[a, b]` with `n` trapezoids.
///
/// Fixed sample count, no adaptivity; matches the classroom estimates the
/// workbench prints next to the analytic values.
pub fn trapezoid(f: impl Fn(f64) -> f64, a: f64, b: f64, n: usize) -> f64 {
    assert!(n > 0, "trapezoid needs at least one interval");
    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(a + i as f64 * h);
    }
    h * sum
}

/// Trapezoidal rule over sampled data (the `numpy.trapz` pattern).
///
/// `x` and `y` must have the same length; returns 0 for fewer than two
/// samples.
pub fn trapz(y: &[f64], x: &[f64]) -> f64 {
    assert_eq!(y.len(), x.len(), "trapz: mismatched sample lengths");
    let mut area = 0.0;
    for i in 1..x.len() {
        area += 0.5 * (y[i] + y[i - 1]) * (x[i] - x[i - 1]);
    }
    area
}

// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Bounded Regions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Areas between curve branches over an x-interval.

use matgeo_math::quadrature::trapezoid;
use matgeo_types::point::Point2;

/// Area between `upper(x)` and `lower(x)` over `[x0, x1]` by the
/// trapezoidal rule with `n` intervals.
pub fn area_between(
    upper: impl Fn(f64) -> f64,
    lower: impl Fn(f64) -> f64,
    x0: f64,
    x1: f64,
    n: usize,
) -> f64 {
    trapezoid(|x| upper(x) - lower(x), x0, x1, n)
}

/// Area of the band of the parabola `y² = 4·a·x` between `x0` and `x1`
/// (both branches).
pub fn parabola_band_area(four_a: f64, x0: f64, x1: f64, n: usize) -> f64 {
    area_between(
        move |x| (four_a * x).sqrt(),
        move |x| -(four_a * x).sqrt(),
        x0,
        x1,
        n,
    )
}

/// Sample points of the branch `y = ±√(4·a·x)` for plotting, swept in y
/// so the curve is smooth through the vertex.
pub fn parabola_samples(four_a: f64, y_min: f64, y_max: f64, n: usize) -> Vec<Point2> {
    assert!(n >= 2, "parabola_samples needs at least two samples");
    (0..n)
        .map(|i| {
            let y = y_min + (y_max - y_min) * i as f64 / (n - 1) as f64;
            Point2::new(y * y / four_a, y)
        })
        .collect()
}

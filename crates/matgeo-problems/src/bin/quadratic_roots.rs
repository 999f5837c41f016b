// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 9.5.11
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Roots of 9x² − 155x − 500 = 0, twice: the quadratic formula and the
//! conic–line matrix form intersected with the x-axis.

use matgeo_math::quadratic::{conic_line_intersection, solve_quadratic};
use matgeo_problems::{banner, fig_path, BLUE, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::{GeoError, GeoResult};
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner("9.5.11", "Solve 9x² − 155x − 500 = 0.");

    let (a, b, c) = (9.0, -155.0, -500.0);
    let (r1, r2) = solve_quadratic(a, b, c)
        .ok_or_else(|| GeoError::NoRealSolution("negative discriminant".into()))?;
    println!("quadratic formula: x = {r1:.4} and x = {r2:.4}");

    // parabola y = 9x² − 155x − 500 as xᵀVx + 2uᵀx + f = 0, met with
    // the x-axis x = κ·(1, 0)
    let v = [[a, 0.0], [0.0, 0.0]];
    let u = Point2::new(b / 2.0, -0.5);
    let (k1, k2) = conic_line_intersection(&v, u, c, Point2::ORIGIN, Point2::new(1.0, 0.0))
        .ok_or_else(|| GeoError::NoRealSolution("line misses the conic".into()))?;
    println!("conic–line form:   κ = {k1:.4} and κ = {k2:.4}");
    println!(
        "residuals: {:.2e}, {:.2e}",
        (a * r1 * r1 + b * r1 + c).abs(),
        (a * r2 * r2 + b * r2 + c).abs()
    );

    // axes only: one grid step cannot suit both axis scales here
    let mut cfg = FigureConfig::square(600);
    cfg.grid_step = 0.0;
    let mut fig = Figure::new(cfg, -8.0, 25.0, -1300.0, 600.0)?;
    fig.grid_and_axes();
    let curve: Vec<Point2> = (0..=330)
        .map(|i| {
            let x = -8.0 + i as f64 * 0.1;
            Point2::new(x, a * x * x + b * x + c)
        })
        .collect();
    fig.polyline(&curve, BLUE);
    fig.marker(Point2::new(r1, 0.0), 5, RED);
    fig.marker(Point2::new(r2, 0.0), 5, RED);
    fig.save(fig_path("quadratic_roots"))?;
    println!("figure: {}", fig_path("quadratic_roots").display());
    Ok(())
}

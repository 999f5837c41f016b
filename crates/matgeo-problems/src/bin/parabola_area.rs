// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 9.2.11
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Area enclosed by y² = 9x between x = 2 and x = 4, trapezoidal
//! estimate against the analytic 32 − 8√2.

use matgeo_geometry::region::{parabola_band_area, parabola_samples};
use matgeo_problems::{banner, fig_path, BLUE, GREEN};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner(
        "9.2.11",
        "Find the area of y² = 9x enclosed between x = 2 and x = 4.",
    );

    let four_a = 9.0;
    let (x0, x1) = (2.0, 4.0);

    let estimate = parabola_band_area(four_a, x0, x1, 20_000);
    let analytic = 32.0 - 8.0 * 2.0_f64.sqrt();
    println!("trapezoidal estimate = {estimate:.6}");
    println!("analytic 32 − 8√2    = {analytic:.6}");
    println!("difference           = {:.2e}", (estimate - analytic).abs());

    let mut fig = Figure::new(FigureConfig::square(600), -0.5, 5.0, -7.0, 7.0)?;
    fig.grid_and_axes();
    // shaded band between the branches
    let n = 80;
    let mut band: Vec<Point2> = (0..=n)
        .map(|i| {
            let x = x0 + (x1 - x0) * i as f64 / n as f64;
            Point2::new(x, (four_a * x).sqrt())
        })
        .collect();
    band.extend((0..=n).rev().map(|i| {
        let x = x0 + (x1 - x0) * i as f64 / n as f64;
        Point2::new(x, -(four_a * x).sqrt())
    }));
    fig.polygon_fill(&band, GREEN);
    fig.polyline(&parabola_samples(four_a, -6.5, 6.5, 261), BLUE);
    fig.save(fig_path("parabola_area"))?;
    println!("figure: {}", fig_path("parabola_area").display());
    Ok(())
}

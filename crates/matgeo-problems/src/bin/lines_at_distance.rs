// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 4.7.46
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The two lines through (1, 0) whose distance from the origin is √3/2.

use matgeo_geometry::circle::circle_samples;
use matgeo_geometry::line_ops::{line_samples, param_norm};
use matgeo_geometry::tangent_lines::{distance_from_origin, lines_through_point_at_distance};
use matgeo_problems::{banner, fig_path, BLUE, GREEN, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner(
        "4.7.46",
        "Find the lines through (1, 0) at distance √3/2 from the origin.",
    );

    let p = Point2::new(1.0, 0.0);
    let d = 3.0_f64.sqrt() / 2.0;

    let (l1, l2) = lines_through_point_at_distance(p, d)?;
    for (name, line) in [("l1", &l1), ("l2", &l2)] {
        println!(
            "{name}: {:.4}·x + {:.4}·y + {:.4} = 0",
            line.a, line.b, line.c
        );
        println!(
            "  through (1, 0): residual {:.2e}; distance from O = {:.6}",
            line.eval(p).abs(),
            distance_from_origin(line)?
        );
    }

    let mut fig = Figure::new(FigureConfig::square(600), -2.0, 3.0, -2.5, 2.5)?;
    fig.grid_and_axes();
    fig.polyline(&circle_samples(Point2::ORIGIN, d, 361), GREEN);
    for line in [&l1, &l2] {
        let (dir, foot) = param_norm(line)?;
        fig.polyline(&line_samples(dir, foot, -4.0, 4.0, 81), BLUE);
    }
    fig.marker(p, 5, RED);
    fig.save(fig_path("lines_at_distance"))?;
    println!("figure: {}", fig_path("lines_at_distance").display());
    Ok(())
}

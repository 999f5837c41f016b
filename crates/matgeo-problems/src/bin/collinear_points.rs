// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 2.10.77
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The points (−a, −b), (0, 0), (a, b) and (a², ab) all lie on the line
//! b·x − a·y = 0.

use matgeo_geometry::collinear::{collinear_det, points_collinear};
use matgeo_problems::{banner, fig_path, BLUE, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner(
        "2.10.77",
        "Show that (−a, −b), (0, 0), (a, b) and (a², ab) are collinear\n\
         (here a = 2, b = 3).",
    );

    let (a, b) = (2.0, 3.0);
    let points = [
        Point2::new(-a, -b),
        Point2::ORIGIN,
        Point2::new(a, b),
        Point2::new(a * a, a * b),
    ];

    for w in points.windows(3) {
        println!(
            "det for ({:.0},{:.0}) ({:.0},{:.0}) ({:.0},{:.0}) = {:.2e}",
            w[0].x, w[0].y, w[1].x, w[1].y, w[2].x, w[2].y,
            collinear_det(w[0], w[1], w[2])
        );
    }
    println!("all four collinear: {}", points_collinear(&points));

    let mut fig = Figure::around(FigureConfig::square(600), &points)?;
    fig.grid_and_axes();
    fig.polyline(&points, BLUE);
    for p in points {
        fig.marker(p, 4, RED);
    }
    fig.save(fig_path("collinear_points"))?;
    println!("figure: {}", fig_path("collinear_points").display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 10.6.4
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tangents from the point (8, 0) to the circle x² + y² = 25.

use matgeo_geometry::circle::{circle_samples, tangent_points};
use matgeo_problems::{banner, fig_path, BLUE, GREEN, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::{GeoError, GeoResult};
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner(
        "10.6.4",
        "Tangents are drawn from (8, 0) to the circle x² + y² = 25.\n\
         Find the points where the tangents touch the circle.",
    );

    let radius = 5.0;
    let external = Point2::new(8.0, 0.0);

    let (q1, q2) = tangent_points(radius, external).ok_or_else(|| {
        GeoError::NoRealSolution("the point lies on or inside the circle".into())
    })?;

    println!("contact points:");
    println!("  q1 = ({:.4}, {:.4})", q1.x, q1.y);
    println!("  q2 = ({:.4}, {:.4})", q2.x, q2.y);
    for (name, q) in [("q1", q1), ("q2", q2)] {
        let on_circle = (q.norm() - radius).abs();
        let radial = (external - q).dot(&q);
        println!(
            "  check {name}: |q| − r = {on_circle:.2e}, (p − q)·q = {radial:.2e}"
        );
    }

    let mut fig = Figure::new(FigureConfig::square(700), -7.0, 10.0, -7.0, 7.0)?;
    fig.grid_and_axes();
    fig.polyline(&circle_samples(Point2::ORIGIN, radius, 361), BLUE);
    fig.segment(external, q1, GREEN);
    fig.segment(external, q2, GREEN);
    fig.marker(external, 4, RED);
    fig.marker(q1, 4, RED);
    fig.marker(q2, 4, RED);
    fig.save(fig_path("circle_tangents"))?;
    println!("figure: {}", fig_path("circle_tangents").display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 4.11.26
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Area of the triangle bounded by x − y = 1, x + y = 1 and y = 1.

use matgeo_geometry::triangle::{area, vertices_from_lines};
use matgeo_problems::{banner, fig_path, BLUE, GREEN, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::line::Line2;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner(
        "4.11.26",
        "Find the area of the region bounded by the lines x − y = 1,\n\
         x + y = 1 and y = 1.",
    );

    let l1 = Line2::from_normal(Point2::new(1.0, -1.0), 1.0);
    let l2 = Line2::from_normal(Point2::new(1.0, 1.0), 1.0);
    let l3 = Line2::from_normal(Point2::new(0.0, 1.0), 1.0);

    let v = vertices_from_lines(&l1, &l2, &l3)?;
    for (i, p) in v.iter().enumerate() {
        println!("vertex {}: ({:.4}, {:.4})", i + 1, p.x, p.y);
    }
    println!("area = {:.4}", area(&v));

    let mut fig = Figure::new(FigureConfig::square(600), -1.0, 3.0, -1.0, 2.5)?;
    fig.grid_and_axes();
    fig.polygon_fill(&v, GREEN);
    fig.polyline(&[v[0], v[1], v[2], v[0]], BLUE);
    for p in v {
        fig.marker(p, 4, RED);
    }
    fig.save(fig_path("triangle_area"))?;
    println!("figure: {}", fig_path("triangle_area").display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 5.5.1
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Common point of the planes 5x − y + 4z = 5, 2x + 3y + 5z = 2 and
//! 5x − 2y + 6z = −1, drawn as projected wireframes.

use matgeo_geometry::plane::{intersect_three, Plane};
use matgeo_problems::{banner, fig_path, BLUE, GREEN, ORANGE, RED};
use matgeo_render::iso3d::Iso3;
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point3;

fn main() -> GeoResult<()> {
    banner(
        "5.5.1",
        "Solve 5x − y + 4z = 5, 2x + 3y + 5z = 2, 5x − 2y + 6z = −1.",
    );

    let planes = [
        Plane::new(Point3::new(5.0, -1.0, 4.0), 5.0),
        Plane::new(Point3::new(2.0, 3.0, 5.0), 2.0),
        Plane::new(Point3::new(5.0, -2.0, 6.0), -1.0),
    ];

    let meet = intersect_three(&planes)?;
    println!("meet: ({:.4}, {:.4}, {:.4})", meet.x, meet.y, meet.z);
    for (i, plane) in planes.iter().enumerate() {
        println!("  plane {} residual: {:.2e}", i + 1, plane.eval(meet).abs());
    }

    let view = Iso3::default();
    let mut fig = Figure::new(FigureConfig::square(700), -8.0, 8.0, -8.0, 8.0)?;
    fig.grid_and_axes();
    for (plane, color) in planes.iter().zip([BLUE, GREEN, ORANGE]) {
        let lines = view.wireframe(
            |x, y| plane.z_at(x, y).unwrap_or(f64::NAN),
            meet.x - 2.5,
            meet.x + 2.5,
            meet.y - 2.5,
            meet.y + 2.5,
            9,
        );
        for line in lines {
            fig.polyline(&line, color);
        }
    }
    fig.marker(view.project(meet), 5, RED);
    fig.save(fig_path("plane_intersection"))?;
    println!("figure: {}", fig_path("plane_intersection").display());
    Ok(())
}

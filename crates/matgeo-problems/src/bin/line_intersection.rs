// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 5.2.51
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Meet of the lines 5x + 2y = 4 and 7x + 3y = 5.

use matgeo_geometry::line_ops::{intersect, line_samples, param_norm};
use matgeo_problems::{banner, fig_path, BLUE, GREEN, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::line::Line2;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner("5.2.51", "Solve 5x + 2y = 4 and 7x + 3y = 5.");

    let l1 = Line2::from_normal(Point2::new(5.0, 2.0), 4.0);
    let l2 = Line2::from_normal(Point2::new(7.0, 3.0), 5.0);

    let meet = intersect(&l1, &l2)?;
    println!("intersection: ({:.4}, {:.4})", meet.x, meet.y);
    println!(
        "back-substitution: 5x + 2y = {:.4}, 7x + 3y = {:.4}",
        5.0 * meet.x + 2.0 * meet.y,
        7.0 * meet.x + 3.0 * meet.y
    );

    let mut fig = Figure::new(FigureConfig::square(600), -3.0, 6.0, -7.0, 4.0)?;
    fig.grid_and_axes();
    for (line, color) in [(&l1, BLUE), (&l2, GREEN)] {
        let (dir, foot) = param_norm(line)?;
        fig.polyline(&line_samples(dir, foot, -12.0, 12.0, 121), color);
    }
    fig.marker(meet, 5, RED);
    fig.save(fig_path("line_intersection"))?;
    println!("figure: {}", fig_path("line_intersection").display());
    Ok(())
}

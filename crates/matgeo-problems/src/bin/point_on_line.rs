// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 4.3.39
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Choose a so that (3, 4) lies on the line 3y = a·x + 7.

use matgeo_geometry::line_ops::{line_samples, param_norm};
use matgeo_problems::{banner, fig_path, BLUE, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::line::Line2;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner(
        "4.3.39",
        "For which a does the point (3, 4) lie on the line 3y = a·x + 7?",
    );

    let p = Point2::new(3.0, 4.0);

    // 3·4 = 3a + 7  →  a = (3y − 7)/x
    let a = (3.0 * p.y - 7.0) / p.x;
    println!("a = {a:.6} (= 5/3 = {:.6})", 5.0 / 3.0);

    // a·x − 3y + 7 = 0
    let line = Line2::new(a, -3.0, 7.0);
    println!("substitution residual = {:.2e}", line.eval(p).abs());

    let mut fig = Figure::new(FigureConfig::square(600), -4.0, 8.0, -3.0, 8.0)?;
    fig.grid_and_axes();
    let (dir, foot) = param_norm(&line)?;
    fig.polyline(&line_samples(dir, foot, -12.0, 12.0, 121), BLUE);
    fig.marker(p, 5, RED);
    fig.save(fig_path("point_on_line"))?;
    println!("figure: {}", fig_path("point_on_line").display());
    Ok(())
}

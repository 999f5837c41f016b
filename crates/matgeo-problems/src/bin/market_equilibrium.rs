// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 5.9.3
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Two-good price equilibrium: 5x + 4y = 9500 and 4x + 3y = 7370.

use matgeo_geometry::line_ops::{intersect, line_samples, param_norm};
use matgeo_problems::{banner, fig_path, BLUE, GREEN, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::line::Line2;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner(
        "5.9.3",
        "Supply/demand balance gives 5x + 4y = 9500 and 4x + 3y = 7370.\n\
         Find the equilibrium prices.",
    );

    let l1 = Line2::from_normal(Point2::new(5.0, 4.0), 9500.0);
    let l2 = Line2::from_normal(Point2::new(4.0, 3.0), 7370.0);

    let eq = intersect(&l1, &l2)?;
    println!("equilibrium: x = {:.2}, y = {:.2}", eq.x, eq.y);
    println!(
        "check: 5x + 4y = {:.2}, 4x + 3y = {:.2}",
        5.0 * eq.x + 4.0 * eq.y,
        4.0 * eq.x + 3.0 * eq.y
    );

    let mut cfg = FigureConfig::square(600);
    cfg.grid_step = 500.0;
    let mut fig = Figure::new(cfg, 0.0, 2500.0, 0.0, 2800.0)?;
    fig.grid_and_axes();
    for (line, color) in [(&l1, BLUE), (&l2, GREEN)] {
        let (dir, foot) = param_norm(line)?;
        fig.polyline(&line_samples(dir, foot, -3000.0, 3000.0, 121), color);
    }
    fig.marker(eq, 5, RED);
    fig.save(fig_path("market_equilibrium"))?;
    println!("figure: {}", fig_path("market_equilibrium").display());
    Ok(())
}

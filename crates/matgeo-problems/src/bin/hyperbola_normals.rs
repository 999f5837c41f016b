// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 10.7.97
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Normals to x²/a² − y²/b² = 1 at the parameters θ and π/2 − θ meet at
//! a point whose ordinate is k = −(a² + b²)/b, independent of θ.

use std::f64::consts::FRAC_PI_2;

use matgeo_geometry::hyperbola::{branch_samples, normal_at, normal_intersection, point_at};
use matgeo_geometry::line_ops::{line_samples, param_norm};
use matgeo_problems::{banner, fig_path, BLUE, GREEN, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;

fn main() -> GeoResult<()> {
    banner(
        "10.7.97",
        "Normals at θ and π/2 − θ on the hyperbola x²/a² − y²/b² = 1\n\
         meet at a point with ordinate k = −(a² + b²)/b.",
    );

    let (a, b) = (5.0, 3.0);
    let theta = 0.52;

    let meet = normal_intersection(a, b, theta)?;
    let k_expected = -(a * a + b * b) / b;
    println!("meet of the normals: ({:.4}, {:.4})", meet.x, meet.y);
    println!(
        "ordinate k = {:.4}, theory −(a² + b²)/b = {:.4}, residual {:.2e}",
        meet.y,
        k_expected,
        (meet.y - k_expected).abs()
    );

    let n1 = normal_at(a, b, theta);
    let n2 = normal_at(a, b, FRAC_PI_2 - theta);
    for (name, n) in [("n(θ)", &n1), ("n(π/2−θ)", &n2)] {
        println!("  {name} misses the meet by {:.2e}", n.eval(meet).abs());
    }

    let mut fig = Figure::new(FigureConfig::square(700), -6.0, 26.0, -16.0, 10.0)?;
    fig.grid_and_axes();
    fig.polyline(&branch_samples(a, b, 1.6, 241), BLUE);
    for n in [&n1, &n2] {
        let (dir, foot) = param_norm(n)?;
        fig.polyline(&line_samples(dir, foot, -30.0, 30.0, 201), GREEN);
    }
    fig.marker(point_at(a, b, theta), 4, RED);
    fig.marker(point_at(a, b, FRAC_PI_2 - theta), 4, RED);
    fig.marker(meet, 5, RED);
    fig.save(fig_path("hyperbola_normals"))?;
    println!("figure: {}", fig_path("hyperbola_normals").display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 12.582
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rotate a point 30° anti-clockwise about the origin.

use std::f64::consts::FRAC_PI_6;

use matgeo_geometry::circle::circle_samples;
use matgeo_geometry::line_ops::rotate_point;
use matgeo_problems::{banner, fig_path, BLUE, GREEN, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner(
        "12.582",
        "Rotate the point P(20, 10) through 30° about the origin.",
    );

    let p = Point2::new(20.0, 10.0);
    let q = rotate_point(p, FRAC_PI_6);

    println!("P = ({:.4}, {:.4})", p.x, p.y);
    println!("Q = ({:.4}, {:.4})", q.x, q.y);
    // Q = (10√3 − 5, 10 + 5√3)
    let expected = Point2::new(10.0 * 3f64.sqrt() - 5.0, 10.0 + 5.0 * 3f64.sqrt());
    println!("closed form = ({:.4}, {:.4})", expected.x, expected.y);
    println!(
        "norm preserved: |P| = {:.6}, |Q| = {:.6}",
        p.norm(),
        q.norm()
    );
    let cos_angle = p.dot(&q) / (p.norm() * q.norm());
    println!(
        "angle between P and Q = {:.4} rad (expected {:.4})",
        cos_angle.acos(),
        FRAC_PI_6
    );

    let mut cfg = FigureConfig::square(600);
    cfg.grid_step = 5.0;
    let mut fig = Figure::new(cfg, -25.0, 25.0, -25.0, 25.0)?;
    fig.grid_and_axes();
    fig.polyline(&circle_samples(Point2::ORIGIN, p.norm(), 361), GREEN);
    fig.segment(Point2::ORIGIN, p, BLUE);
    fig.segment(Point2::ORIGIN, q, BLUE);
    fig.marker(p, 4, RED);
    fig.marker(q, 4, RED);
    fig.save(fig_path("point_rotation"))?;
    println!("figure: {}", fig_path("point_rotation").display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 2.8.39
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Angle between the two lines whose direction cosines satisfy
//! l + m + n = 0 and l² + m² − n² = 0.

use matgeo_geometry::direction::{
    angle_between_directions, constrained_direction_pair, direction_cosines,
};
use matgeo_problems::{banner, fig_path, print_vec, BLUE, GREEN, RED};
use matgeo_render::iso3d::Iso3;
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point3;

fn main() -> GeoResult<()> {
    banner(
        "2.8.39",
        "Direction cosines of two lines satisfy l + m + n = 0 and\n\
         l² + m² − n² = 0. Find the angle between the lines.",
    );

    let (d1, d2) = constrained_direction_pair();
    print_vec("direction ratios 1", &[d1.x, d1.y, d1.z]);
    print_vec("direction ratios 2", &[d2.x, d2.y, d2.z]);

    for (name, d) in [("1", d1), ("2", d2)] {
        let dc = direction_cosines(d)?;
        let constraint1 = dc.x + dc.y + dc.z;
        let constraint2 = dc.x * dc.x + dc.y * dc.y - dc.z * dc.z;
        println!(
            "line {name}: l+m+n = {constraint1:.2e}, l²+m²−n² = {constraint2:.2e}"
        );
    }

    let angle = angle_between_directions(d1, d2)?;
    println!(
        "angle = {:.6} rad = {:.2}° (expected 60°)",
        angle,
        angle.to_degrees()
    );

    let view = Iso3::default();
    let o = view.project(Point3::ORIGIN);
    let tips = [view.project(d1 * 2.0), view.project(d2 * 2.0)];
    let mut fig = Figure::new(FigureConfig::square(600), -3.0, 3.0, -3.0, 3.0)?;
    fig.grid_and_axes();
    fig.segment(o, tips[0], BLUE);
    fig.segment(o, tips[1], GREEN);
    fig.marker(tips[0], 4, RED);
    fig.marker(tips[1], 4, RED);
    fig.save(fig_path("direction_cosine_angle"))?;
    println!("figure: {}", fig_path("direction_cosine_angle").display());
    Ok(())
}

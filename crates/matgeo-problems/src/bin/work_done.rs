// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 12.478
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Work done by a constant force along a straight displacement.

use matgeo_problems::{banner, fig_path, print_vec, BLUE, GREEN, RED};
use matgeo_render::iso3d::Iso3;
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point3;

fn main() -> GeoResult<()> {
    banner(
        "12.478",
        "A force P = 2i − 5j + 6k moves a particle from A(6, 1, −3) to\n\
         B(4, −3, −2). Find the work done.",
    );

    let force = Point3::new(2.0, -5.0, 6.0);
    let a = Point3::new(6.0, 1.0, -3.0);
    let b = Point3::new(4.0, -3.0, -2.0);

    let displacement = b - a;
    let work = force.dot(&displacement);

    print_vec("P", &[force.x, force.y, force.z]);
    print_vec("d = B − A", &[displacement.x, displacement.y, displacement.z]);
    println!("work = P·d = {work:.4} J");
    // component check: 2·(−2) + (−5)·(−4) + 6·1
    let by_hand = 2.0 * (-2.0) + (-5.0) * (-4.0) + 6.0 * 1.0;
    println!("componentwise sum = {by_hand:.4}");

    let view = Iso3::default();
    let pa = view.project(a);
    let pb = view.project(b);
    let pf = view.project(a + force);
    let mut fig = Figure::around(FigureConfig::square(600), &[pa, pb, pf])?;
    fig.grid_and_axes();
    fig.segment(pa, pb, BLUE);
    fig.segment(pa, pf, GREEN);
    fig.marker(pa, 4, RED);
    fig.marker(pb, 4, RED);
    fig.save(fig_path("work_done"))?;
    println!("figure: {}", fig_path("work_done").display());
    Ok(())
}

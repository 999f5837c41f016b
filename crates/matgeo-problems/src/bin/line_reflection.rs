// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 4.13.53
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reflect a line in the x-axis and confirm the angles to the mirror
//! agree.

use matgeo_geometry::line_ops::{angle_between, line_samples, param_norm, reflect};
use matgeo_problems::{banner, fig_path, BLUE, GREEN, ORANGE};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::line::Line2;

fn main() -> GeoResult<()> {
    banner(
        "4.13.53",
        "Reflect the line −0.57x + 0.82y = 0 in the x-axis.",
    );

    let source = Line2::new(-0.57, 0.82, 0.0);
    let mirror = Line2::new(0.0, 1.0, 0.0); // y = 0

    let image = reflect(&source, &mirror)?;
    println!(
        "image line: {:.4}·x + {:.4}·y + {:.4} = 0",
        image.a, image.b, image.c
    );

    let before = angle_between(&source, &mirror)?;
    let after = angle_between(&image, &mirror)?;
    println!("angle(source, mirror) = {before:.6} rad");
    println!("angle(image,  mirror) = {after:.6} rad");
    println!("difference = {:.2e}", (before - after).abs());

    let mut fig = Figure::new(FigureConfig::square(600), -3.0, 3.0, -3.0, 3.0)?;
    fig.grid_and_axes();
    for (line, color) in [(&source, BLUE), (&image, GREEN), (&mirror, ORANGE)] {
        let (dir, foot) = param_norm(line)?;
        fig.polyline(&line_samples(dir, foot, -5.0, 5.0, 101), color);
    }
    fig.save(fig_path("line_reflection"))?;
    println!("figure: {}", fig_path("line_reflection").display());
    Ok(())
}

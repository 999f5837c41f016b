// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 12.894
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The 90° rotation matrix has the purely imaginary eigenvalues ±j.

use matgeo_geometry::circle::circle_samples;
use matgeo_math::eigen::eig_2x2_complex;
use matgeo_problems::{banner, fig_path, print_matrix, GREEN, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner(
        "12.894",
        "Find the eigenvalues of the rotation matrix [[0, −1], [1, 0]].",
    );

    let m = [[0.0, -1.0], [1.0, 0.0]];
    print_matrix("M", &[&m[0], &m[1]]);

    let vals = eig_2x2_complex(&m);
    println!(
        "eigenvalues: {:+.4} {:+.4}j and {:+.4} {:+.4}j",
        vals[0].re, vals[0].im, vals[1].re, vals[1].im
    );
    let product = vals[0] * vals[1];
    println!(
        "λ₁·λ₂ = {:+.4} {:+.4}j (det M = 1)",
        product.re, product.im
    );
    let sum = vals[0] + vals[1];
    println!("λ₁+λ₂ = {:+.4} {:+.4}j (tr M = 0)", sum.re, sum.im);

    // spectrum in the complex plane, on the unit circle
    let mut fig = Figure::new(FigureConfig::square(600), -1.6, 1.6, -1.6, 1.6)?;
    fig.grid_and_axes();
    fig.polyline(&circle_samples(Point2::ORIGIN, 1.0, 361), GREEN);
    for v in vals {
        fig.marker(Point2::new(v.re, v.im), 5, RED);
    }
    fig.save(fig_path("complex_eigenvalues"))?;
    println!("figure: {}", fig_path("complex_eigenvalues").display());
    Ok(())
}

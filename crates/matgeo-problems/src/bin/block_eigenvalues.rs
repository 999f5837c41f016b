// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 12.62
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Eigenvalues of a block-diagonal symmetric matrix: the 2×2 block
//! contributes 5 and −1, the trailing 1×1 block contributes 1.

use matgeo_math::eigen::{eig_sym_3x3, is_eigenpair};
use matgeo_problems::{banner, fig_path, print_matrix, BLUE, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point2;
use ndarray::array;

fn main() -> GeoResult<()> {
    banner(
        "12.62",
        "Find the eigenvalues of M = [[2,3,0],[3,2,0],[0,0,1]].",
    );

    let m = array![[2.0, 3.0, 0.0], [3.0, 2.0, 0.0], [0.0, 0.0, 1.0]];
    print_matrix(
        "M",
        &[&[2.0, 3.0, 0.0], &[3.0, 2.0, 0.0], &[0.0, 0.0, 1.0]],
    );

    let (vals, vecs) = eig_sym_3x3(&m);
    println!(
        "eigenvalues (descending): {:.4}, {:.4}, {:.4}",
        vals[0], vals[1], vals[2]
    );
    for k in 0..3 {
        let x = vecs.column(k).to_owned();
        println!(
            "  M·x ≈ λ·x for λ = {:+.4}: {}",
            vals[k],
            is_eigenpair(&m, &x, vals[k], 1e-9)
        );
    }

    // spectrum on the number line
    let mut fig = Figure::new(FigureConfig::square(600), -3.0, 7.0, -1.0, 1.0)?;
    fig.grid_and_axes();
    for &lambda in vals.iter() {
        fig.marker(Point2::new(lambda, 0.0), 5, RED);
        fig.segment(Point2::new(lambda, -0.15), Point2::new(lambda, 0.15), BLUE);
    }
    fig.save(fig_path("block_eigenvalues"))?;
    println!("figure: {}", fig_path("block_eigenvalues").display());
    Ok(())
}

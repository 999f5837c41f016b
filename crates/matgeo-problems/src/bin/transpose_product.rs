// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 12.270
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Verify (AB)ᵀ = BᵀAᵀ for a pair of 2×2 matrices.

use matgeo_math::linalg::{mat_mul_2x2, transpose_2x2};
use matgeo_problems::{banner, fig_path, print_matrix, BLUE, GREEN, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner("12.270", "Compute (AB)ᵀ and confirm it equals BᵀAᵀ.");

    let a = [[2.0, 4.0], [1.0, 3.0]];
    let b = [[4.0, 6.0], [5.0, 9.0]];

    let ab_t = transpose_2x2(&mat_mul_2x2(&a, &b));
    let bt_at = mat_mul_2x2(&transpose_2x2(&b), &transpose_2x2(&a));

    print_matrix("A", &[&a[0], &a[1]]);
    print_matrix("B", &[&b[0], &b[1]]);
    print_matrix("(AB)ᵀ", &[&ab_t[0], &ab_t[1]]);
    print_matrix("BᵀAᵀ", &[&bt_at[0], &bt_at[1]]);
    println!("identity holds: {}", ab_t == bt_at);

    // column images of the unit square under AB and its transpose
    let ab = mat_mul_2x2(&a, &b);
    let mut fig = Figure::new(FigureConfig::square(600), -5.0, 55.0, -5.0, 55.0)?;
    fig.grid_and_axes();
    for (m, color) in [(&ab, BLUE), (&ab_t, GREEN)] {
        let c1 = Point2::new(m[0][0], m[1][0]);
        let c2 = Point2::new(m[0][1], m[1][1]);
        fig.segment(Point2::ORIGIN, c1, color);
        fig.segment(Point2::ORIGIN, c2, color);
        fig.marker(c1, 3, RED);
        fig.marker(c2, 3, RED);
    }
    fig.save(fig_path("transpose_product"))?;
    println!("figure: {}", fig_path("transpose_product").display());
    Ok(())
}

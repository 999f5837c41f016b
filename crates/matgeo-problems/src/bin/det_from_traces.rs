// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 5.13.74
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! det A of a 2×2 matrix from tr A = 3 and tr A³ = −18, by the
//! Cayley–Hamilton identity det A = (tr³A − tr A³) / (3·tr A).

use matgeo_math::linalg::{det_2x2, det_from_traces, mat_mul_2x2};
use matgeo_problems::{banner, fig_path, print_matrix, BLUE, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point2;

fn main() -> GeoResult<()> {
    banner(
        "5.13.74",
        "A 2×2 matrix A has tr A = 3 and tr A³ = −18. Find det A.",
    );

    let (tr_a, tr_a3) = (3.0, -18.0);
    let det = det_from_traces(tr_a, tr_a3)?;
    println!("det A = {det:.4}");

    // cross-check on a concrete witness with those traces:
    // λ² − 3λ + 5 = 0 gives tr = 3, det = 5, tr A³ = −18 for the
    // companion matrix of the characteristic polynomial.
    let witness = [[0.0, -5.0], [1.0, 3.0]];
    let w3 = mat_mul_2x2(&mat_mul_2x2(&witness, &witness), &witness);
    print_matrix("witness A", &[&witness[0], &witness[1]]);
    println!(
        "witness: tr A = {:.4}, tr A³ = {:.4}, det A = {:.4}",
        witness[0][0] + witness[1][1],
        w3[0][0] + w3[1][1],
        det_2x2(&witness)
    );

    // det over the admissible trace pairs, highlighting (3, −18)
    let mut fig = Figure::new(FigureConfig::square(600), -30.0, 10.0, -2.0, 12.0)?;
    fig.grid_and_axes();
    let curve: Vec<Point2> = (0..240)
        .filter_map(|i| {
            let t3 = -29.0 + i as f64 * 0.16;
            det_from_traces(tr_a, t3).ok().map(|d| Point2::new(t3, d))
        })
        .collect();
    fig.polyline(&curve, BLUE);
    fig.marker(Point2::new(tr_a3, det), 5, RED);
    fig.save(fig_path("det_from_traces"))?;
    println!("figure: {}", fig_path("det_from_traces").display());
    Ok(())
}

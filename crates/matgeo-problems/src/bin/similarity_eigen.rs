// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 12.166
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! After the change of basis Q = R⁻¹PR, which of Rx and R⁻¹x stays an
//! eigenvector of Q for an eigenpair (λ, x) of P?

use matgeo_math::eigen::{eig_sym_3x3, is_eigenpair};
use matgeo_math::linalg::inverse_3x3;
use matgeo_math::similarity::{apply_3x3, similarity_transform};
use matgeo_problems::{banner, fig_path, print_vec, BLUE, GREEN, RED};
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point2;
use ndarray::array;

const R: [[f64; 3]; 3] = [
    [0.22751661, 0.95187796, 0.90271902],
    [0.16238862, 0.50450366, 0.25222053],
    [0.3357095, 0.57062374, 0.8009969],
];

fn main() -> GeoResult<()> {
    banner(
        "12.166",
        "P has eigenpair (λ, x) and Q = R⁻¹PR. Show that R⁻¹x is an\n\
         eigenvector of Q for λ, while Rx in general is not.",
    );

    let p_fixed = [[2.0, 0.0, 0.0], [0.0, 3.0, 4.0], [0.0, 4.0, 9.0]];
    let p = array![[2.0, 0.0, 0.0], [0.0, 3.0, 4.0], [0.0, 4.0, 9.0]];

    let (vals, vecs) = eig_sym_3x3(&p);
    let lambda = vals[0];
    let x = vecs.column(0).to_owned();
    println!("eigenvalues of P: {:.4}, {:.4}, {:.4}", vals[0], vals[1], vals[2]);
    print_vec("x (for λ₁)", &x.to_vec());

    let q = similarity_transform(&R, &p_fixed)?;
    let r_inv = inverse_3x3(&R)?;
    let y_inv = apply_3x3(&r_inv, &x);
    let y_fwd = apply_3x3(&R, &x);

    let tr_q = q[[0, 0]] + q[[1, 1]] + q[[2, 2]];
    println!("tr(Q) = {tr_q:.6} (trace is similarity-invariant, tr(P) = 14)");
    println!(
        "R⁻¹x eigenvector of Q for λ = {:.4}: {}",
        lambda,
        is_eigenpair(&q, &y_inv, lambda, 1e-6)
    );
    println!(
        "Rx   eigenvector of Q for λ = {:.4}: {}",
        lambda,
        is_eigenpair(&q, &y_fwd, lambda, 1e-6)
    );

    // xy-plane shadows of x, R⁻¹x and Rx
    let mut fig = Figure::new(FigureConfig::square(600), -2.0, 2.0, -2.0, 2.0)?;
    fig.grid_and_axes();
    for (v, color) in [(&x, BLUE), (&y_inv, GREEN), (&y_fwd, RED)] {
        let tip = Point2::new(v[0], v[1]);
        fig.segment(Point2::ORIGIN, tip, color);
        fig.marker(tip, 3, color);
    }
    fig.save(fig_path("similarity_eigen"))?;
    println!("figure: {}", fig_path("similarity_eigen").display());
    Ok(())
}

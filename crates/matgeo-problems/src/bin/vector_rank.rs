// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Problem 12.686
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! D = 3A + 2B + C is linearly dependent on A, B, C: the stacked matrix
//! [A B C D] has rank 3. Demonstrated on random integer vectors.

use matgeo_math::linalg::rank;
use matgeo_problems::{banner, fig_path, print_vec, BLUE, GREEN, RED};
use matgeo_render::iso3d::Iso3;
use matgeo_render::{Figure, FigureConfig};
use matgeo_types::error::GeoResult;
use matgeo_types::point::Point3;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn stack_columns(columns: &[Point3]) -> Array2<f64> {
    Array2::from_shape_fn((3, columns.len()), |(i, j)| {
        let v = columns[j];
        [v.x, v.y, v.z][i]
    })
}

fn main() -> GeoResult<()> {
    banner(
        "12.686",
        "With D = 3A + 2B + C for random integer vectors A, B, C,\n\
         the matrix [A B C D] has rank 3.",
    );

    let mut rng = StdRng::seed_from_u64(2026);
    let random_vec = |rng: &mut StdRng| {
        Point3::new(
            rng.gen_range(-5..=5) as f64,
            rng.gen_range(-5..=5) as f64,
            rng.gen_range(-5..=5) as f64,
        )
    };

    // resample until A, B, C are independent
    let (a, b, c) = loop {
        let a = random_vec(&mut rng);
        let b = random_vec(&mut rng);
        let c = random_vec(&mut rng);
        if rank(&stack_columns(&[a, b, c])) == 3 {
            break (a, b, c);
        }
    };
    let d = a * 3.0 + b * 2.0 + c;

    print_vec("A", &[a.x, a.y, a.z]);
    print_vec("B", &[b.x, b.y, b.z]);
    print_vec("C", &[c.x, c.y, c.z]);
    print_vec("D = 3A + 2B + C", &[d.x, d.y, d.z]);

    let full = stack_columns(&[a, b, c, d]);
    println!("rank([A B C])   = {}", rank(&stack_columns(&[a, b, c])));
    println!("rank([A B C D]) = {}", rank(&full));

    let view = Iso3::default();
    let columns = [a, b, c, d];
    let mut shadows: Vec<_> = columns.iter().map(|&v| view.project(v)).collect();
    shadows.push(view.project(Point3::ORIGIN));
    let mut fig = Figure::around(FigureConfig::square(600), &shadows)?;
    fig.grid_and_axes();
    for (i, &tip) in shadows[..4].iter().enumerate() {
        let color = if i == 3 { RED } else { BLUE };
        fig.segment(view.project(Point3::ORIGIN), tip, color);
        fig.marker(tip, 3, GREEN);
    }
    fig.save(fig_path("vector_rank"))?;
    println!("figure: {}", fig_path("vector_rank").display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Collinearity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Collinearity tests: bordered determinant for three points, rank
//! deficiency for more.

use matgeo_math::linalg::rank;
use matgeo_types::point::Point2;
use ndarray::Array2;

/// Bordered determinant
/// `| x1 y1 1 ; x2 y2 1 ; x3 y3 1 |`; zero iff the points are collinear
/// (twice the signed triangle area).
pub fn collinear_det(p1: Point2, p2: Point2, p3: Point2) -> f64 {
    p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y)
}

/// Rank-based collinearity for any number of points.
///
/// Translates so the first point is the origin and checks that the matrix
/// of the remaining position vectors has rank ≤ 1.
pub fn points_collinear(points: &[Point2]) -> bool {
    if points.len() < 3 {
        return true;
    }
    let origin = points[0];
    let m = Array2::from_shape_fn((2, points.len() - 1), |(r, c)| {
        let v = points[c + 1] - origin;
        if r == 0 {
            v.x
        } else {
            v.y
        }
    });
    rank(&m) <= 1
}

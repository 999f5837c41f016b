// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Lines at a Distance
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The two lines through a point at a fixed distance from the origin.

use matgeo_math::eigen::eig_2x2;
use matgeo_types::error::{GeoError, GeoResult};
use matgeo_types::line::Line2;
use matgeo_types::point::Point2;

/// Normal vectors n of the lines through `p` whose distance from the
/// origin is `d`, found from `nᵀ M n = 0` with `M = p·pᵀ − d²·I`.
///
/// The eigendecomposition of the symmetric M (eigenvalues λ₁ ≥ 0 ≥ λ₂)
/// yields the normals `√(−λ₂)·v₁ ± √(λ₁)·v₂`. Both lines are tangent to
/// the circle of radius `d`. NoRealSolution when `p` lies inside that
/// circle (det M > 0 with both eigenvalues of one sign).
pub fn lines_through_point_at_distance(p: Point2, d: f64) -> GeoResult<(Line2, Line2)> {
    let m = [
        [p.x * p.x - d * d, p.x * p.y],
        [p.x * p.y, p.y * p.y - d * d],
    ];
    let det = m[0][0] * m[1][1] - m[0][1] * m[1][0];
    if det > 0.0 {
        return Err(GeoError::NoRealSolution(
            "point lies inside the circle of the given distance".into(),
        ));
    }

    // eig_2x2 sorts ascending: vals[0] = λ₂ ≤ 0 ≤ λ₁ = vals[1]
    let (vals, vecs) = eig_2x2(&m);
    let (l2, l1) = (vals[0], vals[1]);
    let v2 = Point2::new(vecs[0][0], vecs[0][1]);
    let v1 = Point2::new(vecs[1][0], vecs[1][1]);

    // nᵀMn = α²λ₁ + β²λ₂ for n = α·v₁ + β·v₂, so α = √(−λ₂), β = ±√λ₁.
    let w1 = v1 * (-l2).max(0.0).sqrt() + v2 * l1.max(0.0).sqrt();
    let w2 = v1 * (-l2).max(0.0).sqrt() - v2 * l1.max(0.0).sqrt();

    // Each line passes through p: nᵀx = nᵀp.
    Ok((
        Line2::from_normal(w1, w1.dot(&p)),
        Line2::from_normal(w2, w2.dot(&p)),
    ))
}

/// Perpendicular distance of a line from the origin.
pub fn distance_from_origin(line: &Line2) -> GeoResult<f64> {
    let n = line.normal().norm();
    if n < 1e-15 {
        return Err(GeoError::DegenerateInput("zero-normal line".into()));
    }
    Ok(line.c.abs() / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_pass_through_point_and_distance() {
        let p = Point2::new(1.0, 0.0);
        let d = 3.0_f64.sqrt() / 2.0;
        let (l1, l2) = lines_through_point_at_distance(p, d).unwrap();
        for l in [l1, l2] {
            assert!(l.contains(p, 1e-9), "line misses the point");
            let dist = distance_from_origin(&l).unwrap();
            assert!((dist - d).abs() < 1e-9, "distance {dist} != {d}");
        }
    }

    #[test]
    fn test_two_distinct_lines() {
        let p = Point2::new(1.0, 0.0);
        let d = 3.0_f64.sqrt() / 2.0;
        let (l1, l2) = lines_through_point_at_distance(p, d).unwrap();
        let cross = l1.a * l2.b - l1.b * l2.a;
        assert!(cross.abs() > 1e-9, "normals must not be parallel");
    }

    #[test]
    fn test_point_inside_circle_rejected() {
        let p = Point2::new(0.5, 0.0);
        assert!(lines_through_point_at_distance(p, 0.9).is_err());
    }
}

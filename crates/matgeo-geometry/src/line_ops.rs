// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Line Operations
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Intersection, reflection, rotation and sampling of lines.

use matgeo_math::linalg::solve_2x2;
use matgeo_types::error::{GeoError, GeoResult};
use matgeo_types::line::Line2;
use matgeo_types::point::Point2;

/// Intersection point of two lines; SingularMatrix when parallel.
pub fn intersect(l1: &Line2, l2: &Line2) -> GeoResult<Point2> {
    let m = [[l1.a, l1.b], [l2.a, l2.b]];
    let b = [-l1.c, -l2.c];
    let sol = solve_2x2(&m, &b)?;
    Ok(Point2::new(sol[0], sol[1]))
}

/// Reflection of `source` across `mirror`.
///
/// With normals n₁ (source) and n₂ (mirror) the reflected coefficients
/// are `2·(n₁·n₂)·n₂ − |n₂|²·n₁`, applied to the constant term as well.
/// A mirror with zero normal is DegenerateInput.
pub fn reflect(source: &Line2, mirror: &Line2) -> GeoResult<Line2> {
    let k1 = source.a * mirror.a + source.b * mirror.b;
    let k2 = mirror.a * mirror.a + mirror.b * mirror.b;
    if k2 < 1e-15 {
        return Err(GeoError::DegenerateInput("mirror line has zero normal".into()));
    }
    Ok(Line2::new(
        2.0 * mirror.a * k1 - source.a * k2,
        2.0 * mirror.b * k1 - source.b * k2,
        2.0 * mirror.c * k1 - source.c * k2,
    ))
}

/// Unsigned angle between two lines in radians, in `[0, π/2]`.
pub fn angle_between(l1: &Line2, l2: &Line2) -> GeoResult<f64> {
    let n1 = l1.normal();
    let n2 = l2.normal();
    let denom = n1.norm() * n2.norm();
    if denom < 1e-15 {
        return Err(GeoError::DegenerateInput(
            "angle with a zero-normal line".into(),
        ));
    }
    let cos = (n1.dot(&n2).abs() / denom).clamp(0.0, 1.0);
    Ok(cos.acos())
}

/// Anti-clockwise rotation of a point about the origin.
pub fn rotate_point(p: Point2, theta: f64) -> Point2 {
    let (sin, cos) = theta.sin_cos();
    Point2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

/// Parametric form of `nᵀx = k`: a direction vector and one point on the
/// line (the foot of the perpendicular from the origin).
pub fn param_norm(line: &Line2) -> GeoResult<(Point2, Point2)> {
    let n = line.normal();
    let n2 = n.dot(&n);
    if n2 < 1e-15 {
        return Err(GeoError::DegenerateInput("zero-normal line".into()));
    }
    let k = -line.c;
    let point = n * (k / n2);
    Ok((n.perp(), point))
}

/// `n` samples of `A + λ·m` for λ in `[k1, k2]`.
pub fn line_samples(dir: Point2, point: Point2, k1: f64, k2: f64, n: usize) -> Vec<Point2> {
    assert!(n >= 2, "line_samples needs at least two samples");
    (0..n)
        .map(|i| {
            let lam = k1 + (k2 - k1) * i as f64 / (n - 1) as f64;
            point + dir * lam
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_substitutes_back() {
        // 5x + 4y = 9500, 4x + 3y = 7370
        let l1 = Line2::from_normal(Point2::new(5.0, 4.0), 9500.0);
        let l2 = Line2::from_normal(Point2::new(4.0, 3.0), 7370.0);
        let p = intersect(&l1, &l2).unwrap();
        assert!((5.0 * p.x + 4.0 * p.y - 9500.0).abs() < 1e-6);
        assert!((4.0 * p.x + 3.0 * p.y - 7370.0).abs() < 1e-6);
    }

    #[test]
    fn test_intersect_parallel() {
        let l1 = Line2::new(1.0, 1.0, -1.0);
        let l2 = Line2::new(2.0, 2.0, 5.0);
        assert!(intersect(&l1, &l2).is_err());
    }

    #[test]
    fn test_reflect_preserves_angle_to_mirror() {
        let mirror = Line2::new(0.0, 1.0, 0.0); // y = 0
        let source = Line2::new(-0.57, 0.82, 0.0);
        let image = reflect(&source, &mirror).unwrap();
        let a1 = angle_between(&mirror, &source).unwrap();
        let a2 = angle_between(&mirror, &image).unwrap();
        assert!((a1 - a2).abs() < 1e-10, "angles {a1} vs {a2}");
    }

    #[test]
    fn test_reflect_in_x_axis_negates_x_coefficient() {
        // −0.57x + 0.82y = 0 in y = 0 gives 0.57x + 0.82y = 0
        let mirror = Line2::new(0.0, 1.0, 0.0);
        let source = Line2::new(-0.57, 0.82, 0.0);
        let image = reflect(&source, &mirror).unwrap();
        assert!((image.a - 0.57).abs() < 1e-12);
        assert!((image.b - 0.82).abs() < 1e-12);
        assert!(image.c.abs() < 1e-12);
    }

    #[test]
    fn test_reflect_in_x_axis_flips_slope() {
        // y = x reflected in y = 0 is y = -x
        let mirror = Line2::new(0.0, 1.0, 0.0);
        let source = Line2::new(1.0, -1.0, 0.0);
        let image = reflect(&source, &mirror).unwrap();
        // image must contain (1, -1)
        assert!(image.contains(Point2::new(1.0, -1.0), 1e-12));
        assert!(image.contains(Point2::ORIGIN, 1e-12));
    }

    #[test]
    fn test_reflect_degenerate_mirror() {
        let mirror = Line2::new(0.0, 0.0, 1.0);
        let source = Line2::new(1.0, 1.0, 0.0);
        assert!(reflect(&source, &mirror).is_err());
    }

    #[test]
    fn test_angle_degenerate() {
        let l1 = Line2::new(0.0, 0.0, 1.0);
        let l2 = Line2::new(1.0, 0.0, 0.0);
        assert!(angle_between(&l1, &l2).is_err());
    }

    #[test]
    fn test_rotate_point_90() {
        let q = rotate_point(Point2::new(1.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!(q.x.abs() < 1e-12);
        assert!((q.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_point_30_closed_form() {
        // (20, 10) through 30° lands on (10√3 − 5, 10 + 5√3)
        let q = rotate_point(Point2::new(20.0, 10.0), std::f64::consts::FRAC_PI_6);
        assert!((q.x - (10.0 * 3f64.sqrt() - 5.0)).abs() < 1e-12);
        assert!((q.y - (10.0 + 5.0 * 3f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_preserves_norm() {
        let p = Point2::new(4.0, 5.0);
        let q = rotate_point(p, 0.777);
        assert!((p.norm() - q.norm()).abs() < 1e-12);
    }

    #[test]
    fn test_param_norm_point_on_line() {
        let l = Line2::from_normal(Point2::new(5.0, 2.0), 4.0);
        let (dir, point) = param_norm(&l).unwrap();
        assert!(l.contains(point, 1e-12));
        // moving along dir stays on the line
        assert!(l.contains(point + dir * 3.5, 1e-9));
    }

    #[test]
    fn test_line_samples_endpoints() {
        let pts = line_samples(Point2::new(1.0, 2.0), Point2::ORIGIN, -1.0, 1.0, 11);
        assert_eq!(pts.len(), 11);
        assert!((pts[0].x + 1.0).abs() < 1e-12);
        assert!((pts[10].y - 2.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "at least two samples")]
    fn test_line_samples_rejects_single_sample() {
        line_samples(Point2::new(1.0, 0.0), Point2::ORIGIN, 0.0, 1.0, 1);
    }
}

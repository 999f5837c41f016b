// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Hyperbola Normals
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Normals to the hyperbola `x²/a² − y²/b² = 1`.

use matgeo_math::linalg::solve_2x2;
use matgeo_types::error::GeoResult;
use matgeo_types::line::Line2;
use matgeo_types::point::Point2;

/// Point at eccentric parameter θ: `(a/cosθ, b·tanθ)`.
pub fn point_at(a: f64, b: f64, theta: f64) -> Point2 {
    Point2::new(a / theta.cos(), b * theta.tan())
}

/// Normal line at parameter θ:
/// `a·tanθ · x + (b/cosθ) · y = (a² + b²)·tanθ/cosθ`.
pub fn normal_at(a: f64, b: f64, theta: f64) -> Line2 {
    let coeff_x = a * theta.tan();
    let coeff_y = b / theta.cos();
    let rhs = (a * a + b * b) * theta.tan() / theta.cos();
    Line2::from_normal(Point2::new(coeff_x, coeff_y), rhs)
}

/// Meet of the normals at θ and π/2 − θ.
///
/// The y-coordinate is the classroom closed form `k = −(a² + b²)/b`,
/// independent of θ.
pub fn normal_intersection(a: f64, b: f64, theta: f64) -> GeoResult<Point2> {
    let phi = std::f64::consts::FRAC_PI_2 - theta;
    let n1 = normal_at(a, b, theta);
    let n2 = normal_at(a, b, phi);

    let m = [[n1.a, n1.b], [n2.a, n2.b]];
    let rhs = [-n1.c, -n2.c];
    let sol = solve_2x2(&m, &rhs)?;
    Ok(Point2::new(sol[0], sol[1]))
}

/// Samples of the right branch over `t ∈ [-t_max, t_max]` using the
/// hyperbolic parametrisation `(a·cosh t, b·sinh t)`.
pub fn branch_samples(a: f64, b: f64, t_max: f64, n: usize) -> Vec<Point2> {
    assert!(n >= 2, "branch_samples needs at least two samples");
    (0..n)
        .map(|i| {
            let t = -t_max + 2.0 * t_max * i as f64 / (n - 1) as f64;
            Point2::new(a * t.cosh(), b * t.sinh())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_on_hyperbola() {
        let (a, b) = (5.0, 3.0);
        let p = point_at(a, b, 0.52);
        let lhs = p.x * p.x / (a * a) - p.y * p.y / (b * b);
        assert!((lhs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_normal_passes_through_point() {
        let (a, b, theta) = (5.0, 3.0, 0.52);
        let p = point_at(a, b, theta);
        let n = normal_at(a, b, theta);
        assert!(n.contains(p, 1e-8), "residual = {}", n.eval(p));
    }

    #[test]
    fn test_normal_perpendicular_to_tangent() {
        // Tangent direction at θ is d/dθ (a/cosθ, b·tanθ).
        let (a, b, theta): (f64, f64, f64) = (5.0, 3.0, 0.52);
        let tangent_dir = Point2::new(
            a * theta.sin() / (theta.cos() * theta.cos()),
            b / (theta.cos() * theta.cos()),
        );
        let n = normal_at(a, b, theta);
        // The normal's direction is perpendicular to its normal vector,
        // which must align with the tangent direction's perpendicular:
        let cross = n.normal().x * tangent_dir.y - n.normal().y * tangent_dir.x;
        let dot = n.normal().dot(&tangent_dir);
        // normal vector of the normal line ∥ tangent direction
        assert!(cross.abs() < 1e-8 * dot.abs().max(1.0));
    }

    #[test]
    fn test_intersection_k_closed_form() {
        let (a, b, theta) = (5.0, 3.0, 0.52);
        let meet = normal_intersection(a, b, theta).unwrap();
        let k_theory = -(a * a + b * b) / b;
        assert!(
            (meet.y - k_theory).abs() < 1e-8,
            "k = {}, theory {}",
            meet.y,
            k_theory
        );
    }

    #[test]
    fn test_branch_samples_satisfy_equation() {
        let pts = branch_samples(5.0, 3.0, 1.8, 50);
        for p in pts {
            let lhs = p.x * p.x / 25.0 - p.y * p.y / 9.0;
            assert!((lhs - 1.0).abs() < 1e-9);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Planes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Planes `nᵀx = c` and the meet of three of them.

use matgeo_math::linalg::solve_3x3;
use matgeo_types::error::{GeoError, GeoResult};
use matgeo_types::point::Point3;

/// Plane `n.x·x + n.y·y + n.z·z = c`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub normal: Point3,
    pub c: f64,
}

impl Plane {
    pub fn new(normal: Point3, c: f64) -> Self {
        Plane { normal, c }
    }

    /// Signed residual `nᵀp − c`; zero on the plane.
    pub fn eval(&self, p: Point3) -> f64 {
        self.normal.dot(&p) - self.c
    }

    /// Height `z` of the plane above `(x, y)`.
    ///
    /// DegenerateInput when the plane is vertical (z-coefficient ≈ 0).
    pub fn z_at(&self, x: f64, y: f64) -> GeoResult<f64> {
        if self.normal.z.abs() < 1e-15 {
            return Err(GeoError::DegenerateInput(
                "vertical plane has no z(x, y) form".into(),
            ));
        }
        Ok((self.c - self.normal.x * x - self.normal.y * y) / self.normal.z)
    }
}

/// Common point of three planes; SingularMatrix when the normals are
/// linearly dependent.
pub fn intersect_three(planes: &[Plane; 3]) -> GeoResult<Point3> {
    let m = [
        [planes[0].normal.x, planes[0].normal.y, planes[0].normal.z],
        [planes[1].normal.x, planes[1].normal.y, planes[1].normal.z],
        [planes[2].normal.x, planes[2].normal.y, planes[2].normal.z],
    ];
    let b = [planes[0].c, planes[1].c, planes[2].c];
    let x = solve_3x3(&m, &b)?;
    Ok(Point3::new(x[0], x[1], x[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook_planes() -> [Plane; 3] {
        [
            Plane::new(Point3::new(5.0, -1.0, 4.0), 5.0),
            Plane::new(Point3::new(2.0, 3.0, 5.0), 2.0),
            Plane::new(Point3::new(5.0, -2.0, 6.0), -1.0),
        ]
    }

    #[test]
    fn test_three_plane_meet() {
        let meet = intersect_three(&textbook_planes()).unwrap();
        assert!((meet.x - 3.0).abs() < 1e-9);
        assert!((meet.y - 2.0).abs() < 1e-9);
        assert!((meet.z - (-2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_meet_lies_on_all_planes() {
        let planes = textbook_planes();
        let meet = intersect_three(&planes).unwrap();
        for plane in planes {
            assert!(plane.eval(meet).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dependent_planes_rejected() {
        let p = Plane::new(Point3::new(1.0, 1.0, 1.0), 1.0);
        let q = Plane::new(Point3::new(2.0, 2.0, 2.0), 5.0);
        let r = Plane::new(Point3::new(0.0, 1.0, 0.0), 0.0);
        assert!(intersect_three(&[p, q, r]).is_err());
    }

    #[test]
    fn test_z_at_matches_eval() {
        let plane = Plane::new(Point3::new(5.0, -1.0, 4.0), 5.0);
        let z = plane.z_at(1.0, 2.0).unwrap();
        assert!(plane.eval(Point3::new(1.0, 2.0, z)).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_plane_z_at() {
        let plane = Plane::new(Point3::new(1.0, 1.0, 0.0), 2.0);
        assert!(plane.z_at(0.0, 0.0).is_err());
    }
}

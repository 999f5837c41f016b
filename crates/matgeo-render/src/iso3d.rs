// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Orthographic 3D Projection
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Orthographic projection of 3D scenes onto the 2D figure plane.

use matgeo_types::point::{Point2, Point3};

/// View direction given by yaw (about z) and pitch (about the rotated
/// x-axis), both in radians.
#[derive(Debug, Clone, Copy)]
pub struct Iso3 {
    pub yaw: f64,
    pub pitch: f64,
}

impl Default for Iso3 {
    /// The usual isometric-looking view.
    fn default() -> Self {
        Iso3 {
            yaw: std::f64::consts::FRAC_PI_4,
            pitch: 0.615, // atan(1/√2)
        }
    }
}

impl Iso3 {
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Iso3 { yaw, pitch }
    }

    /// Drop the depth coordinate after rotating into view space.
    pub fn project(&self, p: Point3) -> Point2 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let x1 = cy * p.x + sy * p.y;
        let y1 = -sy * p.x + cy * p.y;
        Point2::new(x1, cp * p.z - sp * y1)
    }

    /// Project a 3D polyline for [`crate::Figure::polyline`].
    pub fn project_path(&self, points: &[Point3]) -> Vec<Point2> {
        points.iter().map(|&p| self.project(p)).collect()
    }

    /// Wireframe of the surface `z = f(x, y)` over a rectangle: `n`
    /// iso-x and `n` iso-y projected polylines, each with `n` samples.
    pub fn wireframe(
        &self,
        f: impl Fn(f64, f64) -> f64,
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        n: usize,
    ) -> Vec<Vec<Point2>> {
        assert!(n >= 2, "wireframe needs at least two samples per axis");
        let at = |i: usize, lo: f64, hi: f64| lo + (hi - lo) * i as f64 / (n - 1) as f64;
        let mut lines = Vec::with_capacity(2 * n);
        for i in 0..n {
            let x = at(i, x0, x1);
            lines.push(
                (0..n)
                    .map(|j| {
                        let y = at(j, y0, y1);
                        self.project(Point3::new(x, y, f(x, y)))
                    })
                    .collect(),
            );
        }
        for j in 0..n {
            let y = at(j, y0, y1);
            lines.push(
                (0..n)
                    .map(|i| {
                        let x = at(i, x0, x1);
                        self.project(Point3::new(x, y, f(x, y)))
                    })
                    .collect(),
            );
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_is_linear() {
        let view = Iso3::default();
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(-2.0, 0.5, 1.0);
        let lhs = view.project(a + b);
        let rhs = view.project(a) + view.project(b);
        assert!((lhs - rhs).norm() < 1e-12);
    }

    #[test]
    fn test_zero_view_keeps_xz() {
        let view = Iso3::new(0.0, 0.0);
        let q = view.project(Point3::new(2.0, 5.0, -1.0));
        assert!((q.x - 2.0).abs() < 1e-12);
        assert!((q.y - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_wireframe_shape() {
        let view = Iso3::default();
        let lines = view.wireframe(|x, y| x + y, 0.0, 1.0, 0.0, 1.0, 5);
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.len() == 5));
    }
}

// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Line Type
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{GeoError, GeoResult};
use crate::point::Point2;
use serde::{Deserialize, Serialize};

/// A line in general form `a·x + b·y + c = 0`.
///
/// The normal vector is `(a, b)`. Coefficients are kept as given; no
/// normalisation is applied, so `2x + 2y + 2 = 0` and `x + y + 1 = 0`
/// compare unequal while describing the same line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line2 {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Line2 { a, b, c }
    }

    /// Line `nᵀx = k` given its normal vector and constant.
    pub fn from_normal(n: Point2, k: f64) -> Self {
        Line2 {
            a: n.x,
            b: n.y,
            c: -k,
        }
    }

    /// Line through two distinct points.
    pub fn from_points(p: Point2, q: Point2) -> GeoResult<Self> {
        let dir = q - p;
        if dir.norm() < 1e-15 {
            return Err(GeoError::DegenerateInput(
                "line through coincident points".into(),
            ));
        }
        let n = dir.perp();
        Ok(Line2::from_normal(n, n.dot(&p)))
    }

    pub fn normal(&self) -> Point2 {
        Point2::new(self.a, self.b)
    }

    /// Direction vector: the 90° rotation of the normal.
    pub fn direction(&self) -> Point2 {
        self.normal().perp()
    }

    /// Signed residual `a·x + b·y + c` at a point; zero on the line.
    pub fn eval(&self, p: Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    pub fn contains(&self, p: Point2, tol: f64) -> bool {
        self.eval(p).abs() <= tol
    }

    /// True when the normal vector vanishes (`0·x + 0·y + c = 0`).
    pub fn is_degenerate(&self) -> bool {
        self.normal().norm() < 1e-15
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_contains_both() {
        let p = Point2::new(1.0, 2.0);
        let q = Point2::new(4.0, -1.0);
        let l = Line2::from_points(p, q).unwrap();
        assert!(l.contains(p, 1e-12));
        assert!(l.contains(q, 1e-12));
    }

    #[test]
    fn test_from_points_coincident() {
        let p = Point2::new(1.0, 2.0);
        assert!(Line2::from_points(p, p).is_err());
    }

    #[test]
    fn test_direction_orthogonal_to_normal() {
        let l = Line2::new(5.0, -9.0, 21.0);
        assert!(l.normal().dot(&l.direction()).abs() < 1e-12);
    }

    #[test]
    fn test_from_normal_constant() {
        // 5x + 2y = 4
        let l = Line2::from_normal(Point2::new(5.0, 2.0), 4.0);
        assert!(l.contains(Point2::new(0.0, 2.0), 1e-12));
    }

    #[test]
    fn test_degenerate_line() {
        assert!(Line2::new(0.0, 0.0, 3.0).is_degenerate());
        assert!(!Line2::new(0.0, 1.0, 0.0).is_degenerate());
    }
}

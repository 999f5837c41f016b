// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Points and Vectors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D point, used interchangeably as a position and a free vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    pub fn dot(&self, other: &Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or None for the zero vector.
    pub fn unit(&self) -> Option<Point2> {
        let n = self.norm();
        if n < 1e-15 {
            return None;
        }
        Some(Point2::new(self.x / n, self.y / n))
    }

    /// 90° anti-clockwise rotation.
    pub fn perp(&self) -> Point2 {
        Point2::new(-self.y, self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2 {
    type Output = Point2;
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;
    fn mul(self, k: f64) -> Point2 {
        Point2::new(self.x * k, self.y * k)
    }
}

impl Neg for Point2 {
    type Output = Point2;
    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

/// A 3D point / vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    pub fn dot(&self, other: &Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Point3) -> Point3 {
        Point3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn unit(&self) -> Option<Point3> {
        let n = self.norm();
        if n < 1e-15 {
            return None;
        }
        Some(Point3::new(self.x / n, self.y / n, self.z / n))
    }
}

impl Add for Point3 {
    type Output = Point3;
    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;
    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;
    fn mul(self, k: f64) -> Point3 {
        Point3::new(self.x * k, self.y * k, self.z * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perp_is_rotation() {
        let v = Point2::new(3.0, 4.0);
        let w = v.perp();
        assert!((v.dot(&w)).abs() < 1e-12, "perp must be orthogonal");
        assert!((w.norm() - v.norm()).abs() < 1e-12, "perp preserves norm");
    }

    #[test]
    fn test_unit_zero_vector() {
        assert!(Point2::ORIGIN.unit().is_none());
        assert!(Point3::ORIGIN.unit().is_none());
    }

    #[test]
    fn test_dot_as_work_along_displacement() {
        // P = 2i − 5j + 6k from A(6, 1, −3) to B(4, −3, −2): 22 J
        let force = Point3::new(2.0, -5.0, 6.0);
        let a = Point3::new(6.0, 1.0, -3.0);
        let b = Point3::new(4.0, -3.0, -2.0);
        assert!((force.dot(&(b - a)) - 22.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_orthogonality() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(-2.0, 0.5, 4.0);
        let c = a.cross(&b);
        assert!(a.dot(&c).abs() < 1e-12);
        assert!(b.dot(&c).abs() < 1e-12);
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Point2::new(6.0, 1.0);
        let b = Point2::new(4.0, -3.0);
        let d = b - a;
        assert!((d.x - (-2.0)).abs() < 1e-15);
        assert!((d.y - (-4.0)).abs() < 1e-15);
        let s = a + b * 2.0;
        assert!((s.x - 14.0).abs() < 1e-15);
        assert!((s.y - (-5.0)).abs() < 1e-15);
    }
}

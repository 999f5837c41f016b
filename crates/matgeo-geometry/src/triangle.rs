// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Triangles from Lines
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Triangle vertices from three bounding lines and the determinant area.

use crate::line_ops::intersect;
use matgeo_types::error::GeoResult;
use matgeo_types::line::Line2;
use matgeo_types::point::Point2;

/// Pairwise intersections of three lines, in the order
/// (l1∩l2, l1∩l3, l2∩l3).
pub fn vertices_from_lines(l1: &Line2, l2: &Line2, l3: &Line2) -> GeoResult<[Point2; 3]> {
    Ok([
        intersect(l1, l2)?,
        intersect(l1, l3)?,
        intersect(l2, l3)?,
    ])
}

/// Area as half the absolute determinant of two side vectors.
pub fn area(v: &[Point2; 3]) -> f64 {
    let ab = v[1] - v[0];
    let ac = v[2] - v[0];
    0.5 * (ab.x * ac.y - ab.y * ac.x).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matgeo_types::point::Point2;

    #[test]
    fn test_textbook_triangle_area() {
        // x − y = 1, x + y = 1, y = 1 bound a triangle with vertices
        // (1,0), (2,1), (0,1) and area 1.
        let l1 = Line2::from_normal(Point2::new(1.0, -1.0), 1.0);
        let l2 = Line2::from_normal(Point2::new(1.0, 1.0), 1.0);
        let l3 = Line2::from_normal(Point2::new(0.0, 1.0), 1.0);
        let v = vertices_from_lines(&l1, &l2, &l3).unwrap();
        assert!((area(&v) - 1.0).abs() < 1e-10, "area = {}", area(&v));
    }

    #[test]
    fn test_vertices_on_their_lines() {
        let l1 = Line2::from_normal(Point2::new(1.0, -1.0), 1.0);
        let l2 = Line2::from_normal(Point2::new(1.0, 1.0), 1.0);
        let l3 = Line2::from_normal(Point2::new(0.0, 1.0), 1.0);
        let v = vertices_from_lines(&l1, &l2, &l3).unwrap();
        assert!(l1.contains(v[0], 1e-9) && l2.contains(v[0], 1e-9));
        assert!(l1.contains(v[1], 1e-9) && l3.contains(v[1], 1e-9));
        assert!(l2.contains(v[2], 1e-9) && l3.contains(v[2], 1e-9));
    }

    #[test]
    fn test_degenerate_area_for_collinear_vertices() {
        let v = [
            Point2::ORIGIN,
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ];
        assert!(area(&v) < 1e-12);
    }

    #[test]
    fn test_parallel_lines_rejected() {
        let l1 = Line2::from_normal(Point2::new(1.0, 1.0), 1.0);
        let l2 = Line2::from_normal(Point2::new(2.0, 2.0), 5.0);
        let l3 = Line2::from_normal(Point2::new(0.0, 1.0), 1.0);
        assert!(vertices_from_lines(&l1, &l2, &l3).is_err());
    }
}

// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Direction Cosines
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Direction cosines of 3D lines and angles between them.

use matgeo_types::error::{GeoError, GeoResult};
use matgeo_types::point::Point3;

/// Direction cosines: components of the unit vector along `v`.
pub fn direction_cosines(v: Point3) -> GeoResult<Point3> {
    v.unit()
        .ok_or_else(|| GeoError::DegenerateInput("zero direction vector".into()))
}

/// Unsigned angle in radians between two lines given by direction ratios.
pub fn angle_between_directions(d1: Point3, d2: Point3) -> GeoResult<f64> {
    let c1 = direction_cosines(d1)?;
    let c2 = direction_cosines(d2)?;
    let cos = c1.dot(&c2).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Direction ratios of the two lines whose direction cosines satisfy
/// `l + m + n = 0` and `l² + m² − n² = 0`.
///
/// Substituting n = −(l+m) into the quadratic gives `l·m = 0`, so one of
/// l, m vanishes in each family: ratios (0, 1, −1) and (1, 0, −1).
pub fn constrained_direction_pair() -> (Point3, Point3) {
    (Point3::new(0.0, 1.0, -1.0), Point3::new(1.0, 0.0, -1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_cosines_unit_sum() {
        let c = direction_cosines(Point3::new(2.0, -1.0, 2.0)).unwrap();
        let sum_sq = c.x * c.x + c.y * c.y + c.z * c.z;
        assert!((sum_sq - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_rejected() {
        assert!(direction_cosines(Point3::ORIGIN).is_err());
    }

    #[test]
    fn test_constrained_pair_satisfies_equations() {
        let (d1, d2) = constrained_direction_pair();
        for d in [d1, d2] {
            let c = direction_cosines(d).unwrap();
            assert!((c.x + c.y + c.z).abs() < 1e-12, "l + m + n = 0");
            assert!(
                (c.x * c.x + c.y * c.y - c.z * c.z).abs() < 1e-12,
                "l² + m² − n² = 0"
            );
        }
    }

    #[test]
    fn test_angle_between_constrained_lines_is_60_deg() {
        let (d1, d2) = constrained_direction_pair();
        let angle = angle_between_directions(d1, d2).unwrap();
        assert!((angle - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
    }
}

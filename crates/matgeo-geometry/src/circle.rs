// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Circle Tangents
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tangent construction for a circle centred at the origin.

use matgeo_types::point::Point2;

/// Contact points of the two tangents from an external point to the
/// circle `x² + y² = r²`.
///
/// Each contact q satisfies the polar relation `q·p = r²` together with
/// `|q| = r`, which decomposes q along p and its perpendicular:
/// `q = (r²/|p|²)·p ± (r·√(|p|² − r²)/|p|²)·p⊥`. Returns None when `p`
/// lies inside the circle (no tangent exists).
pub fn tangent_points(radius: f64, p: Point2) -> Option<(Point2, Point2)> {
    let p2 = p.dot(&p);
    if p2 < 1e-30 || p2 < radius * radius {
        return None;
    }
    let base = p * (radius * radius / p2);
    let offset = p.perp() * (radius * (p2 - radius * radius).sqrt() / p2);
    Some((base + offset, base - offset))
}

/// Sample points of the circle of radius `r` about `center`, for plotting.
pub fn circle_samples(center: Point2, r: f64, n: usize) -> Vec<Point2> {
    assert!(n >= 2, "circle_samples needs at least two samples");
    (0..n)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / (n - 1) as f64;
            Point2::new(center.x + r * theta.cos(), center.y + r * theta.sin())
        })
        .collect()
}

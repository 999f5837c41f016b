//! Quadratic roots, directly and through the conic–line matrix form.

use matgeo_types::point::Point2;

/// Real roots of `a·x² + b·x + c = 0`, larger root first.
///
/// None when the discriminant is negative or the equation degenerates
/// (a = 0).
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a.abs() < 1e-15 {
        return None;
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    Some(((-b + sqrt_disc) / (2.0 * a), (-b - sqrt_disc) / (2.0 * a)))
}

/// Intersection parameters of the line `x = h + κ·m` with the conic
/// `xᵀVx + 2uᵀx + f = 0`.
///
/// `v` is the symmetric 2×2 conic matrix. Returns the two κ values
/// (κ₁ ≥ κ₂), or None when the line misses the conic or `mᵀVm = 0`.
pub fn conic_line_intersection(
    v: &[[f64; 2]; 2],
    u: Point2,
    f: f64,
    h: Point2,
    m: Point2,
) -> Option<(f64, f64)> {
    let vm = Point2::new(
        v[0][0] * m.x + v[0][1] * m.y,
        v[1][0] * m.x + v[1][1] * m.y,
    );
    let vh = Point2::new(
        v[0][0] * h.x + v[0][1] * h.y,
        v[1][0] * h.x + v[1][1] * h.y,
    );

    let m_v_m = m.dot(&vm);
    let g_h = h.dot(&vh) + 2.0 * u.dot(&h) + f;
    let m_vh_u = m.dot(&(vh + u));

    if m_v_m.abs() < 1e-15 {
        return None;
    }
    let disc = m_vh_u * m_vh_u - g_h * m_v_m;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let k1 = (-m_vh_u + sqrt_disc) / m_v_m;
    let k2 = (-m_vh_u - sqrt_disc) / m_v_m;
    Some((k1.max(k2), k1.min(k2)))
}

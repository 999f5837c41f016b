//! Dense linear algebra for 2×2 and 3×3 systems.
//!
//! Determinants, Gaussian elimination, inverses, matrix rank and the
//! Cayley–Hamilton trace identity used by the worked examples.

use matgeo_types::error::{GeoError, GeoResult};
use ndarray::Array2;

/// Pivot tolerance below which a matrix is treated as singular.
const SINGULAR_TOL: f64 = 1e-12;

/// Rank tolerance, matching `numpy.linalg.matrix_rank` for classroom-sized
/// integer matrices.
const RANK_TOL: f64 = 1e-10;

pub fn det_2x2(m: &[[f64; 2]; 2]) -> f64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

pub fn det_3x3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Solve `M·x = b` for a 2×2 system by Gaussian elimination with a row
/// swap when the first pivot vanishes.
pub fn solve_2x2(m: &[[f64; 2]; 2], b: &[f64; 2]) -> GeoResult<[f64; 2]> {
    // Augmented matrix [m | b]
    let mut aug = [
        [m[0][0], m[0][1], b[0]],
        [m[1][0], m[1][1], b[1]],
    ];

    if aug[0][0].abs() < SINGULAR_TOL {
        aug.swap(0, 1);
    }
    if aug[0][0].abs() < SINGULAR_TOL {
        return Err(GeoError::SingularMatrix);
    }

    let factor = aug[1][0] / aug[0][0];
    aug[1][1] -= factor * aug[0][1];
    aug[1][2] -= factor * aug[0][2];

    if aug[1][1].abs() < SINGULAR_TOL {
        return Err(GeoError::SingularMatrix);
    }

    let y = aug[1][2] / aug[1][1];
    let x = (aug[0][2] - aug[0][1] * y) / aug[0][0];
    Ok([x, y])
}

/// Inverse of a 3×3 matrix via the adjugate.
pub fn inverse_3x3(m: &[[f64; 3]; 3]) -> GeoResult<[[f64; 3]; 3]> {
    let det = det_3x3(m);
    if det.abs() < SINGULAR_TOL {
        return Err(GeoError::SingularMatrix);
    }
    let inv_det = 1.0 / det;

    let mut cof = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            // 2x2 minor with row i and column j removed
            let mut minor = [0.0; 4];
            let mut k = 0;
            for r in 0..3 {
                if r == i {
                    continue;
                }
                for c in 0..3 {
                    if c == j {
                        continue;
                    }
                    minor[k] = m[r][c];
                    k += 1;
                }
            }
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            cof[i][j] = sign * (minor[0] * minor[3] - minor[1] * minor[2]);
        }
    }

    // adjugate = cofactor transpose
    let mut inv = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            inv[i][j] = cof[j][i] * inv_det;
        }
    }
    Ok(inv)
}

/// Solve `M·x = b` for a 3×3 system.
pub fn solve_3x3(m: &[[f64; 3]; 3], b: &[f64; 3]) -> GeoResult<[f64; 3]> {
    let inv = inverse_3x3(m)?;
    Ok(mat_vec_3(&inv, b))
}

pub fn mat_vec_3(m: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i] += m[i][j] * v[j];
        }
    }
    out
}

pub fn mat_mul_2x2(a: &[[f64; 2]; 2], b: &[[f64; 2]; 2]) -> [[f64; 2]; 2] {
    let mut out = [[0.0; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                out[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    out
}

pub fn transpose_2x2(m: &[[f64; 2]; 2]) -> [[f64; 2]; 2] {
    [[m[0][0], m[1][0]], [m[0][1], m[1][1]]]
}

/// Matrix rank by row echelon reduction with partial pivoting.
///
/// Used by the collinearity checks: points are collinear exactly when the
/// matrix of their position vectors has rank 1.
pub fn rank(m: &Array2<f64>) -> usize {
    let (rows, cols) = m.dim();
    let mut a = m.clone();
    let mut rank = 0;
    let mut pivot_row = 0;

    for col in 0..cols {
        if pivot_row >= rows {
            break;
        }
        // Partial pivot: largest magnitude in this column
        let mut best = pivot_row;
        for r in (pivot_row + 1)..rows {
            if a[[r, col]].abs() > a[[best, col]].abs() {
                best = r;
            }
        }
        if a[[best, col]].abs() < RANK_TOL {
            continue;
        }
        if best != pivot_row {
            for c in 0..cols {
                let tmp = a[[pivot_row, c]];
                a[[pivot_row, c]] = a[[best, c]];
                a[[best, c]] = tmp;
            }
        }
        for r in (pivot_row + 1)..rows {
            let factor = a[[r, col]] / a[[pivot_row, col]];
            for c in col..cols {
                a[[r, c]] -= factor * a[[pivot_row, c]];
            }
        }
        pivot_row += 1;
        rank += 1;
    }
    rank
}

/// Determinant of a 2×2 matrix A from its trace and the trace of A³.
///
/// Cayley–Hamilton for 2×2: A² = tr(A)·A − det(A)·I, hence
/// tr(A³) = tr(A)³ − 3·det(A)·tr(A) and
/// det(A) = (tr(A)³ − tr(A³)) / (3·tr(A)).
pub fn det_from_traces(tr_a: f64, tr_a3: f64) -> GeoResult<f64> {
    if tr_a.abs() < SINGULAR_TOL {
        return Err(GeoError::DegenerateInput(
            "tr(A) = 0: determinant not recoverable from traces".into(),
        ));
    }
    Ok((tr_a.powi(3) - tr_a3) / (3.0 * tr_a))
}

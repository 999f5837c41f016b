//! Eigenvalue decompositions for 2×2 and symmetric 3×3 matrices.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// 2×2 eigenvalue decomposition via the characteristic quadratic.
///
/// Returns (eigenvalues, eigenvectors) sorted by ascending eigenvalue.
/// Complex pairs collapse to their common real part; use
/// [`eig_2x2_complex`] when the imaginary parts matter.
pub fn eig_2x2(a: &[[f64; 2]; 2]) -> ([f64; 2], [[f64; 2]; 2]) {
    let trace = a[0][0] + a[1][1];
    let det = a[0][0] * a[1][1] - a[0][1] * a[1][0];
    let disc = trace * trace - 4.0 * det;

    if disc < 0.0 {
        let re = trace / 2.0;
        return ([re, re], [[1.0, 0.0], [0.0, 1.0]]);
    }

    // Diagonal matrices need no rotation, only the ascending sort.
    if a[0][1].abs() < 1e-15 && a[1][0].abs() < 1e-15 {
        return if a[0][0] <= a[1][1] {
            ([a[0][0], a[1][1]], [[1.0, 0.0], [0.0, 1.0]])
        } else {
            ([a[1][1], a[0][0]], [[0.0, 1.0], [1.0, 0.0]])
        };
    }

    let sqrt_disc = disc.sqrt();
    let l1 = (trace - sqrt_disc) / 2.0;
    let l2 = (trace + sqrt_disc) / 2.0;

    // Eigenvector from whichever row has a nonzero off-diagonal entry:
    // (a01, l − a00) kills row one, (l − a11, a10) kills row two.
    let vector_for = |l: f64| -> [f64; 2] {
        let (x, y) = if a[0][1].abs() > 1e-15 {
            (a[0][1], l - a[0][0])
        } else {
            (l - a[1][1], a[1][0])
        };
        let norm = (x * x + y * y).sqrt();
        [x / norm, y / norm]
    };

    ([l1, l2], [vector_for(l1), vector_for(l2)])
}

/// Eigenvalues of a 2×2 matrix allowing a complex-conjugate pair.
///
/// For `[[0, -1], [1, 0]]` this returns ±i.
pub fn eig_2x2_complex(a: &[[f64; 2]; 2]) -> [Complex64; 2] {
    let trace = a[0][0] + a[1][1];
    let det = a[0][0] * a[1][1] - a[0][1] * a[1][0];
    let disc = trace * trace - 4.0 * det;

    if disc >= 0.0 {
        let sqrt_disc = disc.sqrt();
        [
            Complex64::new((trace + sqrt_disc) / 2.0, 0.0),
            Complex64::new((trace - sqrt_disc) / 2.0, 0.0),
        ]
    } else {
        let imag = (-disc).sqrt() / 2.0;
        [
            Complex64::new(trace / 2.0, imag),
            Complex64::new(trace / 2.0, -imag),
        ]
    }
}

/// Eigendecomposition of a symmetric 3×3 matrix by cyclic Jacobi rotations.
///
/// Returns (eigenvalues, eigenvectors) with eigenvalues sorted descending
/// and eigenvectors as the corresponding columns.
pub fn eig_sym_3x3(m: &Array2<f64>) -> (Array1<f64>, Array2<f64>) {
    assert_eq!(m.dim(), (3, 3), "eig_sym_3x3 expects a 3x3 matrix");

    let mut a = m.clone();
    let mut v: Array2<f64> = Array2::eye(3);
    let max_sweeps = 50;

    for _ in 0..max_sweeps {
        let off: f64 = (0..3)
            .flat_map(|i| ((i + 1)..3).map(move |j| (i, j)))
            .map(|(i, j)| a[[i, j]].abs())
            .sum();
        if off < 1e-14 {
            break;
        }

        for i in 0..3 {
            for j in (i + 1)..3 {
                if a[[i, j]].abs() < 1e-15 {
                    continue;
                }
                let tau = (a[[j, j]] - a[[i, i]]) / (2.0 * a[[i, j]]);
                let t = if tau >= 0.0 {
                    1.0 / (tau + (1.0 + tau * tau).sqrt())
                } else {
                    -1.0 / (-tau + (1.0 + tau * tau).sqrt())
                };
                let cos = 1.0 / (1.0 + t * t).sqrt();
                let sin = t * cos;

                let aii = a[[i, i]];
                let ajj = a[[j, j]];
                let aij = a[[i, j]];
                a[[i, i]] = cos * cos * aii - 2.0 * sin * cos * aij + sin * sin * ajj;
                a[[j, j]] = sin * sin * aii + 2.0 * sin * cos * aij + cos * cos * ajj;
                a[[i, j]] = 0.0;
                a[[j, i]] = 0.0;

                for r in 0..3 {
                    if r == i || r == j {
                        continue;
                    }
                    let ri = a[[r, i]];
                    let rj = a[[r, j]];
                    a[[r, i]] = cos * ri - sin * rj;
                    a[[i, r]] = a[[r, i]];
                    a[[r, j]] = sin * ri + cos * rj;
                    a[[j, r]] = a[[r, j]];
                }

                for r in 0..3 {
                    let vi = v[[r, i]];
                    let vj = v[[r, j]];
                    v[[r, i]] = cos * vi - sin * vj;
                    v[[r, j]] = sin * vi + cos * vj;
                }
            }
        }
    }

    // Sort descending by eigenvalue, carrying eigenvector columns along.
    let mut order = [0usize, 1, 2];
    order.sort_by(|&i, &j| {
        a[[j, j]]
            .partial_cmp(&a[[i, i]])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut vals = Array1::zeros(3);
    let mut vecs = Array2::zeros((3, 3));
    for (idx, &col) in order.iter().enumerate() {
        vals[idx] = a[[col, col]];
        for r in 0..3 {
            vecs[[r, idx]] = v[[r, col]];
        }
    }
    (vals, vecs)
}

/// Check `M·x ≈ λ·x` componentwise.
pub fn is_eigenpair(m: &Array2<f64>, x: &Array1<f64>, lambda: f64, tol: f64) -> bool {
    let n = x.len();
    if m.dim() != (n, n) {
        return false;
    }
    for i in 0..n {
        let mut mx = 0.0;
        for j in 0..n {
            mx += m[[i, j]] * x[j];
        }
        if (mx - lambda * x[i]).abs() > tol {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_eig_2x2_symmetric() {
        // [[2,3],[3,2]] → eigenvalues -1 and 5
        let a = [[2.0, 3.0], [3.0, 2.0]];
        let (vals, vecs) = eig_2x2(&a);
        assert!((vals[0] - (-1.0)).abs() < 1e-10);
        assert!((vals[1] - 5.0).abs() < 1e-10);
        // M·v = λ·v for both pairs
        for k in 0..2 {
            let v = vecs[k];
            let mv = [a[0][0] * v[0] + a[0][1] * v[1], a[1][0] * v[0] + a[1][1] * v[1]];
            assert!((mv[0] - vals[k] * v[0]).abs() < 1e-10);
            assert!((mv[1] - vals[k] * v[1]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_eig_2x2_upper_triangular() {
        let a = [[1.0, 2.0], [0.0, 3.0]];
        let (vals, vecs) = eig_2x2(&a);
        assert!((vals[0] - 1.0).abs() < 1e-12);
        assert!((vals[1] - 3.0).abs() < 1e-12);
        for k in 0..2 {
            let v = vecs[k];
            let mv = [a[0][0] * v[0] + a[0][1] * v[1], a[1][0] * v[0] + a[1][1] * v[1]];
            assert!((mv[0] - vals[k] * v[0]).abs() < 1e-12);
            assert!((mv[1] - vals[k] * v[1]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_eig_2x2_diagonal_descending_entries() {
        // diagonal entries out of order still sort ascending with the
        // matching axis vectors
        let a = [[0.25, 0.0], [0.0, -0.75]];
        let (vals, vecs) = eig_2x2(&a);
        assert!((vals[0] + 0.75).abs() < 1e-15);
        assert!((vals[1] - 0.25).abs() < 1e-15);
        assert_eq!(vecs[0], [0.0, 1.0]);
        assert_eq!(vecs[1], [1.0, 0.0]);
    }

    #[test]
    fn test_eig_2x2_complex_rotation_matrix() {
        // [[0,-1],[1,0]] → ±i
        let a = [[0.0, -1.0], [1.0, 0.0]];
        let vals = eig_2x2_complex(&a);
        assert!(vals[0].re.abs() < 1e-12);
        assert!((vals[0].im - 1.0).abs() < 1e-12);
        assert!((vals[1].im + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_eig_2x2_complex_real_case() {
        let a = [[2.0, 3.0], [3.0, 2.0]];
        let vals = eig_2x2_complex(&a);
        assert!((vals[0].re - 5.0).abs() < 1e-10);
        assert!(vals[0].im.abs() < 1e-15);
        assert!((vals[1].re - (-1.0)).abs() < 1e-10);
    }

    #[test]
    fn test_eig_sym_3x3_block_matrix() {
        // [[2,3,0],[3,2,0],[0,0,1]] → 5, 1, -1
        let m = array![[2.0, 3.0, 0.0], [3.0, 2.0, 0.0], [0.0, 0.0, 1.0]];
        let (vals, vecs) = eig_sym_3x3(&m);
        assert!((vals[0] - 5.0).abs() < 1e-10);
        assert!((vals[1] - 1.0).abs() < 1e-10);
        assert!((vals[2] - (-1.0)).abs() < 1e-10);
        for k in 0..3 {
            let x = vecs.column(k).to_owned();
            assert!(is_eigenpair(&m, &x, vals[k], 1e-9), "eigenpair {k}");
        }
    }

    #[test]
    fn test_eig_sym_3x3_textbook_p() {
        // [[2,0,0],[0,3,4],[0,4,9]] → 11, 2, 1
        let m = array![[2.0, 0.0, 0.0], [0.0, 3.0, 4.0], [0.0, 4.0, 9.0]];
        let (vals, _) = eig_sym_3x3(&m);
        assert!((vals[0] - 11.0).abs() < 1e-10);
        assert!((vals[1] - 2.0).abs() < 1e-10);
        assert!((vals[2] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_is_eigenpair_rejects() {
        let m = array![[2.0, 0.0], [0.0, 3.0]];
        let x = array![1.0, 1.0];
        assert!(!is_eigenpair(&m, &x, 2.0, 1e-9));
    }
}

//! Similarity transformations of small matrices.
//!
//! Supports the worked example that checks which of `Rx` and `R⁻¹x`
//! remains an eigenvector after the change of basis `Q = R⁻¹PR`.

use crate::linalg::inverse_3x3;
use matgeo_types::error::GeoResult;
use ndarray::{Array1, Array2};

/// `Q = R⁻¹ P R` for 3×3 matrices.
pub fn similarity_transform(r: &[[f64; 3]; 3], p: &[[f64; 3]; 3]) -> GeoResult<Array2<f64>> {
    let r_inv = inverse_3x3(r)?;
    let pr = mul_3x3(p, r);
    let q = mul_3x3(&r_inv, &pr);
    Ok(Array2::from_shape_fn((3, 3), |(i, j)| q[i][j]))
}

fn mul_3x3(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                out[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    out
}

/// `M·x` for a fixed-size 3×3 matrix and ndarray vector.
pub fn apply_3x3(m: &[[f64; 3]; 3], x: &Array1<f64>) -> Array1<f64> {
    Array1::from_shape_fn(3, |i| (0..3).map(|j| m[i][j] * x[j]).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eigen::{eig_sym_3x3, is_eigenpair};
    use ndarray::array;

    const R: [[f64; 3]; 3] = [
        [0.22751661, 0.95187796, 0.90271902],
        [0.16238862, 0.50450366, 0.25222053],
        [0.3357095, 0.57062374, 0.8009969],
    ];
    const P: [[f64; 3]; 3] = [
        [2.0, 0.0, 0.0],
        [0.0, 3.0, 4.0],
        [0.0, 4.0, 9.0],
    ];

    #[test]
    fn test_similar_matrices_share_eigenvalues() {
        let q = similarity_transform(&R, &P).unwrap();
        // trace is invariant under similarity
        let tr_q = q[[0, 0]] + q[[1, 1]] + q[[2, 2]];
        assert!((tr_q - 14.0).abs() < 1e-8, "tr(Q) = {tr_q}");
    }

    #[test]
    fn test_r_inv_x_is_eigenvector_of_q() {
        let p = array![[2.0, 0.0, 0.0], [0.0, 3.0, 4.0], [0.0, 4.0, 9.0]];
        let (vals, vecs) = eig_sym_3x3(&p);
        let lambda = vals[0]; // 11
        let x = vecs.column(0).to_owned();

        let q = similarity_transform(&R, &P).unwrap();
        let r_inv = inverse_3x3(&R).unwrap();

        // R⁻¹x is an eigenvector of Q for the same λ; Rx is not.
        let y_good = apply_3x3(&r_inv, &x);
        let y_bad = apply_3x3(&R, &x);
        assert!(is_eigenpair(&q, &y_good, lambda, 1e-6));
        assert!(!is_eigenpair(&q, &y_bad, lambda, 1e-6));
    }
}

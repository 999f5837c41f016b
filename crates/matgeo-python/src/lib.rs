// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Python Bindings
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PyO3 bindings for the Matgeo computation kernels.
//!
//! Exposes the closed-form geometry and small-matrix routines to Python
//! as plain typed calls via PyO3 + numpy.

use ndarray::Array2;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use matgeo_geometry::line_ops;
use matgeo_types::line::Line2;
use matgeo_types::point::Point2;

// ─── Geometry ───

/// Contact points of the tangents from (px, py) to the circle of the
/// given radius centred at the origin.
#[pyfunction]
fn tangent_points(radius: f64, px: f64, py: f64) -> PyResult<((f64, f64), (f64, f64))> {
    let (q1, q2) = matgeo_geometry::circle::tangent_points(radius, Point2::new(px, py))
        .ok_or_else(|| PyValueError::new_err("point lies on or inside the circle"))?;
    Ok(((q1.x, q1.y), (q2.x, q2.y)))
}

/// Reflect the line a1·x + b1·y + c1 = 0 in the mirror
/// a2·x + b2·y + c2 = 0; returns the image coefficients.
#[pyfunction]
fn reflect_line(
    a1: f64,
    b1: f64,
    c1: f64,
    a2: f64,
    b2: f64,
    c2: f64,
) -> PyResult<(f64, f64, f64)> {
    let image = line_ops::reflect(&Line2::new(a1, b1, c1), &Line2::new(a2, b2, c2))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((image.a, image.b, image.c))
}

/// Rotate (x, y) anti-clockwise about the origin by theta radians.
#[pyfunction]
fn rotate_point(x: f64, y: f64, theta: f64) -> (f64, f64) {
    let q = line_ops::rotate_point(Point2::new(x, y), theta);
    (q.x, q.y)
}

// ─── Linear algebra ───

/// Solve the 2×2 system m·x = b.
#[pyfunction]
fn solve_2x2(m: [[f64; 2]; 2], b: [f64; 2]) -> PyResult<(f64, f64)> {
    let x = matgeo_math::linalg::solve_2x2(&m, &b)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((x[0], x[1]))
}

/// Solve the 3×3 system m·x = b.
#[pyfunction]
fn solve_3x3(m: [[f64; 3]; 3], b: [f64; 3]) -> PyResult<(f64, f64, f64)> {
    let x = matgeo_math::linalg::solve_3x3(&m, &b)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((x[0], x[1], x[2]))
}

/// Real eigenvalues (ascending) and row eigenvectors of a 2×2 matrix.
#[pyfunction]
fn eig_2x2(m: [[f64; 2]; 2]) -> ([f64; 2], [[f64; 2]; 2]) {
    matgeo_math::eigen::eig_2x2(&m)
}

/// Rank of an arbitrary real matrix (numpy 2D array).
#[pyfunction]
fn matrix_rank(m: PyReadonlyArray2<'_, f64>) -> usize {
    let arr: Array2<f64> = m.as_array().to_owned();
    matgeo_math::linalg::rank(&arr)
}

/// Eigenvalues of a symmetric matrix given as a numpy 3×3 array,
/// descending, as a numpy vector.
#[pyfunction]
fn eig_sym_3x3<'py>(
    py: Python<'py>,
    m: PyReadonlyArray2<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let arr: Array2<f64> = m.as_array().to_owned();
    if arr.shape() != [3, 3] {
        return Err(PyValueError::new_err("expected a 3×3 matrix"));
    }
    let (vals, _) = matgeo_math::eigen::eig_sym_3x3(&arr);
    Ok(vals.into_pyarray_bound(py))
}

// ─── Quadrature ───

/// Trapezoidal area under sampled data y(x).
#[pyfunction]
fn trapezoid_area(y: Vec<f64>, x: Vec<f64>) -> PyResult<f64> {
    if y.len() != x.len() || y.len() < 2 {
        return Err(PyValueError::new_err(
            "y and x must have equal length >= 2",
        ));
    }
    Ok(matgeo_math::quadrature::trapz(&y, &x))
}

// ─── Module registration ───

/// Matgeo — closed-form analytic geometry kernels.
#[pymodule]
fn matgeo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(tangent_points, m)?)?;
    m.add_function(wrap_pyfunction!(reflect_line, m)?)?;
    m.add_function(wrap_pyfunction!(rotate_point, m)?)?;
    m.add_function(wrap_pyfunction!(solve_2x2, m)?)?;
    m.add_function(wrap_pyfunction!(solve_3x3, m)?)?;
    m.add_function(wrap_pyfunction!(eig_2x2, m)?)?;
    m.add_function(wrap_pyfunction!(matrix_rank, m)?)?;
    m.add_function(wrap_pyfunction!(eig_sym_3x3, m)?)?;
    m.add_function(wrap_pyfunction!(trapezoid_area, m)?)?;
    Ok(())
}

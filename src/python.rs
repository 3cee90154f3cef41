//! Call boundary for the Python front end. Every input arrives as text,
//! every output leaves as display strings; kernel errors become a single
//! `ValueError` carrying the error message.

use crate::config::Kernel;
use crate::error::Error;
use crate::input::{parse_grid, parse_matrix, parse_vector, vectors_from_grid, Orientation};
use crate::linalg::independence::Method;
use crate::matrix::matrix::Matrix;
use crate::rings::fraction::Fraction;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<Error> for PyErr {
    fn from(error: Error) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

fn to_strings(values: &[Fraction]) -> Vec<String> {
    values.iter().map(|x| x.to_string()).collect()
}

/// Returns `(classification, solution, trace)`.
#[pyfunction]
pub fn solve(
    a: Vec<Vec<String>>,
    b: Vec<String>,
) -> PyResult<(String, Option<Vec<String>>, Vec<String>)> {
    let a = parse_matrix(&a)?;
    let b = parse_vector(&b)?;
    let result = Kernel::default().solve(&a, &b)?;
    Ok((
        result.classification.to_string(),
        result.solution.as_deref().map(to_strings),
        result.trace.lines(),
    ))
}

/// Returns `(independent, trace)`.
#[pyfunction]
pub fn is_independent(
    vectors: Vec<Vec<String>>,
    method: &str,
    orientation: &str,
) -> PyResult<(bool, Vec<String>)> {
    let method: Method = method.parse()?;
    let orientation: Orientation = orientation.parse()?;
    let vectors = vectors_from_grid(parse_grid(&vectors)?, orientation)?;
    let result = Kernel::default().is_independent(&vectors, method)?;
    Ok((result.independent, result.trace.lines()))
}

/// Returns `(determinant, trace)`.
#[pyfunction]
pub fn determinant(a: Vec<Vec<String>>) -> PyResult<(String, Vec<String>)> {
    let a = parse_matrix(&a)?;
    let (det, trace) = Kernel::default().determinant(&a)?;
    Ok((det.to_string(), trace.lines()))
}

/// Returns `(linear, T(u), T(v), T(cu + dv), cT(u) + dT(v), trace)`.
#[pyfunction]
#[allow(clippy::type_complexity)]
pub fn check_linearity(
    a: Vec<Vec<String>>,
    u: Vec<String>,
    v: Vec<String>,
    c: &str,
    d: &str,
) -> PyResult<(
    bool,
    Vec<String>,
    Vec<String>,
    Vec<String>,
    Vec<String>,
    Vec<String>,
)> {
    let a = parse_matrix(&a)?;
    let u = parse_vector(&u)?;
    let v = parse_vector(&v)?;
    let c: Fraction = c.parse()?;
    let d: Fraction = d.parse()?;
    let result = Kernel::default().check_linearity(&a, &u, &v, &c, &d)?;
    Ok((
        result.linear,
        to_strings(&result.tu),
        to_strings(&result.tv),
        to_strings(&result.t_cu_dv),
        to_strings(&result.c_tu_d_tv),
        result.trace.lines(),
    ))
}

/// Returns `(matrix rows, trace)`.
#[pyfunction]
pub fn matrix_from_basis_images(
    basis: Vec<Vec<String>>,
    images: Vec<Vec<String>>,
    orientation: &str,
) -> PyResult<(Vec<Vec<String>>, Vec<String>)> {
    let orientation: Orientation = orientation.parse()?;
    let basis = vectors_from_grid(parse_grid(&basis)?, orientation)?;
    let images = vectors_from_grid(parse_grid(&images)?, orientation)?;
    let result = Kernel::default().matrix_from_basis_images(&basis, &images)?;
    Ok((
        result
            .matrix
            .to_list()
            .iter()
            .map(|row| to_strings(row))
            .collect(),
        result.trace.lines(),
    ))
}

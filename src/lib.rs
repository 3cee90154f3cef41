#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod config;
pub mod error;
pub mod input;

pub mod linalg {
    pub mod basis;
    pub mod determinant;
    pub mod elimination;
    pub mod independence;
    pub mod linearity;
    pub mod solver;
}
pub mod matrix {
    pub mod matrix;
    pub mod matrix_gen;
}
pub mod narration {
    pub mod narrator;
    pub mod trace;
}
pub mod rings {
    pub mod fraction;
}

#[cfg(feature = "python")]
pub mod python;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::solve, m)?)?;
    m.add_function(wrap_pyfunction!(python::is_independent, m)?)?;
    m.add_function(wrap_pyfunction!(python::determinant, m)?)?;
    m.add_function(wrap_pyfunction!(python::check_linearity, m)?)?;
    m.add_function(wrap_pyfunction!(python::matrix_from_basis_images, m)?)?;
    Ok(())
}

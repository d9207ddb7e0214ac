#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod cloud;
mod curve;
mod transform;

pub(crate) fn to_py_err(err: ect_curve::EctError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

#[pymodule]
fn ect_rs(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core
    m.add_class::<cloud::PyPointCloud>()?;

    // Curves
    m.add_function(wrap_pyfunction!(curve::compute_ecc_py, m)?)?;
    m.add_function(wrap_pyfunction!(curve::compute_ecc_array_py, m)?)?;
    m.add_function(wrap_pyfunction!(curve::covering_end_time_py, m)?)?;

    // Transforms
    m.add_function(wrap_pyfunction!(transform::compute_ect_py, m)?)?;
    m.add_function(wrap_pyfunction!(transform::suggested_end_time_py, m)?)?;
    m.add_function(wrap_pyfunction!(transform::circle_directions_py, m)?)?;
    m.add_function(wrap_pyfunction!(transform::sphere_directions_py, m)?)?;
    m.add_function(wrap_pyfunction!(transform::ect_distance_py, m)?)?;

    Ok(())
}

use crate::cloud::PyPointCloud;
use crate::to_py_err;
use numpy::{PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::prelude::*;

#[pyfunction(name = "compute_ecc")]
#[pyo3(signature = (cloud, starting_point, end_time, normal, naive=false))]
pub fn compute_ecc_py(
    cloud: &PyPointCloud,
    starting_point: [f32; 3],
    end_time: f32,
    normal: [f32; 3],
    naive: bool,
) -> PyResult<Vec<i64>> {
    let result = if naive {
        ect_curve::compute_ecc_naive(&cloud.inner, starting_point, end_time, normal)
    } else {
        ect_curve::compute_ecc(&cloud.inner, starting_point, end_time, normal)
    };
    result.map_err(to_py_err)
}

/// Sweeps a float32 (N, 3) array in place, without building a PointCloud.
#[pyfunction(name = "compute_ecc_array")]
pub fn compute_ecc_array_py(
    points: PyReadonlyArray2<'_, f32>,
    starting_point: [f32; 3],
    end_time: f32,
    normal: [f32; 3],
) -> PyResult<Vec<i64>> {
    let shape = points.shape();
    if shape[1] != 3 {
        return Err(pyo3::exceptions::PyValueError::new_err(
            "expected shape (N, 3)",
        ));
    }
    let rows = shape[0];
    let slice = points.as_slice().map_err(|_| {
        pyo3::exceptions::PyValueError::new_err(
            "array must be C-contiguous (row-major). \
             Use numpy.ascontiguousarray(arr) to convert.",
        )
    })?;
    let view = ect_core::CloudView::from_interleaved_xyz(slice, rows);
    ect_curve::compute_ecc(&view, starting_point, end_time, normal).map_err(to_py_err)
}

#[pyfunction(name = "covering_end_time")]
pub fn covering_end_time_py(
    cloud: &PyPointCloud,
    starting_point: [f32; 3],
    normal: [f32; 3],
) -> PyResult<f32> {
    ect_curve::covering_end_time(&cloud.inner, starting_point, normal).map_err(to_py_err)
}

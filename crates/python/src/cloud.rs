use numpy::{PyArray2, PyArrayMethods, PyUntypedArrayMethods};
use pyo3::prelude::*;

/// An ordered point path; row `i` is joined to row `i + 1`.
#[pyclass(name = "PointCloud")]
#[derive(Debug, Clone)]
pub struct PyPointCloud {
    pub(crate) inner: ect_core::PointCloud,
}

#[pymethods]
impl PyPointCloud {
    #[new]
    pub fn new() -> Self {
        Self {
            inner: ect_core::PointCloud::new(),
        }
    }

    /// Create a PointCloud from an Nx3 NumPy array, rows in path order.
    ///
    /// Accepts f32 or f64 arrays. f64 arrays are cast to f32 automatically.
    /// The array must be C-contiguous (row-major).
    #[staticmethod]
    pub fn from_numpy(array: &Bound<'_, pyo3::types::PyAny>) -> PyResult<Self> {
        if let Ok(arr) = array.downcast::<PyArray2<f32>>() {
            let readonly = arr.readonly();
            let rows = contiguous_rows(arr.is_c_contiguous(), readonly.shape())?;
            let slice = readonly.as_slice().map_err(|_| {
                pyo3::exceptions::PyValueError::new_err("failed to read array as contiguous slice")
            })?;
            return Ok(Self {
                inner: ect_core::PointCloud::from_array(slice, rows),
            });
        }
        if let Ok(arr) = array.downcast::<PyArray2<f64>>() {
            let readonly = arr.readonly();
            let rows = contiguous_rows(arr.is_c_contiguous(), readonly.shape())?;
            let slice = readonly.as_slice().map_err(|_| {
                pyo3::exceptions::PyValueError::new_err("failed to read array as contiguous slice")
            })?;
            let f32_data: Vec<f32> = slice.iter().map(|&v| v as f32).collect();
            return Ok(Self {
                inner: ect_core::PointCloud::from_array(&f32_data, rows),
            });
        }
        Err(pyo3::exceptions::PyTypeError::new_err(
            "expected NumPy array with dtype float32 or float64, shape (N, 3)",
        ))
    }

    /// Create a PointCloud from a sequence of `(x, y, z)` triples.
    #[staticmethod]
    pub fn from_points(points: Vec<[f32; 3]>) -> Self {
        Self {
            inner: ect_core::PointCloud::from_points(&points),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn centroid(&self) -> Option<[f32; 3]> {
        self.inner.centroid()
    }

    pub fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let rows: Vec<Vec<f32>> = self.inner.iter_points().map(|p| p.to_vec()).collect();
        Ok(PyArray2::from_vec2_bound(py, &rows)?)
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    pub fn __repr__(&self) -> String {
        format!("PointCloud(n={})", self.inner.len())
    }
}

/// Validates layout and shape, returning the number of rows.
fn contiguous_rows(c_contiguous: bool, shape: &[usize]) -> PyResult<usize> {
    // Fortran-order buffers would be read with rows and columns swapped.
    if !c_contiguous {
        return Err(pyo3::exceptions::PyValueError::new_err(
            "array must be C-contiguous (row-major). \
             Use numpy.ascontiguousarray(arr) to convert.",
        ));
    }
    if shape.len() != 2 || shape[1] != 3 {
        return Err(pyo3::exceptions::PyValueError::new_err(
            "expected shape (N, 3)",
        ));
    }
    Ok(shape[0])
}

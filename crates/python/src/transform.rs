use crate::cloud::PyPointCloud;
use crate::to_py_err;
use ect_transform::{Direction, EctParams, Norm, SweepStart};
use pyo3::prelude::*;

/// Returns one curve per direction, in the order the directions were given.
/// Without `starting_point` each sweep starts at the lowest point along its
/// direction.
#[pyfunction(name = "compute_ect")]
#[pyo3(signature = (cloud, directions, end_time=50.0, starting_point=None, parallel=true))]
pub fn compute_ect_py(
    cloud: &PyPointCloud,
    directions: Vec<[f32; 3]>,
    end_time: f32,
    starting_point: Option<[f32; 3]>,
    parallel: bool,
) -> PyResult<Vec<Vec<i64>>> {
    let directions = directions
        .into_iter()
        .map(Direction::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_py_err)?;

    let params = EctParams {
        end_time,
        start: starting_point.map_or(SweepStart::Lowest, SweepStart::Fixed),
        parallel,
        ..EctParams::default()
    };
    let ect = ect_transform::compute_ect(&cloud.inner, &directions, &params).map_err(to_py_err)?;
    Ok(ect.curves().map(|c| c.to_vec()).collect())
}

#[pyfunction(name = "suggested_end_time")]
pub fn suggested_end_time_py(cloud: &PyPointCloud) -> f32 {
    ect_transform::suggested_end_time(&cloud.inner)
}

#[pyfunction(name = "circle_directions")]
pub fn circle_directions_py(k: usize) -> PyResult<Vec<[f32; 3]>> {
    let dirs = ect_transform::circle_directions(k).map_err(to_py_err)?;
    Ok(dirs.iter().map(Direction::as_array).collect())
}

#[pyfunction(name = "sphere_directions")]
pub fn sphere_directions_py(k: usize) -> PyResult<Vec<[f32; 3]>> {
    let dirs = ect_transform::sphere_directions(k).map_err(to_py_err)?;
    Ok(dirs.iter().map(Direction::as_array).collect())
}

#[pyfunction(name = "ect_distance")]
#[pyo3(signature = (a, b, norm="l2"))]
pub fn ect_distance_py(a: Vec<i64>, b: Vec<i64>, norm: &str) -> PyResult<f64> {
    let norm = match norm {
        "l1" | "L1" => Norm::L1,
        "l2" | "L2" => Norm::L2,
        "max" | "inf" => Norm::Max,
        _ => {
            return Err(pyo3::exceptions::PyValueError::new_err(
                "norm must be 'l1', 'l2', or 'max'",
            ))
        }
    };
    ect_transform::feature_distance(&a, &b, norm).map_err(to_py_err)
}

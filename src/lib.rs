//! Euler characteristic curves (ECC) and transforms (ECT) for ordered 3D
//! point paths such as protein backbones.
//!
//! A plane with normal `n` starts through a chosen point and advances one
//! unit of `n . x` per step. At every step the included points and the path
//! edges between consecutive included points are counted, and the curve
//! records `points - edges`. Sweeping a fixed list of directions and
//! concatenating the curves gives a fixed-length feature vector per shape.
//!
//! ```
//! use ect_rs::{compute_ecc, PointCloud};
//!
//! let path = PointCloud::from_points(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
//! let ecc = compute_ecc(&path, [0.0, 0.0, 0.0], 3.0, [1.0, 0.0, 0.0]).unwrap();
//! assert_eq!(ecc, vec![0, 1, 1, 1]);
//! ```

pub use ect_core::{Aabb, CloudView, PointCloud, PointPath};
pub use ect_curve::{
    compute_ecc, compute_ecc_naive, compute_ecc_with, covering_end_time, sample_count, Direction,
    Ecc, EccStrategy, EctError, Result, SweepPlane, MAX_END_TIME,
};
pub use ect_transform::{
    circle_directions, compute_ect, ect_distance, feature_distance, sphere_directions,
    suggested_end_time, Ect, EctParams, Norm, SweepStart,
};

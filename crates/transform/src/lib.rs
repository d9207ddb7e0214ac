#![forbid(unsafe_code)]

pub mod directions;
pub mod distance;
pub mod ect;

pub use directions::{circle_directions, sphere_directions};
pub use distance::{ect_distance, feature_distance, Norm};
pub use ect::{compute_ect, suggested_end_time, Ect, EctParams, SweepStart};
pub use ect_curve::{Direction, EccStrategy, EctError, Result};

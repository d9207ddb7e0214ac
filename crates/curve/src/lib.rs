#![forbid(unsafe_code)]

pub mod direction;
pub mod ecc;
pub mod error;
pub mod plane;

pub use direction::Direction;
pub use ecc::{
    compute_ecc, compute_ecc_naive, compute_ecc_with, covering_end_time, sample_count, Ecc,
    EccStrategy, MAX_END_TIME,
};
pub use error::{EctError, Result};
pub use plane::SweepPlane;

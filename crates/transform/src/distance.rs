use ect_curve::{EctError, Result};
use serde::{Deserialize, Serialize};

use crate::ect::Ect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Norm {
    L1,
    #[default]
    L2,
    Max,
}

/// Distance between two feature vectors under `norm`.
///
/// # Errors
///
/// Returns [`EctError::ShapeMismatch`] if the vectors differ in length.
pub fn feature_distance(a: &[i64], b: &[i64], norm: Norm) -> Result<f64> {
    if a.len() != b.len() {
        return Err(EctError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let diffs = a.iter().zip(b).map(|(x, y)| (x - y).unsigned_abs() as f64);
    Ok(match norm {
        Norm::L1 => diffs.sum(),
        Norm::L2 => diffs.map(|d| d * d).sum::<f64>().sqrt(),
        Norm::Max => diffs.fold(0.0, f64::max),
    })
}

/// Distance between two transforms' concatenated curves.
///
/// Only meaningful when both were computed with the same directions and
/// `end_time`; differing lengths are rejected, matching directions are not
/// checked.
pub fn ect_distance(a: &Ect, b: &Ect, norm: Norm) -> Result<f64> {
    feature_distance(a.feature_vector(), b.feature_vector(), norm)
}

use ect_core::PointPath;
use ect_curve::{
    compute_ecc_with, sample_count, Direction, Ecc, EccStrategy, EctError, Result, SweepPlane,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Where the sweeping plane starts for each direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepStart {
    /// The same starting point for every direction.
    Fixed([f32; 3]),
    /// Through the point with the lowest projection onto the direction, so
    /// every curve begins at 0.
    #[default]
    Lowest,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EctParams {
    /// Last sweep step of every curve; all curves get `floor(end_time) + 1`
    /// samples so feature vectors line up across inputs.
    pub end_time: f32,
    pub start: SweepStart,
    pub strategy: EccStrategy,
    /// Sweep directions on the rayon pool.
    pub parallel: bool,
}

impl Default for EctParams {
    fn default() -> Self {
        Self {
            end_time: 50.0,
            start: SweepStart::Lowest,
            strategy: EccStrategy::Incremental,
            parallel: true,
        }
    }
}

/// Euler characteristic curves for a fixed list of directions.
///
/// Always holds at least one direction and exactly
/// `num_directions() * samples_per_direction()` values, with at least one
/// sample per curve. Deserialization checks the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EctRecord")]
pub struct Ect {
    directions: Vec<Direction>,
    samples_per_direction: usize,
    values: Vec<i64>,
}

#[derive(Deserialize)]
struct EctRecord {
    directions: Vec<Direction>,
    samples_per_direction: usize,
    values: Vec<i64>,
}

impl TryFrom<EctRecord> for Ect {
    type Error = EctError;

    fn try_from(record: EctRecord) -> Result<Self> {
        let EctRecord {
            directions,
            samples_per_direction,
            values,
        } = record;
        let expected = directions.len().checked_mul(samples_per_direction);
        if directions.is_empty() || samples_per_direction == 0 || expected != Some(values.len()) {
            return Err(EctError::MalformedTransform {
                directions: directions.len(),
                samples: samples_per_direction,
                values: values.len(),
            });
        }
        Ok(Self {
            directions,
            samples_per_direction,
            values,
        })
    }
}

impl Ect {
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn num_directions(&self) -> usize {
        self.directions.len()
    }

    /// `floor(end_time) + 1`, shared by every curve.
    pub fn samples_per_direction(&self) -> usize {
        self.samples_per_direction
    }

    /// The curve swept along `directions[i]`.
    pub fn curve(&self, i: usize) -> &[i64] {
        let start = i * self.samples_per_direction;
        &self.values[start..start + self.samples_per_direction]
    }

    pub fn curves(&self) -> impl Iterator<Item = &[i64]> + '_ {
        self.values.chunks_exact(self.samples_per_direction)
    }

    /// All curves concatenated in direction order.
    pub fn feature_vector(&self) -> &[i64] {
        &self.values
    }

    pub fn into_feature_vector(self) -> Vec<i64> {
        self.values
    }
}

/// An `end_time` that lets every unit direction sweep the whole path when
/// starting from [`SweepStart::Lowest`]: the projected extent along a unit
/// vector never exceeds the bounding box diagonal, and `floor(diagonal) + 1`
/// is strictly greater than it.
pub fn suggested_end_time<P: PointPath + ?Sized>(points: &P) -> f32 {
    points.bounds().diagonal().floor() + 1.0
}

/// Computes one Euler characteristic curve per direction and collects them
/// in direction order.
///
/// # Errors
///
/// [`EctError::EmptyInput`] for an empty path, [`EctError::NoDirections`] for
/// an empty direction list, [`EctError::InvalidRange`] for a bad
/// `params.end_time`. Otherwise the first per-direction error in direction
/// order is returned; no partial transform is produced.
pub fn compute_ect<P: PointPath + Sync + ?Sized>(
    points: &P,
    directions: &[Direction],
    params: &EctParams,
) -> Result<Ect> {
    if points.is_empty() {
        return Err(EctError::EmptyInput);
    }
    if directions.is_empty() {
        return Err(EctError::NoDirections);
    }
    let samples = sample_count(params.end_time)?;

    tracing::debug!(
        "ect: {} points, {} directions x {} samples ({:?}, parallel = {})",
        points.len(),
        directions.len(),
        samples,
        params.strategy,
        params.parallel
    );

    let sweep = |direction: &Direction| -> Result<Ecc> {
        let start = match params.start {
            SweepStart::Fixed(p) => p,
            SweepStart::Lowest => lowest_point(points, direction)?,
        };
        let plane = SweepPlane::through(*direction, start)?;
        compute_ecc_with(points, &plane, samples, params.strategy)
    };

    let curves: Vec<Result<Ecc>> = if params.parallel && directions.len() > 1 {
        directions.par_iter().map(sweep).collect()
    } else {
        directions.iter().map(sweep).collect()
    };

    let mut values = Vec::with_capacity(directions.len() * samples);
    for curve in curves {
        values.extend(curve?);
    }

    Ok(Ect {
        directions: directions.to_vec(),
        samples_per_direction: samples,
        values,
    })
}

fn lowest_point<P: PointPath + ?Sized>(points: &P, direction: &Direction) -> Result<[f32; 3]> {
    let mut best: Option<([f32; 3], f32)> = None;
    for index in 0..points.len() {
        let p = points.point(index);
        let h = direction.dot(&p);
        if !h.is_finite() || !p.iter().all(|v| v.is_finite()) {
            return Err(EctError::NonFinitePoint { index });
        }
        if best.map_or(true, |(_, lowest)| h < lowest) {
            best = Some((p, h));
        }
    }
    best.map(|(p, _)| p).ok_or(EctError::EmptyInput)
}

use ect_core::PointPath;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{EctError, Result};
use crate::plane::SweepPlane;

/// Euler characteristic sampled at sweep steps `t = 0, 1, ..., end_time`.
pub type Ecc = Vec<i64>;

/// Largest accepted `end_time`. Past 2^24, consecutive integers are no
/// longer representable in `f32`, so sweep steps would alias.
pub const MAX_END_TIME: f32 = 16_777_216.0;

/// How the curve is evaluated. Both produce identical sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EccStrategy {
    /// Rescan every point and edge at every step: O(n * T).
    Naive,
    /// Bucket each vertex and edge by the step it first appears at, then
    /// prefix-sum the buckets: O(n + T).
    #[default]
    Incremental,
}

/// Number of samples for a sweep ending at `end_time`: `floor(end_time) + 1`.
///
/// # Errors
///
/// Returns [`EctError::InvalidRange`] if `end_time` is negative, NaN,
/// infinite, or above [`MAX_END_TIME`].
pub fn sample_count(end_time: f32) -> Result<usize> {
    if !end_time.is_finite() || end_time < 0.0 || end_time > MAX_END_TIME {
        return Err(EctError::InvalidRange {
            end_time,
            max: MAX_END_TIME,
        });
    }
    Ok(end_time.floor() as usize + 1)
}

/// Computes the Euler characteristic curve of an ordered point path.
///
/// The plane starts through `starting_point` with normal `normal` and
/// advances one unit of `n . x` per step. At step `t` a point `p` is
/// included iff `n . p - n . starting_point < t`, and the edge between
/// consecutive points `i` and `i + 1` is included once both endpoints are.
/// `ECC[t]` is the number of included points minus included edges.
///
/// Returns `floor(end_time) + 1` values. Runs in O(n + end_time).
///
/// # Errors
///
/// - [`EctError::EmptyInput`] if `points` is empty.
/// - [`EctError::InvalidDirection`] if `normal` is zero or non-finite.
/// - [`EctError::InvalidRange`] if `end_time` is negative, non-finite, or
///   above [`MAX_END_TIME`].
/// - [`EctError::NonFiniteStartingPoint`] / [`EctError::NonFinitePoint`] for
///   NaN or infinite coordinates.
pub fn compute_ecc<P: PointPath + ?Sized>(
    points: &P,
    starting_point: [f32; 3],
    end_time: f32,
    normal: [f32; 3],
) -> Result<Ecc> {
    let (plane, samples) = prepare(points, starting_point, end_time, normal)?;
    compute_ecc_with(points, &plane, samples, EccStrategy::Incremental)
}

/// Reference version of [`compute_ecc`] that recounts every point and edge
/// at every step. Same contract and errors.
pub fn compute_ecc_naive<P: PointPath + ?Sized>(
    points: &P,
    starting_point: [f32; 3],
    end_time: f32,
    normal: [f32; 3],
) -> Result<Ecc> {
    let (plane, samples) = prepare(points, starting_point, end_time, normal)?;
    compute_ecc_with(points, &plane, samples, EccStrategy::Naive)
}

/// Evaluates `samples` steps of the curve for an already constructed plane.
///
/// # Errors
///
/// Returns [`EctError::EmptyInput`] for an empty path and
/// [`EctError::NonFinitePoint`] if any point's offset is not finite.
pub fn compute_ecc_with<P: PointPath + ?Sized>(
    points: &P,
    plane: &SweepPlane,
    samples: usize,
    strategy: EccStrategy,
) -> Result<Ecc> {
    if points.is_empty() {
        return Err(EctError::EmptyInput);
    }

    let offsets = offsets(points, plane)?;

    tracing::trace!(
        "ecc sweep: {} points, {} samples, {:?}",
        offsets.len(),
        samples,
        strategy
    );

    Ok(match strategy {
        EccStrategy::Naive => sweep_naive(&offsets, samples),
        EccStrategy::Incremental => sweep_incremental(&offsets, samples),
    })
}

/// Smallest integer `end_time` at which every point is included, so the
/// last value of the curve is 1. Zero when every point already lies below
/// the starting plane.
///
/// # Errors
///
/// Same input checks as [`compute_ecc`], except there is no `end_time` to
/// validate; [`EctError::InvalidRange`] if the farthest offset is at or past
/// [`MAX_END_TIME`], where the covering step can no longer be represented.
pub fn covering_end_time<P: PointPath + ?Sized>(
    points: &P,
    starting_point: [f32; 3],
    normal: [f32; 3],
) -> Result<f32> {
    if points.is_empty() {
        return Err(EctError::EmptyInput);
    }
    let plane = SweepPlane::through(Direction::new(normal)?, starting_point)?;
    let offsets = offsets(points, &plane)?;

    let max = offsets.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if max < 0.0 {
        return Ok(0.0);
    }
    // `floor + 1` is only exact while the floor is below 2^24.
    let floor = max.floor();
    if floor >= MAX_END_TIME {
        return Err(EctError::InvalidRange {
            end_time: max,
            max: MAX_END_TIME,
        });
    }
    Ok(floor + 1.0)
}

fn prepare<P: PointPath + ?Sized>(
    points: &P,
    starting_point: [f32; 3],
    end_time: f32,
    normal: [f32; 3],
) -> Result<(SweepPlane, usize)> {
    if points.is_empty() {
        return Err(EctError::EmptyInput);
    }
    let normal = Direction::new(normal)?;
    let samples = sample_count(end_time)?;
    let plane = SweepPlane::through(normal, starting_point)?;
    Ok((plane, samples))
}

fn offsets<P: PointPath + ?Sized>(points: &P, plane: &SweepPlane) -> Result<Vec<f32>> {
    (0..points.len())
        .map(|index| {
            let p = points.point(index);
            let offset = plane.offset(&p);
            if p.iter().all(|v| v.is_finite()) && offset.is_finite() {
                Ok(offset)
            } else {
                Err(EctError::NonFinitePoint { index })
            }
        })
        .collect()
}

fn sweep_naive(offsets: &[f32], samples: usize) -> Ecc {
    (0..samples)
        .map(|step| {
            let t = step as f32;
            let vertices = offsets.iter().filter(|&&p| p < t).count() as i64;
            let edges = offsets
                .windows(2)
                .filter(|w| w[0] < t && w[1] < t)
                .count() as i64;
            vertices - edges
        })
        .collect()
}

fn sweep_incremental(offsets: &[f32], samples: usize) -> Ecc {
    if samples == 0 {
        return Ecc::new();
    }

    // The extra trailing slot collects cells that never appear in range.
    let mut delta = vec![0i64; samples + 1];
    for &p in offsets {
        delta[first_step(p, samples)] += 1;
    }
    for w in offsets.windows(2) {
        delta[first_step(w[0].max(w[1]), samples)] -= 1;
    }

    let mut chi = 0i64;
    delta[..samples]
        .iter()
        .map(|d| {
            chi += d;
            chi
        })
        .collect()
}

/// First integer step `t` with `offset < t`, or `samples` if that step is
/// past the last sample.
#[inline]
fn first_step(offset: f32, samples: usize) -> usize {
    if offset < 0.0 {
        return 0;
    }
    let floor = offset.floor();
    if floor >= (samples - 1) as f32 {
        samples
    } else {
        floor as usize + 1
    }
}

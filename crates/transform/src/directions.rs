use ect_curve::{Direction, EctError, Result};
use std::f64::consts::{PI, TAU};

/// `k` unit directions evenly spaced around the xy plane, starting at +x.
///
/// # Errors
///
/// Returns [`EctError::NoDirections`] if `k == 0`.
pub fn circle_directions(k: usize) -> Result<Vec<Direction>> {
    if k == 0 {
        return Err(EctError::NoDirections);
    }

    (0..k)
        .map(|i| Direction::in_plane((TAU * i as f64 / k as f64) as f32))
        .collect()
}

/// `k` near-uniform unit directions on the sphere (Fibonacci lattice).
///
/// Successive directions step by the golden angle in azimuth while the
/// z coordinate descends evenly from near +1 to near -1.
///
/// # Errors
///
/// Returns [`EctError::NoDirections`] if `k == 0`.
pub fn sphere_directions(k: usize) -> Result<Vec<Direction>> {
    if k == 0 {
        return Err(EctError::NoDirections);
    }

    let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let angle_increment = PI * 2.0 * golden_ratio;

    (0..k)
        .map(|i| {
            let t = (i as f64 + 0.5) / k as f64;
            let phi = angle_increment * i as f64;
            let theta = (1.0 - 2.0 * t).acos();

            Direction::new([
                (theta.sin() * phi.cos()) as f32,
                (theta.sin() * phi.sin()) as f32,
                theta.cos() as f32,
            ])
        })
        .collect()
}

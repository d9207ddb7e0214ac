//! Adversarial edge-case integration tests.
//!
//! These tests probe degenerate, boundary, and pathological inputs across
//! the full crate stack to verify no panics and consistent error handling.

use ect_core::{CloudView, PointCloud};
use ect_curve::{compute_ecc, compute_ecc_naive, sample_count, EctError, MAX_END_TIME};
use ect_transform::{circle_directions, compute_ect, sphere_directions, EctParams, SweepStart};

// ────────────────── ECC preconditions ──────────────────

#[test]
fn empty_cloud_is_rejected_everywhere() {
    let cloud = PointCloud::new();
    assert_eq!(
        compute_ecc(&cloud, [0.0; 3], 5.0, [1.0, 0.0, 0.0]),
        Err(EctError::EmptyInput)
    );
    assert_eq!(
        compute_ecc_naive(&cloud, [0.0; 3], 5.0, [1.0, 0.0, 0.0]),
        Err(EctError::EmptyInput)
    );

    let view = CloudView::from_interleaved_xyz(&[], 0);
    assert_eq!(
        compute_ecc(&view, [0.0; 3], 5.0, [1.0, 0.0, 0.0]),
        Err(EctError::EmptyInput)
    );
}

#[test]
fn empty_input_is_reported_before_other_errors() {
    let cloud = PointCloud::new();
    assert_eq!(
        compute_ecc(&cloud, [f32::NAN; 3], -1.0, [0.0; 3]),
        Err(EctError::EmptyInput)
    );
}

#[test]
fn zero_direction_is_not_a_degenerate_sweep() {
    let cloud = PointCloud::from_points(&[[0.0; 3], [1.0; 3]]);
    let err = compute_ecc(&cloud, [0.0; 3], 10.0, [0.0, 0.0, 0.0]).unwrap_err();
    assert_eq!(err, EctError::InvalidDirection([0.0, 0.0, 0.0]));
    assert!(err.to_string().contains("non-zero"));
}

#[test]
fn denormal_direction_is_accepted() {
    let cloud = PointCloud::from_points(&[[0.0; 3], [1.0; 3]]);
    let ecc = compute_ecc(&cloud, [0.0; 3], 2.0, [f32::MIN_POSITIVE, 0.0, 0.0]).unwrap();
    // Every offset collapses to ~0, so both points arrive at t = 1.
    assert_eq!(ecc, vec![0, 1, 1]);
}

#[test]
fn end_time_boundaries() {
    assert_eq!(sample_count(MAX_END_TIME), Ok(MAX_END_TIME as usize + 1));
    assert!(sample_count(f32::NEG_INFINITY).is_err());
    assert!(sample_count(-f32::MIN_POSITIVE).is_err());
    assert_eq!(sample_count(-0.0), Ok(1));
}

#[test]
fn end_time_zero_yields_single_sample() {
    let cloud = PointCloud::from_points(&[[0.0; 3], [1.0, 0.0, 0.0]]);
    let ecc = compute_ecc(&cloud, [0.0; 3], 0.0, [1.0, 0.0, 0.0]).unwrap();
    assert_eq!(ecc, vec![0]);
}

#[test]
fn infinite_point_is_rejected() {
    let cloud = PointCloud::from_points(&[[0.0; 3], [f32::INFINITY, 0.0, 0.0]]);
    assert_eq!(
        compute_ecc(&cloud, [0.0; 3], 5.0, [1.0, 0.0, 0.0]),
        Err(EctError::NonFinitePoint { index: 1 })
    );
}

#[test]
fn overflowing_projection_is_rejected() {
    // Finite coordinates whose dot product overflows f32.
    let cloud = PointCloud::from_points(&[[f32::MAX, f32::MAX, 0.0]]);
    assert_eq!(
        compute_ecc(&cloud, [0.0; 3], 5.0, [1.0, 1.0, 0.0]),
        Err(EctError::NonFinitePoint { index: 0 })
    );
}

#[test]
fn coincident_points_collapse_to_one() {
    // A path folded onto a single location: n vertices, n - 1 edges, all at once.
    let cloud = PointCloud::from_points(&[[2.0, 2.0, 2.0]; 50]);
    let ecc = compute_ecc(&cloud, [0.0; 3], 10.0, [0.0, 0.0, 1.0]).unwrap();
    assert_eq!(ecc, vec![0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1]);
}

#[test]
fn alternating_path_reaches_bound() {
    // Even indices below the plane, odd ones far above: at t = 1 every other
    // vertex is present with no edges, the maximum a path allows.
    let pts: Vec<[f32; 3]> = (0..9)
        .map(|i| [0.0, 0.0, if i % 2 == 0 { 0.0 } else { 100.0 }])
        .collect();
    let ecc = compute_ecc(&pts[..], [0.0; 3], 1.0, [0.0, 0.0, 1.0]).unwrap();
    assert_eq!(ecc, vec![0, 5]);
}

#[test]
fn sweep_far_past_the_cloud() {
    let cloud = PointCloud::from_points(&[[0.0; 3], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
    let ecc = compute_ecc(&cloud, [0.0; 3], 10_000.0, [1.0, 0.0, 0.0]).unwrap();
    assert_eq!(ecc.len(), 10_001);
    assert!(ecc[3..].iter().all(|&v| v == 1));
}

// ────────────────── ECT ──────────────────

#[test]
fn ect_with_fixed_nan_start_fails() {
    let cloud = PointCloud::from_points(&[[0.0; 3], [1.0; 3]]);
    let params = EctParams {
        start: SweepStart::Fixed([f32::NAN, 0.0, 0.0]),
        ..EctParams::default()
    };
    let err = compute_ect(&cloud, &circle_directions(3).unwrap(), &params).unwrap_err();
    assert!(matches!(err, EctError::NonFiniteStartingPoint(_)));
}

#[test]
fn ect_single_direction_runs_sequentially() {
    let cloud = PointCloud::from_points(&[[0.0; 3], [1.0; 3]]);
    let dirs = sphere_directions(1).unwrap();
    let ect = compute_ect(&cloud, &dirs, &EctParams::default()).unwrap();
    assert_eq!(ect.num_directions(), 1);
    assert_eq!(ect.samples_per_direction(), 51);
}

#[test]
fn ect_over_borrowed_view() {
    let flat = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0];
    let view = CloudView::from_interleaved_xyz(&flat, 3);
    let params = EctParams {
        end_time: 3.0,
        ..EctParams::default()
    };
    let from_view = compute_ect(&view, &circle_directions(4).unwrap(), &params).unwrap();
    let from_cloud =
        compute_ect(&view.to_cloud(), &circle_directions(4).unwrap(), &params).unwrap();
    assert_eq!(from_view, from_cloud);
}

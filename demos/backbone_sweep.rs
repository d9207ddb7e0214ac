use ect_core::PointCloud;
use ect_curve::{compute_ecc, compute_ecc_naive, covering_end_time, Direction};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A synthetic alpha-carbon trace: a helical turn followed by a straight run.
    let n = 60;
    let pts: Vec<[f32; 3]> = (0..n)
        .map(|i| {
            let s = i as f32;
            if i < 30 {
                let angle = s * 100f32.to_radians();
                [2.3 * angle.cos(), 2.3 * angle.sin(), 1.5 * s]
            } else {
                [3.3 * (s - 29.0), 0.0, 45.0]
            }
        })
        .collect();
    let cloud = PointCloud::from_points(&pts);
    println!(
        "Backbone trace: {} points, {} edges",
        cloud.len(),
        cloud.edges().count()
    );

    // Try a few angles in the xz plane.
    for degrees in [0.0f32, 45.0, 90.0] {
        let normal = Direction::from_angles(0.0, degrees.to_radians())?.as_array();
        // Start well behind the centroid so the first sample is empty.
        let c = cloud.centroid().unwrap_or([0.0; 3]);
        let start = [
            c[0] - 60.0 * normal[0],
            c[1] - 60.0 * normal[1],
            c[2] - 60.0 * normal[2],
        ];

        let end_time = covering_end_time(&cloud, start, normal)?;
        let ecc = compute_ecc(&cloud, start, end_time, normal)?;
        let naive = compute_ecc_naive(&cloud, start, end_time, normal)?;
        assert_eq!(ecc, naive);

        println!(
            "polar {:>4}°: {} samples, max chi = {}, final chi = {}",
            degrees,
            ecc.len(),
            ecc.iter().max().copied().unwrap_or(0),
            ecc.last().copied().unwrap_or(0)
        );
    }

    Ok(())
}

use ect_core::PointCloud;
use ect_transform::{
    compute_ect, ect_distance, sphere_directions, suggested_end_time, EctParams, Norm,
};
use tracing_subscriber::EnvFilter;

fn helix(residues: usize) -> PointCloud {
    let pts: Vec<[f32; 3]> = (0..residues)
        .map(|i| {
            let angle = i as f32 * 100f32.to_radians();
            [2.3 * angle.cos(), 2.3 * angle.sin(), 1.5 * i as f32]
        })
        .collect();
    PointCloud::from_points(&pts)
}

fn strand(residues: usize) -> PointCloud {
    let pts: Vec<[f32; 3]> = (0..residues)
        .map(|i| [3.3 * i as f32, if i % 2 == 0 { 0.5 } else { -0.5 }, 0.0])
        .collect();
    PointCloud::from_points(&pts)
}

fn hairpin(residues: usize) -> PointCloud {
    let half = residues / 2;
    let pts: Vec<[f32; 3]> = (0..residues)
        .map(|i| {
            if i < half {
                [3.3 * i as f32, 0.0, 0.0]
            } else {
                [3.3 * (residues - 1 - i) as f32, 4.8, 0.0]
            }
        })
        .collect();
    PointCloud::from_points(&pts)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let shapes = [
        ("helix", helix(40)),
        ("strand", strand(40)),
        ("hairpin", hairpin(40)),
    ];

    let dirs = sphere_directions(32)?;
    let end_time = shapes
        .iter()
        .map(|(_, cloud)| suggested_end_time(cloud))
        .fold(0.0f32, f32::max);
    let params = EctParams {
        end_time,
        ..EctParams::default()
    };

    let mut transforms = Vec::with_capacity(shapes.len());
    for (name, cloud) in &shapes {
        let ect = compute_ect(cloud, &dirs, &params)?;
        println!(
            "{:>8}: {} directions x {} samples = {} features",
            name,
            ect.num_directions(),
            ect.samples_per_direction(),
            ect.feature_vector().len()
        );
        transforms.push((name, ect));
    }

    println!("\nL2 distances:");
    for (i, (a_name, a)) in transforms.iter().enumerate() {
        for (b_name, b) in &transforms[i + 1..] {
            let d = ect_distance(a, b, Norm::L2)?;
            println!("  {:>8} vs {:<8} {:>10.2}", a_name, b_name, d);
        }
    }

    Ok(())
}

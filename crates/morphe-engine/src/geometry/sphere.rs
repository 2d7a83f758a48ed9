use std::f32::consts::PI;

use glam::Vec4;

/// Distributes `count` points quasi-uniformly over a sphere of `radius`.
///
/// Points walk from the north pole (`y = radius`) to the south pole
/// (`y = -radius`), advancing by the golden angle around Y on each step.
pub fn fibonacci_sphere(count: usize, radius: f32) -> Vec<Vec4> {
    match count {
        0 => return Vec::new(),
        1 => return vec![Vec4::new(0.0, radius, 0.0, 0.0)],
        _ => {}
    }

    let golden_angle = PI * (5.0f32.sqrt() - 1.0);
    let last = (count - 1) as f32;

    (0..count)
        .map(|i| {
            let y = 1.0 - (i as f32 / last) * 2.0;
            // Clamp guards against 1 - y² dipping below zero by rounding.
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f32;

            Vec4::new(
                theta.cos() * ring * radius,
                y * radius,
                theta.sin() * ring * radius,
                0.0,
            )
        })
        .collect()
}

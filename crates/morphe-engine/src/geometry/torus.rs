use std::f32::consts::TAU;

use glam::Vec4;

/// Torus sampling parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TorusParams {
    /// Samples around the ring (Y axis).
    pub major_segments: usize,
    /// Samples around the tube cross-section.
    pub minor_segments: usize,
    /// Distance from the torus center to the tube center.
    pub major_radius: f32,
    /// Tube radius.
    pub minor_radius: f32,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_segments: 16,
            minor_segments: 8,
            major_radius: 0.7,
            minor_radius: 0.3,
        }
    }
}

/// Samples a torus lying in the XZ plane with a circular cross-section.
///
/// Emits `major_segments * minor_segments` points, grouped by ring angle.
pub fn torus(params: TorusParams) -> Vec<Vec4> {
    let TorusParams {
        major_segments,
        minor_segments,
        major_radius,
        minor_radius,
    } = params;

    let mut points = Vec::with_capacity(major_segments * minor_segments);
    for i in 0..major_segments {
        let theta = TAU * i as f32 / major_segments as f32;
        let (sin_t, cos_t) = theta.sin_cos();

        for j in 0..minor_segments {
            let phi = TAU * j as f32 / minor_segments as f32;
            let (sin_p, cos_p) = phi.sin_cos();
            let ring = major_radius + minor_radius * cos_p;

            points.push(Vec4::new(ring * cos_t, minor_radius * sin_p, ring * sin_t, 0.0));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_point_count() {
        assert_eq!(torus(TorusParams::default()).len(), 128);
    }

    #[test]
    fn zero_segments_is_empty() {
        let p = TorusParams { major_segments: 0, ..Default::default() };
        assert!(torus(p).is_empty());
        let p = TorusParams { minor_segments: 0, ..Default::default() };
        assert!(torus(p).is_empty());
    }

    #[test]
    fn satisfies_implicit_equation() {
        let params = TorusParams {
            major_segments: 24,
            minor_segments: 12,
            major_radius: 2.0,
            minor_radius: 0.5,
        };
        for p in torus(params) {
            let d = (p.x * p.x + p.z * p.z).sqrt() - params.major_radius;
            let residual = d * d + p.y * p.y - params.minor_radius * params.minor_radius;
            assert!(residual.abs() < 1e-4, "{p:?} off the torus ({residual})");
        }
    }

    #[test]
    fn first_point_is_outer_equator() {
        let pts = torus(TorusParams::default());
        assert!((pts[0].x - 1.0).abs() < 1e-6);
        assert!(pts[0].y.abs() < 1e-6);
        assert!(pts[0].z.abs() < 1e-6);
    }
}

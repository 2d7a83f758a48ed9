use glam::Vec4;

pub const DEFAULT_CUBE_SUBDIVISIONS: usize = 3;
pub const DEFAULT_CUBE_SIZE: f32 = 1.0;

/// Which axis a face is pinned on, and which two axes it spans.
#[derive(Debug, Copy, Clone)]
enum Face {
    /// Spans (x, y) at `z = value`.
    Z(f32),
    /// Spans (x, z) at `y = value`.
    Y(f32),
    /// Spans (y, z) at `x = value`.
    X(f32),
}

impl Face {
    #[inline]
    fn point(self, c1: f32, c2: f32) -> Vec4 {
        match self {
            Face::Z(v) => Vec4::new(c1, c2, v, 0.0),
            Face::Y(v) => Vec4::new(c1, v, c2, 0.0),
            Face::X(v) => Vec4::new(v, c1, c2, 0.0),
        }
    }
}

/// Samples the surface of an axis-aligned cube spanning `[-size, size]³`.
///
/// Each face carries an `(n + 1) × (n + 1)` grid, so edge and corner points are
/// emitted once per face that touches them. Faces are emitted front, back,
/// top, bottom, right, left. `subdivisions == 0` is treated as `1`.
pub fn cube(subdivisions: usize, size: f32) -> Vec<Vec4> {
    let n = subdivisions.max(1);
    let step = (2.0 * size) / n as f32;

    let faces = [
        Face::Z(size),
        Face::Z(-size),
        Face::Y(size),
        Face::Y(-size),
        Face::X(size),
        Face::X(-size),
    ];

    let mut points = Vec::with_capacity(6 * (n + 1) * (n + 1));
    for face in faces {
        for i in 0..=n {
            for j in 0..=n {
                let c1 = -size + i as f32 * step;
                let c2 = -size + j as f32 * step;
                points.push(face.point(c1, c2));
            }
        }
    }
    points
}

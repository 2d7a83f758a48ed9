use glam::Vec4;

pub const DEFAULT_PYRAMID_SUBDIVISIONS: usize = 2;

/// Regular tetrahedron inscribed in the unit sphere, apex up.
pub const TETRAHEDRON: [Vec4; 4] = [
    Vec4::new(0.0, 1.0, 0.0, 0.0),
    Vec4::new(0.943, -0.333, 0.0, 0.0),
    Vec4::new(-0.471, -0.333, 0.816, 0.0),
    Vec4::new(-0.471, -0.333, -0.816, 0.0),
];

/// Samples the edges of a tetrahedron.
///
/// The four vertices come first. After them, each of the six edges contributes
/// `subdivisions - 1` evenly spaced interior points (endpoints excluded).
pub fn pyramid(subdivisions: usize) -> Vec<Vec4> {
    let interior = subdivisions.saturating_sub(1);
    let mut points = Vec::with_capacity(TETRAHEDRON.len() + 6 * interior);
    points.extend_from_slice(&TETRAHEDRON);

    for i in 0..TETRAHEDRON.len() {
        for j in (i + 1)..TETRAHEDRON.len() {
            for k in 1..subdivisions {
                let t = k as f32 / subdivisions as f32;
                points.push(TETRAHEDRON[i].lerp(TETRAHEDRON[j], t));
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_come_first() {
        let pts = pyramid(3);
        assert_eq!(&pts[..4], &TETRAHEDRON);
    }

    #[test]
    fn point_count() {
        assert_eq!(pyramid(0).len(), 4);
        assert_eq!(pyramid(1).len(), 4);
        assert_eq!(pyramid(2).len(), 10);
        assert_eq!(pyramid(8).len(), 4 + 6 * 7);
    }

    #[test]
    fn edge_midpoints_for_two_subdivisions() {
        let pts = pyramid(2);
        let mid = (TETRAHEDRON[0] + TETRAHEDRON[1]) * 0.5;
        assert!((pts[4] - mid).length() < 1e-6);
        let last = (TETRAHEDRON[2] + TETRAHEDRON[3]) * 0.5;
        assert!((pts[9] - last).length() < 1e-6);
    }

    #[test]
    fn interior_points_lie_on_edges() {
        for p in &pyramid(5)[4..] {
            let on_edge = (0..4).any(|i| {
                ((i + 1)..4).any(|j| {
                    let a = TETRAHEDRON[i].truncate();
                    let b = TETRAHEDRON[j].truncate();
                    let ab = b - a;
                    let t = (p.truncate() - a).dot(ab) / ab.length_squared();
                    (0.0..=1.0).contains(&t) && (a + ab * t - p.truncate()).length() < 1e-5
                })
            });
            assert!(on_edge, "{p:?} not on any edge");
        }
    }
}

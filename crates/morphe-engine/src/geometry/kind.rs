use std::fmt;
use std::str::FromStr;

use glam::Vec4;

use super::{cube, fibonacci_sphere, pyramid, torus, TorusParams};

/// Point budget used when no detail level is given.
pub const DEFAULT_DETAIL: usize = 64;

/// The procedural shapes the engine can generate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Sphere,
    Cube,
    Torus,
    Pyramid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::Torus,
        ShapeKind::Pyramid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Torus => "torus",
            ShapeKind::Pyramid => "pyramid",
        }
    }

    /// Next kind in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a shape name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseShapeError {
    pub input: String,
}

impl fmt::Display for ParseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown shape '{}' (expected sphere, cube, torus or pyramid)",
            self.input
        )
    }
}

impl std::error::Error for ParseShapeError {}

/// Case-insensitive; surrounding whitespace is ignored.
impl FromStr for ShapeKind {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseShapeError { input: s.to_string() })
    }
}

/// Generates `kind` at roughly `detail` points.
///
/// `detail` is a point budget, not an exact count. Each shape derives its own
/// resolution from it:
/// - sphere: exactly `detail` points
/// - cube: `floor(sqrt(detail / 6))` subdivisions per face
/// - torus: `floor(sqrt(detail))` ring segments, half as many tube segments
/// - pyramid: `floor(sqrt(detail))` subdivisions per edge
pub fn generate_shape(kind: ShapeKind, detail: usize) -> Vec<Vec4> {
    let root = (detail as f64).sqrt();
    let points = match kind {
        ShapeKind::Sphere => fibonacci_sphere(detail, 1.0),
        ShapeKind::Cube => cube((detail as f64 / 6.0).sqrt().floor() as usize, 1.0),
        ShapeKind::Torus => torus(TorusParams {
            major_segments: root.floor() as usize,
            minor_segments: (root / 2.0).floor() as usize,
            ..TorusParams::default()
        }),
        ShapeKind::Pyramid => pyramid(root.floor() as usize),
    };
    log::debug!("generated {kind} at detail {detail}: {} points", points.len());
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<ShapeKind>(), Ok(kind));
        }
        assert_eq!(" Torus ".parse::<ShapeKind>(), Ok(ShapeKind::Torus));
        assert_eq!("TORUS".parse::<ShapeKind>(), Ok(ShapeKind::Torus));
        assert_eq!(ShapeKind::Torus.to_string(), "torus");
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "dodecahedron".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err.input, "dodecahedron");
        assert!(err.to_string().contains("dodecahedron"));
    }

    #[test]
    fn next_cycles_all_kinds() {
        let mut k = ShapeKind::Sphere;
        for expected in [ShapeKind::Cube, ShapeKind::Torus, ShapeKind::Pyramid, ShapeKind::Sphere] {
            k = k.next();
            assert_eq!(k, expected);
        }
    }

    #[test]
    fn default_detail_counts() {
        assert_eq!(generate_shape(ShapeKind::Sphere, DEFAULT_DETAIL).len(), 64);
        // floor(sqrt(64 / 6)) = 3 subdivisions -> 6 * 4 * 4
        assert_eq!(generate_shape(ShapeKind::Cube, DEFAULT_DETAIL).len(), 96);
        // 8 ring segments x 4 tube segments
        assert_eq!(generate_shape(ShapeKind::Torus, DEFAULT_DETAIL).len(), 32);
        // 8 subdivisions -> 4 + 6 * 7
        assert_eq!(generate_shape(ShapeKind::Pyramid, DEFAULT_DETAIL).len(), 46);
    }

    #[test]
    fn tiny_detail_stays_finite() {
        for kind in ShapeKind::ALL {
            for detail in 0..6 {
                let pts = generate_shape(kind, detail);
                assert!(pts.iter().all(|p| p.is_finite()), "{kind} at {detail}");
            }
        }
    }
}

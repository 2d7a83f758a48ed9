use super::Vec2;

/// Viewport size in logical pixels.
///
/// Used as the basis for mapping pointer positions to NDC and for the
/// projection aspect ratio.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height; `1.0` for an invalid viewport.
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.is_valid() { self.width / self.height } else { 1.0 }
    }

    /// Maps a logical-pixel position to normalized device coordinates.
    ///
    /// `(0, 0)` maps to `(-1, 1)` and `(width, height)` maps to `(1, -1)`.
    /// Returns `None` when the viewport is degenerate.
    pub fn ndc(self, x: f32, y: f32) -> Option<Vec2> {
        if !self.is_valid() {
            return None;
        }
        Some(Vec2::new(
            (x / self.width) * 2.0 - 1.0,
            -(y / self.height) * 2.0 + 1.0,
        ))
    }
}

use glam::Vec4;

use morphe_engine::geometry::{self, ShapeKind};

/// The point cloud currently on screen, including an in-flight morph.
#[derive(Debug, Clone)]
pub struct ShapeCloud {
    kind: ShapeKind,
    detail: usize,
    /// Where the morph started, resampled to `target.len()`.
    source: Vec<Vec4>,
    target: Vec<Vec4>,
    /// Morph progress in `[0, 1]`.
    progress: f32,
    duration: f32,
    /// Interpolated points for the current progress.
    current: Vec<Vec4>,
}

impl ShapeCloud {
    pub fn new(kind: ShapeKind, detail: usize, duration: f32) -> Self {
        let target = geometry::generate_shape(kind, detail);
        Self {
            kind,
            detail,
            source: target.clone(),
            current: target.clone(),
            target,
            progress: 1.0,
            duration,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn detail(&self) -> usize {
        self.detail
    }

    pub fn points(&self) -> &[Vec4] {
        &self.current
    }

    pub fn is_morphing(&self) -> bool {
        self.progress < 1.0
    }

    /// Starts a morph from the current points to `kind` at `detail`.
    ///
    /// No-op when both already match.
    pub fn set_shape(&mut self, kind: ShapeKind, detail: usize) {
        if kind == self.kind && detail == self.detail {
            return;
        }

        let target = geometry::generate_shape(kind, detail);
        log::info!("morphing {} -> {kind} ({} points)", self.kind, target.len());

        self.source = geometry::resample(&self.current, target.len());
        self.target = target;
        self.kind = kind;
        self.detail = detail;
        self.progress = if self.duration > 0.0 { 0.0 } else { 1.0 };
        self.refresh();
    }

    /// Advances the morph by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if !self.is_morphing() {
            return;
        }
        self.progress = (self.progress + dt / self.duration).min(1.0);
        self.refresh();
    }

    fn refresh(&mut self) {
        let t = ease_in_out(self.progress);
        self.current = geometry::morph(&self.source, &self.target, t);
    }
}

/// Smoothstep easing on `[0, 1]`.
fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

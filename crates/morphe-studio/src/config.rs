use morphe_engine::geometry::{ShapeKind, DEFAULT_DETAIL};

/// Bounds for the point budget the studio will generate.
pub const MIN_DETAIL: usize = 6;
pub const MAX_DETAIL: usize = 16_384;

/// Studio settings.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub shape: ShapeKind,
    pub detail: usize,
    /// Sprite radius in rem (relative to the 16px root size).
    pub point_size_rem: f32,
    /// Seconds a shape change takes to morph.
    pub morph_seconds: f32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Sphere,
            detail: DEFAULT_DETAIL * 16,
            point_size_rem: 0.25,
            morph_seconds: 0.6,
        }
    }
}

impl StudioConfig {
    /// Applies `MORPHE_SHAPE` / `MORPHE_DETAIL` from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_vars(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`. Invalid values are logged and ignored.
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup("MORPHE_SHAPE") {
            match raw.parse::<ShapeKind>() {
                Ok(shape) => self.shape = shape,
                Err(e) => log::warn!("ignoring MORPHE_SHAPE: {e}"),
            }
        }

        if let Some(raw) = lookup("MORPHE_DETAIL") {
            match raw.trim().parse::<usize>() {
                Ok(detail) => self.detail = clamp_detail(detail),
                Err(e) => log::warn!("ignoring MORPHE_DETAIL '{raw}': {e}"),
            }
        }

        self
    }
}

pub fn clamp_detail(detail: usize) -> usize {
    detail.clamp(MIN_DETAIL, MAX_DETAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn defaults_without_vars() {
        assert_eq!(StudioConfig::default().with_vars(vars(&[])), StudioConfig::default());
    }

    #[test]
    fn reads_shape_and_detail() {
        let cfg = StudioConfig::default()
            .with_vars(vars(&[("MORPHE_SHAPE", "torus"), ("MORPHE_DETAIL", "256")]));
        assert_eq!(cfg.shape, ShapeKind::Torus);
        assert_eq!(cfg.detail, 256);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let cfg = StudioConfig::default()
            .with_vars(vars(&[("MORPHE_SHAPE", "blob"), ("MORPHE_DETAIL", "lots")]));
        assert_eq!(cfg, StudioConfig::default());
    }

    #[test]
    fn detail_is_clamped() {
        let cfg = StudioConfig::default().with_vars(vars(&[("MORPHE_DETAIL", "1")]));
        assert_eq!(cfg.detail, MIN_DETAIL);
        assert_eq!(clamp_detail(1 << 20), MAX_DETAIL);
    }
}

use glam::{Vec3, Vec4};

/// Returns exactly `count` points by cycling through `points`.
///
/// Used to give two shapes the same cardinality before morphing between them.
/// An empty input yields `count` points at the origin.
pub fn resample(points: &[Vec4], count: usize) -> Vec<Vec4> {
    if points.is_empty() {
        return vec![Vec4::ZERO; count];
    }
    points.iter().copied().cycle().take(count).collect()
}

/// Interpolates index-matched points from `from` to `to`.
///
/// `t` is clamped to `[0, 1]`. The result has `to.len()` points; `from` is
/// resampled first when the lengths differ.
pub fn morph(from: &[Vec4], to: &[Vec4], t: f32) -> Vec<Vec4> {
    let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
    // Exact endpoints, independent of lerp rounding.
    if t >= 1.0 {
        return to.to_vec();
    }
    let from = resample(from, to.len());
    if t <= 0.0 {
        return from;
    }
    from.iter().zip(to).map(|(a, b)| a.lerp(*b, t)).collect()
}

/// Axis-aligned bounds of the xyz components, or `None` for an empty set.
pub fn bounds(points: &[Vec4]) -> Option<(Vec3, Vec3)> {
    let first = points.first()?.truncate();
    Some(points.iter().skip(1).fold((first, first), |(lo, hi), p| {
        let p = p.truncate();
        (lo.min(p), hi.max(p))
    }))
}

use std::time::{Duration, Instant};

use crate::coords::{Vec2, Viewport};

/// Mouse tracker configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MouseConfig {
    /// Quiet period after the last pointer move before velocity decays to zero.
    pub reset_after: Duration,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            reset_after: Duration::from_millis(50),
        }
    }
}

/// Pointer position and velocity in normalized device coordinates.
///
/// One tracker is owned per window by the runtime. `velocity` is the delta
/// between the last two pointer moves; it is debounced back to zero once no
/// move has been seen for `MouseConfig::reset_after`.
///
/// Both operations take an explicit `now` so the debounce is deterministic
/// under test.
#[derive(Debug, Clone)]
pub struct MouseTracker {
    config: MouseConfig,
    position: Vec2,
    previous: Vec2,
    velocity: Vec2,
    /// Pending velocity reset. `None` when no reset is armed.
    reset_deadline: Option<Instant>,
    /// Accepted pointer moves so far.
    moves: u64,
}

impl Default for MouseTracker {
    fn default() -> Self {
        Self::new(MouseConfig::default())
    }
}

impl MouseTracker {
    pub fn new(config: MouseConfig) -> Self {
        Self {
            config,
            position: Vec2::zero(),
            previous: Vec2::zero(),
            velocity: Vec2::zero(),
            reset_deadline: None,
            moves: 0,
        }
    }

    /// Current position in NDC (`[-1, 1]`, +Y up).
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position before the most recent move.
    #[inline]
    pub fn previous(&self) -> Vec2 {
        self.previous
    }

    /// NDC delta between the last two moves, or zero once debounced.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Number of pointer moves recorded so far.
    ///
    /// Consumers that react to individual moves compare this against the
    /// count they last saw, so a single move is handled once no matter how
    /// many frames its velocity stays visible for.
    #[inline]
    pub fn move_count(&self) -> u64 {
        self.moves
    }

    /// Records a pointer move at logical position `(x, y)` within `viewport`.
    ///
    /// Re-arms the velocity reset so it fires `reset_after` from `now`.
    /// Moves over a degenerate viewport are ignored.
    pub fn on_pointer_moved(&mut self, x: f32, y: f32, viewport: Viewport, now: Instant) {
        let Some(ndc) = viewport.ndc(x, y) else {
            log::trace!("pointer move ignored: degenerate viewport {viewport:?}");
            return;
        };

        self.previous = self.position;
        self.position = ndc;
        self.velocity = self.position - self.previous;
        self.reset_deadline = Some(now + self.config.reset_after);
        self.moves += 1;
    }

    /// Applies the debounced reset if its deadline has passed.
    ///
    /// Returns `true` when velocity was reset by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reset_deadline {
            Some(deadline) if now >= deadline => {
                self.velocity = Vec2::zero();
                self.reset_deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(200.0, 100.0);

    #[test]
    fn maps_to_ndc() {
        let mut m = MouseTracker::default();
        let t0 = Instant::now();
        m.on_pointer_moved(50.0, 25.0, VP, t0);
        assert_eq!(m.position(), Vec2::new(-0.5, 0.5));
        assert_eq!(m.previous(), Vec2::zero());
    }

    #[test]
    fn velocity_is_delta_between_moves() {
        let mut m = MouseTracker::default();
        let t0 = Instant::now();
        m.on_pointer_moved(100.0, 50.0, VP, t0);
        m.on_pointer_moved(150.0, 25.0, VP, t0 + Duration::from_millis(5));
        assert_eq!(m.previous(), Vec2::new(0.0, 0.0));
        assert_eq!(m.position(), Vec2::new(0.5, 0.5));
        assert_eq!(m.velocity(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn velocity_resets_after_quiet_period() {
        let mut m = MouseTracker::default();
        let t0 = Instant::now();
        m.on_pointer_moved(100.0, 50.0, VP, t0);
        m.on_pointer_moved(150.0, 50.0, VP, t0);
        assert!(m.velocity().length() > 0.0);

        assert!(!m.tick(t0 + Duration::from_millis(49)));
        assert!(m.velocity().length() > 0.0);

        assert!(m.tick(t0 + Duration::from_millis(50)));
        assert_eq!(m.velocity(), Vec2::zero());
        // Position survives the reset.
        assert_eq!(m.position(), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn new_move_rearms_the_reset() {
        let mut m = MouseTracker::default();
        let t0 = Instant::now();
        m.on_pointer_moved(100.0, 50.0, VP, t0);
        m.on_pointer_moved(110.0, 50.0, VP, t0 + Duration::from_millis(40));

        // 50ms after the first move, but only 10ms after the second.
        assert!(!m.tick(t0 + Duration::from_millis(50)));
        assert!(m.velocity().length() > 0.0);
        assert!(m.tick(t0 + Duration::from_millis(90)));
    }

    #[test]
    fn reset_fires_once() {
        let mut m = MouseTracker::default();
        let t0 = Instant::now();
        m.on_pointer_moved(10.0, 10.0, VP, t0);
        assert!(m.tick(t0 + Duration::from_secs(1)));
        assert!(!m.tick(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn degenerate_viewport_is_ignored() {
        let mut m = MouseTracker::default();
        let t0 = Instant::now();
        m.on_pointer_moved(10.0, 10.0, Viewport::new(0.0, 0.0), t0);
        assert_eq!(m.position(), Vec2::zero());
        assert_eq!(m.move_count(), 0);
        assert!(!m.tick(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn custom_reset_window() {
        let mut m = MouseTracker::new(MouseConfig { reset_after: Duration::from_millis(200) });
        let t0 = Instant::now();
        m.on_pointer_moved(10.0, 10.0, VP, t0);
        assert!(!m.tick(t0 + Duration::from_millis(150)));
        assert!(m.tick(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn move_count_advances_per_move_not_per_tick() {
        let mut m = MouseTracker::default();
        let t0 = Instant::now();
        m.on_pointer_moved(10.0, 10.0, VP, t0);
        m.on_pointer_moved(20.0, 10.0, VP, t0);
        assert_eq!(m.move_count(), 2);

        m.tick(t0 + Duration::from_secs(1));
        assert_eq!(m.move_count(), 2);
    }
}

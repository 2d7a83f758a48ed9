use glam::Mat4;

use morphe_engine::coords::Vec2;
use morphe_engine::input::MouseTracker;

/// Maximum tilt toward the pointer, in radians.
const MAX_TILT: f32 = 0.6;
/// Rate at which tilt converges on the pointer (1/s).
const FOLLOW_RATE: f32 = 6.0;
/// Spin added per pointer move, per unit of NDC velocity (rad/s).
const SPIN_IMPULSE: f32 = 60.0;
/// Exponential decay of the spin boost (1/s).
const SPIN_DAMPING: f32 = 2.5;
/// Constant idle spin (rad/s).
const IDLE_SPIN: f32 = 0.25;
/// Spin boost treated as full energy.
const ENERGY_SCALE: f32 = 6.0;

/// Orientation of the cloud, driven by the pointer.
///
/// Position in NDC tilts the cloud toward the pointer. Each pointer move
/// kicks the spin once by its velocity, which then decays back to the idle
/// rate.
#[derive(Debug, Clone, Default)]
pub struct Motion {
    yaw_tilt: f32,
    pitch_tilt: f32,
    spin: f32,
    spin_boost: f32,
    /// `MouseTracker::move_count` at the last update.
    seen_moves: u64,
}

impl Motion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, mouse: &MouseTracker, dt: f32) {
        let moves = mouse.move_count();
        let new_moves = moves.saturating_sub(self.seen_moves);
        self.seen_moves = moves;
        self.step(mouse.position(), mouse.velocity(), new_moves, dt);
    }

    /// Advances by `dt`; `new_moves` pointer moves since the last step share
    /// the latest `velocity`.
    fn step(&mut self, pointer: Vec2, velocity: Vec2, new_moves: u64, dt: f32) {
        let dt = dt.max(0.0);
        let follow = 1.0 - (-FOLLOW_RATE * dt).exp();
        self.yaw_tilt += (pointer.x * MAX_TILT - self.yaw_tilt) * follow;
        self.pitch_tilt += (-pointer.y * MAX_TILT - self.pitch_tilt) * follow;

        if new_moves > 0 && velocity.is_finite() {
            self.spin_boost += velocity.x * SPIN_IMPULSE * new_moves as f32;
        }
        self.spin_boost *= (-SPIN_DAMPING * dt).exp();
        self.spin = (self.spin + (IDLE_SPIN + self.spin_boost) * dt) % std::f32::consts::TAU;
    }

    /// Model transform: spin and yaw tilt about +Y, then pitch about +X.
    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch_tilt) * Mat4::from_rotation_y(self.spin + self.yaw_tilt)
    }

    /// Spin boost mapped to `[0, 1]`, used to tint the cloud.
    pub fn energy(&self) -> f32 {
        (self.spin_boost.abs() / ENERGY_SCALE).min(1.0)
    }

    /// Clears orientation and spin. Moves already seen stay consumed.
    pub fn reset(&mut self) {
        *self = Self {
            seen_moves: self.seen_moves,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use morphe_engine::coords::Viewport;

    use super::*;

    const VP: Viewport = Viewport::new(200.0, 100.0);

    /// Moves the pointer once, then runs `seconds` of frames at `hz`,
    /// ticking the tracker the way the runtime does. Returns the spin angle.
    fn spin_after_one_move(hz: u32, seconds: f32) -> f32 {
        let mut mouse = MouseTracker::default();
        let mut m = Motion::new();
        let t0 = Instant::now();
        mouse.on_pointer_moved(100.0, 50.0, VP, t0);
        m.update(&mouse, 0.0);
        let before = m.spin;

        mouse.on_pointer_moved(110.0, 50.0, VP, t0);
        let dt = 1.0 / hz as f32;
        let frames = (seconds * hz as f32).round() as u32;
        for i in 1..=frames {
            mouse.tick(t0 + Duration::from_secs_f32(dt * i as f32));
            m.update(&mouse, dt);
        }
        m.spin - before
    }

    #[test]
    fn tilt_converges_on_pointer() {
        let mut mouse = MouseTracker::default();
        mouse.on_pointer_moved(200.0, 100.0, VP, Instant::now());
        let mut m = Motion::new();
        for _ in 0..600 {
            m.update(&mouse, 1.0 / 60.0);
        }
        assert!((m.yaw_tilt - MAX_TILT).abs() < 1e-3);
        assert!((m.pitch_tilt - MAX_TILT).abs() < 1e-3);
    }

    #[test]
    fn velocity_kicks_then_decays() {
        let mut m = Motion::new();
        m.step(Vec2::zero(), Vec2::new(0.1, 0.0), 1, 1.0 / 60.0);
        let kicked = m.energy();
        assert!(kicked > 0.0);

        for _ in 0..300 {
            m.step(Vec2::zero(), Vec2::zero(), 0, 1.0 / 60.0);
        }
        assert!(m.energy() < kicked * 0.01);
    }

    #[test]
    fn same_move_kicks_once_across_frames() {
        let mut mouse = MouseTracker::default();
        let mut m = Motion::new();
        mouse.on_pointer_moved(100.0, 50.0, VP, Instant::now());
        m.update(&mouse, 0.0);
        let boost = m.spin_boost;

        // Velocity is still visible, but no new move arrived.
        m.update(&mouse, 0.0);
        assert_eq!(m.spin_boost, boost);
    }

    #[test]
    fn spin_from_a_move_is_independent_of_frame_rate() {
        let idle = IDLE_SPIN * 0.2;
        let at_60 = spin_after_one_move(60, 0.2) - idle;
        let at_240 = spin_after_one_move(240, 0.2) - idle;
        assert!(at_60 > 0.1);
        assert!(
            (at_60 - at_240).abs() < at_60 * 0.05,
            "60Hz={at_60} 240Hz={at_240}"
        );
    }

    #[test]
    fn energy_saturates() {
        let mut m = Motion::new();
        m.step(Vec2::zero(), Vec2::new(5.0, 0.0), 1, 0.0);
        assert_eq!(m.energy(), 1.0);
    }

    #[test]
    fn idle_spin_keeps_turning() {
        let mut m = Motion::new();
        let before = m.model();
        m.step(Vec2::zero(), Vec2::zero(), 0, 0.5);
        assert_ne!(before, m.model());
        m.reset();
        assert_eq!(m.model(), Mat4::IDENTITY);
    }

    #[test]
    fn reset_does_not_replay_old_moves() {
        let mut mouse = MouseTracker::default();
        let mut m = Motion::new();
        let t0 = Instant::now();
        for i in 0..10 {
            mouse.on_pointer_moved(100.0 + i as f32 * 10.0, 50.0, VP, t0);
        }
        m.update(&mouse, 0.0);
        m.reset();
        m.update(&mouse, 0.0);
        assert_eq!(m.energy(), 0.0);
    }

    #[test]
    fn non_finite_velocity_is_ignored() {
        let mut m = Motion::new();
        m.step(Vec2::zero(), Vec2::new(f32::NAN, 0.0), 1, 0.1);
        assert!(m.model().is_finite());
    }
}

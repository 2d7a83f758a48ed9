use glam::{Mat4, Vec3};

/// Perspective camera looking at `target`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 4.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_deg: 45.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect.max(1e-3),
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Places the eye on a sphere of `distance` around `target`.
    ///
    /// `yaw` rotates around +Y, `pitch` tilts toward +Y; pitch is clamped just
    /// short of the poles so `up` stays valid.
    pub fn orbit(&mut self, yaw: f32, pitch: f32, distance: f32) {
        let limit = std::f32::consts::FRAC_PI_2 - 0.01;
        let pitch = pitch.clamp(-limit, limit);
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        self.eye = self.target + Vec3::new(sy * cp, sp, cy * cp) * distance.max(self.near * 2.0);
    }

    /// Distance at which a sphere of `radius` fills the vertical field of view.
    pub fn framing_distance(&self, radius: f32) -> f32 {
        let half = (self.fov_y_deg.to_radians() * 0.5).max(1e-3);
        radius / half.sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_center() {
        let cam = Camera::default();
        let clip = cam.view_projection() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn orbit_keeps_distance() {
        let mut cam = Camera::default();
        cam.orbit(1.0, 0.5, 6.0);
        assert!(((cam.eye - cam.target).length() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn orbit_clamps_pitch() {
        let mut cam = Camera::default();
        cam.orbit(0.0, 10.0, 3.0);
        let dir = (cam.eye - cam.target).normalize();
        assert!(dir.y < 1.0);
    }

    #[test]
    fn framing_distance_grows_with_radius() {
        let cam = Camera::default();
        assert!(cam.framing_distance(2.0) > cam.framing_distance(1.0));
        // 45 deg fov: radius / sin(22.5 deg)
        assert!((cam.framing_distance(1.0) - 2.6131).abs() < 1e-3);
    }
}

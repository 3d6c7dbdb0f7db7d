use glam::{Mat4, Vec3};
use pulselattice_scene::Ray;

/// Orbit camera circling a fixed target.
///
/// Matches the orbit-controls interaction of the original scene: dragging
/// rotates around the lattice, scrolling zooms. The default pose looks at
/// the origin from (0, 10, 25).
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // (0, 10, 25) in spherical terms: yaw π/2 puts the eye on +Z.
        let distance = (10.0_f32 * 10.0 + 25.0 * 25.0).sqrt();
        Self {
            target: Vec3::ZERO,
            distance,
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: (10.0 / distance).asin(),
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            sensitivity: 0.005,
            zoom_speed: 1.5,
            min_distance: 2.0,
            max_distance: 200.0,
        }
    }
}

impl OrbitCamera {
    /// World-space eye position derived from the orbit parameters.
    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.sin(),
        ) * self.distance;
        self.target + offset
    }

    /// Rotate the orbit by a mouse drag delta.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity)
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    /// Zoom by a scroll delta; positive moves closer.
    pub fn zoom(&mut self, delta: f32) {
        self.distance =
            (self.distance - delta * self.zoom_speed).clamp(self.min_distance, self.max_distance);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space picking ray through a cursor position in pixels.
    pub fn screen_ray(&self, x: f32, y: f32, width: f32, height: f32) -> Ray {
        let ndc_x = 2.0 * x / width.max(1.0) - 1.0;
        let ndc_y = 1.0 - 2.0 * y / height.max(1.0);
        let inv = self.view_projection().inverse();
        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, far - near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_matches_original_camera() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        assert!((eye - Vec3::new(0.0, 10.0, 25.0)).length() < 1e-3);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn rotate_moves_the_eye() {
        let mut cam = OrbitCamera::default();
        let start = cam.eye();
        cam.rotate(100.0, 0.0);
        assert!((cam.eye() - start).length() > 0.01);
        // Distance to target is preserved while orbiting.
        assert!((cam.eye().distance(cam.target) - cam.distance).abs() < 1e-3);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, 1e6);
        assert!(cam.pitch <= 89.0_f32.to_radians() + 1e-6);
    }

    #[test]
    fn zoom_clamps_distance() {
        let mut cam = OrbitCamera::default();
        cam.zoom(1e6);
        assert_eq!(cam.distance, cam.min_distance);
        cam.zoom(-1e6);
        assert_eq!(cam.distance, cam.max_distance);
    }

    #[test]
    fn center_screen_ray_points_at_target() {
        let cam = OrbitCamera::default();
        let ray = cam.screen_ray(400.0, 300.0, 800.0, 600.0);
        let toward_target = (cam.target - cam.eye()).normalize();
        assert!(ray.dir.dot(toward_target) > 0.999);
    }
}

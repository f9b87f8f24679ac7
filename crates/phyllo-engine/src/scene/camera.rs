use crate::coords::{Mat4, Vec3};

/// Perspective camera looking down −Z from `position`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view, degrees.
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y_deg: 75.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 20.0),
        }
    }
}

impl Camera {
    /// Updates the aspect ratio; degenerate values are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Right-handed projection with wgpu's `[0, 1]` depth range.
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = Camera::default();
        let p = cam.view_projection().project_point3(Vec3::ZERO);
        assert!(p.x.abs() < 1e-6 && p.y.abs() < 1e-6);
        assert!(p.z > 0.0 && p.z < 1.0);
    }

    #[test]
    fn near_and_far_planes_map_to_unit_depth() {
        let cam = Camera::default();
        let near = cam.view_projection().project_point3(Vec3::new(0.0, 0.0, 20.0 - 0.1));
        let far = cam.view_projection().project_point3(Vec3::new(0.0, 0.0, 20.0 - 1000.0));
        assert!(near.z.abs() < 1e-3);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn wider_aspect_narrows_horizontal_extent() {
        let mut cam = Camera::default();
        let square = cam.view_projection().project_point3(Vec3::new(1.0, 1.0, 0.0));
        cam.set_aspect(2.0);
        let wide = cam.view_projection().project_point3(Vec3::new(1.0, 1.0, 0.0));
        assert!((wide.x - square.x / 2.0).abs() < 1e-6);
        assert!((wide.y - square.y).abs() < 1e-6);
    }

    #[test]
    fn degenerate_aspect_is_ignored() {
        let mut cam = Camera::default();
        cam.set_aspect(2.0);
        cam.set_aspect(0.0);
        cam.set_aspect(f32::NAN);
        assert_eq!(cam.aspect, 2.0);
    }
}

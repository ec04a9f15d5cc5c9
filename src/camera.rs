use glam::{Mat4, Vec3};

/// Perspective camera looking at a target point.
///
/// The projection matrix is cached and recomputed whenever the aspect ratio
/// or field of view changes, so `set_aspect` must be called after any
/// viewport resize.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    /// Camera at the origin looking down -Z; `fov_y` is the vertical field
    /// of view in degrees
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let fov_y = fov_y.to_radians();
        Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_y,
            aspect,
            near,
            far,
            projection: Mat4::perspective_rh(fov_y, aspect, near, far),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Update the aspect ratio and recompute the projection matrix
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection();
    }

    /// Update the vertical field of view (degrees) and recompute the
    /// projection matrix
    pub fn set_fov(&mut self, fov_y: f32) {
        self.fov_y = fov_y.to_radians();
        self.update_projection();
    }

    fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

use glam::Vec3;

/// Point light with a fixed position. A `range` of 0.0 means no distance
/// falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub range: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            position,
            color,
            intensity,
            range,
        }
    }

    /// Full-intensity white light with infinite range
    pub fn white(position: Vec3) -> Self {
        Self::new(position, Vec3::ONE, 1.0, 0.0)
    }
}

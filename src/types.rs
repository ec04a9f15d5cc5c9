use crate::camera::PerspectiveCamera;
use crate::light::PointLight;
use crate::material::Material;
use crate::scene::SceneObject;
use glam::Mat4;

/// Mesh vertex with a per-face normal (flat shading)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad: f32,
}

impl CameraUniform {
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.position.to_array(),
            _pad: 0.0,
        }
    }
}

/// Point light uniform data; `position.w` carries the range, `color.w` the
/// intensity (WGSL vec4 packing)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl LightUniform {
    pub fn from_light(light: &PointLight) -> Self {
        Self {
            position: [
                light.position.x,
                light.position.y,
                light.position.z,
                light.range,
            ],
            color: [light.color.x, light.color.y, light.color.z, light.intensity],
        }
    }
}

/// Number of light slots in the shader
pub const MAX_LIGHTS: usize = 3;

/// Fixed-size light array for the frame bind group; unused slots stay at
/// zero intensity
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl LightsUniform {
    pub fn from_lights(lights: &[PointLight]) -> Self {
        let mut uniform = Self {
            lights: [LightUniform::default(); MAX_LIGHTS],
        };
        for (slot, light) in uniform.lights.iter_mut().zip(lights.iter()) {
            *slot = LightUniform::from_light(light);
        }
        uniform
    }
}

/// Per-object uniform data; `color.w` carries the shininess, `emissive.w`
/// the double-sided flag
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4],
}

impl ObjectUniform {
    pub fn from_object(object: &SceneObject) -> Self {
        let model = Mat4::from_translation(object.position)
            * Mat4::from_euler(
                glam::EulerRot::XYZ,
                object.rotation.x,
                object.rotation.y,
                object.rotation.z,
            );
        let Material {
            color,
            emissive,
            shininess,
            double_sided,
        } = object.material;

        Self {
            model: model.to_cols_array_2d(),
            color: [color.x, color.y, color.z, shininess],
            emissive: [
                emissive.x,
                emissive.y,
                emissive.z,
                if double_sided { 1.0 } else { 0.0 },
            ],
        }
    }
}

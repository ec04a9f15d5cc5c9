use glam::Vec3;

/// Default Phong shininess exponent for the demo materials.
pub const DEFAULT_SHININESS: f32 = 30.0;

/// Flat-shaded Phong material owned by a single scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse color, linear RGB
    pub color: Vec3,
    /// Emissive term, linear RGB
    pub emissive: Vec3,
    /// Specular exponent
    pub shininess: f32,
    /// Render both faces (no backface culling)
    pub double_sided: bool,
}

impl Material {
    /// Phong material from 0xRRGGBB sRGB literals, double-sided
    pub fn phong(color: u32, emissive: u32) -> Self {
        Self {
            color: linear_from_hex(color),
            emissive: linear_from_hex(emissive),
            shininess: DEFAULT_SHININESS,
            double_sided: true,
        }
    }
}

/// Decode an 0xRRGGBB sRGB literal into linear RGB.
pub fn linear_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        srgb_to_linear(((hex >> 16) & 0xff) as f32 / 255.0),
        srgb_to_linear(((hex >> 8) & 0xff) as f32 / 255.0),
        srgb_to_linear((hex & 0xff) as f32 / 255.0),
    )
}

fn srgb_to_linear(channel: f32) -> f32 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

use crate::types::Vertex;

// Outward normal plus the two in-plane axes of each cube face, chosen so
// u x v points along the normal (counter-clockwise winding from outside).
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Box mesh with per-face normals, so lighting comes out flat shaded.
/// One instance is shared by every object that references its handle.
#[derive(Debug, Clone)]
pub struct CubeGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl CubeGeometry {
    /// Axis-aligned box centered at the origin
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        let half = [width * 0.5, height * 0.5, depth * 0.5];
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u, v) in FACES {
            let base = vertices.len() as u16;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
                let position = [
                    (normal[0] + u[0] * su + v[0] * sv) * half[0],
                    (normal[1] + u[1] * su + v[1] * sv) * half[1],
                    (normal[2] + u[2] * su + v[2] * sv) * half[2],
                ];
                vertices.push(Vertex { position, normal });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
        }

        Self { vertices, indices }
    }

    /// Unit-sized box, matching the demo scene's shared geometry
    pub fn unit() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

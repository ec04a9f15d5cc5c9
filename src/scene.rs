use glam::Vec3;

use crate::geometry::CubeGeometry;
use crate::light::PointLight;
use crate::material::Material;

/// Handle to geometry registered with a scene. Geometry is shared: several
/// objects may reference the same handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub usize);

/// Renderable object: shared geometry, an owned material, a fixed position
/// and a rotation that is advanced every frame.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub geometry: GeometryHandle,
    pub material: Material,
    pub position: Vec3,
    /// Euler angles in radians, XYZ order
    pub rotation: Vec3,
    /// Sign applied to the per-frame rotation step
    pub spin: f32,
}

impl SceneObject {
    pub fn new(geometry: GeometryHandle, material: Material, position: Vec3) -> Self {
        Self {
            geometry,
            material,
            position,
            rotation: Vec3::ZERO,
            spin: 1.0,
        }
    }

    /// Override the rotation direction (-1.0 spins the other way)
    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }
}

/// Retained scene: geometry, objects and lights. The object and light sets
/// are fixed once building is done; afterwards only object rotations are
/// mutated in place.
#[derive(Default)]
pub struct Scene {
    geometries: Vec<CubeGeometry>,
    objects: Vec<SceneObject>,
    lights: Vec<PointLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_geometry(&mut self, geometry: CubeGeometry) -> GeometryHandle {
        let handle = GeometryHandle(self.geometries.len());
        self.geometries.push(geometry);
        handle
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn geometry(&self, handle: GeometryHandle) -> &CubeGeometry {
        &self.geometries[handle.0]
    }

    pub fn geometries(&self) -> &[CubeGeometry] {
        &self.geometries
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_index_registered_geometry() {
        let mut scene = Scene::new();
        let unit = scene.add_geometry(CubeGeometry::unit());
        let tall = scene.add_geometry(CubeGeometry::new(1.0, 2.0, 1.0));

        assert_ne!(unit, tall);
        assert_eq!(scene.geometry(unit).vertices.len(), 24);
        assert!(scene.geometry(tall).vertices.iter().any(|v| v.position[1].abs() > 0.5));
    }

    #[test]
    fn objects_default_to_forward_spin() {
        let mut scene = Scene::new();
        let cube = scene.add_geometry(CubeGeometry::unit());
        scene.add_object(SceneObject::new(
            cube,
            Material::phong(0xffffff, 0x000000),
            Vec3::ZERO,
        ));
        scene.add_object(
            SceneObject::new(cube, Material::phong(0xffffff, 0x000000), Vec3::ZERO)
                .with_spin(-1.0),
        );

        assert_eq!(scene.objects()[0].spin, 1.0);
        assert_eq!(scene.objects()[1].spin, -1.0);
        assert_eq!(scene.objects()[0].rotation, Vec3::ZERO);
    }
}

use glam::Vec3;
use log::info;

use crate::geometry::CubeGeometry;
use crate::light::PointLight;
use crate::material::Material;
use crate::scene::{Scene, SceneObject};

// Material palette of the demo scene. All four cubes share the same dark
// emissive tint.
const BLUE: u32 = 0x156289;
const RED: u32 = 0xff0000;
const WHITE: u32 = 0xffffff;
const PURPLE: u32 = 0x493e63;
const EMISSIVE: u32 = 0x072534;

/// Populates the fixed demo scene: four unit cubes around the origin and
/// three white point lights. Cubes on the -X/-Z arms spin the opposite way.
///
/// Intended to run once on an empty scene.
pub fn build_cube_scene(scene: &mut Scene) {
    let cube = scene.add_geometry(CubeGeometry::unit());

    scene.add_object(SceneObject::new(
        cube,
        Material::phong(BLUE, EMISSIVE),
        Vec3::new(5.0, 0.0, 0.0),
    ));
    scene.add_object(
        SceneObject::new(
            cube,
            Material::phong(RED, EMISSIVE),
            Vec3::new(-5.0, 0.0, 0.0),
        )
        .with_spin(-1.0),
    );
    scene.add_object(SceneObject::new(
        cube,
        Material::phong(WHITE, EMISSIVE),
        Vec3::new(0.0, 0.0, 5.0),
    ));
    scene.add_object(
        SceneObject::new(
            cube,
            Material::phong(PURPLE, EMISSIVE),
            Vec3::new(0.0, 0.0, -5.0),
        )
        .with_spin(-1.0),
    );

    scene.add_light(PointLight::white(Vec3::new(0.0, 200.0, 0.0)));
    scene.add_light(PointLight::white(Vec3::new(100.0, 200.0, 100.0)));
    scene.add_light(PointLight::white(Vec3::new(-100.0, -200.0, -100.0)));

    info!(
        "scene built: {} objects, {} lights",
        scene.objects().len(),
        scene.lights().len()
    );
}

mod cubes;

pub use cubes::build_cube_scene;

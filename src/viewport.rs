use crate::camera::PerspectiveCamera;
use crate::scene::Scene;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Output surface seam: anything that can be resized and can draw one frame
/// of a scene from a camera. The GPU renderer implements this; tests
/// substitute a recording mock.
pub trait DrawTarget {
    /// Update the output size in physical pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame synchronously
    fn draw(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<()>;
}

/// Owns the camera and a draw target, keeping the camera's aspect ratio in
/// sync with the surface size.
pub struct Viewport<T: DrawTarget> {
    camera: PerspectiveCamera,
    target: T,
    width: u32,
    height: u32,
}

impl<T: DrawTarget> Viewport<T> {
    /// Set up the viewport; the camera's aspect is derived from the given
    /// size
    pub fn new(target: T, mut camera: PerspectiveCamera, width: u32, height: u32) -> Self {
        camera.set_aspect(width as f32 / height as f32);
        Self {
            camera,
            target,
            width,
            height,
        }
    }

    /// Resize the surface and recompute the camera projection. Zero-sized
    /// updates (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.target.resize(width, height);
        self.camera.set_aspect(width as f32 / height as f32);
        self.width = width;
        self.height = height;
    }

    /// Draw one frame of the scene
    pub fn render(&mut self, scene: &Scene) -> Result<()> {
        self.target.draw(scene, &self.camera)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::config::AppConfig;
use crate::controls::OrbitControls;
use crate::frame_loop::FrameLoop;
use crate::scene::Scene;
use crate::scenes::build_cube_scene;
use crate::scheduler::FrameScheduler;
use crate::viewport::{DrawTarget, Viewport};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;

/// Camera and control parameters for a stage
#[derive(Debug, Clone)]
pub struct StageOptions {
    pub fov_degrees: f32,
    pub camera_distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            camera_distance: 12.0,
            auto_rotate: true,
            auto_rotate_speed: 5.0,
        }
    }
}

impl From<&AppConfig> for StageOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            fov_degrees: config.fov_degrees,
            camera_distance: config.camera_distance,
            auto_rotate: config.auto_rotate,
            auto_rotate_speed: config.auto_rotate_speed,
        }
    }
}

/// Ties the scene, viewport, orbit controls and frame loop together and owns
/// their lifecycle.
///
/// `initialize` is the mount path: viewport setup, scene build, loop start.
/// `shutdown` is the unmount path and stops the frame loop before anything
/// else is released, so a late redraw delivery cannot touch torn-down state.
/// The host (windowed or a headless test driver) forwards redraw deliveries
/// to `frame` and size changes to `resize`.
pub struct Stage<T: DrawTarget, S: FrameScheduler> {
    scene: Scene,
    viewport: Viewport<T>,
    controls: OrbitControls,
    driver: FrameLoop,
    scheduler: S,
}

impl<T: DrawTarget, S: FrameScheduler> Stage<T, S> {
    /// Set up the viewport, build the demo scene, and start the frame loop
    pub fn initialize(
        target: T,
        mut scheduler: S,
        width: u32,
        height: u32,
        options: StageOptions,
    ) -> Self {
        let camera = PerspectiveCamera::new(
            options.fov_degrees,
            width as f32 / height as f32,
            NEAR_PLANE,
            FAR_PLANE,
        );
        let viewport = Viewport::new(target, camera, width, height);

        let mut scene = Scene::new();
        build_cube_scene(&mut scene);

        let start = Vec3::new(0.0, 0.0, options.camera_distance);
        let mut controls = OrbitControls::new(start, Vec3::ZERO);
        controls.auto_rotate = options.auto_rotate;
        controls.auto_rotate_speed = options.auto_rotate_speed;

        let mut driver = FrameLoop::new();
        driver.start(&mut scheduler);

        Self {
            scene,
            viewport,
            controls,
            driver,
            scheduler,
        }
    }

    /// Run one frame callback; called by the host on every redraw delivery
    pub fn frame(&mut self) -> Result<()> {
        self.driver.advance(
            &mut self.scene,
            &mut self.controls,
            &mut self.viewport,
            &mut self.scheduler,
        )
    }

    /// Forward a host resize to the viewport
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
    }

    /// Stop the frame loop. Safe to call more than once; the stage can be
    /// dropped afterwards.
    pub fn shutdown(&mut self) {
        self.driver.stop(&mut self.scheduler);
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> &Viewport<T> {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport<T> {
        &mut self.viewport
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

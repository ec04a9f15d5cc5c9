use crate::controls::OrbitControls;
use crate::scene::Scene;
use crate::scheduler::{FrameScheduler, FrameToken};
use crate::viewport::{DrawTarget, Viewport};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Rotation applied to each object per frame on the x and y axes, in radians
pub const ROTATION_STEP: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Frame loop driver.
///
/// While Running, each delivered frame callback rotates the scene objects,
/// updates the orbit controls, renders, and schedules exactly one follow-up
/// callback. `stop` cancels the pending callback; a delivery that races past
/// `stop` finds its token cancelled and does nothing.
pub struct FrameLoop {
    state: LoopState,
    pending: Option<FrameToken>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
            pending: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Start the loop and schedule the first frame callback. No-op while
    /// already Running (never double-schedules).
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.state == LoopState::Running {
            return;
        }
        self.state = LoopState::Running;
        self.pending = Some(scheduler.schedule());
    }

    /// Cancel the pending callback and stop. Idempotent.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
        }
        self.state = LoopState::Stopped;
    }

    /// Run one frame callback.
    ///
    /// The host calls this on every refresh delivery; it does nothing unless
    /// the loop is Running with a live token. A render failure propagates and
    /// leaves no follow-up scheduled, which stops the loop implicitly.
    pub fn advance<T: DrawTarget>(
        &mut self,
        scene: &mut Scene,
        controls: &mut OrbitControls,
        viewport: &mut Viewport<T>,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<()> {
        let Some(token) = self.pending.take() else {
            return Ok(());
        };
        if !scheduler.complete(token) || self.state != LoopState::Running {
            return Ok(());
        }

        for object in scene.objects_mut() {
            object.rotation.x += object.spin * ROTATION_STEP;
            object.rotation.y += object.spin * ROTATION_STEP;
        }

        controls.update(viewport.camera_mut());
        viewport.render(scene)?;

        self.pending = Some(scheduler.schedule());
        Ok(())
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PerspectiveCamera;
    use crate::scenes::build_cube_scene;

    struct NullTarget;

    impl DrawTarget for NullTarget {
        fn resize(&mut self, _width: u32, _height: u32) {}

        fn draw(&mut self, _scene: &Scene, _camera: &PerspectiveCamera) -> Result<()> {
            Ok(())
        }
    }

    struct ListScheduler {
        next_id: u64,
        live: Vec<FrameToken>,
    }

    impl ListScheduler {
        fn new() -> Self {
            Self {
                next_id: 0,
                live: Vec::new(),
            }
        }
    }

    impl FrameScheduler for ListScheduler {
        fn schedule(&mut self) -> FrameToken {
            let token = FrameToken(self.next_id);
            self.next_id += 1;
            self.live.push(token);
            token
        }

        fn cancel(&mut self, token: FrameToken) {
            self.live.retain(|t| *t != token);
        }

        fn complete(&mut self, token: FrameToken) -> bool {
            let before = self.live.len();
            self.live.retain(|t| *t != token);
            before != self.live.len()
        }

        fn pending(&self) -> usize {
            self.live.len()
        }
    }

    fn fixture() -> (
        Scene,
        OrbitControls,
        Viewport<NullTarget>,
        ListScheduler,
        FrameLoop,
    ) {
        let mut scene = Scene::new();
        build_cube_scene(&mut scene);
        let camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0);
        let viewport = Viewport::new(NullTarget, camera, 800, 600);
        let controls = OrbitControls::new(glam::Vec3::new(0.0, 0.0, 12.0), glam::Vec3::ZERO);
        (scene, controls, viewport, ListScheduler::new(), FrameLoop::new())
    }

    #[test]
    fn starts_stopped_with_nothing_pending() {
        let driver = FrameLoop::new();
        assert_eq!(driver.state(), LoopState::Stopped);
        assert!(!driver.is_running());
    }

    #[test]
    fn start_schedules_exactly_one_callback() {
        let (_, _, _, mut scheduler, mut driver) = fixture();

        driver.start(&mut scheduler);
        assert!(driver.is_running());
        assert_eq!(scheduler.pending(), 1);

        // starting again never double-schedules
        driver.start(&mut scheduler);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn advance_keeps_one_callback_pending() {
        let (mut scene, mut controls, mut viewport, mut scheduler, mut driver) = fixture();
        driver.start(&mut scheduler);

        for _ in 0..5 {
            driver
                .advance(&mut scene, &mut controls, &mut viewport, &mut scheduler)
                .unwrap();
            assert_eq!(scheduler.pending(), 1);
        }
    }

    #[test]
    fn rotation_accumulates_per_spin_sign() {
        let (mut scene, mut controls, mut viewport, mut scheduler, mut driver) = fixture();
        driver.start(&mut scheduler);

        let frames = 25;
        for _ in 0..frames {
            driver
                .advance(&mut scene, &mut controls, &mut viewport, &mut scheduler)
                .unwrap();
        }

        let expected = (0..frames).fold(0.0f32, |acc, _| acc + ROTATION_STEP);
        assert_eq!(scene.objects()[0].rotation.x, expected);
        assert_eq!(scene.objects()[0].rotation.y, expected);
        assert_eq!(scene.objects()[1].rotation.x, -expected);
        assert_eq!(scene.objects()[2].rotation.x, expected);
        assert_eq!(scene.objects()[3].rotation.y, -expected);
    }

    #[test]
    fn stop_cancels_the_pending_callback() {
        let (_, _, _, mut scheduler, mut driver) = fixture();
        driver.start(&mut scheduler);

        driver.stop(&mut scheduler);
        assert_eq!(driver.state(), LoopState::Stopped);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn stop_is_idempotent() {
        let (_, _, _, mut scheduler, mut driver) = fixture();
        driver.start(&mut scheduler);

        driver.stop(&mut scheduler);
        driver.stop(&mut scheduler);
        assert_eq!(driver.state(), LoopState::Stopped);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn stop_on_a_fresh_driver_is_harmless() {
        let (_, _, _, mut scheduler, mut driver) = fixture();
        driver.stop(&mut scheduler);
        assert_eq!(driver.state(), LoopState::Stopped);
    }

    #[test]
    fn deliveries_after_stop_do_nothing() {
        let (mut scene, mut controls, mut viewport, mut scheduler, mut driver) = fixture();
        driver.start(&mut scheduler);
        driver
            .advance(&mut scene, &mut controls, &mut viewport, &mut scheduler)
            .unwrap();
        driver.stop(&mut scheduler);

        let rotation = scene.objects()[0].rotation;
        // a redraw delivery racing past stop
        driver
            .advance(&mut scene, &mut controls, &mut viewport, &mut scheduler)
            .unwrap();
        assert_eq!(scene.objects()[0].rotation, rotation);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn restart_after_stop_resumes_the_loop() {
        let (mut scene, mut controls, mut viewport, mut scheduler, mut driver) = fixture();
        driver.start(&mut scheduler);
        driver.stop(&mut scheduler);
        driver.start(&mut scheduler);

        driver
            .advance(&mut scene, &mut controls, &mut viewport, &mut scheduler)
            .unwrap();
        assert_eq!(scene.objects()[0].rotation.x, ROTATION_STEP);
        assert_eq!(scheduler.pending(), 1);
    }
}

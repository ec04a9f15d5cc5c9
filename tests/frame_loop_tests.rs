use orbit_scene::camera::PerspectiveCamera;
use orbit_scene::frame_loop::ROTATION_STEP;
use orbit_scene::scene::Scene;
use orbit_scene::scheduler::{FrameScheduler, FrameToken};
use orbit_scene::stage::{Stage, StageOptions};
use orbit_scene::viewport::DrawTarget;

// Recording draw target: counts draws and remembers the camera aspect each
// draw was made with
struct RecordingTarget {
    draws: usize,
    aspects: Vec<f32>,
    size: (u32, u32),
}

impl RecordingTarget {
    fn new() -> Self {
        Self {
            draws: 0,
            aspects: Vec::new(),
            size: (0, 0),
        }
    }
}

impl DrawTarget for RecordingTarget {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn draw(
        &mut self,
        _scene: &Scene,
        camera: &PerspectiveCamera,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.draws += 1;
        self.aspects.push(camera.aspect());
        Ok(())
    }
}

// In-memory scheduler standing in for the display-refresh callback queue
struct ManualScheduler {
    next_id: u64,
    live: Vec<FrameToken>,
}

impl ManualScheduler {
    fn new() -> Self {
        Self {
            next_id: 0,
            live: Vec::new(),
        }
    }
}

impl FrameScheduler for ManualScheduler {
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

fn mount(width: u32, height: u32) -> Stage<RecordingTarget, ManualScheduler> {
    Stage::initialize(
        RecordingTarget::new(),
        ManualScheduler::new(),
        width,
        height,
        StageOptions::default(),
    )
}

#[test]
fn mount_renders_every_frame_and_unmount_stops() {
    let mut stage = mount(800, 600);
    assert!(stage.is_running());
    assert_eq!(stage.scheduler().pending(), 1);

    for _ in 0..100 {
        stage.frame().unwrap();
    }
    assert_eq!(stage.viewport().target().draws, 100);

    stage.shutdown();
    assert!(!stage.is_running());
    assert_eq!(stage.scheduler().pending(), 0);

    // late deliveries after unmount do nothing
    for _ in 0..3 {
        stage.frame().unwrap();
    }
    assert_eq!(stage.viewport().target().draws, 100);
    assert_eq!(stage.scheduler().pending(), 0);
}

#[test]
fn exactly_one_callback_pending_while_running() {
    let mut stage = mount(800, 600);

    for _ in 0..10 {
        assert_eq!(stage.scheduler().pending(), 1);
        stage.frame().unwrap();
    }
    assert_eq!(stage.scheduler().pending(), 1);
}

#[test]
fn rotations_accumulate_with_opposing_signs() {
    let mut stage = mount(800, 600);

    let frames = 100;
    for _ in 0..frames {
        stage.frame().unwrap();
    }

    let expected = (0..frames).fold(0.0f32, |acc, _| acc + ROTATION_STEP);
    let objects = stage.scene().objects();
    assert_eq!(objects[0].rotation.x, expected);
    assert_eq!(objects[0].rotation.y, expected);
    assert_eq!(objects[1].rotation.x, -expected);
    assert_eq!(objects[1].rotation.y, -expected);
    assert_eq!(objects[2].rotation.x, expected);
    assert_eq!(objects[3].rotation.x, -expected);
}

#[test]
fn shutdown_twice_is_safe() {
    let mut stage = mount(800, 600);
    stage.frame().unwrap();

    stage.shutdown();
    stage.shutdown();
    assert!(!stage.is_running());
    assert_eq!(stage.scheduler().pending(), 0);
}

#[test]
fn resize_between_frames_takes_effect_on_the_next_draw() {
    let mut stage = mount(800, 600);

    for _ in 0..5 {
        stage.frame().unwrap();
    }
    assert!(stage
        .viewport()
        .target()
        .aspects
        .iter()
        .all(|a| *a == 800.0 / 600.0));

    // a host resize event lands between two frame callbacks
    stage.resize(1024, 512);

    stage.frame().unwrap();
    assert_eq!(*stage.viewport().target().aspects.last().unwrap(), 2.0);
    assert_eq!(stage.viewport().target().size, (1024, 512));
}

#[test]
fn auto_rotation_moves_the_camera_between_frames() {
    let mut stage = mount(800, 600);

    stage.frame().unwrap();
    let first = stage.viewport().camera().position;
    stage.frame().unwrap();
    let second = stage.viewport().camera().position;

    assert_ne!(first, second);
    // the orbit preserves the distance to the target
    assert!((first.length() - second.length()).abs() < 1e-4);
}

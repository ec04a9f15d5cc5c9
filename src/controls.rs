use std::f32::consts::{PI, TAU};

use glam::Vec3;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::camera::PerspectiveCamera;

/// Radians of rotation added per pixel of drag
pub const ROTATE_SPEED: f32 = 0.005;
/// Radius multiplier per wheel step (scrolling up moves closer)
const ZOOM_STEP: f32 = 0.95;
const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 500.0;
// Keep the polar angle off the poles to avoid a degenerate view basis
const PHI_EPSILON: f32 = 0.001;

/// Orbit controls: rotate and zoom the camera around a fixed target point,
/// with optional automatic rotation.
///
/// State is spherical around the target: `theta` is the azimuth around +Y
/// (measured from +Z), `phi` the polar angle from +Y. Input accumulates into
/// deltas which the explicit per-frame `update` call applies to the camera.
pub struct OrbitControls {
    target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,

    theta_delta: f32,
    phi_delta: f32,
    zoom_scale: f32,

    pub auto_rotate: bool,
    /// One full orbit per 30 seconds at speed 2.0 and 60 updates per second
    pub auto_rotate_speed: f32,
    pub damping: bool,
    pub damping_factor: f32,

    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl OrbitControls {
    /// Controls orbiting `target` from the given starting camera position
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length().max(MIN_RADIUS);
        Self {
            target,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta_delta: 0.0,
            phi_delta: 0.0,
            zoom_scale: 1.0,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            damping: false,
            damping_factor: 0.05,
            dragging: false,
            last_cursor: None,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Queue a rotation from a drag delta in pixels
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.theta_delta -= dx * ROTATE_SPEED;
        self.phi_delta -= dy * ROTATE_SPEED;
    }

    /// Queue a zoom; positive steps move the camera closer
    pub fn zoom(&mut self, steps: f32) {
        self.zoom_scale *= ZOOM_STEP.powf(steps);
    }

    /// Advance auto-rotation and apply queued input to the camera.
    ///
    /// Called once per frame by the frame loop; the camera ends up on the
    /// orbit sphere looking at the target.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        if self.auto_rotate {
            self.theta_delta -= self.auto_rotation_angle();
        }

        self.theta += self.theta_delta;
        self.phi = (self.phi + self.phi_delta).clamp(PHI_EPSILON, PI - PHI_EPSILON);
        self.radius = (self.radius * self.zoom_scale).clamp(MIN_RADIUS, MAX_RADIUS);

        if self.damping {
            self.theta_delta *= 1.0 - self.damping_factor;
            self.phi_delta *= 1.0 - self.damping_factor;
        } else {
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
        }
        self.zoom_scale = 1.0;

        camera.position = self.target
            + self.radius
                * Vec3::new(
                    self.phi.sin() * self.theta.sin(),
                    self.phi.cos(),
                    self.phi.sin() * self.theta.cos(),
                );
        camera.target = self.target;
    }

    // per-frame step at a nominal 60 updates per second
    fn auto_rotation_angle(&self) -> f32 {
        TAU / 3600.0 * self.auto_rotate_speed
    }

    /// Track press/release of the orbit drag button
    pub fn process_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button == MouseButton::Left {
            self.dragging = state.is_pressed();
            if !self.dragging {
                self.last_cursor = None;
            }
        }
    }

    /// Feed a cursor position; rotates while the drag button is held
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        if self.dragging {
            if let Some((last_x, last_y)) = self.last_cursor {
                self.rotate((x - last_x) as f32, (y - last_y) as f32);
            }
        }
        self.last_cursor = Some((x, y));
    }

    pub fn process_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let steps = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / 50.0,
        };
        self.zoom(steps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0)
    }

    fn controls_at_z12() -> OrbitControls {
        OrbitControls::new(Vec3::new(0.0, 0.0, 12.0), Vec3::ZERO)
    }

    #[test]
    fn spherical_state_matches_initial_position() {
        let controls = controls_at_z12();
        assert!((controls.radius() - 12.0).abs() < 1e-6);
        assert!(controls.theta().abs() < 1e-6);
    }

    #[test]
    fn update_without_input_leaves_camera_on_start_position() {
        let mut controls = controls_at_z12();
        let mut camera = camera();

        controls.update(&mut camera);

        assert!((camera.position - Vec3::new(0.0, 0.0, 12.0)).length() < 1e-4);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn auto_rotate_advances_azimuth_at_fixed_rate() {
        let mut controls = controls_at_z12();
        controls.auto_rotate = true;
        controls.auto_rotate_speed = 5.0;
        let mut camera = camera();

        let before = controls.theta();
        controls.update(&mut camera);
        let per_frame = TAU / 3600.0 * 5.0;
        assert!((before - controls.theta() - per_frame).abs() < 1e-6);

        // radius is preserved while orbiting
        assert!((camera.position.length() - 12.0).abs() < 1e-4);
    }

    #[test]
    fn drag_rotation_is_consumed_without_damping() {
        let mut controls = controls_at_z12();
        let mut camera = camera();

        controls.rotate(100.0, 0.0);
        controls.update(&mut camera);
        let after_drag = controls.theta();

        controls.update(&mut camera);
        assert_eq!(controls.theta(), after_drag);
    }

    #[test]
    fn damping_decays_rotation_over_frames() {
        let mut controls = controls_at_z12();
        controls.damping = true;
        let mut camera = camera();

        controls.rotate(100.0, 0.0);
        controls.update(&mut camera);
        let first = controls.theta();
        controls.update(&mut camera);
        let second = controls.theta();

        // still moving, but by less than the first step
        assert_ne!(first, second);
        assert!((second - first).abs() < first.abs());
    }

    #[test]
    fn zoom_clamps_to_radius_limits() {
        let mut controls = controls_at_z12();
        let mut camera = camera();

        controls.zoom(1000.0);
        controls.update(&mut camera);
        assert_eq!(controls.radius(), MIN_RADIUS);

        controls.zoom(-10000.0);
        controls.update(&mut camera);
        assert_eq!(controls.radius(), MAX_RADIUS);
    }

    #[test]
    fn polar_angle_never_reaches_the_poles() {
        let mut controls = controls_at_z12();
        let mut camera = camera();

        controls.rotate(0.0, 1.0e6);
        controls.update(&mut camera);
        assert!(controls.phi > 0.0);
        assert!(controls.phi < PI);
    }

    #[test]
    fn cursor_drag_feeds_rotation() {
        let mut controls = controls_at_z12();
        let mut camera = camera();

        controls.process_mouse_input(ElementState::Pressed, MouseButton::Left);
        controls.process_cursor_moved(100.0, 100.0);
        controls.process_cursor_moved(150.0, 100.0);
        controls.process_mouse_input(ElementState::Released, MouseButton::Left);

        let before = controls.theta();
        controls.update(&mut camera);
        assert_ne!(controls.theta(), before);
    }

    #[test]
    fn cursor_moves_without_drag_do_nothing() {
        let mut controls = controls_at_z12();
        let mut camera = camera();

        controls.process_cursor_moved(100.0, 100.0);
        controls.process_cursor_moved(500.0, 500.0);

        let before = controls.theta();
        controls.update(&mut camera);
        assert_eq!(controls.theta(), before);
    }
}

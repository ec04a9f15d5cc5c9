use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use orbit_scene::cli::Cli;
use orbit_scene::clock::{Clock, FpsCounter};
use orbit_scene::config::AppConfig;
use orbit_scene::renderer::GpuRenderer;
use orbit_scene::stage::{Stage, StageOptions};
use orbit_scene::window::RedrawScheduler;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

// === Application ===

struct App {
    cli: Cli,
    config: AppConfig,
    window: Option<Arc<Window>>,
    stage: Option<Stage<GpuRenderer, RedrawScheduler>>,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(cli: Cli, config: AppConfig) -> Self {
        Self {
            cli,
            config,
            window: None,
            stage: None,
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Orbit Scene")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.config.width,
                        self.config.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let renderer =
                match pollster::block_on(GpuRenderer::new(window.clone(), !self.cli.no_ui)) {
                    Ok(r) => r,
                    Err(e) => {
                        error!("failed to initialize renderer: {e:#}");
                        event_loop.exit();
                        return;
                    }
                };

            let size = window.inner_size();
            let scheduler = RedrawScheduler::new(window.clone());
            let stage = Stage::initialize(
                renderer,
                scheduler,
                size.width,
                size.height,
                StageOptions::from(&self.config),
            );

            self.window = Some(window);
            self.stage = Some(stage);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(stage) = &mut self.stage else {
            return;
        };

        // Let the overlay consume the event first
        if stage.viewport_mut().target_mut().handle_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                // stop the loop before the surface and controls go away
                stage.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => stage.resize(size.width, size.height),
            WindowEvent::MouseInput { state, button, .. } => {
                stage.controls_mut().process_mouse_input(state, button);
            }
            WindowEvent::CursorMoved { position, .. } => {
                stage
                    .controls_mut()
                    .process_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                stage.controls_mut().process_mouse_wheel(delta);
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                if let Some(fps) = self.fps.tick(delta) {
                    stage.viewport_mut().target_mut().set_fps(fps);
                }

                if let Err(e) = stage.frame() {
                    // no follow-up frame is scheduled after a render failure
                    error!("render error: {e}");
                    stage.shutdown();
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, config);

    info!("orbit scene viewer - drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}

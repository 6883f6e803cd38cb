//! Interior viewer - main entry point.
//!
//! Runs the cooperative frame loop: poll input, update the viewer, submit the
//! frame. Frames are submitted to the recording backend, which logs draw
//! statistics at trace level.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info, trace};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use interior::Viewer;
use interior_core::{Config, FrameClock};
use interior_platform::{InputState, MouseButton, MouseScrollDelta, Window};
use interior_renderer::{FrameRenderer, RecordingBackend};

/// Pixels per scroll line for touchpads that report pixel deltas.
const PIXELS_PER_LINE: f32 = 20.0;

/// Refresh the window title every this many frames.
const TITLE_INTERVAL: u64 = 30;

struct App {
    config: Config,
    window: Option<Window>,
    renderer: Option<FrameRenderer>,
    backend: RecordingBackend,
    viewer: Viewer,
    input: InputState,
    clock: FrameClock,
}

impl App {
    fn new(config: Config) -> Self {
        let viewer = Viewer::new(&config);
        Self {
            config,
            window: None,
            renderer: None,
            backend: RecordingBackend::new(),
            viewer,
            input: InputState::new(),
            clock: FrameClock::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        self.viewer.update(&self.input, delta);
        self.input.begin_frame();

        if self.viewer.should_quit() {
            event_loop.exit();
            return;
        }

        if let Some(ref mut renderer) = self.renderer {
            match self.viewer.render(renderer, &mut self.backend) {
                Ok(stats) => trace!(
                    "Submitted {} commands for {} draws",
                    self.backend.commands().len(),
                    stats.total()
                ),
                Err(e) => error!("Render error: {}", e),
            }
            self.backend.clear_commands();
        }

        if let Some(ref window) = self.window
            && self.clock.frame_count() % TITLE_INTERVAL == 0
        {
            window.show_fps(self.clock.fps());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match Window::new(event_loop, &self.config.window) {
            Ok(window) => {
                match FrameRenderer::new(
                    &mut self.backend,
                    window.width(),
                    window.height(),
                    self.config.window.aspect,
                ) {
                    Ok(renderer) => {
                        info!("Initialization complete, entering main loop");
                        self.renderer = Some(renderer);
                        self.window = Some(window);
                    }
                    Err(e) => {
                        error!("Failed to create renderer: {}", e);
                        event_loop.exit();
                    }
                }
            }
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                self.input.request_close();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(ref mut window) = self.window {
                    window.resize(size.width, size.height);
                }
                if let Some(ref mut renderer) = self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state.is_pressed() {
                        self.input.on_key_pressed(key);
                    } else {
                        self.input.on_key_released(key);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = MouseButton::from(button);
                match state {
                    ElementState::Pressed => self.input.on_mouse_pressed(button),
                    ElementState::Released => self.input.on_mouse_released(button),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input
                    .on_mouse_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(x, y) => self.input.on_scroll(x, y),
                MouseScrollDelta::PixelDelta(p) => self.input.on_scroll(
                    p.x as f32 / PIXELS_PER_LINE,
                    p.y as f32 / PIXELS_PER_LINE,
                ),
            },
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    interior_core::init_logging();
    info!("Starting interior viewer");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load_or_default(config_path.as_deref())
        .context("failed to load configuration")?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    info!("Viewer closed after {} frames", app.clock.frame_count());
    Ok(())
}

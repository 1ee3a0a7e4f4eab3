//! Platform layer
//!
//! Owns the native window, the winit event loop and the GPU renderer, and
//! drives the game once per redraw:
//! drain input -> fixed ticks -> compose scene -> upload -> present.
//!
//! The window is created lazily in `resumed()`; failures there are stored
//! and returned from [`run`] once the loop exits.

pub mod game;
pub mod input;

use std::sync::Arc;
use std::time::Instant;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowAttributes, WindowId},
};

use crate::renderer::{RenderInitError, RenderState};
use crate::settings::Settings;
pub use game::Game;
pub use input::{InputState, KeyAction};

/// Window title
pub const WINDOW_TITLE: &str = "Brick";

/// Fatal presentation errors
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop
    EventLoopCreation(winit::error::EventLoopError),
    /// Event loop execution error
    EventLoopExecution(winit::error::EventLoopError),
    /// The OS refused to create the window
    WindowCreation(winit::error::OsError),
    /// No drawable surface for the window
    Surface(wgpu::CreateSurfaceError),
    /// No GPU adapter can present to the surface
    Adapter(wgpu::RequestAdapterError),
    /// The device or surface configuration could not be set up
    Renderer(RenderInitError),
    /// The GPU ran out of memory while presenting
    OutOfMemory,
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "window creation failed: {}", e),
            Self::Surface(e) => write!(f, "surface creation failed: {}", e),
            Self::Adapter(e) => write!(f, "no suitable GPU adapter: {}", e),
            Self::Renderer(e) => write!(f, "renderer setup failed: {}", e),
            Self::OutOfMemory => write!(f, "GPU out of memory"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
            Self::Surface(e) => Some(e),
            Self::Adapter(e) => Some(e),
            Self::Renderer(e) => Some(e),
            Self::OutOfMemory => None,
        }
    }
}

/// Open the window and run the game until it is closed
pub fn run(settings: Settings, seed: u64) -> Result<(), PlatformError> {
    debug!(target: "platform", "Starting winit event loop");

    let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, seed);
    event_loop
        .run_app(&mut app)
        .map_err(PlatformError::EventLoopExecution)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Window, renderer and game, wired to winit
struct App {
    settings: Settings,
    game: Game,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    last_frame: Option<Instant>,
    /// Fatal error that ended the loop
    error: Option<PlatformError>,
}

impl App {
    fn new(settings: Settings, seed: u64) -> Self {
        Self {
            settings,
            game: Game::new(seed),
            window: None,
            renderer: None,
            last_frame: None,
            error: None,
        }
    }

    /// Record a fatal error and stop the loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, PlatformError> {
        let (width, height) = self.settings.window_size();
        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height));

        let window = event_loop
            .create_window(attrs)
            .map_err(PlatformError::WindowCreation)?;
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );
        Ok(Arc::new(window))
    }

    /// Advance the game by the wall time since the last frame and draw it
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        self.game.update(dt);
        for event in self.game.events() {
            trace!(target: "platform::events", "{:?}", event);
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if renderer.size.0 == 0 || renderer.size.1 == 0 {
            return;
        }

        let vertices = self.game.frame_vertices();
        match renderer.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!(target: "platform", "Surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, PlatformError::OutOfMemory);
            }
            Err(e) => warn!(target: "platform", "Render error: {:?}", e),
        }
    }
}

/// Instance, surface, adapter and device for `window`
async fn init_renderer(window: Arc<Window>, vsync: bool) -> Result<RenderState, PlatformError> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::PRIMARY,
        ..Default::default()
    });

    let surface = instance
        .create_surface(window.clone())
        .map_err(PlatformError::Surface)?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .map_err(PlatformError::Adapter)?;
    info!(target: "platform", "Using adapter: {}", adapter.get_info().name);

    let size = window.inner_size();
    RenderState::new(surface, &adapter, size.width, size.height, vsync)
        .await
        .map_err(PlatformError::Renderer)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists");
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, e),
        };

        match pollster::block_on(init_renderer(window.clone(), self.settings.vsync)) {
            Ok(renderer) => {
                self.renderer = Some(renderer);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                    debug!(target: "platform", "Resized to {}x{}", size.width, size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.game.input.clear();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                let PhysicalKey::Code(code) = key_event.physical_key else {
                    trace!(target: "platform::input", "Unidentified key ignored");
                    return;
                };
                match self.game.input.handle_key(code, key_event.state) {
                    Some(KeyAction::Replay) => {
                        self.game.replay();
                    }
                    Some(KeyAction::Quit) => {
                        info!(target: "platform", "Escape pressed, exiting");
                        event_loop.exit();
                    }
                    None => {}
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

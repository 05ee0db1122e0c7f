//! Perlin Terrain - fly over an endless gradient-noise landscape
//!
//! The grid stays put under the camera; WASD scrolls the noise sampling
//! offset so the terrain streams past.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use perlin_terrain::camera::FlyCamera;
use perlin_terrain::cli::Args;
use perlin_terrain::controls::KeyState;
use perlin_terrain::export::save_heightmap;
use perlin_terrain::params::{CameraParams, MovementParams, RenderConfig};
use perlin_terrain::rendering::{RenderSystem, Uniforms};
use perlin_terrain::terrain::TerrainSystem;
use perlin_terrain::timing::{FpsTracker, FrameClock};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation systems
    terrain: TerrainSystem,
    camera: FlyCamera,
    keys: KeyState,

    // Configuration
    movement: MovementParams,
    render_config: RenderConfig,

    // Time tracking
    clock: FrameClock,
    fps: FpsTracker,
    height_range: (f32, f32),
}

impl App {
    fn new(terrain: TerrainSystem, movement: MovementParams) -> Self {
        let camera = FlyCamera::new(CameraParams::default(), terrain.grid().map_size());

        Self {
            window: None,
            render_system: None,
            terrain,
            camera,
            keys: KeyState::default(),
            movement,
            render_config: RenderConfig::default(),
            clock: FrameClock::new(),
            fps: FpsTracker::new(),
            height_range: (0.0, 1.0),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Perlin Noise")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            self.terrain.grid(),
            &self.render_config,
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        log::info!("Perlin terrain is running (WASD move, arrows look, Space/Shift fly, ESC quits)");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.clock = FrameClock::new();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                self.keys.handle_key(key, state == ElementState::Pressed);
            }
            WindowEvent::Focused(false) => self.keys.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

impl App {
    /// Advance the simulation and render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = &mut self.render_system else {
            return;
        };

        let dt_s = self.clock.tick();

        // Planar movement follows the heading the player saw last frame
        let regenerated =
            self.terrain
                .update(dt_s, self.camera.yaw_degrees, &self.keys.movement_input());
        self.camera
            .update(dt_s, &self.keys.camera_input(), &self.movement);

        if regenerated {
            render_system.update_vertices(self.terrain.grid().vertices());
            self.height_range = self.terrain.grid().height_range();
        }

        let view_proj = self.camera.view_proj(render_system.aspect_ratio());
        render_system.update_uniforms(&Uniforms::new(view_proj, self.height_range));

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.reconfigure()
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        self.fps.record(Duration::from_secs_f32(dt_s));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let movement = args.movement_params();
    let mut terrain = TerrainSystem::new(&args.terrain_params(), &movement, args.start_offset())
        .map_err(|e| {
            log::error!("Invalid terrain configuration: {}", e);
            e
        })?;

    if let Some(path) = &args.export_heightmap {
        terrain.refresh();
        save_heightmap(terrain.grid(), path)?;
        return Ok(());
    }

    let mut app = App::new(terrain, movement);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}

//! Animator builder and run loop.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::error::AnimatorError;
use crate::field::{ParticleField, DEFAULT_ATTRACT_PULL, DEFAULT_ATTRACT_RADIUS, DEFAULT_PARTICLE_COUNT};
use crate::gpu::GpuState;
use crate::input::Input;
use crate::particle::Particle;
use crate::spawn::SpawnContext;
use crate::time::Time;

type Spawner = Box<dyn FnMut(&mut SpawnContext) -> Particle>;

/// A particle field animator builder.
///
/// Use method chaining to configure, then call `.run()` to open the window
/// and animate until it is closed (or Escape is pressed). Space pauses.
///
/// ```ignore
/// use driftfield::Animator;
///
/// Animator::new()
///     .with_particle_count(120)
///     .with_title("drift")
///     .run()?;
/// ```
pub struct Animator {
    particle_count: u32,
    attract_radius: f32,
    attract_pull: f32,
    seed: Option<u64>,
    spawner: Option<Spawner>,
    title: String,
    window_size: (u32, u32),
}

impl Animator {
    /// Create an animator with the stock field settings.
    pub fn new() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            attract_radius: DEFAULT_ATTRACT_RADIUS,
            attract_pull: DEFAULT_ATTRACT_PULL,
            seed: None,
            spawner: None,
            title: "driftfield".to_string(),
            window_size: (1280, 720),
        }
    }

    /// Set the number of particles. Fixed for the life of the window.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the pointer attraction radius in pixels.
    pub fn with_attract_radius(mut self, radius: f32) -> Self {
        self.attract_radius = radius;
        self
    }

    /// Set the fraction of the pointer delta applied per frame.
    pub fn with_attract_pull(mut self, pull: f32) -> Self {
        self.attract_pull = pull;
        self
    }

    /// Seed the spawn RNG for a reproducible field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the default particle spawner.
    /// Called once per particle with a [`SpawnContext`].
    pub fn with_spawner<F>(mut self, spawner: F) -> Self
    where
        F: FnMut(&mut SpawnContext) -> Particle + 'static,
    {
        self.spawner = Some(Box::new(spawner));
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Open the window and animate. Blocks until the window is closed.
    pub fn run(self) -> Result<(), AnimatorError> {
        let config = FieldConfig {
            particle_count: self.particle_count,
            attract_radius: self.attract_radius,
            attract_pull: self.attract_pull,
            seed: self.seed,
            spawner: self.spawner,
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(config, self.title, self.window_size);
        event_loop.run_app(&mut app)?;

        // Window and GPU setup happen inside `resumed`; surface failures here.
        match app.init_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Everything needed to spawn the field once the surface size is known.
///
/// The field lives in window pixel space: its bounds, the spawn area, and
/// the cursor positions fed into it must all be the window's physical
/// size, which is only known after the window exists. The animator
/// therefore builds the field inside `resumed`, not up front — a logical
/// size like the requested 1280x720 is the wrong space on any display
/// with a scale factor.
struct FieldConfig {
    particle_count: u32,
    attract_radius: f32,
    attract_pull: f32,
    seed: Option<u64>,
    spawner: Option<Spawner>,
}

impl FieldConfig {
    /// Spawn a field sized to the drawing surface, in physical pixels.
    fn build(&mut self, width: f32, height: f32) -> ParticleField {
        let bounds = glam::Vec2::new(width, height);
        let mut ctx = SpawnContext::new(self.particle_count, bounds, self.seed);

        let particles: Vec<Particle> = (0..self.particle_count)
            .map(|i| {
                ctx.index = i;
                match &mut self.spawner {
                    Some(spawner) => spawner(&mut ctx),
                    None => ctx.default_particle(),
                }
            })
            .collect();

        let mut field = ParticleField::from_particles(width, height, particles);
        field.set_attraction(self.attract_radius, self.attract_pull);
        field
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    init_error: Option<AnimatorError>,
    config: FieldConfig,
    // Spawned in `resumed`, once the physical surface size is known.
    field: Option<ParticleField>,
    input: Input,
    time: Time,
    title: String,
    window_size: (u32, u32),
}

impl App {
    fn new(config: FieldConfig, title: String, window_size: (u32, u32)) -> Self {
        Self {
            window: None,
            gpu_state: None,
            init_error: None,
            config,
            field: None,
            input: Input::new(),
            time: Time::new(),
            title,
            window_size,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let (width, height) = self.window_size;
            let window_attrs = Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(width, height));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    self.init_error = Some(e.into());
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            let size = window.inner_size();
            self.field = Some(
                self.config
                    .build(size.width.max(1) as f32, size.height.max(1) as f32),
            );

            let max_instances = self.config.particle_count;
            match pollster::block_on(GpuState::new(window, max_instances)) {
                Ok(gpu_state) => self.gpu_state = Some(gpu_state),
                Err(e) => {
                    // No drawing surface: the animation never starts.
                    self.init_error = Some(e.into());
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);
        if let Some(field) = &mut self.field {
            match self.input.pointer() {
                Some(p) => field.set_pointer(p),
                None => field.clear_pointer(),
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if let Some(field) = &mut self.field {
                    field.resize(physical_size.width as f32, physical_size.height as f32);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                        PhysicalKey::Code(KeyCode::Space) => self.time.toggle_pause(),
                        _ => {}
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.time.update();
                if !self.time.is_paused() {
                    if let Some(field) = &mut self.field {
                        field.step();
                    }
                }

                let instances = self.field.as_ref().map(|f| f.instances()).unwrap_or(&[]);
                if let Some(gpu_state) = &mut self.gpu_state {
                    match gpu_state.render(instances) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                if let Some(window) = &self.window {
                    if self.time.frame() % 30 == 0 && self.time.fps() > 0.0 {
                        window.set_title(&format!("{} - {:.0} fps", self.title, self.time.fps()));
                    }
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

//! Window, event loop and per-frame orchestration
//!
//! Each frame: read keys, step the simulation, draw, present. The loop ends on
//! a window close request, Escape, or once every block is gone.

use std::sync::Arc;

use miette::{IntoDiagnostic, Result, WrapErr};
use winit::{
    dpi::LogicalSize,
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};
use winit_input_helper::WinitInputHelper;

use crate::consts::WINDOW_TITLE;
use crate::input;
use crate::renderer::{RenderState, draw_list};
use crate::settings::Settings;
use crate::sim::{TickInput, World, tick};

/// Outcome of the simulation half of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// Keep running
    Running,
    /// The last block was destroyed this frame
    Cleared,
    /// The player asked to quit
    Quit,
}

/// Run the simulation half of a frame
///
/// A quit request skips the step entirely.
pub fn update(world: &mut World, input: &TickInput) -> Update {
    if input.quit {
        return Update::Quit;
    }

    let report = tick(world, input);
    for (row, col) in &report.destroyed {
        log::debug!(
            "Destroyed block ({}, {}), {} left",
            row,
            col,
            report.live_blocks
        );
    }

    if report.cleared() {
        Update::Cleared
    } else {
        Update::Running
    }
}

/// Game instance holding all state
struct Game {
    world: World,
    render_state: RenderState,
}

impl Game {
    /// Run one frame; returns false once the loop should close
    fn frame(&mut self, input: &TickInput) -> bool {
        let outcome = update(&mut self.world, input);
        if outcome == Update::Quit {
            log::info!("Quit requested");
            return false;
        }

        if !self.render() {
            return false;
        }

        if outcome == Update::Cleared {
            log::info!("All blocks destroyed");
            return false;
        }
        true
    }

    /// Draw the world; returns false on an unrecoverable surface error
    fn render(&mut self) -> bool {
        let draws = draw_list(&self.world);
        match self.render_state.render(&draws) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                return false;
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
        true
    }
}

/// Acquire the GPU and set up the render pipeline for a window
async fn init_graphics(window: Arc<Window>, settings: &Settings) -> Result<RenderState> {
    let size = window.inner_size();

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

    let surface = instance
        .create_surface(window)
        .into_diagnostic()
        .wrap_err("Failed to create surface")?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .into_diagnostic()
        .wrap_err("Failed to get adapter")?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    RenderState::new(
        surface,
        &adapter,
        size.width,
        size.height,
        settings.present_mode(),
    )
    .await
}

/// Open the window and run the game until it closes
///
/// # Errors
///
/// - When the window or event loop can't be created.
/// - When no usable GPU adapter, device or surface is available.
pub fn run(settings: Settings) -> Result<()> {
    let event_loop = EventLoop::new()
        .into_diagnostic()
        .wrap_err("Unable to create event loop")?;

    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(
            settings.window_width,
            settings.window_height,
        ))
        .with_resizable(false)
        .build(&event_loop)
        .into_diagnostic()
        .wrap_err("Unable to create window")?;
    let window = Arc::new(window);

    let render_state = pollster::block_on(init_graphics(window.clone(), &settings))
        .wrap_err("Failed to initialize graphics")?;

    let mut game = Game {
        world: World::new(&settings),
        render_state,
    };
    let mut input = WinitInputHelper::new();

    log::info!(
        "Breakout running: {} blocks, window {}x{}",
        game.world.blocks.live_count(),
        settings.window_width,
        settings.window_height
    );

    // Poll so frames keep coming without waiting for events
    event_loop.set_control_flow(ControlFlow::Poll);

    event_loop
        .run(move |event, elwt| {
            // The input helper returns true once per frame, after all pending events
            if !input.update(&event) {
                return;
            }

            if input.close_requested() || input.destroyed() {
                log::info!("Window closed");
                elwt.exit();
                return;
            }

            if let Some(size) = input.window_resized() {
                game.render_state.resize(size.width, size.height);
            }

            if !game.frame(&input::read(&input)) {
                elwt.exit();
            }
        })
        .into_diagnostic()
        .wrap_err("Error running game loop")?;

    Ok(())
}

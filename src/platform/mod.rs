//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the game loop, all on one thread.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌────────────────────────────────────────────┐
//  │  Winit Event Loop (ControlFlow::WaitUntil) │
//  │   ├─ tick deadline reached → request_redraw│
//  │   ├─ RedrawRequested → Scene → Frame →     │
//  │   │     softbuffer present                 │
//  │   └─ other events → EventMapper → Event    │
//  │         └─ Game::handle (board, banner,    │
//  │            run state)                      │
//  └────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Single thread**: rendering, input, and game state share the loop;
//   the wakeup deadline multiplexes the fixed tick with OS events
// - **Decode once**: Winit events become `Event` values at this
//   boundary and nothing below it sees Winit types
// - **Fixed tick**: redraws are driven by the configured tick rate, not
//   by the monitor or by input activity
//
// Responsibilities:
// - Create the OS window, icon, and presentation surface
// - Schedule the fixed-rate tick and present frames
// - Feed decoded events to the game and exit when it stops
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== Standard Library Imports ============================================

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{StartCause, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Icon, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::assets::ImageCache;
use crate::audio::Music;
use crate::core::{Event, Game};
use crate::render::text::{TextRenderer, BANNER_COLOR};
use crate::render::{Frame, Scene};
use event_mapper::EventMapper;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop and a surface the game
/// cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create the event loop.
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),

    /// Window creation failed.
    WindowCreation(winit::error::OsError),

    /// Presentation surface could not be created or resized.
    Surface(softbuffer::SoftBufferError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::Surface(e) => write!(f, "Surface error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager and game-loop driver.
///
/// Owns everything with a lifetime tied to the window: the surface, the
/// frame buffer, the scene, the game state, and the music stream. Runs
/// on the main thread (Winit requirement on macOS/iOS).
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(..)` with fully loaded resources
/// 2. **Execution**: `platform.run()` blocks in the event loop
/// 3. **Window creation**: lazily in `resumed()`
/// 4. **Shutdown**: game stops → caches released → loop exits
pub struct Platform {
    /// Window caption.
    title: String,

    /// Initial window side length in logical pixels.
    window_px: u32,

    /// Interval between redraw ticks.
    tick_interval: Duration,

    /// Deadline for the next tick.
    next_tick: Instant,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Presentation surface over the window (created with the window).
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,

    /// CPU-side pixel buffer the scene draws into.
    frame: Frame,

    /// Decodes Winit events at the boundary.
    mapper: EventMapper,

    /// Game session state.
    game: Game,

    /// Drawable scene (background, tiles, banner overlay).
    scene: Scene,

    /// Rasterizes the win banner.
    text: TextRenderer,

    /// Sprite cache, released at shutdown.
    cache: ImageCache,

    /// Background music; kept alive for the life of the loop.
    _music: Option<Music>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        window_px: u32,
        tick_interval: Duration,
        game: Game,
        scene: Scene,
        text: TextRenderer,
        cache: ImageCache,
        music: Option<Music>,
    ) -> Self {
        info!(target: "platform", "Platform initialized ({}ms tick)", tick_interval.as_millis());
        Self {
            title,
            window_px,
            tick_interval,
            next_tick: Instant::now(),
            window: None,
            surface: None,
            frame: Frame::new(window_px, window_px),
            mapper: EventMapper::new(),
            game,
            scene,
            text,
            cache,
            _music: music,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the game stops or the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit
    /// requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        info!(target: "platform", "Event loop exited");
        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    /// Creates the window and presentation surface.
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let icon = window_icon(&self.scene);

        let attrs = WindowAttributes::default()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(self.window_px, self.window_px))
            .with_window_icon(icon);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(PlatformError::WindowCreation)?,
        );

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let context =
            softbuffer::Context::new(Arc::clone(&window)).map_err(PlatformError::Surface)?;
        let surface = softbuffer::Surface::new(&context, Arc::clone(&window))
            .map_err(PlatformError::Surface)?;

        let size = window.inner_size();
        self.window = Some(window);
        self.surface = Some(surface);
        self.resize_surface(size.width, size.height)?;

        Ok(())
    }

    /// Resizes the surface and frame buffer to the new window size.
    ///
    /// Zero-sized windows (minimized) are skipped; the surface keeps
    /// its previous dimensions until the window is visible again.
    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), PlatformError> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            debug!(target: "platform", "Skipping resize to {}x{}", width, height);
            return Ok(());
        };

        if let Some(surface) = &mut self.surface {
            surface.resize(w, h).map_err(PlatformError::Surface)?;
            self.frame.resize(width, height);
        }
        Ok(())
    }

    /// Draws the scene and presents it to the window.
    fn present(&mut self) -> Result<(), PlatformError> {
        let Some(surface) = &mut self.surface else {
            return Ok(());
        };

        self.scene
            .draw(&mut self.frame, self.game.board(), self.game.grid());

        let mut buffer = surface.buffer_mut().map_err(PlatformError::Surface)?;
        let pixels = self.frame.pixels();
        if buffer.len() == pixels.len() {
            buffer.copy_from_slice(pixels);
        }
        buffer.present().map_err(PlatformError::Surface)?;
        Ok(())
    }

    /// Feeds one decoded event to the game and applies the fallout:
    /// surface resize, banner overlay, shutdown.
    fn dispatch(&mut self, event: Event, event_loop: &ActiveEventLoop) {
        if let Event::Resized { width, height } = event {
            if let Err(e) = self.resize_surface(width, height) {
                warn!(target: "platform", "{}", e);
            }
        }

        self.game.handle(event);

        if !self.scene.has_overlay() {
            if let Some(banner) = self.game.banner() {
                self.scene
                    .set_overlay(self.text.render(banner, BANNER_COLOR));
            }
        }

        if !self.game.is_running() {
            info!(target: "platform", "Session stopped, shutting down");
            self.cache.clear();
            event_loop.exit();
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            error!(target: "platform", "{}", e);
            event_loop.exit();
            return;
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Schedules the fixed-rate tick.
    ///
    /// The loop sleeps until the next deadline; reaching it triggers a
    /// redraw and arms the following tick. OS events waking the loop
    /// early leave the deadline untouched.
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        match cause {
            StartCause::Init => {
                self.next_tick = Instant::now() + self.tick_interval;
            }
            StartCause::ResumeTimeReached { .. } => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
                self.next_tick = Instant::now() + self.tick_interval;
            }
            _ => {}
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::RedrawRequested = event {
            if let Err(e) = self.present() {
                warn!(target: "platform", "{}", e);
            }
            return;
        }

        if let Some(decoded) = self.mapper.map(&event) {
            self.dispatch(decoded, event_loop);
        }
    }
}

//=== Window Icon =========================================================

/// Builds the window icon from the cross sprite.
fn window_icon(scene: &Scene) -> Option<Icon> {
    let sprite = scene.cross_sprite();
    match Icon::from_rgba(sprite.to_rgba(), sprite.width(), sprite.height()) {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!(target: "platform", "Window icon rejected: {}", e);
            None
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Constructing a Platform needs loaded sprites and a font, and the
    // event loop needs a display. Coverage here validates the error
    // type; loop behavior is exercised by the core and render tests.

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn platform_error_display_format() {
        fn assert_display<T: std::fmt::Display>() {}
        assert_display::<PlatformError>();
    }
}

//=========================================================================
// OXO Engine
//
// Main entry point and coordinator for the game.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Event Loop]
//         │                          │
//         ├─ with_title()            ├─ loads assets (fail fast)
//         ├─ with_tick_rate()        └─ runs platform
//         └─ with_asset_root()          blocks until exit
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

//=== External Crates =====================================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::assets::{
    AssetError, ImageCache, Sprite, BACKGROUND_FILE, FONT_DIR, FONT_FILE, GFX_DIR, MUSIC_DIR,
    MUSIC_FILE, TILE_FILES,
};
use crate::audio::{AudioError, Music};
use crate::core::{Game, Grid};
use crate::platform::{Platform, PlatformError};
use crate::render::text::{TextRenderer, BANNER_SIZE_PX};
use crate::render::Scene;

//=== EngineError =========================================================

/// Anything that can abort a session.
#[derive(Debug)]
pub enum EngineError {
    /// Image or font resource failed to load.
    Asset(AssetError),

    /// Background music failed to load.
    Audio(AudioError),

    /// Window or event loop failure.
    Platform(PlatformError),
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset(e) => write!(f, "{}", e),
            Self::Audio(e) => write!(f, "{}", e),
            Self::Platform(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Asset(e) => Some(e),
            Self::Audio(e) => Some(e),
            Self::Platform(e) => Some(e),
        }
    }
}

impl From<AssetError> for EngineError {
    fn from(e: AssetError) -> Self {
        Self::Asset(e)
    }
}

impl From<AudioError> for EngineError {
    fn from(e: AudioError) -> Self {
        Self::Audio(e)
    }
}

impl From<PlatformError> for EngineError {
    fn from(e: PlatformError) -> Self {
        Self::Platform(e)
    }
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// Provides a fluent API for setting parameters before construction.
///
/// # Default Values
///
/// - **Title**: `"OXO - <version>"`
/// - **Window side**: 224 logical pixels
/// - **Tick rate**: 50.0 redraws per second
/// - **Asset root**: the current directory
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use oxo::EngineBuilder;
///
/// EngineBuilder::new().build().run().unwrap();
/// ```
///
/// Advanced configuration:
/// ```no_run
/// # use oxo::EngineBuilder;
/// EngineBuilder::new()
///     .with_title("OXO (dev)")
///     .with_tick_rate(60.0)
///     .with_asset_root("assets")
///     .build()
///     .run()
///     .unwrap();
/// ```
pub struct EngineBuilder {
    title: String,
    window_px: u32,
    tick_rate: f64,
    asset_root: PathBuf,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: format!("OXO - {}", env!("CARGO_PKG_VERSION")),
            window_px: 224,
            tick_rate: 50.0,
            asset_root: PathBuf::from("."),
        }
    }

    /// Sets the window caption.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window side length in logical pixels.
    ///
    /// The board is square; one cell spans a third of this.
    ///
    /// # Panics
    ///
    /// Panics if `window_px < 3`.
    pub fn with_window_px(mut self, window_px: u32) -> Self {
        assert!(window_px >= 3, "Window side must be at least 3, got {}", window_px);
        self.window_px = window_px;
        self
    }

    /// Sets the redraw rate in ticks per second.
    ///
    /// Default: 50.0
    ///
    /// # Panics
    ///
    /// Panics if `tick_rate <= 0.0`.
    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        assert!(tick_rate > 0.0, "Tick rate must be positive, got {}", tick_rate);
        self.tick_rate = tick_rate;
        self
    }

    /// Sets the directory the `gfx/`, `fonts/`, and `music/`
    /// subdirectories are resolved against.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine ({}px window, {} ticks/s)",
            self.window_px, self.tick_rate
        );

        Engine {
            title: self.title,
            window_px: self.window_px,
            tick_interval: Duration::from_secs_f64(1.0 / self.tick_rate),
            asset_root: self.asset_root,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// The game runtime.
///
/// Create via [`EngineBuilder`], then call [`Engine::run`]. All
/// resources are loaded up front; a missing or corrupt file aborts
/// startup with a diagnostic rather than failing mid-session.
pub struct Engine {
    title: String,
    window_px: u32,
    tick_interval: Duration,
    asset_root: PathBuf,
}

impl Engine {
    //--- Execution --------------------------------------------------------

    /// Loads every resource, opens the window, and blocks in the event
    /// loop until the session ends.
    ///
    /// # Lifecycle
    ///
    /// 1. Loads the board and tile images into the cache
    /// 2. Loads the banner font and starts the background music
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On exit the cache is released and the music stops
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if any resource fails to load or the
    /// platform cannot start.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting (tick interval: {:?})", self.tick_interval);

        //--- 1. Images ----------------------------------------------------
        let mut cache = ImageCache::new();
        let gfx = self.asset_root.join(GFX_DIR);

        let background = cache.load(&gfx.join(BACKGROUND_FILE))?;
        let tiles: [Rc<Sprite>; 3] = [
            cache.load(&gfx.join(TILE_FILES[0]))?,
            cache.load(&gfx.join(TILE_FILES[1]))?,
            cache.load(&gfx.join(TILE_FILES[2]))?,
        ];
        let scene = Scene::new(background, tiles);

        //--- 2. Font and music --------------------------------------------
        let font_path = self.asset_root.join(FONT_DIR).join(FONT_FILE);
        let text = TextRenderer::from_file(&font_path, BANNER_SIZE_PX)?;

        let music_path = self.asset_root.join(MUSIC_DIR).join(MUSIC_FILE);
        let music = match Music::play_looped(&music_path) {
            Ok(music) => Some(music),
            // A machine without an output device still gets a game.
            Err(AudioError::Device(e)) => {
                warn!("No audio output, continuing silent: {}", e);
                None
            }
            Err(e) => return Err(e.into()),
        };

        //--- 3. Game and platform -----------------------------------------
        let game = Game::new(Grid::new(self.window_px));
        let platform = Platform::new(
            self.title,
            self.window_px,
            self.tick_interval,
            game,
            scene,
            text,
            cache,
            music,
        );

        platform.run()?;
        info!("Shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.window_px, 224);
        assert_eq!(builder.tick_rate, 50.0);
        assert_eq!(builder.asset_root, PathBuf::from("."));
        assert!(builder.title.starts_with("OXO - "));
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_title("Custom")
            .with_window_px(300)
            .with_tick_rate(60.0)
            .with_asset_root("assets")
            .build();

        assert_eq!(engine.title, "Custom");
        assert_eq!(engine.window_px, 300);
        assert_eq!(engine.tick_interval, Duration::from_secs_f64(1.0 / 60.0));
        assert_eq!(engine.asset_root, PathBuf::from("assets"));
    }

    #[test]
    #[should_panic(expected = "Tick rate must be positive")]
    fn builder_tick_rate_panics_on_zero() {
        EngineBuilder::new().with_tick_rate(0.0);
    }

    #[test]
    #[should_panic(expected = "Window side must be at least 3")]
    fn builder_window_px_panics_when_too_small() {
        EngineBuilder::new().with_window_px(2);
    }

    #[test]
    fn run_fails_fast_on_missing_assets() {
        let result = EngineBuilder::new()
            .with_asset_root("/definitely/not/here")
            .build()
            .run();

        match result {
            Err(EngineError::Asset(AssetError::Io { path, .. })) => {
                assert!(path.ends_with("gfx/grid.png"), "got {}", path.display());
            }
            other => panic!("Expected asset error, got {:?}", other.map(|_| ())),
        }
    }
}

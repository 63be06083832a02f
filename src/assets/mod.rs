//=========================================================================
// Asset Subsystem
//
// Loads and caches image resources, keyed by file path.
//
// Responsibilities:
// - Decode PNG files into sprites via the `image` crate
// - Hand out shared handles, loading each file at most once
// - Free cached entries by path, by handle, or in bulk at shutdown
//
// Notes:
// The cache has no eviction policy and no concurrency guard; it is
// owned and used exclusively by the event-loop thread. At most one
// loaded handle exists per distinct path.
//
//=========================================================================

mod sprite;

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

//=== External Crates =====================================================

use log::{debug, warn};

//=== Public Exports ======================================================

pub use sprite::Sprite;

//=== Asset Layout ========================================================
//
// Fixed subdirectory and file names, joined under the configured asset
// root. The tile file list is indexed by `Tile::index()`.
//

/// Subdirectory holding the board and tile images.
pub const GFX_DIR: &str = "gfx";

/// Subdirectory holding the banner font.
pub const FONT_DIR: &str = "fonts";

/// Subdirectory holding the background music.
pub const MUSIC_DIR: &str = "music";

/// Board background image.
pub const BACKGROUND_FILE: &str = "grid.png";

/// Tile sprite images, one per symbol.
pub const TILE_FILES: [&str; 3] = ["empty.png", "naught.png", "cross.png"];

/// Banner font file.
pub const FONT_FILE: &str = "fontin_sans.otf";

/// Looped background music file.
pub const MUSIC_FILE: &str = "theme.ogg";

//=== AssetError ==========================================================

/// Resource load failures.
///
/// These are unrecoverable at startup; the caller propagates them and
/// the process aborts with a diagnostic.
#[derive(Debug)]
pub enum AssetError {
    /// File could not be opened or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File was read but could not be decoded as an image.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Font file was read but could not be parsed.
    Font { path: PathBuf, reason: String },
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            Self::Decode { path, source } => {
                write!(f, "Failed to decode {}: {}", path.display(), source)
            }
            Self::Font { path, reason } => {
                write!(f, "Failed to parse font {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Font { .. } => None,
        }
    }
}

//=== ImageCache ==========================================================

/// File-path-keyed cache of loaded sprites.
///
/// Loads on first miss and returns the cached handle on every hit.
/// Handles are reference counted; removing an entry from the cache
/// releases the cache's reference, and the pixels are freed once the
/// last outstanding handle drops.
#[derive(Default)]
pub struct ImageCache {
    entries: HashMap<PathBuf, Rc<Sprite>>,
}

impl ImageCache {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self::default()
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns the sprite for `path`, loading it on first use.
    ///
    /// On a load failure the error is logged and `None` is returned;
    /// nothing is cached, so a later call retries the load.
    pub fn get(&mut self, path: &Path) -> Option<Rc<Sprite>> {
        match self.load(path) {
            Ok(sprite) => Some(sprite),
            Err(e) => {
                warn!(target: "assets", "{}", e);
                None
            }
        }
    }

    /// Returns the sprite for `path`, loading it on first use.
    ///
    /// The fail-fast variant used during startup: the caller propagates
    /// the error and the process aborts with a diagnostic.
    pub fn load(&mut self, path: &Path) -> Result<Rc<Sprite>, AssetError> {
        if let Some(sprite) = self.entries.get(path) {
            return Ok(Rc::clone(sprite));
        }

        let sprite = Rc::new(load_image(path)?);
        debug!(
            target: "assets",
            "Loaded {} ({}x{})",
            path.display(),
            sprite.width(),
            sprite.height()
        );
        self.entries.insert(path.to_path_buf(), Rc::clone(&sprite));
        Ok(sprite)
    }

    //--- Freeing ----------------------------------------------------------

    /// Releases the cached entry for `path`. Returns whether an entry
    /// was present.
    pub fn remove(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    /// Releases the cached entry holding the given handle. Returns
    /// whether an entry was present.
    pub fn remove_handle(&mut self, handle: &Rc<Sprite>) -> bool {
        let key = self
            .entries
            .iter()
            .find(|(_, v)| Rc::ptr_eq(v, handle))
            .map(|(k, _)| k.clone());

        match key {
            Some(key) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    /// Releases every cached entry.
    pub fn clear(&mut self) {
        debug!(target: "assets", "Releasing {} cached images", self.entries.len());
        self.entries.clear();
    }

    //--- Utilities --------------------------------------------------------

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//=== Loading =============================================================

/// Decodes one image file into a sprite.
fn load_image(path: &Path) -> Result<Sprite, AssetError> {
    let reader = image::ImageReader::open(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = reader.decode().map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Sprite::from_rgba(width, height, rgba.as_raw()))
}

//=========================================================================
// Unit Tests
//=========================================================================

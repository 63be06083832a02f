//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use oxo::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Entry point
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Game logic
pub use crate::core::{Board, Event, Game, Grid, KeyCode, MouseButton, RunState, Tile};

// Resources
pub use crate::assets::{AssetError, ImageCache, Sprite};
pub use crate::audio::{AudioError, Music};

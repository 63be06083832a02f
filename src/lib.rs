//=========================================================================
// OXO — Library Root
//
// This crate defines the public API surface of the OXO game.
//
// Responsibilities:
// - Expose the game entry point (`Engine` / `EngineBuilder`)
// - Keep internal modules (like `platform`) hidden from end users
// - Provide clean separation between the high-level facade and the
//   lower-level subsystems (board logic, rendering, assets, audio)
//
// Typical usage:
// ```no_run
// use oxo::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the platform-independent game logic (board, turn order,
// event vocabulary). `assets`, `render`, and `audio` are exposed for
// extensibility, but normal application code will mostly use the
// top-level `Engine` facade.
//
pub mod assets;
pub mod audio;
pub mod core;
pub mod render;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop, presentation) and is kept private, as it is not part of
// the public API surface.
//
// `engine` defines the main entry point and startup logic.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the entry-point types so users can simply
// `use oxo::EngineBuilder;` without knowing the module structure.
//
pub mod prelude;
pub use engine::{Engine, EngineBuilder, EngineError};

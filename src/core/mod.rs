//=========================================================================
// Core Game Systems
//
// Platform-independent game logic: the board model, the pixel↔cell
// grid, the decoded event vocabulary, and the session state machine.
//
// Nothing in this module touches the windowing, audio, or rendering
// libraries; the platform layer decodes OS events into `Event` at the
// boundary and feeds them to `Game`.
//
//=========================================================================

pub mod board;
pub mod event;
pub mod game;
pub mod grid;

//=== Public Exports ======================================================

pub use board::{Board, Tile, BOARD_CELLS};
pub use event::{Event, KeyCode, MouseButton};
pub use game::{Game, RunState};
pub use grid::Grid;

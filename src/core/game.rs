//=========================================================================
// Game Session
//
// The running game: board, turn order, win banner, and the two-state
// loop control (Running / Stopped).
//
// Responsibilities:
// - Consume decoded events from the platform layer
// - Attempt placements for left clicks and toggle the turn on success
// - Re-check the winner after every successful placement
// - Stop on quit or escape
//
// Notes:
// The session never touches the windowing library; it sees only
// `core::Event`. Resize events are presentation-only and deliberately
// leave the board and the current turn untouched.
//
//=========================================================================

use log::{debug, info};

use crate::core::board::{Board, Tile};
use crate::core::event::{Event, KeyCode, MouseButton};
use crate::core::grid::Grid;

//=== RunState ============================================================

/// Loop control for the session.
///
/// `Stopped` is entered on a quit signal or an escape key press and is
/// never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

//=== Game ================================================================

/// A single naughts-and-crosses session.
///
/// Naught always moves first. The current symbol flips only after a
/// successful placement; rejected clicks (occupied cell, outside the
/// board) leave the turn order unchanged.
pub struct Game {
    board: Board,
    grid: Grid,
    current: Tile,
    banner: Option<String>,
    state: RunState,
}

impl Game {
    //--- Construction -----------------------------------------------------

    /// Creates a fresh session with an empty board.
    pub fn new(grid: Grid) -> Self {
        Self {
            board: Board::new(),
            grid,
            current: Tile::Naught,
            banner: None,
            state: RunState::Running,
        }
    }

    //--- Access -----------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Symbol that will be placed by the next successful click.
    pub fn current(&self) -> Tile {
        self.current
    }

    /// Status text to overlay on the board, set once a line is won.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    //--- Event Handling ---------------------------------------------------

    /// Consumes one decoded event.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!(target: "game", "Quit requested");
                self.state = RunState::Stopped;
            }

            Event::KeyDown(KeyCode::Escape) => {
                info!(target: "game", "Escape pressed, stopping");
                self.state = RunState::Stopped;
            }

            Event::KeyDown(key) => {
                debug!(target: "game", "Ignoring key press: {:?}", key);
            }

            Event::MouseDown {
                button: MouseButton::Left,
                x,
                y,
            } => self.try_place(x, y),

            Event::MouseDown { button, .. } => {
                debug!(target: "game", "Ignoring {:?} click", button);
            }

            // Surface recreation happens in the platform layer; board
            // state and turn order are preserved across resizes.
            Event::Resized { width, height } => {
                debug!(target: "game", "Window resized to {}x{}", width, height);
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Attempts a placement at the clicked pixel. On success, flips the
    /// turn and re-checks the winner.
    fn try_place(&mut self, x: u32, y: u32) {
        let Some((col, row)) = self.grid.screen_to_board(x, y) else {
            debug!(target: "game", "Click at ({}, {}) is outside the board", x, y);
            return;
        };

        debug!(
            target: "game",
            "Trying to place {} at cell ({}, {})",
            self.current, col, row
        );

        if !self.board.place(self.current, col, row) {
            debug!(target: "game", "Cell ({}, {}) is occupied", col, row);
            return;
        }
        self.current.flip();

        if let Some(winner) = self.board.winner() {
            let banner = format!("{} won!!", winner);
            info!(target: "game", "{}", banner);
            self.banner = Some(banner);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Platform Event Mapper
//
// Converts Winit window events into the decoded `Event` vocabulary the
// game consumes. The OS event stream is interpreted exactly once, here.
//
// Responsibilities:
// - Translate keyboard, mouse, resize, and close events
// - Track the cursor so button presses carry a position
// - Swallow events the game has no use for
//
//=========================================================================

use winit::event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

use crate::core::{Event, KeyCode, MouseButton};

//=== Key Conversion ======================================================
//
// Only the keys the game reacts to are named; everything else maps to
// `Unidentified` and gets logged at debug level downstream.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        match code {
            WinitKeyCode::Escape => KeyCode::Escape,
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::Enter => KeyCode::Enter,
            _ => KeyCode::Unidentified,
        }
    }
}

//=== Mouse Conversion ====================================================

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=== EventMapper =========================================================

/// Stateful Winit → `Event` translator.
///
/// Winit reports button presses without a position, so the mapper
/// remembers the last cursor location and stamps it onto `MouseDown`.
pub struct EventMapper {
    cursor_x: f64,
    cursor_y: f64,
}

impl EventMapper {
    pub fn new() -> Self {
        Self {
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }

    /// Decodes one window event.
    ///
    /// Returns `None` for events the game does not consume: cursor
    /// motion (tracked internally), key and button releases, focus
    /// changes, and the rest of the Winit surface.
    pub fn map(&mut self, event: &WindowEvent) -> Option<Event> {
        match event {
            WindowEvent::CloseRequested => Some(Event::Quit),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                let key = match physical_key {
                    PhysicalKey::Code(code) => KeyCode::from(*code),
                    _ => KeyCode::Unidentified,
                };
                Some(Event::KeyDown(key))
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => Some(Event::MouseDown {
                button: MouseButton::from(*button),
                x: self.cursor_x.max(0.0) as u32,
                y: self.cursor_y.max(0.0) as u32,
            }),

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = position.x;
                self.cursor_y = position.y;
                None
            }

            WindowEvent::Resized(size) => Some(Event::Resized {
                width: size.width,
                height: size.height,
            }),

            _ => None,
        }
    }
}

impl Default for EventMapper {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

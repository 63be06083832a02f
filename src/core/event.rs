//=========================================================================
// System Event Types
//
// Defines the internal representation of window and input events.
// This module abstracts away platform-specific input (e.g. Winit) into
// a unified, game-friendly format consumed by the session loop.
//
// Responsibilities:
// - Represent the four event families the game reacts to
//   (quit, key press, mouse click, window resize)
// - Keep the core loop independent of the windowing library
//
//=========================================================================

//=== MouseButton Enum ====================================================
// Represents a physical mouse button.
// Used to identify which button triggered a click.
//
// This abstraction allows the game to stay independent of
// the underlying platform or library (e.g., Winit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

//=== KeyCode Enum ========================================================
// Represents a physical keyboard key in a simplified,
// cross-platform form.
//
// Only the keys the game cares about are included; additional
// codes can be added as needed by the event mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Space,
    Enter,

    //--- Fallback ---------------------------------------------------------
    // Used for keys not mapped explicitly by the platform layer.
    Unidentified,
}

//=== Event Enum ==========================================================
// Represents a concrete event as normalized by the platform layer.
//
// Each variant carries the relevant data payload: for example,
// click coordinates for `MouseDown`, or the new dimensions for
// `Resized`. Decoded exactly once at the system boundary and consumed
// generically by the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Window close requested by user or OS.
    Quit,

    /// Key pressed down. Releases are not delivered.
    KeyDown(KeyCode),

    /// Mouse button pressed at the given window position (pixels,
    /// top-left origin).
    MouseDown { button: MouseButton, x: u32, y: u32 },

    /// Window resized to the given physical dimensions.
    Resized { width: u32, height: u32 },
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_copy_and_eq() {
        let a = Event::MouseDown {
            button: MouseButton::Left,
            x: 10,
            y: 20,
        };
        let b = a;
        assert_eq!(a, b);

        let c = Event::KeyDown(KeyCode::Escape);
        let d = c;
        assert_eq!(c, d);
    }

    #[test]
    fn payloads_distinguish_events() {
        let a = Event::Resized {
            width: 224,
            height: 224,
        };
        let b = Event::Resized {
            width: 448,
            height: 448,
        };
        assert_ne!(a, b);
    }
}

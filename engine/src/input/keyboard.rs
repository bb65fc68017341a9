//! Keyboard input handling
//!
//! Platform-agnostic key state tracking. The windowing host translates its
//! native key events into the logical [`KeyCode`] values here (see the game
//! config for the winit mapping) and feeds them to [`KeyboardState`] outside
//! the frame tick; the avatar controller takes one snapshot per frame.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_engine::input::keyboard::{KeyboardState, KeyCode};
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.handle_key(KeyCode::W, true);
//! assert!(keyboard.movement.forward);
//! ```

/// Logical key codes for the keys the showcase cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key (move forward)
    W,
    /// A key (move left)
    A,
    /// S key (move backward)
    S,
    /// D key (move right)
    D,
    /// Up arrow (move forward)
    ArrowUp,
    /// Down arrow (move backward)
    ArrowDown,
    /// Left arrow (move left)
    ArrowLeft,
    /// Right arrow (move right)
    ArrowRight,
    /// Any key we don't track
    Unknown,
}

/// Pressed state of the movement directions.
///
/// WASD and the arrow keys both drive the same four booleans, so holding W
/// and releasing ArrowUp in the same frame leaves `forward` false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// Forward movement (W / Up)
    pub forward: bool,
    /// Backward movement (S / Down)
    pub backward: bool,
    /// Left movement (A / Left)
    pub left: bool,
    /// Right movement (D / Right)
    pub right: bool,
}

impl MovementKeys {
    /// Creates a state with no keys pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the pressed state for a key.
    ///
    /// # Returns
    ///
    /// `true` if the key maps to a movement direction, `false` otherwise
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => {
                self.forward = pressed;
                true
            }
            KeyCode::S | KeyCode::ArrowDown => {
                self.backward = pressed;
                true
            }
            KeyCode::A | KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::D | KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            KeyCode::Unknown => false,
        }
    }

    /// Returns true if any movement key is held.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Releases all keys (window focus loss).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete keyboard state the host keeps updated between frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    /// Movement direction keys
    pub movement: MovementKeys,
}

impl KeyboardState {
    /// Creates a keyboard state with nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a key event to the movement state.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.movement.handle_key(key, pressed)
    }

    /// Releases all keys.
    pub fn reset(&mut self) {
        self.movement.reset();
    }

    /// Snapshot of the movement keys for this frame.
    pub fn movement_snapshot(&self) -> MovementKeys {
        self.movement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_sets_directions() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.handle_key(KeyCode::A, true));
        assert!(keys.forward);
        assert!(keys.left);
        assert!(!keys.backward);
        assert!(!keys.right);
    }

    #[test]
    fn test_arrows_alias_wasd() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::ArrowUp, true);
        assert!(keys.forward);
        keys.handle_key(KeyCode::ArrowUp, false);
        assert!(!keys.forward);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::Unknown, true));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_any_pressed() {
        let mut keys = MovementKeys::new();
        assert!(!keys.any_pressed());
        keys.handle_key(KeyCode::D, true);
        assert!(keys.any_pressed());
        keys.handle_key(KeyCode::D, false);
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut state = KeyboardState::new();
        state.handle_key(KeyCode::W, true);
        state.handle_key(KeyCode::D, true);
        state.reset();
        assert!(!state.movement.any_pressed());
    }
}

//! Input Configuration
//!
//! Defines the key bindings as a data structure and translates host
//! (winit) key codes into the engine's logical key codes. WASD and the
//! arrow keys both drive movement, matching the shipped controls.

use winit::keyboard::KeyCode;

use crate::input::KeyCode as EngineKey;

/// Movement key bindings (primary WASD set plus an arrow-key alias set).
#[derive(Clone, Debug)]
pub struct MovementBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub forward_alt: KeyCode,
    pub backward_alt: KeyCode,
    pub left_alt: KeyCode,
    pub right_alt: KeyCode,
}

/// Centralized input configuration containing all key bindings.
///
/// `InputConfig::default()` returns the shipped bindings; hosts may build
/// their own for remapping.
#[derive(Clone, Debug)]
pub struct InputConfig {
    pub movement: MovementBindings,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            movement: MovementBindings {
                forward: KeyCode::KeyW,
                backward: KeyCode::KeyS,
                left: KeyCode::KeyA,
                right: KeyCode::KeyD,
                forward_alt: KeyCode::ArrowUp,
                backward_alt: KeyCode::ArrowDown,
                left_alt: KeyCode::ArrowLeft,
                right_alt: KeyCode::ArrowRight,
            },
        }
    }
}

impl InputConfig {
    /// Translates a winit key code into the engine's logical key code.
    ///
    /// Unbound keys map to [`EngineKey::Unknown`], which the keyboard state
    /// ignores.
    pub fn translate(&self, key: KeyCode) -> EngineKey {
        let m = &self.movement;
        if key == m.forward {
            EngineKey::W
        } else if key == m.backward {
            EngineKey::S
        } else if key == m.left {
            EngineKey::A
        } else if key == m.right {
            EngineKey::D
        } else if key == m.forward_alt {
            EngineKey::ArrowUp
        } else if key == m.backward_alt {
            EngineKey::ArrowDown
        } else if key == m.left_alt {
            EngineKey::ArrowLeft
        } else if key == m.right_alt {
            EngineKey::ArrowRight
        } else {
            EngineKey::Unknown
        }
    }
}

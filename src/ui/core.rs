// src/ui/core.rs
//! Input primitives shared across the UI tree.

use embedded_graphics::prelude::*;

/// Engine-level button masks.
///
/// The host maps whatever its controller hardware reports onto these bits
/// before handing an [`InputState`] to the engine; raw hardware codes never
/// reach the tree.
pub mod buttons {
    /// Activate the focused element.
    pub const SELECT: u64 = 1 << 0;
    /// Leave the current screen.
    pub const BACK: u64 = 1 << 1;
    pub const UP: u64 = 1 << 2;
    pub const DOWN: u64 = 1 << 3;
    pub const LEFT: u64 = 1 << 4;
    pub const RIGHT: u64 = 1 << 5;
}

/// Direction of a focus-move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    None,
    Up,
    Down,
    Left,
    Right,
}

impl FocusDirection {
    /// The direction encoded in a freshly pressed button mask, if any.
    pub fn from_keys(keys: u64) -> Option<Self> {
        if keys & buttons::UP != 0 {
            Some(Self::Up)
        } else if keys & buttons::DOWN != 0 {
            Some(Self::Down)
        } else if keys & buttons::LEFT != 0 {
            Some(Self::Left)
        } else if keys & buttons::RIGHT != 0 {
            Some(Self::Right)
        } else {
            None
        }
    }
}

/// A single touch position on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// One frame's input snapshot, supplied by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Buttons that went down this frame.
    pub keys_down: u64,
    /// Buttons currently held.
    pub keys_held: u64,
    /// The active touch point, if the screen is being touched.
    pub touch: Option<TouchPoint>,
}

impl InputState {
    pub fn pressed(&self, mask: u64) -> bool {
        self.keys_down & mask != 0
    }
}

// src/screens/screen.rs
//! The screen contract and its per-frame host.

use alloc::boxed::Box;
use embedded_graphics::primitives::Rectangle;

use crate::gfx::Renderer;
use crate::ui::core::{FocusDirection, InputState, TouchPoint, buttons};
use crate::ui::elements::Element;

/// Navigation side effect requested by a screen.
pub enum NavRequest {
    /// Put a new screen on top; the current one resumes when it is popped.
    Push(Box<dyn Screen>),
    /// Destroy the current screen and show this one in its place.
    Change(Box<dyn Screen>),
    /// Drop the current screen. Popping the last screen closes the overlay.
    Pop,
    /// Ask the frame-loop driver to stop after this frame.
    Close,
}

/// Outcome of offering an input snapshot to a screen.
pub enum InputResult {
    /// The screen did not use the input; the host applies its defaults.
    NotHandled,
    /// The screen consumed the input.
    Handled,
    /// The screen consumed the input and wants a navigation change.
    Nav(NavRequest),
}

/// One navigable unit of UI.
///
/// `create_ui` runs once, lazily, on the screen's first frame; the host lays
/// the returned tree out against the logical layer and keeps it for the
/// screen's lifetime.
pub trait Screen {
    /// Build this screen's element tree.
    fn create_ui(&mut self) -> Element;

    /// Per-frame logic after input handling.
    fn update(&mut self) -> Option<NavRequest> {
        None
    }

    /// First look at the frame's input, before the default handling.
    fn handle_input(&mut self, _input: &InputState) -> InputResult {
        InputResult::NotHandled
    }
}

/// Owns a screen together with its built tree and interaction state.
pub struct ScreenHost {
    screen: Box<dyn Screen>,
    root: Option<Element>,
    last_touch: Option<TouchPoint>,
}

impl ScreenHost {
    pub fn new(screen: Box<dyn Screen>) -> Self {
        Self {
            screen,
            root: None,
            last_touch: None,
        }
    }

    /// The built element tree, if the first frame has run.
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// Build the tree if this is the screen's first frame, re-run layout if
    /// the tree invalidated itself, then run the screen's own update hook.
    pub fn update(&mut self, layer: Rectangle) -> Option<NavRequest> {
        match &mut self.root {
            None => {
                let mut root = self.screen.create_ui();
                root.layout(layer);
                root.focus_first();
                self.root = Some(root);
            }
            Some(root) if root.is_dirty() => root.layout(layer),
            Some(_) => {}
        }
        self.screen.update()
    }

    /// Route input: the screen first, then the built-in behavior (back pops,
    /// directions move focus, select activates, touch drags scroll).
    pub fn handle_input(&mut self, input: &InputState) -> Option<NavRequest> {
        match self.screen.handle_input(input) {
            InputResult::Nav(request) => return Some(request),
            InputResult::Handled => return None,
            InputResult::NotHandled => {}
        }

        let Some(root) = &mut self.root else {
            return None;
        };

        if input.pressed(buttons::BACK) {
            return Some(NavRequest::Pop);
        }

        if let Some(direction) = FocusDirection::from_keys(input.keys_down) {
            root.move_focus(direction);
            return None;
        }

        if input.pressed(buttons::SELECT) {
            root.click_focused(input.keys_down);
            return None;
        }

        match input.touch {
            Some(touch) => {
                if let Some(last) = self.last_touch {
                    let delta = last.y as i32 - touch.y as i32;
                    if delta != 0 {
                        root.scroll_content(delta);
                    }
                }
                self.last_touch = Some(touch);
            }
            None => self.last_touch = None,
        }

        None
    }

    /// Draw the tree and clear its dirty flags.
    pub fn draw(&mut self, renderer: &mut Renderer<'_>) {
        if let Some(root) = &mut self.root {
            root.frame(renderer);
            root.mark_clean();
        }
    }

    /// Focus transfer at the screen level.
    pub fn request_focus(&mut self, direction: FocusDirection) -> bool {
        match &mut self.root {
            Some(root) => root.move_focus(direction),
            None => false,
        }
    }
}

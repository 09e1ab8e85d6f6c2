// src/screens/mod.rs
//! Screens and the navigation stack.
//!
//! A [`Screen`] is one navigable unit of UI: it builds an element tree and
//! reacts to input. The [`Overlay`] owns a LIFO stack of screens and runs the
//! per-frame cycle against a host-provided surface. There is no global
//! state; the host's frame-loop driver owns the overlay value and threads
//! input and surfaces through it.

pub mod overlay;
pub mod screen;

pub use overlay::{DEFAULT_LAYER_HEIGHT, DEFAULT_LAYER_WIDTH, MAX_SCREEN_DEPTH, Overlay};
pub use screen::{InputResult, NavRequest, Screen, ScreenHost};

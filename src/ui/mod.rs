// src/ui/mod.rs
//! Retained element tree for overlay screens.
//!
//! The vocabulary is deliberately closed: a root frame, a scrolling list,
//! and a handful of leaf widgets, dispatched through the [`Element`] enum.
//! Screens build a tree once, the host lays it out against the logical layer
//! rectangle, and every frame the tree is drawn through the renderer.

pub mod components;
pub mod core;
pub mod elements;
pub mod layouts;
pub mod styling;

pub use components::{CustomDrawer, Label, ListItem};
pub use elements::Element;
pub use layouts::{List, OverlayFrame};
pub use self::core::{FocusDirection, InputState, TouchPoint, buttons};

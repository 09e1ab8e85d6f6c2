// src/ui/layouts/mod.rs
//! Composite elements that own and arrange children.

pub mod frame;
pub mod list;

pub use frame::OverlayFrame;
pub use list::List;

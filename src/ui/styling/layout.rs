// src/ui/styling/layout.rs
//! Fixed layout metrics for the overlay chrome.

/// Header text origin, relative to the frame.
pub const HEADER_TEXT_X: i32 = 20;
pub const HEADER_TITLE_Y: i32 = 50;
pub const HEADER_SUBTITLE_Y: i32 = 85;

pub const TITLE_FONT_SIZE: u32 = 32;
pub const SUBTITLE_FONT_SIZE: u32 = 15;

/// Side margin of the frame's content area.
pub const CONTENT_MARGIN_X: u32 = 20;
/// Height of the header band above the content area.
pub const CONTENT_TOP: u32 = 100;
/// Space reserved below the content area.
pub const CONTENT_BOTTOM: u32 = 50;

/// Horizontal indent applied to every list child.
pub const LIST_CHILD_INSET: i32 = 20;

pub const LIST_ITEM_DEFAULT_HEIGHT: u32 = 70;
pub const LIST_ITEM_TEXT_INSET: i32 = 20;
pub const LIST_ITEM_FONT_SIZE: u32 = 23;
pub const LIST_ITEM_VALUE_FONT_SIZE: u32 = 20;

/// How far the focus highlight extends beyond the focused element's bounds.
pub const FOCUS_HIGHLIGHT_OUTSET: i32 = 2;

// src/ui/components/label.rs
//! Static text leaf.

use alloc::string::String;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::gfx::{Color, Renderer};
use crate::ui::styling::colors;

/// Non-interactive text. Multi-line content is supported; the preferred
/// height grows by one font size per line.
pub struct Label {
    bounds: Rectangle,
    text: String,
    font_size: u32,
    color: Color,
    monospace: bool,
    dirty: bool,
}

impl Label {
    pub fn new(text: &str, font_size: u32) -> Self {
        Self {
            bounds: Rectangle::new(Point::zero(), Size::zero()),
            text: String::from(text),
            font_size,
            color: colors::TEXT,
            monospace: false,
            dirty: true,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_monospace(mut self, monospace: bool) -> Self {
        self.monospace = monospace;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text, marking the label dirty if it changed.
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.dirty = true;
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    pub fn preferred_height(&self) -> u32 {
        let lines = 1 + self.text.matches('\n').count() as u32;
        self.font_size * lines
    }

    pub fn draw(&mut self, renderer: &mut Renderer<'_>) {
        renderer.draw_string(
            &self.text,
            self.monospace,
            self.bounds.top_left.x,
            self.bounds.top_left.y,
            self.font_size,
            self.color,
        );
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_height_per_line() {
        assert_eq!(Label::new("one", 15).preferred_height(), 15);
        assert_eq!(Label::new("one\ntwo\nthree", 15).preferred_height(), 45);
        assert_eq!(Label::new("", 32).preferred_height(), 32);
    }

    #[test]
    fn test_set_text_tracks_dirtiness() {
        let mut label = Label::new("a", 15);
        label.mark_clean();

        label.set_text("a");
        assert!(!label.is_dirty(), "unchanged text must not dirty the label");

        label.set_text("b");
        assert!(label.is_dirty());
    }
}

// src/ui/components/list_item.rs
//! Selectable list row.

use alloc::boxed::Box;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::gfx::Renderer;
use crate::ui::core::buttons;
use crate::ui::styling::{colors, layout};

type ClickListener = Box<dyn FnMut(u64) -> bool>;

/// A focusable row with a label, an optional right-aligned value, and an
/// optional click listener fired when the select button activates it.
pub struct ListItem {
    bounds: Rectangle,
    text: heapless::String<64>,
    value: heapless::String<32>,
    height: u32,
    focused: bool,
    dirty: bool,
    click_listener: Option<ClickListener>,
}

impl ListItem {
    pub fn new(text: &str) -> Self {
        let mut text_string = heapless::String::new();
        text_string.push_str(text).ok();

        Self {
            bounds: Rectangle::new(Point::zero(), Size::zero()),
            text: text_string,
            value: heapless::String::new(),
            height: layout::LIST_ITEM_DEFAULT_HEIGHT,
            focused: false,
            dirty: true,
            click_listener: None,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value.push_str(value).ok();
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_click_listener(mut self, listener: impl FnMut(u64) -> bool + 'static) -> Self {
        self.click_listener = Some(Box::new(listener));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the right-aligned value text.
    pub fn set_value(&mut self, value: &str) {
        if self.value.as_str() != value {
            self.value.clear();
            self.value.push_str(value).ok();
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
        self.height
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.dirty = true;
        }
    }

    /// Fire the click listener when the select button is in `keys`.
    /// Returns whether the activation was consumed.
    pub fn click(&mut self, keys: u64) -> bool {
        if keys & buttons::SELECT == 0 {
            return false;
        }
        match &mut self.click_listener {
            Some(listener) => listener(keys),
            None => false,
        }
    }

    pub fn draw(&mut self, renderer: &mut Renderer<'_>) {
        let x = self.bounds.top_left.x;
        let y = self.bounds.top_left.y;
        let w = self.bounds.size.width as i32;
        let h = self.bounds.size.height as i32;

        // hairline separators
        renderer.draw_rect(x, y, w, 1, colors::FRAME);
        renderer.draw_rect(x, y + h - 1, w, 1, colors::FRAME);

        let text_y = y + (h - layout::LIST_ITEM_FONT_SIZE as i32) / 2;
        renderer.draw_string(
            &self.text,
            false,
            x + layout::LIST_ITEM_TEXT_INSET,
            text_y,
            layout::LIST_ITEM_FONT_SIZE,
            colors::TEXT,
        );

        if !self.value.is_empty() {
            let (value_width, _) =
                renderer.text_dimensions(&self.value, false, layout::LIST_ITEM_VALUE_FONT_SIZE);
            let value_y = y + (h - layout::LIST_ITEM_VALUE_FONT_SIZE as i32) / 2;
            renderer.draw_string(
                &self.value,
                false,
                x + w - layout::LIST_ITEM_TEXT_INSET - value_width as i32,
                value_y,
                layout::LIST_ITEM_VALUE_FONT_SIZE,
                colors::DESCRIPTION,
            );
        }
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
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn test_click_requires_select_button() {
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);
        let mut item = ListItem::new("entry").with_click_listener(move |_| {
            counter.set(counter.get() + 1);
            true
        });

        assert!(!item.click(buttons::BACK));
        assert_eq!(fired.get(), 0);

        assert!(item.click(buttons::SELECT));
        assert!(item.click(buttons::SELECT | buttons::DOWN));
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_click_without_listener_is_not_consumed() {
        let mut item = ListItem::new("entry");
        assert!(!item.click(buttons::SELECT));
    }

    #[test]
    fn test_set_value_tracks_dirtiness() {
        let mut item = ListItem::new("entry").with_value("on");
        item.mark_clean();

        item.set_value("on");
        assert!(!item.is_dirty());

        item.set_value("off");
        assert!(item.is_dirty());
        assert_eq!(item.value(), "off");
    }
}

// src/ui/layouts/frame.rs
//! Root decorator: translucent backdrop, header text, one content child.

use alloc::boxed::Box;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::gfx::Renderer;
use crate::ui::core::FocusDirection;
use crate::ui::elements::Element;
use crate::ui::styling::{colors, layout};

/// The outermost element of a screen. Paints the overlay background across
/// the whole surface, the title and subtitle in the header band, and insets
/// its single content child below them.
pub struct OverlayFrame {
    bounds: Rectangle,
    title: heapless::String<64>,
    subtitle: heapless::String<64>,
    content: Option<Box<Element>>,
    dirty: bool,
}

impl OverlayFrame {
    pub fn new(title: &str, subtitle: &str) -> Self {
        let mut title_string = heapless::String::new();
        title_string.push_str(title).ok();
        let mut subtitle_string = heapless::String::new();
        subtitle_string.push_str(subtitle).ok();

        Self {
            bounds: Rectangle::new(Point::zero(), Size::zero()),
            title: title_string,
            subtitle: subtitle_string,
            content: None,
            dirty: true,
        }
    }

    /// Install the content element, replacing (and dropping) any previous one.
    pub fn set_content(&mut self, content: Element) {
        self.content = Some(Box::new(content));
        self.dirty = true;
    }

    pub fn content(&self) -> Option<&Element> {
        self.content.as_deref()
    }

    pub fn content_mut(&mut self) -> Option<&mut Element> {
        self.content.as_deref_mut()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn layout(&mut self, area: Rectangle) {
        self.bounds = area;
        if let Some(content) = &mut self.content {
            content.layout(Rectangle::new(
                Point::new(
                    area.top_left.x + layout::CONTENT_MARGIN_X as i32,
                    area.top_left.y + layout::CONTENT_TOP as i32,
                ),
                Size::new(
                    area.size.width.saturating_sub(2 * layout::CONTENT_MARGIN_X),
                    area.size
                        .height
                        .saturating_sub(layout::CONTENT_TOP + layout::CONTENT_BOTTOM),
                ),
            ));
        }
    }

    pub fn draw(&mut self, renderer: &mut Renderer<'_>) {
        // backdrop over the whole surface, not just the frame bounds
        renderer.draw_rect(
            0,
            0,
            renderer.width() as i32,
            renderer.height() as i32,
            colors::FRAME_BACKGROUND,
        );

        let x = self.bounds.top_left.x + layout::HEADER_TEXT_X;
        renderer.draw_string(
            &self.title,
            false,
            x,
            self.bounds.top_left.y + layout::HEADER_TITLE_Y,
            layout::TITLE_FONT_SIZE,
            colors::TEXT,
        );
        renderer.draw_string(
            &self.subtitle,
            false,
            x,
            self.bounds.top_left.y + layout::HEADER_SUBTITLE_Y,
            layout::SUBTITLE_FONT_SIZE,
            colors::DESCRIPTION,
        );

        if let Some(content) = &mut self.content {
            content.frame(renderer);
        }
    }

    pub fn can_focus(&self) -> bool {
        self.content.as_deref().is_some_and(Element::can_focus)
    }

    pub fn focus_first(&mut self) -> bool {
        match &mut self.content {
            Some(content) => content.focus_first(),
            None => false,
        }
    }

    pub fn move_focus(&mut self, direction: FocusDirection) -> bool {
        match &mut self.content {
            Some(content) => content.move_focus(direction),
            None => false,
        }
    }

    pub fn clear_focus(&mut self) {
        if let Some(content) = &mut self.content {
            content.clear_focus();
        }
    }

    pub fn click_focused(&mut self, keys: u64) -> bool {
        match &mut self.content {
            Some(content) => content.click_focused(keys),
            None => false,
        }
    }

    pub fn scroll_content(&mut self, delta: i32) {
        if let Some(content) = &mut self.content {
            content.scroll_content(delta);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty || self.content.as_deref().is_some_and(Element::is_dirty)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
        if let Some(content) = &mut self.content {
            content.mark_clean();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layouts::List;

    #[test]
    fn test_content_is_inset_from_frame_bounds() {
        let mut frame = OverlayFrame::new("Title", "Sub");
        frame.set_content(Element::List(List::new()));
        frame.layout(Rectangle::new(Point::zero(), Size::new(1280, 720)));

        let content = frame.content().unwrap().bounds();
        assert_eq!(content.top_left, Point::new(20, 100));
        assert_eq!(content.size, Size::new(1240, 570));
    }

    #[test]
    fn test_tiny_frame_does_not_underflow() {
        let mut frame = OverlayFrame::new("T", "S");
        frame.set_content(Element::List(List::new()));
        frame.layout(Rectangle::new(Point::zero(), Size::new(30, 120)));

        let content = frame.content().unwrap().bounds();
        assert_eq!(content.size, Size::new(0, 0));
    }

    #[test]
    fn test_frame_without_content_takes_no_focus() {
        let mut frame = OverlayFrame::new("T", "S");
        assert!(!frame.can_focus());
        assert!(!frame.focus_first());
    }
}

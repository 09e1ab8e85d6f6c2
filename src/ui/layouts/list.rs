// src/ui/layouts/list.rs
//! Vertical list with scrolling and single-axis focus navigation.

use alloc::vec::Vec;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::gfx::Renderer;
use crate::ui::core::FocusDirection;
use crate::ui::elements::Element;
use crate::ui::styling::layout;

/// Stacks its children top to bottom in insertion order, shifted up by the
/// scroll offset. Children are exclusively owned; dropping the list drops
/// them all.
pub struct List {
    bounds: Rectangle,
    children: Vec<Element>,
    /// Pixels of content scrolled past the top. Negative values shift the
    /// content downward instead.
    scroll_offset: i32,
    dirty: bool,
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl List {
    pub fn new() -> Self {
        Self {
            bounds: Rectangle::new(Point::zero(), Size::zero()),
            children: Vec::new(),
            scroll_offset: 0,
            dirty: true,
        }
    }

    /// Append a child at the bottom of the list.
    pub fn add_item(&mut self, item: Element) {
        self.children.push(item);
        self.dirty = true;
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Set the scroll offset directly. No clamping is applied here; callers
    /// that scroll interactively go through [`scroll_by`](Self::scroll_by).
    pub fn set_scroll_offset(&mut self, offset: i32) {
        if self.scroll_offset != offset {
            self.scroll_offset = offset;
            self.dirty = true;
        }
    }

    /// Scroll by a delta, clamped so the viewport stays inside the content.
    pub fn scroll_by(&mut self, delta: i32) {
        let max_scroll =
            (self.content_height() as i32 - self.bounds.size.height as i32).max(0);
        let clamped = (self.scroll_offset + delta).clamp(0, max_scroll);
        self.set_scroll_offset(clamped);
    }

    /// Total height of all children, independent of the viewport.
    pub fn content_height(&self) -> u32 {
        self.children.iter().map(Element::preferred_height).sum()
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn layout(&mut self, area: Rectangle) {
        self.bounds = area;
        let mut y = area.top_left.y - self.scroll_offset;
        for child in &mut self.children {
            let height = child.preferred_height();
            child.layout(Rectangle::new(
                Point::new(area.top_left.x + layout::LIST_CHILD_INSET, y),
                Size::new(area.size.width, height),
            ));
            y += height as i32;
        }
    }

    pub fn draw(&mut self, renderer: &mut Renderer<'_>) {
        for child in &mut self.children {
            child.frame(renderer);
        }
    }

    pub fn can_focus(&self) -> bool {
        self.children.iter().any(Element::can_focus)
    }

    /// Focus the first focusable child, clearing any previous holder.
    pub fn focus_first(&mut self) -> bool {
        self.clear_focus();
        for child in &mut self.children {
            if child.focus_first() {
                return true;
            }
        }
        false
    }

    /// Move focus one focusable child up or down. Focus stays put when the
    /// edge of the list is reached or the direction is horizontal.
    pub fn move_focus(&mut self, direction: FocusDirection) -> bool {
        let Some(current) = self.children.iter().position(Element::is_focused) else {
            return self.focus_first();
        };

        let next = match direction {
            FocusDirection::None => Some(current),
            FocusDirection::Up => self.children[..current]
                .iter()
                .rposition(Element::can_focus),
            FocusDirection::Down => self.children[current + 1..]
                .iter()
                .position(Element::can_focus)
                .map(|i| current + 1 + i),
            FocusDirection::Left | FocusDirection::Right => None,
        };

        let Some(next) = next else {
            return false;
        };
        if next != current {
            self.children[current].clear_focus();
            self.children[next].focus_first();
            self.scroll_to_child(next);
        }
        true
    }

    pub fn clear_focus(&mut self) {
        for child in &mut self.children {
            child.clear_focus();
        }
    }

    pub fn click_focused(&mut self, keys: u64) -> bool {
        for child in &mut self.children {
            if child.click_focused(keys) {
                return true;
            }
        }
        false
    }

    /// Adjust the scroll offset just enough to bring the child into view.
    fn scroll_to_child(&mut self, index: usize) {
        let top: u32 = self.children[..index]
            .iter()
            .map(Element::preferred_height)
            .sum();
        let top = top as i32;
        let bottom = top + self.children[index].preferred_height() as i32;
        let viewport = self.bounds.size.height as i32;

        let mut offset = self.scroll_offset;
        if bottom - offset > viewport {
            offset = bottom - viewport;
        }
        if top - offset < 0 {
            offset = top;
        }
        self.set_scroll_offset(offset);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty || self.children.iter().any(Element::is_dirty)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
        for child in &mut self.children {
            child.mark_clean();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::{Label, ListItem};

    fn item(height: u32) -> Element {
        Element::Item(ListItem::new("item").with_height(height))
    }

    fn list_area(height: u32) -> Rectangle {
        Rectangle::new(Point::new(20, 100), Size::new(1240, height))
    }

    #[test]
    fn test_children_stack_vertically() {
        let mut list = List::new();
        list.add_item(item(70));
        list.add_item(item(40));
        list.add_item(item(70));
        list.layout(list_area(570));

        let ys: Vec<i32> = list
            .children()
            .iter()
            .map(|c| c.bounds().top_left.y)
            .collect();
        assert_eq!(ys, [100, 170, 210]);

        for child in list.children() {
            assert_eq!(child.bounds().top_left.x, 40, "children are indented");
            assert_eq!(child.bounds().size.width, 1240, "children take the list width");
        }
    }

    #[test]
    fn test_scroll_offset_shifts_children() {
        let mut list = List::new();
        list.add_item(item(70));
        list.add_item(item(70));

        list.set_scroll_offset(30);
        list.layout(list_area(570));
        assert_eq!(list.children()[0].bounds().top_left.y, 70);
        assert_eq!(list.children()[1].bounds().top_left.y, 140);

        list.set_scroll_offset(-25);
        list.layout(list_area(570));
        assert_eq!(list.children()[0].bounds().top_left.y, 125);
    }

    #[test]
    fn test_interactive_scroll_clamps_to_content() {
        let mut list = List::new();
        for _ in 0..4 {
            list.add_item(item(70));
        }
        list.layout(list_area(100));

        list.scroll_by(-50);
        assert_eq!(list.scroll_offset(), 0, "cannot scroll above the content");

        list.scroll_by(10_000);
        assert_eq!(list.scroll_offset(), 280 - 100, "cannot scroll past the end");
    }

    #[test]
    fn test_focus_moves_over_selectable_children_only() {
        let mut list = List::new();
        list.add_item(Element::Label(Label::new("header", 15)));
        list.add_item(item(70));
        list.add_item(Element::Label(Label::new("spacer", 15)));
        list.add_item(item(70));
        list.layout(list_area(570));

        assert!(list.focus_first());
        assert!(list.children()[1].is_focused());

        assert!(list.move_focus(FocusDirection::Down));
        assert!(!list.children()[1].is_focused());
        assert!(list.children()[3].is_focused());

        // already at the bottom edge
        assert!(!list.move_focus(FocusDirection::Down));
        assert!(list.children()[3].is_focused());

        assert!(list.move_focus(FocusDirection::Up));
        assert!(list.children()[1].is_focused());
    }

    #[test]
    fn test_focus_move_keeps_child_visible() {
        let mut list = List::new();
        for _ in 0..5 {
            list.add_item(item(70));
        }
        list.layout(list_area(140));

        list.focus_first();
        assert_eq!(list.scroll_offset(), 0);

        list.move_focus(FocusDirection::Down);
        list.move_focus(FocusDirection::Down);
        // third child spans 140..210 in content space; viewport is 140 tall
        assert_eq!(list.scroll_offset(), 70);
    }

    #[test]
    fn test_empty_list_takes_no_focus() {
        let mut list = List::new();
        assert!(!list.can_focus());
        assert!(!list.focus_first());
        assert!(!list.move_focus(FocusDirection::Down));
    }
}

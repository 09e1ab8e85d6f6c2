// src/ui/elements.rs
//! Concrete UI element enum.
//!
//! Screens own heterogeneous trees of widgets. The vocabulary is small and
//! fixed, so instead of trait objects the tree is a closed enum dispatching
//! by match: a root frame, a list, and the leaf widgets. Ownership runs
//! strictly downward; there are no back references.

use embedded_graphics::primitives::Rectangle;

use crate::gfx::Renderer;
use crate::ui::components::{CustomDrawer, Label, ListItem};
use crate::ui::core::FocusDirection;
use crate::ui::layouts::{List, OverlayFrame};
use crate::ui::styling::{colors, layout};

/// One node of a screen's element tree.
pub enum Element {
    Frame(OverlayFrame),
    List(List),
    Label(Label),
    Item(ListItem),
    Custom(CustomDrawer),
}

impl Element {
    /// Convenience constructor: static text leaf.
    pub fn label(text: &str, font_size: u32) -> Self {
        Self::Label(Label::new(text, font_size))
    }

    /// Convenience constructor: selectable list row.
    pub fn item(text: &str) -> Self {
        Self::Item(ListItem::new(text))
    }

    pub fn bounds(&self) -> Rectangle {
        match self {
            Element::Frame(frame) => frame.bounds(),
            Element::List(list) => list.bounds(),
            Element::Label(label) => label.bounds(),
            Element::Item(item) => item.bounds(),
            Element::Custom(custom) => custom.bounds(),
        }
    }

    /// Height this element asks for when a list sizes it.
    pub fn preferred_height(&self) -> u32 {
        match self {
            Element::Frame(frame) => frame.bounds().size.height,
            Element::List(list) => list.bounds().size.height,
            Element::Label(label) => label.preferred_height(),
            Element::Item(item) => item.preferred_height(),
            Element::Custom(custom) => custom.preferred_height(),
        }
    }

    /// Assign bounds. Leaves occupy exactly the given rectangle; composites
    /// recursively place their children inside it.
    pub fn layout(&mut self, area: Rectangle) {
        match self {
            Element::Frame(frame) => frame.layout(area),
            Element::List(list) => list.layout(area),
            Element::Label(label) => label.set_bounds(area),
            Element::Item(item) => item.set_bounds(area),
            Element::Custom(custom) => custom.set_bounds(area),
        }
    }

    /// Paint this node's own visuals (composites recurse into children).
    pub fn draw(&mut self, renderer: &mut Renderer<'_>) {
        match self {
            Element::Frame(frame) => frame.draw(renderer),
            Element::List(list) => list.draw(renderer),
            Element::Label(label) => label.draw(renderer),
            Element::Item(item) => item.draw(renderer),
            Element::Custom(custom) => custom.draw(renderer),
        }
    }

    /// Per-frame draw entry point: paints the focus highlight behind a
    /// focused selectable element, then draws it.
    pub fn frame(&mut self, renderer: &mut Renderer<'_>) {
        if self.is_focused() && self.is_selectable() {
            let b = self.bounds();
            let outset = layout::FOCUS_HIGHLIGHT_OUTSET;
            renderer.draw_rect(
                b.top_left.x - outset,
                b.top_left.y - outset,
                b.size.width as i32 + 2 * outset,
                b.size.height as i32 + 2 * outset,
                colors::HIGHLIGHT,
            );
        }
        self.draw(renderer);
    }

    /// Whether this element itself can hold focus.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Element::Item(_))
    }

    /// Whether this element or any descendant can hold focus.
    pub fn can_focus(&self) -> bool {
        match self {
            Element::Frame(frame) => frame.can_focus(),
            Element::List(list) => list.can_focus(),
            Element::Item(_) => true,
            Element::Label(_) | Element::Custom(_) => false,
        }
    }

    pub fn is_focused(&self) -> bool {
        match self {
            Element::Frame(frame) => frame
                .content()
                .is_some_and(Element::is_focused),
            Element::List(list) => list.children().iter().any(Element::is_focused),
            Element::Item(item) => item.is_focused(),
            Element::Label(_) | Element::Custom(_) => false,
        }
    }

    /// Give focus to the first focusable element in this subtree.
    pub fn focus_first(&mut self) -> bool {
        match self {
            Element::Frame(frame) => frame.focus_first(),
            Element::List(list) => list.focus_first(),
            Element::Item(item) => {
                item.set_focused(true);
                true
            }
            Element::Label(_) | Element::Custom(_) => false,
        }
    }

    /// Move focus in `direction`, or establish it if nothing is focused yet.
    /// Returns whether focus is held somewhere in this subtree afterwards.
    pub fn move_focus(&mut self, direction: FocusDirection) -> bool {
        match self {
            Element::Frame(frame) => frame.move_focus(direction),
            Element::List(list) => list.move_focus(direction),
            Element::Item(item) => {
                // a lone leaf keeps focus regardless of direction
                item.set_focused(true);
                true
            }
            Element::Label(_) | Element::Custom(_) => false,
        }
    }

    pub fn clear_focus(&mut self) {
        match self {
            Element::Frame(frame) => frame.clear_focus(),
            Element::List(list) => list.clear_focus(),
            Element::Item(item) => item.set_focused(false),
            Element::Label(_) | Element::Custom(_) => {}
        }
    }

    /// Route an activation to whichever descendant holds focus.
    pub fn click_focused(&mut self, keys: u64) -> bool {
        match self {
            Element::Frame(frame) => frame.click_focused(keys),
            Element::List(list) => list.click_focused(keys),
            Element::Item(item) if item.is_focused() => item.click(keys),
            _ => false,
        }
    }

    /// Activation directly on this element. Only selectable leaves consume.
    pub fn on_click(&mut self, keys: u64) -> bool {
        match self {
            Element::Item(item) => item.click(keys),
            _ => false,
        }
    }

    /// Route an interactive scroll to the content list, if any.
    pub fn scroll_content(&mut self, delta: i32) {
        match self {
            Element::Frame(frame) => frame.scroll_content(delta),
            Element::List(list) => list.scroll_by(delta),
            _ => {}
        }
    }

    pub fn is_dirty(&self) -> bool {
        match self {
            Element::Frame(frame) => frame.is_dirty(),
            Element::List(list) => list.is_dirty(),
            Element::Label(label) => label.is_dirty(),
            Element::Item(item) => item.is_dirty(),
            Element::Custom(_) => false,
        }
    }

    /// Flag this subtree as needing layout and redraw.
    pub fn mark_dirty(&mut self) {
        match self {
            Element::Frame(frame) => frame.mark_dirty(),
            Element::List(list) => list.mark_dirty(),
            Element::Label(label) => label.mark_dirty(),
            Element::Item(item) => item.mark_dirty(),
            Element::Custom(_) => {}
        }
    }

    pub fn mark_clean(&mut self) {
        match self {
            Element::Frame(frame) => frame.mark_clean(),
            Element::List(list) => list.mark_clean(),
            Element::Label(label) => label.mark_clean(),
            Element::Item(item) => item.mark_clean(),
            Element::Custom(_) => {}
        }
    }
}

impl From<OverlayFrame> for Element {
    fn from(frame: OverlayFrame) -> Self {
        Self::Frame(frame)
    }
}

impl From<List> for Element {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Label> for Element {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

impl From<ListItem> for Element {
    fn from(item: ListItem) -> Self {
        Self::Item(item)
    }
}

impl From<CustomDrawer> for Element {
    fn from(custom: CustomDrawer) -> Self {
        Self::Custom(custom)
    }
}

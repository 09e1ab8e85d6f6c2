// src/ui/components/custom.rs
//! Free-form drawing leaf.

use alloc::boxed::Box;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::gfx::Renderer;

type DrawFn = Box<dyn FnMut(&mut Renderer<'_>, Rectangle)>;

/// A leaf that delegates its drawing to a closure. Useful for one-off
/// visuals that do not warrant a dedicated widget; never focusable.
pub struct CustomDrawer {
    bounds: Rectangle,
    height: u32,
    draw_fn: DrawFn,
}

impl CustomDrawer {
    pub fn new(height: u32, draw_fn: impl FnMut(&mut Renderer<'_>, Rectangle) + 'static) -> Self {
        Self {
            bounds: Rectangle::new(Point::zero(), Size::zero()),
            height,
            draw_fn: Box::new(draw_fn),
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

    pub fn draw(&mut self, renderer: &mut Renderer<'_>) {
        (self.draw_fn)(renderer, self.bounds);
    }
}

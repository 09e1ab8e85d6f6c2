// src/screens/overlay.rs
//! Navigation stack and per-frame cycle.

use alloc::boxed::Box;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, error, info, warn};

use crate::gfx::{GlyphCache, Renderer, Surface};
use crate::screens::screen::{NavRequest, Screen, ScreenHost};
use crate::ui::core::InputState;
use crate::ui::styling::colors;

/// Logical UI layer dimensions used when the host has no opinion.
pub const DEFAULT_LAYER_WIDTH: u32 = 1280;
pub const DEFAULT_LAYER_HEIGHT: u32 = 720;

/// Deepest supported navigation history.
pub const MAX_SCREEN_DEPTH: usize = 8;

type ScreenFactory = Box<dyn FnOnce() -> Option<Box<dyn Screen>>>;

/// Owns the screen stack, the glyph cache, and the frame cycle.
///
/// The overlay is a plain value: the host's frame-loop driver constructs it,
/// feeds it one [`InputState`] and one [`Surface`] per frame, and watches
/// [`should_close`](Self::should_close) between frames.
pub struct Overlay {
    stack: heapless::Vec<ScreenHost, MAX_SCREEN_DEPTH>,
    glyphs: GlyphCache,
    layer: Rectangle,
    initial: Option<ScreenFactory>,
    should_close: bool,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new(DEFAULT_LAYER_WIDTH, DEFAULT_LAYER_HEIGHT)
    }
}

impl Overlay {
    pub fn new(layer_width: u32, layer_height: u32) -> Self {
        Self {
            stack: heapless::Vec::new(),
            glyphs: GlyphCache::new(),
            layer: Rectangle::new(Point::zero(), Size::new(layer_width, layer_height)),
            initial: None,
            should_close: false,
        }
    }

    /// Install the factory that supplies the first screen once the frame
    /// loop starts. If it yields no screen, the overlay idles forever.
    pub fn with_initial_screen(
        mut self,
        factory: impl FnOnce() -> Option<Box<dyn Screen>> + 'static,
    ) -> Self {
        self.initial = Some(Box::new(factory));
        self
    }

    /// Hand over the font face bytes. Failure is logged and tolerated: text
    /// simply stays invisible.
    pub fn load_font(&mut self, data: &[u8]) {
        match self.glyphs.load(data) {
            Ok(()) => info!("font face loaded ({} bytes)", data.len()),
            Err(err) => warn!("font unavailable, text rendering disabled: {err}"),
        }
    }

    pub fn font_ready(&self) -> bool {
        self.glyphs.is_initialized()
    }

    /// Number of screens on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current_screen(&self) -> Option<&ScreenHost> {
        self.stack.last()
    }

    /// Put a new screen on top. The previous top stays beneath it and
    /// resumes when this one is popped.
    pub fn push_screen(&mut self, screen: Box<dyn Screen>) {
        debug!("push screen (depth {})", self.stack.len());
        if self.stack.push(ScreenHost::new(screen)).is_err() {
            error!("screen stack full ({MAX_SCREEN_DEPTH} deep), dropping pushed screen");
        }
    }

    /// Destroy the current top screen and show the given one in its place.
    pub fn change_screen(&mut self, screen: Box<dyn Screen>) {
        debug!("replace top screen");
        self.stack.pop();
        if self.stack.push(ScreenHost::new(screen)).is_err() {
            error!("screen stack full ({MAX_SCREEN_DEPTH} deep), dropping replacement screen");
        }
    }

    /// Drop the top screen, resuming the one beneath. Popping the last
    /// screen closes the overlay.
    pub fn pop_screen(&mut self) {
        if self.stack.pop().is_some() {
            debug!("pop screen (depth {})", self.stack.len());
        }
        if self.stack.is_empty() {
            self.close();
        }
    }

    /// Flag the overlay for termination. The external driver observes this
    /// at the top of its next loop iteration, never mid-frame.
    pub fn close(&mut self) {
        debug!("close requested");
        self.should_close = true;
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Run one frame: ensure a screen exists, route input, update the top
    /// screen, then clear, draw, and present the surface.
    ///
    /// With an empty stack and no initial screen left to create, the frame
    /// performs no work at all.
    pub fn frame<S: Surface>(&mut self, input: &InputState, surface: &mut S) {
        if self.stack.is_empty() {
            let Some(factory) = self.initial.take() else {
                return;
            };
            match factory() {
                Some(screen) => self.push_screen(screen),
                None => {
                    debug!("no initial screen supplied");
                    return;
                }
            }
        }

        if let Some(top) = self.stack.last_mut()
            && let Some(request) = top.handle_input(input)
        {
            self.apply(request);
        }

        let layer = self.layer;
        if let Some(top) = self.stack.last_mut()
            && let Some(request) = top.update(layer)
        {
            self.apply(request);
        }

        let (width, height) = surface.dimensions();
        let Self { stack, glyphs, .. } = self;
        let Some(top) = stack.last_mut() else {
            return;
        };

        let frame = surface.frame_mut();
        let mut renderer = Renderer::new(frame, width, height, glyphs);
        renderer.draw_rect(0, 0, width as i32, height as i32, colors::FRAME_BACKGROUND);
        top.draw(&mut renderer);

        surface.present();
    }

    fn apply(&mut self, request: NavRequest) {
        match request {
            NavRequest::Push(screen) => self.push_screen(screen),
            NavRequest::Change(screen) => self.change_screen(screen),
            NavRequest::Pop => self.pop_screen(),
            NavRequest::Close => self.close(),
        }
    }
}

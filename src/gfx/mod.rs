// src/gfx/mod.rs
//! Software rendering layer: packed 16-bit color, glyph rasterization with
//! caching, and the per-frame pixel renderer.

pub mod color;
pub mod font;
pub mod renderer;
pub mod surface;

pub use color::Color;
pub use font::{FontError, Glyph, GlyphCache};
pub use renderer::Renderer;
pub use surface::{MemorySurface, Surface};

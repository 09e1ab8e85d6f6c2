// src/gfx/renderer.rs
//! Pixel drawing primitives over one frame's surface.
//!
//! A renderer is constructed fresh each frame around the writable pixel
//! slice handed over by the host, and dropped before the surface is
//! presented. Every primitive clips to the surface bounds; drawing outside
//! them is a no-op, never an out-of-range write.

use core::convert::Infallible;

use embedded_graphics::prelude::*;

use crate::gfx::color::Color;
use crate::gfx::font::GlyphCache;

pub struct Renderer<'a> {
    frame: &'a mut [Color],
    width: u32,
    height: u32,
    glyphs: &'a mut GlyphCache,
}

impl<'a> Renderer<'a> {
    /// Bind to a frame's pixel slice. `frame` holds `width * height` pixels
    /// in row-major order; a shorter slice simply clips the drawable area.
    pub fn new(frame: &'a mut [Color], width: u32, height: u32, glyphs: &'a mut GlyphCache) -> Self {
        Self {
            frame,
            width,
            height,
            glyphs,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Overwrite one pixel, ignoring writes outside the surface.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        if let Some(pixel) = self.frame.get_mut(idx) {
            *pixel = color;
        }
    }

    /// Blend one pixel over the destination.
    ///
    /// Fully transparent sources leave the destination untouched. The rgb
    /// channels blend as `(dst * (15 - a) + src * a) >> 4`; the destination
    /// alpha is kept as-is, since the surface's alpha plane encodes overlay
    /// visibility to the host compositor rather than drawn translucency.
    pub fn set_pixel_blend(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let a = color.a();
        if a == 0 {
            return;
        }

        let idx = y as usize * self.width as usize + x as usize;
        let Some(pixel) = self.frame.get_mut(idx) else {
            return;
        };
        let dst = *pixel;
        let inv = (15 - a) as u16;
        let a = a as u16;
        *pixel = Color::new(
            ((dst.r() as u16 * inv + color.r() as u16 * a) >> 4) as u8,
            ((dst.g() as u16 * inv + color.g() as u16 * a) >> 4) as u8,
            ((dst.b() as u16 * inv + color.b() as u16 * a) >> 4) as u8,
            dst.a(),
        );
    }

    /// Blend a filled rectangle, clipped to the surface.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x_start = x.max(0);
        let y_start = y.max(0);
        let x_end = (x + w).min(self.width as i32);
        let y_end = (y + h).min(self.height as i32);

        for yi in y_start..y_end {
            for xi in x_start..x_end {
                self.set_pixel_blend(xi, yi, color);
            }
        }
    }

    /// Corner rounding is not implemented; drawn as a plain filled rect.
    pub fn draw_rounded_rect(&mut self, x: i32, y: i32, w: i32, h: i32, _radius: f32, color: Color) {
        self.draw_rect(x, y, w, h, color);
    }

    /// Border-only stroking is not implemented; drawn as a plain filled rect.
    pub fn draw_bordered_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        _radius: f32,
        _border_width: f32,
        color: Color,
    ) {
        self.draw_rect(x, y, w, h, color);
    }

    /// Draw text left-to-right from `(x, y)`, one glyph per code point.
    ///
    /// `'\n'` returns the cursor to `x` and moves down by exactly the font
    /// size. Glyphs anchor their baseline `font_size` pixels below `y`.
    /// Coverage is reduced to 4 bits and scaled into the draw alpha, and the
    /// fractional advance is truncated to whole pixels per glyph.
    pub fn draw_string(
        &mut self,
        text: &str,
        monospace: bool,
        x: i32,
        y: i32,
        font_size: u32,
        color: Color,
    ) {
        let mut curr_x = x;
        let mut curr_y = y;

        for cp in text.chars() {
            if cp == '\n' {
                curr_x = x;
                curr_y += font_size as i32;
                continue;
            }

            let glyph = self.glyphs.get_or_create(cp, monospace, font_size);
            if let Some(bitmap) = glyph.bitmap.as_deref() {
                for gy in 0..glyph.height {
                    for gx in 0..glyph.width {
                        let coverage = bitmap[(gy * glyph.width + gx) as usize];
                        if coverage == 0 {
                            continue;
                        }
                        let alpha = (color.a() as u16 * (coverage >> 4) as u16) >> 4;
                        self.set_pixel_blend(
                            curr_x + gx as i32 + glyph.x_offset,
                            curr_y + gy as i32 + glyph.y_offset + font_size as i32,
                            color.with_alpha(alpha as u8),
                        );
                    }
                }
            }
            curr_x += glyph.advance as i32;
        }
    }

    /// Measure `text` without drawing, using the same line-break and advance
    /// walk as [`draw_string`](Self::draw_string). Returns the widest line
    /// and the total height (`font_size` per line).
    pub fn text_dimensions(&mut self, text: &str, monospace: bool, font_size: u32) -> (u32, u32) {
        let mut width = 0u32;
        let mut max_width = 0u32;
        let mut height = font_size;

        for cp in text.chars() {
            if cp == '\n' {
                max_width = max_width.max(width);
                width = 0;
                height += font_size;
                continue;
            }
            let glyph = self.glyphs.get_or_create(cp, monospace, font_size);
            width += glyph.advance as u32;
        }

        (max_width.max(width), height)
    }
}

impl OriginDimensions for Renderer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Renderer<'_> {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    fn surface(w: u32, h: u32) -> Vec<Color> {
        vec![Color::from_raw(0); (w * h) as usize]
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut glyphs = GlyphCache::new();
        let mut frame = surface(4, 4);
        let before = frame.clone();

        let mut r = Renderer::new(&mut frame, 4, 4, &mut glyphs);
        let c = Color::new(0xF, 0xF, 0xF, 0xF);
        r.set_pixel(-1, 0, c);
        r.set_pixel(0, -1, c);
        r.set_pixel(4, 0, c);
        r.set_pixel(0, 4, c);
        r.set_pixel_blend(-3, 2, c);
        r.set_pixel_blend(2, 100, c);

        assert_eq!(frame, before, "no pixel outside the surface may change");
    }

    #[test]
    fn test_zero_alpha_blend_is_a_noop() {
        let mut glyphs = GlyphCache::new();
        let mut frame = surface(2, 2);
        frame[0] = Color::new(0x1, 0x2, 0x3, 0x4);
        let before = frame.clone();

        let mut r = Renderer::new(&mut frame, 2, 2, &mut glyphs);
        r.set_pixel_blend(0, 0, Color::new(0xF, 0xF, 0xF, 0x0));

        assert_eq!(frame, before);
    }

    #[test]
    fn test_opaque_blend_ignores_destination_rgb() {
        let mut glyphs = GlyphCache::new();
        let mut frame = surface(2, 1);
        frame[0] = Color::new(0x1, 0x2, 0x3, 0x9);
        frame[1] = Color::new(0xC, 0xD, 0xE, 0x9);

        let src = Color::new(0x8, 0x4, 0xF, 0xF);
        let mut r = Renderer::new(&mut frame, 2, 1, &mut glyphs);
        r.set_pixel_blend(0, 0, src);
        r.set_pixel_blend(1, 0, src);

        // rgb = (src * 15) >> 4 regardless of what was underneath
        let expect = |c: u8| ((c as u16 * 15) >> 4) as u8;
        for px in &frame {
            assert_eq!(px.r(), expect(src.r()));
            assert_eq!(px.g(), expect(src.g()));
            assert_eq!(px.b(), expect(src.b()));
            assert_eq!(px.a(), 0x9, "destination alpha must be preserved");
        }
    }

    #[test]
    fn test_blend_formula() {
        let mut glyphs = GlyphCache::new();
        let mut frame = surface(1, 1);
        frame[0] = Color::new(0x8, 0x0, 0xF, 0x3);

        let mut r = Renderer::new(&mut frame, 1, 1, &mut glyphs);
        r.set_pixel_blend(0, 0, Color::new(0x0, 0xF, 0x7, 0x8));

        // (dst * 7 + src * 8) >> 4 per channel
        assert_eq!(frame[0].r(), (0x8 * 7 + 0x0 * 8) >> 4);
        assert_eq!(frame[0].g(), (0x0 * 7 + 0xF * 8) >> 4);
        assert_eq!(frame[0].b(), (0xF * 7 + 0x7 * 8) >> 4);
        assert_eq!(frame[0].a(), 0x3);
    }

    #[test]
    fn test_draw_rect_clips_to_surface() {
        let mut glyphs = GlyphCache::new();
        let mut frame = surface(4, 4);

        let mut r = Renderer::new(&mut frame, 4, 4, &mut glyphs);
        r.draw_rect(2, 2, 10, 10, Color::new(0xF, 0xF, 0xF, 0xF));

        for y in 0..4u32 {
            for x in 0..4u32 {
                let touched = frame[(y * 4 + x) as usize] != Color::from_raw(0);
                assert_eq!(touched, x >= 2 && y >= 2, "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn test_negative_size_rect_draws_nothing() {
        let mut glyphs = GlyphCache::new();
        let mut frame = surface(4, 4);
        let before = frame.clone();

        let mut r = Renderer::new(&mut frame, 4, 4, &mut glyphs);
        r.draw_rect(1, 1, -2, 5, Color::new(0xF, 0xF, 0xF, 0xF));

        assert_eq!(frame, before);
    }

    #[test]
    fn test_text_height_counts_newlines() {
        let mut glyphs = GlyphCache::new();
        let mut frame = surface(8, 8);
        let mut r = Renderer::new(&mut frame, 8, 8, &mut glyphs);

        let (_, h) = r.text_dimensions("one\ntwo\nthree", false, 15);
        assert_eq!(h, 15 * 3);

        let (_, h) = r.text_dimensions("flat", false, 32);
        assert_eq!(h, 32);
    }

    #[test]
    fn test_unloaded_font_measures_and_draws_nothing() {
        let mut glyphs = GlyphCache::new();
        let mut frame = surface(8, 8);
        let before = frame.clone();

        let mut r = Renderer::new(&mut frame, 8, 8, &mut glyphs);
        let (w, _) = r.text_dimensions("hello", false, 23);
        assert_eq!(w, 0);

        r.draw_string("hello", false, 0, 0, 23, Color::new(0xF, 0xF, 0xF, 0xF));
        assert_eq!(frame, before, "empty glyphs must not touch the surface");
    }

    #[test]
    fn test_draw_target_overwrites_pixels() {
        let mut glyphs = GlyphCache::new();
        let mut frame = surface(4, 4);

        let fill = Color::new(0x0, 0xF, 0xD, 0xF);
        {
            let mut r = Renderer::new(&mut frame, 4, 4, &mut glyphs);
            Rectangle::new(Point::new(1, 1), Size::new(2, 2))
                .into_styled(PrimitiveStyle::with_fill(fill))
                .draw(&mut r)
                .unwrap();
        }

        assert_eq!(frame[(1 * 4 + 1) as usize], fill);
        assert_eq!(frame[(2 * 4 + 2) as usize], fill);
        assert_eq!(frame[0], Color::from_raw(0));
    }
}

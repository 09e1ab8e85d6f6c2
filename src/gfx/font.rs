// src/gfx/font.rs
//! TTF glyph rasterization with a process-lifetime cache.
//!
//! Glyphs are rasterized once per (code point, size, monospace) key and kept
//! forever: an overlay UI touches a small, bounded alphabet, so the cache
//! never needs eviction. When no font has been loaded every lookup resolves
//! to an empty glyph and text degrades to invisible spacing instead of
//! failing.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use fontdue::{Font, FontSettings};
use thiserror_no_std::Error;

#[derive(Debug, Error)]
pub enum FontError {
    /// The supplied byte buffer is not a parseable font face.
    #[error("font data rejected: {0}")]
    Parse(&'static str),
}

/// A rasterized glyph plus the metrics needed to place and advance it.
///
/// `bitmap` is `None` for glyphs with a zero-area bounding box (whitespace);
/// such glyphs still carry a valid advance.
pub struct Glyph {
    pub bitmap: Option<Box<[u8]>>,
    pub width: u32,
    pub height: u32,
    /// Horizontal offset of the bitmap from the pen position.
    pub x_offset: i32,
    /// Vertical offset of the bitmap top from the baseline, y growing down.
    pub y_offset: i32,
    pub advance: f32,
    pub font_size: u32,
}

impl Glyph {
    fn empty(font_size: u32) -> Self {
        Self {
            bitmap: None,
            width: 0,
            height: 0,
            x_offset: 0,
            y_offset: 0,
            advance: 0.0,
            font_size,
        }
    }
}

/// Rasterizes and memoizes glyphs for one font face.
#[derive(Default)]
pub struct GlyphCache {
    font: Option<Font>,
    cache: BTreeMap<u64, Rc<Glyph>>,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and install the font face. Idempotent: once a face is loaded,
    /// further calls are no-ops.
    pub fn load(&mut self, data: &[u8]) -> Result<(), FontError> {
        if self.font.is_some() {
            return Ok(());
        }
        let font = Font::from_bytes(data, FontSettings::default()).map_err(FontError::Parse)?;
        self.font = Some(font);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.font.is_some()
    }

    /// Number of distinct glyphs rasterized so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn key(codepoint: char, monospace: bool, font_size: u32) -> u64 {
        let mut key = ((codepoint as u64) << 32) | font_size as u64;
        if monospace {
            key |= 1 << 63;
        }
        key
    }

    /// Fetch the cached glyph for the key, rasterizing it on first use.
    pub fn get_or_create(&mut self, codepoint: char, monospace: bool, font_size: u32) -> Rc<Glyph> {
        let key = Self::key(codepoint, monospace, font_size);
        if let Some(glyph) = self.cache.get(&key) {
            return Rc::clone(glyph);
        }

        let glyph = Rc::new(self.rasterize(codepoint, font_size));
        self.cache.insert(key, Rc::clone(&glyph));
        glyph
    }

    fn rasterize(&self, codepoint: char, font_size: u32) -> Glyph {
        let Some(font) = &self.font else {
            return Glyph::empty(font_size);
        };

        let index = font.lookup_glyph_index(codepoint);
        let (metrics, coverage) = font.rasterize_indexed(index, font_size as f32);

        let bitmap = if metrics.width == 0 || metrics.height == 0 {
            None
        } else {
            Some(coverage.into_boxed_slice())
        };

        Glyph {
            bitmap,
            width: metrics.width as u32,
            height: metrics.height as u32,
            x_offset: metrics.xmin,
            // fontdue reports the bitmap bottom relative to the baseline with
            // y growing up; the renderer wants the top with y growing down.
            y_offset: -(metrics.ymin + metrics.height as i32),
            advance: metrics.advance_width,
            font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_shared_entry() {
        let mut cache = GlyphCache::new();
        let a = cache.get_or_create('a', false, 23);
        let b = cache.get_or_create('a', false, 23);
        assert!(Rc::ptr_eq(&a, &b), "identical keys must share one entry");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_size_and_monospace_partition_the_cache() {
        let mut cache = GlyphCache::new();
        let base = cache.get_or_create('a', false, 23);
        let larger = cache.get_or_create('a', false, 32);
        let mono = cache.get_or_create('a', true, 23);
        assert!(!Rc::ptr_eq(&base, &larger));
        assert!(!Rc::ptr_eq(&base, &mono));
        assert!(!Rc::ptr_eq(&larger, &mono));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_uninitialized_lookups_degrade_to_empty_glyphs() {
        let mut cache = GlyphCache::new();
        assert!(!cache.is_initialized());

        let glyph = cache.get_or_create('x', false, 23);
        assert!(glyph.bitmap.is_none());
        assert_eq!((glyph.width, glyph.height), (0, 0));
        assert_eq!(glyph.advance, 0.0);
        assert_eq!(glyph.font_size, 23);
    }

    #[test]
    fn test_invalid_font_data_is_rejected() {
        let mut cache = GlyphCache::new();
        let result = cache.load(b"definitely not a font");
        assert!(result.is_err());
        assert!(!cache.is_initialized());
    }
}

//! Glyph ramp: maps illumination to a character.

use crate::types::{BLANK, GLYPH_RAMP, LUMINANCE_SCALE};

/// Ordered characters from sparsest to densest.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
    scale: f32,
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::new(GLYPH_RAMP, LUMINANCE_SCALE)
    }
}

impl GlyphRamp {
    /// An empty ramp renders every lit sample as the blank character.
    pub fn new(ramp: &str, scale: f32) -> Self {
        Self {
            glyphs: ramp.chars().collect(),
            scale,
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains(&ch)
    }

    /// Quantized bucket `floor(luminance * scale)`, clamped to the ramp.
    #[inline]
    pub fn bucket(&self, luminance: f32) -> usize {
        let raw = (luminance * self.scale).floor();
        if raw <= 0.0 || raw.is_nan() {
            0
        } else {
            (raw as usize).min(self.glyphs.len().saturating_sub(1))
        }
    }

    #[inline]
    pub fn glyph(&self, luminance: f32) -> char {
        self.glyphs
            .get(self.bucket(luminance))
            .copied()
            .unwrap_or(BLANK)
    }
}

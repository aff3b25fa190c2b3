//! Font-free glyph source shared by unit and integration tests

use kurbo::{BezPath, Rect, Shape};

use super::{GlyphPath, GlyphSource};

/// Draws every non-space character as a solid block
///
/// Each character advances the pen by `0.8 * cap_height`; the block starts
/// `bearing * cap_height` right of the pen and is one cap height tall.
pub struct BlockGlyphs {
    pub bearing: f64,
}

impl Default for BlockGlyphs {
    fn default() -> Self {
        Self { bearing: 0.1 }
    }
}

impl GlyphSource for BlockGlyphs {
    fn line_path(&self, text: &str, cap_height: f64) -> GlyphPath {
        let advance = 0.8 * cap_height;
        let mut path = BezPath::new();
        let mut pen = 0.0;
        for ch in text.chars() {
            if !ch.is_whitespace() {
                let x0 = pen + self.bearing * cap_height;
                let block = Rect::new(x0, 0.0, x0 + 0.6 * cap_height, cap_height);
                path.extend(block.path_elements(0.1));
            }
            pen += advance;
        }
        GlyphPath {
            path,
            advance: pen,
        }
    }
}

//! Glyph service: turns a line of text into a filled outline
//!
//! Sizes are expressed as the height of a capital letter in millimetres,
//! not as a nominal font size. The conversion assumes capitals occupy 70%
//! of the em square, which holds for the brand typeface.

use std::path::{Path, PathBuf};

use kurbo::{BezPath, Point, Rect, Shape};
use rustybuzz::ttf_parser::{GlyphId, OutlineBuilder};
use rustybuzz::{Face, UnicodeBuffer};
use thiserror::Error;

/// Points per millimetre
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// Fraction of the nominal font size covered by a capital letter
pub const CAP_HEIGHT_RATIO: f64 = 0.70;

/// Multiplier from a cap height in millimetres to a font size in points
pub const FONT_SCALE: f64 = MM_TO_PT / CAP_HEIGHT_RATIO;

/// Errors raised while loading the brand typeface
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("font data is not a usable OpenType or TrueType face")]
    InvalidFace,
}

/// Read raw font bytes from disk
pub fn read_font_file(path: &Path) -> Result<Vec<u8>, FontError> {
    std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// The outline of one rendered line of text
///
/// Coordinates are in millimetres, y-up, with the pen starting at the
/// origin on the baseline.
#[derive(Debug, Clone)]
pub struct GlyphPath {
    pub path: BezPath,
    /// Horizontal distance the pen moved while setting the line
    pub advance: f64,
}

impl GlyphPath {
    /// Tight bounds of the ink, `None` when the line has no outline (spaces only)
    pub fn bounds(&self) -> Option<Rect> {
        self.path.segments().next()?;
        Some(self.path.bounding_box())
    }
}

/// Anything that can set a line of text as a path
pub trait GlyphSource {
    /// Set `text` on a single line so capital letters are `cap_height` mm tall
    fn line_path(&self, text: &str, cap_height: f64) -> GlyphPath;
}

/// A loaded bold face, shaped with rustybuzz
///
/// Built once from font bytes and shared read-only by every layout call.
pub struct FontFace<'a> {
    face: Face<'a>,
}

impl<'a> FontFace<'a> {
    /// Parse the first face found in `data`
    pub fn from_bytes(data: &'a [u8]) -> Result<Self, FontError> {
        let face = Face::from_slice(data, 0).ok_or(FontError::InvalidFace)?;
        Ok(Self { face })
    }

    /// Nominal size in points for the given cap height in millimetres
    pub fn font_size_pt(cap_height: f64) -> f64 {
        cap_height * FONT_SCALE
    }

    /// Design units per em, never below one
    pub fn units_per_em(&self) -> f64 {
        f64::from(self.face.units_per_em()).max(1.0)
    }
}

impl GlyphSource for FontFace<'_> {
    fn line_path(&self, text: &str, cap_height: f64) -> GlyphPath {
        let em_mm = Self::font_size_pt(cap_height) / MM_TO_PT;
        let scale = em_mm / self.units_per_em();

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        let output = rustybuzz::shape(&self.face, &[], buffer);

        let mut sink = OutlineSink::new(scale);
        let mut pen = 0i64;
        for (info, pos) in output.glyph_infos().iter().zip(output.glyph_positions()) {
            sink.origin = Point::new(
                (pen + i64::from(pos.x_offset)) as f64 * scale,
                f64::from(pos.y_offset) * scale,
            );
            // Glyph ids always fit in 16 bits for OpenType faces
            let id = GlyphId(info.glyph_id as u16);
            self.face.outline_glyph(id, &mut sink);
            pen += i64::from(pos.x_advance);
        }

        GlyphPath {
            path: sink.path,
            advance: pen as f64 * scale,
        }
    }
}

/// Collects font-unit outline commands into a millimetre path
struct OutlineSink {
    path: BezPath,
    origin: Point,
    scale: f64,
}

impl OutlineSink {
    fn new(scale: f64) -> Self {
        Self {
            path: BezPath::new(),
            origin: Point::ZERO,
            scale,
        }
    }

    fn map(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.origin.x + f64::from(x) * self.scale,
            self.origin.y + f64::from(y) * self.scale,
        )
    }
}

impl OutlineBuilder for OutlineSink {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let c = self.map(x1, y1);
        let p = self.map(x, y);
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let p = self.map(x, y);
        self.path.curve_to(c1, c2, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[doc(hidden)]
pub mod testing;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_scale_targets_cap_height() {
        // 72/25.4 * 100/70
        assert!((FONT_SCALE - 4.049_57).abs() < 1e-4);
        assert!((FontFace::font_size_pt(10.0) - 40.4957).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_face_is_rejected() {
        let result = FontFace::from_bytes(b"definitely not a font");
        assert!(matches!(result, Err(FontError::InvalidFace)));
    }

    #[test]
    fn test_missing_font_file_reports_path() {
        let err = read_font_file(Path::new("/nonexistent/brand-bold.otf")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/brand-bold.otf"));
    }

    #[test]
    fn test_outline_sink_applies_scale_and_origin() {
        let mut sink = OutlineSink::new(0.5);
        sink.origin = Point::new(10.0, 0.0);
        sink.move_to(0.0, 0.0);
        sink.line_to(4.0, 0.0);
        sink.line_to(4.0, 8.0);
        sink.close();
        let bbox = sink.path.bounding_box();
        assert_eq!(bbox, Rect::new(10.0, 0.0, 12.0, 4.0));
    }

    #[test]
    fn test_empty_glyph_path_has_no_bounds() {
        let glyphs = GlyphPath {
            path: BezPath::new(),
            advance: 3.0,
        };
        assert!(glyphs.bounds().is_none());
    }
}

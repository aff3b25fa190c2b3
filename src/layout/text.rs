//! Multi-line text layout against exact glyph metrics

use kurbo::{Affine, BezPath};
use log::debug;

use crate::font::GlyphSource;

/// Lines of text ready for layout
///
/// Lines are trimmed and whitespace-only lines are dropped; the order of
/// the remaining lines is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    lines: Vec<String>,
    /// Cap height in millimetres
    pub font_size: f64,
    /// Extra space between consecutive lines
    pub step: f64,
}

impl TextBlock {
    /// Split `raw` on newlines and on `line_break`
    pub fn new(raw: &str, line_break: &str, font_size: f64, step: f64) -> Self {
        let normalized = if line_break.is_empty() {
            raw.to_string()
        } else {
            raw.replace(line_break, "\n")
        };
        let lines = normalized
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        Self {
            lines,
            font_size,
            step,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Bottom-right extent of a laid-out block
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutResult {
    /// Distance below the origin of the last line's baseline
    pub bottom: f64,
    /// Widest advance among the lines
    pub width: f64,
}

/// One positioned line
#[derive(Debug, Clone)]
pub struct PlacedLine {
    pub path: BezPath,
    /// Baseline y in scene coordinates (negative below the origin)
    pub baseline: f64,
}

/// Output of [`layout_text`]
#[derive(Debug, Clone)]
pub struct LaidOutText {
    pub lines: Vec<PlacedLine>,
    pub extent: LayoutResult,
}

/// Stack the lines of `block` starting `top` mm below the origin
///
/// Each line's ink is shifted so its left edge sits exactly on `x`,
/// whatever the side bearing of its first glyph. An empty block yields
/// no lines and an extent of `(top, 0)`.
pub fn layout_text(block: &TextBlock, glyphs: &dyn GlyphSource, x: f64, top: f64) -> LaidOutText {
    let mut cursor = top;
    let mut width = 0.0f64;
    let mut lines = Vec::with_capacity(block.lines.len());

    for text in &block.lines {
        cursor += block.font_size;
        let glyph = glyphs.line_path(text, block.font_size);
        width = width.max(glyph.advance);

        let left = glyph.bounds().map_or(0.0, |bounds| bounds.x0);
        let mut path = glyph.path;
        path.apply_affine(Affine::translate((x - left, -cursor)));
        lines.push(PlacedLine {
            path,
            baseline: -cursor,
        });

        cursor += block.step;
    }

    let bottom = if lines.is_empty() {
        top
    } else {
        cursor - block.step
    };
    debug!(
        "laid out {} line(s): bottom={:.3} width={:.3}",
        lines.len(),
        bottom,
        width
    );

    LaidOutText {
        lines,
        extent: LayoutResult { bottom, width },
    }
}

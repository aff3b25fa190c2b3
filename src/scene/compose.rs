//! Scene composer: brand mark, institution name, motto and optional label

use kurbo::{Affine, Rect, Shape};
use log::debug;

use crate::font::GlyphSource;
use crate::layout::{layout_text, LaidOutText, LayoutConfig, LayoutResult, TextBlock};

use super::brand::{self, TEXT_COLOR};
use super::{Scene, SceneError};

/// A composed scene together with the extents it was aligned on
#[derive(Debug, Clone)]
pub struct ComposedScene {
    pub scene: Scene,
    /// Extent of the institution block
    pub institution: LayoutResult,
    /// Extent of the sub-unit label, when one was drawn
    pub label: Option<LayoutResult>,
    /// Divider rule in scene coordinates, present together with the label
    pub divider: Option<Rect>,
}

/// Lays out the variable text around the fixed brand artwork
pub struct SceneComposer<'a> {
    glyphs: &'a dyn GlyphSource,
    config: &'a LayoutConfig,
}

impl<'a> SceneComposer<'a> {
    pub fn new(glyphs: &'a dyn GlyphSource, config: &'a LayoutConfig) -> Self {
        Self { glyphs, config }
    }

    /// Compose the logo for `institution` and an optional sub-unit `label`
    ///
    /// The institution name is upper-cased. A label that is empty after
    /// trimming contributes nothing, divider included.
    pub fn compose(&self, institution: &str, label: &str) -> Result<ComposedScene, SceneError> {
        let config = self.config;
        let unit = config.unit;
        let top = config.text_top();

        let mut scene: Scene = brand::brand_mark(unit)?.into_iter().collect();

        let institution_block = TextBlock::new(
            &institution.to_uppercase(),
            &config.line_break,
            config.institution_size(),
            config.line_step(),
        );
        let institution_text = layout_text(&institution_block, self.glyphs, 0.0, top);
        let institution_extent = institution_text.extent;
        push_lines(&mut scene, institution_text);

        let mut motto = brand::motto(unit)?;
        motto.apply_affine(Affine::translate((
            0.0,
            -(institution_extent.bottom + config.motto_gap()),
        )));
        scene.push(motto, TEXT_COLOR);

        let label_block = TextBlock::new(
            label,
            &config.line_break,
            config.label_size(),
            config.line_step(),
        );
        if label_block.is_empty() {
            return Ok(ComposedScene {
                scene,
                institution: institution_extent,
                label: None,
                divider: None,
            });
        }

        let (before_rule, after_rule) = config.divider_gaps();
        let label_x = institution_extent.width + before_rule + after_rule;
        let label_text = layout_text(&label_block, self.glyphs, label_x, top);
        let label_extent = label_text.extent;
        push_lines(&mut scene, label_text);

        let pen = config.pen_width();
        let span = (institution_extent.bottom.max(label_extent.bottom) - top).max(0.0);
        let rule_x = institution_extent.width + before_rule - pen / 2.0;
        let divider = Rect::new(rule_x, -top - span, rule_x + pen, -top);
        scene.push(divider.to_path(0.1), TEXT_COLOR);
        debug!(
            "divider at x={:.3} spanning {:.3} mm (label x={:.3})",
            rule_x, span, label_x
        );

        Ok(ComposedScene {
            scene,
            institution: institution_extent,
            label: Some(label_extent),
            divider: Some(divider),
        })
    }
}

fn push_lines(scene: &mut Scene, text: LaidOutText) {
    for line in text.lines {
        scene.push(line.path, TEXT_COLOR);
    }
}

//! Margin/fit stage: places a scene on a whole-millimetre canvas
//!
//! Canvas coordinates are millimetres, y-up, origin at the bottom-left
//! corner. The ink's top-left corner lands `padding` mm inside the top-left
//! corner of the canvas; rounding slack goes to the right and bottom edges.

use kurbo::{Affine, Rect};
use log::debug;

use super::brand::BACKGROUND;
use super::{Color, FilledPath, Scene};

/// Tolerance absorbing float noise before rounding up to whole millimetres
const ROUNDING_SLACK: f64 = 1e-6;

/// Protection-zone variant of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarginVariant {
    /// Canvas fitted tightly around the ink
    WithoutMargin,
    /// Canvas padded by one brand unit on every side
    WithMargin,
}

impl MarginVariant {
    /// Padding in millimetres for a brand unit of `unit` mm
    pub fn padding(self, unit: f64) -> f64 {
        match self {
            MarginVariant::WithoutMargin => 0.0,
            MarginVariant::WithMargin => unit,
        }
    }
}

/// A finished, fixed-size drawing surface
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f64,
    height: f64,
    background: Color,
    items: Vec<FilledPath>,
    transform: Affine,
}

impl Canvas {
    /// Fit `scene` with `padding` mm of clear space on every side
    pub fn fit(scene: &Scene, padding: f64) -> Self {
        let bbox = scene.bounding_box().unwrap_or(Rect::ZERO);
        let width = round_up_mm(bbox.width() + 2.0 * padding);
        let height = round_up_mm(bbox.height() + 2.0 * padding);

        let transform = Affine::translate((padding - bbox.x0, height - padding - bbox.y1));
        let items = scene
            .items()
            .iter()
            .map(|item| FilledPath::new(transform * &item.path, item.fill))
            .collect();
        debug!(
            "canvas {}x{} mm (ink {:.3}x{:.3} mm, padding {} mm)",
            width,
            height,
            bbox.width(),
            bbox.height(),
            padding
        );

        Self {
            width,
            height,
            background: BACKGROUND,
            items,
            transform,
        }
    }

    /// Fit the canvas content again, as if it were a fresh scene
    pub fn refit(&self, padding: f64) -> Self {
        let mut canvas = Self::fit(&self.content(), padding);
        canvas.transform = canvas.transform * self.transform;
        canvas
    }

    /// The painted paths without the background
    pub fn content(&self) -> Scene {
        self.items.iter().cloned().collect()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Paths in paint order, background excluded
    pub fn items(&self) -> &[FilledPath] {
        &self.items
    }

    /// Map from scene coordinates to canvas coordinates
    pub fn transform(&self) -> Affine {
        self.transform
    }
}

fn round_up_mm(value: f64) -> f64 {
    (value - ROUNDING_SLACK).ceil().max(1.0)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Shape};

    use super::*;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene.push(Rect::new(0.0, -10.0, 16.0, 0.0).to_path(0.1), Color::BLACK);
        scene.push(Rect::new(0.0, -35.2, 41.3, -22.5).to_path(0.1), Color::BLACK);
        scene
    }

    #[test]
    fn test_tight_fit_rounds_up_to_whole_mm() {
        let canvas = Canvas::fit(&sample_scene(), 0.0);
        assert_eq!(canvas.width(), 42.0);
        assert_eq!(canvas.height(), 36.0);
        assert_eq!(canvas.background(), Color::WHITE);
    }

    #[test]
    fn test_margin_pads_every_side() {
        let canvas = Canvas::fit(&sample_scene(), 10.0);
        assert_eq!(canvas.width(), 62.0);
        assert_eq!(canvas.height(), 56.0);

        let ink = canvas.content().bounding_box().unwrap();
        assert!((ink.x0 - 10.0).abs() < 1e-9);
        assert!((ink.y1 - (canvas.height() - 10.0)).abs() < 1e-9);
        assert!(ink.y0 >= 10.0 - 1e-9);
        assert!(ink.x1 <= canvas.width() - 10.0 + 1e-9);
    }

    #[test]
    fn test_fit_is_idempotent() {
        for padding in [0.0, 10.0] {
            let first = Canvas::fit(&sample_scene(), padding);
            let second = first.refit(padding);
            assert_eq!(first.width(), second.width());
            assert_eq!(first.height(), second.height());
            let third = Canvas::fit(&sample_scene(), padding);
            assert_eq!(first.width(), third.width());
        }
    }

    #[test]
    fn test_exact_sizes_are_not_bumped() {
        let mut scene = Scene::new();
        scene.push(Rect::new(0.1, -3.1, 20.1, 0.0).to_path(0.1), Color::BLACK);
        let canvas = Canvas::fit(&scene, 0.0);
        assert_eq!(canvas.width(), 20.0);
        assert_eq!(canvas.height(), 4.0);
    }

    #[test]
    fn test_transform_maps_scene_points() {
        let canvas = Canvas::fit(&sample_scene(), 10.0);
        let top_left = canvas.transform() * Point::new(0.0, 0.0);
        assert!((top_left.x - 10.0).abs() < 1e-9);
        assert!((top_left.y - 46.0).abs() < 1e-9);

        let refitted = canvas.refit(0.0);
        let moved = refitted.transform() * Point::new(0.0, 0.0);
        assert!((moved.x - 0.0).abs() < 1e-9);
        assert!((moved.y - refitted.height()).abs() < 1e-9);
    }

    #[test]
    fn test_padding_per_variant() {
        assert_eq!(MarginVariant::WithoutMargin.padding(10.0), 0.0);
        assert_eq!(MarginVariant::WithMargin.padding(10.0), 10.0);
    }
}

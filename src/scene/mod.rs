//! Abstract vector scene of the logo
//!
//! A scene is an ordered list of filled paths in millimetres, y-up, with
//! the origin at the top-left of the brand mark. Later entries paint over
//! earlier ones.

pub mod brand;
pub mod canvas;
pub mod compose;

pub use canvas::{Canvas, MarginVariant};
pub use compose::{ComposedScene, SceneComposer};

use std::fmt;

use kurbo::{BezPath, Rect, Shape};
use thiserror::Error;

/// Errors raised while assembling the scene
#[derive(Debug, Error)]
pub enum SceneError {
    /// A built-in brand path failed to parse
    #[error("brand path '{name}' is malformed: {reason}")]
    MalformedBrandPath { name: &'static str, reason: String },
}

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `0.0..=1.0`, as PDF and PostScript expect
    pub fn unit_components(&self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|c| f64::from(c) / 255.0)
    }

    /// Squared euclidean distance in RGB space
    pub fn distance_sq(&self, other: &Color) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A path painted with a solid fill
#[derive(Debug, Clone)]
pub struct FilledPath {
    pub path: BezPath,
    pub fill: Color,
}

impl FilledPath {
    pub fn new(path: BezPath, fill: Color) -> Self {
        Self { path, fill }
    }

    /// Tight bounds, `None` for paths without any segment
    pub fn bounds(&self) -> Option<Rect> {
        self.path.segments().next()?;
        Some(self.path.bounding_box())
    }
}

/// The composed logo before it is placed on a canvas
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: Vec<FilledPath>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: BezPath, fill: Color) {
        self.items.push(FilledPath::new(path, fill));
    }

    pub fn items(&self) -> &[FilledPath] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Smallest rectangle containing all ink
    pub fn bounding_box(&self) -> Option<Rect> {
        self.items
            .iter()
            .filter_map(FilledPath::bounds)
            .reduce(|acc, bounds| acc.union(bounds))
    }
}

impl FromIterator<FilledPath> for Scene {
    fn from_iter<I: IntoIterator<Item = FilledPath>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(Color::rgb(0x00, 0x00, 0x91).to_string(), "#000091");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_color_distance() {
        assert_eq!(Color::BLACK.distance_sq(&Color::rgb(3, 4, 0)), 25);
        assert_eq!(Color::WHITE.distance_sq(&Color::WHITE), 0);
    }

    #[test]
    fn test_unit_components() {
        assert_eq!(Color::WHITE.unit_components(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.unit_components(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_bounding_box_skips_empty_paths() {
        let mut scene = Scene::new();
        scene.push(BezPath::new(), Color::BLACK);
        assert!(scene.bounding_box().is_none());

        let mut stray = BezPath::new();
        stray.move_to((-100.0, -100.0));
        scene.push(stray, Color::BLACK);
        scene.push(Rect::new(1.0, -2.0, 3.0, 4.0).to_path(0.1), Color::BLACK);
        scene.push(Rect::new(5.0, 0.0, 6.0, 1.0).to_path(0.1), Color::BLACK);
        assert_eq!(scene.bounding_box(), Some(Rect::new(1.0, -2.0, 6.0, 4.0)));
    }
}

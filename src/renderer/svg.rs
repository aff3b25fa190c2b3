//! SVG generation from a fitted canvas
//!
//! The builder produces an [`SvgDocument`], a small object model whose
//! root attributes can be edited before serialization. Size normalization
//! works on that model instead of on the serialized text.

use std::fmt;

use kurbo::{Affine, BezPath};

use crate::scene::{Canvas, Color};

use super::path::{format_number, path_to_d};
use super::SvgConfig;

/// A serializable SVG document
#[derive(Debug, Clone)]
pub struct SvgDocument {
    config: SvgConfig,
    root: Vec<(String, String)>,
    elements: Vec<String>,
}

impl SvgDocument {
    /// Value of a root attribute
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Remove a root attribute, returning its value
    pub fn remove_root_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.root.iter().position(|(key, _)| key == name)?;
        Some(self.root.remove(index).1)
    }

    /// Drop the intrinsic `width`/`height` so embedders control the size
    ///
    /// The `viewBox` is kept, so the drawing still scales proportionally.
    pub fn strip_intrinsic_size(&mut self) {
        self.remove_root_attribute("width");
        self.remove_root_attribute("height");
    }

    /// Serialized child elements, in paint order
    pub fn elements(&self) -> &[String] {
        &self.elements
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nl = if self.config.minify { "" } else { "\n" };
        let indent = if self.config.minify { "" } else { "  " };

        if self.config.standalone {
            write!(f, r#"<?xml version="1.0" encoding="UTF-8"?>{nl}"#)?;
        }
        f.write_str("<svg")?;
        for (key, value) in &self.root {
            write!(f, r#" {key}="{value}""#)?;
        }
        write!(f, ">{nl}")?;
        for element in &self.elements {
            write!(f, "{indent}{element}{nl}")?;
        }
        write!(f, "</svg>{nl}")
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn num(&self, value: f64) -> String {
        format_number(value, self.config.precision, self.config.minify)
    }

    /// Add a filled rectangle
    pub fn add_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Color) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            self.num(x),
            self.num(y),
            self.num(w),
            self.num(h),
            fill
        ));
    }

    /// Add a filled path
    pub fn add_path(&mut self, path: &BezPath, fill: Color) {
        let d = path_to_d(path, self.config.precision, self.config.minify);
        if d.is_empty() {
            return;
        }
        self.elements
            .push(format!(r#"<path d="{}" fill="{}"/>"#, d, fill));
    }

    /// Finish the document with a `width` x `height` mm viewport
    pub fn build(self, width: f64, height: f64) -> SvgDocument {
        let w = self.num(width);
        let h = self.num(height);
        let root = vec![
            (
                "xmlns".to_string(),
                "http://www.w3.org/2000/svg".to_string(),
            ),
            ("width".to_string(), w.clone()),
            ("height".to_string(), h.clone()),
            ("viewBox".to_string(), format!("0 0 {} {}", w, h)),
        ];
        SvgDocument {
            config: self.config,
            root,
            elements: self.elements,
        }
    }
}

/// Render a canvas to an SVG document
///
/// Canvas coordinates are y-up; the document flips them into SVG's y-down
/// space. The background is painted first, over the full canvas.
pub fn render_svg(canvas: &Canvas, config: &SvgConfig) -> SvgDocument {
    let height = canvas.height();
    let flip = Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, height]);

    let mut builder = SvgBuilder::new(config.clone());
    builder.add_rect(0.0, 0.0, canvas.width(), height, canvas.background());
    for item in canvas.items() {
        builder.add_path(&(flip * &item.path), item.fill);
    }

    let mut doc = builder.build(canvas.width(), height);
    if !config.intrinsic_size {
        doc.strip_intrinsic_size();
    }
    doc
}

/// Render a canvas to SVG markup
pub fn canvas_to_svg(canvas: &Canvas, config: &SvgConfig) -> String {
    render_svg(canvas, config).to_string()
}

//! Rasterization of a canvas at a target pixel height
//!
//! The canvas is serialized to SVG, re-parsed by usvg and painted by resvg,
//! so raster and vector outputs share one source of truth.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use log::debug;
use resvg::{tiny_skia, usvg};

use crate::scene::Canvas;

use super::{render_svg, RenderError, SvgConfig};

/// Target heights below this many pixels are rendered at 2x then downscaled
pub const SUPERSAMPLE_BELOW: u32 = 700;

const SUPERSAMPLE_FACTOR: u32 = 2;

/// Pixel size of a raster export `height` pixels tall
///
/// The width keeps the canvas aspect ratio and is never zero.
pub fn raster_size(canvas: &Canvas, height: u32) -> (u32, u32) {
    let width = (canvas.width() * f64::from(height) / canvas.height()).round();
    ((width as u32).max(1), height)
}

/// Render `canvas` into an RGB image exactly `height` pixels tall
pub fn rasterize(canvas: &Canvas, height: u32) -> Result<RgbImage, RenderError> {
    let (width, height) = raster_size(canvas, height);
    if height < SUPERSAMPLE_BELOW {
        let factor = SUPERSAMPLE_FACTOR;
        debug!(
            "supersampling {}x{} px at {}x before downscaling",
            width, height, factor
        );
        let large = render_pixels(canvas, width * factor, height * factor)?;
        Ok(imageops::resize(&large, width, height, FilterType::Lanczos3))
    } else {
        render_pixels(canvas, width, height)
    }
}

fn render_pixels(canvas: &Canvas, width: u32, height: u32) -> Result<RgbImage, RenderError> {
    let svg = render_svg(canvas, &SvgConfig::for_rasterizer()).to_string();
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).map_err(|e| {
        RenderError::Rasterize {
            reason: e.to_string(),
        }
    })?;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or_else(|| RenderError::Rasterize {
            reason: format!("cannot allocate a {}x{} pixmap", width, height),
        })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut image = RgbImage::new(width, height);
    for (target, source) in image.pixels_mut().zip(pixmap.pixels()) {
        let color = source.demultiply();
        *target = Rgb([color.red(), color.green(), color.blue()]);
    }
    Ok(image)
}

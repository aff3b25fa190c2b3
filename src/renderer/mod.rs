//! Output renderers for a fitted canvas
//!
//! Vector serializers (SVG, PDF, EPS) are infallible string builders. The
//! raster path rasterizes through resvg, quantizes to a brand palette and
//! hands the pixels to an encoder.

pub mod config;
pub mod encode;
pub mod eps;
pub mod palette;
pub mod path;
pub mod pdf;
pub mod raster;
pub mod svg;

pub use config::SvgConfig;
pub use encode::{encode_gif, encode_jpeg, encode_png};
pub use eps::canvas_to_eps;
pub use palette::{quantize, IndexedImage, PaletteSize};
pub use pdf::canvas_to_pdf;
pub use raster::{raster_size, rasterize};
pub use svg::{canvas_to_svg, render_svg, SvgDocument};

use thiserror::Error;

/// Errors raised while producing a raster stream
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rasterization failed: {reason}")]
    Rasterize { reason: String },

    #[error("{format} encoding failed: {reason}")]
    Encode {
        format: &'static str,
        reason: String,
    },

    #[error("{width}x{height} px exceeds the {format} size limit")]
    DimensionsTooLarge {
        format: &'static str,
        width: u32,
        height: u32,
    },
}

//! Export orchestration
//!
//! Writes every requested format for one fitted canvas. Vector formats are
//! written once per canvas; raster formats once per requested height.

pub mod format;
pub mod naming;
pub mod write;

pub use format::Format;
pub use naming::{raster_file_name, vector_file_name, WITHOUT_MARGIN_SUFFIX};
pub use write::write_atomic;

use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::renderer::{
    canvas_to_eps, canvas_to_pdf, canvas_to_svg, encode_gif, encode_jpeg, encode_png, quantize,
    rasterize, PaletteSize, RenderError, SvgConfig,
};
use crate::scene::{Canvas, MarginVariant};

/// Errors raised while producing or writing an artefact
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// What to write for each canvas
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// File name stem shared by every artefact
    pub base_name: String,
    /// Formats in export order, without duplicates
    pub formats: Vec<Format>,
    /// Positive raster heights in pixels
    pub heights: Vec<u32>,
    /// JPEG quality in `1..=100`
    pub quality: u8,
    pub palette: PaletteSize,
    pub svg: SvgConfig,
    pub output_dir: PathBuf,
}

impl ExportRequest {
    fn wants(&self, format: Format) -> bool {
        self.formats.contains(&format)
    }

    fn has_raster(&self) -> bool {
        self.formats.iter().any(|format| !format.is_vector())
    }
}

/// Write every artefact of `request` for one margin variant
///
/// Returns the written paths in write order. The first failure aborts the
/// remaining exports of this canvas.
pub fn export_canvas(
    canvas: &Canvas,
    variant: MarginVariant,
    request: &ExportRequest,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::new();
    let dir = request.output_dir.as_path();

    for format in request.formats.iter().copied().filter(|f| f.is_vector()) {
        let name = vector_file_name(&request.base_name, variant, format);
        let bytes = match format {
            Format::Svg => canvas_to_svg(canvas, &request.svg).into_bytes(),
            Format::Pdf => canvas_to_pdf(canvas),
            Format::Eps => canvas_to_eps(canvas).into_bytes(),
            Format::Png | Format::Gif | Format::Jpg => continue,
        };
        written.push(save(dir, &name, &bytes, format)?);
    }

    if !request.has_raster() {
        return Ok(written);
    }
    for &height in &request.heights {
        debug!("rasterizing {} at {} px", variant_label(variant), height);
        let image = rasterize(canvas, height)?;

        if request.wants(Format::Png) || request.wants(Format::Gif) {
            let indexed = quantize(&image, request.palette);
            if request.wants(Format::Png) {
                let name = raster_file_name(&request.base_name, variant, height, Format::Png);
                written.push(save(dir, &name, &encode_png(&indexed)?, Format::Png)?);
            }
            if request.wants(Format::Gif) {
                let name = raster_file_name(&request.base_name, variant, height, Format::Gif);
                written.push(save(dir, &name, &encode_gif(&indexed)?, Format::Gif)?);
            }
        }
        if request.wants(Format::Jpg) {
            let name = raster_file_name(&request.base_name, variant, height, Format::Jpg);
            let bytes = encode_jpeg(&image, request.quality)?;
            written.push(save(dir, &name, &bytes, Format::Jpg)?);
        }
    }
    Ok(written)
}

fn save(dir: &Path, name: &str, bytes: &[u8], format: Format) -> Result<PathBuf, ExportError> {
    let path = dir.join(name);
    write_atomic(&path, bytes)?;
    info!("{} written: {}", format, path.display());
    Ok(path)
}

fn variant_label(variant: MarginVariant) -> &'static str {
    match variant {
        MarginVariant::WithoutMargin => "tight canvas",
        MarginVariant::WithMargin => "padded canvas",
    }
}

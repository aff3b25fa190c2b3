//! Emblem Composer - institutional logo generator
//!
//! Composes the fixed brand mark with an institution name, the motto and an
//! optional sub-unit label, then exports the result as SVG, PDF, EPS, PNG,
//! GIF and JPEG, with and without a protective margin.
//!
//! # Example
//!
//! ```rust,no_run
//! use emblem_composer::font::{read_font_file, FontFace};
//! use emblem_composer::{generate, LogoConfig};
//!
//! let bytes = read_font_file("Marianne-Bold.otf".as_ref()).unwrap();
//! let face = FontFace::from_bytes(&bytes).unwrap();
//! let config = LogoConfig::new()
//!     .with_institution("MINISTÈRE\\DE LA CULTURE")
//!     .with_direction("Direction\\générale")
//!     .with_formats(["svg", "png"]);
//!
//! let written = generate(&config, &face).unwrap();
//! assert!(!written.is_empty());
//! ```

pub mod error;
pub mod export;
pub mod font;
pub mod i18n;
pub mod layout;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use error::Error;
pub use export::{ExportError, ExportRequest, Format};
pub use font::{FontError, FontFace, GlyphPath, GlyphSource};
pub use layout::{LayoutConfig, LayoutResult};
pub use renderer::{PaletteSize, RenderError, SvgConfig};
pub use scene::{Canvas, ComposedScene, MarginVariant, SceneError};
pub use settings::{Settings, SettingsError};

use std::path::PathBuf;

use log::{debug, info, warn};

use scene::SceneComposer;

pub const DEFAULT_NAME: &str = "logo";
pub const DEFAULT_INSTITUTION: &str = "RÉPUBLIQUE\\FRANÇAISE";
pub const DEFAULT_HEIGHTS: [i64; 3] = [100, 300, 700];
pub const DEFAULT_FORMATS: &str = "svg";
pub const DEFAULT_QUALITY: i64 = 90;

/// Raster height used in signature mode when none is given
pub const SIGNATURE_HEIGHT: i64 = 100;
/// Format used in signature mode when none is given
pub const SIGNATURE_FORMATS: &str = "png";

/// Every parameter of a generation run, as supplied by the user
///
/// Values are kept raw; [`LogoConfig::validate`] clamps and filters them.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoConfig {
    /// Base file name of every artefact
    pub name: String,
    /// Institution name, lines split on `line_break`
    pub institution: String,
    /// Optional sub-unit label; empty for none
    pub direction: String,
    /// Explicit line-break marker
    pub line_break: String,
    /// Raster heights in pixels; `None` selects the mode default
    pub heights: Option<Vec<i64>>,
    /// Format tokens; `None` selects the mode default
    pub formats: Option<Vec<String>>,
    pub with_margin: bool,
    pub without_margin: bool,
    pub for_signature: bool,
    /// JPEG quality, clamped into `1..=100`
    pub quality: i64,
    /// Quantize to 16 colors instead of 8
    pub palette16: bool,
    pub output_dir: PathBuf,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            institution: DEFAULT_INSTITUTION.to_string(),
            direction: String::new(),
            line_break: layout::DEFAULT_LINE_BREAK.to_string(),
            heights: None,
            formats: None,
            with_margin: false,
            without_margin: false,
            for_signature: false,
            quality: DEFAULT_QUALITY,
            palette16: false,
            output_dir: PathBuf::from("."),
        }
    }
}

impl LogoConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base file name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the institution name
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = institution.into();
        self
    }

    /// Set the sub-unit label
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = direction.into();
        self
    }

    /// Set the explicit line-break marker
    pub fn with_line_break(mut self, marker: impl Into<String>) -> Self {
        self.line_break = marker.into();
        self
    }

    /// Set the raster heights
    pub fn with_heights(mut self, heights: impl IntoIterator<Item = i64>) -> Self {
        self.heights = Some(heights.into_iter().collect());
        self
    }

    /// Set the format tokens
    pub fn with_formats<S: Into<String>>(mut self, formats: impl IntoIterator<Item = S>) -> Self {
        self.formats = Some(formats.into_iter().map(Into::into).collect());
        self
    }

    /// Request the padded variant
    pub fn with_margin(mut self, enabled: bool) -> Self {
        self.with_margin = enabled;
        self
    }

    /// Request the tight-fit variant
    pub fn without_margin(mut self, enabled: bool) -> Self {
        self.without_margin = enabled;
        self
    }

    /// Enable or disable signature mode
    pub fn for_signature(mut self, enabled: bool) -> Self {
        self.for_signature = enabled;
        self
    }

    /// Set the JPEG quality
    pub fn with_quality(mut self, quality: i64) -> Self {
        self.quality = quality;
        self
    }

    /// Select the 16-color palette
    pub fn with_palette16(mut self, enabled: bool) -> Self {
        self.palette16 = enabled;
        self
    }

    /// Set the directory receiving the artefacts
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Resolve defaults and normalize every value
    ///
    /// Out-of-range input is corrected and logged, never rejected.
    pub fn validate(&self) -> ValidatedConfig {
        let quality = self.quality.clamp(1, 100);
        if quality != self.quality {
            warn!("quality {} out of range, using {}", self.quality, quality);
        }

        let heights = match &self.heights {
            Some(heights) => validate_heights(heights),
            None if self.for_signature => vec![SIGNATURE_HEIGHT as u32],
            None => DEFAULT_HEIGHTS.iter().map(|h| *h as u32).collect(),
        };

        let formats = match &self.formats {
            Some(tokens) => Format::parse_list(tokens),
            None if self.for_signature => Format::parse_list([SIGNATURE_FORMATS]),
            None => Format::parse_list([DEFAULT_FORMATS]),
        };

        let mut variants = Vec::with_capacity(2);
        if self.without_margin || !self.with_margin {
            variants.push(MarginVariant::WithoutMargin);
        }
        if self.with_margin {
            variants.push(MarginVariant::WithMargin);
        }

        let layout = LayoutConfig::new()
            .with_signature(self.for_signature)
            .with_line_break(self.line_break.clone());

        ValidatedConfig {
            institution: self.institution.clone(),
            direction: self.direction.clone(),
            layout,
            variants,
            request: ExportRequest {
                base_name: self.name.clone(),
                formats,
                heights,
                quality: quality as u8,
                palette: if self.palette16 {
                    PaletteSize::Sixteen
                } else {
                    PaletteSize::Eight
                },
                svg: SvgConfig::default(),
                output_dir: self.output_dir.clone(),
            },
        }
    }
}

/// Keep positive heights that fit in `u32`, first occurrence wins
fn validate_heights(heights: &[i64]) -> Vec<u32> {
    let mut valid: Vec<u32> = Vec::with_capacity(heights.len());
    for &height in heights {
        match u32::try_from(height) {
            Ok(h) if h > 0 => {
                if !valid.contains(&h) {
                    valid.push(h);
                }
            }
            _ => warn!("ignoring invalid raster height {}", height),
        }
    }
    valid
}

/// A configuration whose values are all in range
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub institution: String,
    pub direction: String,
    pub layout: LayoutConfig,
    /// Margin variants in export order
    pub variants: Vec<MarginVariant>,
    pub request: ExportRequest,
}

/// Lay out and assemble the logo scene
pub fn compose_scene(
    config: &ValidatedConfig,
    glyphs: &dyn GlyphSource,
) -> Result<ComposedScene, SceneError> {
    let composed =
        SceneComposer::new(glyphs, &config.layout).compose(&config.institution, &config.direction)?;
    if let Some(bbox) = composed.scene.bounding_box() {
        debug!(
            "scene ink {:.3}x{:.3} mm, institution block {:.3} mm wide",
            bbox.width(),
            bbox.height(),
            composed.institution.width
        );
    }
    Ok(composed)
}

/// Run the whole pipeline and return the written files in write order
pub fn generate(config: &LogoConfig, glyphs: &dyn GlyphSource) -> Result<Vec<PathBuf>, Error> {
    let config = config.validate();
    if config.request.formats.is_empty() {
        warn!("no known output format requested, nothing to do");
        return Ok(Vec::new());
    }

    let composed = compose_scene(&config, glyphs)?;
    let mut written = Vec::new();
    for &variant in &config.variants {
        let canvas = Canvas::fit(&composed.scene, variant.padding(config.layout.unit));
        info!(
            "exporting {} mm x {} mm canvas ({})",
            canvas.width(),
            canvas.height(),
            match variant {
                MarginVariant::WithoutMargin => "without margin",
                MarginVariant::WithMargin => "with margin",
            }
        );
        written.extend(export::export_canvas(&canvas, variant, &config.request)?);
    }
    Ok(written)
}

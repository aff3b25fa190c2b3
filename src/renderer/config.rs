//! Configuration for SVG serialization

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Decimal places kept for coordinates
    pub precision: usize,

    /// Drop inter-element whitespace and shorten numbers
    pub minify: bool,

    /// Keep `width`/`height` on the root element
    pub intrinsic_size: bool,

    /// Whether to include the XML declaration
    pub standalone: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            minify: true,
            intrinsic_size: false,
            standalone: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-precision document with an intrinsic size, fed to the rasterizer
    pub fn for_rasterizer() -> Self {
        Self {
            precision: 6,
            minify: false,
            intrinsic_size: true,
            standalone: false,
        }
    }

    /// Set the coordinate precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set whether output is minified
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Set whether the root keeps its intrinsic width and height
    pub fn with_intrinsic_size(mut self, keep: bool) -> Self {
        self.intrinsic_size = keep;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}

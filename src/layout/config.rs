//! Layout constants for the logo block
//!
//! Every offset is a multiple of the brand unit `x`.

/// Brand grid unit in millimetres
pub const BRAND_UNIT: f64 = 10.0;

/// Default marker accepted as a line break in addition to newlines
pub const DEFAULT_LINE_BREAK: &str = "\\";

/// Configuration options for composing the logo
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Brand unit `x`
    pub unit: f64,

    /// Spacing tuned for e-mail signatures
    pub for_signature: bool,

    /// Marker replaced by a newline before splitting text into lines
    pub line_break: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit: BRAND_UNIT,
            for_signature: false,
            line_break: DEFAULT_LINE_BREAK.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the brand unit
    pub fn with_unit(mut self, unit: f64) -> Self {
        self.unit = unit;
        self
    }

    /// Enable or disable signature spacing
    pub fn with_signature(mut self, for_signature: bool) -> Self {
        self.for_signature = for_signature;
        self
    }

    /// Set the explicit line-break marker
    pub fn with_line_break(mut self, marker: impl Into<String>) -> Self {
        self.line_break = marker.into();
        self
    }

    /// Distance from the origin down to the top of the first text line
    pub fn text_top(&self) -> f64 {
        3.0 * self.unit / 2.0
    }

    /// Cap height of the institution name
    pub fn institution_size(&self) -> f64 {
        3.0 * self.unit / 4.0
    }

    /// Cap height of the sub-unit label
    pub fn label_size(&self) -> f64 {
        11.0 * self.unit / 20.0
    }

    /// Extra space between consecutive lines of one block
    pub fn line_step(&self) -> f64 {
        self.unit / 3.0
    }

    /// Space between the institution block and the motto
    pub fn motto_gap(&self) -> f64 {
        self.unit / 2.0
    }

    /// Thickness of the divider rule
    pub fn pen_width(&self) -> f64 {
        self.unit / 40.0
    }

    /// Horizontal gaps (institution to divider, divider to label)
    ///
    /// Signature renders keep the asymmetric brand ratios 3x and x/2.
    pub fn divider_gaps(&self) -> (f64, f64) {
        if self.for_signature {
            (3.0 * self.unit, self.unit / 2.0)
        } else {
            (self.unit, self.unit)
        }
    }
}

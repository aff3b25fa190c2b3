//! Text layout for the logo block
//!
//! Splits institution and sub-unit text into lines, sets each line with
//! the glyph service and reports the extent the composer aligns against.

pub mod config;
pub mod text;

pub use config::{LayoutConfig, BRAND_UNIT, DEFAULT_LINE_BREAK};
pub use text::{layout_text, LaidOutText, LayoutResult, PlacedLine, TextBlock};

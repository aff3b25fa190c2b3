//! Output file names

use crate::scene::MarginVariant;

use super::Format;

/// Suffix appended to the base name of tight-fit exports
pub const WITHOUT_MARGIN_SUFFIX: &str = "_szp";

pub fn margin_suffix(variant: MarginVariant) -> &'static str {
    match variant {
        MarginVariant::WithoutMargin => WITHOUT_MARGIN_SUFFIX,
        MarginVariant::WithMargin => "",
    }
}

/// `{base}{suffix}.{ext}`
pub fn vector_file_name(base: &str, variant: MarginVariant, format: Format) -> String {
    format!("{}{}.{}", base, margin_suffix(variant), format.extension())
}

/// `{base}{suffix}_{height}.{ext}`
pub fn raster_file_name(base: &str, variant: MarginVariant, height: u32, format: Format) -> String {
    format!(
        "{}{}_{}.{}",
        base,
        margin_suffix(variant),
        height,
        format.extension()
    )
}

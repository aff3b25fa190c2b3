//! Fixed brand artwork
//!
//! Paths are authored in brand units (x = 1), y-up, with the top-left
//! corner of the mark at the origin. They are scaled to millimetres when
//! the scene is composed.

use kurbo::{Affine, BezPath};

use super::{Color, FilledPath, SceneError};

pub const BRAND_BLUE: Color = Color::rgb(0x00, 0x00, 0x91);
pub const BRAND_GRAY: Color = Color::rgb(0x80, 0x80, 0x82);
pub const BRAND_RED: Color = Color::rgb(0xe1, 0x00, 0x0f);

/// Fill of the institution name, label, motto and divider
pub const TEXT_COLOR: Color = Color::BLACK;

/// Opaque canvas background
pub const BACKGROUND: Color = Color::WHITE;

/// The three groups of the brand mark, painted in this order
const MARK: [(&str, &str, Color); 3] = [
    (
        "mark-left",
        "M0 0 H0.46 C0.41 -0.26 0.41 -0.74 0.46 -1 H0 Z",
        BRAND_BLUE,
    ),
    (
        "mark-profile",
        "M0.70 -0.12 C0.58 -0.30 0.62 -0.56 0.74 -0.70 C0.84 -0.82 0.98 -0.86 1.06 -0.82 \
         C0.96 -0.68 0.94 -0.50 1.02 -0.36 C0.92 -0.26 0.82 -0.16 0.70 -0.12 Z \
         M0.80 -0.90 C0.86 -0.93 0.92 -0.95 0.98 -0.95 L0.96 -0.91 C0.90 -0.91 0.85 -0.90 0.80 -0.90 Z",
        BRAND_GRAY,
    ),
    (
        "mark-right",
        "M1.14 0 C1.19 -0.26 1.19 -0.74 1.14 -1 H1.6 V0 Z",
        BRAND_RED,
    ),
];

/// Motto set below the institution name, top edge on y = 0
const MOTTO: &str = "M0.03 0 H0.47 L0.44 -0.11 H0 Z \
                     M0.55 0 H0.99 L0.96 -0.11 H0.52 Z \
                     M1.07 0 H1.51 L1.48 -0.11 H1.04 Z";

/// The brand mark groups scaled to `unit` millimetres per brand unit
pub fn brand_mark(unit: f64) -> Result<Vec<FilledPath>, SceneError> {
    MARK.iter()
        .map(|(name, data, fill)| Ok(FilledPath::new(parse(name, data, unit)?, *fill)))
        .collect()
}

/// The motto path scaled to `unit` millimetres per brand unit
pub fn motto(unit: f64) -> Result<BezPath, SceneError> {
    parse("motto", MOTTO, unit)
}

fn parse(name: &'static str, data: &str, unit: f64) -> Result<BezPath, SceneError> {
    let mut path = BezPath::from_svg(data).map_err(|e| SceneError::MalformedBrandPath {
        name,
        reason: e.to_string(),
    })?;
    path.apply_affine(Affine::scale(unit));
    Ok(path)
}

//! Fixed brand palettes and nearest-color quantization

use image::RgbImage;

use crate::scene::Color;

/// Number of entries in the indexed-color table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteSize {
    #[default]
    Eight,
    Sixteen,
}

impl PaletteSize {
    pub fn colors(self) -> &'static [Color] {
        match self {
            PaletteSize::Eight => &PALETTE_8,
            PaletteSize::Sixteen => &PALETTE_16,
        }
    }
}

pub const PALETTE_8: [Color; 8] = [
    Color::rgb(0xff, 0xff, 0xff),
    Color::rgb(0x05, 0x05, 0x05),
    Color::rgb(0x80, 0x80, 0x82),
    Color::rgb(0xb3, 0xb2, 0xb3),
    Color::rgb(0x00, 0x00, 0x91),
    Color::rgb(0xe1, 0x00, 0x0f),
    Color::rgb(0xdb, 0xdb, 0xdb),
    Color::rgb(0xea, 0x65, 0x67),
];

pub const PALETTE_16: [Color; 16] = [
    Color::rgb(0x0c, 0x0c, 0x0c),
    Color::rgb(0xff, 0xff, 0xff),
    Color::rgb(0x79, 0x79, 0x7c),
    Color::rgb(0xa3, 0xa3, 0xa4),
    Color::rgb(0x09, 0x09, 0x94),
    Color::rgb(0xd7, 0xd7, 0xd9),
    Color::rgb(0xe1, 0x04, 0x11),
    Color::rgb(0xf2, 0xf2, 0xf2),
    Color::rgb(0xf9, 0xcb, 0xce),
    Color::rgb(0xc1, 0xc0, 0xc1),
    Color::rgb(0x47, 0x47, 0x47),
    Color::rgb(0xed, 0x5f, 0x70),
    Color::rgb(0xfb, 0xdd, 0xdf),
    Color::rgb(0xf0, 0xf0, 0xf9),
    Color::rgb(0xe7, 0xe7, 0xe7),
    Color::rgb(0xfa, 0xfa, 0xfa),
];

/// Index of the closest palette entry; ties go to the lowest index
pub fn nearest_index(palette: &[Color], color: Color) -> u8 {
    let mut best = 0;
    let mut best_distance = u32::MAX;
    for (index, candidate) in palette.iter().enumerate() {
        let distance = candidate.distance_sq(&color);
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best as u8
}

/// An image stored as one palette index per pixel
#[derive(Debug, Clone)]
pub struct IndexedImage {
    pub width: u32,
    pub height: u32,
    pub indices: Vec<u8>,
    pub palette: &'static [Color],
}

impl IndexedImage {
    /// Palette flattened to `r g b` triples
    pub fn rgb_table(&self) -> Vec<u8> {
        self.palette
            .iter()
            .flat_map(|color| [color.r, color.g, color.b])
            .collect()
    }
}

/// Map every pixel to its nearest palette entry, without dithering
pub fn quantize(image: &RgbImage, size: PaletteSize) -> IndexedImage {
    let palette = size.colors();
    let indices = image
        .pixels()
        .map(|pixel| {
            let [r, g, b] = pixel.0;
            nearest_index(palette, Color::rgb(r, g, b))
        })
        .collect();
    IndexedImage {
        width: image.width(),
        height: image.height(),
        indices,
        palette,
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;

    #[test]
    fn test_exact_colors_map_to_themselves() {
        for (index, color) in PALETTE_8.iter().enumerate() {
            assert_eq!(nearest_index(&PALETTE_8, *color) as usize, index);
        }
        for (index, color) in PALETTE_16.iter().enumerate() {
            assert_eq!(nearest_index(&PALETTE_16, *color) as usize, index);
        }
    }

    #[test]
    fn test_nearest_color() {
        assert_eq!(nearest_index(&PALETTE_8, Color::BLACK), 1);
        assert_eq!(nearest_index(&PALETTE_8, Color::rgb(0x10, 0x10, 0xa0)), 4);
        assert_eq!(nearest_index(&PALETTE_16, Color::BLACK), 0);
    }

    #[test]
    fn test_ties_pick_lowest_index() {
        let palette = [Color::rgb(0, 0, 0), Color::rgb(2, 0, 0)];
        assert_eq!(nearest_index(&palette, Color::rgb(1, 0, 0)), 0);
    }

    #[test]
    fn test_quantize_image() {
        let mut image = RgbImage::from_pixel(2, 1, Rgb([255, 255, 255]));
        image.put_pixel(1, 0, Rgb([0xe0, 0x02, 0x10]));
        let indexed = quantize(&image, PaletteSize::Eight);
        assert_eq!(indexed.indices, vec![0, 5]);
        assert_eq!(indexed.rgb_table().len(), 24);
        assert_eq!(&indexed.rgb_table()[..3], &[0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_palette_sizes() {
        assert_eq!(PaletteSize::default().colors().len(), 8);
        assert_eq!(PaletteSize::Sixteen.colors().len(), 16);
    }
}

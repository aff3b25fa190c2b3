//! Raster stream encoders
//!
//! PNG and GIF are written palette-indexed with 8-bit indices; JPEG keeps
//! full color.

use std::borrow::Cow;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use super::palette::IndexedImage;
use super::RenderError;

/// Encode an indexed image as a PNG stream with a PLTE chunk
pub fn encode_png(image: &IndexedImage) -> Result<Vec<u8>, RenderError> {
    let encode_err = |e: png::EncodingError| RenderError::Encode {
        format: "png",
        reason: e.to_string(),
    };

    let mut buf = Vec::new();
    let mut encoder = png::Encoder::new(&mut buf, image.width, image.height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(image.rgb_table());

    let mut writer = encoder.write_header().map_err(encode_err)?;
    writer
        .write_image_data(&image.indices)
        .map_err(encode_err)?;
    writer.finish().map_err(encode_err)?;
    Ok(buf)
}

/// Encode an indexed image as a single-frame GIF with a global palette
pub fn encode_gif(image: &IndexedImage) -> Result<Vec<u8>, RenderError> {
    let too_large = || RenderError::DimensionsTooLarge {
        format: "gif",
        width: image.width,
        height: image.height,
    };
    let width = u16::try_from(image.width).map_err(|_| too_large())?;
    let height = u16::try_from(image.height).map_err(|_| too_large())?;

    let palette = image.rgb_table();
    let mut encoder =
        gif::Encoder::new(Vec::new(), width, height, &palette).map_err(|e| {
            RenderError::Encode {
                format: "gif",
                reason: e.to_string(),
            }
        })?;
    let frame = gif::Frame {
        width,
        height,
        buffer: Cow::Borrowed(image.indices.as_slice()),
        ..Default::default()
    };
    encoder
        .write_frame(&frame)
        .map_err(|e| RenderError::Encode {
            format: "gif",
            reason: e.to_string(),
        })?;
    encoder.into_inner().map_err(|e| RenderError::Encode {
        format: "gif",
        reason: e.to_string(),
    })
}

/// Encode a full-color image as baseline JPEG
///
/// `quality` is clamped into `1..=100`.
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, RenderError> {
    let quality = quality.clamp(1, 100);
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .encode_image(image)
        .map_err(|e| RenderError::Encode {
            format: "jpg",
            reason: e.to_string(),
        })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;
    use crate::renderer::palette::{quantize, PaletteSize};

    fn sample(width: u32, height: u32, size: PaletteSize) -> IndexedImage {
        let mut rgb = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
        rgb.put_pixel(0, 0, Rgb([0, 0, 0x91]));
        quantize(&rgb, size)
    }

    #[test]
    fn test_png_is_indexed_with_full_palette() {
        for (size, entries) in [(PaletteSize::Eight, 8), (PaletteSize::Sixteen, 16)] {
            let bytes = encode_png(&sample(5, 3, size)).unwrap();
            let decoder = png::Decoder::new(bytes.as_slice());
            let reader = decoder.read_info().unwrap();
            let info = reader.info();
            assert_eq!(info.color_type, png::ColorType::Indexed);
            assert_eq!(info.bit_depth, png::BitDepth::Eight);
            assert_eq!((info.width, info.height), (5, 3));
            assert_eq!(info.palette.as_ref().unwrap().len(), entries * 3);
        }
    }

    #[test]
    fn test_gif_carries_global_palette() {
        let bytes = encode_gif(&sample(4, 2, PaletteSize::Sixteen)).unwrap();
        assert!(bytes.starts_with(b"GIF89a"));
        assert_eq!(bytes.last(), Some(&0x3b));

        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::Indexed);
        let mut decoder = options.read_info(bytes.as_slice()).unwrap();
        assert_eq!(decoder.global_palette().unwrap().len(), 48);
        let frame = decoder.read_next_frame().unwrap().unwrap();
        assert_eq!((frame.width, frame.height), (4, 2));
    }

    #[test]
    fn test_gif_rejects_oversized_images() {
        let image = IndexedImage {
            width: 70_000,
            height: 1,
            indices: vec![],
            palette: PaletteSize::Eight.colors(),
        };
        assert!(matches!(
            encode_gif(&image),
            Err(RenderError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn test_jpeg_quality_is_clamped() {
        let rgb = RgbImage::from_pixel(8, 8, Rgb([0xe1, 0, 0x0f]));
        let low = encode_jpeg(&rgb, 0).unwrap();
        let high = encode_jpeg(&rgb, 250).unwrap();
        assert!(low.starts_with(&[0xff, 0xd8]));
        assert!(high.starts_with(&[0xff, 0xd8]));
        let decoded = image::load_from_memory(&high).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
    }
}

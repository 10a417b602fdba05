use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::tiff::TiffEncoder;
use image::{DynamicImage, ImageEncoder, RgbImage};
use std::io::Cursor;

use super::OutputFormat;

/// Quality used for JPEG output and for JPEG streams embedded in PDF pages
pub const JPEG_QUALITY: u8 = 90;

/// Convert an image to the format's bitmap representation and encode it to
/// the target byte format in memory. JPEG drops alpha (RGB8); PNG and TIFF
/// keep it (RGBA8).
pub fn encode_to_bytes(image: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Jpeg => jpeg_bytes(&image.to_rgb8()),
        OutputFormat::Png => {
            let rgba = image.to_rgba8();
            let mut buffer = Cursor::new(Vec::new());
            let encoder = PngEncoder::new_with_quality(
                &mut buffer,
                image::codecs::png::CompressionType::Default,
                image::codecs::png::FilterType::Adaptive,
            );
            encoder
                .write_image(
                    rgba.as_raw(),
                    rgba.width(),
                    rgba.height(),
                    image::ExtendedColorType::Rgba8,
                )
                .context("PNG encoding failed")?;
            Ok(buffer.into_inner())
        }
        OutputFormat::Tiff => {
            let rgba = image.to_rgba8();
            let mut buffer = Cursor::new(Vec::new());
            let encoder = TiffEncoder::new(&mut buffer);
            encoder
                .write_image(
                    rgba.as_raw(),
                    rgba.width(),
                    rgba.height(),
                    image::ExtendedColorType::Rgba8,
                )
                .context("TIFF encoding failed")?;
            Ok(buffer.into_inner())
        }
        OutputFormat::Pdf | OutputFormat::SinglePdf => {
            Err(anyhow::anyhow!("PDF output has no raster byte encoding"))
        }
    }
}

/// Encode an RGB bitmap as a JPEG byte stream
pub fn jpeg_bytes(bitmap: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
    encoder
        .encode_image(bitmap)
        .context("JPEG encoding failed")?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_encode_to_bytes_roundtrip_dimensions() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            48,
            24,
            image::Rgba([255, 0, 0, 255]),
        ));

        for format in [OutputFormat::Png, OutputFormat::Jpeg, OutputFormat::Tiff] {
            let bytes = encode_to_bytes(&source, format).unwrap();
            let reloaded = image::load_from_memory(&bytes).unwrap();
            assert_eq!((reloaded.width(), reloaded.height()), (48, 24));
        }
    }

    #[test]
    fn test_encode_to_bytes_rejects_pdf_variants() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, image::Rgb([0, 0, 0])));
        assert!(encode_to_bytes(&source, OutputFormat::Pdf).is_err());
        assert!(encode_to_bytes(&source, OutputFormat::SinglePdf).is_err());
    }

    #[test]
    fn test_jpeg_bytes_are_jpeg() {
        let bitmap = RgbImage::from_pixel(10, 10, image::Rgb([1, 2, 3]));
        let bytes = jpeg_bytes(&bitmap).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
    }
}

use std::borrow::Cow;
use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageResult};

use crate::encoders::common::write_icc_and_exif;
use crate::{image::Image, params::DEFAULT_JPEG_QUALITY, plan::Modifiers};

pub fn encode<W: Write>(image: &Image, writer: &mut W, modifiers: &Modifiers) -> ImageResult<()> {
    let quality = modifiers.quality.unwrap_or(DEFAULT_JPEG_QUALITY);
    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    write_icc_and_exif(&mut encoder, image);
    without_alpha(image.pixels.as_image()).write_with_encoder(encoder)
}

/// JPEG has no alpha channel, so it is dropped rather than failing the whole run.
fn without_alpha(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    match pixels {
        DynamicImage::ImageLumaA8(_) => Cow::Owned(DynamicImage::ImageLuma8(pixels.to_luma8())),
        DynamicImage::ImageRgba8(_) => Cow::Owned(DynamicImage::ImageRgb8(pixels.to_rgb8())),
        _ => Cow::Borrowed(pixels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::PixelBuffer;
    use image::{GrayImage, Luma};

    fn noisy() -> Image {
        let pixels = GrayImage::from_fn(64, 64, |x, y| Luma([((x * 7 + y * 13) % 256) as u8]));
        Image {
            format: None,
            icc: None,
            exif: None,
            pixels: PixelBuffer::from_image(DynamicImage::ImageLuma8(pixels)),
        }
    }

    #[test]
    fn test_quality_affects_size() {
        let image = noisy();
        let mut low = Vec::new();
        let mut high = Vec::new();
        encode(&image, &mut low, &Modifiers { quality: Some(10) }).unwrap();
        encode(&image, &mut high, &Modifiers { quality: Some(100) }).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn test_without_alpha() {
        let rgba = DynamicImage::new_rgba8(2, 2);
        assert_eq!(without_alpha(&rgba).color(), image::ColorType::Rgb8);
        let gray = DynamicImage::new_luma8(2, 2);
        assert!(matches!(without_alpha(&gray), Cow::Borrowed(_)));
    }
}

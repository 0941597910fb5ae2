use std::fmt::Display;

use image::{DynamicImage, GenericImageView as _};

/// Dimensions of a pixel buffer, in the (height, width, channels) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub height: u32,
    pub width: u32,
    pub channels: u8,
}

impl Shape {
    pub fn samples_per_row(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.channels)
    }
}

/// An 8-bit image with 1 to 4 interleaved channels.
///
/// Anything the codec hands us at a higher bit depth is brought down to 8 bits on construction,
/// so the sharpening arithmetic only ever has to deal with `u8` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer(DynamicImage);

impl PixelBuffer {
    pub fn from_image(image: DynamicImage) -> Self {
        let image = match image {
            DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageRgb8(_)
            | DynamicImage::ImageRgba8(_) => image,
            other => match (other.color().has_color(), other.color().has_alpha()) {
                (false, false) => DynamicImage::ImageLuma8(other.to_luma8()),
                (false, true) => DynamicImage::ImageLumaA8(other.to_luma_alpha8()),
                (true, false) => DynamicImage::ImageRgb8(other.to_rgb8()),
                (true, true) => DynamicImage::ImageRgba8(other.to_rgba8()),
            },
        };
        Self(image)
    }

    pub fn shape(&self) -> Shape {
        let (width, height) = self.0.dimensions();
        Shape {
            height,
            width,
            channels: self.0.color().channel_count(),
        }
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn channels(&self) -> u8 {
        self.0.color().channel_count()
    }

    /// Whether the last channel of every pixel is alpha
    pub fn has_alpha(&self) -> bool {
        self.0.color().has_alpha()
    }

    /// Samples in row-major order, channels interleaved.
    pub fn samples(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        match &mut self.0 {
            DynamicImage::ImageLuma8(im) => &mut **im,
            DynamicImage::ImageLumaA8(im) => &mut **im,
            DynamicImage::ImageRgb8(im) => &mut **im,
            DynamicImage::ImageRgba8(im) => &mut **im,
            // `from_image` never lets anything else in
            _ => unreachable!("pixel buffer holds a non-8-bit image"),
        }
    }

    pub fn as_image(&self) -> &DynamicImage {
        &self.0
    }

    pub fn into_image(self) -> DynamicImage {
        self.0
    }
}

impl From<DynamicImage> for PixelBuffer {
    fn from(image: DynamicImage) -> Self {
        Self::from_image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb, Rgba};

    #[test]
    fn test_shape_of_rgb() {
        let buffer = PixelBuffer::from_image(DynamicImage::new_rgb8(7, 3));
        assert_eq!(
            buffer.shape(),
            Shape {
                height: 3,
                width: 7,
                channels: 3
            }
        );
        assert_eq!(buffer.samples().len(), 7 * 3 * 3);
        assert_eq!(buffer.shape().to_string(), "3x7x3");
    }

    #[test]
    fn test_16_bit_is_normalized() {
        let wide = ImageBuffer::from_pixel(2, 2, Rgba([u16::MAX, 0, u16::MAX, u16::MAX]));
        let buffer = PixelBuffer::from_image(DynamicImage::ImageRgba16(wide));
        assert_eq!(buffer.channels(), 4);
        assert_eq!(&buffer.samples()[..4], &[255, 0, 255, 255]);

        let gray = ImageBuffer::from_pixel(2, 2, Luma([u16::MAX]));
        let buffer = PixelBuffer::from_image(DynamicImage::ImageLuma16(gray));
        assert_eq!(buffer.channels(), 1);
        assert!(buffer.samples().iter().all(|&s| s == 255));
    }

    #[test]
    fn test_samples_mut_writes_through() {
        let mut buffer =
            PixelBuffer::from_image(DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
                2,
                1,
                Rgb([1, 2, 3]),
            )));
        buffer.samples_mut()[5] = 42;
        assert_eq!(buffer.samples(), &[1, 2, 3, 1, 2, 42]);
        assert_eq!(buffer.into_image().to_rgb8().get_pixel(1, 0), &Rgb([1, 2, 42]));
    }

    #[test]
    fn test_empty_shape() {
        let buffer = PixelBuffer::from_image(DynamicImage::new_luma8(0, 5));
        assert!(buffer.shape().is_empty());
        assert!(buffer.samples().is_empty());
    }
}

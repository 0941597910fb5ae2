use std::io::Write;

use image::codecs::png::PngEncoder;
use image::ImageResult;

use crate::encoders::common::write_icc_and_exif;
use crate::image::Image;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> ImageResult<()> {
    let mut encoder = PngEncoder::new(writer);
    write_icc_and_exif(&mut encoder, image);
    image.pixels.as_image().write_with_encoder(encoder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::PixelBuffer;
    use image::{DynamicImage, ImageDecoder, LumaA, ImageBuffer};
    use std::io::Cursor;

    #[test]
    fn test_keeps_channel_layout() {
        let pixels = ImageBuffer::from_pixel(3, 2, LumaA([77u8, 200]));
        let image = Image {
            format: None,
            icc: None,
            exif: None,
            pixels: PixelBuffer::from_image(DynamicImage::ImageLumaA8(pixels)),
        };
        let mut bytes = Vec::new();
        encode(&image, &mut bytes).unwrap();

        let decoder = image::codecs::png::PngDecoder::new(Cursor::new(bytes)).unwrap();
        assert_eq!(decoder.color_type(), image::ColorType::La8);
        assert_eq!(decoder.dimensions(), (3, 2));
    }
}

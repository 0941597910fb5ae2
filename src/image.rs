use image::ImageFormat;

use crate::pixels::PixelBuffer;

/// Pixels plus whatever we carry over from the input file to the output file.
#[derive(Debug, Clone)]
pub struct Image {
    /// Container format the pixels were decoded from, if known
    pub format: Option<ImageFormat>,
    pub icc: Option<Vec<u8>>,
    /// Raw EXIF block. The orientation tag is reset once the pixels have been rotated upright.
    pub exif: Option<Vec<u8>>,
    pub pixels: PixelBuffer,
}

use std::path::Path;

use log::debug;

use crate::{
    decode::decode,
    error::SharpenError,
    image::Image,
    operations::{
        blur::{BlurFilter, GaussianBlur},
        unsharp::unsharp_mask,
    },
    params::SharpenParameters,
    pixels::PixelBuffer,
};

/// Decodes `image_path` and applies an unsharp mask with a Gaussian blur of `blur_sigma`.
///
/// Parameters are checked before the file is even opened. Nothing is written anywhere;
/// use [`crate::encode::encode`] to persist the result.
pub fn sharpen(
    image_path: impl AsRef<Path>,
    blur_sigma: f32,
    sharpen_amount: f32,
) -> Result<PixelBuffer, SharpenError> {
    let params = SharpenParameters::new(blur_sigma, sharpen_amount)?;
    let image = Sharpener::new().sharpen_file(image_path.as_ref(), &params)?;
    Ok(image.pixels)
}

/// Unsharp mask with a pluggable blur.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sharpener<B = GaussianBlur> {
    blur: B,
}

impl Sharpener {
    pub fn new() -> Self {
        Self { blur: GaussianBlur }
    }
}

impl<B: BlurFilter> Sharpener<B> {
    pub fn with_blur(blur: B) -> Self {
        Self { blur }
    }

    pub fn sharpen_pixels(
        &self,
        pixels: &PixelBuffer,
        params: &SharpenParameters,
    ) -> Result<PixelBuffer, SharpenError> {
        unsharp_mask(pixels, params, &self.blur)
    }

    /// Sharpens the pixels and keeps the rest of the image (format, ICC profile, EXIF) as is.
    pub fn sharpen_image(
        &self,
        image: &Image,
        params: &SharpenParameters,
    ) -> Result<Image, SharpenError> {
        Ok(Image {
            format: image.format,
            icc: image.icc.clone(),
            exif: image.exif.clone(),
            pixels: self.sharpen_pixels(&image.pixels, params)?,
        })
    }

    pub fn sharpen_file(
        &self,
        path: &Path,
        params: &SharpenParameters,
    ) -> Result<Image, SharpenError> {
        let image = decode(path)?;
        let sharpened = self.sharpen_image(&image, params)?;
        debug!("sharpened {}", path.display());
        Ok(sharpened)
    }
}

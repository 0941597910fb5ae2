use std::path::Path;

use image::{metadata::Orientation, DynamicImage, ImageDecoder, ImageReader};
use log::debug;

use crate::{error::SharpenError, image::Image, pixels::PixelBuffer};

/// Guesses the format from file contents and decodes the whole image into memory.
///
/// The file is closed before this function returns, on success and on failure alike.
pub fn decode(path: &Path) -> Result<Image, SharpenError> {
    let load_err = |e| SharpenError::load(path, e);

    let reader = ImageReader::open(path)
        .map_err(load_err)?
        .with_guessed_format()
        .map_err(load_err)?;
    let format = reader.format();
    if format.is_none() {
        return Err(SharpenError::load(path, "unrecognized image format"));
    }

    let mut decoder = reader.into_decoder().map_err(|e| SharpenError::load(path, e))?;
    // not every format can carry a profile, and a broken one is not worth failing over
    let icc = decoder.icc_profile().ok().flatten();
    let mut exif = decoder.exif_metadata().ok().flatten();
    // Pixels are stored as the camera saw them. Turn them upright and clear the tag,
    // otherwise viewers would rotate the output a second time.
    let orientation = match exif.as_mut() {
        Some(chunk) => Orientation::remove_from_exif_chunk(chunk),
        None => decoder.orientation().ok(),
    };
    let mut pixels =
        DynamicImage::from_decoder(decoder).map_err(|e| SharpenError::load(path, e))?;
    if let Some(orientation) = orientation {
        pixels.apply_orientation(orientation);
    }

    // A decoder that "succeeds" without producing any pixels is as good as a failed load.
    // Catch it here rather than letting it surface as a confusing error further down the pipeline.
    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(SharpenError::load(path, "image has no pixels"));
    }

    debug!(
        "decoded {} as {:?}, {}x{} {:?}",
        path.display(),
        format,
        pixels.width(),
        pixels.height(),
        pixels.color()
    );

    Ok(Image {
        format,
        icc,
        exif,
        pixels: PixelBuffer::from_image(pixels),
    })
}

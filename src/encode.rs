use std::{
    ffi::OsStr,
    io::{BufWriter, Seek, Write},
    path::{Path, PathBuf},
};

use image::{ImageFormat, ImageResult};
use log::debug;

use crate::{arg_parsers::Location, encoders, error::SharpenError, image::Image, plan::Modifiers};

/// Writes the image to `location` in a format derived from the output path.
///
/// The destination is never left half-written: the image is encoded into a temporary file
/// next to it, which then replaces the destination in a single rename.
pub fn encode(
    image: &Image,
    location: &Location,
    modifiers: &Modifiers,
) -> Result<(), SharpenError> {
    let format = choose_encoding_format(image, location)?;
    debug!("encoding {} as {format:?}", location.display());

    match location {
        Location::Path(path) => encode_to_path(image, path, format, modifiers),
        Location::Stdio => encode_to_stdout(image, format, modifiers),
    }
}

fn encode_to_path(
    image: &Image,
    path: &Path,
    format: ImageFormat,
    modifiers: &Modifiers,
) -> Result<(), SharpenError> {
    let write_err = |e: &dyn std::fmt::Display| SharpenError::write(path, e);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staging = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(&e))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(staging);
    write_image(image, &mut writer, format, modifiers).map_err(|e| write_err(&e))?;

    // Dropping the BufWriter would flush it too, but would not report errors
    let staging = writer.into_inner().map_err(|e| write_err(&e.error()))?;
    staging.as_file().sync_all().map_err(|e| write_err(&e))?;
    // `persist` overwrites an existing file at the destination
    staging.persist(path).map_err(|e| write_err(&e.error))?;
    Ok(())
}

fn encode_to_stdout(
    image: &Image,
    format: ImageFormat,
    modifiers: &Modifiers,
) -> Result<(), SharpenError> {
    let stdout_path = PathBuf::from("-");
    let write_err = |e: &dyn std::fmt::Display| SharpenError::write(&stdout_path, e);

    // Some of the encoders require Seek, which Stdout doesn't implement.
    // We write to a temporary file and then print out the content at the end.
    let file = tempfile::tempfile().map_err(|e| write_err(&e))?;
    let mut writer = BufWriter::new(file);
    write_image(image, &mut writer, format, modifiers).map_err(|e| write_err(&e))?;

    let mut file = writer.into_inner().map_err(|e| write_err(&e.error()))?;
    file.seek(std::io::SeekFrom::Start(0))
        .map_err(|e| write_err(&e))?;
    let mut stdout = std::io::stdout().lock();
    std::io::copy(&mut file, &mut stdout).map_err(|e| write_err(&e))?;
    stdout.flush().map_err(|e| write_err(&e))?;
    Ok(())
}

/// Encodes into any seekable writer. Shared by the file and stdout paths.
pub fn write_image<W: Write + Seek>(
    image: &Image,
    writer: &mut W,
    format: ImageFormat,
    modifiers: &Modifiers,
) -> ImageResult<()> {
    match format {
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(image, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(image, writer, modifiers),
        // TODO: carry the ICC profile and EXIF over for TIFF and WebP as well once `image` exposes it for them
        _ => image.pixels.as_image().write_to(writer, format),
    }
}

fn choose_encoding_format(
    image: &Image,
    location: &Location,
) -> Result<ImageFormat, SharpenError> {
    let format = match location {
        Location::Path(path) => ImageFormat::from_path(path).ok().or(image.format),
        // nothing to guess from, keep whatever the input was
        Location::Stdio => image.format,
    };
    let Some(format) = format else {
        let extension = match location {
            Location::Path(path) => path.extension().unwrap_or(OsStr::new("")),
            Location::Stdio => OsStr::new(""),
        };
        return Err(SharpenError::write(
            location.as_path(),
            format!(
                "no encoder for image format `{}'",
                extension.to_ascii_uppercase().to_string_lossy()
            ),
        ));
    };
    if !format.writing_enabled() {
        return Err(SharpenError::write(
            location.as_path(),
            format!("writing {format:?} images is not supported"),
        ));
    }
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::PixelBuffer;
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

    fn test_image(format: Option<ImageFormat>) -> Image {
        let pixels = RgbImage::from_fn(8, 6, |x, y| Rgb([(x * 30) as u8, (y * 40) as u8, 90]));
        Image {
            format,
            icc: None,
            exif: None,
            pixels: PixelBuffer::from_image(DynamicImage::ImageRgb8(pixels)),
        }
    }

    #[test]
    fn test_format_from_extension() {
        let image = test_image(Some(ImageFormat::Png));
        let location = Location::Path(PathBuf::from("out.jpg"));
        assert_eq!(
            choose_encoding_format(&image, &location).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_format_falls_back_to_input() {
        let image = test_image(Some(ImageFormat::Png));
        let location = Location::Path(PathBuf::from("no-extension"));
        assert_eq!(
            choose_encoding_format(&image, &location).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            choose_encoding_format(&image, &Location::Stdio).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_unknown_format() {
        let image = test_image(None);
        let location = Location::Path(PathBuf::from("out.unknownext"));
        let err = choose_encoding_format(&image, &location).unwrap_err();
        assert!(err.is_write_error());
        assert!(err.to_string().contains("UNKNOWNEXT"));
    }

    #[test]
    fn test_encode_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = test_image(None);
        encode(&image, &Location::Path(path.clone()), &Modifiers::default()).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!(&decoded, image.pixels.as_image());
        // nothing else is left behind in the directory
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_encode_jpeg_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let image = Image {
            format: None,
            icc: None,
            exif: None,
            pixels: PixelBuffer::from_image(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
                4,
                4,
                Rgba([10, 20, 30, 128]),
            ))),
        };
        encode(&image, &Location::Path(path.clone()), &Modifiers::default()).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 4));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does/not/exist/out.png");
        let err = encode(&test_image(None), &Location::Path(path.clone()), &Modifiers::default())
            .unwrap_err();
        assert!(err.is_write_error());
        assert!(!path.exists());
    }

    #[test]
    fn test_existing_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"old contents").unwrap();
        encode(&test_image(None), &Location::Path(path.clone()), &Modifiers::default()).unwrap();
        assert!(image::open(&path).is_ok());
    }
}

use std::{
    ffi::OsString,
    num::NonZeroU8,
    path::{Path, PathBuf},
};

use arbitrary::Unstructured;
use tempfile::TempDir;

/// Small RGB image built straight from fuzzer bytes
#[derive(Debug)]
pub struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgb_data: Vec<u8>,
}

impl StructuredImage {
    pub fn save_as_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        let img = self.to_rgb8();
        img.save_with_format(path, image::ImageFormat::Png)
    }

    pub fn to_rgb8(&self) -> image::RgbImage {
        let width = self.width.get() as u32;
        image::ImageBuffer::from_fn(width, self.height.get() as u32, |x, y| {
            let idx = (y * width + x) as usize * 3;
            image::Rgb([
                self.rgb_data[idx],
                self.rgb_data[idx + 1],
                self.rgb_data[idx + 2],
            ])
        })
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgb_data_len = width.get() as usize * height.get() as usize * 3;
        let rgb_data = unstructured.bytes(rgb_data_len)?;

        Ok(Self {
            width,
            height,
            rgb_data: rgb_data.to_vec(),
        })
    }
}

fn compute_visual_diff(ours_path: &Path, imagemagick_path: &Path) -> f64 {
    let ours = image::open(ours_path)
        .expect("could not open the file")
        .to_rgb8();
    let magick_image = image::open(imagemagick_path)
        .expect("could not open the file")
        .to_rgb8();

    let config = dssim::Dssim::new();

    let to_rgb = |img: &image::RgbImage| -> Vec<rgb::RGB<u8>> {
        img.pixels()
            .map(|p| rgb::RGB::from([p[0], p[1], p[2]]))
            .collect()
    };

    let ours_dssim = config
        .create_image_rgb(&to_rgb(&ours), ours.width() as usize, ours.height() as usize)
        .expect("failed to create dssim image from sharpen-text output");
    let magick_dssim = config
        .create_image_rgb(
            &to_rgb(&magick_image),
            magick_image.width() as usize,
            magick_image.height() as usize,
        )
        .expect("failed to create dssim image from ImageMagick output");

    let (dssim_score, _) = config.compare(&ours_dssim, &magick_dssim);
    dssim_score.into()
}

const DSSIM_TOLERANCE: f64 = 0.05;

/// Sharpens `input_path` with both sharpen-text and ImageMagick's `-unsharp 0x{sigma}+{amount}+0`,
/// which uses the same `original + amount * (original - blurred)` formula, and compares the results.
pub fn sharpen_and_compare(
    directory: &TempDir,
    input_path: &Path,
    sigma: f32,
    amount: f32,
) -> (PathBuf, PathBuf) {
    use image::GenericImageView as _;

    let ours_path = directory.path().join("sharpen_text_output.png");
    let imagemagick_output_path = directory.path().join("imagemagick_output.png");

    let plan = {
        let arguments: Vec<OsString> = vec![
            "target/release/sharpen-text".into(),
            "-sigma".into(),
            sigma.to_string().into(),
            "-amount".into(),
            amount.to_string().into(),
            input_path.as_os_str().to_os_string(),
            ours_path.as_os_str().to_os_string(),
        ];
        sharpen_text::args::parse_args(arguments).expect("must have succeeded")
    };
    plan.execute().expect("must have succeeded");

    let magick_status = std::process::Command::new("convert")
        .arg(input_path)
        .arg("-unsharp")
        .arg(format!("0x{sigma}+{amount}+0"))
        .arg(&imagemagick_output_path)
        .status()
        .expect("must have succeeded");

    if !magick_status.success() {
        panic!("imagemagick command failed");
    }

    let ours_dimensions = image::open(&ours_path)
        .expect("could not open the sharpen-text output file")
        .dimensions();
    let magick_dimensions = image::open(&imagemagick_output_path)
        .expect("could not open the ImageMagick output file")
        .dimensions();
    assert_eq!(ours_dimensions, magick_dimensions);

    let dssim_score = compute_visual_diff(&ours_path, &imagemagick_output_path);
    if dssim_score > DSSIM_TOLERANCE {
        panic!("High DSSIM score {dssim_score} for sigma {sigma} and amount {amount}");
    }

    (ours_path, imagemagick_output_path)
}

#![no_main]

use image::GenericImageView;
use libfuzzer_sys::fuzz_target;
use sharpen_text_fuzz::StructuredImage;

fuzz_target!(|input: (StructuredImage, u8, u8)| {
    let (image, sigma, amount) = input;
    // keep both in the range people actually use: sigma 0.1..=5.0, amount 0.0..=10.0
    let sigma = 0.1 + (sigma % 50) as f32 / 10.0;
    let amount = (amount % 101) as f32 / 10.0;

    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input_image.png");
    image
        .save_as_png(&input_path)
        .expect("failed to save image as PNG");

    let (ours_path, _) =
        sharpen_text_fuzz::sharpen_and_compare(&temp_directory, &input_path, sigma, amount);

    // Contract: same dimensions as the input
    let original = image.to_rgb8();
    let sharpened = image::open(&ours_path).expect("could not open the sharpen-text output file");
    assert_eq!(sharpened.dimensions(), original.dimensions());
    if amount == 0.0 {
        assert_eq!(sharpened.to_rgb8(), original);
    }
});

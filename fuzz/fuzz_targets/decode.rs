#![no_main]

use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must either sharpen cleanly or fail with a load error, never panic.
fuzz_target!(|data: &[u8]| {
    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input_image");
    std::fs::write(&input_path, data).expect("failed to write fuzz input");

    match sharpen_text::sharpen(&input_path, 1.0, 3.0) {
        Ok(pixels) => assert!(!pixels.shape().is_empty()),
        Err(e) => assert!(e.is_load_error(), "unexpected error: {e}"),
    }
});

use crate::error::SharpenError;

#[cfg(test)]
use crate::utils::arbitrary;
#[cfg(test)]
use quickcheck::Arbitrary;

/// Good for glyph strokes; values between 0.5 and 2.0 keep the enhancement on fine detail.
pub const DEFAULT_BLUR_SIGMA: f32 = 1.0;
/// Values between 2.5 and 5.0 work well for text.
pub const DEFAULT_SHARPEN_AMOUNT: f32 = 3.0;
pub const DEFAULT_OUTPUT_FILE: &str = "sharpened_output.jpg";
/// Same default as most JPEG writers that expose a quality knob.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;
/// Largest accepted blur sigma. Anything wider than this has long stopped acting on strokes
/// and only averages the page.
pub const MAX_BLUR_SIGMA: f32 = 100.0;

/// Validated unsharp mask parameters.
///
/// The fields are private so that the only way to get one is through [`SharpenParameters::new`]
/// (or `Default`), which means the sharpening code never sees a sigma of zero or a negative amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharpenParameters {
    blur_sigma: f32,
    amount: f32,
}

impl SharpenParameters {
    pub fn new(blur_sigma: f32, amount: f32) -> Result<Self, SharpenError> {
        // subnormals are positive but the Gaussian kernel cannot be built from them
        if !blur_sigma.is_normal() || blur_sigma < 0.0 {
            return Err(SharpenError::InvalidParameter(format!(
                "blur sigma must be a positive number, got {blur_sigma}"
            )));
        }
        if blur_sigma > MAX_BLUR_SIGMA {
            return Err(SharpenError::InvalidParameter(format!(
                "blur sigma must be at most {MAX_BLUR_SIGMA}, got {blur_sigma}"
            )));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(SharpenError::InvalidParameter(format!(
                "sharpen amount must be a non-negative number, got {amount}"
            )));
        }
        Ok(Self { blur_sigma, amount })
    }

    pub fn blur_sigma(&self) -> f32 {
        self.blur_sigma
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// Weight of the original image in the combination, `1 + amount`.
    pub fn original_weight(&self) -> f32 {
        1.0 + self.amount
    }

    /// Weight of the blurred image in the combination, `-amount`.
    pub fn blurred_weight(&self) -> f32 {
        -self.amount
    }
}

impl Default for SharpenParameters {
    fn default() -> Self {
        Self {
            blur_sigma: DEFAULT_BLUR_SIGMA,
            amount: DEFAULT_SHARPEN_AMOUNT,
        }
    }
}

#[cfg(test)]
impl Arbitrary for SharpenParameters {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // keep sigma small, the blur cost grows with the kernel size
        Self {
            blur_sigma: arbitrary::bounded_positive_float(g, 8.0) as f32,
            amount: arbitrary::bounded_non_negative_float(g, 100.0) as f32,
        }
    }
}

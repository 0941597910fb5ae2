use log::debug;
use rayon::prelude::*;

use crate::{
    error::SharpenError, operations::blur::BlurFilter, params::SharpenParameters,
    pixels::PixelBuffer,
};

/// Computes `src1 * alpha + src2 * beta + gamma` for every sample, saturating to `0..=255`.
///
/// Results are rounded to nearest with ties going to even, the way 8-bit saturating casts
/// usually behave in image processing libraries.
pub fn add_weighted(
    src1: &PixelBuffer,
    alpha: f32,
    src2: &PixelBuffer,
    beta: f32,
    gamma: f32,
) -> Result<PixelBuffer, SharpenError> {
    if src1.shape() != src2.shape() {
        return Err(SharpenError::ShapeMismatch {
            expected: src1.shape(),
            found: src2.shape(),
        });
    }

    let mut output = src1.clone();
    let row_len = src1.shape().samples_per_row();
    if src1.shape().is_empty() {
        return Ok(output);
    }

    // Pointwise, so rows can be processed in any order
    output
        .samples_mut()
        .par_chunks_mut(row_len)
        .zip(src1.samples().par_chunks(row_len))
        .zip(src2.samples().par_chunks(row_len))
        .for_each(|((out_row, row1), row2)| {
            for ((out, &a), &b) in out_row.iter_mut().zip(row1).zip(row2) {
                *out = saturate(a as f32 * alpha + b as f32 * beta + gamma);
            }
        });

    Ok(output)
}

fn saturate(value: f32) -> u8 {
    // `as` maps NaN to 0, the clamp handles everything else
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// `original + amount * (original - blurred)`, written as a weighted sum of the two images.
///
/// Only color is sharpened. Alpha is copied from the original, so antialiased glyph
/// edges on a transparent background do not grow halos in their coverage.
pub fn unsharp_mask(
    pixels: &PixelBuffer,
    params: &SharpenParameters,
    blur: &impl BlurFilter,
) -> Result<PixelBuffer, SharpenError> {
    debug!(
        "blurring {} buffer with sigma {}",
        pixels.shape(),
        params.blur_sigma()
    );
    let blurred = blur.blur(pixels, params.blur_sigma());

    debug!(
        "combining with weights {} and {}",
        params.original_weight(),
        params.blurred_weight()
    );
    let mut sharpened = add_weighted(
        pixels,
        params.original_weight(),
        &blurred,
        params.blurred_weight(),
        0.0,
    )?;
    if pixels.has_alpha() {
        restore_alpha(&mut sharpened, pixels);
    }
    Ok(sharpened)
}

/// Copies the alpha samples of `source` over those of `target`. Both have the same shape.
fn restore_alpha(target: &mut PixelBuffer, source: &PixelBuffer) {
    let channels = source.channels() as usize;
    target
        .samples_mut()
        .par_chunks_exact_mut(channels)
        .zip(source.samples().par_chunks_exact(channels))
        .for_each(|(out, original)| out[channels - 1] = original[channels - 1]);
}

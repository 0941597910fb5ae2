use log::debug;

use crate::pixels::PixelBuffer;

/// Produces the low-pass copy that the unsharp mask subtracts from the original.
///
/// Implementations must return a buffer with the same shape as their input.
/// The combiner checks this anyway and refuses to work on mismatched buffers.
pub trait BlurFilter {
    fn blur(&self, pixels: &PixelBuffer, sigma: f32) -> PixelBuffer;
}

/// True Gaussian blur. The kernel extent is derived from sigma by `image`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GaussianBlur;

impl BlurFilter for GaussianBlur {
    fn blur(&self, pixels: &PixelBuffer, sigma: f32) -> PixelBuffer {
        let sigma = effective_sigma(pixels, sigma);
        PixelBuffer::from_image(pixels.as_image().blur(sigma))
    }
}

/// Box blur approximation of a Gaussian. Much faster for large sigmas, slightly less accurate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FastBlur;

impl BlurFilter for FastBlur {
    fn blur(&self, pixels: &PixelBuffer, sigma: f32) -> PixelBuffer {
        let sigma = effective_sigma(pixels, sigma);
        PixelBuffer::from_image(pixels.as_image().fast_blur(sigma))
    }
}

/// Caps sigma so that the kernel never spans much more than twice the longer side of the image.
///
/// The kernel `image` builds grows linearly with sigma. Past the image size a wider kernel
/// gives practically the same average and only costs time.
fn effective_sigma(pixels: &PixelBuffer, sigma: f32) -> f32 {
    let longest_side = pixels.width().max(pixels.height()) as f32;
    let cap = 0.8 + 0.3 * longest_side;
    if sigma > cap {
        debug!(
            "blur sigma {sigma} exceeds what a {} buffer can use, capping at {cap}",
            pixels.shape()
        );
        cap
    } else {
        sigma
    }
}

/// Blur selectable from the command line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BlurMethod {
    #[default]
    Gaussian,
    Fast,
}

impl BlurFilter for BlurMethod {
    fn blur(&self, pixels: &PixelBuffer, sigma: f32) -> PixelBuffer {
        match self {
            BlurMethod::Gaussian => GaussianBlur.blur(pixels, sigma),
            BlurMethod::Fast => FastBlur.blur(pixels, sigma),
        }
    }
}

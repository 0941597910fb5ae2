//! Unsharp-mask sharpening for raster images, tuned by default for scanned text.
//!
//! The core operation is [`sharpen`]: decode a file, blur it, and combine the original
//! with the blurred copy as `original * (1 + amount) - blurred * amount`, saturated to 8 bits.
//! [`Sharpener`] exposes the same pipeline over in-memory buffers and with a pluggable blur.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod arg_parse_err;
pub mod arg_parsers;
pub mod args;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod image;
pub mod init;
pub mod operations;
pub mod params;
pub mod pixels;
pub mod plan;
pub mod preview;
mod sharpener;
#[cfg(test)]
mod utils;

pub use error::SharpenError;
pub use operations::blur::{BlurFilter, BlurMethod, FastBlur, GaussianBlur};
pub use params::SharpenParameters;
pub use pixels::{PixelBuffer, Shape};
pub use sharpener::{sharpen, Sharpener};

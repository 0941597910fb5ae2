//! Format-specific encoders for the formats where the generic `image` path
//! would lose something (quality settings, ICC profiles).

mod common;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;

pub mod blur;
pub mod unsharp;

pub use unsharp::{add_weighted, unsharp_mask};

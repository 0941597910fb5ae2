use std::fmt::{Debug, Display};
use std::path::{Path, PathBuf};

use crate::pixels::Shape;

pub enum SharpenError {
    /// The input could not be read, was not a recognized image, or decoded to nothing.
    ImageLoad { path: PathBuf, reason: String },
    /// Sigma, amount or quality outside of the accepted range.
    InvalidParameter(String),
    /// The output could not be created, encoded or persisted.
    ImageWrite { path: PathBuf, reason: String },
    /// The original and blurred buffers disagree on height, width or channel count.
    ShapeMismatch { expected: Shape, found: Shape },
    /// Malformed command line.
    InvalidArgument(String),
}

impl SharpenError {
    pub fn load(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::ImageLoad {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn write(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::ImageWrite {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::ImageLoad { .. })
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }

    pub fn is_write_error(&self) -> bool {
        matches!(self, Self::ImageWrite { .. })
    }
}

impl Display for SharpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageLoad { path, reason } => {
                write!(f, "could not load image at {}: {reason}", path.display())
            }
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::ImageWrite { path, reason } => {
                write!(f, "unable to write image '{}': {reason}", path.display())
            }
            Self::ShapeMismatch { expected, found } => {
                write!(f, "pixel buffer shape mismatch: expected {expected}, found {found}")
            }
            Self::InvalidArgument(msg) => f.write_str(msg),
        }
    }
}

impl Debug for SharpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // route through Display so that `main() -> Result` style reporting stays readable
        f.debug_tuple("SharpenError")
            .field(&self.to_string())
            .finish()
    }
}

impl std::error::Error for SharpenError {}

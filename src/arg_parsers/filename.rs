use std::{
    ffi::OsStr,
    fmt::Display,
    path::{Path, PathBuf},
};

use crate::params::DEFAULT_OUTPUT_FILE;

/// Where the result goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Path(PathBuf),
    /// `-` on the command line
    Stdio,
}

impl Location {
    pub fn from_arg(arg: &OsStr) -> Self {
        if arg == OsStr::new("-") {
            Self::Stdio
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    /// Path used in messages; stdout is shown as `-`
    pub fn as_path(&self) -> &Path {
        match self {
            Self::Path(path) => path,
            Self::Stdio => Path::new("-"),
        }
    }

    pub fn display(&self) -> impl Display + '_ {
        self.as_path().display()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::Path(PathBuf::from(DEFAULT_OUTPUT_FILE))
    }
}

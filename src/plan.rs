use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use log::info;

use crate::arg_parse_err::ArgParseErr;
use crate::arg_parsers::{parse_numeric_arg, Location};
use crate::args::Arg;
use crate::encode;
use crate::error::SharpenError;
use crate::operations::blur::BlurMethod;
use crate::params::{SharpenParameters, DEFAULT_BLUR_SIGMA, DEFAULT_SHARPEN_AMOUNT};
use crate::sharpener::Sharpener;

/// Everything one run of the command-line tool is going to do
#[derive(Debug)]
pub struct ExecutionPlan {
    input_file: Option<PathBuf>,
    output_file: Location,
    blur_sigma: f32,
    amount: f32,
    blur_method: BlurMethod,
    preview: bool,
    modifiers: Modifiers,
}

impl Default for ExecutionPlan {
    fn default() -> Self {
        Self {
            input_file: None,
            output_file: Location::default(),
            blur_sigma: DEFAULT_BLUR_SIGMA,
            amount: DEFAULT_SHARPEN_AMOUNT,
            blur_method: BlurMethod::default(),
            preview: false,
            modifiers: Modifiers::default(),
        }
    }
}

impl ExecutionPlan {
    pub fn apply_arg(&mut self, arg: Arg, value: Option<&OsStr>) -> Result<(), SharpenError> {
        let arg_string: &'static str = arg.into();
        if arg.needs_value() != value.is_some() {
            return Err(SharpenError::InvalidArgument(format!(
                "option `-{arg_string}' requires a value"
            )));
        };

        self.apply_arg_inner(arg, value)
            .map_err(|arg_err| arg_err.into_sharpen_error(arg_string, value.unwrap_or_default()))
    }

    /// Currently this can only fail due to argument parsing.
    /// Split into its own function due to lack of try{} blocks on stable Rust.
    fn apply_arg_inner(&mut self, arg: Arg, value: Option<&OsStr>) -> Result<(), ArgParseErr> {
        let value = value.unwrap_or_default();
        match arg {
            Arg::Amount => self.amount = parse_numeric_arg(value)?,
            Arg::FastBlur => self.blur_method = BlurMethod::Fast,
            Arg::Preview => self.preview = true,
            Arg::Quality => {
                let quality = parse_numeric_arg(value).map_err(|_| {
                    ArgParseErr::with_msg(format!(
                        "expected a whole number between 1 and 100, got `{}'",
                        value.to_string_lossy()
                    ))
                })?;
                self.modifiers.quality = Some(quality);
            }
            Arg::Sigma => self.blur_sigma = parse_numeric_arg(value)?,
        };

        Ok(())
    }

    pub fn set_input_file(&mut self, file: PathBuf) {
        self.input_file = Some(file);
    }

    pub fn set_output_file(&mut self, file: Location) {
        self.output_file = file;
    }

    pub fn input_file(&self) -> Option<&Path> {
        self.input_file.as_deref()
    }

    pub fn output_file(&self) -> &Location {
        &self.output_file
    }

    pub fn blur_method(&self) -> BlurMethod {
        self.blur_method
    }

    pub fn preview(&self) -> bool {
        self.preview
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn parameters(&self) -> Result<SharpenParameters, SharpenError> {
        SharpenParameters::new(self.blur_sigma, self.amount)
    }

    /// Checks every numeric setting without touching any file
    pub fn validate(&self) -> Result<(), SharpenError> {
        self.parameters()?;
        self.modifiers.validate()
    }

    /// Decodes, sharpens and encodes. The output is only touched once the whole image is ready.
    pub fn execute(&self) -> Result<(), SharpenError> {
        let params = self.parameters()?;
        self.modifiers.validate()?;
        let Some(input_file) = self.input_file() else {
            return Err(SharpenError::InvalidArgument("no input image given".into()));
        };

        info!(
            "sharpening {} with sigma {} and amount {}",
            input_file.display(),
            params.blur_sigma(),
            params.amount()
        );
        let image = Sharpener::with_blur(self.blur_method).sharpen_file(input_file, &params)?;
        encode::encode(&image, &self.output_file, &self.modifiers)
    }
}

/// Settings that affect encoding only
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    pub quality: Option<u8>,
}

impl Modifiers {
    pub fn validate(&self) -> Result<(), SharpenError> {
        match self.quality {
            Some(quality) if !(1..=100).contains(&quality) => Err(SharpenError::InvalidParameter(
                format!("quality must be between 1 and 100, got {quality}"),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, Luma};

    #[test]
    fn test_execute_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        DynamicImage::ImageLuma8(GrayImage::from_fn(12, 12, |x, _| {
            Luma([if x < 6 { 40 } else { 210 }])
        }))
        .save(&input)
        .unwrap();

        let mut plan = ExecutionPlan::default();
        plan.set_input_file(input);
        plan.set_output_file(Location::Path(output.clone()));
        plan.execute().unwrap();

        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (12, 12));
    }

    #[test]
    fn test_failed_load_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.jpg");

        let mut plan = ExecutionPlan::default();
        plan.set_input_file(dir.path().join("missing.jpg"));
        plan.set_output_file(Location::Path(output.clone()));
        let err = plan.execute().unwrap_err();

        assert!(err.is_load_error());
        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_execute_without_input() {
        assert!(ExecutionPlan::default().execute().is_err());
    }

    #[test]
    fn test_quality_range() {
        assert!(Modifiers { quality: None }.validate().is_ok());
        assert!(Modifiers { quality: Some(1) }.validate().is_ok());
        assert!(Modifiers { quality: Some(100) }.validate().is_ok());
        assert!(Modifiers { quality: Some(0) }
            .validate()
            .unwrap_err()
            .is_invalid_parameter());
        assert!(Modifiers { quality: Some(101) }.validate().is_err());
    }
}

//! Command-line argument parsing.
//!
//! Options follow the single-dash convention of the classic image tools (`-sigma 1.5`),
//! so the parser is hand-rolled around a `strum`-derived list of the options we accept.

use std::ffi::{OsStr, OsString};

use crate::{arg_parsers::Location, error::SharpenError, plan::ExecutionPlan};

use strum::{EnumString, IntoStaticStr, VariantArray};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Arg {
    Amount,
    FastBlur,
    Preview,
    Quality,
    Sigma,
}

impl Arg {
    pub fn needs_value(&self) -> bool {
        match self {
            Arg::Amount => true,
            Arg::FastBlur => false,
            Arg::Preview => false,
            Arg::Quality => true,
            Arg::Sigma => true,
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::Amount => "sharpening strength, 0 disables it (default 3.0)",
            Arg::FastBlur => "approximate the Gaussian blur with box blurs",
            Arg::Preview => "open the original and the result in an image viewer",
            Arg::Quality => "JPEG compression quality, 1 to 100 (default 95)",
            Arg::Sigma => "standard deviation of the Gaussian blur (default 1.0)",
        }
    }
}

pub fn parse_args(args: Vec<OsString>) -> Result<ExecutionPlan, SharpenError> {
    let mut plan = ExecutionPlan::default();
    let mut positional: Vec<OsString> = Vec::new();

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if is_option(&raw_arg) {
            let string_arg = arg_name(&raw_arg)?;
            let arg = Arg::try_from(string_arg.as_str()).map_err(|_| {
                SharpenError::InvalidArgument(format!("unrecognized option `-{string_arg}'"))
            })?;
            if arg.needs_value() {
                // taken verbatim, so `-amount -1` reaches the range check instead of being an option
                let value = iter.next();
                plan.apply_arg(arg, value.as_deref())?;
            } else {
                plan.apply_arg(arg, None)?;
            }
        } else {
            positional.push(raw_arg);
        }
    }

    let mut positional = positional.into_iter();
    match positional.next() {
        Some(input) => plan.set_input_file(input.into()),
        None => return Err(SharpenError::InvalidArgument("no input image given".into())),
    }
    if let Some(output) = positional.next() {
        plan.set_output_file(Location::from_arg(&output));
    }
    if let Some(extra) = positional.next() {
        return Err(SharpenError::InvalidArgument(format!(
            "unexpected argument `{}': only one input and one output image are supported",
            extra.to_string_lossy()
        )));
    }

    // surface out-of-range values before any work is done
    plan.validate()?;
    Ok(plan)
}

/// Checks if the argument looks like `-name`. A lone `-` is the stdout filename.
fn is_option(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-'
}

/// Strips the leading `-` (or `--`) and returns the option name
fn arg_name(raw_arg: &OsStr) -> Result<String, SharpenError> {
    let string = raw_arg.to_str().ok_or_else(|| {
        SharpenError::InvalidArgument(format!(
            "unrecognized option `{}'",
            raw_arg.to_string_lossy()
        ))
    })?;
    let name = string.strip_prefix('-').unwrap_or(string);
    let name = name.strip_prefix('-').unwrap_or(name);
    Ok(name.to_owned())
}

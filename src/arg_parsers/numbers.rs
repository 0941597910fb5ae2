use std::{ffi::OsStr, str::FromStr};

use crate::arg_parse_err::ArgParseErr;

/// Parses an option value such as the `1.5` in `-sigma 1.5`.
///
/// Surrounding whitespace is ignored, since it tends to sneak in from shell scripts.
/// Values that are not valid UTF-8 are rejected with the raw value echoed back to the user.
pub fn parse_numeric_arg<T>(value: &OsStr) -> Result<T, ArgParseErr>
where
    T: FromStr,
    ArgParseErr: From<T::Err>,
{
    let string = value.to_str().ok_or_else(ArgParseErr::new)?;
    Ok(strip_and_parse_number(string)?)
}

/// Trims whitespace and parses the rest as `T`, returning the parser's own error on failure.
pub fn strip_and_parse_number<T: FromStr>(input: &str) -> Result<T, T::Err> {
    input.trim().parse::<T>()
}

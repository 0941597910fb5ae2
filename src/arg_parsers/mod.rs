//! Parsers for the values that follow command-line options

mod filename;
pub use filename::*;
pub mod numbers;
pub use numbers::parse_numeric_arg;

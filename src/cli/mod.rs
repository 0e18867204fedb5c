//! Command-line interface module.

mod args;
pub mod generate;
pub mod scan;

pub use args::{Cli, Commands, GenerateArgs, ScanArgs};

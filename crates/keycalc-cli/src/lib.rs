//! keycalc CLI library
//!
//! Terminal front end for the keycalc calculator: evaluate expressions,
//! replay keypad presses, run an interactive session.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, FormatArg, PressArgs};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{DisplayReport, Printer};
pub use runner::Runner;

//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{CliConfig, ColorChoice, OutputFormat, Verbosity};

/// keycalc: pocket calculator with a left-to-right evaluator
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the runtime configuration from global flags
    #[must_use]
    pub fn config(&self) -> CliConfig {
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Debug,
            }
        };

        CliConfig::new()
            .with_verbosity(verbosity)
            .with_color(self.color.into())
            .with_format(self.format.into())
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an expression, e.g. "2+3*4" or "50%+10"
    Eval(EvalArgs),

    /// Press keypad buttons on a fresh calculator
    Press(PressArgs),

    /// Interactive session reading buttons from stdin
    Repl,

    /// Show the keypad layout
    Keypad,
}

/// Arguments for `eval`
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression as it would appear on the display
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Arguments for `press`
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Button labels or ids, e.g. 7 + 3 = or btn-7 btn-plus
    #[arg(required = true, num_args = 1..)]
    pub buttons: Vec<String>,

    /// Print the display after every press
    #[arg(long)]
    pub trace: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

//! Command execution
//!
//! Every command writes results to the writer it is handed, which keeps
//! the commands testable without a terminal.

use std::io::{BufRead, Write};

use keycalc::core::{evaluate, format_number, CalcError};
use keycalc::widget::{Calculator, Phase, ERROR_TEXT};

use crate::commands::{Commands, EvalArgs, PressArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{DisplayReport, Printer};

/// Runs CLI commands against a configuration
#[derive(Debug, Clone)]
pub struct Runner {
    config: CliConfig,
    printer: Printer,
}

impl Runner {
    /// Create a runner
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        let printer = Printer::new(&config);
        Self { config, printer }
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Dispatches a parsed command
    pub fn run<R: BufRead, W: Write>(
        &self,
        command: &Commands,
        input: R,
        out: &mut W,
    ) -> CliResult<()> {
        match command {
            Commands::Eval(args) => self.eval(args, out),
            Commands::Press(args) => self.press(args, out),
            Commands::Repl => self.repl(input, out),
            Commands::Keypad => self.keypad(out),
        }
    }

    /// `keycalc eval`: one expression, failure is an error exit
    pub fn eval<W: Write>(&self, args: &EvalArgs, out: &mut W) -> CliResult<()> {
        let outcome = evaluate(&args.expression);
        let report = DisplayReport {
            input: args.expression.clone(),
            display: outcome.map_or_else(|_| ERROR_TEXT.to_string(), format_number),
            phase: if outcome.is_ok() {
                Phase::ResultShown
            } else {
                Phase::ErrorShown
            },
            error: outcome.err().map(|e| e.to_string()),
        };
        if !self.config.verbosity.is_quiet() {
            writeln!(out, "{}", self.printer.report(&report)?)?;
        }
        outcome.map(|_| ()).map_err(CliError::from)
    }

    /// `keycalc press`: replay buttons on a fresh calculator
    pub fn press<W: Write>(&self, args: &PressArgs, out: &mut W) -> CliResult<()> {
        let mut calc = Calculator::new();
        let mut error = None;
        let quiet = self.config.verbosity.is_quiet();

        for name in &args.buttons {
            error = press_named(&mut calc, name, error)?;
            if args.trace && !quiet {
                let report = DisplayReport::capture(name.as_str(), &calc, error);
                writeln!(out, "{}", self.printer.trace(&report)?)?;
            }
        }

        if !args.trace && !quiet {
            let report = DisplayReport::capture(args.buttons.join(" "), &calc, error);
            writeln!(out, "{}", self.printer.report(&report)?)?;
        }
        Ok(())
    }

    /// `keycalc repl`: one calculator for the whole session, one line of
    /// buttons at a time
    pub fn repl<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> CliResult<()> {
        let mut calc = Calculator::new();
        let mut error = None;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "quit" | "exit") {
                break;
            }

            for name in line.split_whitespace() {
                match press_named(&mut calc, name, error) {
                    Ok(next) => error = next,
                    Err(e) => {
                        tracing::warn!(button = name, "rest of line skipped");
                        writeln!(out, "{e}")?;
                        break;
                    }
                }
            }

            if !self.config.verbosity.is_quiet() {
                let report = DisplayReport::capture(line, &calc, error);
                writeln!(out, "{}", self.printer.trace(&report)?)?;
            }
        }

        tracing::debug!(display = calc.display(), "session ended");
        Ok(())
    }

    /// `keycalc keypad`
    pub fn keypad<W: Write>(&self, out: &mut W) -> CliResult<()> {
        if self.config.verbosity.is_quiet() {
            return Ok(());
        }
        let calc = Calculator::new();
        writeln!(out, "{}", self.printer.keypad(calc.keypad())?)?;
        Ok(())
    }
}

/// Presses one named button. Returns the failure that the display is now
/// showing, if any.
fn press_named(
    calc: &mut Calculator,
    name: &str,
    previous: Option<CalcError>,
) -> CliResult<Option<CalcError>> {
    let message = calc
        .keypad()
        .find_by_label(name)
        .map(|b| b.message)
        .ok_or_else(|| CliError::unknown_button(name))?;

    let error = match calc.send(message) {
        Some(outcome) => outcome.err(),
        None => previous,
    };
    Ok(error.filter(|_| calc.phase() == Phase::ErrorShown))
}

//! Output formatting

use console::style;
use keycalc::core::CalcError;
use keycalc::widget::{Calculator, Keypad, Phase};
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;

/// What the display shows after some input, as reported to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayReport {
    /// What was entered
    pub input: String,
    /// Display text afterwards
    pub display: String,
    /// Display phase afterwards
    pub phase: Phase,
    /// Typed failure, when the last evaluation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DisplayReport {
    /// Snapshot of a calculator after `input` was applied
    #[must_use]
    pub fn capture(input: impl Into<String>, calc: &Calculator, error: Option<CalcError>) -> Self {
        Self {
            input: input.into(),
            display: calc.display().to_string(),
            phase: calc.phase(),
            error: error.map(|e| e.to_string()),
        }
    }
}

/// Renders reports according to the configured format and color choice
#[derive(Debug, Clone)]
pub struct Printer {
    format: OutputFormat,
    use_color: bool,
}

impl Printer {
    /// Create a printer for the given configuration
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            format: config.format,
            use_color: config.color.should_color(),
        }
    }

    /// Renders a report as one line
    pub fn report(&self, report: &DisplayReport) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(report)?),
            OutputFormat::Text => Ok(self.styled_display(report)),
        }
    }

    /// Renders a trace line: the input and the display it produced
    pub fn trace(&self, report: &DisplayReport) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => self.report(report),
            OutputFormat::Text => Ok(format!(
                "{}  {}",
                style(format!("{:>6}", report.input))
                    .dim()
                    .force_styling(self.use_color),
                self.styled_display(report)
            )),
        }
    }

    fn styled_display(&self, report: &DisplayReport) -> String {
        let text = &report.display;
        let styled = match report.phase {
            Phase::ResultShown => style(text).green().bold(),
            Phase::ErrorShown => style(text).red().bold(),
            Phase::Empty | Phase::Entering => return text.clone(),
        };
        styled.force_styling(self.use_color).to_string()
    }

    /// Renders the keypad as a grid, or its JSON layout
    pub fn keypad(&self, keypad: &Keypad) -> CliResult<String> {
        if self.format == OutputFormat::Json {
            return Ok(keypad.to_json()?);
        }

        let (rows, _) = keypad.dimensions();
        let lines: Vec<String> = (0..rows)
            .filter_map(|row| keypad.row(row))
            .map(|buttons| {
                buttons
                    .iter()
                    .map(|b| format!("[{:^5}]", b.label))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    fn plain(format: OutputFormat) -> Printer {
        Printer::new(
            &CliConfig::new()
                .with_color(ColorChoice::Never)
                .with_format(format),
        )
    }

    fn report_for(labels: &[&str]) -> DisplayReport {
        let mut calc = Calculator::new();
        for label in labels {
            calc.press_label(label);
        }
        DisplayReport::capture(labels.join(" "), &calc, None)
    }

    #[test]
    fn test_text_report() {
        let printer = plain(OutputFormat::Text);
        let report = report_for(&["6", "*", "7", "="]);
        assert_eq!(printer.report(&report).unwrap(), "42");
    }

    #[test]
    fn test_json_report() {
        let printer = plain(OutputFormat::Json);
        let report = report_for(&["6", "*", "7", "="]);
        let line = printer.report(&report).unwrap();
        assert!(line.contains("\"display\":\"42\""));
        assert!(line.contains("\"phase\":\"ResultShown\""));
        assert!(!line.contains("error"));
    }

    #[test]
    fn test_json_report_with_error() {
        let printer = plain(OutputFormat::Json);
        let mut report = report_for(&["1", "/", "0", "="]);
        report.error = Some(CalcError::DivisionByZero.to_string());
        let line = printer.report(&report).unwrap();
        assert!(line.contains("\"error\":\"Division by zero\""));
    }

    #[test]
    fn test_trace_line() {
        let printer = plain(OutputFormat::Text);
        let report = report_for(&["7"]);
        let line = printer.trace(&report).unwrap();
        assert!(line.trim_start().starts_with('7'));
        assert!(line.ends_with("  7"));
    }

    #[test]
    fn test_keypad_grid() {
        let printer = plain(OutputFormat::Text);
        let grid = printer.keypad(&Keypad::new()).unwrap();
        let lines: Vec<_> = grid.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("AC"));
        assert!(lines[0].contains("MOD"));
        assert!(lines[4].contains('='));
    }

    #[test]
    fn test_keypad_json() {
        let printer = plain(OutputFormat::Json);
        let json = printer.keypad(&Keypad::new()).unwrap();
        assert!(json.starts_with('['));
    }
}

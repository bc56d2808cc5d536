//! Renders results the way a browser prints a double

/// Formats a result for the display.
///
/// Shortest round-trip digits, no trailing `.0`, exponent form with an
/// explicit sign outside `[1e-6, 1e21)`, and `NaN`/`Infinity` spelled out.
/// Whatever this returns is fed back to the tokenizer when the user keeps
/// typing after a result.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if n == 0.0 {
        // covers -0
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }

    let exponential = format!("{n:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

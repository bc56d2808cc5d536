//! Keypad layout and input mapping
//!
//! Layout:
//! ```text
//! [ AC ] [ ↵ ] [ MOD ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9   ] [ × ]
//! [ 4  ] [ 5 ] [ 6   ] [ - ]
//! [ 1  ] [ 2 ] [ 3   ] [ + ]
//! [ %  ] [ 0 ] [ .   ] [ = ]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Operator;
use crate::widget::{Key, Message};

/// Visual role of a button, as CSS classes on the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonStyle {
    /// Digits and the digit-like `%` and `.`
    Number,
    /// Arithmetic operators
    Symbol,
    /// Control buttons
    Action,
    /// Control buttons with a muted label
    ActionDull,
    /// The equals button
    SymbolAction,
}

impl ButtonStyle {
    /// CSS classes for the button element
    #[must_use]
    pub const fn classes(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Symbol => "symbol",
            Self::Action => "action",
            Self::ActionDull => "action dull",
            Self::SymbolAction => "symbol action",
        }
    }
}

/// One button on the keypad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// DOM element id
    pub id: String,
    /// Text printed on the button
    pub label: String,
    /// What pressing it sends to the display
    pub message: Message,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Visual role
    pub style: ButtonStyle,
}

impl Button {
    /// Creates a button, deriving id, label and style from its message
    #[must_use]
    pub fn new(message: Message, row: usize, col: usize) -> Self {
        let (id, label, style) = match message {
            Message::Press(Key::Digit(d)) => {
                (format!("btn-{d}"), d.to_string(), ButtonStyle::Number)
            }
            Message::Press(Key::Decimal) => ("btn-decimal".into(), ".".into(), ButtonStyle::Number),
            Message::Press(Key::Percent) => ("btn-percent".into(), "%".into(), ButtonStyle::Number),
            Message::Press(Key::Operator(op)) => {
                let style = if op == Operator::Modulo {
                    ButtonStyle::ActionDull
                } else {
                    ButtonStyle::Symbol
                };
                (format!("btn-{}", op_name(op)), op_label(op).into(), style)
            }
            Message::Equals => ("btn-equals".into(), "=".into(), ButtonStyle::SymbolAction),
            Message::Clear => ("btn-clear".into(), "AC".into(), ButtonStyle::ActionDull),
            Message::Delete => ("btn-delete".into(), "↵".into(), ButtonStyle::Action),
        };
        Self {
            id,
            label,
            message,
            row,
            col,
            style,
        }
    }
}

/// Name used in element ids
const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
        Operator::Modulo => "mod",
    }
}

const fn op_label(op: Operator) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Subtract => "-",
        Operator::Multiply => "×",
        Operator::Divide => "÷",
        Operator::Modulo => "MOD",
    }
}

/// The fixed calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<Button>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard 5x4 keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = |d| Message::Press(Key::Digit(d));
        let op = |op| Message::Press(Key::Operator(op));
        let layout = [
            [
                Message::Clear,
                Message::Delete,
                op(Operator::Modulo),
                op(Operator::Divide),
            ],
            [digit(7), digit(8), digit(9), op(Operator::Multiply)],
            [digit(4), digit(5), digit(6), op(Operator::Subtract)],
            [digit(1), digit(2), digit(3), op(Operator::Add)],
            [
                Message::Press(Key::Percent),
                digit(0),
                Message::Press(Key::Decimal),
                Message::Equals,
            ],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, messages)| {
                messages
                    .iter()
                    .enumerate()
                    .map(move |(col, message)| Button::new(*message, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons, row-major
    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Buttons of one row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Button]> {
        let start = row.checked_mul(self.cols)?;
        self.buttons.get(start..start + self.cols)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&Button> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by what a person would type to name it.
    ///
    /// Accepts the printed label (case-insensitive), the element id, the
    /// ASCII operator, and a few words for the control buttons.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&Button> {
        let wanted = label.trim();
        if let Some(button) = self
            .buttons
            .iter()
            .find(|b| b.label.eq_ignore_ascii_case(wanted) || b.id == wanted)
        {
            return Some(button);
        }

        let message = match wanted.to_ascii_lowercase().as_str() {
            "c" | "clear" => Message::Clear,
            "del" | "delete" | "back" | "backspace" => Message::Delete,
            "*" | "x" => Message::Press(Key::Operator(Operator::Multiply)),
            "/" => Message::Press(Key::Operator(Operator::Divide)),
            _ => return None,
        };
        self.buttons.iter().find(|b| b.message == message)
    }

    /// Processes a click on an element id
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Message> {
        self.find_by_id(element_id).map(|b| b.message)
    }

    /// Maps a keyboard key (DOM `KeyboardEvent.key` naming) to a message
    #[must_use]
    pub fn key_to_message(key: &str) -> Option<Message> {
        let message = match key {
            "=" | "Enter" => Message::Equals,
            "Escape" | "c" | "C" => Message::Clear,
            "Backspace" | "Delete" => Message::Delete,
            "." => Message::Press(Key::Decimal),
            "%" => Message::Press(Key::Percent),
            "+" => Message::Press(Key::Operator(Operator::Add)),
            "-" => Message::Press(Key::Operator(Operator::Subtract)),
            "*" => Message::Press(Key::Operator(Operator::Multiply)),
            "/" => Message::Press(Key::Operator(Operator::Divide)),
            "m" | "M" => Message::Press(Key::Operator(Operator::Modulo)),
            _ => {
                let mut chars = key.chars();
                let digit = chars.next()?.to_digit(10)?;
                if chars.next().is_some() {
                    return None;
                }
                Message::Press(Key::Digit(digit as u8))
            }
        };
        Some(message)
    }

    /// Serializes the layout for a host page to render
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.buttons)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ===== Button tests =====

    #[test]
    fn test_button_digit() {
        let btn = Button::new(Message::Press(Key::Digit(5)), 2, 1);
        assert_eq!(btn.id, "btn-5");
        assert_eq!(btn.label, "5");
        assert_eq!(btn.style, ButtonStyle::Number);
    }

    #[test]
    fn test_button_operators() {
        let ids: Vec<_> = Operator::ALL
            .into_iter()
            .map(|op| Button::new(Message::Press(Key::Operator(op)), 0, 0).id)
            .collect();
        assert_eq!(
            ids,
            vec!["btn-plus", "btn-minus", "btn-times", "btn-divide", "btn-mod"]
        );
    }

    #[test]
    fn test_button_controls() {
        assert_eq!(Button::new(Message::Clear, 0, 0).label, "AC");
        assert_eq!(Button::new(Message::Delete, 0, 1).id, "btn-delete");
        assert_eq!(
            Button::new(Message::Equals, 4, 3).style,
            ButtonStyle::SymbolAction
        );
    }

    #[test]
    fn test_style_classes() {
        assert_eq!(ButtonStyle::ActionDull.classes(), "action dull");
        assert_eq!(ButtonStyle::SymbolAction.classes(), "symbol action");
    }

    // ===== Layout tests =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 20);
    }

    #[test]
    fn test_keypad_positions_match_grid() {
        let keypad = Keypad::new();
        for button in keypad.buttons() {
            let at = keypad.get_button_at(button.row, button.col).unwrap();
            assert_eq!(at, button);
        }
    }

    #[test]
    fn test_keypad_corners() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().message, Message::Clear);
        assert_eq!(keypad.get_button_at(4, 3).unwrap().message, Message::Equals);
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_keypad_row() {
        let keypad = Keypad::new();
        let labels: Vec<_> = keypad
            .row(1)
            .unwrap()
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, vec!["7", "8", "9", "×"]);
        assert!(keypad.row(5).is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let keypad = Keypad::new();
        let mut ids: Vec<_> = keypad.buttons().iter().map(|b| &b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), keypad.button_count());
    }

    // ===== Lookup tests =====

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.handle_click("btn-mod"),
            Some(Message::Press(Key::Operator(Operator::Modulo)))
        );
        assert_eq!(keypad.handle_click("btn-nope"), None);
    }

    #[test]
    fn test_find_by_label() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_by_label("7").unwrap().id, "btn-7");
        assert_eq!(keypad.find_by_label("mod").unwrap().id, "btn-mod");
        assert_eq!(keypad.find_by_label("ac").unwrap().id, "btn-clear");
        assert_eq!(keypad.find_by_label("C").unwrap().id, "btn-clear");
        assert_eq!(keypad.find_by_label("DEL").unwrap().id, "btn-delete");
        assert_eq!(keypad.find_by_label("*").unwrap().id, "btn-times");
        assert_eq!(keypad.find_by_label("÷").unwrap().id, "btn-divide");
        assert_eq!(keypad.find_by_label("/").unwrap().id, "btn-divide");
        assert_eq!(keypad.find_by_label("btn-equals").unwrap().label, "=");
        assert!(keypad.find_by_label("^").is_none());
    }

    #[test]
    fn test_key_to_message() {
        assert_eq!(
            Keypad::key_to_message("7"),
            Some(Message::Press(Key::Digit(7)))
        );
        assert_eq!(Keypad::key_to_message("Enter"), Some(Message::Equals));
        assert_eq!(Keypad::key_to_message("Escape"), Some(Message::Clear));
        assert_eq!(Keypad::key_to_message("Backspace"), Some(Message::Delete));
        assert_eq!(
            Keypad::key_to_message("m"),
            Some(Message::Press(Key::Operator(Operator::Modulo)))
        );
        assert_eq!(Keypad::key_to_message("77"), None);
        assert_eq!(Keypad::key_to_message("^"), None);
        assert_eq!(Keypad::key_to_message(""), None);
    }

    #[test]
    fn test_to_json() {
        let json = Keypad::new().to_json().unwrap();
        assert!(json.contains("\"id\":\"btn-mod\""));
        let parsed: Vec<Button> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 20);
    }
}

//! Input messages dispatched to the display reducer

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// Payload of a button that types into the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Percent marker
    Percent,
    /// Binary operator
    Operator(Operator),
}

impl Key {
    /// Returns true for keys that start a fresh expression after a result.
    ///
    /// Only digits qualify; `.` and `%` are appended like operators.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Digit(_))
    }

    /// Text appended to the display
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Percent => "%".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
        }
    }
}

/// Everything the display can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Message {
    /// Type a key into the display
    Press(Key),
    /// Evaluate the display
    Equals,
    /// Wipe the display
    Clear,
    /// Remove the last character, or wipe a shown result
    Delete,
}

impl From<Key> for Message {
    fn from(key: Key) -> Self {
        Self::Press(key)
    }
}

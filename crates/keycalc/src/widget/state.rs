//! Display state and its reducer
//!
//! ```text
//!            input              =  ok
//!   Empty ---------> Entering ---------> ResultShown
//!                     |  ^                  |
//!                     |  +--- any input ----+
//!                  =  | err
//!                     v
//!                 ErrorShown --- digit ---> Entering
//!                     (operators, '.', '%' ignored)
//!
//!   any state --- Clear ---> Empty
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{evaluate, format_number, CalcResult};
use crate::widget::{Key, Message};

/// Display text shown after any failed evaluation
pub const ERROR_TEXT: &str = "Error";

/// Where the display is in its lifecycle, derived from [`DisplayState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing typed yet
    Empty,
    /// An expression is being typed
    Entering,
    /// A successful evaluation is shown
    ResultShown,
    /// A failed evaluation is shown
    ErrorShown,
}

/// The single piece of mutable state behind the widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    text: String,
    is_result: bool,
}

impl DisplayState {
    /// Creates an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the display shows a finalized evaluation
    #[must_use]
    pub const fn is_result(&self) -> bool {
        self.is_result
    }

    /// Lifecycle phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.is_result, self.text.as_str()) {
            (true, ERROR_TEXT) => Phase::ErrorShown,
            (true, _) => Phase::ResultShown,
            (false, "") => Phase::Empty,
            (false, _) => Phase::Entering,
        }
    }

    /// Applies a message. `Equals` also returns the evaluation outcome.
    pub fn update(&mut self, message: Message) -> Option<CalcResult<f64>> {
        let before = self.phase();
        let outcome = match message {
            Message::Press(key) => {
                self.append_value(key);
                None
            }
            Message::Equals => Some(self.calculate()),
            Message::Clear => {
                self.clear_all();
                None
            }
            Message::Delete => {
                self.delete_last();
                None
            }
        };
        tracing::debug!(
            ?message,
            ?before,
            after = ?self.phase(),
            text = %self.text,
            "display updated"
        );
        outcome
    }

    /// Types a key.
    ///
    /// A digit after a result starts over. Anything else after a result is
    /// appended to it, except on the error text, where it is dropped.
    pub fn append_value(&mut self, key: Key) {
        if self.is_result && key.is_numeric() {
            self.text = key.text();
            self.is_result = false;
            return;
        }
        if !key.is_numeric() && self.text == ERROR_TEXT {
            tracing::debug!(?key, "ignored non-numeric input on error display");
            return;
        }
        self.text.push_str(&key.text());
        self.is_result = false;
    }

    /// Evaluates the display and replaces it with the result, or with
    /// [`ERROR_TEXT`] on failure. Either way the display is then a result.
    pub fn calculate(&mut self) -> CalcResult<f64> {
        let outcome = evaluate(&self.text);
        self.text = match outcome {
            Ok(value) => format_number(value),
            Err(_) => ERROR_TEXT.to_string(),
        };
        self.is_result = true;
        outcome
    }

    /// Resets to the empty display
    pub fn clear_all(&mut self) {
        self.text.clear();
        self.is_result = false;
    }

    /// Removes the last character, or clears everything when a result is
    /// shown
    pub fn delete_last(&mut self) {
        if self.is_result {
            self.clear_all();
        } else {
            self.text.pop();
        }
    }
}

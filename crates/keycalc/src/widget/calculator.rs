//! The widget: one display, one keypad

use crate::core::CalcResult;
use crate::widget::{DisplayState, Keypad, Message, Phase};

/// A calculator instance as mounted on a page or a terminal
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: DisplayState,
    keypad: Keypad,
}

impl Calculator {
    /// Creates a calculator with an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends a message straight to the display
    pub fn send(&mut self, message: Message) -> Option<CalcResult<f64>> {
        self.state.update(message)
    }

    /// Presses the button with the given element id.
    /// Returns false when no such button exists.
    pub fn press_button(&mut self, element_id: &str) -> bool {
        self.dispatch(self.keypad.handle_click(element_id), element_id)
    }

    /// Presses the button named by a label or alias
    pub fn press_label(&mut self, label: &str) -> bool {
        let message = self.keypad.find_by_label(label).map(|b| b.message);
        self.dispatch(message, label)
    }

    /// Handles a keyboard key
    pub fn press_key(&mut self, key: &str) -> bool {
        self.dispatch(Keypad::key_to_message(key), key)
    }

    fn dispatch(&mut self, message: Option<Message>, input: &str) -> bool {
        match message {
            Some(message) => {
                self.state.update(message);
                true
            }
            None => {
                tracing::debug!(input, "unrecognised input");
                false
            }
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.text()
    }

    /// Whether the display shows a finalized evaluation
    #[must_use]
    pub const fn is_result(&self) -> bool {
        self.state.is_result()
    }

    /// Lifecycle phase of the display
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The display state
    #[must_use]
    pub const fn state(&self) -> &DisplayState {
        &self.state
    }

    /// The keypad
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}

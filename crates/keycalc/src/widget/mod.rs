//! Input side of the widget: messages, the display reducer, the keypad
//!
//! Button presses never touch the display directly. Each becomes a
//! [`Message`], and [`DisplayState::update`] is the only place that
//! changes what is shown.

mod calculator;
mod keypad;
mod message;
mod state;

pub use calculator::Calculator;
pub use keypad::{Button, ButtonStyle, Keypad};
pub use message::{Key, Message};
pub use state::{DisplayState, Phase, ERROR_TEXT};

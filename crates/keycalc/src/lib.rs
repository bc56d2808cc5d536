//! keycalc - pocket calculator widget
//!
//! A single-screen calculator: a display string, a 5x4 keypad, and an
//! evaluator that folds the display strictly left to right.
//!
//! - `+ - * /` and `MOD` all share one precedence level
//! - `50%` reads as `0.5`, alone or mid-expression
//! - a failed evaluation shows `Error` until a digit or a clear
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! assert_eq!(evaluate("2+3*4"), Ok(20.0));
//!
//! let mut calc = Calculator::new();
//! for id in ["btn-5", "btn-plus", "btn-minus", "btn-3", "btn-equals"] {
//!     calc.press_button(id);
//! }
//! assert_eq!(calc.display(), "2");
//! assert_eq!(calc.phase(), Phase::ResultShown);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod widget;

#[cfg(feature = "wasm")]
pub mod browser;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, format_number, CalcError, CalcResult, Operator, Token, Tokenizer,
    };
    pub use crate::widget::{
        Button, ButtonStyle, Calculator, DisplayState, Key, Keypad, Message, Phase, ERROR_TEXT,
    };

    #[cfg(feature = "wasm")]
    pub use crate::browser::BrowserCalculator;
}

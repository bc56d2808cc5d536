//! Browser bindings
//!
//! The host page owns the markup. It renders the keypad from
//! [`BrowserCalculator::keypad_json`], forwards clicks and key presses, and
//! repaints the display from [`BrowserCalculator::display`].

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::widget::{Calculator, Phase};

/// Calculator exported to JavaScript
#[derive(Debug, Default)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator with an empty display
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    /// Whether the display shows a finalized evaluation
    #[wasm_bindgen(getter, js_name = isResult)]
    pub fn is_result(&self) -> bool {
        self.calculator.is_result()
    }

    /// Display phase as a lowercase word, for styling hooks
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        match self.calculator.phase() {
            Phase::Empty => "empty",
            Phase::Entering => "entering",
            Phase::ResultShown => "result",
            Phase::ErrorShown => "error",
        }
        .to_string()
    }

    /// Handles a click on a keypad element id
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, element_id: &str) -> bool {
        self.calculator.press_button(element_id)
    }

    /// Handles a `KeyboardEvent.key`
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.calculator.press_key(key)
    }

    /// Clears the display
    pub fn clear(&mut self) {
        self.calculator.send(crate::widget::Message::Clear);
    }

    /// Keypad layout as JSON
    #[wasm_bindgen(js_name = keypadJson)]
    pub fn keypad_json(&self) -> Result<String, JsValue> {
        self.calculator
            .keypad()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console::log_1(&"keycalc initialized".into());
}

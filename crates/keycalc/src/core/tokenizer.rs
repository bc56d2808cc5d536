//! Lexer for the calculator display string
//!
//! The display is scanned left to right. At every position the tokenizer
//! tries, in order:
//!
//! ```text
//! number   ::= DIGIT+ ('.' DIGIT+)? '%'?
//! operator ::= '+' | '-' | '*' | '/' | "MOD"
//! ```
//!
//! A position where neither matches is skipped one character at a time, so
//! stray input (a dangling `.`, a lone `%`, half of a deleted `MOD`) simply
//! never becomes a token.

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// Token produced by [`Tokenizer`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Numeric literal, `percent` set when it carried a trailing `%`
    Number {
        /// Literal value before any percent adjustment
        value: f64,
        /// Whether the literal ended in `%`
        percent: bool,
    },
    /// Binary operator
    Operator(Operator),
}

impl Token {
    /// Creates a plain number token
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number {
            value,
            percent: false,
        }
    }

    /// Creates a percent number token (`value%`)
    #[must_use]
    pub const fn percent(value: f64) -> Self {
        Self::Number {
            value,
            percent: true,
        }
    }

    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number { .. })
    }

    /// Numeric value of the token in operand position.
    ///
    /// Percent literals are divided by 100. An operator has no numeric
    /// value and reads as NaN, which is what an expression that starts
    /// with an operator folds from.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Number { value, percent } if percent => value / 100.0,
            Self::Number { value, .. } => value,
            Self::Operator(_) => f64::NAN,
        }
    }
}

/// Tokenizer over a display string
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the whole input
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        Tokenizer::new(input).collect()
    }

    /// Returns the input not yet scanned
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.input[self.pos..]
    }

    fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn digit_run_at(&self, start: usize) -> usize {
        self.input[start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count()
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        self.pos += self.digit_run_at(start);

        // Fraction only counts when at least one digit follows the dot
        if self.input[self.pos..].starts_with('.') {
            let fraction = self.digit_run_at(self.pos + 1);
            if fraction > 0 {
                self.pos += 1 + fraction;
            }
        }

        let literal = &self.input[start..self.pos];
        // Digits with an optional digit-only fraction always parse
        let value = literal.parse::<f64>().unwrap_or(f64::NAN);

        let percent = self.input[self.pos..].starts_with('%');
        if percent {
            self.pos += 1;
        }

        Token::Number { value, percent }
    }

    fn read_operator(&mut self) -> Option<Token> {
        let rest = self.remaining();
        let op = if rest.starts_with(Operator::Modulo.symbol()) {
            Operator::Modulo
        } else {
            Operator::from_symbol(rest.get(..1)?)?
        };
        self.pos += op.symbol().len();
        Some(Token::Operator(op))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                let token = self.read_number();
                tracing::trace!(?token, "number");
                return Some(token);
            }
            if let Some(token) = self.read_operator() {
                tracing::trace!(?token, "operator");
                return Some(token);
            }
            self.advance();
        }
        None
    }
}

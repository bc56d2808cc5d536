//! Core evaluation: tokens, operators, the left-to-right fold and result
//! formatting.
//!
//! Nothing in here holds state. Every call re-derives its tokens from the
//! display string it is handed.

pub mod evaluator;
pub mod format;
mod operations;
pub mod tokenizer;

pub use evaluator::evaluate;
pub use format::format_number;
pub use operations::Operator;
pub use tokenizer::{Token, Tokenizer};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Ways an expression can fail to evaluate.
///
/// The display collapses all of them into the literal `Error`; the variant
/// is only visible to callers of [`evaluate`] and to logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression produced no tokens at all
    #[error("Invalid expression")]
    InvalidExpression,
    /// An operand followed another operand with no operator between them
    #[error("Missing operator")]
    MissingOperator,
    /// Divisor was exactly zero
    #[error("Division by zero")]
    DivisionByZero,
}

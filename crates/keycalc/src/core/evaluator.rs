//! Left-to-right evaluator
//!
//! There is no precedence and no grouping: `2+3*4` is `(2+3)*4`. The fold
//! keeps a single pending operator, and a later operator replaces an
//! earlier one that never received its operand, so `5+-3` is `5-3`.

use crate::core::{CalcError, CalcResult, Operator, Token, Tokenizer};

/// Evaluates a display string.
///
/// A leading `-` is read as `0-...` so that a negative first operand can be
/// typed with the minus key.
///
/// # Examples
///
/// ```
/// use keycalc::core::{evaluate, CalcError};
///
/// assert_eq!(evaluate("2+3*4"), Ok(20.0));
/// assert_eq!(evaluate("50%"), Ok(0.5));
/// assert_eq!(evaluate("5/0"), Err(CalcError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> CalcResult<f64> {
    let tokens = if expression.starts_with('-') {
        Tokenizer::tokenize(&format!("0{expression}"))
    } else {
        Tokenizer::tokenize(expression)
    };
    let result = evaluate_tokens(&tokens);
    tracing::debug!(expression, tokens = tokens.len(), ?result, "evaluated");
    result
}

/// Folds an already tokenized expression
pub fn evaluate_tokens(tokens: &[Token]) -> CalcResult<f64> {
    let (first, rest) = tokens.split_first().ok_or(CalcError::InvalidExpression)?;

    let mut result = first.value();
    let mut pending: Option<Operator> = None;

    for token in rest {
        match *token {
            Token::Operator(op) => pending = Some(op),
            Token::Number { .. } => {
                let op = pending.take().ok_or(CalcError::MissingOperator)?;
                result = op.apply(result, token.value())?;
            }
        }
    }

    Ok(result)
}

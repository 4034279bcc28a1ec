//! Syntax errors reported while tokenising and parsing tag expressions.

use thiserror::Error;

use crate::token::TokenType;

/// Failure to parse a tag expression.
///
/// Every variant keeps the original expression text verbatim, and the
/// rendered message always takes the form
/// `Tag expression "<expr>" could not be parsed because of syntax error: <detail>.`
///
/// # Examples
/// ```
/// use tag_expressions::{TagExpressionError, parse};
///
/// let err = parse("a and").err();
/// assert!(matches!(err, Some(TagExpressionError::Expected { .. })));
/// assert_eq!(
///     err.map(|e| e.to_string()).as_deref(),
///     Some(r#"Tag expression "a and" could not be parsed because of syntax error: Expected operand."#),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagExpressionError {
    /// A token of the wrong kind appeared, e.g. two operands in a row.
    #[error(
        "Tag expression \"{expression}\" could not be parsed because of syntax error: Expected {expected}."
    )]
    Expected {
        /// The rejected expression text.
        expression: String,
        /// The kind of token the grammar required at that point.
        expected: TokenType,
    },
    /// A `)` appeared without a matching `(`.
    #[error(
        "Tag expression \"{expression}\" could not be parsed because of syntax error: Unmatched )."
    )]
    UnmatchedClose {
        /// The rejected expression text.
        expression: String,
    },
    /// A `(` was never closed.
    #[error(
        "Tag expression \"{expression}\" could not be parsed because of syntax error: Unmatched (."
    )]
    UnmatchedOpen {
        /// The rejected expression text.
        expression: String,
    },
    /// A `\` was followed by something other than `(`, `)`, `\` or whitespace.
    #[error(
        "Tag expression \"{expression}\" could not be parsed because of syntax error: Illegal escape before \"{character}\"."
    )]
    IllegalEscape {
        /// The rejected expression text.
        expression: String,
        /// The character following the backslash.
        character: char,
    },
}

impl TagExpressionError {
    /// The expression text that failed to parse.
    #[must_use]
    pub fn expression(&self) -> &str {
        match self {
            Self::Expected { expression, .. }
            | Self::UnmatchedClose { expression }
            | Self::UnmatchedOpen { expression }
            | Self::IllegalEscape { expression, .. } => expression,
        }
    }
}

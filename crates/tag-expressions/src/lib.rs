//! Boolean tag expressions for test selection.
//!
//! A tag expression combines opaque tags with `and`, `or`, `not`, and
//! parentheses, e.g. `@fast and not (@wip or @flaky)`. [`parse`] turns the
//! text into an [`Expression`] tree which can be evaluated against the tags
//! attached to a test and rendered back into a fully parenthesised canonical
//! form.
//!
//! # Examples
//! ```
//! let expr = tag_expressions::parse("@fast and not @slow")?;
//! assert!(expr.evaluate(&["@fast"]));
//! assert!(!expr.evaluate(&["@fast", "@slow"]));
//! assert_eq!(expr.to_string(), "( @fast and not ( @slow ) )");
//! # Ok::<(), tag_expressions::TagExpressionError>(())
//! ```

mod ast;
mod errors;
mod lexer;
mod parser;
mod token;

pub use ast::{Expression, Literals};
pub use errors::TagExpressionError;
pub use lexer::tokenize;
pub use parser::parse;
pub use token::{Associativity, Token, TokenKind, TokenType};

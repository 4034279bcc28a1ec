//! Expression tree produced by the parser.
//!
//! Nodes are immutable once built and each child is owned by exactly one
//! parent. Evaluation is a pure function of the tree and the supplied tags.
//!
//! The [`Display`](fmt::Display) implementation renders the canonical form:
//! every binary operation is wrapped in `( … )`, every negation is written
//! `not ( … )`, and literal characters with special meaning are escaped.
//! Parsing the canonical form yields the same canonical form again.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::errors::TagExpressionError;

/// A parsed tag expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A tag, matched by exact string equality.
    Literal(String),
    /// Both sides must hold.
    And(Box<Expression>, Box<Expression>),
    /// Either side must hold.
    Or(Box<Expression>, Box<Expression>),
    /// The inner expression must not hold.
    Not(Box<Expression>),
    /// Always holds; the result of parsing an empty expression.
    True,
}

impl Expression {
    /// Build a literal node.
    ///
    /// The value is taken verbatim. An empty value, or one spelled exactly
    /// `and`, `or`, or `not`, has no escaped spelling, so its canonical form
    /// does not parse back into the same tree.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Build a conjunction of `left` and `right`.
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Build a disjunction of `left` and `right`.
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// Build the negation of `inner`.
    #[must_use]
    pub fn not(inner: Self) -> Self {
        Self::Not(Box::new(inner))
    }

    /// Decide whether the expression holds for the given tags.
    ///
    /// # Examples
    /// ```
    /// let expr = tag_expressions::parse("a and not b")?;
    /// assert!(expr.evaluate(&["a"]));
    /// assert!(!expr.evaluate(&["a", "b"]));
    /// assert!(!expr.evaluate::<&str>(&[]));
    /// # Ok::<(), tag_expressions::TagExpressionError>(())
    /// ```
    #[must_use]
    pub fn evaluate<S: AsRef<str>>(&self, variables: &[S]) -> bool {
        match self {
            Self::Literal(value) => variables.iter().any(|v| v.as_ref() == value.as_str()),
            Self::And(left, right) => left.evaluate(variables) && right.evaluate(variables),
            Self::Or(left, right) => left.evaluate(variables) || right.evaluate(variables),
            Self::Not(inner) => !inner.evaluate(variables),
            Self::True => true,
        }
    }

    /// Iterate over the literal tags in the order they appear.
    #[must_use]
    pub fn literals(&self) -> Literals<'_> {
        Literals { stack: vec![self] }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write_escaped(f, value),
            Self::And(left, right) => write!(f, "( {left} and {right} )"),
            Self::Or(left, right) => write!(f, "( {left} or {right} )"),
            Self::Not(inner) => write!(f, "not ( {inner} )"),
            Self::True => f.write_str("true"),
        }
    }
}

impl FromStr for Expression {
    type Err = TagExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for ch in value.chars() {
        if matches!(ch, '\\' | '(' | ')') || ch.is_whitespace() {
            f.write_char('\\')?;
        }
        f.write_char(ch)?;
    }
    Ok(())
}

/// Iterator over the literal tags of an [`Expression`].
///
/// Created by [`Expression::literals`].
#[derive(Clone, Debug)]
pub struct Literals<'a> {
    stack: Vec<&'a Expression>,
}

impl<'a> Iterator for Literals<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Expression::Literal(value) => return Some(value.as_str()),
                Expression::And(left, right) | Expression::Or(left, right) => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
                Expression::Not(inner) => self.stack.push(inner),
                Expression::True => {}
            }
        }
        None
    }
}

//! Lexical tokens and the operator table driving the parser.

use std::fmt;

/// A single lexical unit of a tag expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What the token means to the parser.
    pub kind: TokenKind,
    /// The token text with escapes already resolved.
    pub text: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Classify a completed word: the keywords `and`, `or`, and `not` become
    /// operators, everything else is a literal tag.
    pub(crate) fn word(text: String) -> Self {
        let kind = match text.as_str() {
            "not" => TokenKind::Not,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            _ => TokenKind::Literal,
        };
        Self { kind, text }
    }
}

/// Kinds of token recognised by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unary negation, `not`.
    Not,
    /// Binary conjunction, `and`.
    And,
    /// Binary disjunction, `or`.
    Or,
    /// Opening parenthesis.
    LeftParen,
    /// Closing parenthesis.
    RightParen,
    /// Any other word; matched verbatim against the evaluated tags.
    Literal,
}

/// Operator associativity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` groups as `(a op b) op c`.
    Left,
    /// `op op a` groups as `op (op a)`.
    Right,
}

impl TokenKind {
    /// Binding strength used by the operator-precedence parser.
    ///
    /// Parentheses carry negative values so they never take part in a
    /// reduction triggered by an incoming operator. Literals have no
    /// precedence.
    #[must_use]
    pub fn precedence(self) -> Option<i8> {
        match self {
            Self::LeftParen => Some(-2),
            Self::RightParen => Some(-1),
            Self::Or => Some(0),
            Self::And => Some(1),
            Self::Not => Some(2),
            Self::Literal => None,
        }
    }

    /// Associativity of an operator, or `None` for parentheses and literals.
    #[must_use]
    pub fn associativity(self) -> Option<Associativity> {
        match self {
            Self::Or | Self::And => Some(Associativity::Left),
            Self::Not => Some(Associativity::Right),
            Self::LeftParen | Self::RightParen | Self::Literal => None,
        }
    }

    /// Whether this kind is one of `not`, `and`, or `or`.
    #[must_use]
    pub fn is_operator(self) -> bool {
        self.associativity().is_some()
    }

    /// Whether this kind is one of the binary operators `and` and `or`.
    #[must_use]
    pub fn is_binary(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

/// The grammatical role the parser expects from the next token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenType {
    /// A tag, `not`, or `(`.
    Operand,
    /// A binary operator or `)`.
    Operator,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Operand => "operand",
            Self::Operator => "operator",
        })
    }
}

//! Operator-precedence parser building [`Expression`] trees.
//!
//! The parser runs the shunting-yard algorithm over the token stream with an
//! operand stack of finished subtrees and an operator stack of pending
//! operators and open parentheses. A cursor records whether the grammar
//! expects an operand (a tag, `not`, or `(`) or an operator (`and`, `or`, or
//! `)`) next; any token of the other kind is a syntax error.
//!
//! `not` binds tighter than `and`, which binds tighter than `or`. Binary
//! operators associate to the left, so `a or b and c` parses as
//! `( a or ( b and c ) )` and `a and b and c` as `( ( a and b ) and c )`.

use crate::ast::Expression;
use crate::errors::TagExpressionError;
use crate::lexer::tokenize;
use crate::token::{Associativity, Token, TokenKind, TokenType};

/// Parse a tag expression.
///
/// An empty (or all-whitespace) expression parses to [`Expression::True`].
///
/// # Errors
///
/// Returns a [`TagExpressionError`] describing the first syntax error found.
/// No partial tree is produced.
///
/// # Examples
/// ```
/// let expr = tag_expressions::parse("a and b or c")?;
/// assert_eq!(expr.to_string(), "( ( a and b ) or c )");
///
/// let err = tag_expressions::parse("(a").err().map(|e| e.to_string());
/// assert_eq!(
///     err.as_deref(),
///     Some(r#"Tag expression "(a" could not be parsed because of syntax error: Unmatched (."#),
/// );
/// # Ok::<(), tag_expressions::TagExpressionError>(())
/// ```
pub fn parse(text: &str) -> Result<Expression, TagExpressionError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Ok(Expression::True);
    }
    let result = Parser::new(text).run(tokens);
    if let Err(err) = &result {
        log::debug!("rejected tag expression: {err}");
    }
    result
}

struct Parser<'a> {
    input: &'a str,
    operands: Vec<Expression>,
    operators: Vec<TokenKind>,
    expected: TokenType,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            operands: Vec::new(),
            operators: Vec::new(),
            expected: TokenType::Operand,
        }
    }

    fn run(mut self, tokens: Vec<Token>) -> Result<Expression, TagExpressionError> {
        for token in tokens {
            match token.kind {
                TokenKind::Not => self.unary()?,
                TokenKind::And | TokenKind::Or => self.binary(token.kind)?,
                TokenKind::LeftParen => self.open()?,
                TokenKind::RightParen => self.close()?,
                TokenKind::Literal => self.literal(token.text)?,
            }
        }
        self.expect(TokenType::Operator)?;
        while let Some(kind) = self.operators.pop() {
            if kind == TokenKind::LeftParen {
                return Err(TagExpressionError::UnmatchedOpen {
                    expression: self.input.to_string(),
                });
            }
            self.reduce(kind)?;
        }
        let root = self.pop_operand()?;
        if !self.operands.is_empty() {
            return Err(self.incomplete());
        }
        Ok(root)
    }

    fn unary(&mut self) -> Result<(), TagExpressionError> {
        self.expect(TokenType::Operand)?;
        self.operators.push(TokenKind::Not);
        Ok(())
    }

    fn binary(&mut self, kind: TokenKind) -> Result<(), TagExpressionError> {
        self.expect(TokenType::Operator)?;
        while let Some(&top) = self.operators.last() {
            if !yields_to(kind, top) {
                break;
            }
            self.operators.pop();
            self.reduce(top)?;
        }
        self.operators.push(kind);
        self.expected = TokenType::Operand;
        Ok(())
    }

    fn open(&mut self) -> Result<(), TagExpressionError> {
        self.expect(TokenType::Operand)?;
        self.operators.push(TokenKind::LeftParen);
        Ok(())
    }

    fn close(&mut self) -> Result<(), TagExpressionError> {
        self.expect(TokenType::Operator)?;
        loop {
            match self.operators.pop() {
                Some(TokenKind::LeftParen) => break,
                Some(kind) => self.reduce(kind)?,
                None => {
                    return Err(TagExpressionError::UnmatchedClose {
                        expression: self.input.to_string(),
                    });
                }
            }
        }
        self.expected = TokenType::Operator;
        Ok(())
    }

    fn literal(&mut self, text: String) -> Result<(), TagExpressionError> {
        self.expect(TokenType::Operand)?;
        self.operands.push(Expression::Literal(text));
        self.expected = TokenType::Operator;
        Ok(())
    }

    /// Fold the operator `kind` into the operand stack.
    fn reduce(&mut self, kind: TokenKind) -> Result<(), TagExpressionError> {
        let node = match kind {
            TokenKind::And | TokenKind::Or => {
                let right = self.pop_operand()?;
                let left = self.pop_operand()?;
                if kind == TokenKind::And {
                    Expression::and(left, right)
                } else {
                    Expression::or(left, right)
                }
            }
            TokenKind::Not => Expression::not(self.pop_operand()?),
            TokenKind::LeftParen | TokenKind::RightParen | TokenKind::Literal => {
                return Err(self.incomplete());
            }
        };
        log::trace!("reduced {kind:?} into {node}");
        self.operands.push(node);
        Ok(())
    }

    fn expect(&self, actual: TokenType) -> Result<(), TagExpressionError> {
        if self.expected == actual {
            Ok(())
        } else {
            Err(TagExpressionError::Expected {
                expression: self.input.to_string(),
                expected: self.expected,
            })
        }
    }

    fn pop_operand(&mut self) -> Result<Expression, TagExpressionError> {
        self.operands.pop().ok_or_else(|| self.incomplete())
    }

    /// Operand-stack underflow, which the grammar cursor rules out, is
    /// reported as a missing operand.
    fn incomplete(&self) -> TagExpressionError {
        TagExpressionError::Expected {
            expression: self.input.to_string(),
            expected: TokenType::Operand,
        }
    }
}

/// Whether the pending operator `top` must be reduced before `incoming` is
/// pushed.
fn yields_to(incoming: TokenKind, top: TokenKind) -> bool {
    if !top.is_operator() {
        return false;
    }
    let (Some(incoming_prec), Some(top_prec)) = (incoming.precedence(), top.precedence()) else {
        return false;
    };
    match incoming.associativity() {
        Some(Associativity::Left) => incoming_prec <= top_prec,
        Some(Associativity::Right) => incoming_prec < top_prec,
        None => false,
    }
}

#[cfg(test)]
mod tests;

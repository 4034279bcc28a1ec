//! Splits tag expression text into tokens.
//!
//! Whitespace separates words and is otherwise dropped. Parentheses are
//! tokens of their own. A backslash escapes the following `(`, `)`, `\` or
//! whitespace character so tags may contain them verbatim, e.g. `a\ b` is the
//! single tag `a b`. Words spelled exactly `and`, `or`, or `not` become
//! operators; every other word is a literal tag.

use std::str::Chars;

use crate::errors::TagExpressionError;
use crate::token::{Token, TokenKind};

const ESCAPE: char = '\\';

/// Tokenise `text` into the sequence consumed by the parser.
///
/// # Errors
///
/// Returns [`TagExpressionError::IllegalEscape`] when a backslash is followed
/// by a character that cannot be escaped.
///
/// # Examples
/// ```
/// use tag_expressions::{TokenKind, tokenize};
///
/// let tokens = tokenize(r"not (a\ b)")?;
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Not, TokenKind::LeftParen, TokenKind::Literal, TokenKind::RightParen],
/// );
/// assert_eq!(tokens.get(2).map(|t| t.text.as_str()), Some("a b"));
/// # Ok::<(), tag_expressions::TagExpressionError>(())
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, TagExpressionError> {
    Lexer::new(text).run()
}

struct Lexer<'a> {
    input: &'a str,
    chars: Chars<'a>,
    word: String,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars(),
            word: String::new(),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, TagExpressionError> {
        while let Some(ch) = self.chars.next() {
            match ch {
                ESCAPE => self.escape()?,
                '(' => self.delimiter(Some(Token::new(TokenKind::LeftParen, "("))),
                ')' => self.delimiter(Some(Token::new(TokenKind::RightParen, ")"))),
                c if c.is_whitespace() => self.delimiter(None),
                c => self.word.push(c),
            }
        }
        self.flush();
        log::trace!("tokenised {:?} into {:?}", self.input, self.tokens);
        Ok(self.tokens)
    }

    fn escape(&mut self) -> Result<(), TagExpressionError> {
        // A trailing backslash escapes nothing and is dropped.
        let Some(next) = self.chars.next() else {
            return Ok(());
        };
        if matches!(next, '(' | ')' | ESCAPE) || next.is_whitespace() {
            self.word.push(next);
            Ok(())
        } else {
            Err(TagExpressionError::IllegalEscape {
                expression: self.input.to_string(),
                character: next,
            })
        }
    }

    fn delimiter(&mut self, token: Option<Token>) {
        self.flush();
        self.tokens.extend(token);
    }

    fn flush(&mut self) {
        if !self.word.is_empty() {
            let word = std::mem::take(&mut self.word);
            self.tokens.push(Token::word(word));
        }
    }
}

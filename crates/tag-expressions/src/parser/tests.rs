//! Parser coverage for precedence, grouping, and grammar violations.

use rstest::rstest;

use super::*;

fn canonical(input: &str) -> String {
    parse(input)
        .unwrap_or_else(|err| panic!("parse expression `{input}`: {err}"))
        .to_string()
}

fn parse_error(input: &str) -> TagExpressionError {
    match parse(input) {
        Ok(expr) => panic!("expected parse error for `{input}`, got {expr:?}"),
        Err(err) => err,
    }
}

#[rstest]
#[case("", "true")]
#[case("  ", "true")]
#[case("a", "a")]
#[case("a and b", "( a and b )")]
#[case("a or b", "( a or b )")]
#[case("not a", "not ( a )")]
#[case("a and b and c", "( ( a and b ) and c )")]
#[case("a or b or c", "( ( a or b ) or c )")]
#[case("a and b or c", "( ( a and b ) or c )")]
#[case("a or b and c", "( a or ( b and c ) )")]
#[case("not a and b", "( not ( a ) and b )")]
#[case("not not a", "not ( not ( a ) )")]
#[case("not (a and b)", "not ( a and b )")]
#[case("(a and b) or (c and d)", "( ( a and b ) or ( c and d ) )")]
#[case("((a))", "a")]
fn builds_expected_tree(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(canonical(input), expected);
}

#[test]
fn builds_nodes_bottom_up() {
    let expr = parse("a and not b").unwrap_or_else(|err| panic!("parse: {err}"));
    assert_eq!(
        expr,
        Expression::and(
            Expression::literal("a"),
            Expression::not(Expression::literal("b")),
        )
    );
}

#[rstest]
#[case("a b", TokenType::Operator)]
#[case("a not", TokenType::Operator)]
#[case("a (b)", TokenType::Operator)]
#[case("and a", TokenType::Operand)]
#[case("a and or", TokenType::Operand)]
#[case("a and )", TokenType::Operand)]
#[case("()", TokenType::Operand)]
#[case("not", TokenType::Operand)]
#[case("a or", TokenType::Operand)]
fn rejects_unexpected_token_kinds(#[case] input: &str, #[case] expected: TokenType) {
    assert_eq!(
        parse_error(input),
        TagExpressionError::Expected {
            expression: input.to_string(),
            expected,
        }
    );
}

#[rstest]
#[case("a)")]
#[case("( a and b ) )")]
fn rejects_unmatched_close(#[case] input: &str) {
    assert_eq!(
        parse_error(input),
        TagExpressionError::UnmatchedClose {
            expression: input.to_string(),
        }
    );
}

#[rstest]
#[case("(a")]
#[case("( ( a and b )")]
fn rejects_unmatched_open(#[case] input: &str) {
    assert_eq!(
        parse_error(input),
        TagExpressionError::UnmatchedOpen {
            expression: input.to_string(),
        }
    );
}

#[test]
fn propagates_lexer_errors() {
    assert!(matches!(
        parse_error(r"a and \b"),
        TagExpressionError::IllegalEscape { character: 'b', .. }
    ));
}

#[rstest]
#[case(TokenKind::Or, TokenKind::And, true)]
#[case(TokenKind::Or, TokenKind::Or, true)]
#[case(TokenKind::And, TokenKind::Or, false)]
#[case(TokenKind::And, TokenKind::Not, true)]
#[case(TokenKind::Not, TokenKind::Not, false)]
#[case(TokenKind::And, TokenKind::LeftParen, false)]
fn reduces_pending_operators_by_precedence(
    #[case] incoming: TokenKind,
    #[case] top: TokenKind,
    #[case] expected: bool,
) {
    assert_eq!(yields_to(incoming, top), expected);
}

#[test]
fn operand_underflow_reports_missing_operand() {
    let mut parser = Parser::new("and");
    assert_eq!(
        parser.reduce(TokenKind::And),
        Err(TagExpressionError::Expected {
            expression: "and".to_string(),
            expected: TokenType::Operand,
        })
    );
}

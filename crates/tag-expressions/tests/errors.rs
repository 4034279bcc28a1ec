//! Exact error messages for malformed expressions.

use rstest::rstest;
use tag_expressions::parse;

fn message(detail: &str, expression: &str) -> String {
    format!(
        "Tag expression \"{expression}\" could not be parsed because of syntax error: {detail}."
    )
}

#[rstest]
#[case("@a @b or", "Expected operator")]
#[case("@a and (@b not)", "Expected operator")]
#[case("@a and (@b @c) or", "Expected operator")]
#[case("@a and or", "Expected operand")]
#[case("or or", "Expected operand")]
#[case("a and or", "Expected operand")]
#[case("a b", "Expected operator")]
#[case("( a and b ) )", "Unmatched )")]
#[case("a)", "Unmatched )")]
#[case("( ( a and b )", "Unmatched (")]
#[case("(a", "Unmatched (")]
#[case(r"x or \y or z", "Illegal escape before \"y\"")]
#[case(r"x\ or y", "Expected operator")]
#[case("a and", "Expected operand")]
#[case("a or", "Expected operand")]
#[case("not", "Expected operand")]
#[case("a and not", "Expected operand")]
#[case("and a", "Expected operand")]
#[case("or a", "Expected operand")]
#[case("@foo and and @bar", "Expected operand")]
fn reports_syntax_errors(#[case] expression: &str, #[case] detail: &str) {
    match parse(expression) {
        Ok(expr) => panic!("expected parse error for `{expression}`, got {expr:?}"),
        Err(err) => {
            assert_eq!(err.to_string(), message(detail, expression));
            assert_eq!(err.expression(), expression);
        }
    }
}

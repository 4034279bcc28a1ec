//! Truth tables for parsed expressions.

use rstest::rstest;
use tag_expressions::parse;

#[rstest]
#[case("", &[], true)]
#[case("", &["x"], true)]
#[case("   ", &["y"], true)]
#[case("not x", &[], true)]
#[case("not x", &["x"], false)]
#[case("not x", &["y"], true)]
#[case("not not x", &[], false)]
#[case("not not x", &["x"], true)]
#[case("not not not x", &["x"], false)]
#[case("x and y", &[], false)]
#[case("x and y", &["x", "y"], true)]
#[case("x and y", &["x"], false)]
#[case("x and y", &["y"], false)]
#[case("x or y", &[], false)]
#[case("x or y", &["x", "y"], true)]
#[case("x or y", &["x"], true)]
#[case("x or y", &["y"], true)]
#[case("a and not b", &["a"], true)]
#[case("a and not b", &["a", "b"], false)]
#[case("a and not b", &[], false)]
#[case(r"x\(1\) or y\(2\)", &[], false)]
#[case(r"x\(1\) or y\(2\)", &["x(1)"], true)]
#[case(r"x\(1\) or y\(2\)", &["y(2)"], true)]
#[case(r"x\\ or y\\\) or z\\", &[r"x\"], true)]
#[case(r"x\\ or y\\\) or z\\", &[r"y\)"], true)]
#[case(r"x\\ or y\\\) or z\\", &[r"z\"], true)]
#[case(r"x\\ or y\\\) or z\\", &["x"], false)]
#[case(r"x\\ or y\\\) or z\\", &["y)"], false)]
#[case(r"\\x or y\\ or z\\", &[r"\x"], true)]
#[case(r"\\x or y\\ or z\\", &["y"], false)]
#[case("(@fast or @slow) and not @broken", &["@fast", "@passing"], true)]
#[case("(@fast or @slow) and not @broken", &["@slow", "@broken"], false)]
#[case("(@fast or @slow) and not @broken", &["@other"], false)]
fn evaluates(#[case] expression: &str, #[case] variables: &[&str], #[case] expected: bool) {
    let expr = parse(expression)
        .unwrap_or_else(|err| panic!("parse expression `{expression}`: {err}"));
    assert_eq!(
        expr.evaluate(variables),
        expected,
        "`{expression}` with {variables:?}"
    );
}

#[test]
fn matching_is_case_sensitive() {
    let expr = parse("@fast").unwrap_or_else(|err| panic!("parse: {err}"));
    assert!(expr.evaluate(&["@fast", "@wip"]));
    assert!(!expr.evaluate(&["@Fast"]));
}

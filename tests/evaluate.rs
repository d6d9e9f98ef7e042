use std::fs;

use stackeval::{
    error::{ErrorKind, EvalError},
    evaluate, evaluate_with,
    options::{Options, UnknownCharacters},
};
use walkdir::WalkDir;

#[test]
fn case_files_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in parse_cases(&content) {
            count += 1;
            let result = evaluate(expression);
            match (expected.strip_prefix('!'), &result) {
                (Some(kind), Err(e)) => assert_eq!(format!("{:?}", e.kind()),
                                                   kind,
                                                   "{expression:?} in {path:?}"),
                (None, Ok(value)) => assert_eq!(value.to_string(),
                                                expected,
                                                "{expression:?} in {path:?}"),
                _ => panic!("{expression:?} in {path:?}: expected {expected}, got {result:?}"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn parse_cases(content: &str) -> Vec<(&str, &str)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .filter_map(|line| line.split_once("=>"))
           .map(|(expression, expected)| (expression.trim(), expected.trim()))
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src:?}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("{src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?}: {e}"),
    }
}

#[test]
fn reference_scenarios() {
    assert_value("10+2*6", 22);
    assert_value("100*2+12", 212);
    assert_value("100*(2+12)", 1400);
    assert_value("100*(2+12)/14", 100);
    assert_value("0/5", 0);
    assert_kind("5/0", ErrorKind::DivisionByZero);
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_value(" 10 +  2 * 6 ", 22);
    assert_value("\t100 *\n( 2+12 ) / 14\r\n", 100);
    assert_eq!(evaluate("10+2*6"), evaluate("  10  +  2  *  6  "));
}

#[test]
fn whitespace_inside_a_number_splits_it() {
    assert_kind("1 0 + 2", ErrorKind::MalformedExpression);
}

#[test]
fn repeated_evaluation_is_stable() {
    let first = evaluate("100*(2+12)/14");
    for _ in 0..3 {
        assert_eq!(evaluate("100*(2+12)/14"), first);
    }
    assert_eq!(evaluate("5/0"), evaluate("5/0"));
}

#[test]
fn unbalanced_parentheses_never_truncate() {
    assert_kind("(1+2", ErrorKind::MalformedExpression);
    assert_kind("1+2)", ErrorKind::StackUnderflow);
    assert_kind("((1)", ErrorKind::MalformedExpression);
    assert_kind("(1))", ErrorKind::StackUnderflow);
}

#[test]
fn empty_input_is_malformed() {
    assert_kind("", ErrorKind::MalformedExpression);
    assert_kind("   ", ErrorKind::MalformedExpression);
}

#[test]
fn errors_point_at_the_offending_token() {
    assert_eq!(evaluate("1 + 8 / 0").unwrap_err(),
               EvalError::DivisionByZero { position: 6 });
    assert_eq!(evaluate("12 # 3").unwrap_err(),
               EvalError::InvalidCharacter { character: '#',
                                             position:  3, });
    assert_eq!(evaluate("(1 + 2))").unwrap_err(),
               EvalError::StackUnderflow { position: 7 });
}

#[test]
fn skip_policy_drops_unknown_characters() {
    let options = Options { unknown: UnknownCharacters::Skip };
    assert_eq!(evaluate_with("10 + 2 x* 6", &options), Ok(22));
    assert_eq!(evaluate_with("1,000 + 1", &options).unwrap_err().kind(),
               ErrorKind::MalformedExpression);
    assert_eq!(evaluate_with("99999999999999999999", &options).unwrap_err().kind(),
               ErrorKind::NumericOverflow);
}

#[test]
fn left_associativity_within_a_tier() {
    assert_value("64/4/2", 8);
    assert_value("64/(4/2)", 32);
    assert_value("10-4+3", 9);
    assert_value("10-(4+3)", 3);
}

use lox_expr::{evaluate, parse, print, run, scan, Error, EvalError, ParseError, ScanError, Value};

fn eval_str(src: &str) -> Value {
    run(src).unwrap_or_else(|e| panic!("`{}` failed: {}", src, e))
}

#[test]
fn arithmetic_follows_precedence() {
    assert_eq!(eval_str("1 + 2 * 3"), Value::Number(7.0));
    assert_eq!(eval_str("(1 + 2) * 3"), Value::Number(9.0));
    assert_eq!(eval_str("10 - 4 - 3"), Value::Number(3.0));
    assert_eq!(eval_str("8 / 4 / 2"), Value::Number(1.0));
    assert_eq!(eval_str("--1"), Value::Number(1.0));
    assert_eq!(eval_str("1.1 + 2.2"), Value::Number(1.1 + 2.2));
}

#[test]
fn ieee_edge_cases() {
    assert_eq!(eval_str("11 / 0"), Value::Number(f64::INFINITY));
    assert_eq!(eval_str("-11 / 0"), Value::Number(f64::NEG_INFINITY));
    let Value::Number(n) = eval_str("0 / 0") else {
        panic!("expected a number");
    };
    assert!(n.is_nan());
    assert_eq!(eval_str("0 / 0 == 0 / 0"), Value::Bool(false));
}

#[test]
fn comparison_and_equality() {
    assert_eq!(eval_str("1 < 2 == true"), Value::Bool(true));
    assert_eq!(eval_str("3 >= 3"), Value::Bool(true));
    assert_eq!(eval_str("!(1 == 1)"), Value::Bool(false));
    assert_eq!(eval_str("nil == false"), Value::Bool(true));
    assert_eq!(eval_str("\"string\" == true"), Value::Bool(true));
    assert_eq!(eval_str("\"a\" != \"b\""), Value::Bool(false));
}

#[test]
fn strings_concatenate_only_with_strings() {
    assert_eq!(
        eval_str("\"hello\" + \", world!\""),
        Value::Str("hello, world!".to_string())
    );
    assert!(matches!(
        run("1 + \"1\""),
        Err(Error::Eval(EvalError::InvalidOperands(..)))
    ));
}

#[test]
fn stage_errors_surface_first_failure() {
    assert!(matches!(
        run("\"abc"),
        Err(Error::Scan(ScanError::UnterminatedString { line: 1 }))
    ));
    assert!(matches!(
        run("1 + + 1"),
        Err(Error::Parse(ParseError::ExpectedExpression(_)))
    ));
    assert!(matches!(
        run("(1"),
        Err(Error::Parse(ParseError::ExpectedToken(..)))
    ));
    assert!(matches!(
        run("-nil"),
        Err(Error::Eval(EvalError::NotANumber(..)))
    ));
}

#[test]
fn comments_and_lines() {
    assert_eq!(eval_str("1 + // first\n2 // second"), Value::Number(3.0));
    let err = run("1 +\n\n").unwrap_err();
    assert_eq!(err.to_string(), "Parse error: [line 3] Error at end: Expect expression.");
}

#[test]
fn printed_form_is_parenthesized_and_rescannable() {
    let sources = [
        ("1 + 2 * 3", "(+ 1 (* 2 3))"),
        ("-123 * (45.67)", "(* (- 123) (group 45.67))"),
        ("!(true == nil)", "(! (group (== true nil)))"),
        ("\"a\" + \"b c\"", "(+ \"a\" \"b c\")"),
        ("1 + 1.1234 - 2", "(- (+ 1 1.1234) 2)"),
    ];
    for (src, expected) in sources {
        let expr = parse(&scan(src).unwrap()).unwrap();
        let printed = print(&expr);
        assert_eq!(printed, expected);
        assert!(scan(&printed).is_ok(), "re-scan of {} failed", printed);
    }
}

#[test]
fn evaluation_is_repeatable() {
    let expr = parse(&scan("(1 + 2) * -3 >= -9").unwrap()).unwrap();
    assert_eq!(evaluate(&expr), Ok(Value::Bool(true)));
    assert_eq!(evaluate(&expr), evaluate(&expr));
}

#[test]
fn deeply_nested_input_is_an_error_not_a_crash() {
    let nested = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert!(matches!(
        run(&nested),
        Err(Error::Parse(ParseError::TooDeep(_)))
    ));
    assert!(matches!(
        run(&("!".repeat(100_000) + "true")),
        Err(Error::Parse(ParseError::TooDeep(_)))
    ));
    assert_eq!(eval_str(&("!".repeat(100) + "true")), Value::Bool(true));
}

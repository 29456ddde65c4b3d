use approx::{assert_abs_diff_eq, assert_relative_eq};
use calcpad::{
    error::EvalError,
    evaluator::{
        compile::compile,
        core::{evaluate, evaluate_postfix, evaluate_to_string},
        postfix::to_postfix,
    },
};

fn assert_evaluates(infix: &str, expected: &str) {
    match evaluate_to_string(infix) {
        Ok(result) => assert_eq!(result, expected, "evaluating {infix:?}"),
        Err(e) => panic!("Evaluating {infix:?} failed: {e}"),
    }
}

fn assert_fails(infix: &str, expected: &EvalError) {
    match evaluate(infix) {
        Ok(value) => panic!("Evaluating {infix:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "evaluating {infix:?}"),
    }
}

#[test]
fn postfix_conversion() {
    for (infix, postfix) in [("1 + 2", "1 2 +"),
                             ("1 - 2 * 4", "1 2 4 * -"),
                             ("( 1 - 2 ) * 4", "1 2 - 4 *"),
                             ("2 ^ 3 * 4", "2 3 ^ 4 *"),
                             ("2 * 3 ^ 2", "2 3 2 ^ *"),
                             ("2 ^ 3 ^ 2", "2 3 2 ^ ^"),
                             ("sin p * 2", "p sin 2 *"),
                             ("ln e * 2", "e 2 * ln"),
                             ("sqrt 4 ^ 2", "4 sqrt 2 ^"),
                             ("0,5 + 1", "0.5 1 +"),
                             ("  1   +  2 ", "1 2 +"),
                             ("1 + 2 )", "1 2 +"),
                             ("( 1 + 2", "1 2 + (")]
    {
        assert_eq!(to_postfix(infix).unwrap(), postfix, "converting {infix:?}");
    }
}

#[test]
fn postfix_rejects_unknown_lexemes() {
    assert_eq!(to_postfix("2 + sine"),
               Err(EvalError::UnexpectedToken { token:    "sine".to_string(),
                                                position: 2, }));
    assert!(to_postfix("2p").is_err());
    assert!(to_postfix("1 % 2").is_err());
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("1 + 2", "3");
    assert_evaluates("1 - 2 * 4", "-7");
    assert_evaluates("( 1 - 2 ) * 4", "-4");
    assert_evaluates("7 / 2", "3.5");
    assert_evaluates("0 - 3,5", "-3.5");
    assert_evaluates("2 ^ 10", "1024");
    assert_evaluates("2 ^ 3 ^ 2", "512");
    assert_evaluates("0.1 + 0.2", "0.30000000000000004");
}

#[test]
fn functions() {
    assert_evaluates("sqrt 16 + abs ( 0 - 2 )", "6");
    assert_evaluates("√ 9", "3");
    assert_evaluates("floor 2,7", "2");
    assert_evaluates("ceil 2.1", "3");
    assert_evaluates("sign ( 0 - 5 )", "-1");
    assert_evaluates("sign 0", "0");
    assert_evaluates("cos 0", "1");
    assert_evaluates("ctg 0", "Infinity");

    assert_relative_eq!(evaluate("ln e").unwrap(), 1.0);
    assert_relative_eq!(evaluate("lg 100").unwrap(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(evaluate("tg ( p / 4 )").unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(evaluate("sin p").unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn tight_and_loose_functions() {
    // sqrt applies to 4 alone; abs takes the whole product.
    assert_evaluates("sqrt 4 * 2", "4");
    assert_evaluates("abs ( 0 - 3 ) * 2", "6");
    assert_relative_eq!(evaluate("ln e * 2").unwrap(), 1.0 + 2f64.ln(), epsilon = 1e-12);
}

#[test]
fn constants() {
    assert_relative_eq!(evaluate("p").unwrap(), std::f64::consts::PI);
    assert_relative_eq!(evaluate("п").unwrap(), std::f64::consts::PI);
    assert_relative_eq!(evaluate("2 * e").unwrap(), 2.0 * std::f64::consts::E);
}

#[test]
fn arithmetic_domain_errors() {
    assert_fails("7 / 0", &EvalError::DivisionByZero);
    assert_fails("7 / ( 2 - 2 )", &EvalError::DivisionByZero);
    assert_fails("1 / 0,0000000000000001", &EvalError::DivisionByZero);
    assert_fails("0 / 0", &EvalError::IndeterminateZeroOverZero);
    assert_fails("0 ^ 0", &EvalError::IndeterminateZeroPowerZero);
    assert_fails("sqrt ( 0 - 1 )", &EvalError::NegativeRootDomain);
    assert_fails("ln 0", &EvalError::NonPositiveLogarithmDomain);
    assert_fails("lg ( 0 - 1 )", &EvalError::NonPositiveLogarithmDomain);

    assert_evaluates("0 ^ 2", "0");
    assert_evaluates("2 ^ 0", "1");
    assert!(EvalError::DivisionByZero.is_arithmetic());
}

#[test]
fn invalid_expressions() {
    assert_fails("", &EvalError::OperandCountMismatch { remaining: 0 });
    assert_fails("1 2", &EvalError::OperandCountMismatch { remaining: 2 });
    assert_fails("1 +",
                 &EvalError::MissingOperand { token:    "+".to_string(),
                                              position: 1, });
    assert_fails("sin",
                 &EvalError::MissingOperand { token:    "sin".to_string(),
                                              position: 0, });
    assert_fails("2 * x",
                 &EvalError::UnexpectedToken { token:    "x".to_string(),
                                               position: 1, });
    assert_fails("( 1 + 2",
                 &EvalError::UnexpectedToken { token:    "(".to_string(),
                                               position: 3, });

    for error in [evaluate("1 2").unwrap_err(), evaluate("2 + sine").unwrap_err()] {
        assert!(error.is_invalid_expression());
    }
}

#[test]
fn evaluation_goes_through_postfix() {
    for infix in ["1 + 2",
                  "1 - 2 * 4",
                  "( 1 - 2 ) * 4",
                  "2 * ( 1 + p )",
                  "sin ( p / 6 ) + cos 0",
                  "abs ( 0 - 3 ) * 2 ^ 3",
                  "e ^ ln 2"]
    {
        let postfix = to_postfix(infix).unwrap();
        assert_eq!(evaluate(infix), evaluate_postfix(&postfix), "evaluating {infix:?}");
    }
}

#[test]
fn compiled_functions_bind_the_variable() {
    let f = compile("x ^ 2 + 1").unwrap();
    assert_eq!(f.call(3.0), Ok(10.0));
    assert_eq!(f.call(-1.0), Ok(2.0));
    assert!(f.uses_variable());
    assert_eq!(f.to_string(), "x -> x 2 ^ 1 +");

    let g = compile("sin x * 2").unwrap();
    assert_abs_diff_eq!(g.call(std::f64::consts::FRAC_PI_2).unwrap(), 2.0, epsilon = 1e-12);

    let constant = compile("2 + 3").unwrap();
    assert!(!constant.uses_variable());
    assert_eq!(constant.call(100.0), Ok(5.0));
}

#[test]
fn compiled_functions_match_evaluation() {
    for infix in ["1 + 2",
                  "1 - 2 * 4",
                  "2 ^ 3 ^ 2",
                  "sqrt 4 * 2",
                  "abs ( 0 - 3 ) * 2",
                  "7 / 0",
                  "0 / 0",
                  "0 ^ 0",
                  "sqrt ( 0 - 1 )",
                  "ln 0",
                  "ctg 0",
                  "floor ( p * e )"]
    {
        let compiled = compile(infix).unwrap();
        assert_eq!(compiled.call(0.0), evaluate(infix), "compiling {infix:?}");
    }
}

#[test]
fn compiled_functions_handle_long_expressions() {
    let sum = vec!["1"; 20_000].join(" + ");
    let f = compile(&sum).unwrap();
    assert_eq!(f.call(0.0), Ok(20_000.0));
    assert_eq!(f.call(0.0), evaluate(&sum));

    let chain = format!("{}x", "x * ".repeat(10_000));
    let g = compile(&chain).unwrap();
    assert_eq!(g.call(1.0), Ok(1.0));
    assert_eq!(g.call(-1.0), Ok(-1.0));

    let nested = format!("{}x{}", "( ".repeat(10_000), " )".repeat(10_000));
    assert_eq!(compile(&nested).unwrap().call(2.5), Ok(2.5));

    let absolute = format!("{}x", "abs ".repeat(10_000));
    assert_eq!(compile(&absolute).unwrap().call(-3.0), Ok(3.0));
}

#[test]
fn compiled_functions_report_domain_errors_per_call() {
    let reciprocal = compile("1 / x").unwrap();
    assert_eq!(reciprocal.call(4.0), Ok(0.25));
    assert_eq!(reciprocal.call(0.0), Err(EvalError::DivisionByZero));

    let log = compile("ln x").unwrap();
    assert_eq!(log.call(-1.0), Err(EvalError::NonPositiveLogarithmDomain));
    assert_eq!(log.call(1.0), Ok(0.0));

    let closure = compile("x * x").unwrap().into_closure();
    assert_eq!(closure(1.5), Ok(2.25));
}

#[test]
fn compile_rejects_malformed_input() {
    assert_eq!(compile("x x").unwrap_err(),
               EvalError::OperandCountMismatch { remaining: 2 });
    assert!(matches!(compile("x +"), Err(EvalError::MissingOperand { .. })));
    assert!(matches!(compile("( x"), Err(EvalError::UnexpectedToken { .. })));
    assert!(matches!(compile("y + 1"), Err(EvalError::UnexpectedToken { .. })));
}

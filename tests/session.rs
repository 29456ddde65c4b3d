use std::fs;

use calcpad::{
    error::{ArgumentError, EvalError, KeyError},
    evaluator::compile::compile,
    expression::{config::BuilderConfig, token::Operator},
    run_keys,
    session::{core::Session, intent::Intent, keys::parse_keys},
};
use walkdir::WalkDir;

/// Runs one key script in a fresh session and renders what a keypad would
/// show: the display, the result if there is one, or the error.
fn outcome(keys: &str) -> String {
    let mut session = Session::new();
    match run_keys(&mut session, keys) {
        Ok(()) => match session.result() {
            Some(result) => format!("{} = {result}", session.display()),
            None => session.display(),
        },
        Err(e) => format!("error: {e}"),
    }
}

#[test]
fn key_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "keys"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((keys, expected)) = line.split_once(" => ") else {
                panic!("Line {} in {path:?} has no ' => ' separator", i + 1);
            };

            count += 1;
            assert_eq!(outcome(keys.trim()),
                       expected.trim(),
                       "line {} in {path:?}: {keys}",
                       i + 1);
        }
    }

    assert!(count > 0, "No key scripts found in tests/scripts");
}

#[test]
fn display_uses_keypad_glyphs() {
    let mut session = Session::new();
    run_keys(&mut session, "2*sqrt(p)/e").unwrap();
    assert_eq!(session.builder().text(), "2 * sqrt ( p ) / e");
    assert_eq!(session.display(), "2×√(π)/e");
}

#[test]
fn result_uses_configured_separator() {
    let mut session = Session::with_config(BuilderConfig::default().decimal_separator(','));

    run_keys(&mut session, "1,5*1.5=").unwrap();
    assert_eq!(session.display(), "1,5×1,5");
    assert_eq!(session.result(), Some("2,25"));

    run_keys(&mut session, "C p=").unwrap();
    assert_eq!(session.result(), Some("3,141592653589793"));
}

#[test]
fn any_configured_separator_evaluates() {
    let arabic = '\u{066B}';
    let mut session = Session::with_config(BuilderConfig::default().decimal_separator(arabic));

    run_keys(&mut session, "1.5*2=").unwrap();
    assert_eq!(session.builder().text(), "1\u{066B}5 * 2");
    assert_eq!(session.result(), Some("3"));

    run_keys(&mut session, "C 1,5*1.5=").unwrap();
    assert_eq!(session.display(), "1\u{066B}5×1\u{066B}5");
    assert_eq!(session.result(), Some("2\u{066B}25"));

    run_keys(&mut session, "C 2.5=").unwrap();
    assert_eq!(session.display(), "2\u{066B}5");
    assert_eq!(session.result(), None);

    run_keys(&mut session, "C 0.5+").unwrap();
    assert_eq!(session.finalize(), "0.5");
}

#[test]
fn finalized_expression_compiles_with_any_separator() {
    let config = BuilderConfig::default().decimal_separator('\u{066B}')
                                         .variable_placeholder(true);
    let mut session = Session::with_config(config);

    run_keys(&mut session, "2.5x").unwrap();
    let expression = session.finalize();
    assert_eq!(expression, "2.5 * x");
    assert_eq!(compile(&expression).unwrap().call(2.0), Ok(5.0));
    assert_eq!(session.builder().text(), "2\u{066B}5 * x");
}

#[test]
fn evaluation_error_keeps_finalized_expression() {
    let mut session = Session::new();

    run_keys(&mut session, "7÷(2-2").unwrap();

    let err = run_keys(&mut session, "=").unwrap_err();
    assert_eq!(err.downcast_ref::<EvalError>(), Some(&EvalError::DivisionByZero));
    assert_eq!(session.display(), "7/(2-2)");
    assert_eq!(session.result(), None);

    run_keys(&mut session, "<<+0)=").unwrap();
    assert_eq!(session.display(), "7/(2+0)");
    assert_eq!(session.result(), Some("3.5"));
}

#[test]
fn invalid_keys_leave_session_untouched() {
    let mut session = Session::new();
    run_keys(&mut session, "12").unwrap();

    let err = run_keys(&mut session, "+3 &").unwrap_err();
    assert_eq!(err.downcast_ref::<KeyError>(),
               Some(&KeyError::UnexpectedKey { key:    "&".to_string(),
                                               column: 3, }));
    assert_eq!(session.display(), "12");

    let err = session.apply(Intent::Digit('a')).unwrap_err();
    assert_eq!(err.downcast_ref::<ArgumentError>(),
               Some(&ArgumentError::NotADigit { found: 'a' }));
    assert_eq!(session.display(), "12");
}

#[test]
fn edits_after_a_result_start_over() {
    let mut session = Session::new();
    run_keys(&mut session, "6*7=").unwrap();
    assert_eq!(session.result(), Some("42"));

    session.apply(Intent::Calculate).unwrap();
    assert_eq!(session.result(), Some("42"));

    session.apply(Intent::Operator(Operator::Subtract)).unwrap();
    assert_eq!(session.result(), None);
    assert_eq!(session.display(), "0-");

    session.apply_all([Intent::Digit('1'), Intent::Calculate]).unwrap();
    assert_eq!(session.result(), Some("-1"));

    session.apply(Intent::Clear).unwrap();
    assert_eq!(session.result(), None);
    assert_eq!(session.display(), "0");
}

#[test]
fn subscribers_follow_the_builder() {
    let mut session = Session::new();
    let changes = session.subscribe();

    run_keys(&mut session, "12+=").unwrap();
    run_keys(&mut session, "C").unwrap();

    let seen: Vec<String> = changes.try_iter().collect();
    assert_eq!(seen, ["0", "1", "12", "12 +", "12", "0"]);
}

#[test]
fn variable_needs_compilation() {
    let config = BuilderConfig::default().variable_placeholder(true);
    let mut session = Session::with_config(config);

    let err = run_keys(&mut session, "2x^2=").unwrap_err();
    assert!(matches!(err.downcast_ref::<EvalError>(),
                     Some(EvalError::UnexpectedToken { token, .. }) if token == "x"));

    let function = compile(&session.finalize()).unwrap();
    assert_eq!(function.call(3.0), Ok(18.0));
}

#[test]
fn key_lexer_reads_every_key() {
    let intents = parse_keys(" 1 , ×÷ ^ √ π п pi e x ( ) < C = ").unwrap();
    assert_eq!(intents.len(), 16);
    assert_eq!(intents[1], Intent::DecimalSeparator);
    assert!(intents[6..9].iter().all(|intent| *intent == Intent::Pi));
    assert_eq!(intents.iter().filter(|intent| intent.is_edit()).count(), 14);

    let rendered: String = intents.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, "1.*/^sqrtπππex()<C=");
}

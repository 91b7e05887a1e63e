use pointcalc::{
    CompiledExpression, compile,
    error::{EvalError, GeneratorError, ParseError},
    generator::{self, GeneratorConfig},
    point,
};

fn eval(formula: &str, coords: &[f64]) -> f64 {
    compile(formula).unwrap_or_else(|e| panic!("'{formula}' failed to compile: {e}"))
                    .evaluate(coords)
                    .unwrap_or_else(|e| panic!("'{formula}' failed to evaluate: {e}"))
}

fn parse_error(formula: &str) -> ParseError {
    match compile(formula) {
        Ok(_) => panic!("'{formula}' compiled but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}");
}

#[test]
fn single_variable_roundtrip() {
    for v in [-3.5, 0.0, 1.0, 210.0] {
        assert_eq!(eval("x1", &[v]), v);
    }
    assert_eq!(eval("x2", &[1.0, 42.0]), 42.0);
}

#[test]
fn known_values() {
    assert_eq!(eval("x1+x2", &[2.0, 3.0]), 5.0);
    assert_eq!(eval("x1*x1", &[4.0]), 16.0);
    assert_eq!(eval("x1-x2", &[8.0, 5.0]), 3.0);
    assert_eq!(eval("x1/x2", &[10.0, 4.0]), 2.5);
}

#[test]
fn sqrt_of_negative_is_nan_not_an_error() {
    assert!(eval("sqrt(x1)", &[-1.0]).is_nan());
    assert!(eval("log(x1)", &[-2.0]).is_nan());
}

#[test]
fn division_by_zero_propagates_ieee_values() {
    assert_eq!(eval("x1/x2", &[1.0, 0.0]), f64::INFINITY);
    assert_eq!(eval("x1/x2", &[-1.0, 0.0]), f64::NEG_INFINITY);
    assert!(eval("x1/x2", &[0.0, 0.0]).is_nan());
}

#[test]
fn operator_precedence() {
    assert_eq!(eval("2+3*4", &[]), 14.0);
    assert_eq!(eval("2*3+4", &[]), 10.0);
    assert_eq!(eval("10-4-3", &[]), 3.0);
    assert_eq!(eval("8/4/2", &[]), 1.0);
    assert_eq!(eval("(2+3)*4", &[]), 20.0);
    assert_close(eval("2*3^2", &[]), 18.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_close(eval("2^3^2", &[]), 512.0);
    assert_close(eval("2^-1", &[]), 0.5);
}

#[test]
fn unary_minus_binds_looser_than_power() {
    assert_close(eval("-2^2", &[]), -4.0);
    assert_close(eval("(-2)^2", &[]), 4.0);
}

#[test]
fn double_star_is_a_power_alias() {
    assert_close(eval("2**3", &[]), 8.0);
    assert_close(eval("x1**2", &[3.0]), 9.0);
}

#[test]
fn unary_minus() {
    assert_eq!(eval("-5", &[]), -5.0);
    assert_eq!(eval("--5", &[]), 5.0);
    assert_eq!(eval("2*-3", &[]), -6.0);
    assert_eq!(eval("-x1", &[4.0]), -4.0);
}

#[test]
fn builtin_functions() {
    assert_close(eval("sin(0)", &[]), 0.0);
    assert_close(eval("cos(0)", &[]), 1.0);
    assert_close(eval("abs(-3)", &[]), 3.0);
    assert_close(eval("sqrt(x1)", &[16.0]), 4.0);
    assert_close(eval("cbrt(27)", &[]), 3.0);
    assert_close(eval("exp(0)", &[]), 1.0);
    assert_close(eval("ln(1)", &[]), 0.0);
    assert_close(eval("log10(1000)", &[]), 3.0);
    assert_close(eval("floor(2.7)", &[]), 2.0);
    assert_close(eval("ceil(2.1)", &[]), 3.0);
    assert_close(eval("round(2.5)", &[]), 3.0);
    assert_close(eval("sign(-42)", &[]), -1.0);
    assert_close(eval("sign(0)", &[]), 0.0);
    assert_close(eval("hypot(3, 4)", &[]), 5.0);
    assert_close(eval("atan2(0, 1)", &[]), 0.0);
    assert_close(eval("min(2, x1)", &[7.0]), 2.0);
    assert_close(eval("max(x1, x2)", &[1.0, 9.0]), 9.0);
    assert_close(eval("pow(2, 10)", &[]), 1024.0);
    assert_close(eval("log(8, 2)", &[]), 3.0);
    assert_close(eval("radians(180)", &[]), std::f64::consts::PI);
    assert_close(eval("degrees(pi)", &[]), 180.0);
}

#[test]
fn named_constants() {
    assert_eq!(eval("pi", &[]), std::f64::consts::PI);
    assert_eq!(eval("e", &[]), std::f64::consts::E);
    assert_eq!(eval("tau", &[]), std::f64::consts::TAU);
    assert_close(eval("2*pi", &[]), std::f64::consts::TAU);
}

#[test]
fn numeric_literal_forms() {
    assert_eq!(eval("1.5e2", &[]), 150.0);
    assert_eq!(eval(".5", &[]), 0.5);
    assert_eq!(eval("1e3", &[]), 1000.0);
    assert_close(eval("2e-1", &[]), 0.2);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(eval(" x1  +\tx2 ", &[2.0, 3.0]), 5.0);
}

#[test]
fn x0_is_rejected_in_every_context() {
    for formula in ["x0", "x1+x0", "sin(x0)", "(x0)", "-x0", "x0^2"] {
        assert!(matches!(parse_error(formula),
                         ParseError::InvalidVariableIndex { index: 0, .. }),
                "'{formula}' should be rejected for its variable index");
    }
}

#[test]
fn unbalanced_parens_fail_at_parse_time() {
    for formula in ["(x1", "x1)", "sin(x1", "((x1)", "sin(x1))", "()"] {
        assert!(matches!(parse_error(formula), ParseError::UnbalancedParens { .. }),
                "'{formula}' should be rejected for unbalanced parentheses");
    }
}

#[test]
fn unknown_functions_are_rejected() {
    assert!(matches!(parse_error("foo(x1)"),
                     ParseError::UnknownFunction { name, .. } if name == "foo"));
    assert!(matches!(parse_error("system(1)"),
                     ParseError::UnknownFunction { .. }));
}

#[test]
fn bare_identifiers_are_rejected() {
    assert!(matches!(parse_error("y"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("x"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("x1 + y"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn wrong_argument_counts_are_rejected() {
    assert!(matches!(parse_error("sin(x1, x2)"),
                     ParseError::WrongArgumentCount { found: 2, .. }));
    assert!(matches!(parse_error("sin()"),
                     ParseError::WrongArgumentCount { found: 0, .. }));
    assert!(matches!(parse_error("min(1)"),
                     ParseError::WrongArgumentCount { found: 1, .. }));
    assert!(matches!(parse_error("log(1, 2, 3)"),
                     ParseError::WrongArgumentCount { found: 3, .. }));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(parse_error("1 2"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error("x1 x2"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error("1 + "),
                     ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn empty_formulas_are_rejected() {
    assert!(matches!(parse_error(""), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("   "), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn foreign_characters_are_rejected() {
    assert!(matches!(parse_error("x1 $ 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("1 & 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("x1 = 2"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn missing_variables_are_evaluation_errors() {
    let expr = compile("x3").unwrap();
    assert_eq!(expr.max_variable_index(), 3);

    assert!(matches!(expr.evaluate(&[1.0]).unwrap_err(),
                     EvalError::MissingVariable { index: 2, .. }));
    assert_eq!(expr.evaluate(&[1.0, 2.0, 3.0]).unwrap(), 3.0);
}

#[test]
fn constant_formulas_need_no_coordinates() {
    let expr = compile("1 + 2").unwrap();
    assert_eq!(expr.max_variable_index(), 0);
    assert_eq!(expr.evaluate(&[]).unwrap(), 3.0);
}

#[test]
fn evaluation_is_bit_deterministic() {
    let expr = compile("sin(x1) * exp(x2) / x3").unwrap();
    let coords = [0.3, 1.7, 2.9];

    let first = expr.evaluate(&coords).unwrap();
    let second = expr.evaluate(&coords).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn compiled_expressions_are_shareable_across_threads() {
    let expr = compile("x1 + x2").unwrap();

    std::thread::scope(|s| {
        for i in 0..4 {
            let expr = &expr;
            s.spawn(move || {
                let i = f64::from(i);
                assert_eq!(expr.evaluate(&[i, 1.0]).unwrap(), i + 1.0);
            });
        }
    });
}

#[test]
fn generator_emits_header_and_rows_within_bounds() {
    let expr = compile("x1 + x2").unwrap();
    let config = GeneratorConfig { seed: Some(42),
                                   ..GeneratorConfig::new(2, 3) };

    let mut out = Vec::new();
    generator::generate(&config, &expr, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "2 3");

    for line in &lines[1..] {
        let fields: Vec<f64> = line.split_whitespace()
                                   .map(|t| t.parse().unwrap())
                                   .collect();
        assert_eq!(fields.len(), 3);
        assert!(fields[..2].iter()
                           .all(|c| (generator::DEFAULT_MIN..=generator::DEFAULT_MAX).contains(c)));
        // Float formatting round-trips exactly, so the printed value must
        // equal the sum of the printed coordinates.
        assert_eq!(fields[2], fields[0] + fields[1]);
    }
}

#[test]
fn generator_is_reproducible_with_a_seed() {
    let expr = compile("x1 * x2").unwrap();
    let config = GeneratorConfig { seed: Some(7),
                                   ..GeneratorConfig::new(3, 5) };

    let mut first = Vec::new();
    generator::generate(&config, &expr, &mut first).unwrap();
    let mut second = Vec::new();
    generator::generate(&config, &expr, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn generator_rejects_invalid_configs() {
    let expr = compile("x1").unwrap();

    let zero_dimension = GeneratorConfig::new(0, 3);
    assert!(matches!(generator::sample(&zero_dimension, &expr),
                     Err(GeneratorError::InvalidDimension { .. })));

    let zero_count = GeneratorConfig::new(2, 0);
    assert!(matches!(generator::sample(&zero_count, &expr),
                     Err(GeneratorError::InvalidCount { .. })));

    let inverted_bounds = GeneratorConfig { min: 1.0,
                                            max: -1.0,
                                            ..GeneratorConfig::new(2, 3) };
    assert!(matches!(generator::sample(&inverted_bounds, &expr),
                     Err(GeneratorError::InvalidBounds { .. })));

    let nan_bounds = GeneratorConfig { min: f64::NAN,
                                       ..GeneratorConfig::new(2, 3) };
    assert!(matches!(generator::sample(&nan_bounds, &expr),
                     Err(GeneratorError::InvalidBounds { .. })));
}

#[test]
fn generator_fails_before_sampling_when_dimension_is_too_small() {
    let expr = compile("x3").unwrap();
    let config = GeneratorConfig { seed: Some(1),
                                   ..GeneratorConfig::new(2, 3) };

    let mut out = Vec::new();
    let result = generator::generate(&config, &expr, &mut out);
    assert!(matches!(result,
                     Err(GeneratorError::Eval(EvalError::MissingVariable { index: 2, .. }))));
    assert!(out.is_empty(), "nothing should be written on failure");
}

#[test]
fn point_evaluation() {
    assert_eq!(point::evaluate("2 3", "x1 + x2").unwrap(), 5.0);
    assert_eq!(point::evaluate("4", "x1 * 3").unwrap(), 12.0);
    assert!(point::evaluate("1 2", "x3").is_err());
}

#[test]
fn coordinate_strings_accept_signs_and_exponents() {
    let coords = point::parse_coordinates("-1.5 +2 3e2").unwrap();
    assert_eq!(coords, vec![-1.5, 2.0, 300.0]);
}

#[test]
fn malformed_coordinates_are_rejected() {
    let err = point::parse_coordinates("2 abc 3").unwrap_err();
    assert!(matches!(err,
                     ParseError::InvalidNumber { ref text, index: 2 } if text == "abc"));
}

#[test]
fn compiled_expressions_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledExpression>();
}

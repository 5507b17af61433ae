use arithmetica::{
    ast::Expr, compute, error::EvalFailure, get_ast, interpreter::evaluator::evaluate,
    util::num::format_number,
};

fn eval(src: &str) -> f64 {
    evaluate(&get_ast(src).unwrap_or_else(|e| panic!("Input {src:?} failed: {e}")))
}

#[test]
fn evaluates_each_node_kind() {
    let tree = Expr::divide(Expr::multiply(Expr::add(Expr::number(1.0), Expr::number(2.0)),
                                           Expr::negate(Expr::number(4.0))),
                            Expr::subtract(Expr::number(5.0), Expr::number(3.0)));
    assert!((evaluate(&tree) - -6.0).abs() < f64::EPSILON);
}

#[test]
fn testable_properties_hold() {
    assert!((eval("8-3-2") - 3.0).abs() < f64::EPSILON);
    assert!((eval("--5") - 5.0).abs() < f64::EPSILON);
    assert!((eval("2+3*4") - 14.0).abs() < f64::EPSILON);
    assert!((eval("(2+3)*4") - 20.0).abs() < f64::EPSILON);
}

#[test]
fn ieee_edge_cases() {
    assert_eq!(eval("1/0"), f64::INFINITY);
    assert_eq!(eval("-1/0"), f64::NEG_INFINITY);
    assert!(eval("0/0").is_nan());
    assert!(eval("0/0*0").is_nan());
    assert!(eval("-0").is_sign_negative());
}

#[test]
fn formatting_rules() {
    assert_eq!(format_number(4.0), "4");
    assert_eq!(format_number(4.5), "4.5");
    assert_eq!(format_number(-12.0), "-12");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(f64::INFINITY), "inf");
    assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_number(-f64::NAN), "nan");
    assert_eq!(format_number(1e20), "100000000000000000000");
}

#[test]
fn literal_formatting_round_trips() {
    for value in [0.5, 2.25, 1234.5678, 0.1, 1.0 / 3.0, 98_765.0] {
        let text = format_number(value);
        assert_eq!(eval(&text), value, "Text: {text:?}");
    }
}

#[test]
fn failures_carry_their_stage() {
    assert!(matches!(compute("1 + #"), Err(EvalFailure::Scan(_))));
    assert!(matches!(compute("1 +"), Err(EvalFailure::Parse(_))));
    assert_eq!(compute("1+#2").unwrap_err().position(), 2);
}

//! Lexical binding: `let`, shadowing, closures, and application.

use mira_ast::ArithOp;
use pretty_assertions::assert_eq;

use super::Harness;
use crate::errors::EvalErrorKind;
use crate::Value;

#[test]
fn let_bindings_are_sequential() {
    let mut h = Harness::new();
    // (let ((a 1) (b (+ a 1))) (+ a b)) = 3
    let one = h.num(1.0);
    let a_ref = h.var("a");
    let one_again = h.num(1.0);
    let b_init = h.arith(ArithOp::Add, &[a_ref, one_again]);
    let a_ref2 = h.var("a");
    let b_ref = h.var("b");
    let body = h.arith(ArithOp::Add, &[a_ref2, b_ref]);
    let e = h.let_exp(&[("a", one), ("b", b_init)], body);
    assert_eq!(h.eval(e), Ok(Value::Number(3.0)));
}

#[test]
fn inner_let_shadows_outer() {
    let mut h = Harness::new();
    let one = h.num(1.0);
    let two = h.num(2.0);
    let x_ref = h.var("x");
    let inner = h.let_exp(&[("x", two)], x_ref);
    let e = h.let_exp(&[("x", one)], inner);
    assert_eq!(h.eval(e), Ok(Value::Number(2.0)));
}

#[test]
fn outer_binding_survives_inner_scope() {
    let mut h = Harness::new();
    // (let ((x 1)) (+ (let ((x 10)) x) x)) = 11
    let one = h.num(1.0);
    let ten = h.num(10.0);
    let inner_x = h.var("x");
    let inner = h.let_exp(&[("x", ten)], inner_x);
    let outer_x = h.var("x");
    let body = h.arith(ArithOp::Add, &[inner, outer_x]);
    let e = h.let_exp(&[("x", one)], body);
    assert_eq!(h.eval(e), Ok(Value::Number(11.0)));
}

#[test]
fn unbound_variable_reports_its_name() {
    let mut h = Harness::new();
    let e = h.var("ghost");
    let err = h.eval(e).unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::UnboundVariable {
            name: "ghost".to_owned(),
        }
    );
}

#[test]
fn closures_capture_their_defining_scope() {
    let mut h = Harness::new();
    // f captures a=10; rebinding a to 99 at the call site is invisible.
    // (let ((f (let ((a 10)) (lambda (y) (+ a y)))) (a 99)) (f 1)) = 11
    let ten = h.num(10.0);
    let a_ref = h.var("a");
    let y_ref = h.var("y");
    let lambda_body = h.arith(ArithOp::Add, &[a_ref, y_ref]);
    let lambda = h.lambda(&["y"], lambda_body);
    let f_init = h.let_exp(&[("a", ten)], lambda);
    let ninety_nine = h.num(99.0);
    let f_ref = h.var("f");
    let one = h.num(1.0);
    let body = h.call(f_ref, &[one]);
    let e = h.let_exp(&[("f", f_init), ("a", ninety_nine)], body);
    assert_eq!(h.eval(e), Ok(Value::Number(11.0)));
}

#[test]
fn multi_parameter_application() {
    let mut h = Harness::new();
    let x_ref = h.var("x");
    let y_ref = h.var("y");
    let lambda_body = h.arith(ArithOp::Sub, &[x_ref, y_ref]);
    let lambda = h.lambda(&["x", "y"], lambda_body);
    let ten = h.num(10.0);
    let three = h.num(3.0);
    let e = h.call(lambda, &[ten, three]);
    assert_eq!(h.eval(e), Ok(Value::Number(7.0)));
}

#[test]
fn calling_a_number_is_a_type_error() {
    let mut h = Harness::new();
    let one = h.num(1.0);
    let two = h.num(2.0);
    let e = h.call(one, &[two]);
    let err = h.eval(e).unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::NotCallable {
            type_name: "number",
        }
    );
}

#[test]
fn arity_mismatch_reports_both_counts() {
    let mut h = Harness::new();
    let x_ref = h.var("x");
    let lambda = h.lambda(&["x", "y"], x_ref);
    let one = h.num(1.0);
    let e = h.call(lambda, &[one]);
    let err = h.eval(e).unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::ArityMismatch {
            expected: 2,
            got: 1,
        }
    );
}

#[test]
fn zero_parameter_closure() {
    let mut h = Harness::new();
    let forty_two = h.num(42.0);
    let lambda = h.lambda(&[], forty_two);
    let e = h.call(lambda, &[]);
    assert_eq!(h.eval(e), Ok(Value::Number(42.0)));
}

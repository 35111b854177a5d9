//! Arithmetic operator semantics: fold directions and identities.

use mira_ast::ArithOp;
use pretty_assertions::assert_eq;

use super::Harness;
use crate::errors::EvalErrorKind;
use crate::Value;

#[test]
fn add_folds_with_identity_zero() {
    let mut h = Harness::new();
    let ops = [h.num(1.0), h.num(2.0), h.num(3.0)];
    let e = h.arith(ArithOp::Add, &ops);
    assert_eq!(h.eval(e), Ok(Value::Number(6.0)));
}

#[test]
fn mul_folds_with_identity_one() {
    let mut h = Harness::new();
    let ops = [h.num(2.0), h.num(3.0), h.num(4.0)];
    let e = h.arith(ArithOp::Mul, &ops);
    assert_eq!(h.eval(e), Ok(Value::Number(24.0)));
}

#[test]
fn sub_is_left_associative() {
    let mut h = Harness::new();
    let ops = [h.num(10.0), h.num(3.0), h.num(2.0)];
    let e = h.arith(ArithOp::Sub, &ops);
    assert_eq!(h.eval(e), Ok(Value::Number(5.0)));
}

#[test]
fn sub_single_operand_is_itself() {
    let mut h = Harness::new();
    let ops = [h.num(10.0)];
    let e = h.arith(ArithOp::Sub, &ops);
    assert_eq!(h.eval(e), Ok(Value::Number(10.0)));
}

#[test]
fn div_is_left_associative() {
    let mut h = Harness::new();
    let ops = [h.num(100.0), h.num(5.0), h.num(2.0)];
    let e = h.arith(ArithOp::Div, &ops);
    assert_eq!(h.eval(e), Ok(Value::Number(10.0)));
}

#[test]
fn int_div_truncates_toward_zero() {
    let mut h = Harness::new();
    let ops = [h.num(7.0), h.num(2.0)];
    let e = h.arith(ArithOp::IntDiv, &ops);
    assert_eq!(h.eval(e), Ok(Value::Number(3.0)));
}

#[test]
fn int_div_truncates_at_each_step() {
    let mut h = Harness::new();
    // (7 // 2) // 2 = 3 // 2 = 1, not trunc(7/4) applied once at the end.
    let ops = [h.num(7.0), h.num(2.0), h.num(2.0)];
    let e = h.arith(ArithOp::IntDiv, &ops);
    assert_eq!(h.eval(e), Ok(Value::Number(1.0)));
}

#[test]
fn pow_is_right_associative() {
    let mut h = Harness::new();
    // 2^(3^2) = 512, not (2^3)^2 = 64.
    let ops = [h.num(2.0), h.num(3.0), h.num(2.0)];
    let e = h.arith(ArithOp::Pow, &ops);
    assert_eq!(h.eval(e), Ok(Value::Number(512.0)));
}

#[test]
fn nested_arithmetic() {
    let mut h = Harness::new();
    let product_ops = [h.num(2.0), h.num(3.0)];
    let product = h.arith(ArithOp::Mul, &product_ops);
    let difference_ops = [h.num(10.0), h.num(4.0)];
    let difference = h.arith(ArithOp::Sub, &difference_ops);
    let e = h.arith(ArithOp::Add, &[product, difference]);
    assert_eq!(h.eval(e), Ok(Value::Number(12.0)));
}

#[test]
fn non_number_operand_is_a_type_error() {
    let mut h = Harness::new();
    let ops = [h.num(1.0), h.bool_lit(true)];
    let e = h.arith(ArithOp::Add, &ops);
    let err = h.eval(e).unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::NumberRequired {
            op: "+",
            got: "bool",
        }
    );
}

//! Binary operator semantics.
//!
//! Both operands are already evaluated (left, then right) when these run;
//! `&&` and `||` do not short-circuit.

use ember_ir::BinaryOp;

use crate::{type_mismatch, EvalResult, Value};

/// Apply `op` to two evaluated operands.
pub(crate) fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let numbers = match (left, right) {
        (Value::Number(a), Value::Number(b)) => Some((*a, *b)),
        _ => None,
    };

    let value = match (op, numbers) {
        (BinaryOp::And | BinaryOp::Or, _) => return logical(op, left, right),
        (_, None) => return Err(type_mismatch(op, left, right)),
        (BinaryOp::Add, Some((a, b))) => Value::Number(a + b),
        (BinaryOp::Sub, Some((a, b))) => Value::Number(a - b),
        (BinaryOp::Mul, Some((a, b))) => Value::Number(a * b),
        (BinaryOp::Div, Some((a, b))) => Value::Number(a / b),
        (BinaryOp::Mod, Some((a, b))) => Value::Number(a % b),
        (BinaryOp::Eq, Some((a, b))) => Value::Boolean(a == b),
        (BinaryOp::NotEq, Some((a, b))) => Value::Boolean(a != b),
        (BinaryOp::Lt, Some((a, b))) => Value::Boolean(a < b),
        (BinaryOp::Gt, Some((a, b))) => Value::Boolean(a > b),
        (BinaryOp::LtEq, Some((a, b))) => Value::Boolean(a <= b),
        (BinaryOp::GtEq, Some((a, b))) => Value::Boolean(a >= b),
    };
    Ok(value)
}

fn logical(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let mismatch = || type_mismatch(op, left, right);
    let a = truthiness(left).ok_or_else(mismatch)?;
    let b = truthiness(right).ok_or_else(mismatch)?;
    let result = if op == BinaryOp::And { a && b } else { a || b };
    Ok(Value::Boolean(result))
}

/// Boolean reading of a logical operand: booleans as themselves, numbers as
/// non-zero and not `NaN`. Every other kind has no truth value.
pub(crate) fn truthiness(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::Number(n) => Some(*n != 0.0 && !n.is_nan()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::{EvalError, EvalErrorKind};
    use pretty_assertions::assert_eq;

    fn eval(op: BinaryOp, a: Value, b: Value) -> Result<Value, EvalError> {
        evaluate_binary(op, &a, &b)
    }

    #[test]
    fn test_arithmetic() {
        let n = Value::Number;
        assert_eq!(eval(BinaryOp::Add, n(2.0), n(3.0)), Ok(n(5.0)));
        assert_eq!(eval(BinaryOp::Sub, n(2.0), n(3.0)), Ok(n(-1.0)));
        assert_eq!(eval(BinaryOp::Mul, n(2.0), n(3.0)), Ok(n(6.0)));
        assert_eq!(eval(BinaryOp::Div, n(3.0), n(2.0)), Ok(n(1.5)));
        assert_eq!(eval(BinaryOp::Mod, n(7.0), n(3.0)), Ok(n(1.0)));
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        let n = Value::Number;
        assert_eq!(eval(BinaryOp::Div, n(1.0), n(0.0)), Ok(n(f64::INFINITY)));
        let rem = eval(BinaryOp::Mod, n(1.0), n(0.0)).unwrap();
        assert!(rem.as_number().is_some_and(f64::is_nan));
    }

    #[test]
    fn test_comparisons() {
        let n = Value::Number;
        let t = Value::Boolean(true);
        let f = Value::Boolean(false);
        assert_eq!(eval(BinaryOp::Eq, n(1.0), n(1.0)), Ok(t.clone()));
        assert_eq!(eval(BinaryOp::NotEq, n(1.0), n(1.0)), Ok(f.clone()));
        assert_eq!(eval(BinaryOp::Lt, n(1.0), n(2.0)), Ok(t.clone()));
        assert_eq!(eval(BinaryOp::Gt, n(1.0), n(2.0)), Ok(f.clone()));
        assert_eq!(eval(BinaryOp::LtEq, n(2.0), n(2.0)), Ok(t.clone()));
        assert_eq!(eval(BinaryOp::GtEq, n(1.0), n(2.0)), Ok(f));
    }

    #[test]
    fn test_non_numeric_operands() {
        let err = eval(BinaryOp::Add, Value::string("a"), Value::Number(1.0)).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch { op: BinaryOp::Add, left: "string", right: "number" }
        );
        assert_eq!(err.to_string(), "operator `+` cannot be applied to string and number");

        // Equality is numeric only.
        let err = eval(BinaryOp::Eq, Value::Boolean(true), Value::Boolean(true)).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { op: BinaryOp::Eq, .. }));
    }

    #[test]
    fn test_logical_operators() {
        let t = Value::Boolean(true);
        let f = Value::Boolean(false);
        assert_eq!(eval(BinaryOp::And, t.clone(), f.clone()), Ok(f.clone()));
        assert_eq!(eval(BinaryOp::Or, t.clone(), f.clone()), Ok(t.clone()));
        assert_eq!(eval(BinaryOp::And, Value::Number(2.0), t.clone()), Ok(t.clone()));
        assert_eq!(eval(BinaryOp::Or, Value::Number(0.0), Value::Number(f64::NAN)), Ok(f));
    }

    #[test]
    fn test_logical_rejects_non_truthy_kinds() {
        let err = eval(BinaryOp::Or, Value::Boolean(false), Value::Null).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch { op: BinaryOp::Or, left: "boolean", right: "null" }
        );
        assert!(eval(BinaryOp::And, Value::string("yes"), Value::Boolean(true)).is_err());
    }
}

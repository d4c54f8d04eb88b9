#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::{buffer_handler, EvalErrorKind, PrintHandlerImpl};
use pretty_assertions::assert_eq;

fn call(func: NativeFn, args: &[Value]) -> EvalResult {
    let env = Environment::new();
    let print = PrintHandlerImpl::Silent;
    func(&NativeCall { env: &env, print: &print }, args)
}

fn numbers(values: &[f64]) -> Value {
    Value::array(values.iter().copied().map(Value::Number).collect())
}

#[test]
fn test_install_declares_constants() {
    let env = Environment::new();
    install(&env);

    for name in ["null", "true", "false", "print", "not", "str", "Array"] {
        let binding = env.lookup(name).unwrap_or_else(|| panic!("{name} missing"));
        assert_eq!(binding.mutability, Mutability::Immutable, "{name}");
    }
    assert_eq!(env.get("null"), Ok(Value::Null));
    assert_eq!(env.get("true"), Ok(Value::Boolean(true)));

    let array = env.get("Array").unwrap();
    let Value::Object(array) = &array else {
        panic!("Array should be an object");
    };
    let keys: Vec<_> = array.borrow().keys().cloned().collect();
    assert_eq!(keys, vec!["length", "push", "pop", "shift", "unshift"]);
}

#[test]
fn test_install_twice_keeps_first_binding() {
    let env = Environment::new();
    env.declare("print", Value::Number(1.0), Mutability::Mutable).unwrap();
    install(&env);
    assert_eq!(env.get("print"), Ok(Value::Number(1.0)));
}

#[test]
fn test_print_concatenates_arguments() {
    let env = Environment::new();
    let handler = buffer_handler();
    let args = [Value::string("x = "), Value::Number(4.0), Value::Boolean(true), Value::Null];
    let result = print_line(&NativeCall { env: &env, print: &handler }, &args);
    assert_eq!(result, Ok(Value::Null));
    assert_eq!(handler.get_output(), "x = 4truenull\n");
}

#[test]
fn test_print_without_arguments_prints_empty_line() {
    let env = Environment::new();
    let handler = buffer_handler();
    print_line(&NativeCall { env: &env, print: &handler }, &[]).unwrap();
    assert_eq!(handler.get_output(), "\n");
}

#[test]
fn test_not() {
    assert_eq!(call(negate, &[Value::Boolean(true)]), Ok(Value::Boolean(false)));
    let err = call(negate, &[Value::Number(1.0)]).unwrap_err();
    assert_eq!(err.to_string(), "not: expected a boolean, found number");
    let err = call(negate, &[]).unwrap_err();
    assert_eq!(err.to_string(), "not: expected 1 argument(s), found 0");
}

#[test]
fn test_str() {
    assert_eq!(call(stringify, &[Value::Number(2.5)]), Ok(Value::string("2.5")));
    assert_eq!(call(stringify, &[numbers(&[1.0, 2.0])]), Ok(Value::string("[1, 2]")));
    assert!(call(stringify, &[Value::Null, Value::Null]).is_err());
}

#[test]
fn test_push_then_length() {
    let xs = numbers(&[1.0]);
    assert_eq!(
        call(array_push, &[xs.clone(), Value::Number(2.0), Value::Number(3.0)]),
        Ok(Value::Number(3.0))
    );
    assert_eq!(call(array_length, &[xs.clone()]), Ok(Value::Number(3.0)));
    assert_eq!(xs, numbers(&[1.0, 2.0, 3.0]));
}

#[test]
fn test_pop_and_shift() {
    let xs = numbers(&[1.0, 2.0, 3.0]);
    assert_eq!(call(array_pop, &[xs.clone()]), Ok(Value::Number(3.0)));
    assert_eq!(call(array_shift, &[xs.clone()]), Ok(Value::Number(1.0)));
    assert_eq!(xs, numbers(&[2.0]));
}

#[test]
fn test_pop_and_shift_on_empty_return_null() {
    let empty = numbers(&[]);
    assert_eq!(call(array_pop, &[empty.clone()]), Ok(Value::Null));
    assert_eq!(call(array_shift, &[empty.clone()]), Ok(Value::Null));
    assert_eq!(call(array_length, &[empty]), Ok(Value::Number(0.0)));
}

#[test]
fn test_unshift_keeps_argument_order() {
    let xs = numbers(&[3.0]);
    assert_eq!(
        call(array_unshift, &[xs.clone(), Value::Number(1.0), Value::Number(2.0)]),
        Ok(Value::Number(3.0))
    );
    assert_eq!(xs, numbers(&[1.0, 2.0, 3.0]));
}

#[test]
fn test_push_array_into_itself() {
    let xs = numbers(&[]);
    call(array_push, &[xs.clone(), xs.clone()]).unwrap();
    assert_eq!(call(array_length, &[xs]), Ok(Value::Number(1.0)));
}

#[test]
fn test_array_functions_require_array() {
    let err = call(array_length, &[Value::string("abc")]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidArgument {
            function: "Array.length",
            message: "expected an array as the first argument, found string".into(),
        }
    );
    assert!(call(array_push, &[]).is_err());
}

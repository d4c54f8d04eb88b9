//! Host functions available to every script.
//!
//! | name            | behavior                                         |
//! |-----------------|--------------------------------------------------|
//! | `null` `true` `false` | constants                                  |
//! | `print(..)`     | concatenates its arguments onto one output line  |
//! | `not(b)`        | boolean negation                                 |
//! | `str(v)`        | textual form of a value                          |
//! | `Array.length(a)` | number of elements                             |
//! | `Array.push(a, ..)` | append, returns the new length               |
//! | `Array.pop(a)`  | remove the last element, `null` when empty       |
//! | `Array.shift(a)` | remove the first element, `null` when empty     |
//! | `Array.unshift(a, ..)` | prepend, returns the new length           |

use rustc_hash::FxBuildHasher;

use crate::{
    invalid_argument, Environment, EvalError, EvalResult, Heap, Mutability, NativeCall, NativeFn,
    Properties, Value,
};

const ARRAY_FUNCTIONS: [(&str, &str, NativeFn); 5] = [
    ("length", "Array.length", array_length),
    ("push", "Array.push", array_push),
    ("pop", "Array.pop", array_pop),
    ("shift", "Array.shift", array_shift),
    ("unshift", "Array.unshift", array_unshift),
];

/// Declare the registry as constants in `env`. Names already declared there
/// keep their existing binding.
pub fn install(env: &Environment) {
    let mut array = Properties::with_capacity_and_hasher(ARRAY_FUNCTIONS.len(), FxBuildHasher);
    for (key, name, func) in ARRAY_FUNCTIONS {
        array.insert(key.to_owned(), Value::native(name, func));
    }

    let globals = [
        ("null", Value::Null),
        ("true", Value::Boolean(true)),
        ("false", Value::Boolean(false)),
        ("print", Value::native("print", print_line)),
        ("not", Value::native("not", negate)),
        ("str", Value::native("str", stringify)),
        ("Array", Value::object(array)),
    ];
    for (name, value) in globals {
        if env.declare(name, value, Mutability::Immutable).is_err() {
            tracing::debug!(name, "global already declared; keeping existing binding");
        }
    }
}

fn print_line(call: &NativeCall<'_>, args: &[Value]) -> EvalResult {
    let line: String = args.iter().map(Value::display_value).collect();
    call.print.println(&line);
    Ok(Value::Null)
}

fn negate(_: &NativeCall<'_>, args: &[Value]) -> EvalResult {
    match args {
        [Value::Boolean(b)] => Ok(Value::Boolean(!b)),
        [other] => {
            Err(invalid_argument("not", format!("expected a boolean, found {}", other.type_name())))
        }
        _ => Err(arity("not", 1, args.len())),
    }
}

fn stringify(_: &NativeCall<'_>, args: &[Value]) -> EvalResult {
    match args {
        [value] => Ok(Value::string(value.display_value())),
        _ => Err(arity("str", 1, args.len())),
    }
}

fn array_length(_: &NativeCall<'_>, args: &[Value]) -> EvalResult {
    let items = array_arg("Array.length", args)?;
    let len = items.borrow().len();
    Ok(length(len))
}

fn array_push(_: &NativeCall<'_>, args: &[Value]) -> EvalResult {
    let items = array_arg("Array.push", args)?;
    let mut items = items.borrow_mut();
    items.extend_from_slice(&args[1..]);
    Ok(length(items.len()))
}

fn array_pop(_: &NativeCall<'_>, args: &[Value]) -> EvalResult {
    let items = array_arg("Array.pop", args)?;
    let popped = items.borrow_mut().pop();
    Ok(popped.unwrap_or(Value::Null))
}

fn array_shift(_: &NativeCall<'_>, args: &[Value]) -> EvalResult {
    let items = array_arg("Array.shift", args)?;
    let mut items = items.borrow_mut();
    if items.is_empty() {
        return Ok(Value::Null);
    }
    Ok(items.remove(0))
}

fn array_unshift(_: &NativeCall<'_>, args: &[Value]) -> EvalResult {
    let items = array_arg("Array.unshift", args)?;
    let mut items = items.borrow_mut();
    items.splice(0..0, args[1..].iter().cloned());
    Ok(length(items.len()))
}

/// The array every `Array.*` function takes first.
fn array_arg<'a>(
    function: &'static str,
    args: &'a [Value],
) -> Result<&'a Heap<Vec<Value>>, EvalError> {
    match args.first() {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(invalid_argument(
            function,
            format!("expected an array as the first argument, found {}", other.type_name()),
        )),
        None => Err(invalid_argument(function, "expected an array as the first argument")),
    }
}

#[cold]
fn arity(function: &'static str, expected: usize, found: usize) -> EvalError {
    invalid_argument(function, format!("expected {expected} argument(s), found {found}"))
}

#[allow(clippy::cast_precision_loss)]
fn length(len: usize) -> Value {
    Value::Number(len as f64)
}

#[cfg(test)]
mod tests;

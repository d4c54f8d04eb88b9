//! Member reads and assignments.
//!
//! `.name` works on objects and `[index]` on arrays; the two forms do not
//! cross over. Array indices are bounds-checked for reads and writes alike;
//! arrays only grow through `Array.push` and `Array.unshift`.

use ember_ir::Expr;

use super::{describe, scope_error, Interpreter};
use crate::{
    index_out_of_bounds, invalid_assignment_target, invalid_index, invalid_member_access,
    property_not_found, Environment, EvalError, EvalResult, Value,
};

impl Interpreter {
    pub(super) fn eval_member(
        &mut self,
        object: &Expr,
        property: &Expr,
        computed: bool,
        env: &Environment,
    ) -> EvalResult {
        let target = self.eval_expr(object, env)?;
        match (&target, computed) {
            (Value::Object(props), false) => {
                let name = property_key(property)?;
                props.borrow().get(name).cloned().ok_or_else(|| property_not_found(name))
            }
            (Value::Array(items), true) => {
                let index = self.eval_expr(property, env)?;
                let items = items.borrow();
                let slot = array_slot(&index, items.len())?;
                Ok(items[slot].clone())
            }
            _ => Err(invalid_member_access(computed, &target)),
        }
    }

    pub(super) fn eval_assignment(
        &mut self,
        target: &Expr,
        value: &Expr,
        env: &Environment,
    ) -> EvalResult {
        match target {
            Expr::Identifier(name) => {
                let value = self.eval_expr(value, env)?;
                env.assign(name, value).map_err(|err| scope_error(err, name))
            }
            Expr::Member { object, property, computed } => {
                let container = self.eval_expr(object, env)?;
                match (&container, *computed) {
                    (Value::Object(props), false) => {
                        let name = property_key(property)?;
                        if !props.borrow().contains_key(name) {
                            return Err(property_not_found(name));
                        }
                        let value = self.eval_expr(value, env)?;
                        let mut props = props.borrow_mut();
                        let slot = props.get_mut(name).ok_or_else(|| property_not_found(name))?;
                        *slot = value.clone();
                        Ok(value)
                    }
                    (Value::Array(items), true) => {
                        let index = self.eval_expr(property, env)?;
                        array_slot(&index, items.borrow().len())?;
                        let value = self.eval_expr(value, env)?;
                        // The right-hand side may have resized the array.
                        let mut items = items.borrow_mut();
                        let slot = array_slot(&index, items.len())?;
                        items[slot] = value.clone();
                        Ok(value)
                    }
                    _ => Err(invalid_member_access(*computed, &container)),
                }
            }
            other => Err(invalid_assignment_target(describe(other))),
        }
    }
}

/// Name of a `.name` property. The parser only ever puts an identifier here.
fn property_key(property: &Expr) -> Result<&str, EvalError> {
    match property {
        Expr::Identifier(name) => Ok(name),
        other => Err(property_not_found(describe(other))),
    }
}

/// Validate `index` against an array of length `len`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn array_slot(index: &Value, len: usize) -> Result<usize, EvalError> {
    let Value::Number(n) = *index else {
        return Err(invalid_index(index));
    };
    if n.fract() == 0.0 && n >= 0.0 && n < len as f64 {
        Ok(n as usize)
    } else {
        Err(index_out_of_bounds(n, len))
    }
}

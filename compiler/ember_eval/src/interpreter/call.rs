//! Function calls.

use ember_ir::Expr;

use super::{scope_error, Interpreter};
use crate::{
    not_callable, CallFrame, Environment, EvalResult, FunctionValue, Mutability, NativeCall,
    Value,
};

impl Interpreter {
    /// Callee first, then arguments left to right, then the call itself.
    pub(super) fn eval_call(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        env: &Environment,
    ) -> EvalResult {
        let callee = self.eval_expr(callee, env)?;
        let args =
            args.iter().map(|arg| self.eval_expr(arg, env)).collect::<Result<Vec<_>, _>>()?;
        self.call_value(&callee, args, env)
    }

    /// Invoke a callable value. `env` is the caller's scope; natives receive
    /// it, user functions ignore it in favor of their captured scope.
    pub fn call_value(&mut self, callee: &Value, args: Vec<Value>, env: &Environment) -> EvalResult {
        match callee {
            Value::NativeFunction(native) => {
                let call = NativeCall { env, print: &self.print_handler };
                (native.func)(&call, &args)
            }
            Value::Function(function) => self.call_function(function, args),
            other => Err(not_callable(other)),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(function = %function.name()))]
    fn call_function(&mut self, function: &FunctionValue, args: Vec<Value>) -> EvalResult {
        self.call_stack.push(CallFrame { name: function.name().to_owned() })?;
        let result = self.bind_and_run(function, args);
        let result = result.map_err(|err| self.call_stack.attach_backtrace(err));
        self.call_stack.pop();
        result
    }

    /// Parameters become constants in a fresh child of the captured scope.
    /// Missing arguments bind `Null`; extra arguments are dropped.
    fn bind_and_run(&mut self, function: &FunctionValue, args: Vec<Value>) -> EvalResult {
        let scope = function.env.child();
        let mut args = args.into_iter();
        for param in &function.decl.params {
            let value = args.next().unwrap_or(Value::Null);
            scope
                .declare(param, value, Mutability::Immutable)
                .map_err(|err| scope_error(err, param))?;
        }
        self.eval_block(&function.decl.body, &scope)
    }
}

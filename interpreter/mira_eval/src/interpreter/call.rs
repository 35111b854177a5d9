//! Closure application with call-by-need argument passing.

use mira_ast::ExprId;

use crate::environment::Env;
use crate::errors::{arity_mismatch, not_callable, EvalResult};
use crate::value::Value;

use super::Interpreter;

impl Interpreter<'_> {
    /// Apply a closure.
    ///
    /// Arguments are not evaluated here: each argument expression is
    /// suspended together with the *caller's* environment into a fresh
    /// promise and bound to its parameter, one frame per parameter on top
    /// of the closure's captured chain. The promise is forced on first
    /// reference inside the body and memoized for any later reference.
    pub(super) fn eval_call(&self, callee: ExprId, args: &[ExprId], env: &Env) -> EvalResult {
        let func = match self.eval_expr(callee, env)? {
            Value::Closure(func) => func,
            other => return Err(not_callable(other.type_name())),
        };
        if func.params.len() != args.len() {
            return Err(arity_mismatch(func.params.len(), args.len()));
        }

        let mut call_env = func.env.clone();
        for (&param, &arg) in func.params.iter().zip(args) {
            call_env = call_env.extend(param, Value::promise(arg, env.clone()));
        }
        self.eval_expr(func.body, &call_env)
    }
}

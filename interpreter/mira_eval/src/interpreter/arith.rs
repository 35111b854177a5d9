//! Variadic arithmetic.
//!
//! `+` and `*` fold over their identity. `-`, `/` and `//` are strict
//! left folds seeded by the first operand, not pairwise-independent
//! operations. `^` folds right to left, giving `a^(b^c)`.

use mira_ast::{ArithOp, ExprId};

use crate::environment::Env;
use crate::errors::{empty_operand_list, number_required, EvalError, EvalResult};
use crate::value::Value;

use super::Interpreter;

impl Interpreter<'_> {
    pub(super) fn eval_arith(&self, op: ArithOp, operands: &[ExprId], env: &Env) -> EvalResult {
        let result = match op {
            ArithOp::Add => {
                let mut acc = 0.0;
                for &operand in operands {
                    acc += self.numeric_operand(op, operand, env)?;
                }
                acc
            }
            ArithOp::Mul => {
                let mut acc = 1.0;
                for &operand in operands {
                    acc *= self.numeric_operand(op, operand, env)?;
                }
                acc
            }
            ArithOp::Sub => self.fold_seeded(op, operands, env, |acc, n| acc - n)?,
            ArithOp::Div => self.fold_seeded(op, operands, env, |acc, n| acc / n)?,
            // The running result is truncated toward zero after each step.
            ArithOp::IntDiv => self.fold_seeded(op, operands, env, |acc, n| (acc / n).trunc())?,
            ArithOp::Pow => {
                let mut acc = 1.0;
                for &operand in operands.iter().rev() {
                    let base = self.numeric_operand(op, operand, env)?;
                    acc = base.powf(acc);
                }
                acc
            }
        };
        Ok(Value::Number(result))
    }

    /// Left fold seeded by operand 0.
    fn fold_seeded(
        &self,
        op: ArithOp,
        operands: &[ExprId],
        env: &Env,
        step: impl Fn(f64, f64) -> f64,
    ) -> Result<f64, EvalError> {
        let Some((&seed, rest)) = operands.split_first() else {
            return Err(empty_operand_list(op.symbol()));
        };
        let mut acc = self.numeric_operand(op, seed, env)?;
        for &operand in rest {
            acc = step(acc, self.numeric_operand(op, operand, env)?);
        }
        Ok(acc)
    }

    /// Evaluate one operand and require a number.
    fn numeric_operand(&self, op: ArithOp, operand: ExprId, env: &Env) -> Result<f64, EvalError> {
        match self.eval_expr(operand, env)? {
            Value::Number(n) => Ok(n),
            other => Err(number_required(op.symbol(), other.type_name())),
        }
    }
}

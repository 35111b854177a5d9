//! Short-circuit booleans and chained comparisons.
//!
//! `and`/`or` stop at the first falsy/truthy operand; operands after the
//! short-circuit point are never evaluated. `=`, `>` and `<` compare each
//! adjacent pair left to right and short-circuit to false on the first
//! failing pair; a single-operand chain is vacuously true.

use mira_ast::{ExprId, LogicOp};

use crate::environment::Env;
use crate::errors::{empty_operand_list, EvalResult};
use crate::value::Value;

use super::Interpreter;

impl Interpreter<'_> {
    pub(super) fn eval_logic(&self, op: LogicOp, operands: &[ExprId], env: &Env) -> EvalResult {
        match op {
            LogicOp::And => {
                for &operand in operands {
                    if !self.eval_expr(operand, env)?.truthy()? {
                        return Ok(Value::Bool(false));
                    }
                }
                Ok(Value::Bool(true))
            }
            LogicOp::Or => {
                for &operand in operands {
                    if self.eval_expr(operand, env)?.truthy()? {
                        return Ok(Value::Bool(true));
                    }
                }
                Ok(Value::Bool(false))
            }
            LogicOp::Equal | LogicOp::Gt | LogicOp::Lt => self.eval_chain(op, operands, env),
        }
    }

    /// Chained pairwise comparison: `(< 1 2 3)` holds iff `1 < 2` and
    /// `2 < 3`.
    fn eval_chain(&self, op: LogicOp, operands: &[ExprId], env: &Env) -> EvalResult {
        let Some((&first, rest)) = operands.split_first() else {
            return Err(empty_operand_list(op.symbol()));
        };
        let mut prev = self.eval_expr(first, env)?;
        for &operand in rest {
            let current = self.eval_expr(operand, env)?;
            let holds = match op {
                LogicOp::Equal => prev.equals_value(&current)?,
                LogicOp::Gt => prev.compare(&current)? > 0.0,
                LogicOp::Lt => prev.compare(&current)? < 0.0,
                LogicOp::And | LogicOp::Or => unreachable!("not a chain operator"),
            };
            if !holds {
                return Ok(Value::Bool(false));
            }
            prev = current;
        }
        Ok(Value::Bool(true))
    }
}

//! Tree-walking interpreter for Mira.
//!
//! Evaluation is a pure recursive function over `(ExprId, Env)` pairs with
//! one exhaustive match over `ExprKind`; the compiler's coverage check
//! replaces the visitor the original design used. Helper modules extend
//! `Interpreter` with the operator families:
//!
//! - `arith` - variadic arithmetic folds
//! - `logic` - short-circuit booleans and chained comparisons
//! - `call` - closure application and call-by-need argument binding
//!
//! The only mutable state is the [`Globals`] table; everything else is
//! threaded through immutable [`Env`] chains.

mod arith;
mod call;
mod logic;

use std::cell::Cell;
use std::sync::Arc;

use mira_ast::{Define, ExprArena, ExprId, ExprKind, Name, Program, StringInterner};

use crate::environment::{Env, Globals};
use crate::errors::{cons_requires_list, duplicate_definition, unbound_variable, EvalResult};
use crate::stack::ensure_sufficient_stack;
use crate::value::{ListValue, PromiseState, PromiseValue, Value};

/// The evaluator.
///
/// Borrows the expression arena and the interner (both immutable) and
/// owns a handle to the global definition table. The table is explicit
/// state with a per-run lifecycle, not a hidden process global: a fresh
/// `Interpreter` starts with an empty table, and an embedding host can
/// share one table across interpreters with [`Interpreter::with_globals`].
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    globals: Arc<Globals>,
    /// Count of expression evaluations, for instrumentation and tests.
    steps: Cell<u64>,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with a fresh global table.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self::with_globals(interner, arena, Arc::new(Globals::new()))
    }

    /// Create an interpreter sharing an existing global table. A REPL
    /// driver uses this to keep definitions across input units.
    pub fn with_globals(
        interner: &'a StringInterner,
        arena: &'a ExprArena,
        globals: Arc<Globals>,
    ) -> Self {
        Interpreter {
            interner,
            arena,
            globals,
            steps: Cell::new(0),
        }
    }

    /// The interner used to resolve `Name`s in diagnostics.
    pub fn interner(&self) -> &StringInterner {
        self.interner
    }

    /// The global definition table.
    pub fn globals(&self) -> &Arc<Globals> {
        &self.globals
    }

    /// Number of expression evaluations performed so far.
    pub fn steps(&self) -> u64 {
        self.steps.get()
    }

    /// Evaluate a whole program: install every definition in listed
    /// order, then evaluate the body.
    ///
    /// A failing definition aborts the batch; definitions already
    /// installed remain installed.
    pub fn eval_program(&self, program: &Program) -> EvalResult {
        tracing::debug!(defs = program.defs.len(), "evaluating program");
        let env = Env::global(Arc::clone(&self.globals));
        for def in &program.defs {
            self.eval_define(def, &env)?;
        }
        self.eval_expr(program.body, &env)
    }

    /// Evaluate one top-level definition in the global-rooted
    /// environment and install the result. Yields `Unit`.
    fn eval_define(&self, def: &Define, env: &Env) -> EvalResult {
        tracing::trace!(
            name = self.interner.lookup(def.name),
            "installing global definition"
        );
        let value = self.eval_expr(def.expr, env)?;
        let value = self.force_value(value)?;
        self.globals
            .define(def.name, value)
            .map_err(|_| duplicate_definition(self.interner.lookup(def.name)))?;
        Ok(Value::Unit)
    }

    /// Evaluate one expression in the given environment.
    pub fn eval_expr(&self, id: ExprId, env: &Env) -> EvalResult {
        self.steps.set(self.steps.get().wrapping_add(1));
        ensure_sufficient_stack(|| match self.arena.get(id) {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Unit => Ok(Value::Unit),
            ExprKind::Var(name) => self.eval_var(*name, env),
            ExprKind::Arith { op, operands } => self.eval_arith(*op, operands, env),
            ExprKind::Logic { op, operands } => self.eval_logic(*op, operands, env),
            ExprKind::If {
                cond,
                then_exp,
                else_exp,
            } => {
                // Exactly one branch is evaluated.
                if self.eval_expr(*cond, env)?.truthy()? {
                    self.eval_expr(*then_exp, env)
                } else {
                    self.eval_expr(*else_exp, env)
                }
            }
            ExprKind::Let { bindings, body } => {
                // Sequential extension: binding i sees bindings 0..i.
                let mut scope = env.clone();
                for (name, expr) in bindings {
                    let value = self.eval_expr(*expr, &scope)?;
                    scope = scope.extend(*name, value);
                }
                self.eval_expr(*body, &scope)
            }
            ExprKind::Lambda { params, body } => {
                Ok(Value::closure(params.clone(), *body, env.clone()))
            }
            ExprKind::Call { callee, args } => self.eval_call(*callee, args, env),
            ExprKind::Pair { first, second } => {
                let a = self.eval_expr(*first, env)?;
                let b = self.eval_expr(*second, env)?;
                Ok(Value::pair(a, b))
            }
            ExprKind::First(e) => self.eval_expr(*e, env)?.first(),
            ExprKind::Second(e) => self.eval_expr(*e, env)?.second(),
            ExprKind::List(elements) => self.eval_list(elements, env),
            ExprKind::Cons { item, list } => self.eval_cons(*item, *list, env),
        })
    }

    /// Variable reference: look up the chain, forcing a promise-bound
    /// value before handing it out.
    fn eval_var(&self, name: Name, env: &Env) -> EvalResult {
        let value = env
            .lookup(name)
            .ok_or_else(|| unbound_variable(self.interner.lookup(name)))?;
        self.force_value(value)
    }

    /// Force a value transitively until it is not a promise.
    pub fn force_value(&self, value: Value) -> EvalResult {
        match value {
            Value::Promise(promise) => self.force(&promise),
            other => Ok(other),
        }
    }

    /// Force one promise: first call evaluates the suspended `(expr,
    /// env)` pair and memoizes; later calls return the cache.
    fn force(&self, promise: &PromiseValue) -> EvalResult {
        match promise.snapshot() {
            PromiseState::Ready(value) => Ok(value),
            PromiseState::Pending { expr, env } => {
                let value = self.force_value(self.eval_expr(expr, &env)?)?;
                promise.fulfill(value.clone());
                Ok(value)
            }
        }
    }

    /// List literal: elements evaluate left to right, and the list is
    /// built from the last element backward so head-to-tail order matches
    /// the literal.
    fn eval_list(&self, elements: &[ExprId], env: &Env) -> EvalResult {
        let mut values = Vec::with_capacity(elements.len());
        for &element in elements {
            values.push(self.eval_expr(element, env)?);
        }
        Ok(Value::List(ListValue::from_elements(values)))
    }

    /// Prepend onto an existing list without mutating it.
    fn eval_cons(&self, item: ExprId, list: ExprId, env: &Env) -> EvalResult {
        let tail = match self.eval_expr(list, env)? {
            Value::List(tail) => tail,
            other => return Err(cons_requires_list(other.type_name())),
        };
        let head = self.eval_expr(item, env)?;
        Ok(Value::List(tail.prepend(head)))
    }
}

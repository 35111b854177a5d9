//! Semantic tests for whole-program evaluation.
//!
//! Each test builds an expression tree by hand (the parser is a separate
//! collaborator) and runs it through `Interpreter::eval_program`.

#![allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]

mod arith_tests;
mod binding_tests;

use mira_ast::{ArithOp, Define, ExprArena, ExprId, ExprKind, LogicOp, Name, Program, StringInterner};

use crate::{EvalResult, Interpreter};

/// Hand-built program under construction.
pub(crate) struct Harness {
    pub interner: StringInterner,
    pub arena: ExprArena,
    pub defs: Vec<Define>,
}

impl Harness {
    pub fn new() -> Self {
        Harness {
            interner: StringInterner::new(),
            arena: ExprArena::new(),
            defs: Vec::new(),
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    pub fn num(&mut self, v: f64) -> ExprId {
        self.arena.alloc(ExprKind::Number(v))
    }

    pub fn bool_lit(&mut self, v: bool) -> ExprId {
        self.arena.alloc(ExprKind::Bool(v))
    }

    pub fn unit(&mut self) -> ExprId {
        self.arena.alloc(ExprKind::Unit)
    }

    pub fn var(&mut self, n: &str) -> ExprId {
        let name = self.name(n);
        self.arena.alloc(ExprKind::Var(name))
    }

    pub fn arith(&mut self, op: ArithOp, operands: &[ExprId]) -> ExprId {
        self.arena.alloc(ExprKind::Arith {
            op,
            operands: operands.to_vec(),
        })
    }

    pub fn logic(&mut self, op: LogicOp, operands: &[ExprId]) -> ExprId {
        self.arena.alloc(ExprKind::Logic {
            op,
            operands: operands.to_vec(),
        })
    }

    pub fn if_exp(&mut self, cond: ExprId, then_exp: ExprId, else_exp: ExprId) -> ExprId {
        self.arena.alloc(ExprKind::If {
            cond,
            then_exp,
            else_exp,
        })
    }

    pub fn let_exp(&mut self, bindings: &[(&str, ExprId)], body: ExprId) -> ExprId {
        let bindings = bindings
            .iter()
            .map(|(n, e)| (self.name(n), *e))
            .collect();
        self.arena.alloc(ExprKind::Let { bindings, body })
    }

    pub fn lambda(&mut self, params: &[&str], body: ExprId) -> ExprId {
        let params = params.iter().map(|p| self.name(p)).collect();
        self.arena.alloc(ExprKind::Lambda { params, body })
    }

    pub fn call(&mut self, callee: ExprId, args: &[ExprId]) -> ExprId {
        self.arena.alloc(ExprKind::Call {
            callee,
            args: args.to_vec(),
        })
    }

    pub fn pair(&mut self, first: ExprId, second: ExprId) -> ExprId {
        self.arena.alloc(ExprKind::Pair { first, second })
    }

    pub fn first(&mut self, e: ExprId) -> ExprId {
        self.arena.alloc(ExprKind::First(e))
    }

    pub fn second(&mut self, e: ExprId) -> ExprId {
        self.arena.alloc(ExprKind::Second(e))
    }

    pub fn list(&mut self, elements: &[ExprId]) -> ExprId {
        self.arena.alloc(ExprKind::List(elements.to_vec()))
    }

    pub fn cons(&mut self, item: ExprId, list: ExprId) -> ExprId {
        self.arena.alloc(ExprKind::Cons { item, list })
    }

    pub fn define(&mut self, name: &str, expr: ExprId) {
        let name = self.name(name);
        self.defs.push(Define { name, expr });
    }

    pub fn program(&self, body: ExprId) -> Program {
        Program {
            defs: self.defs.clone(),
            body,
        }
    }

    /// Evaluate `body` (with any accumulated definitions) in a fresh
    /// interpreter.
    pub fn eval(&self, body: ExprId) -> EvalResult {
        Interpreter::new(&self.interner, &self.arena).eval_program(&self.program(body))
    }

    /// An interpreter borrowing this harness, for tests that inspect
    /// globals or step counts.
    pub fn interpreter(&self) -> Interpreter<'_> {
        Interpreter::new(&self.interner, &self.arena)
    }
}

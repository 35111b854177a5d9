//! Expression nodes and the arena that stores them.
//!
//! All children are `ExprId` indices into an [`ExprArena`], not boxes.
//! A tree is immutable once built: the arena only grows, and nodes are
//! never rewritten.

use std::fmt;

use crate::Name;

/// Index of an expression node in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Arithmetic operators. All are variadic (one or more operands).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArithOp {
    /// Variadic sum, identity 0.
    Add,
    /// Left fold seeded by the first operand.
    Sub,
    /// Variadic product, identity 1.
    Mul,
    /// Left fold seeded by the first operand.
    Div,
    /// Like `Div`, but the running result is truncated toward zero
    /// after each step.
    IntDiv,
    /// Right-associative: `(^ a b c)` is `a^(b^c)`.
    Pow,
}

impl ArithOp {
    /// Surface symbol, used in diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::IntDiv => "//",
            ArithOp::Pow => "^",
        }
    }
}

/// Boolean and comparison operators. All are variadic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicOp {
    /// Short-circuits false on the first falsy operand.
    And,
    /// Short-circuits true on the first truthy operand.
    Or,
    /// Chained pairwise equality: true iff every adjacent pair is equal.
    Equal,
    /// Chained strictly-decreasing comparison.
    Gt,
    /// Chained strictly-increasing comparison.
    Lt,
}

impl LogicOp {
    /// Surface symbol, used in diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            LogicOp::And => "and",
            LogicOp::Or => "or",
            LogicOp::Equal => "=",
            LogicOp::Gt => ">",
            LogicOp::Lt => "<",
        }
    }
}

/// Expression variants.
///
/// This is a closed set: the evaluator dispatches with one exhaustive
/// match, so adding a variant is a compile-time-visible change at every
/// dispatch site.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Number literal: 42, 3.14
    Number(f64),
    /// Boolean literal: true, false
    Bool(bool),
    /// Unit literal.
    Unit,
    /// Variable reference.
    Var(Name),
    /// Variadic arithmetic: `(+ 1 2 3)`.
    Arith { op: ArithOp, operands: Vec<ExprId> },
    /// Variadic boolean/comparison: `(< 1 2 3)`.
    Logic { op: LogicOp, operands: Vec<ExprId> },
    /// Two-armed conditional. Exactly one branch is evaluated.
    If {
        cond: ExprId,
        then_exp: ExprId,
        else_exp: ExprId,
    },
    /// Sequential lexical bindings: binding *i* may reference
    /// bindings `0..i`.
    Let {
        bindings: Vec<(Name, ExprId)>,
        body: ExprId,
    },
    /// Function literal capturing the environment at its evaluation site.
    Lambda { params: Vec<Name>, body: ExprId },
    /// Application. Arguments are passed by need, not by value.
    Call { callee: ExprId, args: Vec<ExprId> },
    /// Pair construction; both sides are evaluated.
    Pair { first: ExprId, second: ExprId },
    /// First component of a pair or non-empty list.
    First(ExprId),
    /// Second component of a pair, or tail of a non-empty list.
    Second(ExprId),
    /// List literal. Elements read head-to-tail in literal order.
    List(Vec<ExprId>),
    /// Prepend `item` onto `list` without mutating it.
    Cons { item: ExprId, list: ExprId },
}

/// Top-level definition: `(define name expr)`.
#[derive(Clone, PartialEq, Debug)]
pub struct Define {
    pub name: Name,
    pub expr: ExprId,
}

/// A whole program: top-level definitions plus one body expression.
#[derive(Clone, PartialEq, Debug)]
pub struct Program {
    pub defs: Vec<Define>,
    pub body: ExprId,
}

impl Program {
    /// A program with no definitions.
    pub fn from_body(body: ExprId) -> Self {
        Program { defs: Vec::new(), body }
    }
}

/// Contiguous storage for expression nodes.
#[derive(Default, Debug)]
pub struct ExprArena {
    exprs: Vec<ExprKind>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        ExprArena::default()
    }

    /// Allocate a node, returning its id.
    pub fn alloc(&mut self, kind: ExprKind) -> ExprId {
        let idx = u32::try_from(self.exprs.len()).unwrap_or(u32::MAX);
        self.exprs.push(kind);
        ExprId(idx)
    }

    /// Get a node by id.
    ///
    /// # Panics
    /// Panics if `id` did not come from this arena.
    pub fn get(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Whether the arena has no nodes.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

//! Mira Eval - tree-walking evaluator for the Mira expression language.
//!
//! The crate consumes a fully-built, immutable [`mira_ast::Program`] and
//! produces a [`Value`] or an [`EvalError`]; it performs no parsing and no
//! I/O beyond the `Display` rendering of results.
//!
//! # Architecture
//!
//! - [`Value`]: the runtime value lattice with capability methods
//!   (truthiness, equality, ordering)
//! - [`Env`]: persistent lexical scope chain rooted in the mutable
//!   [`Globals`] table
//! - [`PromiseValue`]: memoized deferred computation backing call-by-need
//!   argument passing
//! - [`Interpreter`]: the recursive dispatcher; `eval_program` is the
//!   sole entry point for host drivers

mod environment;
pub mod errors;
mod interpreter;
mod stack;
mod value;

pub use environment::{DefineError, Env, Globals};
pub use errors::{EvalError, EvalErrorKind, EvalResult};

// Re-export error constructors for convenience (canonical path is
// mira_eval::errors::*)
pub use errors::{
    arity_mismatch, compared_different_types, cons_requires_list, duplicate_definition,
    empty_operand_list, missing_capability, not_callable, not_pairable, number_required,
    unbound_variable,
};

pub use interpreter::Interpreter;
pub use stack::ensure_sufficient_stack;
pub use value::{
    ClosureValue, Heap, ListValue, PromiseState, PromiseValue, Value, NUMBER_EPSILON,
};

#[cfg(test)]
mod tests;

//! Mira AST - expression data model for the Mira evaluator.
//!
//! This crate defines the immutable expression tree the evaluator consumes.
//! Trees are built once (by an external parser or by hand in tests) and are
//! shared read-only afterwards.
//!
//! # Architecture
//!
//! - `Name`: compact interned identifier
//! - `StringInterner`: thread-safe string interner producing `Name`s
//! - `ExprArena`: contiguous storage for expression nodes, addressed by
//!   `ExprId` indices instead of boxed children
//! - `Program`: a sequence of top-level `Define`s plus one body expression

mod expr;
mod interner;
mod name;

pub use expr::{ArithOp, Define, ExprArena, ExprId, ExprKind, LogicOp, Program};
pub use interner::StringInterner;
pub use name::Name;

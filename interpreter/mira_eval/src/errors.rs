//! Error types for evaluation.
//!
//! `EvalErrorKind` provides typed error categories; factory functions
//! (e.g. `unbound_variable()`) are the public API and populate both
//! `kind` and `message`.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// Each variant carries the structured data for the error condition, so
/// callers can match on the kind instead of parsing message strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Variable lookup failed in both the scope chain and the globals.
    UnboundVariable { name: String },

    /// An arithmetic operand did not evaluate to a number.
    NumberRequired {
        op: &'static str,
        got: &'static str,
    },
    /// An operator slot received no operands at all.
    EmptyOperandList { op: &'static str },

    /// The value's variant does not support the requested capability
    /// (truthiness, equality, ordering).
    MissingCapability {
        capability: &'static str,
        type_name: &'static str,
    },
    /// Equality or ordering between values of different variants.
    ComparedDifferentTypes {
        left: &'static str,
        right: &'static str,
    },

    /// Call target is not a closure.
    NotCallable { type_name: &'static str },
    /// Parameter and argument counts differ.
    ArityMismatch { expected: usize, got: usize },

    /// `first`/`second` target is not a pair or non-empty list.
    NotPairable { type_name: &'static str },
    /// `cons` target is not a list.
    ConsRequiresList { type_name: &'static str },

    /// A top-level definition reused an existing global name.
    Redefinition { name: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => {
                write!(f, "no binding found for name: {name}")
            }
            Self::NumberRequired { op, got } => {
                write!(f, "operand of `{op}` must be a number, got {got}")
            }
            Self::EmptyOperandList { op } => {
                write!(f, "`{op}` requires at least one operand")
            }
            Self::MissingCapability {
                capability,
                type_name,
            } => {
                write!(f, "{type_name} does not support {capability}")
            }
            Self::ComparedDifferentTypes { left, right } => {
                write!(f, "cannot compare {left} with {right}")
            }
            Self::NotCallable { type_name } => {
                write!(f, "call target is not a closure, got {type_name}")
            }
            Self::ArityMismatch { expected, got } => {
                write!(f, "argument mismatch: expected {expected}, got {got}")
            }
            Self::NotPairable { type_name } => {
                write!(f, "first/second target must be a pair or non-empty list, got {type_name}")
            }
            Self::ConsRequiresList { type_name } => {
                write!(f, "cons target must be a list, got {type_name}")
            }
            Self::Redefinition { name } => {
                write!(f, "global name already defined: {name}")
            }
        }
    }
}

/// Evaluation error.
///
/// Terminates the current evaluation synchronously; the core never retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    kind: EvalErrorKind,
    message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    /// The typed category of this error.
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory functions (the public error-construction API)

/// Variable lookup failed.
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_owned(),
    })
}

/// Arithmetic operand was not a number.
pub fn number_required(op: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NumberRequired { op, got })
}

/// Operator received an empty operand list.
pub fn empty_operand_list(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyOperandList { op })
}

/// The value's variant lacks a capability.
pub fn missing_capability(capability: &'static str, type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingCapability {
        capability,
        type_name,
    })
}

/// Equality/ordering across variants.
pub fn compared_different_types(left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ComparedDifferentTypes { left, right })
}

/// Call target was not a closure.
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

/// Parameter/argument count mismatch.
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

/// `first`/`second` on a value without components.
pub fn not_pairable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotPairable { type_name })
}

/// `cons` onto a non-list.
pub fn cons_requires_list(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConsRequiresList { type_name })
}

/// Duplicate top-level definition.
pub fn duplicate_definition(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Redefinition {
        name: name.to_owned(),
    })
}

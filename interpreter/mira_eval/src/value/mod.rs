//! Runtime values for the Mira evaluator.
//!
//! All composite values go through factory methods on `Value`; the
//! [`Heap`] wrapper has a crate-private constructor, so external code
//! cannot build heap values directly.
//!
//! # Capabilities
//!
//! A variant may or may not support truthiness ([`Value::truthy`]),
//! equality ([`Value::equals_value`]) and ordering ([`Value::compare`]).
//! Invoking an unsupported capability is a runtime type error naming the
//! capability and the variant.

mod heap;
mod list;
mod promise;

use std::fmt;

use mira_ast::{ExprId, Name};

pub use heap::Heap;
pub use list::ListValue;
pub use promise::{PromiseState, PromiseValue};

use crate::environment::Env;
use crate::errors::{compared_different_types, missing_capability, not_pairable, EvalError};

/// Tolerance for numeric equality.
pub const NUMBER_EPSILON: f64 = 1e-9;

/// Function value: parameter names, a body expression, and the
/// environment active at the closure's creation (lexical capture by
/// shared handle, never a copy).
#[derive(Clone)]
pub struct ClosureValue {
    pub params: Heap<Vec<Name>>,
    pub body: ExprId,
    pub env: Env,
}

impl fmt::Debug for ClosureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<closure/{}>", self.params.len())
    }
}

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// Result of a top-level definition; prints as the empty string.
    Unit,
    /// Double-precision number.
    Number(f64),
    /// Boolean.
    Bool(bool),
    /// Function value.
    Closure(ClosureValue),
    /// Pair of values, both already evaluated.
    Pair(Heap<(Value, Value)>),
    /// Immutable cons list.
    List(ListValue),
    /// Deferred computation. Internal scheduling artifact: every binding
    /// consumer forces first, so a Promise is never a final result.
    Promise(PromiseValue),
}

// Factory methods

impl Value {
    /// Create a pair value.
    pub fn pair(first: Value, second: Value) -> Self {
        Value::Pair(Heap::new((first, second)))
    }

    /// Create a list value preserving the element order head-to-tail.
    pub fn list(elements: Vec<Value>) -> Self {
        Value::List(ListValue::from_elements(elements))
    }

    /// Create a closure value capturing `env`.
    pub fn closure(params: Vec<Name>, body: ExprId, env: Env) -> Self {
        Value::Closure(ClosureValue {
            params: Heap::new(params),
            body,
            env,
        })
    }

    /// Suspend an argument expression with the environment it must be
    /// evaluated in.
    pub fn promise(expr: ExprId, env: Env) -> Self {
        Value::Promise(PromiseValue::suspended(expr, env))
    }
}

// Capabilities

impl Value {
    /// Variant name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Closure(_) => "closure",
            Value::Pair(_) => "pair",
            Value::List(_) => "list",
            Value::Promise(_) => "promise",
        }
    }

    /// Boolean coercion. Numbers are truthy iff non-zero, the empty list
    /// is falsy and any cons is truthy; other variants lack the
    /// capability.
    pub fn truthy(&self) -> Result<bool, EvalError> {
        match self {
            Value::Number(n) => Ok(*n != 0.0),
            Value::Bool(b) => Ok(*b),
            Value::List(list) => Ok(!list.is_empty()),
            other => Err(missing_capability("truthiness", other.type_name())),
        }
    }

    /// Equality. Numeric equality uses [`NUMBER_EPSILON`]; comparing
    /// across variants is a type error.
    pub fn equals_value(&self, other: &Value) -> Result<bool, EvalError> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok((a - b).abs() < NUMBER_EPSILON),
            (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
            (Value::Number(_) | Value::Bool(_), _) => Err(compared_different_types(
                self.type_name(),
                other.type_name(),
            )),
            _ => Err(missing_capability("equality", self.type_name())),
        }
    }

    /// Ordering as a signed difference. Only numbers are ordered.
    pub fn compare(&self, other: &Value) -> Result<f64, EvalError> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok(a - b),
            (Value::Number(_), _) => Err(compared_different_types(
                self.type_name(),
                other.type_name(),
            )),
            _ => Err(missing_capability("ordering", self.type_name())),
        }
    }

    /// First component of a pair or non-empty list.
    pub fn first(&self) -> Result<Value, EvalError> {
        match self {
            Value::Pair(parts) => Ok(parts.0.clone()),
            Value::List(list) => list.head().cloned().ok_or_else(|| not_pairable("empty list")),
            other => Err(not_pairable(other.type_name())),
        }
    }

    /// Second component of a pair, or the tail of a non-empty list.
    pub fn second(&self) -> Result<Value, EvalError> {
        match self {
            Value::Pair(parts) => Ok(parts.1.clone()),
            Value::List(list) => list
                .tail()
                .map(Value::List)
                .ok_or_else(|| not_pairable("empty list")),
            other => Err(not_pairable(other.type_name())),
        }
    }
}

/// Structural equality used by the host (tests, embedding). This is exact:
/// no epsilon, unlike the language-level [`Value::equals_value`].
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Pair(a), Value::Pair(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => {
                Heap::ptr_eq(&a.params, &b.params) && a.body == b.body
            }
            (Value::Promise(a), Value::Promise(b)) => PromiseValue::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => Ok(()),
            Value::Number(n) => write_number(f, *n),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Closure(c) => write!(f, "<closure/{}>", c.params.len()),
            Value::Pair(parts) => write!(f, "({}, {})", parts.0, parts.1),
            Value::List(list) => {
                f.write_str("(")?;
                for (i, element) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
            Value::Promise(_) => f.write_str("<promise>"),
        }
    }
}

/// An integral-valued double prints without a fractional part; everything
/// else goes through default float formatting.
#[expect(
    clippy::cast_possible_truncation,
    reason = "fract() == 0.0 and the range check make the cast exact"
)]
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.0e18 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

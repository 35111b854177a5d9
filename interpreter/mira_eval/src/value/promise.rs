//! Deferred, memoized computation for call-by-need argument passing.

use std::fmt;
use std::sync::Arc;

use mira_ast::ExprId;
use parking_lot::Mutex;

use crate::environment::Env;
use crate::value::Value;

/// State of a promise: either the suspended `(expr, env)` pair or the
/// memoized result. The transition from `Pending` to `Ready` happens at
/// most once.
#[derive(Clone, Debug)]
pub enum PromiseState {
    /// Not yet forced: the argument expression and the caller's
    /// environment it closes over.
    Pending { expr: ExprId, env: Env },
    /// Forced: the cached result of the first forcing.
    Ready(Value),
}

/// Shared memo cell implementing a thunk.
///
/// Cloning a `PromiseValue` clones the handle, not the cell, so every
/// binding of the same argument observes the same memoization.
///
/// Forcing lives on [`crate::Interpreter::force_value`]; this type only
/// exposes the synchronized state transitions. The lock is never held
/// across evaluation.
#[derive(Clone)]
pub struct PromiseValue(Arc<Mutex<PromiseState>>);

impl PromiseValue {
    /// Suspend `expr` together with the environment it must be
    /// evaluated in.
    pub fn suspended(expr: ExprId, env: Env) -> Self {
        PromiseValue(Arc::new(Mutex::new(PromiseState::Pending { expr, env })))
    }

    /// Snapshot the current state.
    pub fn snapshot(&self) -> PromiseState {
        self.0.lock().clone()
    }

    /// Store the forced result. The first stored value wins; a later call
    /// against an already-`Ready` cell is a no-op, keeping the transition
    /// exactly-once.
    pub fn fulfill(&self, value: Value) {
        let mut state = self.0.lock();
        if matches!(*state, PromiseState::Pending { .. }) {
            *state = PromiseState::Ready(value);
        }
    }

    /// Whether the promise has been forced.
    pub fn is_forced(&self) -> bool {
        matches!(*self.0.lock(), PromiseState::Ready(_))
    }

    /// Whether two handles share the same memo cell.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for PromiseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0.lock() {
            PromiseState::Pending { expr, .. } => write!(f, "Promise(pending {expr:?})"),
            PromiseState::Ready(value) => write!(f, "Promise(ready {value:?})"),
        }
    }
}

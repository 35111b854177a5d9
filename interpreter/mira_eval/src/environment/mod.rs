//! Lexical environments and the global definition table.
//!
//! The scope chain is persistent: extending never mutates, so a closure's
//! captured chain is immune to whatever its siblings do afterwards. The
//! chain terminates in a root holding a shared handle to the [`Globals`]
//! table, which is the only mutable state in the evaluator.

use std::sync::Arc;

use mira_ast::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::value::Value;

/// Error returned by [`Globals::define`] for a duplicate name.
///
/// Typed rather than an `EvalError` so the caller can attach the
/// human-readable name, which only it can resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefineError {
    /// The name is already bound in the global table.
    AlreadyDefined,
}

/// Process-wide table of top-level definitions.
///
/// Created once per program run, populated before the body runs, never
/// reset mid-run. Reads and writes go through the `RwLock` even though
/// the reference driver is single-threaded; the single-writer discipline
/// is an invariant of the table, not a performance feature.
#[derive(Default, Debug)]
pub struct Globals {
    bindings: RwLock<FxHashMap<Name, Value>>,
}

impl Globals {
    /// Create an empty table.
    pub fn new() -> Self {
        Globals::default()
    }

    /// Install a definition. Redefinition of an existing name is
    /// rejected; the table keeps its previous binding.
    pub fn define(&self, name: Name, value: Value) -> Result<(), DefineError> {
        let mut bindings = self.bindings.write();
        if bindings.contains_key(&name) {
            return Err(DefineError::AlreadyDefined);
        }
        bindings.insert(name, value);
        Ok(())
    }

    /// Look up a definition.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.bindings.read().get(&name).cloned()
    }

    /// Number of installed definitions.
    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    /// Whether no definitions are installed.
    pub fn is_empty(&self) -> bool {
        self.bindings.read().is_empty()
    }
}

#[derive(Debug)]
enum EnvNode {
    /// Terminal node: lookups that exhaust the chain fall through to the
    /// global table.
    Root(Arc<Globals>),
    /// One immutable binding plus the rest of the chain.
    Frame {
        parent: Env,
        name: Name,
        value: Value,
    },
}

/// Persistent lexical scope chain.
///
/// Cloning is an O(1) handle copy. [`Env::extend`] allocates a single new
/// frame in front of the existing chain; the `(parent, name, value)`
/// triple of a frame is never mutated after construction.
#[derive(Clone, Debug)]
pub struct Env(Arc<EnvNode>);

impl Env {
    /// The chain root, backed by the global table.
    pub fn global(globals: Arc<Globals>) -> Self {
        Env(Arc::new(EnvNode::Root(globals)))
    }

    /// A new chain with one extra binding in front. Pure and O(1).
    pub fn extend(&self, name: Name, value: Value) -> Env {
        Env(Arc::new(EnvNode::Frame {
            parent: self.clone(),
            name,
            value,
        }))
    }

    /// Walk the chain innermost-first; the first frame with a matching
    /// name wins (shadowing). Falls through to the globals at the root,
    /// so lexical bindings shadow global ones.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut node = &self.0;
        loop {
            match node.as_ref() {
                EnvNode::Frame {
                    parent,
                    name: bound,
                    value,
                } => {
                    if *bound == name {
                        return Some(value.clone());
                    }
                    node = &parent.0;
                }
                EnvNode::Root(globals) => return globals.lookup(name),
            }
        }
    }

    /// Number of frames above the root. O(n), for diagnostics and tests.
    pub fn depth(&self) -> usize {
        let mut node = &self.0;
        let mut depth = 0;
        while let EnvNode::Frame { parent, .. } = node.as_ref() {
            depth += 1;
            node = &parent.0;
        }
        depth
    }
}

// ABOUTME: Environment module for the single flat variable-binding table

use crate::value::Value;
use std::collections::HashMap;

/// The process-wide name→value table.
///
/// Unlike a lexically-scoped Lisp environment (parent chain, one scope per
/// lambda), this is a single flat map: this language has no closures and no
/// nested scopes, only a save/restore pair around function invocation. See
/// `snapshot`/`restore`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    pub fn define(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Take a copy of the current bindings, to be handed back to `restore`
    /// once the caller's scoped operation (a function invocation) completes.
    pub fn snapshot(&self) -> Environment {
        self.clone()
    }

    /// Reinstate a snapshot taken earlier, discarding any bindings made
    /// since. Called unconditionally on every exit path out of `Run` —
    /// normal completion, early `return`, and handler failure alike.
    pub fn restore(&mut self, snapshot: Environment) {
        *self = snapshot;
    }
}

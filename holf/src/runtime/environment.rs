// Environment of named values (builtin callbacks and list operations)

use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::values::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Name bindings, optionally chained to a parent scope.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    parent: Option<Arc<Environment>>,
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates a new, empty global environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new child environment that inherits from a parent.
    pub fn with_parent(parent: Arc<Environment>) -> Self {
        Environment {
            parent: Some(parent),
            bindings: HashMap::new(),
        }
    }

    /// Looks up a name in the current environment and then its parents.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            Some(value.clone())
        } else if let Some(parent) = &self.parent {
            parent.lookup(name)
        } else {
            None
        }
    }

    /// Like [`Environment::lookup`], failing with `UndefinedSymbol`.
    pub fn resolve(&self, name: &str) -> RuntimeResult<Value> {
        self.lookup(name)
            .ok_or_else(|| RuntimeError::UndefinedSymbol(name.to_string()))
    }

    /// Defines a new binding or replaces an existing one in the current scope.
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    pub fn symbol_names(&self) -> Vec<String> {
        let mut names = self.bindings.keys().cloned().collect::<Vec<_>>();

        if let Some(parent) = &self.parent {
            names.extend(parent.symbol_names());
        }

        names.sort();
        names.dedup();
        names
    }
}

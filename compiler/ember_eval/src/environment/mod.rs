//! Lexical scopes.
//!
//! An [`Environment`] is a handle to one scope in a parent-linked chain.
//! Handles are cheap to clone and alias the same scope, which is what lets a
//! function value keep its defining scope alive and observe later writes to
//! it. Lookups walk outward to the root with no caching.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Heap, Value};

/// Whether a binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// `let`
    Mutable,
    /// `const`, function declarations and parameters.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Why a scope operation failed. The interpreter turns this into an
/// `EvalError` naming the variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeError {
    /// Not declared in this scope or any ancestor.
    Undeclared,
    /// Already declared in this very scope.
    Redeclared,
    /// The nearest declaration is immutable.
    Constant,
}

/// A variable binding.
#[derive(Clone, Debug)]
pub struct Binding {
    pub value: Value,
    pub mutability: Mutability,
}

struct Scope {
    bindings: FxHashMap<String, Binding>,
    parent: Option<Environment>,
}

/// Shared handle to a scope.
#[derive(Clone)]
pub struct Environment(Heap<Scope>);

impl Environment {
    /// An empty root scope. See [`crate::global_environment`] for one seeded
    /// with the native registry.
    pub fn new() -> Self {
        Environment(Heap::new(Scope { bindings: FxHashMap::default(), parent: None }))
    }

    /// A new empty scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(Heap::new(Scope { bindings: FxHashMap::default(), parent: Some(self.clone()) }))
    }

    /// Bind `name` in this scope. Shadowing an outer binding is allowed;
    /// declaring the same name twice in one scope is not.
    pub fn declare(
        &self,
        name: &str,
        value: Value,
        mutability: Mutability,
    ) -> Result<Value, ScopeError> {
        let mut scope = self.0.borrow_mut();
        if scope.bindings.contains_key(name) {
            return Err(ScopeError::Redeclared);
        }
        scope.bindings.insert(name.to_owned(), Binding { value: value.clone(), mutability });
        Ok(value)
    }

    /// Rebind `name` in the nearest scope that declares it.
    pub fn assign(&self, name: &str, value: Value) -> Result<Value, ScopeError> {
        let mut current = self.clone();
        loop {
            let parent = {
                let mut scope = current.0.borrow_mut();
                if let Some(binding) = scope.bindings.get_mut(name) {
                    if !binding.mutability.is_mutable() {
                        return Err(ScopeError::Constant);
                    }
                    binding.value = value.clone();
                    return Ok(value);
                }
                scope.parent.clone()
            };
            current = parent.ok_or(ScopeError::Undeclared)?;
        }
    }

    /// Read `name` from the nearest scope that declares it.
    pub fn get(&self, name: &str) -> Result<Value, ScopeError> {
        self.lookup(name).map(|binding| binding.value).ok_or(ScopeError::Undeclared)
    }

    /// The nearest binding for `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<Binding> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.0.borrow();
                if let Some(binding) = scope.bindings.get(name) {
                    return Some(binding.clone());
                }
                scope.parent.clone()
            };
            current = parent?;
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    // Bindings may hold functions that capture this very scope, so only
    // names are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;

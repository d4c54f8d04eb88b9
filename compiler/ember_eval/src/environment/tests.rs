#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn test_declare_and_get() {
    let env = Environment::new();
    assert_eq!(env.declare("x", num(1.0), Mutability::Mutable), Ok(num(1.0)));
    assert_eq!(env.get("x"), Ok(num(1.0)));
}

#[test]
fn test_redeclare_same_scope_fails() {
    let env = Environment::new();
    env.declare("x", num(1.0), Mutability::Mutable).unwrap();
    assert_eq!(env.declare("x", num(2.0), Mutability::Mutable), Err(ScopeError::Redeclared));
    assert_eq!(env.get("x"), Ok(num(1.0)));
}

#[test]
fn test_shadowing_in_child() {
    let parent = Environment::new();
    parent.declare("x", num(1.0), Mutability::Immutable).unwrap();

    let child = parent.child();
    child.declare("x", num(2.0), Mutability::Mutable).unwrap();

    assert_eq!(child.get("x"), Ok(num(2.0)));
    assert_eq!(parent.get("x"), Ok(num(1.0)));
}

#[test]
fn test_lookup_walks_to_root() {
    let root = Environment::new();
    root.declare("depth", num(0.0), Mutability::Mutable).unwrap();
    let leaf = root.child().child().child();
    assert_eq!(leaf.get("depth"), Ok(num(0.0)));
    assert_eq!(leaf.declare("depth", num(3.0), Mutability::Mutable), Ok(num(3.0)));
    assert_eq!(root.get("depth"), Ok(num(0.0)));
}

#[test]
fn test_assign_targets_declaring_scope() {
    let parent = Environment::new();
    parent.declare("count", num(0.0), Mutability::Mutable).unwrap();

    let child = parent.child();
    assert_eq!(child.assign("count", num(5.0)), Ok(num(5.0)));

    assert_eq!(parent.get("count"), Ok(num(5.0)));
    // No local copy was made, so the name is still free in the child.
    assert_eq!(child.declare("count", num(9.0), Mutability::Mutable), Ok(num(9.0)));
    assert_eq!(parent.get("count"), Ok(num(5.0)));
}

#[test]
fn test_assign_constant_fails() {
    let env = Environment::new();
    env.declare("pi", num(3.0), Mutability::Immutable).unwrap();
    assert_eq!(env.assign("pi", num(4.0)), Err(ScopeError::Constant));
    assert_eq!(env.child().assign("pi", num(4.0)), Err(ScopeError::Constant));
    assert_eq!(env.get("pi"), Ok(num(3.0)));
}

#[test]
fn test_undeclared() {
    let env = Environment::new().child();
    assert_eq!(env.get("ghost"), Err(ScopeError::Undeclared));
    assert_eq!(env.assign("ghost", Value::Null), Err(ScopeError::Undeclared));
    assert!(env.lookup("ghost").is_none());
}

#[test]
fn test_handles_alias_one_scope() {
    let env = Environment::new();
    let alias = env.clone();
    alias.declare("shared", Value::Boolean(true), Mutability::Mutable).unwrap();
    assert_eq!(env.get("shared"), Ok(Value::Boolean(true)));

    env.child().declare("local", Value::Null, Mutability::Mutable).unwrap();
    assert_eq!(alias.get("local"), Err(ScopeError::Undeclared));
}

#[test]
fn test_child_sees_later_parent_bindings() {
    let root = Environment::new();
    let child = root.child();
    root.declare("late", num(7.0), Mutability::Immutable).unwrap();
    assert_eq!(child.get("late"), Ok(num(7.0)));
}

#[test]
fn test_lookup_reports_mutability() {
    let env = Environment::new();
    env.declare("k", num(1.0), Mutability::Immutable).unwrap();
    let binding = env.child().lookup("k").unwrap();
    assert_eq!(binding.mutability, Mutability::Immutable);
    assert_eq!(binding.value, num(1.0));
}

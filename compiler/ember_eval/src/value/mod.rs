//! Runtime values.

mod display;
mod heap;

use std::fmt;
use std::rc::Rc;

use ember_ir::FunctionDecl;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::{Environment, EvalResult, PrintHandlerImpl};

pub use display::format_number;
pub use heap::Heap;

/// Object properties in insertion order.
pub type Properties = IndexMap<String, Value, FxBuildHasher>;

/// A runtime value.
///
/// `Null`, `Number`, `String` and `Boolean` behave as plain values. `Object`
/// and `Array` are shared: copying the value aliases the same storage.
#[derive(Clone)]
pub enum Value {
    Null,
    Number(f64),
    String(Rc<str>),
    Boolean(bool),
    Object(Heap<Properties>),
    Array(Heap<Vec<Value>>),
    /// A user function with the environment it was declared in.
    Function(Rc<FunctionValue>),
    NativeFunction(NativeFunction),
}

/// A declared function closed over its defining scope.
///
/// The environment is held live, not snapshotted: later assignments in the
/// defining scope are visible to calls made afterwards.
pub struct FunctionValue {
    pub decl: Rc<FunctionDecl>,
    pub env: Environment,
}

impl FunctionValue {
    pub fn name(&self) -> &str {
        &self.decl.name
    }
}

/// What a native function sees besides its arguments.
pub struct NativeCall<'a> {
    /// Environment of the call site.
    pub env: &'a Environment,
    pub print: &'a PrintHandlerImpl,
}

/// Signature shared by every host function.
pub type NativeFn = fn(&NativeCall<'_>, &[Value]) -> EvalResult;

/// A host function exposed to scripts.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub func: NativeFn,
}

impl Value {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn object(properties: Properties) -> Self {
        Value::Object(Heap::new(properties))
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Heap::new(elements))
    }

    pub fn function(decl: Rc<FunctionDecl>, env: Environment) -> Self {
        Value::Function(Rc::new(FunctionValue { decl, env }))
    }

    pub fn native(name: &'static str, func: NativeFn) -> Self {
        Value::NativeFunction(NativeFunction { name, func })
    }

    /// Name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
            Value::NativeFunction(_) => "native function",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Textual form used by `print` and `str`.
    pub fn display_value(&self) -> String {
        display::render(self)
    }
}

/// Containers nested deeper than this never compare equal.
const MAX_COMPARE_DEPTH: usize = 1000;

/// Containers nested deeper than this print as `..` in `Debug` output.
const MAX_DEBUG_DEPTH: usize = 32;

impl PartialEq for Value {
    /// Primitives compare by value, containers by contents (or identity),
    /// functions by identity.
    fn eq(&self, other: &Self) -> bool {
        values_eq(self, other, 0)
    }
}

fn values_eq(left: &Value, right: &Value, depth: usize) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Object(a), Value::Object(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let (a, b) = (a.borrow(), b.borrow());
            depth < MAX_COMPARE_DEPTH
                && a.len() == b.len()
                && a.iter().all(|(key, value)| {
                    b.get(key).is_some_and(|other| values_eq(value, other, depth + 1))
                })
        }
        (Value::Array(a), Value::Array(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let (a, b) = (a.borrow(), b.borrow());
            depth < MAX_COMPARE_DEPTH
                && a.len() == b.len()
                && a.iter().zip(b.iter()).all(|(x, y)| values_eq(x, y, depth + 1))
        }
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        (Value::NativeFunction(a), Value::NativeFunction(b)) => a.name == b.name,
        _ => false,
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DebugValue { value: self, depth: 0 }.fmt(f)
    }
}

/// `Debug` view of a value at a given nesting depth.
struct DebugValue<'a> {
    value: &'a Value,
    depth: usize,
}

impl DebugValue<'_> {
    fn nested<'b>(&self, value: &'b Value) -> DebugValue<'b> {
        DebugValue { value, depth: self.depth + 1 }
    }
}

impl fmt::Debug for DebugValue<'_> {
    // Functions print only their signature; the captured environment may
    // contain the function itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Object(_) | Value::Array(_) if self.depth >= MAX_DEBUG_DEPTH => {
                f.write_str("..")
            }
            Value::Null => f.write_str("Null"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Object(props) => f
                .debug_map()
                .entries(props.borrow().iter().map(|(key, value)| (key, self.nested(value))))
                .finish(),
            Value::Array(items) => {
                f.debug_list().entries(items.borrow().iter().map(|item| self.nested(item))).finish()
            }
            Value::Function(func) => {
                write!(f, "Function({}({}))", func.name(), func.decl.params.join(", "))
            }
            Value::NativeFunction(native) => write!(f, "NativeFunction({})", native.name),
        }
    }
}

impl Drop for Value {
    // Nested containers are released through a worklist, so native stack use
    // stays flat however deep the nesting.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut value) = pending.pop() {
            detach_children(&mut value, &mut pending);
        }
    }
}

/// Move the elements of a container out into `pending` when `value` holds
/// its last handle. Shared containers are left alone.
fn detach_children(value: &mut Value, pending: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            if let Some(items) = items.get_mut() {
                pending.append(items);
            }
        }
        Value::Object(props) => {
            if let Some(props) = props.get_mut() {
                pending.extend(props.drain(..).map(|(_, value)| value));
            }
        }
        _ => {}
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_value())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/*! Boxed runtime values.
 *
 * Objects are reference values: cloning a [`Value::Object`] clones the
 * handle, not the contents, so every copy observes every write. Display
 * renders object contents recursively and does not detect cycles.
 */

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use sable_ir::format::quote_str;

/// Shared handle to an open string-keyed object.
///
/// Entries keep insertion order, so rendering an object is deterministic.
#[derive(Debug, Clone)]
pub struct ObjectRef(Rc<RefCell<IndexMap<String, Value>>>);

impl ObjectRef {
    pub fn new() -> Self {
        ObjectRef(Rc::new(RefCell::new(IndexMap::new())))
    }

    /// Reads a property; a missing key yields `Undefined`, never an error.
    pub fn get(&self, key: &str) -> Value {
        self.0
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or(Value::Undefined)
    }

    /// Inserts or overwrites a property.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.0.borrow_mut().insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Whether two handles point at the same object.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl Default for ObjectRef {
    fn default() -> Self {
        Self::new()
    }
}

/// A runtime value produced or consumed by the interpreter.
#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    Object(ObjectRef),
    Undefined,
    Null,
}

impl Value {
    /// The kind tag used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Object(_) => "object",
            Value::Undefined => "undefined",
            Value::Null => "null",
        }
    }

    /// JS-style truthiness: `false`, `0`, `-0`, `NaN`, the empty string,
    /// `undefined` and `null` are falsy; objects are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Boolean(b) => *b,
            Value::Object(_) => true,
            Value::Undefined | Value::Null => false,
        }
    }
}

/// Strict equality: same kind, same content, no coercion. Objects compare by
/// identity, and `NaN` is unequal to itself, matching `===`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => ObjectRef::ptr_eq(a, b),
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
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
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", quote_str(s)),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Object(obj) => {
                let entries = obj.0.borrow();
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
        }
    }
}

// Runtime value system for the dynamic list operations
// Scalars, vectors and builtin functions

use crate::runtime::error::{RuntimeError, RuntimeResult};
use itertools::Itertools;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Vector(Vec<Value>),
    Function(Function),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Vector(v) => write!(f, "[{}]", v.iter().join(" ")),
            Value::Function(func) => write!(f, "#<builtin-function:{}>", func.name()),
        }
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Vector(_) => "vector",
            Value::Function(_) => "function",
        }
    }

    /// Wraps a vector of plain values
    pub fn vector<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Value {
        Value::Vector(items.into_iter().map(Into::into).collect())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
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

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Vector(v)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic(usize), // Minimum number of arguments
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => count == *n,
            Arity::Variadic(min) => count >= *min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{}", n),
            Arity::Variadic(min) => write!(f, "at least {}", min),
        }
    }
}

pub type NativeFn = Arc<dyn Fn(Vec<Value>) -> RuntimeResult<Value> + Send + Sync>;

#[derive(Clone)]
pub struct BuiltinFunction {
    pub name: String,
    pub arity: Arity,
    pub func: NativeFn,
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        // Compare builtin functions by name and arity, not by function pointer
        self.name == other.name && self.arity == other.arity
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Builtin(BuiltinFunction),
}

impl Function {
    pub fn builtin<F>(name: &str, arity: Arity, func: F) -> Function
    where
        F: Fn(Vec<Value>) -> RuntimeResult<Value> + Send + Sync + 'static,
    {
        Function::Builtin(BuiltinFunction {
            name: name.to_string(),
            arity,
            func: Arc::new(func),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Function::Builtin(b) => &b.name,
        }
    }

    pub fn arity(&self) -> &Arity {
        match self {
            Function::Builtin(b) => &b.arity,
        }
    }

    /// Calls the function after checking the argument count against its arity.
    pub fn call(&self, args: Vec<Value>) -> RuntimeResult<Value> {
        match self {
            Function::Builtin(b) => {
                if !b.arity.accepts(args.len()) {
                    return Err(RuntimeError::ArityMismatch {
                        function: b.name.clone(),
                        expected: b.arity.to_string(),
                        actual: args.len(),
                    });
                }
                (b.func)(args)
            }
        }
    }
}

//! Standard Library for the dynamic runtime
//!
//! Registers the list operations and a small set of pure callbacks as
//! builtins over [`Value`]. The list operations delegate to the typed
//! functions in [`crate::list`] and add the checks that static types give
//! the typed API for free:
//! - a `nil` function or collection is an invalid argument
//! - a partition callback must return a non-negative integer
//! - a collect callback must return a vector
//!
//! Argument order follows `(operation function collection)`, with the seed
//! (if any) between function and collection: `(fold f init coll)`.

use crate::error::ListError;
use crate::list;
use crate::runtime::environment::Environment;
use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::values::{Arity, Function, Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// What `expand` does when its callback returns `nil`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpandPolicy {
    /// `nil` is an ordinary element; only the limit ends the sequence.
    #[default]
    Infinite,
    /// `nil` ends the sequence and is not part of it.
    StopOnNil,
}

/// The Standard Library for the dynamic runtime.
pub struct StandardLibrary;

impl StandardLibrary {
    /// Creates a global environment with every builtin, using the default
    /// [`ExpandPolicy`].
    pub fn create_global_environment() -> Environment {
        Self::create_environment(ExpandPolicy::default())
    }

    /// Creates a global environment whose `expand` follows `policy`.
    pub fn create_environment(policy: ExpandPolicy) -> Environment {
        let mut env = Environment::new();
        Self::load_callback_functions(&mut env);
        Self::load_list_functions(&mut env, policy);
        env
    }

    /// Calls `function` with `args`.
    pub fn call_function(function: &Value, args: Vec<Value>) -> RuntimeResult<Value> {
        expect_function(function, "call")?.call(args)
    }

    /// Looks up `name` in `env` and calls it with `args`.
    pub fn apply(env: &Environment, name: &str, args: Vec<Value>) -> RuntimeResult<Value> {
        let function = env.resolve(name)?;
        debug!(function = name, args = args.len(), "applying builtin");
        let result = Self::call_function(&function, args);
        match &result {
            Ok(value) => trace!(function = name, result = %value, "builtin returned"),
            Err(e) => debug!(function = name, error = %e, "builtin failed"),
        }
        result
    }

    fn define(
        env: &mut Environment,
        name: &str,
        arity: Arity,
        func: fn(Vec<Value>) -> RuntimeResult<Value>,
    ) {
        env.define(name, Value::Function(Function::builtin(name, arity, func)));
    }

    fn load_callback_functions(env: &mut Environment) {
        Self::define(env, "identity", Arity::Fixed(1), Self::identity);
        Self::define(env, "inc", Arity::Fixed(1), Self::inc);
        Self::define(env, "dec", Arity::Fixed(1), Self::dec);
        Self::define(env, "double", Arity::Fixed(1), Self::double);
        Self::define(env, "negate", Arity::Fixed(1), Self::negate);
        Self::define(env, "parity", Arity::Fixed(1), Self::parity);
        Self::define(env, "str", Arity::Fixed(1), Self::str);
        Self::define(env, "+", Arity::Variadic(0), Self::add);
        Self::define(env, "*", Arity::Variadic(0), Self::multiply);
        Self::define(env, "max", Arity::Variadic(1), Self::max_value);
        Self::define(env, "min", Arity::Variadic(1), Self::min_value);
        Self::define(env, "concat", Arity::Variadic(0), Self::concat);
        Self::define(env, "vector", Arity::Variadic(0), |args| Ok(Value::Vector(args)));
    }

    fn load_list_functions(env: &mut Environment, policy: ExpandPolicy) {
        Self::define(env, "map", Arity::Fixed(2), Self::map);
        Self::define(env, "fold", Arity::Fixed(3), Self::fold);
        Self::define(env, "reduce", Arity::Fixed(2), Self::reduce);
        Self::define(env, "partition", Arity::Fixed(2), Self::partition);
        Self::define(env, "scan", Arity::Fixed(3), Self::scan);
        Self::define(env, "collect", Arity::Fixed(2), Self::collect);
        env.define(
            "expand",
            Value::Function(Function::builtin("expand", Arity::Fixed(3), move |args| {
                Self::expand(args, policy)
            })),
        );
    }

    // -- list operations ---------------------------------------------------

    /// `(map f coll)`
    fn map(args: Vec<Value>) -> RuntimeResult<Value> {
        let f = expect_function(&args[0], "map")?;
        let items = expect_sequence(&args[1], "map")?;
        let result = list::try_map(items.iter().cloned(), |item| f.call(vec![item]))?;
        Ok(Value::Vector(result))
    }

    /// `(fold f init coll)`
    fn fold(args: Vec<Value>) -> RuntimeResult<Value> {
        let f = expect_function(&args[0], "fold")?;
        let items = expect_sequence(&args[2], "fold")?;
        list::try_fold(items.iter().cloned(), args[1].clone(), |acc, item| {
            f.call(vec![acc, item])
        })
    }

    /// `(reduce f coll)`
    fn reduce(args: Vec<Value>) -> RuntimeResult<Value> {
        let f = expect_function(&args[0], "reduce")?;
        let items = expect_sequence(&args[1], "reduce")?;
        list::try_reduce(items.iter().cloned(), |a, b| f.call(vec![a, b]))
    }

    /// `(partition f coll)` - `f` must return a non-negative integer
    fn partition(args: Vec<Value>) -> RuntimeResult<Value> {
        let f = expect_function(&args[0], "partition")?;
        let items = expect_sequence(&args[1], "partition")?;

        let buckets = list::try_partition(
            items.iter().cloned().enumerate(),
            |(position, item)| -> RuntimeResult<i64> {
                match f.call(vec![item.clone()])? {
                    Value::Integer(index) => Ok(index),
                    other => Err(RuntimeError::from(ListError::InvalidPartitionIndex {
                        position: *position,
                        index: other.to_string(),
                    })),
                }
            },
        )?;

        debug!(buckets = buckets.len(), "partitioned sequence");
        Ok(Value::Vector(
            buckets
                .into_iter()
                .map(|bucket| Value::Vector(bucket.into_iter().map(|(_, item)| item).collect()))
                .collect(),
        ))
    }

    /// `(scan f init coll)`
    fn scan(args: Vec<Value>) -> RuntimeResult<Value> {
        let f = expect_function(&args[0], "scan")?;
        let items = expect_sequence(&args[2], "scan")?;

        let mut emitted = Vec::with_capacity(items.len());
        list::try_fold(items.iter().cloned(), args[1].clone(), |acc, item| {
            let next = f.call(vec![acc, item])?;
            emitted.push(next.clone());
            Ok::<Value, RuntimeError>(next)
        })?;
        Ok(Value::Vector(emitted))
    }

    /// `(collect f coll)` - `f` must return a vector for every element
    fn collect(args: Vec<Value>) -> RuntimeResult<Value> {
        let f = expect_function(&args[0], "collect")?;
        let items = expect_sequence(&args[1], "collect")?;

        let result = list::try_collect(
            items.iter().cloned().enumerate(),
            |(position, item)| -> RuntimeResult<Vec<Value>> {
                match f.call(vec![item])? {
                    Value::Vector(values) => Ok(values),
                    other => Err(ListError::InvalidCallbackResult {
                        operation: "collect".to_string(),
                        position,
                        actual: other.type_name().to_string(),
                    }
                    .into()),
                }
            },
        )?;
        Ok(Value::Vector(result))
    }

    /// `(expand f init limit)` - at most `limit` elements, starting with `init`
    fn expand(args: Vec<Value>, policy: ExpandPolicy) -> RuntimeResult<Value> {
        let f = expect_function(&args[0], "expand")?;
        let limit = match &args[2] {
            Value::Integer(n) if *n >= 0 => *n as usize,
            other => {
                return Err(RuntimeError::type_error(
                    "non-negative integer",
                    other.type_name(),
                    "expand limit",
                ))
            }
        };

        let mut failure = None;
        let values: Vec<Value> = list::expand_until(args[1].clone(), |previous| {
            match f.call(vec![previous.clone()]) {
                Ok(Value::Nil) if policy == ExpandPolicy::StopOnNil => None,
                Ok(next) => Some(next),
                Err(e) => {
                    failure = Some(e);
                    None
                }
            }
        })
        .take(limit)
        .collect();

        match failure {
            Some(e) => Err(e),
            None => Ok(Value::Vector(values)),
        }
    }

    // -- callbacks -----------------------------------------------------------

    fn identity(mut args: Vec<Value>) -> RuntimeResult<Value> {
        Ok(args.swap_remove(0))
    }

    fn inc(args: Vec<Value>) -> RuntimeResult<Value> {
        Self::add(vec![args[0].clone(), Value::Integer(1)])
    }

    fn dec(args: Vec<Value>) -> RuntimeResult<Value> {
        Self::add(vec![args[0].clone(), Value::Integer(-1)])
    }

    fn double(args: Vec<Value>) -> RuntimeResult<Value> {
        Self::multiply(vec![args[0].clone(), Value::Integer(2)])
    }

    fn negate(args: Vec<Value>) -> RuntimeResult<Value> {
        Self::multiply(vec![args[0].clone(), Value::Integer(-1)])
    }

    fn parity(args: Vec<Value>) -> RuntimeResult<Value> {
        match &args[0] {
            Value::Integer(n) => Ok(Value::Integer(n.rem_euclid(2))),
            other => Err(RuntimeError::type_error("integer", other.type_name(), "parity")),
        }
    }

    fn str(args: Vec<Value>) -> RuntimeResult<Value> {
        Ok(Value::String(display_plain(&args[0])))
    }

    fn concat(args: Vec<Value>) -> RuntimeResult<Value> {
        Ok(Value::String(args.iter().map(display_plain).collect()))
    }

    fn add(args: Vec<Value>) -> RuntimeResult<Value> {
        Self::arithmetic(args, "+", 0, i64::checked_add, |a, b| a + b)
    }

    fn multiply(args: Vec<Value>) -> RuntimeResult<Value> {
        Self::arithmetic(args, "*", 1, i64::checked_mul, |a, b| a * b)
    }

    /// Folds numeric arguments, staying in integers until a float shows up.
    fn arithmetic(
        args: Vec<Value>,
        operation: &str,
        identity: i64,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> RuntimeResult<Value> {
        let mut acc = Value::Integer(identity);
        for arg in &args {
            acc = match (&acc, arg) {
                (Value::Integer(a), Value::Integer(b)) => {
                    Value::Integer(int_op(*a, *b).ok_or_else(|| {
                        RuntimeError::Generic(format!("Integer overflow in {}", operation))
                    })?)
                }
                (Value::Integer(a), Value::Float(b)) => Value::Float(float_op(*a as f64, *b)),
                (Value::Float(a), Value::Integer(b)) => Value::Float(float_op(*a, *b as f64)),
                (Value::Float(a), Value::Float(b)) => Value::Float(float_op(*a, *b)),
                _ => {
                    return Err(RuntimeError::type_error(
                        "number",
                        arg.type_name(),
                        operation,
                    ))
                }
            };
        }
        Ok(acc)
    }

    fn max_value(args: Vec<Value>) -> RuntimeResult<Value> {
        Self::extremum(args, "max", Ordering::Greater)
    }

    fn min_value(args: Vec<Value>) -> RuntimeResult<Value> {
        Self::extremum(args, "min", Ordering::Less)
    }

    /// Keeps the first argument that no later argument beats in `wanted` order.
    fn extremum(args: Vec<Value>, operation: &str, wanted: Ordering) -> RuntimeResult<Value> {
        list::try_reduce(args, |best, candidate| -> RuntimeResult<Value> {
            if compare_numbers(&candidate, &best, operation)? == wanted {
                Ok(candidate)
            } else {
                Ok(best)
            }
        })
    }
}

fn expect_function<'a>(value: &'a Value, operation: &str) -> RuntimeResult<&'a Function> {
    match value {
        Value::Function(f) => Ok(f),
        Value::Nil => Err(ListError::invalid_argument(operation, "function").into()),
        other => Err(RuntimeError::NotCallable(format!(
            "{} passed as function to {}",
            other.type_name(),
            operation
        ))),
    }
}

fn expect_sequence<'a>(value: &'a Value, operation: &str) -> RuntimeResult<&'a [Value]> {
    match value {
        Value::Vector(items) => Ok(items),
        Value::Nil => Err(ListError::invalid_argument(operation, "list").into()),
        other => Err(RuntimeError::type_error("vector", other.type_name(), operation)),
    }
}

fn compare_numbers(a: &Value, b: &Value, operation: &str) -> RuntimeResult<Ordering> {
    let ordering = match (a, b) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Integer(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        (Value::Float(a), Value::Integer(b)) => a.partial_cmp(&(*b as f64)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Integer(_) | Value::Float(_), other) | (other, _) => {
            return Err(RuntimeError::type_error(
                "number",
                other.type_name(),
                operation,
            ))
        }
    };
    ordering.ok_or_else(|| RuntimeError::Generic(format!("Cannot compare NaN in {}", operation)))
}

/// Display without the quotes `Value` puts around strings.
fn display_plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

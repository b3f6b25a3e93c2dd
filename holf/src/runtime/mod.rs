//! Dynamic runtime
//!
//! The list operations over dynamically typed [`Value`]s, for callers that
//! only know the shape of their data at run time (JSON input, the `holf`
//! binary). Callbacks are named builtins looked up in an [`Environment`].

pub mod environment;
pub mod error;
pub mod json;
pub mod stdlib;
pub mod values;


pub use environment::Environment;
pub use error::{RuntimeError, RuntimeResult};
pub use stdlib::{ExpandPolicy, StandardLibrary};
pub use values::{Arity, BuiltinFunction, Function, Value};

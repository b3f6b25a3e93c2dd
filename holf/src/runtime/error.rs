// Error handling for the dynamic runtime

use crate::error::ListError;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Runtime errors that can occur while applying builtins to dynamic values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// A list operation rejected its input or a callback result
    #[error(transparent)]
    List(#[from] ListError),

    /// Type errors (wrong type for operation)
    #[error("Type error in {operation}: expected {expected}, got {actual}")]
    TypeError {
        expected: String,
        actual: String,
        operation: String,
    },

    /// Arity mismatch (wrong number of arguments)
    #[error("Arity mismatch in function {function}: expected {expected} arguments, got {actual}")]
    ArityMismatch {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Value is not callable
    #[error("Value is not callable: {0}")]
    NotCallable(String),

    #[error("Undefined symbol: {0}")]
    UndefinedSymbol(String),

    /// JSON conversion errors
    #[error("JSON error: {0}")]
    Json(String),

    #[error("{0}")]
    Generic(String),
}

impl RuntimeError {
    pub fn type_error(expected: &str, actual: &str, operation: &str) -> RuntimeError {
        RuntimeError::TypeError {
            expected: expected.to_string(),
            actual: actual.to_string(),
            operation: operation.to_string(),
        }
    }
}

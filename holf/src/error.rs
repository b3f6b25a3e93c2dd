// Error handling for the list operations

pub type ListResult<T> = Result<T, ListError>;

/// Errors raised by the list operations when they cannot produce a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The operation needs at least one element (`reduce`).
    #[error("Cannot {operation} an empty list")]
    EmptyInput { operation: String },

    /// A partition callback produced an index that is not a non-negative integer.
    #[error("Partition function returned invalid index {index} for element {position}")]
    InvalidPartitionIndex { position: usize, index: String },

    /// A partition index too large to allocate buckets for.
    #[error("Partition index {index} for element {position} needs more buckets than can be allocated")]
    PartitionTooLarge { position: usize, index: String },

    /// A callback produced a value of the wrong shape (e.g. a scalar where a
    /// sequence was expected by `collect`).
    #[error("Function passed to {operation} returned {actual} for element {position}, expected a sequence")]
    InvalidCallbackResult {
        operation: String,
        position: usize,
        actual: String,
    },

    /// A required function or sequence argument was absent.
    #[error("Supplied {argument} to {operation} is not allowed to be nil")]
    InvalidArgument { operation: String, argument: String },
}

impl ListError {
    pub fn empty_input(operation: &str) -> Self {
        ListError::EmptyInput {
            operation: operation.to_string(),
        }
    }

    pub fn invalid_argument(operation: &str, argument: &str) -> Self {
        ListError::InvalidArgument {
            operation: operation.to_string(),
            argument: argument.to_string(),
        }
    }
}

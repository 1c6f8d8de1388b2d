#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("duplicate key {identifier:?} produced by values: {label:?} {existing:?}")]
    DuplicateKey {
        identifier: String,
        label: String,
        existing: String,
    },

    #[error("no such operation: {0}")]
    NoSuchOperation(String),

    #[error("operation did not produce a boolean: {0}")]
    NotBoolean(String),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Failures raised by a wrapped collection's own operations. The view
/// hands these back to the caller without translating them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("{operation}: missing argument at position {position}")]
    MissingArgument {
        operation: &'static str,
        position: usize,
    },

    #[error("{operation}: invalid argument: {message}")]
    InvalidArgument {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: index {index} out of range for length {len}")]
    IndexOutOfRange {
        operation: &'static str,
        index: i64,
        len: usize,
    },

    #[error("operation not supported by {kind} collection: {operation}")]
    Unsupported { kind: String, operation: String },
}

use minheap::HeapError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// the heap was sized too small, this is a bug in the builder
    #[error("heap capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
    #[error("extract from empty heap")]
    EmptyQueueAccess,
}

impl From<HeapError> for TreeError {
    fn from(err: HeapError) -> Self {
        match err {
            HeapError::CapacityExceeded { capacity } => TreeError::CapacityExceeded { capacity },
            HeapError::EmptyQueueAccess => TreeError::EmptyQueueAccess,
        }
    }
}

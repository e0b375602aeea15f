use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    #[error("heap is full, capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
    #[error("extract from empty heap")]
    EmptyQueueAccess,
}

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// An error that can occur when constructing or operating an allocator.
pub enum BuddyError {
    /// Requested capacity is zero, not a power of two, or too large to index
    #[error("Invalid capacity")]
    InvalidCapacity,
    /// No free block is large enough to satisfy the request
    #[error("Out of memory")]
    OutOfMemory,
    /// Offset is out of range or does not refer to a live allocation
    #[error("Invalid offset")]
    InvalidOffset,
}

pub type Result<T> = core::result::Result<T, BuddyError>;

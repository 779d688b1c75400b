//! Error handling for the slotvec library
//!
//! Every fallible operation reports through [`SlotVecError`]; a failing call
//! leaves the container at its pre-call state, so all errors are recoverable
//! by the caller.

use thiserror::Error;

/// Main error type for the slotvec library
#[derive(Error, Debug)]
pub enum SlotVecError {
    /// Memory allocation or reallocation failed
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Requested capacity below the live slot count
    #[error("Cannot shrink capacity to {requested} below live count {len}")]
    InvalidShrink {
        /// Requested capacity in slots
        requested: usize,
        /// Current live slot count
        len: usize,
    },

    /// Slot targeting outside the valid range
    #[error("Out of bounds: index {index}, len {len}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid length
        len: usize,
    },

    /// The formatting collaborator reported an error
    #[error("Formatter error")]
    Format(#[from] std::fmt::Error),
}

impl SlotVecError {
    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create an invalid shrink error
    pub fn invalid_shrink(requested: usize, len: usize) -> Self {
        Self::InvalidShrink { requested, len }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfMemory { .. } => true,
            Self::InvalidShrink { .. } => false,
            Self::OutOfBounds { .. } => false,
            Self::Format(_) => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfMemory { .. } => "memory",
            Self::InvalidShrink { .. } => "shrink",
            Self::OutOfBounds { .. } => "bounds",
            Self::Format(_) => "format",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SlotVecError>;

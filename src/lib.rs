//! # slotvec: zero-filled slot vectors with finalizer sweeps
//!
//! This crate provides a generic, resizable, contiguous-storage container
//! with byte-slot semantics: every slot exposed by growth or gap insertion
//! is zero-filled before it becomes part of the logical sequence, insertion
//! and removal are both expressed through one signed shift primitive, and
//! an optional per-element finalizer sweeps occupied (non-zero) slots at
//! teardown. Growth is exact-need rather than amortized, using realloc
//! which can often expand in place.
//!
//! ## Key Types
//!
//! - **[`SlotVec<T>`]** - the container engine, for any [`bytemuck::Pod`]
//!   element type
//! - **[`StrBuf`]** - a NUL-terminated formatted text builder layered on
//!   the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use slotvec::{SlotVec, StrBuf};
//!
//! // Three zero-filled slots, then an appended element.
//! let mut vec: SlotVec<i32> = SlotVec::zeroed(3)?;
//! vec.push(7)?;
//! assert_eq!(vec.as_slice(), &[0, 0, 0, 7]);
//!
//! // Insert a two-slot gap, then close it again: exact inverses.
//! vec.shift(1, 2)?;
//! vec.shift(3, -2)?;
//! assert_eq!(vec.as_slice(), &[0, 0, 0, 7]);
//!
//! // Measured-then-rendered text building.
//! let mut s = StrBuf::from_fmt(format_args!("{}-{}", 42, "ok"))?;
//! s.push_char('!')?;
//! assert_eq!(s.as_str(), "42-ok!");
//! # Ok::<(), slotvec::SlotVecError>(())
//! ```
//!
//! ## Failure Model
//!
//! All mutating operations report through [`Result`]; a failing call leaves
//! the container at its pre-call, last-known-good state. Reallocation
//! failure never frees or corrupts the original block.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod containers;
pub mod error;
pub mod string;

pub use containers::{Finalizer, SlotVec};
pub use error::{Result, SlotVecError};
pub use string::StrBuf;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently logging only, for future use)
pub fn init() {
    log::debug!("Initializing slotvec v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_info() {
        assert!(VERSION.contains('.'));
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }

    #[test]
    fn test_reexports() {
        let vec: SlotVec<u8> = SlotVec::new();
        assert!(vec.is_empty());

        let s = StrBuf::new().unwrap();
        assert_eq!(s.text_len(), 0);
    }
}

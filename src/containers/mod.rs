//! Resizable contiguous-storage container types
//!
//! This module provides the container engine: [`SlotVec<T>`], a zero-filled
//! slot vector with exact-need growth, a unified signed shift primitive for
//! insertion and removal, compaction, and an optional per-element finalizer
//! swept at teardown.

mod slot_vec;

pub use slot_vec::{Finalizer, SlotVec};

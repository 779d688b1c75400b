//! Formatted text building over slot storage
//!
//! This module provides [`StrBuf`], a NUL-terminated string builder
//! specialization of the container engine: formatting is measured first and
//! rendered in place, so builds allocate exactly the required slots.

mod str_buf;

pub use str_buf::StrBuf;

//! Common utilities and data structures for Prose.
//!
//! This crate provides the foundational types used across the front end:
//! - `Span`: Source code location tracking

mod span;

pub use span::{BytePos, Span};

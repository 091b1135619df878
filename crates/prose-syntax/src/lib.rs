//! AST definitions for Prose.
//!
//! This crate defines the tree the parser builds for an accepted sentence
//! and the level-order walk used to display it.

mod ast;
mod walk;

pub use ast::*;
pub use walk::{level_order_lines, levels};

//! Shared test utilities for the sunshine workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`] builder for directory trees with chosen modes

pub mod tree;

pub use tree::{TestTree, is_root};

//! # redblack
//!
//! An in-memory ordered container backed by a red-black tree with parent
//! links and shared sentinel leaves.
//!
//! ## Overview
//!
//! - **[`RedBlackTree`]**: insert, delete, search and in-order traversal in
//!   O(log N) worst-case depth
//! - **[`TreeConfig`]**: duplicate-key policy and arena pre-allocation
//! - **[`RedBlackTree::verify`]**: checks every red-black invariant and
//!   reports the first one that fails
//! - **`SharedRedBlackTree`**: a lock-guarded handle for use across threads
//!   (feature `sync`)
//!
//! Nodes are stored in an arena and linked by index, so the crate contains
//! no `unsafe` code.
//!
//! ## Feature Flags
//!
//! - `serde`: serialize a tree as its ascending key sequence
//! - `sync`: `SharedRedBlackTree` via `parking_lot`
//! - `full`: enable all features
//!
//! ## Logging
//!
//! Rebalancing cases are emitted as `tracing` events at `TRACE` level, and
//! missed deletes and rejected duplicates at `DEBUG`. The crate never
//! installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use redblack::{Color, RedBlackTree, TreeError};
//!
//! let mut tree: RedBlackTree<i32> = [20, 15, 25, 10, 5, 30, 35].into_iter().collect();
//! assert_eq!(tree.to_string(), "5(R) 10(B) 15(R) 20(B) 25(R) 30(B) 35(R)");
//!
//! tree.delete(&25).unwrap();
//! assert_eq!(tree.to_string(), "5(R) 10(B) 15(R) 20(B) 30(B) 35(R)");
//!
//! assert_eq!(tree.delete(&999), Err(TreeError::KeyNotFound));
//! assert_eq!(tree.root().map(|root| root.color()), Some(Color::Black));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use redblack::prelude::*;
///
/// let tree: RedBlackTree<u8> = RedBlackTree::with_config(TreeConfig::default());
/// assert!(tree.is_empty());
/// ```
pub mod prelude {
    pub use crate::config::{DuplicatePolicy, TreeConfig};
    pub use crate::error::{InvariantViolation, TreeError};
    pub use crate::tree::{Color, NodeRef, RedBlackTree, Traversal};

    #[cfg(feature = "sync")]
    pub use crate::shared::SharedRedBlackTree;
}

pub mod config;
pub mod error;
mod tree;

#[cfg(feature = "sync")]
mod shared;

pub use config::{DuplicatePolicy, TreeConfig};
pub use error::{InvariantViolation, TreeError};
pub use tree::{Color, NodeRef, RedBlackTree, Traversal};

#[cfg(feature = "sync")]
pub use shared::SharedRedBlackTree;

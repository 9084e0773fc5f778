//! Error types for tree operations.
//!
//! [`TreeError`] is the only condition a caller sees from the public
//! mutators. [`InvariantViolation`] is produced by
//! [`RedBlackTree::verify`](crate::RedBlackTree::verify) and names the
//! red-black property a tree fails.

use std::fmt;

// =============================================================================
// TreeError
// =============================================================================

/// Recoverable errors returned by [`RedBlackTree`](crate::RedBlackTree).
///
/// # Examples
///
/// ```rust
/// use redblack::{RedBlackTree, TreeError};
///
/// let mut tree: RedBlackTree<i32> = [20, 15, 25].into_iter().collect();
/// assert_eq!(tree.delete(&999), Err(TreeError::KeyNotFound));
/// assert_eq!(format!("{}", TreeError::KeyNotFound), "key not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// The requested key is not stored in the tree. The tree is unchanged.
    KeyNotFound,
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyNotFound => write!(formatter, "key not found"),
        }
    }
}

impl std::error::Error for TreeError {}

// =============================================================================
// InvariantViolation
// =============================================================================

/// A red-black or binary-search-tree property that does not hold.
///
/// The public mutators never leave a tree in a violating state; this type
/// exists so that tests and debugging tools can say which property broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantViolation {
    /// The root node is red.
    RedRoot,
    /// The shared sentinel has been recolored.
    RedSentinel,
    /// A red node has a red child.
    RedRedEdge,
    /// Two paths from the same node reach sentinels through a different
    /// number of black nodes.
    BlackHeightMismatch {
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// An in-order neighbour is smaller than its predecessor.
    OrderViolation,
    /// A child's parent link does not point back at its parent.
    BrokenParentLink,
    /// The number of reachable nodes differs from the recorded length.
    LengthMismatch {
        /// Length recorded by the tree.
        expected: usize,
        /// Nodes reachable from the root.
        actual: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "root is red"),
            Self::RedSentinel => write!(formatter, "sentinel is red"),
            Self::RedRedEdge => write!(formatter, "red node has a red child"),
            Self::BlackHeightMismatch { left, right } => write!(
                formatter,
                "black-height mismatch: left subtree {left}, right subtree {right}"
            ),
            Self::OrderViolation => write!(formatter, "in-order keys are not sorted"),
            Self::BrokenParentLink => write!(formatter, "parent link does not match child link"),
            Self::LengthMismatch { expected, actual } => write!(
                formatter,
                "length mismatch: recorded {expected}, reachable {actual}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

// =============================================================================
// Tests
// =============================================================================

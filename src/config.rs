//! Construction-time settings for [`RedBlackTree`](crate::RedBlackTree).

/// How [`RedBlackTree::insert`](crate::RedBlackTree::insert) treats a key
/// that compares equal to one already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Equal keys descend to the right and are stored as distinct nodes.
    #[default]
    Allow,
    /// An equal key is dropped and the tree is left unchanged.
    Reject,
}

/// Settings consumed by [`RedBlackTree::with_config`](crate::RedBlackTree::with_config).
///
/// # Examples
///
/// ```rust
/// use redblack::{DuplicatePolicy, RedBlackTree, TreeConfig};
///
/// let config = TreeConfig::default()
///     .with_duplicates(DuplicatePolicy::Reject)
///     .with_capacity(64);
///
/// let mut tree = RedBlackTree::with_config(config);
/// assert!(tree.insert(7));
/// assert!(!tree.insert(7));
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TreeConfig {
    /// Handling of equal keys on insert.
    pub duplicates: DuplicatePolicy,
    /// Number of nodes to reserve arena space for up front.
    pub capacity: usize,
}

impl TreeConfig {
    /// Returns a copy of this configuration with the given duplicate policy.
    #[inline]
    #[must_use]
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Returns a copy of this configuration with the given arena capacity.
    #[inline]
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

//! A [`RedBlackTree`] shared between threads behind a single lock.
//!
//! Every insert and delete holds the write lock from descent through the
//! last rotation, so no reader can observe a tree between fixup steps.

use std::borrow::Borrow;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::TreeConfig;
use crate::error::{InvariantViolation, TreeError};
use crate::tree::{Color, RedBlackTree};

/// A thread-safe handle to a [`RedBlackTree`].
///
/// Cloning the handle shares the same tree.
///
/// # Examples
///
/// ```rust
/// use redblack::SharedRedBlackTree;
///
/// let tree = SharedRedBlackTree::new();
/// let writer = tree.clone();
///
/// std::thread::spawn(move || {
///     for key in 0..100 {
///         writer.insert(key);
///     }
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(tree.len(), 100);
/// assert!(tree.verify().is_ok());
/// ```
pub struct SharedRedBlackTree<K> {
    inner: Arc<RwLock<RedBlackTree<K>>>,
}

static_assertions::assert_impl_all!(SharedRedBlackTree<i32>: Send, Sync, Clone);

impl<K> Clone for SharedRedBlackTree<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> Default for SharedRedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> From<RedBlackTree<K>> for SharedRedBlackTree<K> {
    fn from(tree: RedBlackTree<K>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }
}

impl<K> SharedRedBlackTree<K> {
    /// Creates an empty shared tree.
    #[must_use]
    pub fn new() -> Self {
        RedBlackTree::new().into()
    }

    /// Creates an empty shared tree with the given configuration.
    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        RedBlackTree::with_config(config).into()
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the tree stores no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copies out the `(key, color)` pairs in ascending order under one
    /// read lock.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(K, Color)>
    where
        K: Clone,
    {
        self.inner
            .read()
            .traverse()
            .map(|(key, color)| (key.clone(), color))
            .collect()
    }
}

impl<K: Ord> SharedRedBlackTree<K> {
    /// Inserts a key under the write lock. See [`RedBlackTree::insert`].
    pub fn insert(&self, key: K) -> bool {
        self.inner.write().insert(key)
    }

    /// Removes a key under the write lock. See [`RedBlackTree::delete`].
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no node holds `key`.
    pub fn delete<Q>(&self, key: &Q) -> Result<K, TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.write().delete(key)
    }

    /// Returns `true` if some node holds `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.read().contains(key)
    }

    /// Runs [`RedBlackTree::verify`] under a read lock.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn verify(&self) -> Result<usize, InvariantViolation> {
        self.inner.read().verify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_clones_share_one_tree() {
        let tree = SharedRedBlackTree::new();
        let other = tree.clone();
        tree.insert(1);
        other.insert(2);
        assert_eq!(tree.len(), 2);
        assert_eq!(other.snapshot(), vec![(1, Color::Black), (2, Color::Red)]);
    }

    #[rstest]
    fn test_from_existing_tree() {
        let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
        let shared = SharedRedBlackTree::from(tree);
        assert!(shared.contains(&2));
        assert_eq!(shared.delete(&2), Ok(2));
        assert_eq!(shared.delete(&2), Err(TreeError::KeyNotFound));
        assert!(shared.verify().is_ok());
    }
}

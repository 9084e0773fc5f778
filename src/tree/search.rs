//! Lookup and in-order traversal.

use std::borrow::Borrow;
use std::cmp::Ordering;

use smallvec::SmallVec;

use super::node::{Color, NodeId, NodeRef};
use super::RedBlackTree;

/// Inline capacity of the traversal stack. The stack holds one entry per
/// level, and a tree of 2^32 keys is at most 64 levels deep.
const STACK_INLINE: usize = 64;

impl<K> RedBlackTree<K> {
    /// Descends from the root to the first node whose key equals `key`.
    pub(super) fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while !current.is_nil() {
            current = match key.cmp(self.key(current).borrow()) {
                Ordering::Less => self.left(current),
                Ordering::Greater => self.right(current),
                Ordering::Equal => return Some(current),
            };
        }
        None
    }

    /// Returns a view of the node holding `key`, or `None` if absent.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{Color, RedBlackTree};
    ///
    /// let tree: RedBlackTree<i32> = [20, 15, 25].into_iter().collect();
    ///
    /// let node = tree.search(&15).unwrap();
    /// assert_eq!(*node.key(), 15);
    /// assert_eq!(node.color(), Color::Red);
    /// assert!(tree.search(&99).is_none());
    /// ```
    #[must_use]
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|id| NodeRef::new(self, id))
    }

    /// Returns `true` if some node holds `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(super) fn minimum_from(&self, mut id: NodeId) -> NodeId {
        while !self.left(id).is_nil() {
            id = self.left(id);
        }
        id
    }

    fn maximum_from(&self, mut id: NodeId) -> NodeId {
        while !self.right(id).is_nil() {
            id = self.right(id);
        }
        id
    }

    /// Returns the node with the smallest key.
    #[must_use]
    pub fn minimum(&self) -> Option<NodeRef<'_, K>> {
        (!self.root.is_nil()).then(|| NodeRef::new(self, self.minimum_from(self.root)))
    }

    /// Returns the node with the largest key.
    #[must_use]
    pub fn maximum(&self) -> Option<NodeRef<'_, K>> {
        (!self.root.is_nil()).then(|| NodeRef::new(self, self.maximum_from(self.root)))
    }

    /// Returns every `(key, color)` pair in ascending key order.
    ///
    /// The walk uses an explicit stack rather than recursion.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{Color, RedBlackTree};
    ///
    /// let tree: RedBlackTree<i32> = [2, 3, 1].into_iter().collect();
    /// let pairs: Vec<(&i32, Color)> = tree.traverse().collect();
    ///
    /// assert_eq!(
    ///     pairs,
    ///     vec![(&1, Color::Red), (&2, Color::Black), (&3, Color::Red)]
    /// );
    /// ```
    #[must_use]
    pub fn traverse(&self) -> Traversal<'_, K> {
        Traversal {
            entries: self.in_order().into_iter().map(|id| (self.key(id), self.color(id))).collect(),
            current_index: 0,
        }
    }

    /// Node handles in ascending key order.
    pub(super) fn in_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.length);
        let mut stack: SmallVec<[NodeId; STACK_INLINE]> = SmallVec::new();
        let mut current = self.root;

        loop {
            while !current.is_nil() {
                stack.push(current);
                current = self.left(current);
            }
            let Some(id) = stack.pop() else {
                break;
            };
            order.push(id);
            current = self.right(id);
        }
        order
    }
}

// =============================================================================
// Traversal Iterator
// =============================================================================

/// An iterator over the `(key, color)` pairs of a [`RedBlackTree`] in
/// ascending key order. Created by [`RedBlackTree::traverse`].
pub struct Traversal<'a, K> {
    entries: Vec<(&'a K, Color)>,
    current_index: usize,
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = (&'a K, Color);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.current_index).copied()?;
        self.current_index += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<K> ExactSizeIterator for Traversal<'_, K> {
    fn len(&self) -> usize {
        self.entries.len().saturating_sub(self.current_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sample_tree() -> RedBlackTree<i32> {
        [20, 15, 25, 10, 5, 30, 35].into_iter().collect()
    }

    #[rstest]
    #[case(5)]
    #[case(20)]
    #[case(35)]
    fn test_search_finds_present_keys(sample_tree: RedBlackTree<i32>, #[case] key: i32) {
        assert_eq!(sample_tree.search(&key).map(|node| *node.key()), Some(key));
        assert!(sample_tree.contains(&key));
    }

    #[rstest]
    #[case(0)]
    #[case(17)]
    #[case(999)]
    fn test_search_misses_absent_keys(sample_tree: RedBlackTree<i32>, #[case] key: i32) {
        assert!(sample_tree.search(&key).is_none());
        assert!(!sample_tree.contains(&key));
    }

    #[rstest]
    fn test_search_on_empty_tree() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert!(tree.search(&1).is_none());
        assert!(tree.minimum().is_none());
        assert!(tree.maximum().is_none());
    }

    #[rstest]
    fn test_minimum_and_maximum(sample_tree: RedBlackTree<i32>) {
        assert_eq!(sample_tree.minimum().map(|node| *node.key()), Some(5));
        assert_eq!(sample_tree.maximum().map(|node| *node.key()), Some(35));
    }

    #[rstest]
    fn test_traverse_is_sorted_with_colors(sample_tree: RedBlackTree<i32>) {
        let pairs: Vec<(i32, Color)> = sample_tree.traverse().map(|(key, color)| (*key, color)).collect();
        assert_eq!(
            pairs,
            vec![
                (5, Color::Red),
                (10, Color::Black),
                (15, Color::Red),
                (20, Color::Black),
                (25, Color::Red),
                (30, Color::Black),
                (35, Color::Red),
            ]
        );
    }

    #[rstest]
    fn test_traverse_exact_size(sample_tree: RedBlackTree<i32>) {
        let mut traversal = sample_tree.traverse();
        assert_eq!(traversal.len(), 7);
        traversal.next();
        traversal.next();
        assert_eq!(traversal.size_hint(), (5, Some(5)));
        assert_eq!(traversal.by_ref().count(), 5);
        assert!(traversal.next().is_none());
    }

    #[rstest]
    fn test_traverse_large_tree() {
        let tree: RedBlackTree<u32> = (0..100_000).collect();
        let keys: Vec<u32> = tree.traverse().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), 100_000);
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[rstest]
    fn test_into_iterator_for_reference(sample_tree: RedBlackTree<i32>) {
        let mut count = 0;
        for (key, _) in &sample_tree {
            assert!(sample_tree.contains(key));
            count += 1;
        }
        assert_eq!(count, sample_tree.len());
    }
}

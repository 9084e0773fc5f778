//! Deletion and the post-delete repair.

use std::borrow::Borrow;

use tracing::{debug, trace};

use super::node::{Color, NodeId};
use super::RedBlackTree;
use crate::error::TreeError;

impl<K: Ord> RedBlackTree<K> {
    /// Removes one node holding `key` and returns the stored key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    /// When equal keys are stored, the first one met while descending from
    /// the root is removed.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no node holds `key`. The tree
    /// is not modified in that case.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{RedBlackTree, TreeError};
    ///
    /// let mut tree: RedBlackTree<String> =
    ///     ["b", "a", "c"].into_iter().map(String::from).collect();
    ///
    /// assert_eq!(tree.delete("a"), Ok("a".to_string()));
    /// assert_eq!(tree.delete("a"), Err(TreeError::KeyNotFound));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Result<K, TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(target) = self.find(key) else {
            debug!(len = self.length, "delete missed: key not found");
            return Err(TreeError::KeyNotFound);
        };
        Ok(self.remove_node(target))
    }

    /// Unlinks `target`, repairs the tree, then releases its slot.
    fn remove_node(&mut self, target: NodeId) -> K {
        let mut removed_color = self.color(target);
        // `replacement` takes the removed position and may be the sentinel,
        // whose parent link is never written; its parent is tracked here.
        let replacement;
        let replacement_parent;

        if self.left(target).is_nil() {
            replacement = self.right(target);
            replacement_parent = self.parent(target);
            self.transplant(target, replacement);
        } else if self.right(target).is_nil() {
            replacement = self.left(target);
            replacement_parent = self.parent(target);
            self.transplant(target, replacement);
        } else {
            let successor = self.minimum_from(self.right(target));
            removed_color = self.color(successor);
            replacement = self.right(successor);

            if self.parent(successor) == target {
                replacement_parent = successor;
            } else {
                replacement_parent = self.parent(successor);
                self.transplant(successor, replacement);
                let right = self.right(target);
                self.set_right(successor, right);
                self.adopt(right, successor);
            }

            self.transplant(target, successor);
            let left = self.left(target);
            self.set_left(successor, left);
            self.adopt(left, successor);
            self.set_color(successor, self.color(target));
        }

        self.length -= 1;
        if removed_color.is_black() {
            self.fixup_after_delete(replacement, replacement_parent);
        }
        self.release(target)
    }

    /// Restores the black-height after a black node was removed from above
    /// `node`, which now carries an extra black.
    fn fixup_after_delete(&mut self, mut node: NodeId, mut parent: NodeId) {
        while node != self.root && self.color(node).is_black() {
            let side = self.side_of(node, parent);
            let far = side.opposite();
            let mut sibling = self.child(parent, far);

            if self.color(sibling).is_red() {
                trace!(case = 1, "delete fixup: rotate red sibling up");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, far);
            }

            let near_nephew = self.child(sibling, side);
            let far_nephew = self.child(sibling, far);
            if self.color(near_nephew).is_black() && self.color(far_nephew).is_black() {
                trace!(case = 2, "delete fixup: recolor sibling and move up");
                self.set_color(sibling, Color::Red);
                node = parent;
                parent = self.parent(node);
                continue;
            }

            if self.color(far_nephew).is_black() {
                trace!(case = 3, "delete fixup: rotate near nephew outward");
                self.set_color(near_nephew, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self.child(parent, far);
            }

            trace!(case = 4, "delete fixup: rotate at parent");
            self.set_color(sibling, self.color(parent));
            self.set_color(parent, Color::Black);
            let far_nephew = self.child(sibling, far);
            self.set_color(far_nephew, Color::Black);
            self.rotate(parent, side);
            node = self.root;
        }

        if !node.is_nil() {
            self.set_color(node, Color::Black);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    // 20B( 10B(5R, 15R), 30B(25R, 35R) )
    #[fixture]
    fn sample_tree() -> RedBlackTree<i32> {
        [20, 15, 25, 10, 5, 30, 35].into_iter().collect()
    }

    fn keys(tree: &RedBlackTree<i32>) -> Vec<i32> {
        tree.traverse().map(|(key, _)| *key).collect()
    }

    #[rstest]
    fn test_delete_red_leaf(mut sample_tree: RedBlackTree<i32>) {
        let height = sample_tree.height();
        assert_eq!(sample_tree.delete(&25), Ok(25));
        assert_eq!(keys(&sample_tree), vec![5, 10, 15, 20, 30, 35]);
        assert_eq!(sample_tree.to_string(), "5(R) 10(B) 15(R) 20(B) 30(B) 35(R)");
        assert!(sample_tree.height() <= height);
        assert_eq!(sample_tree.verify(), Ok(2));
    }

    #[rstest]
    fn test_delete_missing_key_is_noop(mut sample_tree: RedBlackTree<i32>) {
        let before = sample_tree.to_string();
        let root = sample_tree.root;
        assert_eq!(sample_tree.delete(&999), Err(TreeError::KeyNotFound));
        assert_eq!(sample_tree.to_string(), before);
        assert_eq!(sample_tree.root, root);
        assert_eq!(sample_tree.len(), 7);
        assert!(sample_tree.free.is_empty());
    }

    #[rstest]
    fn test_delete_node_with_two_children_uses_successor(mut sample_tree: RedBlackTree<i32>) {
        assert_eq!(sample_tree.delete(&10), Ok(10));
        let replacement = sample_tree.root().unwrap().left().unwrap();
        assert_eq!(*replacement.key(), 15);
        assert_eq!(replacement.color(), Color::Black);
        assert_eq!(replacement.left().map(|node| *node.key()), Some(5));
        assert_eq!(sample_tree.verify(), Ok(2));
    }

    #[rstest]
    fn test_delete_root(mut sample_tree: RedBlackTree<i32>) {
        assert_eq!(sample_tree.delete(&20), Ok(20));
        let root = sample_tree.root().unwrap();
        assert_eq!(*root.key(), 25);
        assert_eq!(root.color(), Color::Black);
        assert_eq!(keys(&sample_tree), vec![5, 10, 15, 25, 30, 35]);
        assert!(sample_tree.verify().is_ok());
    }

    #[rstest]
    fn test_delete_black_leaf_with_red_sibling() {
        // 2B(1B, 4R(3B, 5B(-, 6R)))
        let mut tree: RedBlackTree<i32> = (1..=6).collect();
        assert_eq!(tree.delete(&1), Ok(1));
        assert_eq!(tree.to_string(), "2(B) 3(R) 4(B) 5(B) 6(R)");
        assert_eq!(*tree.root().unwrap().key(), 4);
        assert_eq!(tree.verify(), Ok(2));
    }

    #[rstest]
    fn test_delete_black_leaf_with_black_nephews_propagates() {
        // 4B(2B(1B, 3B), 6B(5B, 8R(7B, 9B(-, 10R))))
        let mut tree: RedBlackTree<i32> = (1..=10).collect();
        assert_eq!(tree.delete(&1), Ok(1));
        assert_eq!(
            tree.to_string(),
            "2(B) 3(R) 4(B) 5(B) 6(B) 7(B) 8(B) 9(B) 10(R)"
        );
        assert_eq!(*tree.root().unwrap().key(), 6);
        assert_eq!(tree.verify(), Ok(3));
    }

    #[rstest]
    fn test_delete_until_empty() {
        let mut tree: RedBlackTree<i32> = (1..=3).collect();
        tree.delete(&1).unwrap();
        tree.delete(&3).unwrap();
        assert_eq!(tree.to_string(), "2(B)");
        tree.insert(1);
        tree.insert(3);
        let mut drained = Vec::new();
        for key in [2, 1, 3] {
            drained.push(tree.delete(&key).unwrap());
            assert!(tree.verify().is_ok());
        }
        assert_eq!(drained, vec![2, 1, 3]);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }

    #[rstest]
    #[case::near_nephew_left(vec![10, 5, 20, 15], 5)]
    #[case::near_nephew_right(vec![10, 5, 20, 7], 20)]
    #[case::far_nephew_left(vec![10, 5, 20, 25], 5)]
    #[case::far_nephew_right(vec![10, 5, 20, 1], 20)]
    fn test_delete_black_leaf_with_red_nephew(#[case] inserts: Vec<i32>, #[case] removed: i32) {
        let mut tree: RedBlackTree<i32> = inserts.iter().copied().collect();
        assert_eq!(tree.delete(&removed), Ok(removed));

        let mut expected = inserts;
        expected.retain(|key| *key != removed);
        expected.sort_unstable();
        assert_eq!(keys(&tree), expected);
        assert_eq!(tree.verify(), Ok(2));
        assert_eq!(tree.height(), 2);
    }

    #[rstest]
    fn test_delete_one_of_duplicates() {
        let mut tree: RedBlackTree<i32> = [5, 5, 5, 1].into_iter().collect();
        assert_eq!(tree.delete(&5), Ok(5));
        assert_eq!(keys(&tree), vec![1, 5, 5]);
        assert!(tree.verify().is_ok());
    }

    #[rstest]
    fn test_delete_by_borrowed_key() {
        let mut tree: RedBlackTree<String> =
            ["pear", "apple", "fig"].into_iter().map(String::from).collect();
        assert_eq!(tree.delete("fig"), Ok("fig".to_string()));
        assert!(!tree.contains("fig"));
    }
}

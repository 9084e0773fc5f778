//! Structural primitives: subtree transplant and the two rotations.
//!
//! None of these touch colors.

use super::RedBlackTree;
use super::node::{NodeId, Side};

impl<K> RedBlackTree<K> {
    /// Puts `replacement` where `target` hangs: in `target`'s parent's child
    /// link, or at the root. `target`'s own links are left as they were.
    pub(super) fn transplant(&mut self, target: NodeId, replacement: NodeId) {
        let parent = self.parent(target);
        if parent.is_nil() {
            self.root = replacement;
        } else {
            let side = self.side_of(target, parent);
            self.set_child(parent, side, replacement);
        }
        self.adopt(replacement, parent);
    }

    /// Rotates `pivot` down toward `direction`. The child on the opposite
    /// side takes its place.
    #[inline]
    pub(super) fn rotate(&mut self, pivot: NodeId, direction: Side) {
        match direction {
            Side::Left => self.rotate_left(pivot),
            Side::Right => self.rotate_right(pivot),
        }
    }

    /// `pivot`'s right child takes its place; `pivot` becomes its left child.
    ///
    /// # Panics
    ///
    /// In debug builds, if the right child is the sentinel.
    pub(super) fn rotate_left(&mut self, pivot: NodeId) {
        let riser = self.right(pivot);
        debug_assert!(!riser.is_nil(), "rotation requires a non-sentinel child");

        let inner = self.left(riser);
        self.set_right(pivot, inner);
        self.adopt(inner, pivot);

        self.transplant(pivot, riser);

        self.set_left(riser, pivot);
        self.adopt(pivot, riser);
    }

    /// `pivot`'s left child takes its place; `pivot` becomes its right child.
    ///
    /// # Panics
    ///
    /// In debug builds, if the left child is the sentinel.
    pub(super) fn rotate_right(&mut self, pivot: NodeId) {
        let riser = self.left(pivot);
        debug_assert!(!riser.is_nil(), "rotation requires a non-sentinel child");

        let inner = self.right(riser);
        self.set_left(pivot, inner);
        self.adopt(inner, pivot);

        self.transplant(pivot, riser);

        self.set_right(riser, pivot);
        self.adopt(pivot, riser);
    }
}

#[cfg(test)]
mod tests {
    use super::super::Color;
    use super::*;
    use rstest::rstest;

    fn keys(tree: &RedBlackTree<i32>) -> Vec<i32> {
        tree.traverse().map(|(key, _)| *key).collect()
    }

    fn colors(tree: &RedBlackTree<i32>) -> Vec<Color> {
        tree.traverse().map(|(_, color)| color).collect()
    }

    // 20B( 10B(5R, 15R), 30B(25R, 35R) )
    fn balanced() -> RedBlackTree<i32> {
        [20, 15, 25, 10, 5, 30, 35].into_iter().collect()
    }

    #[rstest]
    fn test_rotate_left_at_root() {
        let mut tree = balanced();
        let before_keys = keys(&tree);
        let before_colors = colors(&tree);
        let old_root = tree.root;
        let riser = tree.right(old_root);

        tree.rotate_left(old_root);

        assert_eq!(tree.root, riser);
        assert!(tree.parent(riser).is_nil());
        assert_eq!(tree.left(riser), old_root);
        assert_eq!(tree.parent(old_root), riser);
        assert_eq!(*tree.key(tree.right(old_root)), 25);
        assert_eq!(tree.parent(tree.right(old_root)), old_root);
        assert_eq!(keys(&tree), before_keys);
        assert_eq!(colors(&tree), before_colors);
    }

    #[rstest]
    fn test_rotate_right_at_inner_node() {
        let mut tree = balanced();
        let before_keys = keys(&tree);
        let pivot = tree.left(tree.root);
        let riser = tree.left(pivot);

        tree.rotate_right(pivot);

        assert_eq!(tree.left(tree.root), riser);
        assert_eq!(tree.parent(riser), tree.root);
        assert_eq!(tree.right(riser), pivot);
        assert_eq!(tree.parent(pivot), riser);
        assert!(tree.left(pivot).is_nil());
        assert_eq!(*tree.key(tree.right(pivot)), 15);
        assert_eq!(keys(&tree), before_keys);
    }

    #[rstest]
    fn test_rotations_are_inverse() {
        let mut tree = balanced();
        let root = tree.root;
        let riser = tree.right(root);

        tree.rotate_left(root);
        tree.rotate_right(riser);

        assert_eq!(tree.root, root);
        assert_eq!(tree.right(root), riser);
        assert_eq!(tree.verify(), Ok(2));
    }

    #[rstest]
    fn test_transplant_sentinel_into_leaf_position() {
        let mut tree = balanced();
        let parent = tree.right(tree.root);
        let leaf = tree.left(parent);

        tree.transplant(leaf, NodeId::NIL);

        assert!(tree.left(parent).is_nil());
        assert!(tree.parent(NodeId::NIL).is_nil());
        assert_eq!(keys(&tree), vec![5, 10, 15, 20, 30, 35]);
    }

    #[rstest]
    #[should_panic(expected = "rotation requires a non-sentinel child")]
    #[cfg(debug_assertions)]
    fn test_rotate_without_child_panics() {
        let mut tree: RedBlackTree<i32> = std::iter::once(1).collect();
        let root = tree.root;
        tree.rotate_left(root);
    }
}

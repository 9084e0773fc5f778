//! Insertion and the post-insert repair.

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::node::{Color, NodeId};
use super::RedBlackTree;
use crate::config::DuplicatePolicy;

impl<K: Ord> RedBlackTree<K> {
    /// Inserts a key.
    ///
    /// Returns `true` if a node was added. With
    /// [`DuplicatePolicy::Reject`] an equal key already in the tree makes
    /// this a no-op that returns `false`; otherwise the new key is placed
    /// after every equal key in traversal order.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let mut parent = NodeId::NIL;
        let mut current = self.root;
        let mut goes_left = false;

        while !current.is_nil() {
            parent = current;
            match key.cmp(self.key(current)) {
                Ordering::Less => {
                    goes_left = true;
                    current = self.left(current);
                }
                Ordering::Equal if self.config.duplicates == DuplicatePolicy::Reject => {
                    debug!("insert rejected: key already present");
                    return false;
                }
                Ordering::Equal | Ordering::Greater => {
                    goes_left = false;
                    current = self.right(current);
                }
            }
        }

        let node = self.allocate(key, parent);
        if parent.is_nil() {
            self.root = node;
        } else if goes_left {
            self.set_left(parent, node);
        } else {
            self.set_right(parent, node);
        }
        self.length += 1;

        self.fixup_after_insert(node);
        true
    }

    /// Restores the invariants after `node` was linked in as a red leaf.
    /// Only the red-red rule, or a red root, can be broken at this point.
    fn fixup_after_insert(&mut self, mut node: NodeId) {
        while node != self.root {
            let mut parent = self.parent(node);
            if self.color(parent).is_black() {
                break;
            }
            // A red parent is never the root, so the grandparent is real.
            let grandparent = self.parent(parent);
            let side = self.side_of(parent, grandparent);
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle).is_red() {
                trace!(case = "A", "insert fixup: recolor and move up");
                self.set_color(grandparent, Color::Red);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                node = grandparent;
                continue;
            }

            if node == self.child(parent, side.opposite()) {
                trace!(case = "B", "insert fixup: rotate inner grandchild outward");
                self.rotate(parent, side);
                parent = node;
            }

            trace!(case = "C", "insert fixup: rotate at grandparent");
            self.rotate(grandparent, side.opposite());
            self.swap_colors(parent, grandparent);
            break;
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }
}

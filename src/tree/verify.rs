//! Read-only structural checks.

use smallvec::SmallVec;

use super::node::NodeId;
use super::RedBlackTree;
use crate::config::DuplicatePolicy;
use crate::error::InvariantViolation;

impl<K> RedBlackTree<K> {
    /// Returns the number of nodes on the longest root-to-leaf path.
    /// An empty tree has height 0.
    ///
    /// For N keys the height never exceeds `2 * log2(N + 1)`.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: SmallVec<[(NodeId, usize); 64]> = SmallVec::new();
        if !self.root.is_nil() {
            stack.push((self.root, 1));
        }
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [self.left(id), self.right(id)] {
                if !child.is_nil() {
                    stack.push((child, depth + 1));
                }
            }
        }
        deepest
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Checks every red-black and ordering invariant and returns the
    /// black-height of the root: the number of black nodes on any path from
    /// the root down to a sentinel, counting the sentinel but not the root.
    /// An empty tree has black-height 0.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..=7).collect();
    /// assert_eq!(tree.verify(), Ok(2));
    /// ```
    pub fn verify(&self) -> Result<usize, InvariantViolation> {
        if self.color(NodeId::NIL).is_red() {
            return Err(InvariantViolation::RedSentinel);
        }
        if self.root.is_nil() {
            return self.check_length(0).map(|()| 0);
        }
        if self.color(self.root).is_red() {
            return Err(InvariantViolation::RedRoot);
        }
        if !self.parent(self.root).is_nil() {
            return Err(InvariantViolation::BrokenParentLink);
        }

        let order = self.in_order();
        self.check_length(order.len())?;
        self.check_order(&order)?;

        // Children come after their parent in pre-order, so walking it
        // backwards visits every child before its parent.
        let mut pre_order = Vec::with_capacity(order.len());
        let mut stack: SmallVec<[NodeId; 64]> = SmallVec::new();
        stack.push(self.root);
        while let Some(id) = stack.pop() {
            pre_order.push(id);
            for child in [self.right(id), self.left(id)] {
                if child.is_nil() {
                    continue;
                }
                if self.parent(child) != id {
                    return Err(InvariantViolation::BrokenParentLink);
                }
                if self.color(id).is_red() && self.color(child).is_red() {
                    return Err(InvariantViolation::RedRedEdge);
                }
                stack.push(child);
            }
        }

        let mut black_heights = vec![0_usize; self.nodes.len()];
        for &id in pre_order.iter().rev() {
            let below = |child: NodeId| {
                black_heights[child.index()] + usize::from(self.color(child).is_black())
            };
            let left = below(self.left(id));
            let right = below(self.right(id));
            if left != right {
                return Err(InvariantViolation::BlackHeightMismatch { left, right });
            }
            black_heights[id.index()] = left;
        }
        Ok(black_heights[self.root.index()])
    }

    fn check_length(&self, actual: usize) -> Result<(), InvariantViolation> {
        if actual == self.length {
            Ok(())
        } else {
            Err(InvariantViolation::LengthMismatch {
                expected: self.length,
                actual,
            })
        }
    }

    fn check_order(&self, order: &[NodeId]) -> Result<(), InvariantViolation> {
        let strict = self.config.duplicates == DuplicatePolicy::Reject;
        let sorted = order.windows(2).all(|pair| {
            let (previous, next) = (self.key(pair[0]), self.key(pair[1]));
            if strict { previous < next } else { previous <= next }
        });
        if sorted {
            Ok(())
        } else {
            Err(InvariantViolation::OrderViolation)
        }
    }
}

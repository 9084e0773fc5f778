//! Arena-backed red-black tree.
//!
//! This module provides [`RedBlackTree`], a mutable ordered container whose
//! nodes carry parent links and whose leaves are a shared black sentinel.
//!
//! # Overview
//!
//! - O(log N) insert
//! - O(log N) delete
//! - O(log N) search
//! - O(N) in-order traversal
//! - O(1) len and `is_empty`
//!
//! # Internal Structure
//!
//! Nodes live in a `Vec` and refer to each other through index handles, so
//! parent/child cycles carry no ownership. Slot 0 is the sentinel: black,
//! keyless, and never written. Slots released by delete are recycled through
//! a free list.
//!
//! The tree maintains the following invariants between public calls:
//! 1. Every sentinel is black
//! 2. A red node has no red child
//! 3. Every path from a node to a descendant sentinel has the same number of
//!    black nodes
//! 4. The root is black
//! 5. In-order keys are sorted
//!
//! Together they bound the height by `2 * log2(N + 1)`.

mod delete;
mod insert;
mod node;
mod rotation;
mod search;
mod verify;

pub use node::{Color, NodeRef};
pub use search::Traversal;

use std::fmt;

use node::{Node, NodeId, Side};

use crate::config::TreeConfig;

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// An ordered container backed by a red-black tree.
///
/// Keys must implement `Ord`. Equal keys are stored as distinct nodes unless
/// the tree was built with
/// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `insert`     | O(log N)   |
/// | `delete`     | O(log N)   |
/// | `search`     | O(log N)   |
/// | `contains`   | O(log N)   |
/// | `traverse`   | O(N)       |
/// | `len`        | O(1)       |
///
/// # Examples
///
/// ```rust
/// use redblack::{Color, RedBlackTree, TreeError};
///
/// let mut tree = RedBlackTree::new();
/// for key in [20, 15, 25, 10, 5, 30, 35] {
///     tree.insert(key);
/// }
///
/// let keys: Vec<i32> = tree.traverse().map(|(key, _)| *key).collect();
/// assert_eq!(keys, vec![5, 10, 15, 20, 25, 30, 35]);
/// assert_eq!(tree.root().map(|root| root.color()), Some(Color::Black));
///
/// assert_eq!(tree.delete(&25), Ok(25));
/// assert_eq!(tree.delete(&999), Err(TreeError::KeyNotFound));
/// assert!(tree.verify().is_ok());
/// ```
#[derive(Clone)]
pub struct RedBlackTree<K> {
    /// Node storage; index 0 is the sentinel
    nodes: Vec<Node<K>>,
    /// Released slots available for reuse
    free: Vec<NodeId>,
    /// Root node, or the sentinel when empty
    root: NodeId,
    /// Number of live nodes
    length: usize,
    config: TreeConfig,
}

static_assertions::assert_impl_all!(RedBlackTree<i32>: Send, Sync, Clone);

impl<K> RedBlackTree<K> {
    /// Creates an empty tree with the default configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Creates an empty tree with the given configuration.
    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        let mut nodes = Vec::with_capacity(config.capacity.saturating_add(1));
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free: Vec::new(),
            root: NodeId::NIL,
            length: 0,
            config,
        }
    }

    /// Returns the configuration this tree was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Returns the number of stored keys.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree stores no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the root node, or `None` if the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        (!self.root.is_nil()).then(|| NodeRef::new(self, self.root))
    }

    /// Removes every key, keeping the arena's allocation.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.free.clear();
        self.root = NodeId::NIL;
        self.length = 0;
    }

    // =========================================================================
    // Arena access
    // =========================================================================

    #[inline]
    fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        debug_assert!(!id.is_nil(), "the sentinel is never written");
        &mut self.nodes[id.index()]
    }

    fn key(&self, id: NodeId) -> &K {
        match &self.node(id).key {
            Some(key) => key,
            None => unreachable!("sentinel and released slots carry no key"),
        }
    }

    #[inline]
    fn color(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    #[inline]
    fn left(&self, id: NodeId) -> NodeId {
        self.node(id).left
    }

    #[inline]
    fn right(&self, id: NodeId) -> NodeId {
        self.node(id).right
    }

    #[inline]
    fn parent(&self, id: NodeId) -> NodeId {
        self.node(id).parent
    }

    #[inline]
    fn child(&self, id: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.left(id),
            Side::Right => self.right(id),
        }
    }

    /// Which child of `parent` the node `id` is. The sentinel counts as the
    /// left child when the left link is the sentinel.
    #[inline]
    fn side_of(&self, id: NodeId, parent: NodeId) -> Side {
        if self.left(parent) == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    #[inline]
    fn set_left(&mut self, id: NodeId, child: NodeId) {
        self.node_mut(id).left = child;
    }

    #[inline]
    fn set_right(&mut self, id: NodeId, child: NodeId) {
        self.node_mut(id).right = child;
    }

    #[inline]
    fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        match side {
            Side::Left => self.set_left(id, child),
            Side::Right => self.set_right(id, child),
        }
    }

    /// Points `id` at `parent` unless `id` is the sentinel.
    #[inline]
    fn adopt(&mut self, id: NodeId, parent: NodeId) {
        if !id.is_nil() {
            self.node_mut(id).parent = parent;
        }
    }

    fn swap_colors(&mut self, first: NodeId, second: NodeId) {
        let first_color = self.color(first);
        let second_color = self.color(second);
        self.set_color(first, second_color);
        self.set_color(second, first_color);
    }

    /// Stores `key` in a fresh red leaf under `parent`, reusing a released
    /// slot when one exists.
    fn allocate(&mut self, key: K, parent: NodeId) -> NodeId {
        let node = Node::new_red(key, parent);
        if let Some(id) = self.free.pop() {
            *self.node_mut(id) = node;
            id
        } else {
            self.nodes.push(node);
            NodeId::new(self.nodes.len() - 1)
        }
    }

    /// Returns the key of a fully unlinked node and puts its slot on the
    /// free list.
    fn release(&mut self, id: NodeId) -> K {
        let node = std::mem::replace(self.node_mut(id), Node::sentinel());
        self.free.push(id);
        match node.key {
            Some(key) => key,
            None => unreachable!("released a slot that held no key"),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for RedBlackTree<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for RedBlackTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RedBlackTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a RedBlackTree<K> {
    type Item = (&'a K, Color);
    type IntoIter = Traversal<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

impl<K: fmt::Debug> fmt::Debug for RedBlackTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.traverse()).finish()
    }
}

/// Formats the in-order traversal as `key(color)` pairs separated by spaces.
impl<K: fmt::Display> fmt::Display for RedBlackTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, color) in self {
            if first {
                first = false;
            } else {
                write!(formatter, " ")?;
            }
            write!(formatter, "{key}({color})")?;
        }
        Ok(())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for RedBlackTree<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for (key, _) in self {
            sequence.serialize_element(key)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct RedBlackTreeVisitor<K> {
    marker: std::marker::PhantomData<K>,
}

#[cfg(feature = "serde")]
impl<'de, K> serde::de::Visitor<'de> for RedBlackTreeVisitor<K>
where
    K: serde::Deserialize<'de> + Ord,
{
    type Value = RedBlackTree<K>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = access.size_hint().unwrap_or(0);
        let mut tree = RedBlackTree::with_config(TreeConfig::default().with_capacity(capacity));
        while let Some(key) = access.next_element()? {
            tree.insert(key);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for RedBlackTree<K>
where
    K: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

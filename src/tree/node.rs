//! Node records, arena handles and the borrowed node view.

use std::fmt;

use super::RedBlackTree;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a red-black tree node.
///
/// Displays as `R` or `B`, the form used by [`RedBlackTree`]'s `Display`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// A red node. Never the root, never the parent of another red node.
    Red,
    /// A black node. All sentinels are black.
    Black,
}

impl Color {
    /// Returns `true` for [`Color::Red`].
    #[inline]
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` for [`Color::Black`].
    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(formatter, "R"),
            Self::Black => write!(formatter, "B"),
        }
    }
}

// =============================================================================
// Arena Handles
// =============================================================================

/// Index of a node slot in the tree's arena.
///
/// Slot 0 is the sentinel shared by every leaf position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The shared sentinel.
    pub(crate) const NIL: Self = Self(0);

    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) const fn is_nil(self) -> bool {
        self.0 == 0
    }
}

/// One side of a node. Used to express the mirrored halves of the
/// rebalancing cases once.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// A slot in the arena.
///
/// Live nodes always hold `Some(key)`. The sentinel and released slots hold
/// `None`, are black, and link nowhere.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: Option<K>,
    pub(crate) color: Color,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,
}

impl<K> Node<K> {
    /// Creates the black, keyless placeholder used for the sentinel and
    /// for vacant slots.
    pub(crate) const fn sentinel() -> Self {
        Self {
            key: None,
            color: Color::Black,
            left: NodeId::NIL,
            right: NodeId::NIL,
            parent: NodeId::NIL,
        }
    }

    /// Creates a new red leaf under `parent`.
    pub(crate) const fn new_red(key: K, parent: NodeId) -> Self {
        Self {
            key: Some(key),
            color: Color::Red,
            left: NodeId::NIL,
            right: NodeId::NIL,
            parent,
        }
    }
}

// =============================================================================
// NodeRef
// =============================================================================

/// A read-only view of a node stored in a [`RedBlackTree`].
///
/// Returned by [`RedBlackTree::search`], [`RedBlackTree::root`],
/// [`RedBlackTree::minimum`] and [`RedBlackTree::maximum`]. It borrows the
/// tree, so the structure cannot change while a view is alive.
///
/// # Examples
///
/// ```rust
/// use redblack::{Color, RedBlackTree};
///
/// let tree: RedBlackTree<i32> = [20, 15, 25].into_iter().collect();
/// let root = tree.root().unwrap();
///
/// assert_eq!(*root.key(), 20);
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(root.left().map(|node| *node.key()), Some(15));
/// assert!(root.parent().is_none());
/// ```
pub struct NodeRef<'a, K> {
    tree: &'a RedBlackTree<K>,
    id: NodeId,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) const fn new(tree: &'a RedBlackTree<K>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn linked(&self, id: NodeId) -> Option<Self> {
        (!id.is_nil()).then(|| Self::new(self.tree, id))
    }

    /// The key stored in this node.
    #[must_use]
    pub fn key(&self) -> &'a K {
        self.tree.key(self.id)
    }

    /// The color of this node.
    #[must_use]
    pub fn color(&self) -> Color {
        self.tree.color(self.id)
    }

    /// The left child, or `None` if it is the sentinel.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.linked(self.tree.left(self.id))
    }

    /// The right child, or `None` if it is the sentinel.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.linked(self.tree.right(self.id))
    }

    /// The parent, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.linked(self.tree.parent(self.id))
    }

    /// Returns `true` if this node is the root of its tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tree.root == self.id
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NodeRef")
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

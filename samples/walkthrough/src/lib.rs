//! Walkthrough sample for the `redblack` crate.
//!
//! Inserts a configured key sequence, prints the in-order traversal with
//! node colors, deletes the configured keys and prints the traversal again.

pub mod config;

use redblack::{InvariantViolation, RedBlackTree, TreeError};

use crate::config::WalkthroughConfig;

/// What one walkthrough run observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkthroughReport {
    /// Traversal after every insert, in `key(color)` form.
    pub after_insert: String,
    /// Traversal after every delete, in `key(color)` form.
    pub after_delete: String,
    /// Keys whose delete found nothing.
    pub missing: Vec<i64>,
    /// Height of the tree after every delete.
    pub height: usize,
    /// Verified black-height of the final tree.
    pub black_height: usize,
}

/// Runs the walkthrough and logs each stage.
///
/// # Errors
///
/// Returns the violation reported by [`RedBlackTree::verify`] if either
/// stage leaves the tree unbalanced.
pub fn run(config: &WalkthroughConfig) -> Result<WalkthroughReport, InvariantViolation> {
    let mut tree: RedBlackTree<i64> = config.keys.iter().copied().collect();
    tree.verify()?;
    let after_insert = tree.to_string();
    tracing::info!(len = tree.len(), height = tree.height(), "Inserted: {after_insert}");

    let mut missing = Vec::new();
    for &key in &config.delete {
        match tree.delete(&key) {
            Ok(_) => tracing::info!(key, "Deleted"),
            Err(TreeError::KeyNotFound) => {
                tracing::warn!(key, "Key not found, tree unchanged");
                missing.push(key);
            }
        }
    }

    let black_height = tree.verify()?;
    let after_delete = tree.to_string();
    tracing::info!(len = tree.len(), height = tree.height(), "After delete: {after_delete}");
    tracing::info!(black_height, "Invariants verified");

    Ok(WalkthroughReport {
        after_insert,
        after_delete,
        missing,
        height: tree.height(),
        black_height,
    })
}

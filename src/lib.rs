//! This crate exposes [`TreeMap`], an ordered key-to-value map backed by a
//! plain, unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key used for
//! searching, an associated value, and up to two child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! These invariants make searching for a key `O(height)` (where `height` is
//! the longest path from the root `Node` to a leaf `Node`) and make in-order
//! iteration (left subtree, node, right subtree) yield keys in ascending
//! order.
//!
//! ## What this map is, and is not
//!
//! Nothing here rebalances. Insertion order determines the shape, so a map
//! fed ascending keys degrades into a linked list with `O(n)` operations.
//! Two further quirks are preserved on purpose and called out on the methods
//! that exhibit them:
//!
//! - [`TreeMap::add`] with an already-present key does *not* update the
//!   stored value; ties route left and a shadow node is created.
//! - [`TreeMap::clone`](struct.TreeMap.html#impl-Clone) rebuilds the copy by
//!   re-inserting keys in ascending order, so every clone is a maximally
//!   right-leaning chain.
//!
//! # Examples
//!
//! ```
//! use treemap::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.add(1, "one");
//! map.add(2, "two");
//!
//! assert_eq!(map.get(&1), Some(&"one"));
//! assert_eq!(map.keys(), vec![1, 2]);
//!
//! map.remove(&1);
//! assert!(!map.contains(&1));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod map;
mod serial;

pub use error::{Error, Result};
pub use map::{Iter, TreeMap};

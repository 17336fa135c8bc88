//! This crate exposes an ordered Binary Search Tree (BST) container holding unique values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! The tree in [`ordered`] does no rebalancing. Feeding it already sorted values will give a
//! tree whose height equals its length.
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]. A rejected duplicate insert logs an `INFO`
//! event and structural changes log at `TRACE`. Installing a subscriber is up to the caller.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod ordered;

pub use error::TreeError;
pub use ordered::OrderedTree;

//! An owning, unbalanced BST. Every `Node` is owned by exactly one parent (or by the
//! `OrderedTree` for the root) through a `Box` so there are no parent pointers, no reference
//! counting and no `unsafe`.
//!
//! Values are kept unique: inserting a value that's already present is rejected and reported
//! back to the caller.
//!
//! # Examples
//!
//! ```
//! use bst::ordered::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1).map(|n| *n.value()), Some(1));
//!
//! // Inserting the same value again is refused.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(tree.search(&1).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{info, trace};

use crate::error::TreeError;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// Detaches the rightmost node under `link`, which must not be empty, and returns its value.
/// The rightmost node never has a right child so its left child (if any) takes its place.
fn take_largest<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.right.is_some() {
        link = &mut link.as_mut()?.right;
    }
    let node = link.take()?;
    let Node { value, left, .. } = *node;
    *link = left;
    Some(value)
}

/// A Binary Search Tree holding unique, ordered values. This can be used for inserting,
/// searching, and removing values as well as walking them in inorder, preorder, or postorder.
///
/// The tree does no rebalancing, so its shape is entirely determined by the order of insertions
/// and removals.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the given value into the tree. Returns `true` if the value was newly added and
    /// `false` if it was already present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::ordered::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.try_insert(value).is_ok()
    }

    /// Like [`insert`][OrderedTree::insert] but a duplicate is reported as an error which hands
    /// the rejected value back.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::error::TreeError;
    /// use bst::ordered::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert_eq!(tree.try_insert(5), Ok(()));
    /// assert_eq!(tree.try_insert(5), Err(TreeError::DuplicateValue(5)));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), TreeError<T>>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    info!("duplicate values are not allowed, insert rejected");
                    return Err(TreeError::DuplicateValue(value));
                }
            };
        }

        trace!("creating node");
        *link = Some(Node::new_boxed(value));
        self.len += 1;
        Ok(())
    }

    /// Finds the node holding the given value. If no node has the value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::ordered::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let node = tree.search(&2).unwrap();
    /// assert_eq!(node.value(), &2);
    /// assert_eq!(node.left().map(|n| *n.value()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(NodeRef { node }),
            };
        }
        None
    }

    /// Returns `true` if the tree holds the given value.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// Removes the given value from the tree and returns it. If the tree does not contain the
    /// value, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::ordered::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&5), None);
    /// assert_eq!(tree.inorder(), [3, 8]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        // Find the slot owning the target. The ordering is read through a shared borrow so the
        // cursor is only reborrowed mutably when it moves on.
        let mut link = &mut self.root;
        loop {
            let ordering = value.cmp(&link.as_ref()?.value);
            if ordering == Ordering::Equal {
                break;
            }
            let node = link.as_mut()?;
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let two_children = link
            .as_ref()
            .is_some_and(|node| node.left.is_some() && node.right.is_some());
        let removed = if two_children {
            // The node stays where it is and takes its predecessor's value. That is, the
            // largest value in its left subtree.
            trace!("replacing removed value with in-order predecessor");
            let target = link.as_mut()?;
            let predecessor = take_largest(&mut target.left)?;
            mem::replace(&mut target.value, predecessor)
        } else {
            let node = link.take()?;
            let Node { value, left, right } = *node;
            if left.is_none() && right.is_none() {
                trace!("removing leaf");
            } else {
                trace!("splicing single child into removed node's slot");
            }
            *link = left.or(right);
            value
        };

        self.len -= 1;
        Some(removed)
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A handle to the root node, if there is one.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_deref().map(|node| NodeRef { node })
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a tree with only a
    /// root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Collects the values visiting the left subtree, then the node, then the right subtree.
    /// This yields the values in ascending order.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Collects the values visiting the node, then the left subtree, then the right subtree.
    pub fn preorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            values.push(node.value.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        values
    }

    /// Collects the values visiting the left subtree, then the right subtree, then the node.
    pub fn postorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        // Walk node, right, left and flip it.
        let mut values = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            values.push(node.value.clone());
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        values.reverse();
        values
    }

    /// Removes every value from the tree, one node at a time.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Ord + Clone,
{
    /// Re-inserting the preorder walk reproduces the exact same shape.
    fn clone(&self) -> Self {
        self.preorder().into_iter().collect()
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A read-only handle to a node in an [`OrderedTree`].
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// The root of this node's left subtree.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node.left.as_deref().map(|node| NodeRef { node })
    }

    /// The root of this node's right subtree.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node.right.as_deref().map(|node| NodeRef { node })
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("has_left", &self.node.left.is_some())
            .field("has_right", &self.node.right.is_some())
            .finish()
    }
}

/// An in-order iterator over the values of an [`OrderedTree`].
pub struct Iter<'a, T> {
    /// Nodes still to be yielded, smallest on top.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

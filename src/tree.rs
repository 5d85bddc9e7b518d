//! The public face of the crate: a [`Tree`] owning an optional root [`Node`].
//!
//! # Examples
//!
//! ```
//! use trinary::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&[5]), Ok(false));
//!
//! tree.insert(5);
//! tree.insert(4);
//! tree.insert(5);
//!
//! // Words list every value from the root down to the node they end at.
//! assert_eq!(tree.search(&[5, 4]), Ok(true));
//! assert_eq!(tree.search(&[5, 5]), Ok(true));
//! assert_eq!(tree.search(&[4]), Ok(false));
//!
//! // Deleting a word removes the node it ends at.
//! assert_eq!(tree.delete(&[5, 4]), Ok(true));
//! assert_eq!(tree.search(&[5, 4]), Ok(false));
//! ```

use std::fmt;

use log::info;

use crate::error::TreeResult;
use crate::node::{Located, Node};
use crate::util::Removal;

/// An unbalanced tree where every node has up to three children: less, equal, and greater.
///
/// Values are inserted one at a time and never overwrite each other. Lookups and deletions take a
/// *word*, the exact sequence of values met on the way from the root down to a node.
///
/// Dropping, cloning and comparing trees walk an explicit stack, so arbitrarily deep chains are
/// fine. `Debug` output (and so [`Tree::dump`]) nests once per level and can overflow the stack on
/// chains tens of thousands of nodes deep.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root of the tree, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree. Since insertion never overwrites, this is the number of
    /// inserted values minus whatever deletions took away.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    /// Number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Adds `value` to the tree as a new node. Equal values stack up under each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use trinary::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.search(&[2, 2]), Ok(true));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match &mut self.root {
            Some(root) => root.insert(value),
            None => self.root = Some(Box::new(Node::new(value))),
        }
    }

    /// Finds the node `word` ends at along with its parent.
    ///
    /// ## Errors
    ///
    /// [`TreeError::EmptyWord`][crate::TreeError::EmptyWord] if the tree has nodes and `word` is
    /// empty. An empty tree finds nothing for any word.
    ///
    /// # Examples
    ///
    /// ```
    /// use trinary::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(9);
    ///
    /// let located = tree.locate(&[5, 9]).unwrap().unwrap();
    /// assert_eq!(located.node().value(), &9);
    /// assert_eq!(located.parent().map(|p| *p.value()), Some(5));
    /// ```
    pub fn locate(&self, word: &[T]) -> TreeResult<Option<Located<'_, T>>>
    where
        T: Ord,
    {
        match self.root() {
            Some(root) => root.locate(word, None),
            None => Ok(None),
        }
    }

    /// Whether `word` leads from the root to some node.
    ///
    /// ## Errors
    ///
    /// [`TreeError::EmptyWord`][crate::TreeError::EmptyWord] if the tree has nodes and `word` is
    /// empty.
    pub fn search(&self, word: &[T]) -> TreeResult<bool>
    where
        T: Ord,
    {
        Ok(self.locate(word)?.is_some())
    }

    /// Removes the node `word` ends at and returns whether there was one.
    ///
    /// **Note** everything below the removed node is removed with it. Deleting a word that ends
    /// at the root empties the tree.
    ///
    /// ## Errors
    ///
    /// [`TreeError::EmptyWord`][crate::TreeError::EmptyWord] if the tree has nodes and `word` is
    /// empty. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use trinary::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(4);
    /// tree.insert(2);
    ///
    /// // 2 lives under 4 so it goes too.
    /// assert_eq!(tree.delete(&[5, 4]), Ok(true));
    /// assert_eq!(tree.search(&[5, 4, 2]), Ok(false));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn delete(&mut self, word: &[T]) -> TreeResult<bool>
    where
        T: Ord + fmt::Debug,
    {
        let root = match &mut self.root {
            Some(root) => root,
            None => return Ok(false),
        };

        match root.prune(word)? {
            Removal::NotFound => Ok(false),
            Removal::Detached => Ok(true),
            Removal::DetachSelf(_) => {
                info!("pruning root {:?}, tree is now empty", root.value());
                self.root = None;
                Ok(true)
            }
        }
    }

    /// Logs the whole tree, or that it is empty, at `info` level.
    pub fn dump(&self)
    where
        T: fmt::Debug,
    {
        match self.root() {
            Some(root) => info!("tree dump: {:?}", root),
            None => info!("tree is empty"),
        }
    }
}

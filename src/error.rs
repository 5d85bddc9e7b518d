//! Errors raised by tree traversal.
//!
//! A word that simply isn't in the tree is not an error, it is `Ok(None)` or
//! `Ok(false)`. The variants here mean a caller or the tree itself broke a
//! contract.

use thiserror::Error;

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while locating or detaching nodes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A lookup was asked to match an empty word against a populated tree.
    #[error("cannot locate an empty word")]
    EmptyWord,

    /// A node was asked to detach a node that is not one of its children.
    #[error("cannot detach a node that is not a child")]
    NotAChild,
}

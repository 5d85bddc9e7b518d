//! This crate exposes a trinary tree, mostly for educational purposes, along with a small
//! numeric parser in [`parse`].
//!
//! ## Trinary Tree
//!
//! A trinary tree looks a lot like a Binary Search Tree except that every `Node` has a third
//! child between the usual two. When a value is inserted it is compared with each `Node` on the
//! way down:
//!
//! 1. Values less than a `Node`'s value go into its `less` subtree.
//! 2. Values equal to a `Node`'s value go into its `equal` subtree.
//! 3. Values greater than a `Node`'s value go into its `greater` subtree.
//!
//! Insertion never overwrites anything. Every insert adds exactly one `Node` so inserting the same
//! value three times builds a chain of three `Node`s linked through `equal`.
//!
//! ## Words
//!
//! Rather than searching for a single value, the tree is searched with a *word*: every value met
//! on the way from the root down to some `Node`. For example, after inserting `5, 4, 2, 2` the
//! word `[5, 4, 2, 2]` leads to the second `2`. Each element must equal the `Node` at its depth
//! and the element after it decides which of the three children is visited next.
//!
//! Deleting a word removes the `Node` it ends at *and everything below it*. Nothing is promoted
//! or re-attached, so deleting `[5, 4]` above also removes both `2`s.
//!
//! The tree does no rebalancing. Inserting a sorted run of values builds a chain as tall as the
//! run is long.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod parse;
mod tree;
mod util;


pub use error::{TreeError, TreeResult};
pub use node::{Direction, Located, Node};
pub use tree::Tree;

//! The building block of a [`Tree`][crate::Tree]. A `Node` keeps one value and three optional
//! children: values less than it, values equal to it, and values greater than it. Every
//! duplicate of a value goes down the `equal` chain so insertion always grows the tree by
//! exactly one node.

use std::cmp::Ordering;
use std::fmt;

use log::info;

use crate::error::{TreeError, TreeResult};
use crate::util::Removal;

type Link<T> = Option<Box<Node<T>>>;

/// One of the three child slots of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The child holding values less than its parent.
    Less,
    /// The child holding duplicates of its parent.
    Equal,
    /// The child holding values greater than its parent.
    Greater,
}

impl Direction {
    /// Every direction, in slot order.
    pub const ALL: [Direction; 3] = [Direction::Less, Direction::Equal, Direction::Greater];

    /// The slot `value` belongs in when compared against a node holding `pivot`.
    pub fn of<T: Ord>(value: &T, pivot: &T) -> Self {
        value.cmp(pivot).into()
    }
}

impl From<Ordering> for Direction {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Direction::Less,
            Ordering::Equal => Direction::Equal,
            Ordering::Greater => Direction::Greater,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Less => "less",
            Direction::Equal => "equal",
            Direction::Greater => "greater",
        };
        f.write_str(name)
    }
}

/// The identity of a node, taken from its address. It is only ever compared, never dereferenced,
/// and is only meaningful while the traversal that produced it is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn of<T>(node: &Node<T>) -> Self {
        Self(node as *const Node<T> as usize)
    }
}

/// The result of matching a word: the node the word ends at and, unless that node is the root,
/// the node directly above it.
///
/// Both are borrows of the tree, so a `Located` can't outlive the lookup that produced it and
/// never owns anything.
pub struct Located<'a, T> {
    node: &'a Node<T>,
    parent: Option<&'a Node<T>>,
}

impl<'a, T> Located<'a, T> {
    /// The node the word ends at.
    pub fn node(&self) -> &'a Node<T> {
        self.node
    }

    /// The parent of [`node`][Located::node], or `None` if the word matched the root.
    pub fn parent(&self) -> Option<&'a Node<T>> {
        self.parent
    }
}

impl<T: fmt::Debug> fmt::Debug for Located<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Located")
            .field("node", &self.node.value)
            .field("parent", &self.parent.map(|p| &p.value))
            .finish()
    }
}

/// How the head of a word relates to the node it is being matched against.
enum Step {
    /// The head isn't this node's value.
    Mismatch,
    /// The head is this node's value and it was the last element.
    Matched,
    /// The head is this node's value and the next element continues in this direction.
    Descend(Direction),
}

/// A single element of a [`Tree`][crate::Tree].
pub struct Node<T> {
    value: T,
    less: Link<T>,
    equal: Link<T>,
    greater: Link<T>,
}

impl<T> Drop for Node<T> {
    // Unbalanced trees can be as deep as they are long so tear children down with a stack rather
    // than letting each `Box` drop recurse.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.take_children().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children());
        }
    }
}

impl<T> Clone for Node<T>
where
    T: Clone,
{
    // Stack based, see `Drop`. Nodes are listed parents-first and then rebuilt from the back so
    // every child is finished before it is attached.
    fn clone(&self) -> Self {
        let mut originals = vec![(self, None)];
        let mut parents: Vec<Option<(usize, Direction)>> = Vec::new();
        let mut copies = Vec::new();
        while let Some((node, parent)) = originals.pop() {
            let index = copies.len();
            parents.push(parent);
            copies.push(Node::new(node.value.clone()));
            for direction in Direction::ALL {
                if let Some(child) = node.child(direction) {
                    originals.push((child, Some((index, direction))));
                }
            }
        }

        while let Some(copy) = copies.pop() {
            match parents[copies.len()] {
                Some((parent, direction)) => {
                    *copies[parent].slot_mut(direction) = Some(Box::new(copy));
                }
                None => return copy,
            }
        }
        unreachable!("the first copy is the root and has no parent")
    }
}

impl<T> PartialEq for Node<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.value != right.value {
                return false;
            }
            for direction in Direction::ALL {
                match (left.child(direction), right.child(direction)) {
                    (Some(left), Some(right)) => stack.push((left, right)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // TODO stack based Debug. `debug_struct` nesting recurses once per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("less", &self.less())
            .field("equal", &self.equal())
            .field("greater", &self.greater())
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            less: None,
            equal: None,
            greater: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The child holding values less than this node's value.
    pub fn less(&self) -> Option<&Self> {
        self.less.as_deref()
    }

    /// The child holding duplicates of this node's value.
    pub fn equal(&self) -> Option<&Self> {
        self.equal.as_deref()
    }

    /// The child holding values greater than this node's value.
    pub fn greater(&self) -> Option<&Self> {
        self.greater.as_deref()
    }

    /// The child in the given slot.
    pub fn child(&self, direction: Direction) -> Option<&Self> {
        match direction {
            Direction::Less => self.less(),
            Direction::Equal => self.equal(),
            Direction::Greater => self.greater(),
        }
    }

    /// Whether all three child slots are empty.
    pub fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.child(direction))
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Link<T> {
        match direction {
            Direction::Less => &mut self.less,
            Direction::Equal => &mut self.equal,
            Direction::Greater => &mut self.greater,
        }
    }

    fn take_children(&mut self) -> impl Iterator<Item = Box<Self>> {
        [self.less.take(), self.equal.take(), self.greater.take()]
            .into_iter()
            .flatten()
    }

    /// Number of nodes in the subtree rooted here, including this one.
    pub(crate) fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Number of levels in the subtree rooted here. A leaf has a height of 1.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Adds `value` below this node. Walks down the slot each comparison picks until it finds an
    /// empty one and puts a new leaf there, so no existing node ever changes its value.
    pub(crate) fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let direction = Direction::of(&value, &self.value);
        let mut slot = self.slot_mut(direction);
        while let Some(node) = slot {
            let direction = Direction::of(&value, &node.value);
            slot = node.slot_mut(direction);
        }
        *slot = Some(Box::new(Node::new(value)));
    }

    /// Matches the head of `word` against this node.
    ///
    /// The head has to *equal* this node's value. The element after it is then *compared* with
    /// this node's value to pick which child the rest of the word continues in.
    fn step(&self, word: &[T]) -> TreeResult<Step>
    where
        T: Ord,
    {
        let (head, rest) = word.split_first().ok_or(TreeError::EmptyWord)?;
        if *head != self.value {
            return Ok(Step::Mismatch);
        }

        Ok(match rest.first() {
            None => Step::Matched,
            Some(next) => Step::Descend(Direction::of(next, &self.value)),
        })
    }

    /// Finds the node `word` ends at, where `word` lists every value from this node down to the
    /// target. `parent` is whatever node this one was reached from.
    ///
    /// ## Errors
    ///
    /// [`TreeError::EmptyWord`] if `word` is empty. A word that doesn't match is `Ok(None)`.
    pub(crate) fn locate<'a>(
        &'a self,
        word: &[T],
        parent: Option<&'a Self>,
    ) -> TreeResult<Option<Located<'a, T>>>
    where
        T: Ord,
    {
        match self.step(word)? {
            Step::Mismatch => Ok(None),
            Step::Matched => Ok(Some(Located { node: self, parent })),
            Step::Descend(direction) => match self.child(direction) {
                Some(child) => child.locate(&word[1..], Some(self)),
                None => Ok(None),
            },
        }
    }

    /// Removes the node `word` ends at, matching exactly like [`Node::locate`]. The matched node
    /// reports itself with [`Removal::DetachSelf`] and whoever owns it, this node's caller,
    /// detaches it.
    ///
    /// **Note** the matched node goes away with everything below it. Its children are not
    /// re-attached anywhere.
    pub(crate) fn prune(&mut self, word: &[T]) -> TreeResult<Removal>
    where
        T: Ord + fmt::Debug,
    {
        let direction = match self.step(word)? {
            Step::Mismatch => return Ok(Removal::NotFound),
            Step::Matched => return Ok(Removal::DetachSelf(NodeId::of(self))),
            Step::Descend(direction) => direction,
        };

        let removal = match self.slot_mut(direction) {
            Some(child) => child.prune(&word[1..])?,
            None => return Ok(Removal::NotFound),
        };

        match removal {
            Removal::DetachSelf(child) => {
                self.detach(child)?;
                Ok(Removal::Detached)
            }
            removal => Ok(removal),
        }
    }

    /// Clears whichever slot holds `child` and hands back the detached subtree.
    ///
    /// ## Errors
    ///
    /// [`TreeError::NotAChild`] if none of the three slots holds `child`. Nothing is modified in
    /// that case.
    pub(crate) fn detach(&mut self, child: NodeId) -> TreeResult<Box<Self>>
    where
        T: fmt::Debug,
    {
        let direction = Direction::ALL
            .into_iter()
            .find(|&direction| self.child(direction).map(NodeId::of) == Some(child))
            .ok_or(TreeError::NotAChild)?;

        let detached = self.slot_mut(direction).take().ok_or(TreeError::NotAChild)?;
        info!(
            "pruning {} child {:?} of {:?}",
            direction, detached.value, self.value
        );
        Ok(detached)
    }
}

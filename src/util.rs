use crate::node::NodeId;

/// What a node hands back to its parent while a word is being removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The word didn't match so nothing was removed.
    NotFound,
    /// The word ends at the `Node` returning this. Its parent should detach the node with this id
    /// (or the `Tree` should clear its root if there is no parent).
    DetachSelf(NodeId),
    /// A descendant matched and has already been detached from its parent.
    Detached,
}

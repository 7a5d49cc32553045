// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Index based identity of a node within a [`RunTree`].
///
/// Ids are handed out by the owning tree and stay valid for the lifetime of
/// that tree. Detaching a node does not invalidate its id; it only removes
/// the node from its parent's child list.
///
/// [`RunTree`]: crate::RunTree
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the index of this node within the owning tree's storage.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The kind of a style container node.
///
/// Only some container kinds carry a visual style; the rest exist for
/// structure (the tree root is a [`Generic`] container).
///
/// [`Generic`]: ContainerKind::Generic
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ContainerKind {
    /// A structural container with no style of its own.
    #[default]
    Generic,
    /// An emphasis container (italic text).
    Emphasis,
    /// A strong container (bold text).
    Strong,
}

/// The payload of a node: either a style container or a text run leaf.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NodeKind {
    /// An internal node grouping children under a style.
    Container(ContainerKind),
    /// A leaf text run with a content length in caret positions.
    Run {
        /// The number of caret positions within the run, so an insertion
        /// point offset into this run ranges over `0..=len`.
        len: usize,
    },
}

impl NodeKind {
    /// Returns `true` if this node is a text run leaf.
    pub fn is_run(&self) -> bool {
        matches!(self, Self::Run { .. })
    }
}

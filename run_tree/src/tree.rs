// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{ContainerKind, NodeId, NodeKind};

#[derive(Clone, Debug)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// An ordered tree whose leaves are text runs and whose internal nodes are
/// style containers.
///
/// The tree is arena backed: nodes are stored in insertion order and
/// addressed by [`NodeId`]. The host editing surface owns and mutates the
/// tree; the engine only reads it. The root is always a
/// [`ContainerKind::Generic`] container and has no parent.
#[derive(Clone, Debug)]
pub struct RunTree {
    nodes: Vec<NodeData>,
}

impl RunTree {
    /// Creates an empty tree containing only the root container.
    pub fn new() -> Self {
        Self {
            nodes: alloc::vec![NodeData {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Container(ContainerKind::Generic),
            }],
        }
    }

    /// Returns the id of the root container.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a new style container as the last child of `parent`.
    pub fn push_container(&mut self, parent: NodeId, kind: ContainerKind) -> NodeId {
        self.push_node(parent, NodeKind::Container(kind))
    }

    /// Appends a new text run of length `len` as the last child of `parent`.
    pub fn push_run(&mut self, parent: NodeId, len: usize) -> NodeId {
        self.push_node(parent, NodeKind::Run { len })
    }

    fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Removes `node` from its parent's child list and clears its parent.
    ///
    /// The node keeps its id and its own children; it simply stops being
    /// reachable from the rest of the tree. Detaching the root is a no-op.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes[node.0].parent.take() else {
            return;
        };
        self.nodes[parent.0].children.retain(|child| *child != node);
    }

    /// Returns the kind of `node`.
    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.nodes[node.0].kind
    }

    /// Returns the container kind of `node`, or `None` for a text run.
    pub fn container_kind(&self, node: NodeId) -> Option<ContainerKind> {
        match self.nodes[node.0].kind {
            NodeKind::Container(kind) => Some(kind),
            NodeKind::Run { .. } => None,
        }
    }

    /// Returns the content length of `node`, or `None` for a container.
    pub fn run_len(&self, node: NodeId) -> Option<usize> {
        match self.nodes[node.0].kind {
            NodeKind::Run { len } => Some(len),
            NodeKind::Container(_) => None,
        }
    }

    /// Returns `true` if `node` is a text run leaf.
    pub fn is_run(&self, node: NodeId) -> bool {
        self.nodes[node.0].kind.is_run()
    }

    /// Returns the parent of `node`, or `None` if the node is the root or
    /// has been detached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Returns the ordered children of `node`.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Returns the position of `node` within its parent's child list.
    pub fn index_in_parent(&self, node: NodeId) -> Option<usize> {
        let parent = self.nodes[node.0].parent?;
        self.nodes[parent.0]
            .children
            .iter()
            .position(|child| *child == node)
    }

    /// Returns the sibling immediately before `node` in its parent.
    pub fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.nodes[node.0].parent?;
        let index = self.index_in_parent(node)?;
        let siblings = &self.nodes[parent.0].children;
        index.checked_sub(1).map(|i| siblings[i])
    }

    /// Returns the sibling immediately after `node` in its parent.
    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.nodes[node.0].parent?;
        let index = self.index_in_parent(node)?;
        self.nodes[parent.0].children.get(index + 1).copied()
    }

    /// Descends via first children until reaching a node with no children.
    ///
    /// For a well formed tree this lands on the first text run inside
    /// `node`; for a leaf it returns `node` itself.
    pub fn first_leaf_descendant(&self, node: NodeId) -> NodeId {
        self.leaf_descendant(node, |children| children.first())
    }

    /// Descends via last children until reaching a node with no children.
    pub fn last_leaf_descendant(&self, node: NodeId) -> NodeId {
        self.leaf_descendant(node, |children| children.last())
    }

    fn leaf_descendant(
        &self,
        node: NodeId,
        edge: impl Fn(&[NodeId]) -> Option<&NodeId>,
    ) -> NodeId {
        let mut current = node;
        while let Some(child) = edge(&self.nodes[current.0].children) {
            current = *child;
        }
        current
    }
}

impl Default for RunTree {
    fn default() -> Self {
        Self::new()
    }
}

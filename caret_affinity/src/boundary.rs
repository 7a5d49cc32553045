// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use run_tree::{NodeId, RunTree};

use crate::Error;

/// A cursor location: a text run and an offset within it.
///
/// The offset ranges over `0..=len` in caret positions. An insertion point
/// is only meaningful while its run remains attached to the tree; resolving
/// a detached one fails with [`ErrorKind::DetachedNode`].
///
/// [`ErrorKind::DetachedNode`]: crate::ErrorKind::DetachedNode
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct InsertionPoint {
    /// The text run the cursor sits in.
    pub run: NodeId,
    /// The offset within the run, in caret positions.
    pub offset: usize,
}

impl InsertionPoint {
    /// Creates an insertion point at `offset` within `run`.
    pub fn new(run: NodeId, offset: usize) -> Self {
        Self { run, offset }
    }
}

/// The pair of text runs adjacent to an insertion point.
///
/// Derived fresh from an [`InsertionPoint`] on every event, never stored.
/// A side is absent when the insertion point sits at the corresponding edge
/// of the whole tree. Style tags for either side are computed on demand via
/// [`classify`], not eagerly.
///
/// [`classify`]: crate::classify
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct Boundary {
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Boundary {
    /// A boundary with both sides absent.
    fn empty() -> Self {
        Self::default()
    }

    /// The run ending at the insertion point, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The run beginning at the insertion point, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Returns `true` when both sides are present.
    ///
    /// Only a navigable boundary participates in the two-step arrow-key
    /// protocol; everywhere else the native cursor moves normally.
    pub fn is_navigable(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

/// Resolves the runs adjacent to `point`.
///
/// At the start of a run, the right side is the run itself and the left
/// side is found by previous-sibling lookup, climbing ancestors until one
/// has a previous sibling; the end of a run is symmetric. A side found
/// outside the immediate parent may be a container, so it is dived to its
/// edge leaf (last leaf when looking left, first leaf when looking right)
/// and both sides are always genuine text runs.
///
/// A mid-run insertion point and a zero-length run both resolve to an empty
/// (non-navigable) boundary.
///
/// # Errors
///
/// Fails with [`ErrorKind::DetachedNode`] if the run's parent is absent.
///
/// [`ErrorKind::DetachedNode`]: crate::ErrorKind::DetachedNode
pub fn resolve_boundary(tree: &RunTree, point: InsertionPoint) -> Result<Boundary, Error> {
    if tree.parent(point.run).is_none() {
        return Err(Error::detached_node(point.run));
    }
    let Some(len) = tree.run_len(point.run) else {
        // The insertion point names a container; there is no run content to
        // sit between.
        return Ok(Boundary::empty());
    };
    if len == 0 {
        return Ok(Boundary::empty());
    }

    let is_at_start = point.offset == 0;
    let is_at_end = point.offset == len;
    if is_at_start {
        let left = tree
            .prev_sibling(point.run)
            .or_else(|| climb_to_prev_sibling(tree, point.run))
            .map(|node| tree.last_leaf_descendant(node));
        Ok(Boundary {
            left,
            right: Some(point.run),
        })
    } else if is_at_end {
        let right = tree
            .next_sibling(point.run)
            .or_else(|| climb_to_next_sibling(tree, point.run))
            .map(|node| tree.first_leaf_descendant(node));
        Ok(Boundary {
            left: Some(point.run),
            right,
        })
    } else {
        Ok(Boundary::empty())
    }
}

/// Climbs the ancestor chain of `node` until an ancestor has a previous
/// sibling, and returns that sibling.
fn climb_to_prev_sibling(tree: &RunTree, node: NodeId) -> Option<NodeId> {
    let mut ancestor = tree.parent(node);
    while let Some(current) = ancestor {
        if let Some(sibling) = tree.prev_sibling(current) {
            return Some(sibling);
        }
        ancestor = tree.parent(current);
    }
    None
}

/// Climbs the ancestor chain of `node` until an ancestor has a next
/// sibling, and returns that sibling.
fn climb_to_next_sibling(tree: &RunTree, node: NodeId) -> Option<NodeId> {
    let mut ancestor = tree.parent(node);
    while let Some(current) = ancestor {
        if let Some(sibling) = tree.next_sibling(current) {
            return Some(sibling);
        }
        ancestor = tree.parent(current);
    }
    None
}

#[cfg(test)]
mod tests {
    use run_tree::ContainerKind;

    use super::*;
    use crate::ErrorKind;

    // <root> "one" <em> "two" </em> "three" </root>
    fn flat_tree() -> (RunTree, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = RunTree::new();
        let root = tree.root();
        let one = tree.push_run(root, 3);
        let em = tree.push_container(root, ContainerKind::Emphasis);
        let two = tree.push_run(em, 3);
        let three = tree.push_run(root, 5);
        (tree, one, em, two, three)
    }

    #[test]
    fn mid_run_is_not_a_boundary() {
        let (tree, one, ..) = flat_tree();
        for offset in 1..3 {
            let boundary = resolve_boundary(&tree, InsertionPoint::new(one, offset)).unwrap();
            assert!(!boundary.is_navigable());
            assert_eq!(boundary.left(), None);
            assert_eq!(boundary.right(), None);
        }
    }

    #[test]
    fn start_of_first_run_has_no_left() {
        let (tree, one, ..) = flat_tree();
        let boundary = resolve_boundary(&tree, InsertionPoint::new(one, 0)).unwrap();
        assert_eq!(boundary.left(), None);
        assert_eq!(boundary.right(), Some(one));
        assert!(!boundary.is_navigable());
    }

    #[test]
    fn end_of_last_run_has_no_right() {
        let (tree, _, _, _, three) = flat_tree();
        let boundary = resolve_boundary(&tree, InsertionPoint::new(three, 5)).unwrap();
        assert_eq!(boundary.left(), Some(three));
        assert_eq!(boundary.right(), None);
        assert!(!boundary.is_navigable());
    }

    #[test]
    fn sibling_leaves_resolve_without_climbing() {
        let mut tree = RunTree::new();
        let root = tree.root();
        let first = tree.push_run(root, 2);
        let second = tree.push_run(root, 2);
        let boundary = resolve_boundary(&tree, InsertionPoint::new(second, 0)).unwrap();
        assert_eq!(boundary.left(), Some(first));
        assert_eq!(boundary.right(), Some(second));
        assert!(boundary.is_navigable());
    }

    #[test]
    fn start_of_run_after_container_dives_to_its_last_leaf() {
        let (tree, _, _, two, three) = flat_tree();
        let boundary = resolve_boundary(&tree, InsertionPoint::new(three, 0)).unwrap();
        assert_eq!(boundary.left(), Some(two));
        assert_eq!(boundary.right(), Some(three));
    }

    #[test]
    fn end_of_nested_leaf_climbs_to_following_run() {
        let (tree, _, _, two, three) = flat_tree();
        // "two" is the last leaf of the emphasis container; its next run is
        // found by climbing to the container and taking its next sibling.
        let boundary = resolve_boundary(&tree, InsertionPoint::new(two, 3)).unwrap();
        assert_eq!(boundary.left(), Some(two));
        assert_eq!(boundary.right(), Some(three));
        assert!(boundary.is_navigable());
    }

    #[test]
    fn climbed_sibling_is_dived_to_its_first_leaf() {
        let mut tree = RunTree::new();
        let root = tree.root();
        let em = tree.push_container(root, ContainerKind::Emphasis);
        let inner = tree.push_run(em, 3);
        let strong = tree.push_container(root, ContainerKind::Strong);
        let nested = tree.push_container(strong, ContainerKind::Emphasis);
        let first = tree.push_run(nested, 2);
        let boundary = resolve_boundary(&tree, InsertionPoint::new(inner, 3)).unwrap();
        assert_eq!(boundary.left(), Some(inner));
        assert_eq!(boundary.right(), Some(first));
    }

    #[test]
    fn zero_length_run_is_not_navigable() {
        let mut tree = RunTree::new();
        let root = tree.root();
        let _before = tree.push_run(root, 2);
        let empty = tree.push_run(root, 0);
        let _after = tree.push_run(root, 2);
        let boundary = resolve_boundary(&tree, InsertionPoint::new(empty, 0)).unwrap();
        assert!(!boundary.is_navigable());
    }

    #[test]
    fn detached_run_is_an_error() {
        let (mut tree, one, ..) = flat_tree();
        tree.detach(one);
        let err = resolve_boundary(&tree, InsertionPoint::new(one, 0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DetachedNode);
        assert_eq!(err.node(), Some(one));
    }

    #[test]
    fn container_insertion_point_is_not_a_boundary() {
        let (tree, _, em, ..) = flat_tree();
        let boundary = resolve_boundary(&tree, InsertionPoint::new(em, 0)).unwrap();
        assert!(!boundary.is_navigable());
    }
}

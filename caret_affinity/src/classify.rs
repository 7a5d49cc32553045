// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use run_tree::{ContainerKind, NodeId, RunTree};
use smallvec::SmallVec;

/// A visual style contributed by a container on a run's ancestor chain.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StyleTag {
    /// Italic text, contributed by [`ContainerKind::Emphasis`].
    Italic,
    /// Bold text, contributed by [`ContainerKind::Strong`].
    Bold,
}

/// The ordered set of active style tags for a run, innermost first.
///
/// Styled text rarely nests more than two levels deep, so the tags stay
/// inline in the common case.
pub type StyleTags = SmallVec<[StyleTag; 2]>;

/// The fixed container-kind to style-tag table.
///
/// Kinds without an entry contribute no tag and are skipped during
/// classification.
fn style_tag(kind: ContainerKind) -> Option<StyleTag> {
    match kind {
        ContainerKind::Emphasis => Some(StyleTag::Italic),
        ContainerKind::Strong => Some(StyleTag::Bold),
        ContainerKind::Generic => None,
    }
}

/// Returns the active style tags for `leaf`, innermost to outermost.
///
/// Walks the ancestor chain upward, appending a tag for each mapped
/// container kind. The walk stops when it reaches `stop_boundary` (whose
/// own tag, and everything above it, is excluded) or runs out of ancestors
/// at the tree root, whichever comes first.
///
/// Pure: no side effects and no failure modes. An empty run is never a
/// meaningful classification target; callers classify the runs reported by
/// a [`Boundary`], which are always content bearing.
///
/// [`Boundary`]: crate::Boundary
pub fn classify(tree: &RunTree, leaf: NodeId, stop_boundary: NodeId) -> StyleTags {
    let mut tags = StyleTags::new();
    let mut ancestor = tree.parent(leaf);
    while let Some(node) = ancestor {
        if node == stop_boundary {
            break;
        }
        if let Some(tag) = tree.container_kind(node).and_then(style_tag) {
            tags.push(tag);
        }
        ancestor = tree.parent(node);
    }
    tags
}

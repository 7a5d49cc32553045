// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use run_tree::NodeId;

/// Error type for caret affinity operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus, for node related failures,
/// the identity of the offending node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The node that triggered the error, when relevant.
    node: Option<NodeId>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The node that triggered the error, if the error concerns one.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub(crate) fn detached_node(node: NodeId) -> Self {
        Self {
            kind: ErrorKind::DetachedNode,
            node: Some(node),
        }
    }

    pub(crate) fn unsupported_environment() -> Self {
        Self {
            kind: ErrorKind::UnsupportedEnvironment,
            node: None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::DetachedNode => {
                if let Some(node) = self.node {
                    write!(
                        f,
                        "insertion point run (node {}) is not attached to the run tree",
                        node.index()
                    )
                } else {
                    write!(f, "insertion point run is not attached to the run tree")
                }
            }
            ErrorKind::UnsupportedEnvironment => {
                write!(f, "host environment does not provide a selection API")
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The insertion point's run has no parent.
    ///
    /// This is a contract violation by the host (an insertion point is only
    /// meaningful while its run remains attached to the tree), not a
    /// recoverable runtime condition.
    DetachedNode,

    /// The host environment lacks a selection API, so a caret widget cannot
    /// be constructed against it.
    UnsupportedEnvironment,
}

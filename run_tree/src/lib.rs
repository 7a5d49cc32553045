// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ordered tree of style containers and text-run leaves.
//!
//! This is the model half of the caret affinity engine: a host editing
//! surface builds a [`RunTree`] mirroring its styled text (leaves are text
//! runs, internal nodes are style containers such as emphasis or strong),
//! and the engine reads it to find the runs adjacent to an insertion point.
//! Node identity is stable for the lifetime of the tree, so a [`NodeId`]
//! held across an interaction keeps referring to the same node even after
//! siblings are attached or detached.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod node;
mod tree;

pub use crate::node::{ContainerKind, NodeId, NodeKind};
pub use crate::tree::RunTree;

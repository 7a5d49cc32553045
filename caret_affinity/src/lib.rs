// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary affinity engine for a rich text caret.
//!
//! When an insertion point sits exactly between two differently styled runs
//! of text (bold ending, plain text beginning), the next keystroke is
//! ambiguous: it could inherit either side's style. This crate resolves
//! which runs sit to the [left and right] of such a boundary, drives a
//! visual marker offset toward the run the next keystroke will affect, and
//! implements a two-step arrow-key protocol: the first press in a direction
//! only previews the crossing (native cursor movement is suppressed), and a
//! second press in the same direction commits it.
//!
//! The host editing surface is consumed through two narrow seams:
//! [`SelectionProvider`] (the current insertion point and caret geometry)
//! and [`OverlayRenderer`] (the marker's named visual variables). The run
//! tree itself comes from the [`run_tree`] crate.
//!
//! [left and right]: Boundary
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `tracing`: Emit structured trace events from the widget controller.
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

pub use run_tree;

mod affinity;
mod boundary;
mod classify;
mod error;
mod overlay;
mod selection;
mod widget;

pub use crate::affinity::{AffinityState, Direction, KeyDisposition, PressDecision};
pub use crate::boundary::{resolve_boundary, Boundary, InsertionPoint};
pub use crate::classify::{classify, StyleTag, StyleTags};
pub use crate::error::{Error, ErrorKind};
pub use crate::overlay::{Opacity, OverlayRenderer, OverlayVars};
pub use crate::selection::{CaretPosition, SelectionProvider};
pub use crate::widget::{CaretWidget, Key};

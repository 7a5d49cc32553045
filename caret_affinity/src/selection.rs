// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use run_tree::RunTree;

use crate::InsertionPoint;

/// Screen-space coordinates of the native caret, in pixels.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CaretPosition {
    /// Horizontal position of the caret.
    pub x: f64,
    /// Vertical position of the caret.
    pub y: f64,
}

/// The seam to the host editing surface's selection model.
///
/// The engine consumes the host through this trait and never mutates it:
/// the run tree, the current insertion point, and the caret geometry are
/// all read fresh on every key event. Suppressing the native cursor
/// movement — the one write-shaped interaction with the host — is expressed
/// by the [`KeyDisposition`] the press handler returns, so the host applies
/// it in whatever form its event system uses.
///
/// [`KeyDisposition`]: crate::KeyDisposition
pub trait SelectionProvider {
    /// The run tree mirroring the host's styled text.
    fn run_tree(&self) -> &RunTree;

    /// The current insertion point, or `None` when the host has no
    /// collapsed selection. Absence is a normal branch, not an error.
    fn insertion_point(&self) -> Option<InsertionPoint>;

    /// The screen coordinates of the native caret, when available.
    fn caret_position(&self) -> Option<CaretPosition>;

    /// Returns `true` if the host exposes a selection API at all.
    ///
    /// Checked once at widget construction; a `false` here fails
    /// construction with [`ErrorKind::UnsupportedEnvironment`] before
    /// anything is wired up.
    ///
    /// [`ErrorKind::UnsupportedEnvironment`]: crate::ErrorKind::UnsupportedEnvironment
    fn is_supported(&self) -> bool;
}

// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Direction;

/// The binary opacity of the overlay marker.
///
/// The marker is either fully shown or fully hidden; there is no fade. A
/// transparent marker must be visually inert regardless of stale position
/// or affinity values, which the controller guarantees by always applying
/// position before opacity when showing.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum Opacity {
    /// The marker is hidden.
    #[default]
    Transparent,
    /// The marker is shown.
    Opaque,
}

/// The presentation seam for the caret affinity marker.
///
/// Implementations are pure sinks: they bind the named visual variables to
/// whatever the presentation layer uses (CSS custom properties, a scene
/// graph node, a test recorder) and carry no business logic. The marker is
/// acquired by [`mount`] when a widget is constructed and released by
/// [`unmount`] on explicit disposal.
///
/// [`mount`]: OverlayRenderer::mount
/// [`unmount`]: OverlayRenderer::unmount
pub trait OverlayRenderer {
    /// Creates the marker in the presentation layer.
    fn mount(&mut self);

    /// Removes the marker from the presentation layer.
    fn unmount(&mut self);

    /// Moves the marker to the given screen coordinates, in pixels.
    fn apply_position(&mut self, x: f64, y: f64);

    /// Shows or hides the marker.
    fn set_opacity(&mut self, opacity: Opacity);

    /// Sets which side of the boundary the marker favors.
    fn set_affinity_side(&mut self, side: Direction);
}

/// The marker's named visual variables, recorded in memory.
///
/// Doubles as the reference [`OverlayRenderer`] for hosts that bind the
/// variables themselves, and as the renderer used in tests. The default
/// state is hidden.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct OverlayVars {
    /// Horizontal marker position, in pixels.
    pub x: f64,
    /// Vertical marker position, in pixels.
    pub y: f64,
    /// Whether the marker is shown.
    pub opacity: Opacity,
    /// The boundary side the marker currently favors, once set.
    pub side: Option<Direction>,
    /// Whether the marker currently exists in the presentation layer.
    pub mounted: bool,
}

impl OverlayRenderer for OverlayVars {
    fn mount(&mut self) {
        self.mounted = true;
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.opacity = Opacity::Transparent;
    }

    fn apply_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn set_opacity(&mut self, opacity: Opacity) {
        self.opacity = opacity;
    }

    fn set_affinity_side(&mut self, side: Direction) {
        self.side = Some(side);
    }
}

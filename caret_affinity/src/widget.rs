// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    resolve_boundary, AffinityState, Direction, Error, KeyDisposition, Opacity, OverlayRenderer,
    SelectionProvider,
};

/// A key notification forwarded from the host surface.
///
/// Hosts map their platform key events onto this before calling the widget;
/// anything that is not one of the two movement keys collapses to
/// [`Other`] and is ignored by the protocol.
///
/// [`Other`]: Key::Other
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Key {
    /// The left arrow (or equivalent) movement key.
    MoveLeft,
    /// The right arrow (or equivalent) movement key.
    MoveRight,
    /// Any other key.
    Other,
}

impl Key {
    fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            Self::Other => None,
        }
    }
}

/// The widget controller: wires key notifications from one editable surface
/// to the affinity state machine and the overlay marker.
///
/// One widget owns one marker (through its renderer) and one
/// [`AffinityState`]; multiple editable surfaces on a page each get their
/// own widget and stay fully independent. The host forwards every key
/// press to [`handle_press`] *before* its native cursor movement takes
/// effect (honoring the returned [`KeyDisposition`]) and every release to
/// [`handle_release`] *after* any movement that was allowed to proceed.
///
/// The marker is acquired on construction and released only by an explicit
/// [`dispose`]; there is no automatic lifecycle beyond that.
///
/// [`handle_press`]: CaretWidget::handle_press
/// [`handle_release`]: CaretWidget::handle_release
/// [`dispose`]: CaretWidget::dispose
#[derive(Clone, Debug)]
pub struct CaretWidget<R: OverlayRenderer> {
    renderer: R,
    state: AffinityState,
}

impl<R: OverlayRenderer> CaretWidget<R> {
    /// Creates a widget for the surface behind `provider` and mounts the
    /// marker.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::UnsupportedEnvironment`] if the provider
    /// reports no selection support; nothing is mounted in that case.
    ///
    /// [`ErrorKind::UnsupportedEnvironment`]: crate::ErrorKind::UnsupportedEnvironment
    pub fn new<P: SelectionProvider>(provider: &P, mut renderer: R) -> Result<Self, Error> {
        if !provider.is_supported() {
            return Err(Error::unsupported_environment());
        }
        renderer.mount();
        Ok(Self {
            renderer,
            state: AffinityState::new(),
        })
    }

    /// Handles the press phase of a key event.
    ///
    /// Resolves the boundary at the current insertion point and advances
    /// the state machine. Returns whether the host must suppress its
    /// native cursor movement for this event. Non-movement keys and a
    /// missing insertion point pass through untouched (the latter resets
    /// the machine, since no boundary is derivable).
    ///
    /// # Errors
    ///
    /// A [`DetachedNode`] error from the resolver aborts the event; the
    /// affinity state is reset, never left stale, before it propagates.
    ///
    /// [`DetachedNode`]: crate::ErrorKind::DetachedNode
    pub fn handle_press<P: SelectionProvider>(
        &mut self,
        provider: &P,
        key: Key,
    ) -> Result<KeyDisposition, Error> {
        let Some(direction) = key.direction() else {
            return Ok(KeyDisposition::Pass);
        };
        let navigable = match provider.insertion_point() {
            Some(point) => match resolve_boundary(provider.run_tree(), point) {
                Ok(boundary) => boundary.is_navigable(),
                Err(error) => {
                    self.state.reset();
                    return Err(error);
                }
            },
            None => false,
        };
        let decision = self.state.on_press(direction, navigable);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            ?direction,
            navigable,
            disposition = ?decision.disposition,
            "caret press"
        );
        if let Some(side) = decision.side {
            self.renderer.set_affinity_side(side);
        }
        Ok(decision.disposition)
    }

    /// Handles the release phase of a key event.
    ///
    /// Re-resolves the boundary (the native cursor may have moved since the
    /// press) and refreshes the marker: position then full opacity when the
    /// boundary is navigable and caret geometry is available, hidden
    /// otherwise. Non-movement keys are ignored.
    ///
    /// # Errors
    ///
    /// As with [`handle_press`]: a resolver error hides the marker, resets
    /// the affinity state, and propagates.
    ///
    /// [`handle_press`]: CaretWidget::handle_press
    pub fn handle_release<P: SelectionProvider>(
        &mut self,
        provider: &P,
        key: Key,
    ) -> Result<(), Error> {
        if key.direction().is_none() {
            return Ok(());
        }
        let navigable = match provider.insertion_point() {
            Some(point) => match resolve_boundary(provider.run_tree(), point) {
                Ok(boundary) => boundary.is_navigable(),
                Err(error) => {
                    self.state.reset();
                    self.renderer.set_opacity(Opacity::Transparent);
                    return Err(error);
                }
            },
            None => false,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(navigable, "caret release");
        match provider.caret_position() {
            Some(position) if navigable => {
                // Position before opacity, so re-showing the marker never
                // flashes a stale location.
                self.renderer.apply_position(position.x, position.y);
                self.renderer.set_opacity(Opacity::Opaque);
            }
            _ => {
                self.renderer.set_opacity(Opacity::Transparent);
            }
        }
        Ok(())
    }

    /// Releases the marker.
    pub fn dispose(&mut self) {
        self.renderer.unmount();
    }

    /// Borrows the renderer, for presentation layers that bind the visual
    /// variables from it.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The widget's current navigation state.
    pub fn affinity_state(&self) -> AffinityState {
        self.state
    }
}

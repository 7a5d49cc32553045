// Copyright 2026 the Caret Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A horizontal movement direction, which doubles as the affinity side of
/// the overlay marker.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Toward the start of the text.
    Left,
    /// Toward the end of the text.
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn invert(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Whether the native cursor movement for a key press should proceed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeyDisposition {
    /// Suppress the native movement; the press only previewed the crossing.
    Suppress,
    /// Let the native movement happen.
    Pass,
}

/// The outcome of a press-phase step of the state machine.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PressDecision {
    /// Whether to suppress the native cursor movement for this press.
    pub disposition: KeyDisposition,
    /// The affinity side to show on the overlay marker, if the boundary
    /// was navigable.
    ///
    /// On a first (arming) press this is the far side — the marker
    /// anticipates crossing toward the opposite run. On the committing
    /// second press it is the near side, flush with the pressed direction.
    pub side: Option<Direction>,
}

/// Per-widget navigation state for the two-step boundary crossing.
///
/// A press at a navigable boundary arms the machine for its direction; a
/// second press in the same armed direction commits the crossing and lets
/// the native cursor move. Any interruption — a direction change, a
/// non-navigable boundary, a resolver error — fully resets the state, so
/// the pair counter never spans an interruption and repeated navigation
/// stays idempotent.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct AffinityState {
    last_direction: Option<Direction>,
    is_armed: bool,
}

impl AffinityState {
    /// Creates a machine with no direction recorded and nothing armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The direction of the most recent movement press, if any.
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Returns `true` while a first press is waiting for its pair.
    pub fn is_armed(&self) -> bool {
        self.is_armed
    }

    /// Clears the recorded direction and disarms the machine.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advances the machine for a movement press toward `direction`.
    ///
    /// `navigable` is the presence check of the freshly resolved boundary;
    /// the caller resolves it before every press, so stale navigability is
    /// never consulted.
    pub fn on_press(&mut self, direction: Direction, navigable: bool) -> PressDecision {
        if !navigable {
            self.reset();
            return PressDecision {
                disposition: KeyDisposition::Pass,
                side: None,
            };
        }
        if self.is_armed && self.last_direction == Some(direction) {
            // Second press of the pair: commit the crossing.
            self.is_armed = false;
            PressDecision {
                disposition: KeyDisposition::Pass,
                side: Some(direction),
            }
        } else {
            // First press, or a direction change: re-arm from scratch.
            self.reset();
            self.last_direction = Some(direction);
            self.is_armed = true;
            PressDecision {
                disposition: KeyDisposition::Suppress,
                side: Some(direction.invert()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_flips_direction() {
        assert_eq!(Direction::Left.invert(), Direction::Right);
        assert_eq!(Direction::Right.invert(), Direction::Left);
    }

    #[test]
    fn first_press_suppresses_and_shows_far_side() {
        let mut state = AffinityState::new();
        let decision = state.on_press(Direction::Right, true);
        assert_eq!(decision.disposition, KeyDisposition::Suppress);
        assert_eq!(decision.side, Some(Direction::Left));
        assert!(state.is_armed());
        assert_eq!(state.last_direction(), Some(Direction::Right));
    }

    #[test]
    fn second_press_passes_and_shows_near_side() {
        let mut state = AffinityState::new();
        state.on_press(Direction::Right, true);
        let decision = state.on_press(Direction::Right, true);
        assert_eq!(decision.disposition, KeyDisposition::Pass);
        assert_eq!(decision.side, Some(Direction::Right));
        assert!(!state.is_armed());
    }

    #[test]
    fn direction_change_rearms_as_first_press() {
        let mut state = AffinityState::new();
        state.on_press(Direction::Right, true);
        let decision = state.on_press(Direction::Left, true);
        assert_eq!(decision.disposition, KeyDisposition::Suppress);
        assert_eq!(decision.side, Some(Direction::Right));
        assert!(state.is_armed());
        assert_eq!(state.last_direction(), Some(Direction::Left));
    }

    #[test]
    fn third_press_starts_a_new_pair() {
        let mut state = AffinityState::new();
        state.on_press(Direction::Right, true);
        state.on_press(Direction::Right, true);
        // The pair completed; a further press arms again.
        let decision = state.on_press(Direction::Right, true);
        assert_eq!(decision.disposition, KeyDisposition::Suppress);
        assert!(state.is_armed());
    }

    #[test]
    fn non_navigable_press_resets_and_passes() {
        let mut state = AffinityState::new();
        state.on_press(Direction::Right, true);
        let decision = state.on_press(Direction::Right, false);
        assert_eq!(decision.disposition, KeyDisposition::Pass);
        assert_eq!(decision.side, None);
        assert_eq!(state, AffinityState::default());
    }

    #[test]
    fn non_navigable_interruption_breaks_the_pair() {
        let mut state = AffinityState::new();
        state.on_press(Direction::Right, true);
        state.on_press(Direction::Right, false);
        // Back at a navigable boundary, the next press is a first press.
        let decision = state.on_press(Direction::Right, true);
        assert_eq!(decision.disposition, KeyDisposition::Suppress);
    }
}

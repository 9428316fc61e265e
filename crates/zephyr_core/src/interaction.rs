//! Interaction state
//!
//! The host input layer turns pointer and keyboard activity on a control's hit
//! region into [`InteractionEvent`]s. Each control folds those events into an
//! [`InteractionState`] with [`InteractionState::apply`].
//!
//! The reducer does not look at the control's `enabled` flag. Hosts must not
//! deliver events to disabled controls; `zephyr_widgets::ControlRegistry`
//! enforces that at dispatch time.

/// Low-level interaction events for one hit region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionEvent {
    /// Pointer (or activation key) went down on the control
    PressStart,
    /// Press finished inside the control - a completed click
    PressEnd,
    /// Press aborted (pointer left, gesture stolen, ...)
    PressCancel,
    HoverEnter,
    HoverExit,
    FocusGain,
    FocusLose,
}

impl InteractionEvent {
    /// Whether this event terminates a press
    pub fn ends_press(self) -> bool {
        matches!(self, Self::PressEnd | Self::PressCancel)
    }
}

/// Pressed / hovered / focused flags of one control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InteractionState {
    pub pressed: bool,
    pub hovered: bool,
    pub focused: bool,
}

impl InteractionState {
    pub const IDLE: InteractionState = InteractionState {
        pressed: false,
        hovered: false,
        focused: false,
    };

    /// Fold one event into the state, returning whether any flag changed
    ///
    /// Out-of-order events are accepted: `PressEnd` without a preceding
    /// `PressStart` simply leaves `pressed` false.
    pub fn apply(&mut self, event: InteractionEvent) -> bool {
        let before = *self;
        match event {
            InteractionEvent::PressStart => self.pressed = true,
            InteractionEvent::PressEnd | InteractionEvent::PressCancel => self.pressed = false,
            InteractionEvent::HoverEnter => self.hovered = true,
            InteractionEvent::HoverExit => self.hovered = false,
            InteractionEvent::FocusGain => self.focused = true,
            InteractionEvent::FocusLose => self.focused = false,
        }

        let changed = before != *self;
        if changed {
            tracing::trace!("interaction {:?}: {:?} -> {:?}", event, before, self);
        }
        changed
    }

    /// Clear every flag, returning whether any was set
    ///
    /// Used when a control stops receiving events, so no exit event will
    /// arrive to clear them.
    pub fn reset(&mut self) -> bool {
        let changed = *self != Self::IDLE;
        if changed {
            tracing::trace!("interaction reset from {:?}", self);
        }
        *self = Self::IDLE;
        changed
    }

    /// Builder-style variant of [`apply`](Self::apply), handy in tests
    pub fn with(mut self, event: InteractionEvent) -> Self {
        self.apply(event);
        self
    }

    /// Discrete phase of a control with these flags
    ///
    /// `focused` only counts for controls that track focus (text fields).
    pub fn phase(&self, enabled: bool, tracks_focus: bool) -> ControlPhase {
        if !enabled {
            ControlPhase::Disabled
        } else if self.pressed {
            ControlPhase::Pressed
        } else if tracks_focus && self.focused {
            ControlPhase::Focused
        } else if self.hovered {
            ControlPhase::Hovered
        } else {
            ControlPhase::Resting
        }
    }
}

/// Discrete interaction phase, highest precedence first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlPhase {
    Disabled,
    Pressed,
    Focused,
    Hovered,
    #[default]
    Resting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use InteractionEvent::*;

    #[test]
    fn test_press_release_cycle() {
        let mut state = InteractionState::default();

        assert!(state.apply(HoverEnter));
        assert!(state.apply(PressStart));
        assert_eq!(state.phase(true, false), ControlPhase::Pressed);

        assert!(state.apply(PressEnd));
        assert_eq!(state.phase(true, false), ControlPhase::Hovered);

        assert!(state.apply(HoverExit));
        assert_eq!(state, InteractionState::IDLE);
    }

    #[test]
    fn test_release_and_cancel_are_equivalent() {
        let pressed = InteractionState::IDLE.with(PressStart);
        assert_eq!(pressed.with(PressEnd), pressed.with(PressCancel));
    }

    #[test]
    fn test_out_of_order_events_are_idempotent() {
        let mut state = InteractionState::default();
        assert!(!state.apply(PressEnd));
        assert!(!state.apply(PressCancel));
        assert!(!state.apply(HoverExit));
        assert_eq!(state, InteractionState::IDLE);

        state.apply(PressStart);
        assert!(!state.apply(PressStart));
        assert!(state.pressed);
    }

    #[test]
    fn test_focus_only_counts_when_tracked() {
        let state = InteractionState::IDLE.with(FocusGain).with(HoverEnter);
        assert_eq!(state.phase(true, true), ControlPhase::Focused);
        assert_eq!(state.phase(true, false), ControlPhase::Hovered);
    }

    #[test]
    fn test_disabled_outranks_everything() {
        let state = InteractionState::IDLE
            .with(PressStart)
            .with(HoverEnter)
            .with(FocusGain);
        assert_eq!(state.phase(false, true), ControlPhase::Disabled);
    }

    #[test]
    fn test_reset_clears_all_flags() {
        let mut state = InteractionState::IDLE
            .with(PressStart)
            .with(HoverEnter)
            .with(FocusGain);
        assert!(state.reset());
        assert_eq!(state, InteractionState::IDLE);
        assert!(!state.reset());
    }

    #[test]
    fn test_ends_press() {
        assert!(PressEnd.ends_press());
        assert!(PressCancel.ends_press());
        assert!(!PressStart.ends_press());
        assert!(!FocusLose.ends_press());
    }
}

//! Base control trait and types

use std::any::Any;

use zephyr_animation::{AnimationSpec, Easing};
use zephyr_core::{ControlPhase, DrawList, InteractionEvent, InteractionState, Rect};

/// Color transitions of buttons and text fields
pub const COLOR_TRANSITION: AnimationSpec = AnimationSpec::tween(200, Easing::LinearOutSlowIn);

/// The kinds of control in this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Button,
    Switch,
    Checkbox,
    RadioButton,
    TextField,
}

/// Base trait for all controls
///
/// A control owns its interaction state and animators. Its external state
/// (`checked`, `value`, ...) belongs to the caller, who pushes new props after
/// the control reports user intent through its callback.
pub trait Control: Any + Send {
    fn kind(&self) -> ControlKind;

    /// Fold an interaction event into the control, returning whether the
    /// interaction state changed
    fn handle_event(&mut self, event: InteractionEvent) -> bool;

    /// Advance animations by `dt_ms`, returning whether any are still running
    fn tick(&mut self, dt_ms: f32) -> bool;

    fn is_animating(&self) -> bool;

    fn is_enabled(&self) -> bool;

    fn interaction(&self) -> InteractionState;

    /// Discrete phase, for hosts that style around the control
    fn phase(&self) -> ControlPhase;

    /// Emit draw commands for the current rendered values inside `bounds`
    fn draw(&self, bounds: Rect) -> DrawList;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Implements the `Control` plumbing shared by every control type.
///
/// The type must provide inherent `handle_event`, `tick`, `is_animating`,
/// `phase` and `draw` methods plus `props.enabled` and `interaction` fields.
macro_rules! impl_control {
    ($ty:ty, $kind:expr) => {
        impl $crate::control::Control for $ty {
            fn kind(&self) -> $crate::control::ControlKind {
                $kind
            }

            fn handle_event(&mut self, event: zephyr_core::InteractionEvent) -> bool {
                <$ty>::handle_event(self, event)
            }

            fn tick(&mut self, dt_ms: f32) -> bool {
                <$ty>::tick(self, dt_ms)
            }

            fn is_animating(&self) -> bool {
                <$ty>::is_animating(self)
            }

            fn is_enabled(&self) -> bool {
                self.props.enabled
            }

            fn interaction(&self) -> zephyr_core::InteractionState {
                self.interaction
            }

            fn phase(&self) -> zephyr_core::ControlPhase {
                <$ty>::phase(self)
            }

            fn draw(&self, bounds: zephyr_core::Rect) -> zephyr_core::DrawList {
                <$ty>::draw(self, bounds)
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }
        }
    };
}

/// Whether `event` completes a click given the pre-event pressed flag
pub(crate) fn completes_click(was_pressed: bool, event: InteractionEvent) -> bool {
    was_pressed && event == InteractionEvent::PressEnd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_release_after_press_clicks() {
        assert!(completes_click(true, InteractionEvent::PressEnd));
        assert!(!completes_click(true, InteractionEvent::PressCancel));
        assert!(!completes_click(false, InteractionEvent::PressEnd));
        assert!(!completes_click(true, InteractionEvent::HoverExit));
    }
}

//! Button control
//!
//! The Button control provides:
//! - Visual phases: resting, hovered, pressed, disabled
//! - Filled and outline variants
//! - Animated colors and a press "softness" scale
//! - A click callback fired on a completed press

use zephyr_animation::AnimatedValue;
use zephyr_core::{
    Color, ControlPhase, DrawList, InteractionEvent, InteractionState, Rect, TextAlign,
};
use zephyr_theme::ButtonColors;

use crate::control::{completes_click, ControlKind, COLOR_TRANSITION};

/// Content scale while pressed, unless overridden
pub const DEFAULT_SOFTNESS: f32 = 0.98;

/// Outline border width
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Horizontal and vertical label padding
pub const PADDING: (f32, f32) = (15.0, 11.0);

/// Button configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonProps {
    /// Label text
    pub text: String,
    pub enabled: bool,
    /// Transparent fill with a colored border and label
    pub is_outline: bool,
    pub colors: ButtonColors,
    pub corner_radius: f32,
    /// Content scale while pressed, clamped to `0.0..=1.0`
    pub softness: f32,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: String::new(),
            enabled: true,
            is_outline: false,
            colors: ButtonColors::default(),
            corner_radius: 8.0,
            softness: DEFAULT_SOFTNESS,
        }
    }
}

impl ButtonProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn outline(mut self, is_outline: bool) -> Self {
        self.is_outline = is_outline;
        self
    }

    pub fn colors(mut self, colors: ButtonColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn softness(mut self, softness: f32) -> Self {
        self.softness = softness;
        self
    }

    /// Effective press scale
    ///
    /// Out-of-range values are clamped; NaN falls back to the default.
    pub fn press_scale(&self) -> f32 {
        if self.softness.is_nan() {
            DEFAULT_SOFTNESS
        } else {
            self.softness.clamp(0.0, 1.0)
        }
    }
}

/// Target render values of a button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonVisual {
    pub background: Color,
    /// Border color (transparent on the filled variant)
    pub border: Color,
    /// Label color
    pub content: Color,
    pub scale: f32,
}

/// Resolve the target visuals of a button
pub fn resolve(props: &ButtonProps, interaction: &InteractionState) -> ButtonVisual {
    let colors = &props.colors;
    let state_color = match interaction.phase(props.enabled, false) {
        ControlPhase::Disabled => colors.disabled,
        ControlPhase::Pressed => colors.pressed,
        ControlPhase::Hovered => colors.hovered,
        ControlPhase::Focused | ControlPhase::Resting => colors.inactive,
    };

    let scale = if props.enabled && interaction.pressed {
        props.press_scale()
    } else {
        1.0
    };

    if props.is_outline {
        ButtonVisual {
            background: Color::TRANSPARENT,
            border: state_color,
            content: state_color,
            scale,
        }
    } else {
        ButtonVisual {
            background: state_color,
            border: Color::TRANSPARENT,
            content: colors.text,
            scale,
        }
    }
}

/// Button control
pub struct Button {
    props: ButtonProps,
    interaction: InteractionState,
    background: AnimatedValue<Color>,
    border: AnimatedValue<Color>,
    content: AnimatedValue<Color>,
    scale: AnimatedValue<f32>,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl Button {
    pub fn new(props: ButtonProps) -> Self {
        let interaction = InteractionState::default();
        let visual = resolve(&props, &interaction);

        Self {
            props,
            interaction,
            background: AnimatedValue::new(visual.background, COLOR_TRANSITION),
            border: AnimatedValue::new(visual.border, COLOR_TRANSITION),
            content: AnimatedValue::new(visual.content, COLOR_TRANSITION),
            scale: AnimatedValue::new(visual.scale, COLOR_TRANSITION),
            on_click: None,
        }
    }

    /// Set the click callback
    pub fn on_click<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    /// Replace the props and retarget every animator
    pub fn set_props(&mut self, props: ButtonProps) {
        // A disabled control gets no exit events, so drop hover and focus too
        if !props.enabled {
            self.interaction.reset();
        }
        self.props = props;
        self.retarget();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        let props = self.props.clone().enabled(enabled);
        self.set_props(props);
    }

    /// Handle an interaction event
    pub fn handle_event(&mut self, event: InteractionEvent) -> bool {
        let was_pressed = self.interaction.pressed;
        let changed = self.interaction.apply(event);
        if changed {
            self.retarget();
        }

        if self.props.enabled && completes_click(was_pressed, event) {
            tracing::trace!("Button {:?} clicked", self.props.text);
            if let Some(ref mut callback) = self.on_click {
                callback();
            }
        }

        changed
    }

    /// Target visuals for the current props and interaction
    pub fn visual(&self) -> ButtonVisual {
        resolve(&self.props, &self.interaction)
    }

    /// Currently rendered visuals
    pub fn rendered(&self) -> ButtonVisual {
        ButtonVisual {
            background: self.background.value(),
            border: self.border.value(),
            content: self.content.value(),
            scale: self.scale.value(),
        }
    }

    pub fn phase(&self) -> ControlPhase {
        self.interaction.phase(self.props.enabled, false)
    }

    /// Update animations (call each frame)
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let colors =
            self.background.tick(dt_ms) | self.border.tick(dt_ms) | self.content.tick(dt_ms);
        let scale = self.scale.tick(dt_ms);
        colors || scale
    }

    pub fn is_animating(&self) -> bool {
        self.background.is_animating()
            || self.border.is_animating()
            || self.content.is_animating()
            || self.scale.is_animating()
    }

    /// Draw the button filling `bounds`
    pub fn draw(&self, bounds: Rect) -> DrawList {
        let mut list = DrawList::new();
        let radius = self.props.corner_radius;

        list.scaled(self.scale.value(), bounds.center(), |list| {
            list.fill_round_rect(bounds, radius, self.background.value());
            if self.props.is_outline {
                list.stroke_round_rect(bounds, radius, OUTLINE_WIDTH, self.border.value());
            }
            list.text(
                bounds.inset(PADDING.0, PADDING.1),
                self.props.text.as_str(),
                self.content.value(),
                TextAlign::Center,
            );
        });

        list
    }

    fn retarget(&mut self) {
        let visual = self.visual();
        self.background.update(visual.background);
        self.border.update(visual.border);
        self.content.update(visual.content);
        self.scale.update(visual.scale);
    }
}

impl_control!(Button, ControlKind::Button);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use zephyr_core::DrawCommand;
    use InteractionEvent::*;

    fn settle(button: &mut Button) {
        while button.tick(16.0) {}
    }

    fn click_counter(props: ButtonProps) -> (Button, Arc<AtomicUsize>) {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let button = Button::new(props).on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (button, clicks)
    }

    #[test]
    fn test_resolve_chain() {
        let props = ButtonProps::new("Ok");
        let colors = props.colors;
        let idle = InteractionState::IDLE;

        assert_eq!(resolve(&props, &idle).background, colors.inactive);
        assert_eq!(resolve(&props, &idle.with(HoverEnter)).background, colors.hovered);
        assert_eq!(
            resolve(&props, &idle.with(HoverEnter).with(PressStart)).background,
            colors.pressed
        );
        assert_eq!(
            resolve(&props.clone().enabled(false), &idle.with(PressStart)).background,
            colors.disabled
        );
    }

    #[test]
    fn test_disabled_ignores_interaction() {
        let props = ButtonProps::new("Ok").enabled(false);
        let states = [
            InteractionState::IDLE,
            InteractionState::IDLE.with(HoverEnter),
            InteractionState::IDLE.with(PressStart).with(HoverEnter),
        ];
        let expected = resolve(&props, &InteractionState::IDLE);
        for state in states {
            assert_eq!(resolve(&props, &state), expected);
        }
        assert_eq!(expected.scale, 1.0);
    }

    #[test]
    fn test_outline_background_stays_transparent() {
        let props = ButtonProps::new("Ok").outline(true);
        for state in [
            InteractionState::IDLE,
            InteractionState::IDLE.with(HoverEnter),
            InteractionState::IDLE.with(PressStart),
        ] {
            let visual = resolve(&props, &state);
            assert_eq!(visual.background.a, 0.0);
            assert_eq!(visual.border, visual.content);
        }

        let pressed = resolve(&props, &InteractionState::IDLE.with(PressStart));
        assert_eq!(pressed.border, props.colors.pressed);
    }

    #[test]
    fn test_softness_is_clamped() {
        assert_eq!(ButtonProps::default().softness(1.5).press_scale(), 1.0);
        assert_eq!(ButtonProps::default().softness(-2.0).press_scale(), 0.0);
        assert_eq!(
            ButtonProps::default().softness(f32::NAN).press_scale(),
            DEFAULT_SOFTNESS
        );
    }

    #[test]
    fn test_click_fires_once_per_completed_press() {
        let (mut button, clicks) = click_counter(ButtonProps::new("Ok"));

        button.handle_event(HoverEnter);
        button.handle_event(PressStart);
        button.handle_event(PressEnd);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        // Release without a press is not a click
        button.handle_event(PressEnd);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        button.handle_event(PressStart);
        button.handle_event(PressCancel);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabling_mid_press_cancels() {
        let (mut button, clicks) = click_counter(ButtonProps::new("Ok"));
        button.handle_event(PressStart);
        button.set_enabled(false);
        assert!(!button.interaction.pressed);

        button.set_enabled(true);
        button.handle_event(PressEnd);
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_press_scale_round_trip() {
        let mut button = Button::new(ButtonProps::new("Ok"));
        button.handle_event(PressStart);
        settle(&mut button);
        assert_eq!(button.rendered().scale, DEFAULT_SOFTNESS);

        button.handle_event(PressEnd);
        settle(&mut button);
        assert_eq!(button.rendered().scale, 1.0);
        assert!(!button.is_animating());
    }

    #[test]
    fn test_draw_filled() {
        let button = Button::new(ButtonProps::new("Ok"));
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        let list = button.draw(bounds);

        assert_eq!(list.len(), 2);
        match &list.commands()[1] {
            DrawCommand::Text {
                bounds: text_bounds,
                text,
                color,
                align,
            } => {
                assert_eq!(text, "Ok");
                assert_eq!(*color, Color::WHITE);
                assert_eq!(*align, TextAlign::Center);
                assert_eq!(*text_bounds, Rect::new(15.0, 11.0, 70.0, 18.0));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_pressed_outline_is_scaled() {
        let mut button = Button::new(ButtonProps::new("Ok").outline(true));
        button.handle_event(PressStart);
        settle(&mut button);

        let list = button.draw(Rect::new(0.0, 0.0, 100.0, 40.0));
        let commands = list.commands();
        assert!(matches!(
            commands[0],
            DrawCommand::PushScale { scale, .. } if scale == DEFAULT_SOFTNESS
        ));
        assert!(matches!(
            commands[2],
            DrawCommand::StrokeRoundRect { width, .. } if width == OUTLINE_WIDTH
        ));
        assert!(matches!(commands.last(), Some(DrawCommand::PopTransform)));
    }
}

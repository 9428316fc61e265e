//! Checkbox control
//!
//! A rounded box with a checkmark. The filled variant fades its box fill in
//! with the checkmark; the outline variant only ever draws the border.

use zephyr_animation::{AnimatedValue, AnimationSpec, Easing};
use zephyr_core::{
    Color, ControlPhase, DrawList, IconKind, InteractionEvent, InteractionState, Rect, Size,
};
use zephyr_theme::CheckboxColors;

use crate::control::{completes_click, ControlKind};

const STROKE_RATIO: f32 = 0.08;
const CHECKMARK_RATIO: f32 = 0.5;

/// Checkbox configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckboxProps {
    pub checked: bool,
    pub enabled: bool,
    pub is_outline: bool,
    /// Side of the square box
    pub size: f32,
    pub colors: CheckboxColors,
    pub corner_radius: f32,
    /// Fill and checkmark fade
    pub animation: AnimationSpec,
}

impl Default for CheckboxProps {
    fn default() -> Self {
        Self {
            checked: false,
            enabled: true,
            is_outline: false,
            size: 24.0,
            colors: CheckboxColors::default(),
            corner_radius: 4.0,
            animation: AnimationSpec::tween(200, Easing::FastOutSlowIn),
        }
    }
}

impl CheckboxProps {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            ..Default::default()
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn outline(mut self, is_outline: bool) -> Self {
        self.is_outline = is_outline;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn colors(mut self, colors: CheckboxColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }
}

/// Target render values of a checkbox
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckboxVisual {
    /// Checkmark opacity, 1.0 when checked
    pub check_alpha: f32,
    /// Border color, and fill color on the filled variant
    pub box_color: Color,
    pub checkmark_tint: Color,
}

pub fn resolve(props: &CheckboxProps, _interaction: &InteractionState) -> CheckboxVisual {
    let colors = &props.colors;
    let box_color = if props.enabled {
        colors.box_color
    } else {
        colors.disabled
    };
    let checkmark_tint = match (props.is_outline, props.enabled) {
        (true, false) => colors.disabled,
        (true, true) => colors.box_color,
        (false, _) => colors.checkmark,
    };

    CheckboxVisual {
        check_alpha: if props.checked { 1.0 } else { 0.0 },
        box_color,
        checkmark_tint,
    }
}

/// Checkbox control
pub struct Checkbox {
    props: CheckboxProps,
    interaction: InteractionState,
    check_alpha: AnimatedValue<f32>,
    box_color: AnimatedValue<Color>,
    checkmark_tint: AnimatedValue<Color>,
    on_checked_change: Option<Box<dyn FnMut(bool) + Send>>,
}

impl Checkbox {
    pub fn new(props: CheckboxProps) -> Self {
        let interaction = InteractionState::default();
        let visual = resolve(&props, &interaction);

        Self {
            props,
            interaction,
            check_alpha: AnimatedValue::new(visual.check_alpha, props.animation),
            box_color: AnimatedValue::new(visual.box_color, props.animation),
            checkmark_tint: AnimatedValue::new(visual.checkmark_tint, props.animation),
            on_checked_change: None,
        }
    }

    /// Set the callback receiving the requested `checked` value
    pub fn on_checked_change<F: FnMut(bool) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_checked_change = Some(Box::new(callback));
        self
    }

    pub fn props(&self) -> &CheckboxProps {
        &self.props
    }

    pub fn set_props(&mut self, props: CheckboxProps) {
        // A disabled control gets no exit events, so drop hover and focus too
        if !props.enabled {
            self.interaction.reset();
        }
        self.props = props;
        self.check_alpha.set_spec(props.animation);
        self.box_color.set_spec(props.animation);
        self.checkmark_tint.set_spec(props.animation);
        self.retarget();
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.set_props(self.props.checked(checked));
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.set_props(self.props.enabled(enabled));
    }

    pub fn handle_event(&mut self, event: InteractionEvent) -> bool {
        let was_pressed = self.interaction.pressed;
        let changed = self.interaction.apply(event);
        if changed {
            self.retarget();
        }

        if self.props.enabled && completes_click(was_pressed, event) {
            let requested = !self.props.checked;
            tracing::trace!("Checkbox clicked, requesting checked={}", requested);
            if let Some(ref mut callback) = self.on_checked_change {
                callback(requested);
            }
        }

        changed
    }

    pub fn visual(&self) -> CheckboxVisual {
        resolve(&self.props, &self.interaction)
    }

    pub fn rendered(&self) -> CheckboxVisual {
        CheckboxVisual {
            check_alpha: self.check_alpha.value(),
            box_color: self.box_color.value(),
            checkmark_tint: self.checkmark_tint.value(),
        }
    }

    /// Alpha of the box fill (always 0 on the outline variant)
    pub fn fill_alpha(&self) -> f32 {
        if self.props.is_outline {
            0.0
        } else {
            self.check_alpha.value()
        }
    }

    pub fn phase(&self) -> ControlPhase {
        self.interaction.phase(self.props.enabled, false)
    }

    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.check_alpha.tick(dt_ms) | self.box_color.tick(dt_ms) | self.checkmark_tint.tick(dt_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.check_alpha.is_animating()
            || self.box_color.is_animating()
            || self.checkmark_tint.is_animating()
    }

    /// Draw the box at the origin of `bounds`, sized by its props
    pub fn draw(&self, bounds: Rect) -> DrawList {
        let size = self.props.size;
        let rect = bounds.with_size(Size::splat(size));
        let radius = self.props.corner_radius;
        let box_color = self.box_color.value();

        let mut list = DrawList::new();
        list.fill_round_rect(rect, radius, box_color.fade(self.fill_alpha()));
        list.stroke_round_rect(rect, radius, size * STROKE_RATIO, box_color);

        let alpha = self.check_alpha.value();
        if alpha > 0.0 {
            list.icon(
                IconKind::Checkmark,
                Rect::centered_at(rect.center(), Size::splat(size * CHECKMARK_RATIO)),
                self.checkmark_tint.value(),
                alpha,
            );
        }
        list
    }

    fn retarget(&mut self) {
        let visual = self.visual();
        self.check_alpha.update(visual.check_alpha);
        self.box_color.update(visual.box_color);
        self.checkmark_tint.update(visual.checkmark_tint);
    }
}

impl_control!(Checkbox, ControlKind::Checkbox);

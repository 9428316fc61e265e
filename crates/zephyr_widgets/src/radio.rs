//! Radio button control
//!
//! The outline variant keeps a thin ring and grows an inner dot when
//! selected. The fill variant thickens the ring until it covers the whole
//! circle.

use zephyr_animation::{AnimatedValue, AnimationSpec, Easing};
use zephyr_core::{Color, ControlPhase, DrawList, InteractionEvent, InteractionState, Rect, Size};
use zephyr_theme::RadioColors;

use crate::control::{completes_click, ControlKind};

/// Resting ring width as a fraction of the diameter
const RING_RATIO: f32 = 0.15;

/// Radio button configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadioProps {
    pub selected: bool,
    pub enabled: bool,
    pub is_outline: bool,
    /// Diameter
    pub size: f32,
    pub colors: RadioColors,
    /// Ring and dot transitions
    pub animation: AnimationSpec,
}

impl Default for RadioProps {
    fn default() -> Self {
        Self {
            selected: false,
            enabled: true,
            is_outline: true,
            size: 24.0,
            colors: RadioColors::default(),
            animation: AnimationSpec::tween(100, Easing::EaseOut),
        }
    }
}

impl RadioProps {
    pub fn new(selected: bool) -> Self {
        Self {
            selected,
            ..Default::default()
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
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

    pub fn colors(mut self, colors: RadioColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }
}

/// Target render values of a radio button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadioVisual {
    pub color: Color,
    /// Ring thickness, measured inward from the outer edge
    pub ring_width: f32,
    /// Inner dot radius (outline variant only)
    pub dot_radius: f32,
}

pub fn resolve(props: &RadioProps, _interaction: &InteractionState) -> RadioVisual {
    let color = if props.enabled {
        props.colors.color
    } else {
        props.colors.disabled
    };
    let resting_ring = props.size * RING_RATIO;

    if props.is_outline {
        RadioVisual {
            color,
            ring_width: resting_ring,
            dot_radius: if props.selected { props.size / 4.0 } else { 0.0 },
        }
    } else {
        RadioVisual {
            color,
            ring_width: if props.selected {
                props.size / 2.0
            } else {
                resting_ring
            },
            dot_radius: 0.0,
        }
    }
}

/// Radio button control
pub struct RadioButton {
    props: RadioProps,
    interaction: InteractionState,
    color: AnimatedValue<Color>,
    ring_width: AnimatedValue<f32>,
    dot_radius: AnimatedValue<f32>,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl RadioButton {
    pub fn new(props: RadioProps) -> Self {
        let interaction = InteractionState::default();
        let visual = resolve(&props, &interaction);

        Self {
            props,
            interaction,
            color: AnimatedValue::new(visual.color, props.animation),
            ring_width: AnimatedValue::new(visual.ring_width, props.animation),
            dot_radius: AnimatedValue::new(visual.dot_radius, props.animation),
            on_click: None,
        }
    }

    /// Set the click callback; the caller decides what selection means
    pub fn on_click<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn props(&self) -> &RadioProps {
        &self.props
    }

    pub fn set_props(&mut self, props: RadioProps) {
        // A disabled control gets no exit events, so drop hover and focus too
        if !props.enabled {
            self.interaction.reset();
        }
        self.props = props;
        self.color.set_spec(props.animation);
        self.ring_width.set_spec(props.animation);
        self.dot_radius.set_spec(props.animation);
        self.retarget();
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.set_props(self.props.selected(selected));
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
            tracing::trace!("RadioButton clicked (selected={})", self.props.selected);
            if let Some(ref mut callback) = self.on_click {
                callback();
            }
        }

        changed
    }

    pub fn visual(&self) -> RadioVisual {
        resolve(&self.props, &self.interaction)
    }

    pub fn rendered(&self) -> RadioVisual {
        RadioVisual {
            color: self.color.value(),
            ring_width: self.ring_width.value(),
            dot_radius: self.dot_radius.value(),
        }
    }

    pub fn phase(&self) -> ControlPhase {
        self.interaction.phase(self.props.enabled, false)
    }

    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.color.tick(dt_ms) | self.ring_width.tick(dt_ms) | self.dot_radius.tick(dt_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.color.is_animating()
            || self.ring_width.is_animating()
            || self.dot_radius.is_animating()
    }

    /// Draw the circle at the origin of `bounds`, sized by its props
    pub fn draw(&self, bounds: Rect) -> DrawList {
        let rect = bounds.with_size(Size::splat(self.props.size));
        let center = rect.center();
        let outer = self.props.size / 2.0;
        let color = self.color.value();
        let ring = self.ring_width.value().min(outer);

        let mut list = DrawList::new();
        // Stroke is centered on its path, so pull the path in by half the width
        list.stroke_circle(center, outer - ring / 2.0, ring, color);

        let dot = self.dot_radius.value();
        if dot > 0.0 {
            list.fill_circle(center, dot, color);
        }
        list
    }

    fn retarget(&mut self) {
        let visual = self.visual();
        self.color.update(visual.color);
        self.ring_width.update(visual.ring_width);
        self.dot_radius.update(visual.dot_radius);
    }
}

impl_control!(RadioButton, ControlKind::RadioButton);

//! Switch control
//!
//! A pill-shaped track with a sliding thumb. The thumb position is a 0..1
//! fraction animated between the two ends of the track.

use zephyr_animation::{AnimatedValue, AnimationSpec, Easing};
use zephyr_core::{
    Color, ControlPhase, DrawList, InteractionEvent, InteractionState, Point, Rect, Size,
};
use zephyr_theme::SwitchColors;

use crate::control::{completes_click, ControlKind};

/// Thumb diameter as a fraction of the track height
const THUMB_RATIO: f32 = 0.83;

/// Gap between the thumb and the track ends, in thumb radii
const THUMB_INSET: f32 = 1.25;

/// Switch configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchProps {
    pub checked: bool,
    pub enabled: bool,
    pub width: f32,
    pub height: f32,
    pub colors: SwitchColors,
    /// Thumb travel and color transitions
    pub animation: AnimationSpec,
}

impl Default for SwitchProps {
    fn default() -> Self {
        Self {
            checked: false,
            enabled: true,
            width: 48.0,
            height: 24.0,
            colors: SwitchColors::default(),
            animation: AnimationSpec::tween(200, Easing::FastOutSlowIn),
        }
    }
}

impl SwitchProps {
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

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn colors(mut self, colors: SwitchColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }
}

/// Target render values of a switch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchVisual {
    /// 0.0 at the start of the track, 1.0 at the end
    pub position: f32,
    pub track: Color,
    pub thumb: Color,
}

pub fn resolve(props: &SwitchProps, _interaction: &InteractionState) -> SwitchVisual {
    let colors = &props.colors;
    let track = if !props.enabled {
        colors.disabled_track
    } else if props.checked {
        colors.checked_track
    } else {
        colors.track
    };
    let thumb = if props.enabled {
        colors.thumb
    } else {
        colors.disabled_thumb
    };

    SwitchVisual {
        position: if props.checked { 1.0 } else { 0.0 },
        track,
        thumb,
    }
}

/// Thumb geometry for a switch of `size`
///
/// Returns the thumb radius and its center x at either end of the track.
pub fn thumb_travel(size: Size) -> (f32, f32, f32) {
    let radius = size.height * THUMB_RATIO / 2.0;
    let start = radius * THUMB_INSET;
    let end = size.width - radius * THUMB_INSET;
    (radius, start, end)
}

/// Switch control
pub struct Switch {
    props: SwitchProps,
    interaction: InteractionState,
    position: AnimatedValue<f32>,
    track: AnimatedValue<Color>,
    thumb: AnimatedValue<Color>,
    on_checked_change: Option<Box<dyn FnMut(bool) + Send>>,
}

impl Switch {
    pub fn new(props: SwitchProps) -> Self {
        let interaction = InteractionState::default();
        let visual = resolve(&props, &interaction);

        Self {
            props,
            interaction,
            position: AnimatedValue::new(visual.position, props.animation),
            track: AnimatedValue::new(visual.track, props.animation),
            thumb: AnimatedValue::new(visual.thumb, props.animation),
            on_checked_change: None,
        }
    }

    /// Set the callback receiving the requested `checked` value
    pub fn on_checked_change<F: FnMut(bool) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_checked_change = Some(Box::new(callback));
        self
    }

    pub fn props(&self) -> &SwitchProps {
        &self.props
    }

    pub fn set_props(&mut self, props: SwitchProps) {
        // A disabled control gets no exit events, so drop hover and focus too
        if !props.enabled {
            self.interaction.reset();
        }
        self.props = props;
        self.position.set_spec(props.animation);
        self.track.set_spec(props.animation);
        self.thumb.set_spec(props.animation);
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
            tracing::trace!("Switch toggled, requesting checked={}", requested);
            if let Some(ref mut callback) = self.on_checked_change {
                callback(requested);
            }
        }

        changed
    }

    pub fn visual(&self) -> SwitchVisual {
        resolve(&self.props, &self.interaction)
    }

    pub fn rendered(&self) -> SwitchVisual {
        SwitchVisual {
            position: self.position.value(),
            track: self.track.value(),
            thumb: self.thumb.value(),
        }
    }

    pub fn phase(&self) -> ControlPhase {
        self.interaction.phase(self.props.enabled, false)
    }

    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.position.tick(dt_ms) | self.track.tick(dt_ms) | self.thumb.tick(dt_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating() || self.track.is_animating() || self.thumb.is_animating()
    }

    /// Draw the switch at the origin of `bounds`, sized by its props
    pub fn draw(&self, bounds: Rect) -> DrawList {
        let size = Size::new(self.props.width, self.props.height);
        let track = bounds.with_size(size);
        let (radius, start, end) = thumb_travel(size);
        let x = start + (end - start) * self.position.value();

        let mut list = DrawList::new();
        list.fill_round_rect(track, size.height / 2.0, self.track.value());
        list.fill_circle(
            Point::new(track.x() + x, track.y() + size.height / 2.0),
            radius,
            self.thumb.value(),
        );
        list
    }

    fn retarget(&mut self) {
        let visual = self.visual();
        self.position.update(visual.position);
        self.track.update(visual.track);
        self.thumb.update(visual.thumb);
    }
}

impl_control!(Switch, ControlKind::Switch);

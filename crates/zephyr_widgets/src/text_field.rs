//! Text field control
//!
//! Draws the field chrome (background, border, value or placeholder) and
//! animates its four colors. Text editing itself belongs to the host: it
//! forwards proposed values through [`TextField::input`], and the caller
//! decides whether to push them back as the new `value`.

use zephyr_animation::AnimatedValue;
use zephyr_core::{
    Color, ControlPhase, DrawList, InteractionEvent, InteractionState, Rect, TextAlign,
};
use zephyr_theme::{FieldColors, FieldTone, SelectionColors, TextFieldColors};

use crate::control::{ControlKind, COLOR_TRANSITION};

pub const BORDER_WIDTH: f32 = 4.0;

/// Horizontal and vertical text padding
pub const PADDING: (f32, f32) = (10.0, 13.5);

/// Text field configuration
#[derive(Clone, Debug, PartialEq)]
pub struct TextFieldProps {
    pub value: String,
    pub enabled: bool,
    pub read_only: bool,
    pub is_error: bool,
    /// Shown while `value` is empty
    pub placeholder: Option<String>,
    pub colors: TextFieldColors,
    pub corner_radius: f32,
}

impl Default for TextFieldProps {
    fn default() -> Self {
        Self {
            value: String::new(),
            enabled: true,
            read_only: false,
            is_error: false,
            placeholder: None,
            colors: TextFieldColors::default(),
            corner_radius: 8.0,
        }
    }
}

impl TextFieldProps {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn colors(mut self, colors: TextFieldColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Whether host edits are forwarded to the change callback
    pub fn is_editable(&self) -> bool {
        self.enabled && !self.read_only
    }
}

/// Target render values of a text field
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextFieldVisual {
    pub tone: FieldTone,
    pub colors: FieldColors,
    pub cursor: Color,
    pub selection: SelectionColors,
}

/// Column of the color table for the given state
///
/// Precedence: disabled, error, focused, hovered, then resting. Pressing
/// has no visual effect on a text field.
pub fn tone(props: &TextFieldProps, interaction: &InteractionState) -> FieldTone {
    if !props.enabled {
        FieldTone::Disabled
    } else if props.is_error {
        FieldTone::Error
    } else if interaction.focused {
        FieldTone::Focused
    } else if interaction.hovered {
        FieldTone::Hovered
    } else {
        FieldTone::Unfocused
    }
}

pub fn resolve(props: &TextFieldProps, interaction: &InteractionState) -> TextFieldVisual {
    let tone = tone(props, interaction);
    TextFieldVisual {
        tone,
        colors: props.colors.tone(tone),
        cursor: props.colors.cursor(props.is_error),
        selection: props.colors.selection(props.is_error),
    }
}

/// Text field control
pub struct TextField {
    props: TextFieldProps,
    interaction: InteractionState,
    text: AnimatedValue<Color>,
    background: AnimatedValue<Color>,
    border: AnimatedValue<Color>,
    placeholder: AnimatedValue<Color>,
    on_value_change: Option<Box<dyn FnMut(String) + Send>>,
}

impl TextField {
    pub fn new(props: TextFieldProps) -> Self {
        let interaction = InteractionState::default();
        let colors = resolve(&props, &interaction).colors;

        Self {
            props,
            interaction,
            text: AnimatedValue::new(colors.text, COLOR_TRANSITION),
            background: AnimatedValue::new(colors.background, COLOR_TRANSITION),
            border: AnimatedValue::new(colors.border, COLOR_TRANSITION),
            placeholder: AnimatedValue::new(colors.placeholder, COLOR_TRANSITION),
            on_value_change: None,
        }
    }

    /// Set the callback receiving proposed values
    pub fn on_value_change<F: FnMut(String) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_value_change = Some(Box::new(callback));
        self
    }

    pub fn props(&self) -> &TextFieldProps {
        &self.props
    }

    pub fn set_props(&mut self, props: TextFieldProps) {
        // A disabled control gets no exit events, so drop hover and focus too
        if !props.enabled {
            self.interaction.reset();
        }
        self.props = props;
        self.retarget();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.props.value = value.into();
    }

    pub fn set_error(&mut self, is_error: bool) {
        if self.props.is_error != is_error {
            self.props.is_error = is_error;
            self.retarget();
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        let props = self.props.clone().enabled(enabled);
        self.set_props(props);
    }

    pub fn handle_event(&mut self, event: InteractionEvent) -> bool {
        let changed = self.interaction.apply(event);
        if changed {
            self.retarget();
        }
        changed
    }

    /// Forward a value proposed by the host's text editing
    ///
    /// Returns whether the callback was invoked. Disabled and read-only
    /// fields drop the edit.
    pub fn input(&mut self, proposed: impl Into<String>) -> bool {
        if !self.props.is_editable() {
            tracing::trace!("TextField edit dropped (read-only or disabled)");
            return false;
        }
        let proposed = proposed.into();
        if proposed == self.props.value {
            return false;
        }
        match self.on_value_change {
            Some(ref mut callback) => {
                callback(proposed);
                true
            }
            None => false,
        }
    }

    pub fn visual(&self) -> TextFieldVisual {
        resolve(&self.props, &self.interaction)
    }

    pub fn rendered(&self) -> FieldColors {
        FieldColors {
            text: self.text.value(),
            background: self.background.value(),
            border: self.border.value(),
            placeholder: self.placeholder.value(),
        }
    }

    /// Whether the placeholder is drawn instead of the value
    pub fn shows_placeholder(&self) -> bool {
        self.props.value.is_empty() && self.props.placeholder.is_some()
    }

    /// Pressing has no visual effect here, so it never shows as a phase
    pub fn phase(&self) -> ControlPhase {
        let interaction = InteractionState {
            pressed: false,
            ..self.interaction
        };
        interaction.phase(self.props.enabled, true)
    }

    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.text.tick(dt_ms)
            | self.background.tick(dt_ms)
            | self.border.tick(dt_ms)
            | self.placeholder.tick(dt_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.text.is_animating()
            || self.background.is_animating()
            || self.border.is_animating()
            || self.placeholder.is_animating()
    }

    /// Draw the field filling `bounds`
    pub fn draw(&self, bounds: Rect) -> DrawList {
        let radius = self.props.corner_radius;
        let content = bounds.inset(PADDING.0, PADDING.1);

        let mut list = DrawList::new();
        list.fill_round_rect(bounds, radius, self.background.value());
        list.stroke_round_rect(bounds, radius, BORDER_WIDTH, self.border.value());

        match self.props.placeholder {
            Some(ref placeholder) if self.props.value.is_empty() => {
                list.text(
                    content,
                    placeholder.as_str(),
                    self.placeholder.value(),
                    TextAlign::Start,
                );
            }
            _ => {
                list.text(
                    content,
                    self.props.value.as_str(),
                    self.text.value(),
                    TextAlign::Start,
                );
            }
        }
        list
    }

    fn retarget(&mut self) {
        let colors = self.visual().colors;
        self.text.update(colors.text);
        self.background.update(colors.background);
        self.border.update(colors.border);
        self.placeholder.update(colors.placeholder);
    }
}

impl_control!(TextField, ControlKind::TextField);

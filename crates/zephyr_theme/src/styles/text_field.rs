use zephyr_core::Color;

use crate::tokens::Palette;

/// Default text color for a resting or focused field
const INPUT_TEXT: u32 = 0xFF424242;

const PLACEHOLDER_ALPHA: f32 = 0.4;
const DISABLED_PLACEHOLDER_ALPHA: f32 = 0.65;
const SELECTION_ALPHA: f32 = 0.4;

/// Which column of the text field table applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldTone {
    Hovered,
    Focused,
    Unfocused,
    Disabled,
    Error,
}

/// The four colors a text field animates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldColors {
    pub text: Color,
    pub background: Color,
    pub border: Color,
    pub placeholder: Color,
}

/// Text selection colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionColors {
    pub handle: Color,
    pub background: Color,
}

/// Text field color table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextFieldColors {
    pub hovered_text: Color,
    pub focused_text: Color,
    pub unfocused_text: Color,
    pub disabled_text: Color,
    pub error_text: Color,

    pub hovered_background: Color,
    pub focused_background: Color,
    pub unfocused_background: Color,
    pub disabled_background: Color,
    pub error_background: Color,

    pub hovered_border: Color,
    pub focused_border: Color,
    pub unfocused_border: Color,
    pub disabled_border: Color,
    pub error_border: Color,

    pub hovered_placeholder: Color,
    pub focused_placeholder: Color,
    pub unfocused_placeholder: Color,
    pub disabled_placeholder: Color,
    pub error_placeholder: Color,

    pub cursor: Color,
    pub error_cursor: Color,

    pub selection_handle: Color,
    pub selection_background: Color,
    pub error_selection_handle: Color,
    pub error_selection_background: Color,
}

impl TextFieldColors {
    pub fn from_palette(palette: &Palette) -> Self {
        let input_text = Color::from_argb(INPUT_TEXT);
        Self {
            hovered_text: palette.tertiary_one,
            focused_text: input_text,
            unfocused_text: input_text,
            disabled_text: palette.disabled,
            error_text: palette.error,

            hovered_background: Color::WHITE,
            focused_background: Color::WHITE,
            unfocused_background: Color::WHITE,
            disabled_background: palette.disabled_background,
            error_background: Color::WHITE,

            hovered_border: palette.tertiary_one,
            focused_border: palette.primary,
            unfocused_border: palette.tertiary_two,
            disabled_border: palette.disabled,
            error_border: palette.error,

            hovered_placeholder: palette.tertiary_one.with_alpha(PLACEHOLDER_ALPHA),
            focused_placeholder: palette.primary.with_alpha(PLACEHOLDER_ALPHA),
            unfocused_placeholder: palette.tertiary_two.with_alpha(PLACEHOLDER_ALPHA),
            disabled_placeholder: palette.disabled.with_alpha(DISABLED_PLACEHOLDER_ALPHA),
            error_placeholder: palette.error.with_alpha(PLACEHOLDER_ALPHA),

            cursor: palette.primary,
            error_cursor: palette.error,

            selection_handle: palette.primary,
            selection_background: palette.primary.with_alpha(SELECTION_ALPHA),
            error_selection_handle: palette.error,
            error_selection_background: palette.error.with_alpha(SELECTION_ALPHA),
        }
    }

    /// The text, background, border and placeholder colors for `tone`
    pub fn tone(&self, tone: FieldTone) -> FieldColors {
        match tone {
            FieldTone::Hovered => FieldColors {
                text: self.hovered_text,
                background: self.hovered_background,
                border: self.hovered_border,
                placeholder: self.hovered_placeholder,
            },
            FieldTone::Focused => FieldColors {
                text: self.focused_text,
                background: self.focused_background,
                border: self.focused_border,
                placeholder: self.focused_placeholder,
            },
            FieldTone::Unfocused => FieldColors {
                text: self.unfocused_text,
                background: self.unfocused_background,
                border: self.unfocused_border,
                placeholder: self.unfocused_placeholder,
            },
            FieldTone::Disabled => FieldColors {
                text: self.disabled_text,
                background: self.disabled_background,
                border: self.disabled_border,
                placeholder: self.disabled_placeholder,
            },
            FieldTone::Error => FieldColors {
                text: self.error_text,
                background: self.error_background,
                border: self.error_border,
                placeholder: self.error_placeholder,
            },
        }
    }

    pub fn cursor(&self, is_error: bool) -> Color {
        if is_error {
            self.error_cursor
        } else {
            self.cursor
        }
    }

    pub fn selection(&self, is_error: bool) -> SelectionColors {
        if is_error {
            SelectionColors {
                handle: self.error_selection_handle,
                background: self.error_selection_background,
            }
        } else {
            SelectionColors {
                handle: self.selection_handle,
                background: self.selection_background,
            }
        }
    }
}

impl Default for TextFieldColors {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

color_overrides! {
    TextFieldColorsOverride for TextFieldColors {
        hovered_text,
        focused_text,
        unfocused_text,
        disabled_text,
        error_text,
        hovered_background,
        focused_background,
        unfocused_background,
        disabled_background,
        error_background,
        hovered_border,
        focused_border,
        unfocused_border,
        disabled_border,
        error_border,
        hovered_placeholder,
        focused_placeholder,
        unfocused_placeholder,
        disabled_placeholder,
        error_placeholder,
        cursor,
        error_cursor,
        selection_handle,
        selection_background,
        error_selection_handle,
        error_selection_background,
    }
}

use zephyr_core::Color;

use crate::tokens::Palette;

/// Checkbox color table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckboxColors {
    /// Checkmark tint on the filled variant
    pub checkmark: Color,
    /// Box fill and border
    pub box_color: Color,
    pub disabled: Color,
}

impl CheckboxColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            checkmark: Color::WHITE,
            box_color: palette.primary,
            disabled: palette.disabled,
        }
    }
}

impl Default for CheckboxColors {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

color_overrides! {
    CheckboxColorsOverride for CheckboxColors {
        checkmark,
        box_color,
        disabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_palette() {
        let palette = Palette {
            primary: Color::BLACK,
            ..Default::default()
        };
        let colors = CheckboxColors::from_palette(&palette);
        assert_eq!(colors.box_color, Color::BLACK);
        assert_eq!(colors.checkmark, Color::WHITE);
    }
}

use zephyr_core::Color;

use crate::tokens::Palette;

/// Radio button color table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadioColors {
    pub color: Color,
    pub disabled: Color,
}

impl RadioColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            color: palette.primary,
            disabled: palette.disabled,
        }
    }
}

impl Default for RadioColors {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

color_overrides! {
    RadioColorsOverride for RadioColors {
        color,
        disabled,
    }
}

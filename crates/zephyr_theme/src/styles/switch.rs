use zephyr_core::Color;

use crate::tokens::Palette;

const DISABLED_TRACK: u32 = 0xFFB8B8B8;
const DISABLED_THUMB: u32 = 0xFFE3E3E3;

/// Switch color table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchColors {
    pub thumb: Color,
    pub track: Color,
    pub checked_track: Color,
    pub disabled_track: Color,
    pub disabled_thumb: Color,
}

impl SwitchColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            thumb: Color::WHITE,
            track: palette.disabled,
            checked_track: palette.primary,
            disabled_track: Color::from_argb(DISABLED_TRACK),
            disabled_thumb: Color::from_argb(DISABLED_THUMB),
        }
    }
}

impl Default for SwitchColors {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

color_overrides! {
    SwitchColorsOverride for SwitchColors {
        thumb,
        track,
        checked_track,
        disabled_track,
        disabled_thumb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_slots_are_fixed_greys() {
        let colors = SwitchColors::from_palette(&Palette {
            disabled: Color::BLACK,
            ..Default::default()
        });
        assert_eq!(colors.track, Color::BLACK);
        assert_eq!(colors.disabled_track.to_hex_string(), "#B8B8B8");
        assert_eq!(colors.disabled_thumb.to_hex_string(), "#E3E3E3");
    }
}

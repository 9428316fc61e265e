use zephyr_core::Color;

use crate::tokens::Palette;

/// Button color table
///
/// The filled variant paints its background from the state slots and its
/// label with `text`. The outline variant uses the state slots for border
/// and label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonColors {
    pub inactive: Color,
    pub hovered: Color,
    pub pressed: Color,
    pub disabled: Color,
    pub text: Color,
}

impl ButtonColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            inactive: palette.tertiary_one,
            hovered: palette.primary,
            pressed: palette.secondary,
            disabled: palette.disabled,
            text: Color::WHITE,
        }
    }
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

color_overrides! {
    ButtonColorsOverride for ButtonColors {
        inactive,
        hovered,
        pressed,
        disabled,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_keeps_disabled_slot() {
        let base = ButtonColors::default();
        let red = Color::from_hex(0xFF0000);
        let colors = base.with_overrides(&ButtonColorsOverride {
            pressed: Some(red),
            ..Default::default()
        });

        assert_eq!(colors.pressed, red);
        // Overriding `pressed` must not leak into `disabled`
        assert_eq!(colors.disabled, base.disabled);
        assert_ne!(colors.disabled, colors.pressed);
    }

    #[test]
    fn test_every_slot_is_independent() {
        let base = ButtonColors::default();
        let marker = Color::from_hex(0x123456);

        let cases = [
            ButtonColorsOverride {
                inactive: Some(marker),
                ..Default::default()
            },
            ButtonColorsOverride {
                hovered: Some(marker),
                ..Default::default()
            },
            ButtonColorsOverride {
                pressed: Some(marker),
                ..Default::default()
            },
            ButtonColorsOverride {
                disabled: Some(marker),
                ..Default::default()
            },
            ButtonColorsOverride {
                text: Some(marker),
                ..Default::default()
            },
        ];

        for overrides in cases {
            let colors = base.with_overrides(&overrides);
            let slots = [
                colors.inactive,
                colors.hovered,
                colors.pressed,
                colors.disabled,
                colors.text,
            ];
            assert_eq!(
                slots.iter().filter(|c| **c == marker).count(),
                1,
                "{overrides:?}"
            );
        }
    }

    #[test]
    fn test_empty_override_is_identity() {
        let base = ButtonColors::default();
        assert_eq!(base.with_overrides(&ButtonColorsOverride::default()), base);
    }
}

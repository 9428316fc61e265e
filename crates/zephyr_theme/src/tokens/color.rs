//! Palette tokens

use zephyr_core::Color;

/// Palette token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    Secondary,
    TertiaryOne,
    TertiaryTwo,

    // State colors
    Disabled,
    Error,
    DisabledBackground,
}

impl ColorToken {
    pub const ALL: [ColorToken; 7] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::TertiaryOne,
        ColorToken::TertiaryTwo,
        ColorToken::Disabled,
        ColorToken::Error,
        ColorToken::DisabledBackground,
    ];
}

/// The shared palette every control color table is derived from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary_one: Color,
    pub tertiary_two: Color,
    pub disabled: Color,
    pub error: Color,
    pub disabled_background: Color,
}

impl Palette {
    /// Get a color by token
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::TertiaryOne => self.tertiary_one,
            ColorToken::TertiaryTwo => self.tertiary_two,
            ColorToken::Disabled => self.disabled,
            ColorToken::Error => self.error,
            ColorToken::DisabledBackground => self.disabled_background,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::from_argb(0xFF57B9FF),
            secondary: Color::from_argb(0xFF90D5FF),
            tertiary_one: Color::from_argb(0xFF77B1D4),
            tertiary_two: Color::from_argb(0xFF517891),
            disabled: Color::from_argb(0xFFD3D3D3),
            error: Color::from_argb(0xFFFF4D4D),
            disabled_background: Color::from_argb(0xFFF7F7F7),
        }
    }
}

color_overrides! {
    /// Partial palette, as read from a theme config
    PaletteOverride for Palette {
        primary,
        secondary,
        tertiary_one,
        tertiary_two,
        disabled,
        error,
        disabled_background,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_values() {
        let palette = Palette::default();
        assert_eq!(palette.get(ColorToken::Primary).to_hex_string(), "#57B9FF");
        assert_eq!(palette.get(ColorToken::Error).to_hex_string(), "#FF4D4D");
        assert_eq!(
            palette.get(ColorToken::DisabledBackground).to_hex_string(),
            "#F7F7F7"
        );
    }

    #[test]
    fn test_every_token_is_opaque() {
        let palette = Palette::default();
        for token in ColorToken::ALL {
            assert_eq!(palette.get(token).a, 1.0, "{token:?}");
        }
    }

    #[test]
    fn test_palette_override() {
        let overrides = PaletteOverride {
            primary: Some(Color::BLACK),
            ..Default::default()
        };
        let palette = Palette::default().with_overrides(&overrides);

        assert_eq!(palette.primary, Color::BLACK);
        assert_eq!(palette.secondary, Palette::default().secondary);
        assert!(!overrides.is_empty());
        assert!(PaletteOverride::default().is_empty());
    }
}

//! TOML theme configuration
//!
//! A config file only lists what differs from the defaults:
//!
//! ```toml
//! [palette]
//! primary = "#3366FF"
//!
//! [text_field]
//! focused_border = "#80FF0000"
//! ```
//!
//! Palette overrides flow into every control table before the per-control
//! overrides are applied.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::styles::{
    ButtonColors, ButtonColorsOverride, CheckboxColors, CheckboxColorsOverride, RadioColors,
    RadioColorsOverride, SwitchColors, SwitchColorsOverride, TextFieldColors,
    TextFieldColorsOverride,
};
use crate::tokens::{Palette, PaletteOverride};

/// Partial theme, as written in a config file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub palette: PaletteOverride,
    #[serde(skip_serializing_if = "ButtonColorsOverride::is_empty")]
    pub button: ButtonColorsOverride,
    #[serde(skip_serializing_if = "CheckboxColorsOverride::is_empty")]
    pub checkbox: CheckboxColorsOverride,
    #[serde(skip_serializing_if = "SwitchColorsOverride::is_empty")]
    pub switch: SwitchColorsOverride,
    #[serde(skip_serializing_if = "RadioColorsOverride::is_empty")]
    pub radio: RadioColorsOverride,
    #[serde(skip_serializing_if = "TextFieldColorsOverride::is_empty")]
    pub text_field: TextFieldColorsOverride,
}

impl ThemeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded theme config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Fully resolved color tables for every control
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub button: ButtonColors,
    pub checkbox: CheckboxColors,
    pub switch: SwitchColors,
    pub radio: RadioColors,
    pub text_field: TextFieldColors,
}

impl Theme {
    /// Derive every table from `palette` with no per-control overrides
    pub fn from_palette(palette: Palette) -> Self {
        Self {
            palette,
            button: ButtonColors::from_palette(&palette),
            checkbox: CheckboxColors::from_palette(&palette),
            switch: SwitchColors::from_palette(&palette),
            radio: RadioColors::from_palette(&palette),
            text_field: TextFieldColors::from_palette(&palette),
        }
    }

    pub fn from_config(config: &ThemeConfig) -> Self {
        let palette = Palette::default().with_overrides(&config.palette);
        let base = Self::from_palette(palette);

        let theme = Self {
            palette,
            button: base.button.with_overrides(&config.button),
            checkbox: base.checkbox.with_overrides(&config.checkbox),
            switch: base.switch.with_overrides(&config.switch),
            radio: base.radio.with_overrides(&config.radio),
            text_field: base.text_field.with_overrides(&config.text_field),
        };

        tracing::debug!(
            "Resolved theme (palette overridden: {}, default: {})",
            !config.palette.is_empty(),
            config.is_empty()
        );
        theme
    }

    /// Load a config file and resolve it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        ThemeConfig::load(path).map(|config| Self::from_config(&config))
    }
}

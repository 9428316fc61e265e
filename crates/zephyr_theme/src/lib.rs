//! Zephyr Theme
//!
//! Colors for the Zephyr controls.
//!
//! - [`Palette`]: the seven shared palette colors, addressable by [`ColorToken`]
//! - Per-control tables ([`ButtonColors`], [`SwitchColors`], [`CheckboxColors`],
//!   [`RadioColors`], [`TextFieldColors`]) derived from a palette
//! - [`ThemeConfig`]: partial overrides read from TOML, resolved into a
//!   [`Theme`] with [`Theme::from_config`]
//!
//! There is no ambient theme. Callers hand color tables to each control
//! explicitly.
//!
//! ```rust
//! use zephyr_theme::{Theme, ThemeConfig};
//!
//! let config = ThemeConfig::from_toml_str(
//!     r##"
//!     [palette]
//!     primary = "#FF8800"
//!
//!     [button]
//!     text = "#000000"
//!     "##,
//! )
//! .unwrap();
//!
//! let theme = Theme::from_config(&config);
//! assert_eq!(theme.button.hovered.to_hex_string(), "#FF8800");
//! assert_eq!(theme.switch.checked_track.to_hex_string(), "#FF8800");
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod styles;
pub mod tokens;

pub use config::{Theme, ThemeConfig};
pub use error::{Result, ThemeError};
pub use styles::*;
pub use tokens::*;

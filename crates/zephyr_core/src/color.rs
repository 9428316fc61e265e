//! RGBA colors
//!
//! Colors are stored as straight (non-premultiplied) `f32` channels in the
//! `0.0..=1.0` range. Hex helpers accept the `0xRRGGBB` and `0xAARRGGBB`
//! layouts used by design palettes.

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Color from `0xAARRGGBB`
    pub fn from_argb(argb: u32) -> Self {
        let a = ((argb >> 24) & 0xFF) as f32 / 255.0;
        Self::from_hex(argb & 0x00FF_FFFF).with_alpha(a)
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (the leading `#` is optional)
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_hex(value)),
            8 => Some(Self::from_argb(value)),
            _ => None,
        }
    }

    /// Format as `#AARRGGBB`, or `#RRGGBB` when fully opaque
    pub fn to_hex_string(&self) -> String {
        let [a, r, g, b] = self.to_argb_bytes();
        if a == 0xFF {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{a:02X}{r:02X}{g:02X}{b:02X}")
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Multiply the current alpha by `factor`
    pub fn fade(self, factor: f32) -> Self {
        let a = self.a * factor.clamp(0.0, 1.0);
        self.with_alpha(a)
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Channel-wise linear interpolation
    pub fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        Color {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn to_argb_bytes(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.a), q(self.r), q(self.g), q(self.b)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Color;
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Deserialize, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_hex_string())
        }
    }

    struct HexColorVisitor;

    impl<'de> Visitor<'de> for HexColorVisitor {
        type Value = Color;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a color string like \"#RRGGBB\" or \"#AARRGGBB\"")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
            Color::parse_hex(v).ok_or_else(|| E::custom(format!("invalid hex color `{v}`")))
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(HexColorVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb_splits_alpha() {
        let c = Color::from_argb(0x8057B9FF);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(Color::from_argb(0xFF57B9FF), Color::from_hex(0x57B9FF));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse_hex("#57B9FF"), Some(Color::from_hex(0x57B9FF)));
        assert_eq!(Color::parse_hex("FF4D4D"), Some(Color::from_hex(0xFF4D4D)));
        assert_eq!(
            Color::parse_hex("#66D3D3D3"),
            Some(Color::from_argb(0x66D3D3D3))
        );
        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex("#GG0000"), None);
        assert_eq!(Color::parse_hex("#+12345"), None);
    }

    #[test]
    fn test_hex_string_round_trip() {
        assert_eq!(Color::from_hex(0x517891).to_hex_string(), "#517891");
        let faded = Color::from_argb(0x6657B9FF);
        assert_eq!(faded.to_hex_string(), "#6657B9FF");
        assert_eq!(Color::parse_hex(&faded.to_hex_string()), Some(faded));
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Color::rgba(0.0, 0.0, 0.0, 0.0);
        let b = Color::rgba(1.0, 0.5, 0.25, 1.0);
        assert_eq!(Color::lerp(&a, &b, 0.0), a);
        assert_eq!(Color::lerp(&a, &b, 1.0), b);
        let mid = Color::lerp(&a, &b, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_fade_clamps_factor() {
        let c = Color::WHITE.with_alpha(0.5);
        assert_eq!(c.fade(2.0).a, 0.5);
        assert_eq!(c.fade(0.5).a, 0.25);
        assert!(c.fade(-1.0).is_transparent());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_hex_strings() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Doc {
            color: Color,
        }

        let doc: Doc = toml::from_str("color = \"#FF4D4D\"").unwrap();
        assert_eq!(doc.color, Color::from_hex(0xFF4D4D));
        assert_eq!(toml::to_string(&doc).unwrap().trim(), "color = \"#FF4D4D\"");
        assert!(toml::from_str::<Doc>("color = \"red\"").is_err());
    }
}

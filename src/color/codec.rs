use serde::{Deserialize, Serialize};

use crate::color::ansi256;
use crate::foundation::error::{ThemeResult, ThemeverterError};

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red channel, 0..=255.
    pub r: u8,
    /// Green channel, 0..=255.
    pub g: u8,
    /// Blue channel, 0..=255.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// An sRGB color with unit-interval channels (`channel / 255`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RgbUnit {
    /// Red channel, 0.0..=1.0.
    pub r: f64,
    /// Green channel, 0.0..=1.0.
    pub g: f64,
    /// Blue channel, 0.0..=1.0.
    pub b: f64,
}

impl From<Rgb8> for RgbUnit {
    fn from(c: Rgb8) -> Self {
        Self {
            r: f64::from(c.r) / 255.0,
            g: f64::from(c.g) / 255.0,
            b: f64::from(c.b) / 255.0,
        }
    }
}

/// A color normalized to lowercase `#rrggbb`.
///
/// The only way to obtain a `HexColor` is through [`HexColor::parse`] (or conversion from
/// [`Rgb8`]), so holding one means the value has already been validated, alpha-stripped and
/// lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parse and normalize any accepted hex form (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`).
    pub fn parse(s: &str) -> ThemeResult<Self> {
        normalize_hex(s).map(Self)
    }

    /// The normalized `#rrggbb` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 8-bit channels of this color.
    pub fn rgb8(&self) -> Rgb8 {
        let digits = self.0.as_bytes();
        Rgb8::new(
            hex_pair(digits[1], digits[2]),
            hex_pair(digits[3], digits[4]),
            hex_pair(digits[5], digits[6]),
        )
    }

    /// Unit-interval channels of this color.
    pub fn unit(&self) -> RgbUnit {
        RgbUnit::from(self.rgb8())
    }

    /// Nearest xterm 256-color palette index.
    pub fn ansi256(&self) -> u8 {
        ansi256::nearest(self.rgb8())
    }
}

impl From<Rgb8> for HexColor {
    fn from(c: Rgb8) -> Self {
        Self(rgb255_to_hex(c))
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Only called on validated digits.
fn hex_pair(hi: u8, lo: u8) -> u8 {
    fn nibble(d: u8) -> u8 {
        match d {
            b'0'..=b'9' => d - b'0',
            b'a'..=b'f' => d - b'a' + 10,
            b'A'..=b'F' => d - b'A' + 10,
            _ => 0,
        }
    }
    (nibble(hi) << 4) | nibble(lo)
}

fn hex_digits(s: &str) -> ThemeResult<&str> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ThemeverterError::invalid_color(format!(
            "\"{s}\" is not a hex color"
        )));
    }
    Ok(digits)
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional) into 8-bit channels.
///
/// An alpha channel is accepted and ignored.
pub fn hex_to_rgb255(hex: &str) -> ThemeResult<Rgb8> {
    let digits = hex_digits(hex)?;
    let b = digits.as_bytes();
    match b.len() {
        3 | 4 => Ok(Rgb8::new(
            hex_pair(b[0], b[0]),
            hex_pair(b[1], b[1]),
            hex_pair(b[2], b[2]),
        )),
        6 | 8 => Ok(Rgb8::new(
            hex_pair(b[0], b[1]),
            hex_pair(b[2], b[3]),
            hex_pair(b[4], b[5]),
        )),
        n => Err(ThemeverterError::invalid_color(format!(
            "\"{hex}\" has {n} hex digits; expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA"
        ))),
    }
}

/// Format 8-bit channels as lowercase `#rrggbb`.
pub fn rgb255_to_hex(c: Rgb8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Unit-interval channels of a hex color, each exactly `channel / 255`.
pub fn rgb_normalized(hex: &str) -> ThemeResult<RgbUnit> {
    hex_to_rgb255(hex).map(RgbUnit::from)
}

/// Nearest xterm 256-color palette index of a hex color.
///
/// Distance is the sum of squared channel differences; ties go to the lowest index.
pub fn to_ansi256(hex: &str) -> ThemeResult<u8> {
    hex_to_rgb255(hex).map(ansi256::nearest)
}

/// Drop the alpha channel of an 8-digit hex color.
///
/// Eight digits (with or without `#`) keep the first six; six digits pass through with a `#`
/// prefixed when missing. Case is preserved. Any other length is an error.
pub fn strip_alpha(hex: &str) -> ThemeResult<String> {
    let digits = hex_digits(hex)?;
    match digits.len() {
        6 => Ok(format!("#{digits}")),
        8 => Ok(format!("#{}", &digits[..6])),
        n => Err(ThemeverterError::invalid_color(format!(
            "\"{hex}\" has {n} hex digits; expected 6 or 8"
        ))),
    }
}

/// Normalize any accepted hex form to lowercase `#rrggbb`.
///
/// Accepts 3, 4, 6 or 8 digits; the short forms are expanded and alpha is dropped.
pub fn normalize_hex(hex: &str) -> ThemeResult<String> {
    let digits = hex_digits(hex)?;
    let expanded = match digits.len() {
        3 | 4 => digits[..3].chars().flat_map(|c| [c, c]).collect::<String>(),
        6 | 8 => digits[..6].to_owned(),
        n => {
            return Err(ThemeverterError::invalid_color(format!(
                "\"{hex}\" has {n} hex digits"
            )));
        }
    };
    Ok(format!("#{}", expanded.to_ascii_lowercase()))
}

/// Rec. 709 relative luminance in `0.0..=1.0` (on gamma-encoded channels).
pub fn relative_luminance(c: Rgb8) -> f64 {
    let u = RgbUnit::from(c);
    0.2126 * u.r + 0.7152 * u.g + 0.0722 * u.b
}

/// Convert one unit-interval component to an 8-bit channel.
pub fn unit_to_u8(x: f64) -> ThemeResult<u8> {
    if !x.is_finite() {
        return Err(ThemeverterError::invalid_color(format!(
            "color component {x} is not finite"
        )));
    }
    Ok((x.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/color/codec.rs"]
mod tests;

//! Mode-aware color declarations and hex color helpers.

use peniko::Color;
use serde::Serialize;

use crate::error::{ThemeError, ThemeResult};
use crate::mode::ThemeMode;

/// A color declared once with a value for each [ThemeMode].
///
/// Both variants are required by [ModeAwareColor::new], so resolution can
/// never fail or fall back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ModeAwareColor {
    /// Value used in light mode.
    pub light: &'static str,
    /// Value used in dark mode.
    pub dark: &'static str,
}

impl ModeAwareColor {
    /// Declare a color with its light and dark variants.
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Self { light, dark }
    }

    /// Resolve the color for the requested mode.
    pub const fn value_for(&self, mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }
}

/// Parse a hex color string with optional alpha channel.
///
/// Supports `#rrggbb` (opaque) and `#rrggbbaa`. The leading `#` is required.
pub fn parse_hex_color(value: &str) -> ThemeResult<Color> {
    let hex = value
        .strip_prefix('#')
        .filter(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| ThemeError::invalid_color(value))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ThemeError::invalid_color(value))
    };

    match hex.len() {
        6 => Ok(Color::from_rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(ThemeError::invalid_color(format!(
            "hex color must be 6 or 8 digits: {}",
            value
        ))),
    }
}

/// Whether the string is a hex color accepted by [parse_hex_color].
pub fn is_valid_hex_color(value: &str) -> bool {
    parse_hex_color(value).is_ok()
}

/// Convert a hex color into a QSS `rgba(r, g, b, a)` expression with the given opacity.
///
/// The alpha channel of the input is replaced; `alpha` is clamped to `0.0..=1.0`.
pub fn to_rgba(hex: &str, alpha: f32) -> ThemeResult<String> {
    let color = parse_hex_color(hex)?;
    let [r, g, b, _] = color.components;
    let alpha = alpha.clamp(0.0, 1.0);
    Ok(format!(
        "rgba({}, {}, {}, {})",
        to_channel(r),
        to_channel(g),
        to_channel(b),
        alpha
    ))
}

fn to_channel(component: f32) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}

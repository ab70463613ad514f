//! Hex-string serialization helpers for [vello::peniko::Color].

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

/// Serialize a color as a `#rrggbb` or `#rrggbbaa` hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let components = color.components;
    let r = (components[0] * 255.0) as u8;
    let g = (components[1] * 255.0) as u8;
    let b = (components[2] * 255.0) as u8;
    let a = (components[3] * 255.0) as u8;
    let hex = if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    };
    serializer.serialize_str(&hex)
}

/// Deserialize a color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

/// Parse a `#rrggbb` or `#rrggbbaa` hex string into a color.
pub fn parse_hex_color(hex: &str) -> Result<Color, String> {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;
        Ok(Color::from_rgb8(r, g, b))
    } else if hex.len() == 8 {
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;
        let a = u8::from_str_radix(&hex[6..8], 16).map_err(|_| "Invalid hex color")?;
        Ok(Color::from_rgba8(r, g, b, a))
    } else {
        Err("Hex color must be 6 or 8 characters".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(
            parse_hex_color("#2196f3").unwrap(),
            Color::from_rgb8(0x21, 0x96, 0xf3)
        );
        assert_eq!(
            parse_hex_color("2196f380").unwrap(),
            Color::from_rgba8(0x21, 0x96, 0xf3, 0x80)
        );
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#0011223344").is_err());
    }
}

use crate::angles::WheelPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color in RGBA format.
///
/// Serialized as a `#RRGGBBAA` hex string so it reads naturally in TOML
/// config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Create color from hex string (e.g., "#FF0000" or "#FF0000FF")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Convert to CSS string
    pub fn to_css_string(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid color '{value}', expected #RRGGBB or #RRGGBBAA"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Stroke style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Text anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Shape primitives for wheel rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle {
        center: WheelPoint,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        from: WheelPoint,
        to: WheelPoint,
        stroke: Stroke,
    },
    Text {
        position: WheelPoint,
        content: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    },
    PointMarker {
        center: WheelPoint,
        name: String,
        radius: f32,
        color: Color,
        retrograde: bool,
    },
    AspectLine {
        from: WheelPoint,
        to: WheelPoint,
        label: String,
        color: Color,
        width: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip_keeps_alpha() {
        let c = Color::rgba(230, 190, 90, 175);
        assert_eq!(c.to_hex(), "#E6BE5AAF");
        assert_eq!(Color::from_hex(&c.to_hex()), Some(c));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#GG0000").is_none());
        assert!(Color::from_hex("#FF00").is_none());
        assert!(Color::from_hex("#ÿÿÿ").is_none());
        assert!(Color::from_hex("#+F0000").is_none());
        assert!(Color::from_hex("#FF+0000A").is_none());
    }
}

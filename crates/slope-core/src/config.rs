// File: crates/slope-core/src/config.rs
// Summary: Typed style configuration and RGBA color with hex parsing.

use crate::error::SlopeError;

/// 8-bit RGBA color. Hosts supply colors as CSS-style hex strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or shorthand `#rgb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, SlopeError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let bad = || SlopeError::InvalidColor(s.to_string());
        if !hex.is_ascii() {
            return Err(bad());
        }
        match hex.len() {
            3 => {
                let mut c = [0u8; 3];
                for (i, ch) in hex.chars().enumerate() {
                    let d = ch.to_digit(16).ok_or_else(bad)? as u8;
                    c[i] = d * 16 + d;
                }
                Ok(Self::rgb(c[0], c[1], c[2]))
            }
            6 => {
                let mut c = [0u8; 3];
                for i in 0..3 {
                    c[i] = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| bad())?;
                }
                Ok(Self::rgb(c[0], c[1], c[2]))
            }
            _ => Err(bad()),
        }
    }
}

/// Flat per-render style options. Applied uniformly to all rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlopeStyle {
    pub line_color: Color,
    pub text_color: Color,
    pub text_size: f32,
    pub line_width: f32,
    pub show_grid: bool,
    pub show_category_labels: bool,
}

impl Default for SlopeStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb(0x00, 0x7a, 0xcc),
            text_color: Color::rgb(0x33, 0x33, 0x33),
            text_size: 12.0,
            line_width: 2.0,
            show_grid: true,
            show_category_labels: true,
        }
    }
}

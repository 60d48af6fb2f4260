//! Fill color parsing.
//!
//! A fill color string is tried against an ordered chain of parsers:
//!
//! 1. Hex: `rrggbb` or `rrggbbaa` (no `#` prefix)
//! 2. Decimal: `r,g,b` or `r,g,b,a` with integer components, clamped to 0..=255
//!
//! Colors given without alpha are fully opaque. [`parse_fill_color`] never
//! fails: when every parser rejects the input it returns
//! [`FillColor::TRANSPARENT`].

use std::str::FromStr;

use image::Rgba;
use thiserror::Error;

/// Errors produced by the individual color parsers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input was empty after trimming.
    #[error("empty color string")]
    Empty,

    /// Hex input was not 6 or 8 characters long.
    #[error("invalid hex length: {0}")]
    InvalidLength(usize),

    /// Hex input contained a non-hex character.
    #[error("invalid hex digits")]
    InvalidHex,

    /// A decimal component was not an integer.
    #[error("invalid color component: {0:?}")]
    InvalidComponent(String),

    /// Decimal input did not have 3 or 4 components.
    #[error("expected 3 or 4 color components, got {0}")]
    WrongComponentCount(usize),
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl FillColor {
    /// Fully transparent black, the result of an unparseable color string.
    pub const TRANSPARENT: FillColor = FillColor::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

}

impl From<FillColor> for Rgba<u8> {
    fn from(color: FillColor) -> Self {
        color.to_rgba()
    }
}

impl FromStr for FillColor {
    type Err = ColorParseError;

    /// Strict parse: hex first, then decimal. Returns the last parser's error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        parse_hex(s).or_else(|_| parse_decimal(s))
    }
}

/// Parse a fill color, falling back to transparent black.
///
/// # Example
///
/// ```
/// use image_offset_core::{parse_fill_color, FillColor};
///
/// assert_eq!(parse_fill_color("ff0000"), FillColor::opaque(255, 0, 0));
/// assert_eq!(parse_fill_color("bogus"), FillColor::TRANSPARENT);
/// ```
pub fn parse_fill_color(s: &str) -> FillColor {
    match s.parse::<FillColor>() {
        Ok(color) => color,
        Err(err) => {
            tracing::debug!(input = s, error = %err, "fill color unparseable, using transparent");
            FillColor::TRANSPARENT
        }
    }
}

/// Parse `rrggbb` or `rrggbbaa`.
fn parse_hex(hex: &str) -> Result<FillColor, ColorParseError> {
    let bytes = hex.as_bytes();
    if bytes.len() != 6 && bytes.len() != 8 {
        return Err(ColorParseError::InvalidLength(bytes.len()));
    }

    let nibble = |c: u8| -> Result<u8, ColorParseError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(ColorParseError::InvalidHex),
        }
    };

    let mut channels = [255u8; 4];
    for (channel, pair) in channels.iter_mut().zip(bytes.chunks_exact(2)) {
        *channel = (nibble(pair[0])? << 4) | nibble(pair[1])?;
    }

    Ok(FillColor::new(
        channels[0],
        channels[1],
        channels[2],
        channels[3],
    ))
}

/// Parse `r,g,b` or `r,g,b,a`.
fn parse_decimal(s: &str) -> Result<FillColor, ColorParseError> {
    let parts = s
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .map(|v| v.clamp(0, 255) as u8)
                .map_err(|_| ColorParseError::InvalidComponent(part.to_string()))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    match parts[..] {
        [r, g, b] => Ok(FillColor::opaque(r, g, b)),
        [r, g, b, a] => Ok(FillColor::new(r, g, b, a)),
        _ => Err(ColorParseError::WrongComponentCount(parts.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_fill_color("ff0000"), FillColor::new(255, 0, 0, 255));
        assert_eq!(parse_fill_color("00FF7f"), FillColor::new(0, 255, 127, 255));
    }

    #[test]
    fn test_parse_hex_rgba() {
        assert_eq!(parse_fill_color("ff000080"), FillColor::new(255, 0, 0, 128));
        assert_eq!(parse_fill_color("00000000"), FillColor::TRANSPARENT);
    }

    #[test]
    fn test_parse_decimal_rgb() {
        assert_eq!(parse_fill_color("10,20,30"), FillColor::new(10, 20, 30, 255));
    }

    #[test]
    fn test_parse_decimal_rgba() {
        assert_eq!(parse_fill_color("10,20,30,40"), FillColor::new(10, 20, 30, 40));
    }

    #[test]
    fn test_parse_decimal_with_whitespace() {
        assert_eq!(
            parse_fill_color("  255 , 128 ,  0 "),
            FillColor::new(255, 128, 0, 255)
        );
        assert_eq!(parse_fill_color("+1,2,3"), FillColor::new(1, 2, 3, 255));
    }

    #[test]
    fn test_hex_length_decimal_falls_through() {
        // Six characters, but not hex: decimal parser takes over
        assert_eq!(parse_fill_color("1,2,30"), FillColor::new(1, 2, 30, 255));
        // Eight characters, same story
        assert_eq!(parse_fill_color("10,20,30"), FillColor::new(10, 20, 30, 255));
    }

    #[test]
    fn test_parse_failures_are_transparent() {
        assert_eq!(parse_fill_color("bogus"), FillColor::TRANSPARENT);
        assert_eq!(parse_fill_color(""), FillColor::TRANSPARENT);
        assert_eq!(parse_fill_color("   "), FillColor::TRANSPARENT);
        assert_eq!(parse_fill_color("#ff0000"), FillColor::TRANSPARENT);
        assert_eq!(parse_fill_color("fff"), FillColor::TRANSPARENT);
        assert_eq!(parse_fill_color("1,2"), FillColor::TRANSPARENT);
        assert_eq!(parse_fill_color("1,2,3,4,5"), FillColor::TRANSPARENT);
        assert_eq!(parse_fill_color("1.5,0,0"), FillColor::TRANSPARENT);
        assert_eq!(parse_fill_color("gg0000"), FillColor::TRANSPARENT);
    }

    #[test]
    fn test_decimal_components_are_clamped() {
        assert_eq!(parse_fill_color("300,0,0"), FillColor::opaque(255, 0, 0));
        assert_eq!(parse_fill_color("256,0,0"), FillColor::opaque(255, 0, 0));
        assert_eq!(parse_fill_color("-5,0,0"), FillColor::opaque(0, 0, 0));
        assert_eq!(parse_fill_color("-1,0,0"), FillColor::opaque(0, 0, 0));
        assert_eq!(parse_fill_color("10,20,30,999"), FillColor::new(10, 20, 30, 255));
        assert_eq!(parse_fill_color("0,0,0,-40"), FillColor::TRANSPARENT);
    }

    #[test]
    fn test_strict_parse_errors() {
        assert_eq!("".parse::<FillColor>(), Err(ColorParseError::Empty));
        assert_eq!(
            "1,2".parse::<FillColor>(),
            Err(ColorParseError::WrongComponentCount(2))
        );
        assert_eq!(
            "red".parse::<FillColor>(),
            Err(ColorParseError::InvalidComponent("red".to_string()))
        );
    }

    #[test]
    fn test_hex_parser_directly() {
        assert_eq!(parse_hex("abc"), Err(ColorParseError::InvalidLength(3)));
        assert_eq!(parse_hex("zzzzzz"), Err(ColorParseError::InvalidHex));
        assert_eq!(parse_hex("0a0b0c"), Ok(FillColor::new(10, 11, 12, 255)));
    }

    #[test]
    fn test_to_rgba() {
        let color = FillColor::new(1, 2, 3, 4);
        assert_eq!(color.to_rgba(), Rgba([1, 2, 3, 4]));
        assert_eq!(Rgba::from(color), Rgba([1, 2, 3, 4]));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ColorParseError::WrongComponentCount(5).to_string(),
            "expected 3 or 4 color components, got 5"
        );
        assert_eq!(ColorParseError::Empty.to_string(), "empty color string");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

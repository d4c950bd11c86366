//! Colour type and hex parsing.

use std::fmt;
use std::str::FromStr;

use palette::Srgba;

use crate::error::{HexFormatError, Result, TokenError};

/// A resolved colour with normalized components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour(Srgba<f64>);

impl Colour {
    /// Create a colour from 0–255 channel bytes.
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(Srgba::<u8>::new(r, g, b, a).into_format())
    }

    /// Create an opaque colour from 0–255 channel bytes.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_bytes(r, g, b, 255)
    }

    /// Parse a hex colour string.
    ///
    /// Surrounding whitespace and one leading `#` are ignored. The remaining
    /// digits must be hexadecimal and there must be exactly 6 (`RRGGBB`,
    /// opaque) or 8 (`RRGGBBAA`) of them.
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(hex_error(s, HexFormatError::InvalidCharacters));
        }

        let bytes = match hex.len() {
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
                .collect::<std::result::Result<Vec<u8>, _>>()
                .map_err(|_| hex_error(s, HexFormatError::InvalidCharacters))?,
            _ => return Err(hex_error(s, HexFormatError::InvalidLength)),
        };

        let alpha = bytes.get(3).copied().unwrap_or(u8::MAX);
        Ok(Self::from_bytes(bytes[0], bytes[1], bytes[2], alpha))
    }

    pub fn red(self) -> f64 {
        self.0.red
    }

    pub fn green(self) -> f64 {
        self.0.green
    }

    pub fn blue(self) -> f64 {
        self.0.blue
    }

    pub fn alpha(self) -> f64 {
        self.0.alpha
    }

    /// Replace the alpha channel.
    ///
    /// The value is clamped to `[0, 1]` and snapped to the nearest byte so the
    /// colour survives a round trip through 8-digit hex.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let byte = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        let [r, g, b, _] = self.to_bytes();
        Self::from_bytes(r, g, b, byte)
    }

    /// Convert to 0–255 channel bytes.
    pub fn to_bytes(self) -> [u8; 4] {
        let c: Srgba<u8> = self.0.into_format();
        [c.red, c.green, c.blue, c.alpha]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.to_bytes()[3] == u8::MAX
    }
}

impl FromStr for Colour {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Lowercase hex, 6 digits when opaque and 8 otherwise.
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_bytes();
        if a == u8::MAX {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

fn hex_error(value: &str, reason: HexFormatError) -> TokenError {
    TokenError::HexFormat {
        value: value.to_string(),
        reason,
        help: Some("Use #RRGGBB or #RRGGBBAA format".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-3;

    fn reason(result: Result<Colour>) -> HexFormatError {
        match result {
            Err(TokenError::HexFormat { reason, .. }) => reason,
            other => panic!("expected a hex error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#fffaf5").unwrap();
        assert!((c.red() - 1.0).abs() < EPSILON);
        assert!((c.green() - 0.9804).abs() < EPSILON);
        assert!((c.blue() - 0.9608).abs() < EPSILON);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("#fffaf5cc").unwrap();
        assert!((c.red() - 1.0).abs() < EPSILON);
        assert!((c.green() - 0.9804).abs() < EPSILON);
        assert!((c.alpha() - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_components_are_byte_over_255() {
        for byte in [0u8, 1, 0x1a, 0x80, 0xfe, 0xff] {
            let hex = format!("{:02x}{:02x}{:02x}{:02x}", byte, byte, byte, byte);
            let c = Colour::from_hex(&hex).unwrap();
            let expected = f64::from(byte) / 255.0;
            assert!((c.red() - expected).abs() < 1e-9);
            assert!((c.alpha() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_from_hex_no_hash_and_whitespace() {
        assert_eq!(Colour::from_hex("  FF0000\n").unwrap(), Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hex_invalid_characters() {
        assert_eq!(reason(Colour::from_hex("#zzzzzz")), HexFormatError::InvalidCharacters);
        assert_eq!(reason(Colour::from_hex("#12 456")), HexFormatError::InvalidCharacters);
        assert_eq!(reason(Colour::from_hex("##ffffff")), HexFormatError::InvalidCharacters);
    }

    #[test]
    fn test_from_hex_invalid_length() {
        assert_eq!(reason(Colour::from_hex("#fff")), HexFormatError::InvalidLength);
        assert_eq!(reason(Colour::from_hex("#fffffff")), HexFormatError::InvalidLength);
        assert_eq!(reason(Colour::from_hex("")), HexFormatError::InvalidLength);
    }

    #[test]
    fn test_with_alpha_clamps_and_rounds() {
        let blue = Colour::rgb(0, 0, 255);
        assert_eq!(blue.with_alpha(0.5).to_bytes(), [0, 0, 255, 128]);
        assert_eq!(blue.with_alpha(1.7).to_bytes(), [0, 0, 255, 255]);
        assert_eq!(blue.with_alpha(-0.2).to_bytes(), [0, 0, 255, 0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::rgb(255, 0, 0).to_string(), "#ff0000");
        assert_eq!(Colour::from_bytes(0, 0, 255, 128).to_string(), "#0000ff80");
        assert!(Colour::rgb(1, 2, 3).is_opaque());
    }
}

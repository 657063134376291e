//! Convert colors to and from the hex-color string format at runtime.
//!
//! Supports the 3, 4, 6, and 8-digit formats, according to
//! <https://drafts.csswg.org/css-color-4/#hex-color>

use std::{fmt::Display, str::FromStr};

use crate::{Color32, Rgba};

/// A [`Color32`] together with the hex format it was written in.
///
/// Implements [`Display`] and [`FromStr`] to convert to and from the hex string.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HexColor {
    /// 3 hexadecimal digits, one for each of the r, g, b channels
    Hex3(Color32),

    /// 4 hexadecimal digits, one for each of the r, g, b, a channels
    Hex4(Color32),

    /// 6 hexadecimal digits, two for each of the r, g, b channels
    Hex6(Color32),

    /// 8 hexadecimal digits, two for each of the r, g, b, a channels
    Hex8(Color32),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseHexColorError {
    MissingHash,
    InvalidLength,

    /// Something other than `0-9`, `a-f` or `A-F` after the `#`.
    InvalidDigit,

    InvalidInt(std::num::ParseIntError),
}

impl Display for ParseHexColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHash => f.write_str("hex color must start with '#'"),
            Self::InvalidLength => f.write_str("hex color must have 3, 4, 6 or 8 digits"),
            Self::InvalidDigit => f.write_str("hex color may only contain the digits 0-9 and a-f"),
            Self::InvalidInt(err) => write!(f, "invalid hex digits: {err}"),
        }
    }
}

impl std::error::Error for ParseHexColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInt(err) => Some(err),
            Self::MissingHash | Self::InvalidLength | Self::InvalidDigit => None,
        }
    }
}

impl FromStr for HexColor {
    type Err = ParseHexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('#')
            .ok_or(ParseHexColorError::MissingHash)
            .and_then(Self::from_str_without_hash)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex3(color) => {
                let [r, g, b, _] = color.to_array().map(|u| u >> 4);
                write!(f, "#{r:x}{g:x}{b:x}")
            }
            Self::Hex4(color) => {
                let [r, g, b, a] = color.to_array().map(|u| u >> 4);
                write!(f, "#{r:x}{g:x}{b:x}{a:x}")
            }
            Self::Hex6(color) => {
                let [r, g, b, _] = color.to_array();
                write!(f, "#{:06x}", u32::from_be_bytes([0, r, g, b]))
            }
            Self::Hex8(color) => {
                write!(f, "#{:08x}", u32::from_be_bytes(color.to_array()))
            }
        }
    }
}

impl HexColor {
    /// Retrieves the inner [`Color32`]
    #[inline]
    pub fn color(&self) -> Color32 {
        match self {
            Self::Hex3(color) | Self::Hex4(color) | Self::Hex6(color) | Self::Hex8(color) => {
                *color
            }
        }
    }

    /// Parses a string as a hex color without the leading `#` character
    ///
    /// # Errors
    /// Returns an error if the length of the string does not correspond to one of the standard
    /// formats (3, 4, 6, or 8), or if it contains non-hex characters.
    pub fn from_str_without_hash(s: &str) -> Result<Self, ParseHexColorError> {
        // `from_str_radix` would also accept a leading `+`.
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseHexColorError::InvalidDigit);
        }
        let digits = |s: &str| u32::from_str_radix(s, 16).map_err(ParseHexColorError::InvalidInt);
        // Single digit channels are widened with `0xf -> 0xff`:
        let widen = |u: u8| (u << 4) | u;
        match s.len() {
            3 => {
                let [_, _, rg, b] = digits(s)?.to_be_bytes();
                let [r, g, b] = [rg & 0x0f, b >> 4, b & 0x0f].map(widen);
                Ok(Self::Hex3(Color32::from_rgb(r, g, b)))
            }
            4 => {
                let [_, _, rg, ba] = digits(s)?.to_be_bytes();
                let [r, g, b, a] = [rg >> 4, rg & 0x0f, ba >> 4, ba & 0x0f].map(widen);
                Ok(Self::Hex4(Color32::from_rgba(r, g, b, a)))
            }
            6 => {
                let [_, r, g, b] = digits(s)?.to_be_bytes();
                Ok(Self::Hex6(Color32::from_rgb(r, g, b)))
            }
            8 => {
                let [r, g, b, a] = digits(s)?.to_be_bytes();
                Ok(Self::Hex8(Color32::from_rgba(r, g, b, a)))
            }
            _ => Err(ParseHexColorError::InvalidLength),
        }
    }
}

impl Color32 {
    /// Parses a color from a hex string.
    ///
    /// ```
    /// use slider_color::Color32;
    /// assert_eq!(Ok(Color32::RED), Color32::from_hex("#ff0000"));
    /// assert_eq!(Ok(Color32::GREEN), Color32::from_hex("#00ff00ff"));
    /// assert_eq!(Ok(Color32::BLUE), Color32::from_hex("#00f"));
    /// assert_eq!(Ok(Color32::TRANSPARENT), Color32::from_hex("#0000"));
    /// ```
    ///
    /// # Errors
    /// See [`HexColor::from_str_without_hash`]. The string must also start with `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexColorError> {
        HexColor::from_str(hex).map(|h| h.color())
    }

    /// Formats the color as an 8-digit hex string, the only lossless format.
    #[inline]
    pub fn to_hex(&self) -> String {
        HexColor::Hex8(*self).to_string()
    }
}

impl Rgba {
    /// Parses a color from a hex string. See [`Color32::from_hex`].
    ///
    /// # Errors
    /// See [`HexColor::from_str_without_hash`].
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexColorError> {
        Color32::from_hex(hex).map(Self::from)
    }

    /// Formats the color as an 8-digit hex string, rounding each channel to 8 bits.
    pub fn to_hex(&self) -> String {
        Color32::from(*self).to_hex()
    }
}

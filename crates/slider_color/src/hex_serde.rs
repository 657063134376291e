//! Serialize an [`Rgba`] as a `#rrggbbaa` string.
//!
//! Use with `#[serde(with = "slider_color::hex_serde")]`.

use serde::{Deserialize as _, Deserializer, Serializer};

use crate::Rgba;

/// # Errors
/// Propagates errors from the serializer.
pub fn serialize<S: Serializer>(color: &Rgba, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.to_hex())
}

/// # Errors
/// Fails if the string is not one of the hex color formats.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgba, D::Error> {
    let hex = String::deserialize(deserializer)?;
    Rgba::from_hex(&hex).map_err(serde::de::Error::custom)
}

//! Color types and blending for the switch slider.
//!
//! If you want to blend or tint colors use [`Rgba`].
//! If you want a compact color representation, e.g. in a theme file, use [`Color32`]
//! or a [`HexColor`] string.
//! If you want a gradient that can be sampled at any progress, use [`ColorBand`].
//!
//! ## Conventions
//! Colors are device RGB with **unmultiplied** alpha.
//! Every channel of an [`Rgba`] is an `f32` in `0..=1`;
//! every channel of a [`Color32`] is a `u8` in `0..=255`.
//! No gamma conversion takes place between the two.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod color32;
pub use color32::*;

mod color_band;
pub use color_band::*;

mod hex_color_runtime;
pub use hex_color_runtime::*;

mod rgba;
pub use rgba::*;

#[cfg(feature = "serde")]
pub mod hex_serde;

// ----------------------------------------------------------------------------
// Color conversion:

impl From<Color32> for Rgba {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_array();
        Self::from_rgba(
            f32_from_u8(r),
            f32_from_u8(g),
            f32_from_u8(b),
            f32_from_u8(a),
        )
    }
}

impl From<Rgba> for Color32 {
    fn from(rgba: Rgba) -> Self {
        let [r, g, b, a] = rgba.to_array();
        Self::from_rgba(u8_from_f32(r), u8_from_f32(g), u8_from_f32(b), u8_from_f32(a))
    }
}

/// [0, 255] -> [0, 1].
#[inline(always)]
pub const fn f32_from_u8(c: u8) -> f32 {
    c as f32 / 255.0
}

/// [0, 1] -> [0, 255] (clamped).
/// Values outside this range will be clamped to the range.
#[inline(always)]
pub fn u8_from_f32(c: f32) -> u8 {
    fast_round(c * 255.0)
}

const fn fast_round(r: f32) -> u8 {
    (r + 0.5) as _ // rust does a saturating cast since 1.45
}

/// An assert that is only active when `slider_color` is compiled with the `extra_asserts` feature
/// or with the `extra_debug_asserts` feature in debug builds.
#[macro_export]
macro_rules! slider_color_assert {
    ($($arg: tt)*) => {
        if cfg!(any(
            feature = "extra_asserts",
            all(feature = "extra_debug_asserts", debug_assertions),
        )) {
            assert!($($arg)*);
        }
    }
}

#[test]
fn test_byte_conversion_round_trip() {
    for c in 0..=255 {
        let f = f32_from_u8(c);
        assert!((0.0..=1.0).contains(&f));
        assert_eq!(u8_from_f32(f), c);
    }
    assert_eq!(u8_from_f32(-3.0), 0);
    assert_eq!(u8_from_f32(3.0), 255);
}

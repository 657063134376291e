//! Geometry for a switch slider: a round button riding along a capsule track.
//!
//! Includes positions, sizes, rectangles, and the progress model that maps a
//! drag position onto a normalized progress in `0..=1` and back again.
//!
//! Conventions (unless otherwise specified):
//!
//! * X+ is right and Y+ is down.
//! * (0,0) is left top.
//! * Dimension order is always `x y`
//! * Track geometry is relative to the track's `min` corner.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

use std::ops::{Add, Mul, RangeInclusive, Sub};

// ----------------------------------------------------------------------------

mod bracket;
mod direction;
mod pos2;
mod rect;
pub mod track;
mod vec2;

pub use self::{
    bracket::bracket,
    direction::Direction,
    pos2::*,
    rect::*,
    track::{TrackGeometry, TrackRanges},
    vec2::*,
};

// ----------------------------------------------------------------------------

/// Helper trait to implement [`lerp`].
pub trait One {
    const ONE: Self;
}

impl One for f32 {
    const ONE: Self = 1.0;
}

impl One for f64 {
    const ONE: Self = 1.0;
}

/// Helper trait to implement [`lerp`].
pub trait Real:
    Copy
    + PartialEq
    + PartialOrd
    + One
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + std::ops::Div<Self, Output = Self>
{
}

impl Real for f32 {}

impl Real for f64 {}

// ----------------------------------------------------------------------------

/// Linear interpolation.
///
/// `t == 0` returns the start of the range, `t == 1` the end.
#[inline(always)]
pub fn lerp<R, T>(range: RangeInclusive<R>, t: T) -> R
where
    T: Real + Mul<R, Output = R>,
    R: Copy + Add<R, Output = R>,
{
    (T::ONE - t) * *range.start() + t * *range.end()
}

/// Return true when arguments are the same within some rounding error.
pub fn almost_equal(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        true // handle infinites
    } else {
        let abs_max = a.abs().max(b.abs());
        abs_max <= epsilon || ((a - b).abs() / abs_max) <= epsilon
    }
}

// ----------------------------------------------------------------------------

/// Extends `f32`, `Vec2` etc with `at_least` and `at_most` as aliases for `max` and `min`.
pub trait NumExt {
    /// More readable version of `self.max(lower_limit)`
    #[must_use]
    fn at_least(self, lower_limit: Self) -> Self;

    /// More readable version of `self.min(upper_limit)`
    #[must_use]
    fn at_most(self, upper_limit: Self) -> Self;
}

macro_rules! impl_num_ext {
    ($t: ty) => {
        impl NumExt for $t {
            #[inline(always)]
            fn at_least(self, lower_limit: Self) -> Self {
                self.max(lower_limit)
            }

            #[inline(always)]
            fn at_most(self, upper_limit: Self) -> Self {
                self.min(upper_limit)
            }
        }
    };
}

impl_num_ext!(f32);
impl_num_ext!(f64);
impl_num_ext!(usize);
impl_num_ext!(Vec2);

/// Clamp `x` into `0..=1`, mapping NaN to 0.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

// ----------------------------------------------------------------------------

/// An assert that is only active when `slider_math` is compiled with the `extra_asserts` feature
/// or with the `extra_debug_asserts` feature in debug builds.
#[macro_export]
macro_rules! slider_math_assert {
    ($($arg: tt)*) => {
        if cfg!(any(
            feature = "extra_asserts",
            all(feature = "extra_debug_asserts", debug_assertions),
        )) {
            assert!($($arg)*);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_ends_are_exact() {
        assert_eq!(lerp(3.0_f32..=11.0, 0.0), 3.0);
        assert_eq!(lerp(3.0_f32..=11.0, 1.0), 11.0);
        assert_eq!(lerp(3.0_f32..=11.0, 0.25), 5.0);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(4.0), 1.0);
        assert_eq!(clamp01(f32::NAN), 0.0);
    }
}

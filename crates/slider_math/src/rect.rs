use crate::{pos2, vec2, Pos2, Vec2};

/// A rectangular region of space.
///
/// Usually a [`Rect`] has a positive (or zero) size,
/// and then [`Self::min`] `<=` [`Self::max`].
/// In these cases [`Self::min`] is the left-top corner
/// and [`Self::max`] is the right-bottom corner.
///
/// Geometry derived from a track that is too small for its button may
/// produce a [`Rect`] with zero width, but never a negative one.
#[repr(C)]
#[derive(Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Rect {
    /// One of the corners of the rectangle, usually the left top one.
    pub min: Pos2,

    /// The other corner, opposing [`Self::min`]. Usually the right bottom one.
    pub max: Pos2,
}

impl Rect {
    /// A [`Rect`] filled with zeroes.
    pub const ZERO: Self = Self {
        min: Pos2::ZERO,
        max: Pos2::ZERO,
    };

    #[inline(always)]
    pub const fn from_min_max(min: Pos2, max: Pos2) -> Self {
        Self { min, max }
    }

    /// left-top corner plus a size (stretching right-down).
    #[inline(always)]
    pub fn from_min_size(min: Pos2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    #[inline(always)]
    pub fn from_center_size(center: Pos2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            max: center + size * 0.5,
        }
    }

    #[must_use]
    pub fn translate(self, amnt: Vec2) -> Self {
        Self::from_min_size(self.min + amnt, self.size())
    }

    /// The overlap of two rectangles.
    /// If they do not overlap the result has a non-positive size.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        Self {
            min: pos2(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: pos2(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        }
    }

    #[inline(always)]
    pub fn contains(&self, p: Pos2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    #[inline(always)]
    pub fn center(&self) -> Pos2 {
        pos2(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    #[inline(always)]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline(always)]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline(always)]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline(always)]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline(always)]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// `min.x <= max.x && min.y <= max.y`.
    #[inline(always)]
    pub fn is_non_negative(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// True if all members are also finite.
    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// The smaller of width and height.
    #[inline(always)]
    pub fn min_dimension(&self) -> f32 {
        self.size().min_elem()
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?} - {:?}]", self.min, self.max)
    }
}

/// A track-sized rectangle at the origin, e.g. `rect_from_size(200.0, 40.0)`.
#[inline]
pub fn rect_from_size(width: f32, height: f32) -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(width, height))
}

use slider_math::clamp01;

/// 0-1 device RGBA color with unmultiplied alpha.
///
/// All blending operations clamp every output channel into `0..=1`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Rgba(pub(crate) [f32; 4]);

impl std::ops::Index<usize> for Rgba {
    type Output = f32;

    #[inline(always)]
    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

#[inline(always)]
pub(crate) fn f32_hash<H: std::hash::Hasher>(state: &mut H, f: f32) {
    if f == 0.0 {
        state.write_u8(0);
    } else if f.is_nan() {
        state.write_u8(1);
    } else {
        use std::hash::Hash as _;
        f.to_bits().hash(state);
    }
}

impl std::hash::Hash for Rgba {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for channel in self.0 {
            f32_hash(state, channel);
        }
    }
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::from_rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const DARK_GRAY: Self = Self::from_gray(1.0 / 3.0);
    pub const GRAY: Self = Self::from_gray(0.5);
    pub const LIGHT_GRAY: Self = Self::from_gray(2.0 / 3.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);

    #[inline(always)]
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    #[inline(always)]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    #[inline(always)]
    pub const fn from_gray(l: f32) -> Self {
        Self([l, l, l, 1.0])
    }

    #[inline(always)]
    pub fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn b(&self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn a(&self) -> f32 {
        self.0[3]
    }

    #[inline(always)]
    pub fn to_array(&self) -> [f32; 4] {
        self.0
    }

    /// Every channel clamped into `0..=1`. NaN becomes `0`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self(self.0.map(clamp01))
    }

    /// Same color, with the alpha replaced.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let [r, g, b, _] = self.0;
        Self([r, g, b, clamp01(alpha)])
    }

    /// Linear blend of every channel, alpha included.
    ///
    /// `ratio == 0` returns `self` and `ratio == 1` returns `other`, exactly.
    pub fn blend(self, other: Self, ratio: f32) -> Self {
        let inverse = 1.0 - ratio;
        Self(std::array::from_fn(|i| {
            clamp01(other.0[i] * ratio + self.0[i] * inverse)
        }))
    }

    /// Equal parts of `self` and `other`.
    #[inline]
    pub fn blend_half(self, other: Self) -> Self {
        self.blend(other, 0.5)
    }

    /// Subtract the same flat `amount` from red, green and blue.
    /// Alpha is unchanged.
    pub fn darken(self, amount: f32) -> Self {
        self.shift_rgb(-amount)
    }

    /// Add the same flat `amount` to red, green and blue.
    /// Alpha is unchanged.
    pub fn brighten(self, amount: f32) -> Self {
        self.shift_rgb(amount)
    }

    fn shift_rgb(self, delta: f32) -> Self {
        let [r, g, b, a] = self.0;
        Self([
            clamp01(r + delta),
            clamp01(g + delta),
            clamp01(b + delta),
            a,
        ])
    }

    /// The photographic negative: each of red, green and blue becomes `1 - value`.
    /// Alpha is unchanged.
    pub fn invert(self) -> Self {
        let [r, g, b, a] = self.0;
        Self([clamp01(1.0 - r), clamp01(1.0 - g), clamp01(1.0 - b), a])
    }
}

/// Free function version of [`Rgba::blend`].
#[inline]
pub fn blend(a: Rgba, b: Rgba, ratio: f32) -> Rgba {
    a.blend(b, ratio)
}

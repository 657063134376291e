use crate::Rgba;

/// Space-efficient color representation (32 bits), e.g. for theme files.
///
/// Instead of blending this directly, convert it to [`Rgba`] first.
///
/// Internally this is 0-255 device RGBA with unmultiplied alpha.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Color32(pub(crate) [u8; 4]);

impl Color32 {
    pub const TRANSPARENT: Self = Self::from_rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const DARK_GRAY: Self = Self::from_rgb(85, 85, 85);
    pub const LIGHT_GRAY: Self = Self::from_rgb(170, 170, 170);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);

    #[inline(always)]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    #[inline(always)]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    #[inline(always)]
    pub const fn from_gray(l: u8) -> Self {
        Self([l, l, l, 255])
    }

    #[inline(always)]
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    #[inline(always)]
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    #[inline(always)]
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    #[inline(always)]
    pub const fn a(&self) -> u8 {
        self.0[3]
    }

    #[inline(always)]
    pub const fn to_array(&self) -> [u8; 4] {
        self.0
    }

    #[inline]
    pub fn to_rgba(self) -> Rgba {
        self.into()
    }
}

#[test]
fn test_named_grays_match_rgba() {
    assert_eq!(Color32::from(Rgba::DARK_GRAY), Color32::DARK_GRAY);
    assert_eq!(Color32::from(Rgba::LIGHT_GRAY), Color32::LIGHT_GRAY);
    assert_eq!(Rgba::from(Color32::WHITE), Rgba::WHITE);
}

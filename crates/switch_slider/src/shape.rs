//! Paint primitives produced by the slider.
//!
//! These are deliberately simple: the host maps each variant onto its own
//! painter (an egui `Painter`, a canvas, a GPU batch, ...).

use slider_color::Rgba;
use slider_math::{Pos2, Rect};

use crate::FontId;

/// A filled rectangle with rounded corners.
#[derive(Clone, Debug, PartialEq)]
pub struct RectShape {
    pub rect: Rect,
    pub corner_radius: f32,
    pub fill: Rgba,
}

/// A filled circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleShape {
    pub center: Pos2,
    pub radius: f32,
    pub fill: Rgba,
}

/// A single line of text, left-top anchored at `pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    pub pos: Pos2,
    pub text: String,
    pub font: FontId,
    pub color: Rgba,

    /// Only the part of the text inside this rect should be visible.
    pub clip_rect: Rect,
}

/// An image registered with the host under `id`, stretched to `rect`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageShape {
    pub id: u64,
    pub rect: Rect,
}

/// A paint command, in back-to-front order when in a list.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(RectShape),
    Circle(CircleShape),
    Text(TextShape),
    Image(ImageShape),
}

impl From<RectShape> for Shape {
    #[inline]
    fn from(shape: RectShape) -> Self {
        Self::Rect(shape)
    }
}

impl From<CircleShape> for Shape {
    #[inline]
    fn from(shape: CircleShape) -> Self {
        Self::Circle(shape)
    }
}

impl From<TextShape> for Shape {
    #[inline]
    fn from(shape: TextShape) -> Self {
        Self::Text(shape)
    }
}

impl From<ImageShape> for Shape {
    #[inline]
    fn from(shape: ImageShape) -> Self {
        Self::Image(shape)
    }
}

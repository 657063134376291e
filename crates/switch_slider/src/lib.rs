//! `switch_slider`: a "slide to confirm" control.
//!
//! A round button rides along a capsule track. The user drags it from the
//! leading end to the trailing end; letting go before the end springs it back.
//! Right-to-left layouts mirror the whole control.
//!
//! The widget does not own a window, a render loop or a text engine.
//! The host feeds it pointer positions and the current time, and gets back a
//! [`Response`] describing what changed plus a list of [`Shape`]s to paint.
//!
//! ```
//! use switch_slider::{Direction, SwitchSlider, SwitchSliderStyle};
//! use switch_slider::math::{pos2, rect_from_size, vec2};
//!
//! let measure = |text: &str, font: &switch_slider::FontId| {
//!     vec2(0.5 * font.size * text.len() as f32, font.size)
//! };
//!
//! let mut slider = SwitchSlider::new(SwitchSliderStyle::default(), Direction::LeftToRight);
//! slider.set_rect(rect_from_size(200.0, 40.0));
//!
//! assert!(slider.pointer_down(pos2(20.0, 20.0), 0.0).drag_started());
//! assert!(slider.pointer_move(pos2(100.0, 20.0)).changed());
//! assert_eq!(slider.progress(), 0.5);
//!
//! // Let go half way: the button springs back over a quarter of a second.
//! let _ = slider.pointer_up(1.0);
//! let _ = slider.update(1.25);
//! assert_eq!(slider.progress(), 0.0);
//!
//! let shapes = slider.shapes(&measure);
//! assert!(!shapes.is_empty());
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod animation;
mod paint;
mod response;
mod shape;
mod slider;
mod style;
mod text;

pub use slider_color as color;
pub use slider_math as math;

pub use slider_math::Direction;

pub use self::{
    animation::{AnimationState, Ease, ProgressAnimation},
    paint::{paint, paint_role, SliderFrame, VisualRole},
    response::Response,
    shape::{CircleShape, ImageShape, RectShape, Shape, TextShape},
    slider::{SwitchSlider, RELEASE_SECONDS_PER_TRACK},
    style::{FontFamily, FontId, ImageSource, StyleError, SwitchSliderStyle},
    text::{intrinsic_size, TextMeasure},
};

use slider_math::{vec2, NumExt as _, Vec2};

use crate::{FontId, SwitchSliderStyle};

/// The smallest button diameter the slider asks for.
const MIN_BUTTON_DIAMETER: f32 = 22.0;

/// The host's text layout service.
///
/// The slider never shapes text itself; it only needs the size a single
/// line of `text` would occupy in `font`. Any `Fn(&str, &FontId) -> Vec2`
/// closure works.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontId) -> Vec2;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &FontId) -> Vec2,
{
    #[inline]
    fn measure(&self, text: &str, font: &FontId) -> Vec2 {
        self(text, font)
    }
}

/// The size a slider with this style would like to be.
///
/// The button grows to fit the image (with some padding) and the label's
/// line height. Without a label the track reserves room for three buttons.
pub fn intrinsic_size(style: &SwitchSliderStyle, measure: &dyn TextMeasure) -> Vec2 {
    let mut diameter = MIN_BUTTON_DIAMETER;
    if let Some(image) = &style.image {
        diameter = diameter.at_least(image.size.max_elem() * 1.5);
    }

    let mut text_width = diameter * 3.0;
    if let Some(text) = &style.text {
        let size = measure.measure(text, &style.text_font);
        diameter = diameter.at_least(size.y);
        text_width = size.x;
    }

    let gap = style.track_gap;
    vec2(text_width + diameter + 3.0 * gap, diameter + 2.0 * gap)
}

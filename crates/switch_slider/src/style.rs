//! How a [`crate::SwitchSlider`] looks.

use slider_color::{ColorBand, Rgba};
use slider_math::Vec2;

/// Something that went wrong while loading or saving a [`SwitchSliderStyle`].
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[cfg(feature = "serde")]
    #[error("failed to parse slider style: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[cfg(feature = "serde")]
    #[error("failed to serialize slider style: {0}")]
    Serialize(#[from] ron::Error),

    #[error("track gap must be finite and non-negative, got {0}")]
    InvalidGap(f32),

    #[error("font size must be finite and positive, got {0}")]
    InvalidFontSize(f32),
}

/// Font family of the label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum FontFamily {
    #[default]
    Proportional,

    Monospace,

    /// A font the host knows by this name.
    Name(String),
}

/// How to select a font for the label. The host resolves it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct FontId {
    /// Height in points.
    pub size: f32,

    pub family: FontFamily,
}

impl Default for FontId {
    #[inline]
    fn default() -> Self {
        Self::proportional(24.0)
    }
}

impl FontId {
    #[inline]
    pub fn new(size: f32, family: FontFamily) -> Self {
        Self { size, family }
    }

    #[inline]
    pub fn proportional(size: f32) -> Self {
        Self::new(size, FontFamily::Proportional)
    }

    #[inline]
    pub fn monospace(size: f32) -> Self {
        Self::new(size, FontFamily::Monospace)
    }
}

/// An image drawn on the button. The pixels live in the host, under `id`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ImageSource {
    pub id: u64,

    /// Natural size of the image, in points.
    pub size: Vec2,
}

/// Colors, label and spacing of a switch slider.
///
/// With the `serde` feature this can be stored as RON, with colors written as
/// hex strings:
///
/// ```
/// # #[cfg(feature = "serde")] {
/// use switch_slider::SwitchSliderStyle;
///
/// let style = SwitchSliderStyle::from_ron(r##"(
///     track_color: "#2e7d32",
///     text: Some("Slide to unlock"),
///     track_gap: 4.0,
/// )"##).unwrap();
/// assert_eq!(style.track_gap, 4.0);
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwitchSliderStyle {
    /// Drawn centred on the button.
    pub image: Option<ImageSource>,

    #[cfg_attr(feature = "serde", serde(with = "slider_color::hex_serde"))]
    pub button_color: Rgba,

    #[cfg_attr(feature = "serde", serde(with = "slider_color::hex_serde"))]
    pub track_color: Rgba,

    #[cfg_attr(feature = "serde", serde(with = "slider_color::hex_serde"))]
    pub text_color: Rgba,

    /// Label shown on the track, covered by the button as it moves.
    pub text: Option<String>,

    pub text_font: FontId,

    /// Inset between the button and the edge of the track.
    pub track_gap: f32,

    /// Scale the track fill's alpha by [`slider_math::TrackGeometry::fill_opacity`].
    ///
    /// Off by default: the fill is painted with the plain track color.
    pub fade_track: bool,

    /// If set, the track is tinted by this band, sampled at how far the
    /// button has travelled. Overrides `track_color`.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub track_band: Option<ColorBand>,

    /// Like `track_band`, for the button. Overrides `button_color`.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub button_band: Option<ColorBand>,
}

impl Default for SwitchSliderStyle {
    fn default() -> Self {
        Self {
            image: None,
            button_color: Rgba::WHITE,
            track_color: Rgba::DARK_GRAY,
            text_color: Rgba::LIGHT_GRAY,
            text: None,
            text_font: FontId::default(),
            track_gap: 8.0,
            fade_track: false,
            track_band: None,
            button_band: None,
        }
    }
}

impl SwitchSliderStyle {
    /// Check the values that geometry can't clamp its way out of.
    pub fn validate(&self) -> Result<(), StyleError> {
        if !(self.track_gap.is_finite() && 0.0 <= self.track_gap) {
            return Err(StyleError::InvalidGap(self.track_gap));
        }
        let font_size = self.text_font.size;
        if !(font_size.is_finite() && 0.0 < font_size) {
            return Err(StyleError::InvalidFontSize(font_size));
        }
        Ok(())
    }

    /// Track color at `travel` (`0` at the start, `1` when completed).
    pub fn track_color_at(&self, travel: f32) -> Rgba {
        self.track_band
            .as_ref()
            .map_or(self.track_color, |band| band.color_at(travel))
    }

    /// Button color at `travel` (`0` at the start, `1` when completed).
    pub fn button_color_at(&self, travel: f32) -> Rgba {
        self.button_band
            .as_ref()
            .map_or(self.button_color, |band| band.color_at(travel))
    }

    /// Parse and validate a style from RON. Missing fields take their default.
    #[cfg(feature = "serde")]
    pub fn from_ron(ron: &str) -> Result<Self, StyleError> {
        let style: Self = ron::from_str(ron)?;
        style.validate()?;
        Ok(style)
    }

    /// Write the style as pretty-printed RON. Color bands are not included.
    #[cfg(feature = "serde")]
    pub fn to_ron(&self) -> Result<String, StyleError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SwitchSliderStyle::default().validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let style = SwitchSliderStyle {
            track_gap: -1.0,
            ..Default::default()
        };
        assert!(matches!(style.validate(), Err(StyleError::InvalidGap(_))));

        let style = SwitchSliderStyle {
            text_font: FontId::proportional(0.0),
            ..Default::default()
        };
        assert!(matches!(
            style.validate(),
            Err(StyleError::InvalidFontSize(_))
        ));
    }

    #[test]
    fn test_band_overrides_color() {
        let style = SwitchSliderStyle {
            track_band: Some(
                ColorBand::builder()
                    .add(Rgba::RED, 0.0)
                    .add(Rgba::BLUE, 1.0)
                    .build(),
            ),
            ..Default::default()
        };
        assert_eq!(style.track_color_at(0.0), Rgba::RED);
        assert_eq!(style.track_color_at(1.0), Rgba::BLUE);
        assert_eq!(style.button_color_at(0.5), Rgba::WHITE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_ron_round_trip() {
        let style = SwitchSliderStyle {
            text: Some("Slide to pay".to_owned()),
            text_font: FontId::monospace(18.0),
            button_color: Rgba::RED,
            image: Some(ImageSource {
                id: 7,
                size: slider_math::vec2(16.0, 16.0),
            }),
            ..Default::default()
        };
        let ron = style.to_ron().unwrap();
        let parsed = SwitchSliderStyle::from_ron(&ron).unwrap();
        assert_eq!(parsed.text, style.text);
        assert_eq!(parsed.text_font, style.text_font);
        assert_eq!(parsed.button_color, Rgba::RED);
        assert_eq!(parsed.image, style.image);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_ron_errors() {
        assert!(matches!(
            SwitchSliderStyle::from_ron("(track_gap: -2.0)"),
            Err(StyleError::InvalidGap(gap)) if gap == -2.0
        ));
        assert!(matches!(
            SwitchSliderStyle::from_ron(r#"(track_color: "not a color")"#),
            Err(StyleError::Parse(_))
        ));
        assert!(matches!(
            SwitchSliderStyle::from_ron("(track_gap: "),
            Err(StyleError::Parse(_))
        ));
        assert!(matches!(
            SwitchSliderStyle::from_ron(r##"(track_color: "#+fffffff")"##),
            Err(StyleError::Parse(_))
        ));
    }
}

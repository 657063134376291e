use slider_math::bracket;

use crate::Rgba;

/// A color at a location in `0..=1` of a [`ColorBand`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBandEntry {
    pub color: Rgba,
    pub location: f32,
}

impl ColorBandEntry {
    #[inline]
    pub fn new(color: Rgba, location: f32) -> Self {
        crate::slider_color_assert!(location.is_finite(), "color band location: {location}");
        Self { color, location }
    }
}

/// Collects entries for a [`ColorBand`].
///
/// ```
/// # use slider_color::{ColorBand, Rgba};
/// let band = ColorBand::builder()
///     .add(Rgba::BLUE, 1.0)
///     .add(Rgba::RED, 0.0)
///     .build();
/// assert_eq!(band.color_at(0.0), Rgba::RED);
/// assert_eq!(band.color_at(1.0), Rgba::BLUE);
/// ```
#[derive(Clone, Debug, Default)]
#[must_use = "Call `.build()` to get a ColorBand"]
pub struct ColorBandBuilder {
    entries: Vec<ColorBandEntry>,
}

impl ColorBandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, color: Rgba, at: f32) -> Self {
        self.entries.push(ColorBandEntry::new(color, at));
        self
    }

    pub fn build(self) -> ColorBand {
        ColorBand::new(self.entries)
    }
}

/// A group of colors at locations over `0..=1` that can be sampled at any
/// point in between: a piecewise-linear gradient.
///
/// Entries are sorted by location once, on construction, and never change
/// afterwards. Entries that share a location keep the order they were given in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorBand {
    entries: Vec<ColorBandEntry>,
}

impl ColorBand {
    pub fn new(mut entries: Vec<ColorBandEntry>) -> Self {
        // Stable sort: ties keep their insertion order.
        entries.sort_by(|a, b| a.location.total_cmp(&b.location));
        Self { entries }
    }

    pub fn builder() -> ColorBandBuilder {
        ColorBandBuilder::new()
    }

    /// Pair up colors with locations.
    /// If the two have different lengths, the surplus is ignored.
    pub fn from_colors_and_locations(
        colors: impl IntoIterator<Item = Rgba>,
        locations: impl IntoIterator<Item = f32>,
    ) -> Self {
        Self::new(
            colors
                .into_iter()
                .zip(locations)
                .map(|(color, location)| ColorBandEntry::new(color, location))
                .collect(),
        )
    }

    /// Sorted by ascending location.
    #[inline]
    pub fn entries(&self) -> &[ColorBandEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The color at `progress`.
    ///
    /// * No entries: black.
    /// * One entry: that color, whatever the progress.
    /// * Otherwise the two entries that bracket `progress` are blended
    ///   linearly, channel by channel. Progress before the first or after
    ///   the last entry extrapolates the end pair, with every channel
    ///   clamped into `0..=1`.
    pub fn color_at(&self, progress: f32) -> Rgba {
        match self.entries.as_slice() {
            [] => Rgba::BLACK,
            [only] => only.color,
            entries => {
                let Some((lo, hi)) = bracket(entries.iter().map(|e| e.location), progress) else {
                    return Rgba::BLACK;
                };
                let (from, to) = (entries[lo], entries[hi]);
                let span = to.location - from.location;
                if span <= 0.0 {
                    return to.color;
                }
                let weight = (progress - from.location) / span;
                from.color.blend(to.color, weight)
            }
        }
    }
}

impl FromIterator<ColorBandEntry> for ColorBand {
    fn from_iter<T: IntoIterator<Item = ColorBandEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Rgba, b: Rgba) {
        for i in 0..4 {
            assert!((a[i] - b[i]).abs() < 1e-6, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_empty_band_is_black() {
        let band = ColorBand::default();
        assert!(band.is_empty());
        assert_eq!(band.color_at(0.0), Rgba::BLACK);
        assert_eq!(band.color_at(0.7), Rgba::BLACK);
    }

    #[test]
    fn test_single_entry_is_constant() {
        let band = ColorBand::builder().add(Rgba::GREEN, 0.3).build();
        for p in [0.0, 0.3, 1.0, -4.0, 9.0] {
            assert_eq!(band.color_at(p), Rgba::GREEN);
        }
    }

    #[test]
    fn test_two_entries_blend() {
        let band = ColorBand::builder()
            .add(Rgba::RED, 0.0)
            .add(Rgba::BLUE, 1.0)
            .build();
        assert_eq!(band.color_at(0.0), Rgba::RED);
        assert_eq!(band.color_at(1.0), Rgba::BLUE);
        assert_close(band.color_at(0.5), Rgba::RED.blend_half(Rgba::BLUE));
        assert_close(band.color_at(0.5), Rgba::from_rgb(0.5, 0.0, 0.5));
        assert_close(band.color_at(0.25), Rgba::from_rgb(0.75, 0.0, 0.25));
    }

    #[test]
    fn test_entries_are_sorted() {
        let band = ColorBand::from_colors_and_locations(
            [Rgba::BLUE, Rgba::RED, Rgba::GREEN],
            [1.0, 0.0, 0.5],
        );
        let locations: Vec<f32> = band.entries().iter().map(|e| e.location).collect();
        assert_eq!(locations, [0.0, 0.5, 1.0]);
        assert_eq!(band.color_at(0.0), Rgba::RED);
        assert_eq!(band.color_at(0.5), Rgba::GREEN);
        assert_eq!(band.color_at(1.0), Rgba::BLUE);
        assert_close(band.color_at(0.75), Rgba::from_rgb(0.0, 0.5, 0.5));
    }

    #[test]
    fn test_mismatched_lengths_are_truncated() {
        let band = ColorBand::from_colors_and_locations([Rgba::RED, Rgba::BLUE], [0.0]);
        assert_eq!(band.len(), 1);
    }

    #[test]
    fn test_outside_of_band_extrapolates() {
        let band = ColorBand::builder()
            .add(Rgba::from_gray(0.2), 0.2)
            .add(Rgba::from_gray(0.8), 0.8)
            .build();
        assert_close(band.color_at(0.0), Rgba::from_gray(0.0));
        assert_close(band.color_at(0.1), Rgba::from_gray(0.1));
        assert_close(band.color_at(0.9), Rgba::from_gray(0.9));
        assert_close(band.color_at(1.5), Rgba::WHITE);
    }

    #[test]
    fn test_outside_of_band_saturates() {
        let band = ColorBand::builder()
            .add(Rgba::RED, 0.2)
            .add(Rgba::BLUE, 0.8)
            .build();
        assert_eq!(band.color_at(0.0), Rgba::RED);
        assert_eq!(band.color_at(1.0), Rgba::BLUE);
    }

    #[test]
    fn test_coincident_locations() {
        // A hard edge: black up to the middle, then white.
        let band = ColorBand::builder()
            .add(Rgba::BLACK, 0.0)
            .add(Rgba::BLACK, 0.5)
            .add(Rgba::WHITE, 0.5)
            .add(Rgba::WHITE, 1.0)
            .build();
        assert_eq!(band.entries()[1].color, Rgba::BLACK);
        assert_eq!(band.entries()[2].color, Rgba::WHITE);
        assert_eq!(band.color_at(0.25), Rgba::BLACK);
        assert_eq!(band.color_at(0.5), Rgba::WHITE);
        assert_eq!(band.color_at(0.75), Rgba::WHITE);

        let band = ColorBand::builder()
            .add(Rgba::RED, 0.5)
            .add(Rgba::BLUE, 0.5)
            .build();
        assert_eq!(band.color_at(0.5), Rgba::BLUE);
    }
}

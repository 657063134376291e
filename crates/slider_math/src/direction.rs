/// Horizontal layout direction of a slider.
///
/// The direction is captured once, when a slider is created, and passed
/// explicitly to every piece of geometry that mirrors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Progress of a freshly created slider: the button starts at the
    /// leading edge, which is the right end of the track in RTL.
    #[inline]
    pub fn initial_progress(self) -> f32 {
        match self {
            Self::LeftToRight => 0.0,
            Self::RightToLeft => 1.0,
        }
    }

    /// Converts between track progress and how far the button has travelled
    /// towards the trailing edge. The mapping is its own inverse.
    #[inline]
    pub fn mirror(self, progress: f32) -> f32 {
        match self {
            Self::LeftToRight => progress,
            Self::RightToLeft => 1.0 - progress,
        }
    }
}

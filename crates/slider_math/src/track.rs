//! The progress model of a switch slider.
//!
//! A track is a capsule of `width × height`. A round button of diameter
//! `height - gap` sits inside it, inset by half the gap on every side.
//! Dragging the button moves its progress from `0` (leading end) to `1`
//! (trailing end).
//!
//! All functions here are total: degenerate input (zero-size tracks, tracks
//! too narrow for the button, progress outside `0..=1`) produces clamped,
//! well-defined output instead of an error.

use crate::{clamp01, pos2, vec2, Direction, NumExt as _, Pos2, Rect};

/// The horizontal span over which a touch maps onto progress.
///
/// All values are relative to the left edge of the track.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TrackRanges {
    /// Touch x at progress `0`.
    pub min: f32,

    /// Touch x at progress `1`.
    pub max: f32,

    /// `max - min`. Zero or negative when the track is too small to drag in.
    pub drag: f32,
}

impl TrackRanges {
    /// Can the button move at all?
    #[inline]
    pub fn can_drag(&self) -> bool {
        self.drag > 0.0
    }

    /// See [`progress_for_touch`].
    #[inline]
    pub fn progress_for_touch(&self, touch_x: f32) -> f32 {
        progress_for_touch(touch_x, self)
    }

    /// See [`touch_x_for_progress`].
    #[inline]
    pub fn touch_x_for_progress(&self, progress: f32) -> f32 {
        touch_x_for_progress(progress, self)
    }
}

/// Diameter of the button for a track of this height.
#[inline]
pub fn button_diameter(track_height: f32, gap: f32) -> f32 {
    track_height - gap
}

/// Compute the drag ranges of a track.
///
/// `min = (button_diameter + gap) / 2`, `max = width - min`.
pub fn compute_ranges(track: Rect, gap: f32) -> TrackRanges {
    crate::slider_math_assert!(track.height() > 0.0, "track height: {}", track.height());
    crate::slider_math_assert!(gap >= 0.0, "gap: {gap}");

    let diameter = button_diameter(track.height(), gap);
    let min = (diameter + gap) / 2.0;
    let max = track.width() - min;
    TrackRanges {
        min,
        max,
        drag: max - min,
    }
}

/// Map a touch x coordinate (relative to the track's left edge) to progress.
///
/// The touch is clamped to the drag range first, so anything outside it
/// yields exactly `0` or `1`. Returns `0` when the track cannot be dragged.
pub fn progress_for_touch(touch_x: f32, ranges: &TrackRanges) -> f32 {
    if !ranges.can_drag() {
        return 0.0;
    }
    let x = touch_x.at_least(ranges.min).at_most(ranges.max) - ranges.min;
    clamp01(x / ranges.drag)
}

/// The touch x coordinate that maps to `progress`; the inverse of
/// [`progress_for_touch`] on `0..=1`.
pub fn touch_x_for_progress(progress: f32, ranges: &TrackRanges) -> f32 {
    ranges.min + ranges.drag.at_least(0.0) * clamp01(progress)
}

/// Top left corner of the button, relative to the track origin.
///
/// This does not mirror: in RTL the caller inverts progress instead,
/// so there is a single formula for the button.
#[inline]
pub fn button_origin(progress: f32, drag_range: f32, gap: f32) -> Pos2 {
    let inset = gap / 2.0;
    pos2(drag_range.at_least(0.0) * progress + inset, inset)
}

/// The button's square bounds, in the same space as `track`.
pub fn button_rect(progress: f32, track: Rect, gap: f32) -> Rect {
    let ranges = compute_ranges(track, gap);
    let diameter = button_diameter(track.height(), gap).at_least(0.0);
    let origin = track.min + button_origin(clamp01(progress), ranges.drag, gap).to_vec2();
    Rect::from_min_size(origin, vec2(diameter, diameter))
}

/// The part of the track painted with the track color.
///
/// Left-to-right reveals the fill growing from the right edge as the button
/// moves right. Right-to-left always starts the fill at the left edge and
/// scales its extent by progress. These are two distinct formulas, not a
/// reflection of one.
pub fn track_fill_rect(
    progress: f32,
    track: Rect,
    corner_radius: f32,
    direction: Direction,
) -> Rect {
    let progress = clamp01(progress);
    let span = (track.width() - 2.0 * corner_radius).at_least(0.0);
    let (x, width) = match direction {
        Direction::LeftToRight => {
            let x = span * progress;
            (x, span - x + 2.0 * corner_radius)
        }
        Direction::RightToLeft => (0.0, span * progress + 2.0 * corner_radius),
    };
    Rect::from_min_size(
        pos2(track.min.x + x, track.min.y),
        vec2(width.at_most(track.width()).at_least(0.0), track.height()),
    )
}

/// Opacity of the track fill.
///
/// Right-to-left returns `progress`. Left-to-right returns `progress - 1`,
/// which is negative for every progress below `1`: callers clamp it into
/// `0..=1` before use, so the left-to-right fill only shows at the end of
/// the track.
#[inline]
pub fn fill_alpha(progress: f32, direction: Direction) -> f32 {
    match direction {
        Direction::LeftToRight => progress - 1.0,
        Direction::RightToLeft => progress,
    }
}

/// The region in which the label is visible: the part of the fill that
/// the button has not yet uncovered, with the rounded cap excluded.
pub fn text_clip_rect(
    progress: f32,
    track: Rect,
    corner_radius: f32,
    direction: Direction,
) -> Rect {
    let progress = clamp01(progress);
    let span = (track.width() - 2.0 * corner_radius).at_least(0.0);
    let (x, width) = match direction {
        Direction::LeftToRight => (span * progress, span),
        Direction::RightToLeft => (0.0, span * progress),
    };
    Rect::from_min_size(
        pos2(track.min.x + x + corner_radius, track.min.y),
        vec2(width, track.height()),
    )
    .intersect(track)
}

/// Where a label of `text_size` starts, vertically centred on the track.
///
/// Left-to-right anchors the label against the trailing (right) cap,
/// right-to-left against the leading (left) cap.
pub fn text_anchor(
    text_size: crate::Vec2,
    track: Rect,
    corner_radius: f32,
    direction: Direction,
) -> Pos2 {
    let x = match direction {
        Direction::LeftToRight => track.width() - text_size.x - corner_radius,
        Direction::RightToLeft => corner_radius,
    };
    pos2(
        track.min.x + x,
        track.center().y - text_size.y / 2.0,
    )
}

// ----------------------------------------------------------------------------

/// Track bounds plus the inset of the button, with the derived geometry as methods.
///
/// This is cheap to construct and is meant to be rebuilt whenever
/// the track is laid out, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    pub track: Rect,
    pub gap: f32,
    pub direction: Direction,
}

impl TrackGeometry {
    pub fn new(track: Rect, gap: f32, direction: Direction) -> Self {
        Self {
            track,
            gap,
            direction,
        }
    }

    /// Half the track height: the capsule's end caps are half circles.
    #[inline]
    pub fn corner_radius(&self) -> f32 {
        (self.track.height() / 2.0).at_least(0.0)
    }

    #[inline]
    pub fn button_diameter(&self) -> f32 {
        button_diameter(self.track.height(), self.gap)
    }

    #[inline]
    pub fn ranges(&self) -> TrackRanges {
        compute_ranges(self.track, self.gap)
    }

    /// Progress for a pointer in the same space as the track.
    pub fn progress_for_pointer(&self, pointer: Pos2) -> f32 {
        self.ranges().progress_for_touch(pointer.x - self.track.min.x)
    }

    pub fn button_rect(&self, progress: f32) -> Rect {
        button_rect(progress, self.track, self.gap)
    }

    pub fn fill_rect(&self, progress: f32) -> Rect {
        track_fill_rect(progress, self.track, self.corner_radius(), self.direction)
    }

    /// Clamped opacity of the fill, ready to be used as an alpha.
    pub fn fill_opacity(&self, progress: f32) -> f32 {
        clamp01(fill_alpha(progress, self.direction))
    }

    pub fn text_clip_rect(&self, progress: f32) -> Rect {
        text_clip_rect(progress, self.track, self.corner_radius(), self.direction)
    }

    pub fn text_anchor(&self, text_size: crate::Vec2) -> Pos2 {
        text_anchor(text_size, self.track, self.corner_radius(), self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{almost_equal, rect_from_size};

    fn track_200x40() -> Rect {
        rect_from_size(200.0, 40.0)
    }

    #[test]
    fn test_ranges_for_standard_track() {
        let ranges = compute_ranges(track_200x40(), 8.0);
        assert_eq!(button_diameter(40.0, 8.0), 32.0);
        assert_eq!(ranges.min, 20.0);
        assert_eq!(ranges.max, 180.0);
        assert_eq!(ranges.drag, 160.0);
        assert_eq!(progress_for_touch(100.0, &ranges), 0.5);
    }

    #[test]
    fn test_touch_outside_range_is_clamped() {
        let ranges = compute_ranges(track_200x40(), 8.0);
        for x in [-1000.0, -1.0, 0.0, 19.0, 20.0] {
            assert_eq!(progress_for_touch(x, &ranges), 0.0, "x = {x}");
        }
        for x in [180.0, 181.0, 200.0, 1e9] {
            assert_eq!(progress_for_touch(x, &ranges), 1.0, "x = {x}");
        }
    }

    #[test]
    fn test_round_trip() {
        let ranges = compute_ranges(track_200x40(), 8.0);
        for i in 0..=100 {
            let p = i as f32 / 100.0;
            let back = progress_for_touch(touch_x_for_progress(p, &ranges), &ranges);
            assert!(almost_equal(back, p, 1e-5), "{p} -> {back}");

            let origin = button_origin(p, ranges.drag, 8.0);
            let from_button = (origin.x - 4.0) / ranges.drag;
            assert!(almost_equal(from_button, p, 1e-5), "{p} -> {from_button}");
        }
    }

    #[test]
    fn test_mapping_is_monotonic() {
        let ranges = compute_ranges(track_200x40(), 8.0);
        let mut last = -1.0;
        for x in 0..=200 {
            let p = progress_for_touch(x as f32, &ranges);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_degenerate_track_cannot_drag() {
        // Narrower than the button:
        let ranges = compute_ranges(rect_from_size(30.0, 40.0), 8.0);
        assert!(!ranges.can_drag());
        assert!(ranges.drag < 0.0);
        assert_eq!(progress_for_touch(15.0, &ranges), 0.0);
        assert_eq!(progress_for_touch(1e6, &ranges), 0.0);

        // Exactly the size of the button:
        let ranges = compute_ranges(rect_from_size(40.0, 40.0), 8.0);
        assert_eq!(ranges.drag, 0.0);
        assert_eq!(progress_for_touch(20.0, &ranges), 0.0);

        // The button never moves backwards out of the track.
        assert_eq!(button_origin(1.0, -10.0, 8.0), pos2(4.0, 4.0));

        let zero = compute_ranges(Rect::ZERO, 0.0);
        assert_eq!(progress_for_touch(0.0, &zero), 0.0);
    }

    #[test]
    fn test_button_rect() {
        let track = track_200x40().translate(vec2(10.0, 5.0));
        let rect = button_rect(0.0, track, 8.0);
        assert_eq!(rect.min, pos2(14.0, 9.0));
        assert_eq!(rect.size(), vec2(32.0, 32.0));

        let rect = button_rect(1.0, track, 8.0);
        assert_eq!(rect.min.x, 10.0 + 160.0 + 4.0);
        assert_eq!(rect.right(), track.right() - 4.0);
        assert_eq!(rect.bottom(), track.bottom() - 4.0);
    }

    #[test]
    fn test_fill_rect_ltr() {
        let track = track_200x40();
        let r = 20.0;
        let at_start = track_fill_rect(0.0, track, r, Direction::LeftToRight);
        assert_eq!(at_start, track);

        let half = track_fill_rect(0.5, track, r, Direction::LeftToRight);
        assert_eq!(half.left(), 80.0);
        assert_eq!(half.right(), 200.0);

        let at_end = track_fill_rect(1.0, track, r, Direction::LeftToRight);
        assert_eq!(at_end.left(), 160.0);
        assert_eq!(at_end.width(), 40.0);
    }

    #[test]
    fn test_fill_rect_rtl() {
        let track = track_200x40();
        let r = 20.0;
        let at_start = track_fill_rect(1.0, track, r, Direction::RightToLeft);
        assert_eq!(at_start, track);

        let half = track_fill_rect(0.5, track, r, Direction::RightToLeft);
        assert_eq!(half.left(), 0.0);
        assert_eq!(half.right(), 120.0);

        let at_end = track_fill_rect(0.0, track, r, Direction::RightToLeft);
        assert_eq!(at_end.left(), 0.0);
        assert_eq!(at_end.width(), 40.0);
    }

    #[test]
    fn test_fill_rect_oversized_radius() {
        let track = rect_from_size(30.0, 40.0);
        let fill = track_fill_rect(0.5, track, 20.0, Direction::LeftToRight);
        assert!(fill.is_non_negative());
        assert!(fill.width() <= track.width());
    }

    #[test]
    fn test_fill_alpha() {
        assert_eq!(fill_alpha(0.25, Direction::RightToLeft), 0.25);
        assert_eq!(fill_alpha(1.0, Direction::LeftToRight), 0.0);
        assert_eq!(fill_alpha(0.25, Direction::LeftToRight), -0.75);

        let geometry = TrackGeometry::new(track_200x40(), 8.0, Direction::LeftToRight);
        assert_eq!(geometry.fill_opacity(0.25), 0.0);
    }

    #[test]
    fn test_text_placement() {
        let track = track_200x40();
        let size = vec2(50.0, 10.0);

        let ltr = text_anchor(size, track, 20.0, Direction::LeftToRight);
        assert_eq!(ltr, pos2(130.0, 15.0));

        let rtl = text_anchor(size, track, 20.0, Direction::RightToLeft);
        assert_eq!(rtl, pos2(20.0, 15.0));

        let clip = text_clip_rect(0.5, track, 20.0, Direction::LeftToRight);
        assert_eq!(clip.left(), 100.0);
        assert_eq!(clip.right(), 200.0);

        let clip = text_clip_rect(0.5, track, 20.0, Direction::RightToLeft);
        assert_eq!(clip.left(), 20.0);
        assert_eq!(clip.right(), 100.0);
    }

    #[test]
    fn test_geometry_pointer_is_track_relative() {
        let track = track_200x40().translate(vec2(50.0, 0.0));
        let geometry = TrackGeometry::new(track, 8.0, Direction::LeftToRight);
        assert_eq!(geometry.progress_for_pointer(pos2(150.0, 20.0)), 0.5);
        assert_eq!(geometry.corner_radius(), 20.0);
    }
}
